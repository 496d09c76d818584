//! Canonical query serialization used as signing input.

use std::borrow::Cow;
use std::collections::BTreeMap;

/// Percent-encodes a single key or value per RFC 3986.
///
/// Unreserved characters (`A-Z a-z 0-9 - _ . ~`) pass through; everything
/// else is encoded, including `/` (as `%2F`) and space (as `%20`, never
/// `+`). The provider decodes with the same rules when it recomputes the
/// signature, so this must stay a stable, reversible transform.
#[must_use]
pub fn percent_encode(input: &str) -> Cow<'_, str> {
    urlencoding::encode(input)
}

/// Builds the canonical query string from a parameter map.
///
/// Keys come out in strictly ascending byte order (`BTreeMap` iteration
/// order), each key and value percent-encoded, pairs joined as
/// `key=value&key=value`.
#[must_use]
pub fn canonical_query(params: &BTreeMap<String, String>) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", percent_encode(key), percent_encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Builds the string the signature is computed over.
///
/// Format: `METHOD & %2F & percent-encode(canonical query)`. The already
/// percent-encoded query is encoded a second time here; that is part of
/// the provider's scheme, not an accident.
#[must_use]
pub fn string_to_sign(method: &http::Method, canonical_query: &str) -> String {
    format!(
        "{}&{}&{}",
        method,
        percent_encode("/"),
        percent_encode(canonical_query)
    )
}
