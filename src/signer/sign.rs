//! The request signer.

use std::collections::BTreeMap;

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::time::{Clock, SystemClock};

use super::canonical::{canonical_query, string_to_sign};
use super::nonce::{NonceSource, UuidNonce};

/// Alidns API version sent with every signed call.
pub const API_VERSION: &str = "2015-01-09";

const SIGNATURE_METHOD: &str = "HMAC-SHA1";
const SIGNATURE_VERSION: &str = "1.0";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

type HmacSha1 = Hmac<Sha1>;

/// Signs Alidns RPC requests.
///
/// Merges action-specific parameters with the common parameter set,
/// canonicalizes, and appends the computed `Signature`. The signer never
/// fails: empty credentials yield a signature the provider rejects, which
/// surfaces as an authentication failure from the gateway call. Config
/// validation rules that path out before any network call is made.
///
/// # Type Parameters
///
/// - `C`: clock supplying the `Timestamp` parameter (defaults to
///   [`SystemClock`])
/// - `N`: source of the `SignatureNonce` parameter (defaults to
///   [`UuidNonce`])
pub struct RequestSigner<C = SystemClock, N = UuidNonce> {
    access_key_id: String,
    access_secret: String,
    clock: C,
    nonce: N,
}

impl RequestSigner {
    /// Creates a signer with the system clock and UUID nonces.
    #[must_use]
    pub fn new(access_key_id: impl Into<String>, access_secret: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            access_secret: access_secret.into(),
            clock: SystemClock,
            nonce: UuidNonce,
        }
    }
}

impl<C, N> RequestSigner<C, N> {
    /// Replaces the clock.
    ///
    /// This is primarily useful for testing with a pinned timestamp.
    #[must_use]
    pub fn with_clock<C2>(self, clock: C2) -> RequestSigner<C2, N> {
        RequestSigner {
            access_key_id: self.access_key_id,
            access_secret: self.access_secret,
            clock,
            nonce: self.nonce,
        }
    }

    /// Replaces the nonce source.
    ///
    /// This is primarily useful for testing with a fixed nonce.
    #[must_use]
    pub fn with_nonce_source<N2>(self, nonce: N2) -> RequestSigner<C, N2> {
        RequestSigner {
            access_key_id: self.access_key_id,
            access_secret: self.access_secret,
            clock: self.clock,
            nonce,
        }
    }
}

impl<C: Clock, N: NonceSource> RequestSigner<C, N> {
    /// Signs an action's parameters.
    ///
    /// Returns the complete parameter set: the given parameters, the common
    /// parameters (`Format`, `Version`, `AccessKeyId`, `SignatureMethod`,
    /// `Timestamp`, `SignatureVersion`, `SignatureNonce`), and the computed
    /// `Signature`, in ascending key order.
    #[must_use]
    pub fn sign(&self, method: &http::Method, params: &[(&str, &str)]) -> Vec<(String, String)> {
        let mut merged: BTreeMap<String, String> = params
            .iter()
            .map(|&(key, value)| (key.to_owned(), value.to_owned()))
            .collect();

        merged.insert("Format".to_owned(), "JSON".to_owned());
        merged.insert("Version".to_owned(), API_VERSION.to_owned());
        merged.insert("AccessKeyId".to_owned(), self.access_key_id.clone());
        merged.insert("SignatureMethod".to_owned(), SIGNATURE_METHOD.to_owned());
        merged.insert("Timestamp".to_owned(), self.timestamp());
        merged.insert("SignatureVersion".to_owned(), SIGNATURE_VERSION.to_owned());
        merged.insert("SignatureNonce".to_owned(), self.nonce.nonce());

        let query = canonical_query(&merged);
        let to_sign = string_to_sign(method, &query);
        merged.insert("Signature".to_owned(), self.signature(&to_sign));

        merged.into_iter().collect()
    }

    /// Current UTC time as `YYYY-MM-DDTHH:MM:SSZ`.
    fn timestamp(&self) -> String {
        let now: DateTime<Utc> = self.clock.now().into();
        now.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Base64-encoded HMAC-SHA1 over the string-to-sign.
    ///
    /// The key is the access secret with a trailing `&`, per the provider's
    /// scheme.
    fn signature(&self, to_sign: &str) -> String {
        let key = format!("{}&", self.access_secret);
        let mut mac =
            HmacSha1::new_from_slice(key.as_bytes()).expect("HMAC accepts keys of any length");
        mac.update(to_sign.as_bytes());
        BASE64.encode(mac.finalize().into_bytes())
    }
}
