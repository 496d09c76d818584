//! Request signing for the Alidns RPC API.
//!
//! Every API call carries its parameters in the query string together with
//! a `Signature` parameter computed over a canonical serialization of all
//! other parameters. This module provides:
//!
//! - Canonical query construction ([`canonical_query`], [`string_to_sign`])
//! - Nonce generation ([`NonceSource`], [`UuidNonce`])
//! - The signer itself ([`RequestSigner`])
//!
//! The signature scheme is Alidns SignatureVersion 1.0: HMAC-SHA1 over the
//! canonical string, keyed with the access secret plus a trailing `&`, then
//! Base64-encoded. Timestamp and nonce generation are injected through
//! [`Clock`] and [`NonceSource`] so the canonicalization is testable
//! byte-for-byte.
//!
//! [`Clock`]: crate::time::Clock

mod canonical;
mod nonce;
mod sign;

#[cfg(test)]
mod canonical_tests;
#[cfg(test)]
mod sign_tests;

pub use canonical::{canonical_query, string_to_sign};
pub use nonce::{NonceSource, UuidNonce};
pub use sign::{API_VERSION, RequestSigner};
