//! Nonce generation for signed requests.

/// Source of the `SignatureNonce` parameter.
///
/// The provider only requires the nonce to be unique per request; the
/// format is otherwise free. Injecting the source keeps [`RequestSigner`]
/// deterministic under test.
///
/// [`RequestSigner`]: super::RequestSigner
pub trait NonceSource: Send + Sync {
    /// Returns a fresh single-use token.
    fn nonce(&self) -> String;
}

/// Production nonce source backed by UUID v4.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidNonce;

impl NonceSource for UuidNonce {
    fn nonce(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_nonce_is_unique_per_call() {
        let source = UuidNonce;

        assert_ne!(source.nonce(), source.nonce());
    }

    #[test]
    fn uuid_nonce_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<UuidNonce>();
    }
}
