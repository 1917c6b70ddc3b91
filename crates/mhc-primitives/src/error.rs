/// Unified error type for all primitives operations.
///
/// Covers errors from the varint codec, key parsing and encoding, and
/// ECDSA signing and verification.
#[derive(Debug, thiserror::Error)]
pub enum PrimitivesError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("value too large: {bits} bits exceeds the 512-bit varint limit")]
    ValueTooLarge { bits: u64 },

    #[error("invalid hex: {0}")]
    InvalidHex(String),

    #[error("malformed key: {0}")]
    MalformedKey(String),

    #[error("unknown private key format")]
    UnknownKeyFormat,

    #[error("unsupported key type: {0}")]
    UnsupportedKeyType(&'static str),

    #[error("key has no private scalar loaded")]
    MissingPrivateKey,

    #[error("malformed signature: {0}")]
    MalformedSignature(String),

    #[error("secure random source unavailable: {0}")]
    CryptoUnavailable(String),

    #[error("signing failed: {0}")]
    SigningFailed(String),

    #[error("key encoding failed: {0}")]
    KeyEncoding(String),
}

impl From<hex::FromHexError> for PrimitivesError {
    fn from(e: hex::FromHexError) -> Self {
        PrimitivesError::InvalidHex(e.to_string())
    }
}
