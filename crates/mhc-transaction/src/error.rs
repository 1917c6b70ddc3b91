/// Error types for transaction operations.
#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    /// The recipient address is not valid hex once `0x` is stripped.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
    /// The data field is not valid hex.
    #[error("invalid data: {0}")]
    InvalidData(String),
    /// An amount field of signed transfer args is not a decimal integer.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    /// An underlying primitives error (forwarded from `mhc-primitives`).
    #[error("primitives error: {0}")]
    Primitives(#[from] mhc_primitives::PrimitivesError),
}
