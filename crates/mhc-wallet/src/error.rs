use mhc_primitives::Address;

use crate::transport::TransportError;

/// Error types for wallet operations.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("insufficient balance: available {available}, required {required}")]
    InsufficientBalance { available: i64, required: i64 },
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    #[error("key has no address associated")]
    MissingAddress,
    #[error("balance query for {address} failed: {source}")]
    Balance {
        address: Address,
        #[source]
        source: TransportError,
    },
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
    #[error("transaction error: {0}")]
    Transaction(#[from] mhc_transaction::TransactionError),
    #[error("primitives error: {0}")]
    Primitives(#[from] mhc_primitives::PrimitivesError),
}
