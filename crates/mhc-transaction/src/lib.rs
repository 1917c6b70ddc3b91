/// MHC SDK - Transfer transactions and their canonical signing payload.
///
/// Provides the `Transaction` type, the varint-encoded payload that is hashed
/// and signed, and the `TransferArgs` wire struct submitted with `mhc_send`.

pub mod transaction;
pub mod transfer_args;

mod error;
pub use error::TransactionError;
pub use transaction::Transaction;
pub use transfer_args::TransferArgs;
