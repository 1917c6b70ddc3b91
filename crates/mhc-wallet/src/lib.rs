/// MHC SDK - Wallet signer and transport interface.
///
/// Defines the `Transport` trait the wallet uses to reach a node, the
/// `Balance` returned by it, and `WalletSigner`, which checks the balance,
/// builds and signs a transfer and submits it.

mod error;
pub use error::WalletError;

pub mod signer;
pub mod transport;

pub use signer::{WalletSigner, MICROS_PER_COIN};
pub use transport::{Balance, Transport, TransportError};
