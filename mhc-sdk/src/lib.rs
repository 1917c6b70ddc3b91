#![deny(missing_docs)]

//! MHC SDK - Complete SDK.
//!
//! Re-exports all MHC SDK components for convenient single-crate usage.
//!
//! ```
//! use mhc_sdk::primitives::Key;
//! use mhc_sdk::transaction::Transaction;
//!
//! let key = Key::generate().unwrap();
//! let args = Transaction::new("0x009806da73b1589f38630649bdee48467946d118059efd6aab", 1_000_000, 1)
//!     .sign(&key)
//!     .unwrap();
//! assert!(args.verify().unwrap());
//! ```

pub use mhc_primitives as primitives;
pub use mhc_transaction as transaction;
pub use mhc_wallet as wallet;
pub use mhc_rpc as rpc;
