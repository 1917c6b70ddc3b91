#![deny(missing_docs)]

//! # mhc-rpc
//!
//! JSON-RPC 2.0 over HTTP client for MHC nodes: balance queries
//! (`fetch-balance`) and signed transfer submission (`mhc_send`).
//!
//! The client is async-first and also implements the blocking
//! [`Transport`](mhc_wallet::Transport) trait used by
//! [`WalletSigner`](mhc_wallet::WalletSigner).
//!
//! # Example
//!
//! ```no_run
//! use mhc_rpc::{RpcClient, RpcConfig};
//!
//! let client = RpcClient::new(RpcConfig {
//!     base_url: "http://127.0.0.1:9999".to_string(),
//!     ..Default::default()
//! })
//! .unwrap();
//! ```

pub mod client;
pub mod error;
pub mod types;


pub use client::RpcClient;
pub use error::RpcError;
pub use types::{RpcConfig, DEFAULT_PROXY_URL};
