//! Node transport interface.
//!
//! The wallet reaches the network only through [`Transport::call`]. Retry,
//! timeout and cancellation policy belong to the implementation.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use mhc_primitives::Address;
use mhc_transaction::TransferArgs;

/// Method returning the balance of an address.
pub const METHOD_FETCH_BALANCE: &str = "fetch-balance";

/// Method submitting a signed transfer.
pub const METHOD_SEND: &str = "mhc_send";

/// Errors reported by a transport.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The call itself failed (connection, HTTP status, remote error).
    #[error("{method} failed: {source}")]
    Call {
        method: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// The call succeeded but the result had an unexpected shape.
    #[error("invalid response to {method}: {reason}")]
    InvalidResponse { method: String, reason: String },
    /// Params or result could not be (de)serialized.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Account balance as reported by a node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    #[serde(default)]
    pub address: String,
    /// Total amount ever received.
    pub received: i64,
    /// Total amount ever spent.
    pub spent: i64,
    #[serde(default, alias = "countReceived")]
    pub count_received: i64,
    /// Number of outgoing transactions so far.
    #[serde(alias = "countSpent")]
    pub count_spent: i64,
}

impl Balance {
    /// Spendable amount: received minus spent.
    pub fn available(&self) -> i64 {
        self.received.saturating_sub(self.spent)
    }

    /// Nonce for the next outgoing transaction.
    pub fn next_nonce(&self) -> i64 {
        self.count_spent.saturating_add(1)
    }
}

/// A blocking request/response channel to a node.
pub trait Transport {
    /// Invoke `method` with JSON `params` and return the JSON result.
    fn call(&self, method: &str, params: Value) -> Result<Value, TransportError>;

    /// Query the balance of `address`.
    fn fetch_balance(&self, address: &Address) -> Result<Balance, TransportError> {
        let result = self.call(METHOD_FETCH_BALANCE, json!({ "address": address }))?;
        Ok(serde_json::from_value(result)?)
    }

    /// Submit signed transfer arguments.
    ///
    /// # Returns
    /// The transaction identifier reported by the node.
    fn send_transaction(&self, args: &TransferArgs) -> Result<String, TransportError> {
        let result = self.call(METHOD_SEND, serde_json::to_value(args)?)?;
        match result {
            Value::String(tx_hash) => Ok(tx_hash),
            other => Err(TransportError::InvalidResponse {
                method: METHOD_SEND.to_string(),
                reason: format!("expected transaction hash string, got {other}"),
            }),
        }
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn call(&self, method: &str, params: Value) -> Result<Value, TransportError> {
        (**self).call(method, params)
    }
}
