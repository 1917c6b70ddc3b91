//! RPC data types: configuration and JSON-RPC envelopes.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default proxy endpoint accepting `mhc_send`.
pub const DEFAULT_PROXY_URL: &str = "http://net-main.MetaKey.com:9999";

/// JSON-RPC protocol version sent with every request.
pub(crate) const JSONRPC_VERSION: &str = "2.0";

/// Configuration for an [`RpcClient`](crate::RpcClient).
#[derive(Debug, Clone)]
pub struct RpcConfig {
    /// Endpoint URL receiving JSON-RPC POST requests.
    pub base_url: String,
    /// Optional Bearer token for authentication.
    pub api_key: Option<String>,
    /// Per-request timeout applied by the HTTP client.
    pub timeout: Duration,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_PROXY_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(30),
            user_agent: concat!("mhc-rpc/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// A JSON-RPC request envelope.
#[derive(Debug, Serialize)]
pub(crate) struct RpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'a str,
    pub params: Value,
}

/// A JSON-RPC response envelope.
///
/// Some nodes report errors as a bare string instead of an error object, so
/// `error` is kept as raw JSON and interpreted by [`RpcResponse::error_parts`].
#[derive(Debug, Deserialize)]
pub(crate) struct RpcResponse {
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
}

impl RpcResponse {
    /// Split a non-null `error` into `(code, message)`.
    pub fn error_parts(&self) -> Option<(Option<i64>, String)> {
        match self.error.as_ref()? {
            Value::Null => None,
            Value::String(message) if message.is_empty() => None,
            Value::String(message) => Some((None, message.clone())),
            Value::Object(obj) => Some((
                obj.get("code").and_then(Value::as_i64),
                obj.get("message")
                    .and_then(Value::as_str)
                    .map(String::from)
                    .unwrap_or_else(|| Value::Object(obj.clone()).to_string()),
            )),
            other => Some((None, other.to_string())),
        }
    }
}
