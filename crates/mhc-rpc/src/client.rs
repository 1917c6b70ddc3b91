//! JSON-RPC HTTP client for MHC nodes.

use std::sync::atomic::{AtomicU64, Ordering};

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde_json::{json, Value};
use tokio::runtime::{Handle, RuntimeFlavor};

use mhc_primitives::Address;
use mhc_transaction::TransferArgs;
use mhc_wallet::transport::{METHOD_FETCH_BALANCE, METHOD_SEND};
use mhc_wallet::{Balance, Transport, TransportError};

use crate::error::RpcError;
use crate::types::{RpcConfig, RpcRequest, RpcResponse, JSONRPC_VERSION};

/// HTTP client for a node's JSON-RPC endpoint.
#[derive(Debug)]
pub struct RpcClient {
    /// Client configuration.
    config: RpcConfig,
    /// Underlying HTTP client.
    client: reqwest::Client,
    /// Id of the next request.
    next_id: AtomicU64,
}

impl RpcClient {
    /// Create a new RPC client with the given configuration.
    ///
    /// # Returns
    /// The client, `InvalidApiKey` if the key cannot be sent as a header, or
    /// `HttpError` if the HTTP client cannot be built.
    pub fn new(config: RpcConfig) -> Result<Self, RpcError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .default_headers(build_headers(&config)?)
            .build()?;
        Ok(Self {
            config,
            client,
            next_id: AtomicU64::new(1),
        })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &RpcConfig {
        &self.config
    }

    /// Invoke `method` with `params` and return the JSON result.
    pub async fn call_async(&self, method: &str, params: Value) -> Result<Value, RpcError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = RpcRequest {
            jsonrpc: JSONRPC_VERSION,
            id,
            method,
            params,
        };
        tracing::debug!(method, id, url = %self.config.base_url, "Sending RPC request");

        let resp = self
            .client
            .post(&self.config.base_url)
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::debug!(method, id, status = status.as_u16(), "RPC request failed");
            return Err(RpcError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let response: RpcResponse = serde_json::from_slice(&resp.bytes().await?)?;
        if let Some((code, message)) = response.error_parts() {
            tracing::debug!(method, id, ?code, %message, "RPC error response");
            return Err(RpcError::Rpc { code, message });
        }

        match response.result {
            Some(Value::Null) | None => Err(RpcError::MissingResult),
            Some(result) => {
                tracing::debug!(method, id, "RPC response received");
                Ok(result)
            }
        }
    }

    /// Query the balance of `address`.
    pub async fn fetch_balance_async(&self, address: &Address) -> Result<Balance, RpcError> {
        let result = self
            .call_async(METHOD_FETCH_BALANCE, json!({ "address": address }))
            .await?;
        Ok(serde_json::from_value(result)?)
    }

    /// Submit signed transfer arguments and return the transaction hash.
    pub async fn send_transaction_async(&self, args: &TransferArgs) -> Result<String, RpcError> {
        let result = self
            .call_async(METHOD_SEND, serde_json::to_value(args)?)
            .await?;
        Ok(serde_json::from_value(result)?)
    }

    /// Run `call_async` to completion from synchronous code.
    fn call_blocking(&self, method: &str, params: Value) -> Result<Value, RpcError> {
        let Ok(handle) = Handle::try_current() else {
            return self.call_on_new_runtime(method, params);
        };
        match handle.runtime_flavor() {
            RuntimeFlavor::CurrentThread => {
                // The runtime's only worker is this thread, so it cannot drive
                // the request; run it on a helper thread with its own runtime.
                std::thread::scope(|scope| {
                    scope
                        .spawn(|| self.call_on_new_runtime(method, params))
                        .join()
                        .unwrap_or_else(|_| {
                            Err(RpcError::Runtime("blocking call thread panicked".to_string()))
                        })
                })
            }
            _ => tokio::task::block_in_place(|| handle.block_on(self.call_async(method, params))),
        }
    }

    /// Drive one call on a fresh single-threaded runtime.
    fn call_on_new_runtime(&self, method: &str, params: Value) -> Result<Value, RpcError> {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| RpcError::Runtime(e.to_string()))?;
        rt.block_on(self.call_async(method, params))
    }
}

impl Transport for RpcClient {
    fn call(&self, method: &str, params: Value) -> Result<Value, TransportError> {
        self.call_blocking(method, params)
            .map_err(|e| TransportError::Call {
                method: method.to_string(),
                source: Box::new(e),
            })
    }
}

/// Build the headers sent with every request.
fn build_headers(config: &RpcConfig) -> Result<HeaderMap, RpcError> {
    let mut headers = HeaderMap::new();

    if let Some(ref key) = config.api_key {
        let val = HeaderValue::from_str(&format!("Bearer {key}"))
            .map_err(|e| RpcError::InvalidApiKey(e.to_string()))?;
        headers.insert(AUTHORIZATION, val);
    }

    Ok(headers)
}
