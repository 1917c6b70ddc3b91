//! Error types for RPC operations.

/// Errors that can occur when calling a node over JSON-RPC.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Failed to serialize or deserialize data.
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// The node answered with a non-success HTTP status.
    #[error("unexpected HTTP status {status}: {body}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The response body, possibly empty.
        body: String,
    },

    /// The node returned an error object.
    #[error("node error ({code:?}): {message}")]
    Rpc {
        /// The JSON-RPC error code, when the node supplied one.
        code: Option<i64>,
        /// Human-readable error message.
        message: String,
    },

    /// The response carried neither a result nor an error.
    #[error("response has no result")]
    MissingResult,

    /// The configured API key is not a valid HTTP header value.
    #[error("invalid API key: {0}")]
    InvalidApiKey(String),

    /// No async runtime could be created for a blocking call.
    #[error("runtime error: {0}")]
    Runtime(String),
}
