//! JSON-RPC 2.0 wire types used by the Callr API
//!
//! This module implements the request and response envelopes exchanged with
//! the Callr web service (https://www.jsonrpc.org/specification). These types
//! are designed to be:
//!
//! - **Spec-compliant**: Strict adherence to the JSON-RPC 2.0 wire shape
//! - **Type-safe**: Rust's type system prevents invalid envelope construction
//! - **Serializable**: Full serde support for JSON encoding/decoding
//!
//! # Correlation IDs
//!
//! The Callr API uses 64-bit signed integer request IDs. Each request draws
//! its ID uniformly at random; the ID is used only for client-side tracing.
//!
//! # Parameters
//!
//! Remote methods take positional parameters. The `params` field is always
//! serialized as a JSON array, even when the caller passes none — the API
//! rejects a `null` params member.

use crate::error::RpcErrorData;
use serde::{Deserialize, Serialize};

/// Protocol version constant, present in every envelope.
pub const JSONRPC_VERSION: &str = "2.0";

/// JSON-RPC 2.0 request envelope
///
/// A request represents a call to a remote method that expects a response.
/// The response carries a matching `id` field to correlate with this request.
///
/// # Wire Shape
///
/// ```json
/// {"id": 1234, "jsonrpc": "2.0", "method": "sms.send", "params": ["SMS", "+15551234567", "hi", null]}
/// ```
///
/// # Examples
///
/// ```rust
/// use callr_core::JsonRpcRequest;
/// use serde_json::json;
///
/// let req = JsonRpcRequest::new("sms.send", vec![json!("SMS"), json!("+15551234567")]);
/// assert_eq!(req.jsonrpc, "2.0");
/// assert_eq!(req.method, "sms.send");
///
/// // No parameters still serializes as an empty array
/// let ping = JsonRpcRequest::new("system.ping", vec![]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    /// Correlation identifier, drawn uniformly at random per call
    pub id: i64,
    /// JSON-RPC version - always "2.0"
    pub jsonrpc: String,
    /// Name of the remote method to invoke
    pub method: String,
    /// Positional parameters; always an array on the wire, never null
    pub params: Vec<serde_json::Value>,
}

impl JsonRpcRequest {
    /// Create a new JSON-RPC 2.0 request with a random correlation ID
    ///
    /// The `jsonrpc` field is automatically set to "2.0". The ID is drawn
    /// from the thread-local PRNG; no security property depends on its
    /// unpredictability.
    pub fn new(method: impl Into<String>, params: Vec<serde_json::Value>) -> Self {
        Self::with_id(method, params, rand::random::<i64>())
    }

    /// Create a request with an explicit correlation ID
    ///
    /// Useful for tests that need deterministic envelopes.
    pub fn with_id(method: impl Into<String>, params: Vec<serde_json::Value>, id: i64) -> Self {
        Self {
            id,
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: method.into(),
            params,
        }
    }
}

/// JSON-RPC 2.0 response envelope
///
/// A response contains either a result (success) or an error (failure),
/// but never both. The codec enforces this mutual exclusion when decoding;
/// the serde shape alone allows either member to be absent.
///
/// # Examples
///
/// ```rust
/// use callr_core::JsonRpcResponse;
///
/// let body = r#"{"id":7,"jsonrpc":"2.0","result":"abc123"}"#;
/// let resp: JsonRpcResponse = serde_json::from_str(body).unwrap();
/// assert!(resp.is_success());
/// assert!(!resp.is_error());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    /// Correlation identifier from the original request
    pub id: i64,
    /// JSON-RPC version - always "2.0"
    pub jsonrpc: String,
    /// The result of the method invocation (present only on success)
    /// Mutually exclusive with `error`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    /// Error information (present only on failure)
    /// Mutually exclusive with `result`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcErrorData>,
}

impl JsonRpcResponse {
    /// Create a successful response
    ///
    /// Mainly useful in tests; the SDK itself only decodes responses.
    pub fn success(result: serde_json::Value, id: i64) -> Self {
        Self {
            id,
            jsonrpc: JSONRPC_VERSION.to_string(),
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response
    pub fn error(error: RpcErrorData, id: i64) -> Self {
        Self {
            id,
            jsonrpc: JSONRPC_VERSION.to_string(),
            result: None,
            error: Some(error),
        }
    }

    /// Check if the response represents a successful result
    pub fn is_success(&self) -> bool {
        self.result.is_some()
    }

    /// Check if the response represents an error
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
