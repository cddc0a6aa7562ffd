//! Error types for the Callr client SDK
//!
//! This module provides the full error taxonomy for a JSON-RPC call:
//!
//! - **Error**: Application-level errors for the caller (uses thiserror)
//! - **RpcErrorData**: Wire-format errors as returned by the remote peer
//!
//! # Error Classification
//!
//! The dispatch core decides retry eligibility purely from the error kind:
//!
//! - `Transport` and `HttpStatus` are transient infrastructure failures and
//!   are retried against another endpoint URL.
//! - Everything else is terminal. In particular a `Rpc` error means the
//!   remote explicitly rejected the call; repeating it against a different
//!   URL of the same backend would reproduce the same rejection.
//!
//! # Examples
//!
//! ```rust
//! use callr_core::{Error, RpcErrorData};
//!
//! let remote = Error::Rpc(RpcErrorData::new(4001, "invalid destination"));
//! assert!(!remote.is_retryable());
//!
//! let transient = Error::HttpStatus { status: 503, message: "Service Unavailable".into() };
//! assert!(transient.is_retryable());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for Callr SDK operations
///
/// This is a convenience type alias that uses the SDK `Error` type.
/// Used throughout the callr crates for consistent error handling.
pub type Result<T> = std::result::Result<T, Error>;

/// Application-level error type for Callr SDK operations
///
/// Every failure mode of a JSON-RPC call surfaces to the caller as exactly
/// one variant of this enum; the SDK never panics on a failed exchange.
///
/// # Error Categories
///
/// - **Local encoding**: `Encoding` (request construction)
/// - **Transient, retried**: `Transport`, `HttpStatus`
/// - **Remote rejection, terminal**: `Rpc`
/// - **Malformed success response, terminal**: `Decoding`
/// - **Attempt budget consumed**: `RetriesExhausted`
/// - **Setup-time misuse**: `InvalidLoginAs`, `InvalidConfiguration`
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The request envelope could not be serialized
    ///
    /// Only caller-supplied parameter values can cause this; the envelope
    /// itself always serializes.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// The response body was malformed
    ///
    /// The HTTP exchange succeeded but the body is not valid JSON, does not
    /// match the JSON-RPC 2.0 envelope shape, or carries both or neither of
    /// `result`/`error`. Never retried: a malformed success response is not
    /// expected to be fixed by trying again.
    #[error("Decoding error: {0}")]
    Decoding(String),

    /// JSON-RPC error returned by the remote peer
    ///
    /// The request reached the service and was rejected by application
    /// logic. Carries the remote code, message and optional data for the
    /// caller to branch on. Never retried.
    #[error("JSON-RPC error: {0}")]
    Rpc(#[from] RpcErrorData),

    /// The HTTP exchange completed with a non-success status
    ///
    /// `message` is the reason phrase of the status line, without the
    /// numeric code. Retried against another URL.
    #[error("HTTP error: [{status}] {message}")]
    HttpStatus {
        /// Numeric HTTP status code (e.g. 503)
        status: u16,
        /// Trimmed reason phrase (e.g. "Service Unavailable")
        message: String,
    },

    /// Network-level failure before an HTTP response was obtained
    ///
    /// Covers connection errors, DNS failures and request timeouts.
    /// Retried against another URL.
    #[error("Transport error: {0}")]
    Transport(String),

    /// All attempts were consumed without any failure being recorded
    ///
    /// Only reachable when the configured endpoint list was empty from the
    /// start; otherwise the last transport or status failure is returned.
    #[error("Retries exhausted")]
    RetriesExhausted,

    /// Invalid login-as delegation target
    ///
    /// Raised at setup time when the target type is not one of the known
    /// delegation types or either field is empty.
    #[error("Invalid login-as target: {0}")]
    InvalidLoginAs(String),

    /// Invalid client configuration
    ///
    /// Raised at setup time for an unparsable proxy URL or an empty
    /// endpoint list.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl Error {
    /// Whether the dispatch core may retry this failure on another URL
    ///
    /// True exactly for `Transport` and `HttpStatus`. A remote `Rpc` error
    /// or a decoding failure is terminal.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Transport(_) | Error::HttpStatus { .. })
    }
}

/// JSON-RPC 2.0 error object as returned by the remote peer
///
/// This structure represents the exact wire format of the `error` member of
/// a JSON-RPC 2.0 response.
///
/// # Wire Format
///
/// Per the JSON-RPC 2.0 specification, error objects MUST contain:
/// - `code`: An integer error code
/// - `message`: A short description of the error
///
/// And MAY contain:
/// - `data`: Additional information about the error
///
/// # Examples
///
/// ```rust
/// use callr_core::RpcErrorData;
///
/// let error = RpcErrorData::new(4001, "invalid destination");
/// assert_eq!(error.to_string(), "[4001] invalid destination");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcErrorData {
    /// Numeric error code indicating the error type
    pub code: i64,

    /// Human-readable error message
    pub message: String,

    /// Optional additional error information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl RpcErrorData {
    /// Create a new JSON-RPC error with code and message
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// Create a new JSON-RPC error with additional data
    pub fn with_data(code: i64, message: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            code,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl std::fmt::Display for RpcErrorData {
    /// Format the error for display
    ///
    /// Formats as "[code] message" for easy readability in logs.
    /// For example: "[4001] invalid destination"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

// Implement std::error::Error so RpcErrorData can be used with Result and ?
impl std::error::Error for RpcErrorData {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rpc_error_display() {
        let error = RpcErrorData::new(4001, "invalid destination");
        let display = format!("{}", error);

        assert!(display.contains("4001"));
        assert!(display.contains("invalid destination"));
    }

    #[test]
    fn test_rpc_error_with_data() {
        let error = RpcErrorData::with_data(
            1001,
            "Insufficient funds",
            json!({"balance": 50, "required": 100}),
        );

        assert_eq!(error.code, 1001);
        assert_eq!(error.message, "Insufficient funds");
        assert!(error.data.is_some());

        if let Some(data) = error.data {
            assert_eq!(data["balance"], 50);
            assert_eq!(data["required"], 100);
        }
    }

    #[test]
    fn test_rpc_error_serialization() {
        let error = RpcErrorData::new(-32601, "Method not found");
        let serialized = serde_json::to_string(&error).unwrap();

        assert!(serialized.contains("-32601"));
        assert!(serialized.contains("Method not found"));
        // data is omitted entirely when absent
        assert!(!serialized.contains("data"));
    }

    #[test]
    fn test_rpc_error_deserialization() {
        let json = r#"{"code":4001,"message":"invalid destination"}"#;
        let error: RpcErrorData = serde_json::from_str(json).unwrap();

        assert_eq!(error.code, 4001);
        assert_eq!(error.message, "invalid destination");
        assert!(error.data.is_none());
    }

    #[test]
    fn test_retryable_classification() {
        assert!(Error::Transport("connection refused".into()).is_retryable());
        assert!(Error::HttpStatus {
            status: 503,
            message: "Service Unavailable".into()
        }
        .is_retryable());

        assert!(!Error::Rpc(RpcErrorData::new(4001, "rejected")).is_retryable());
        assert!(!Error::Decoding("truncated body".into()).is_retryable());
        assert!(!Error::Encoding("bad params".into()).is_retryable());
        assert!(!Error::RetriesExhausted.is_retryable());
        assert!(!Error::InvalidLoginAs("empty value".into()).is_retryable());
        assert!(!Error::InvalidConfiguration("bad proxy".into()).is_retryable());
    }

    #[test]
    fn test_http_status_display() {
        let error = Error::HttpStatus {
            status: 503,
            message: "Service Unavailable".into(),
        };
        let display = format!("{}", error);

        assert!(display.contains("503"));
        assert!(display.contains("Service Unavailable"));
    }

    #[test]
    fn test_rpc_error_converts_to_error() {
        let error: Error = RpcErrorData::new(4001, "rejected").into();
        match error {
            Error::Rpc(data) => assert_eq!(data.code, 4001),
            _ => panic!("Expected Rpc error"),
        }
    }
}
