//! Core JSON-RPC 2.0 types and codec for the Callr client SDK
//!
//! This crate provides the foundational types and utilities for talking to
//! the Callr web service over JSON-RPC 2.0. It includes:
//!
//! - **Types**: The request/response envelopes (with always-array params and
//!   random 64-bit correlation IDs)
//! - **Codec**: Serialization and envelope-shape validation
//! - **Error handling**: The full typed error taxonomy, including the
//!   retryable/terminal classification the dispatch core relies on
//!
//! # Architecture
//!
//! The crate is transport-agnostic - it handles envelope encoding/decoding
//! and error classification but doesn't dictate how bytes move. The
//! `callr-client` crate builds on this foundation with an HTTPS transport,
//! authentication, and multi-URL retry.
//!
//! # Example
//!
//! ```rust
//! use callr_core::{codec, JsonRpcRequest};
//! use serde_json::json;
//!
//! // Build and encode a request
//! let request = JsonRpcRequest::new("sms.send", vec![json!("SMS"), json!("+15555550123")]);
//! let body = codec::encode_request(&request).unwrap();
//!
//! // Decode a response body
//! let response = codec::decode_response(r#"{"id":1,"jsonrpc":"2.0","result":"abc123"}"#).unwrap();
//! assert!(response.is_success());
//! ```

pub mod codec;
pub mod error;
pub mod types;

// Re-export the most commonly used types for convenience
// This allows users to use `callr_core::Error` instead of `callr_core::error::Error`
pub use error::{Error, Result, RpcErrorData};
pub use types::{JsonRpcRequest, JsonRpcResponse, JSONRPC_VERSION};
