//! Codec for JSON-RPC envelope serialization and deserialization
//!
//! This module provides the functions the dispatch core uses to turn a
//! method call into request bytes and a response body back into a typed
//! envelope.
//!
//! # Why a Codec Module?
//!
//! While serde provides generic JSON serialization, this module adds:
//! - **Envelope validation**: a decoded response must carry exactly one of
//!   `result` / `error`; anything else is a decoding failure
//! - **Error mapping**: serde errors are mapped to the SDK error taxonomy
//!   (`Encoding` on the request path, `Decoding` on the response path)
//!
//! # Correlation IDs
//!
//! The response ID is decoded but not validated against the request ID. The
//! ID exists for client-side tracing only; a strict match check would turn
//! benign proxy quirks into hard failures.
//!
//! # Examples
//!
//! ```rust
//! use callr_core::{codec, JsonRpcRequest};
//! use serde_json::json;
//!
//! let request = JsonRpcRequest::new("sms.send", vec![json!("SMS")]);
//! let body = codec::encode_request(&request).unwrap();
//!
//! let response = codec::decode_response(r#"{"id":1,"jsonrpc":"2.0","result":"abc123"}"#).unwrap();
//! assert_eq!(response.result, Some(json!("abc123")));
//! ```

use crate::error::{Error, Result};
use crate::types::{JsonRpcRequest, JsonRpcResponse};

/// Encode a JSON-RPC request envelope to its wire form
///
/// # Errors
///
/// Returns `Error::Encoding` if a caller-supplied parameter value cannot be
/// serialized to JSON. The envelope fields themselves always serialize.
pub fn encode_request(request: &JsonRpcRequest) -> Result<String> {
    serde_json::to_string(request).map_err(|e| Error::Encoding(e.to_string()))
}

/// Decode a response body into a JSON-RPC response envelope
///
/// Validates the envelope shape on top of plain deserialization: a valid
/// response carries exactly one of `result` / `error`. A body with both or
/// neither is rejected, since the dispatch core could not classify it as
/// either success or remote failure. A `result` member holding `null` is a
/// valid success payload (void methods answer this way) and decodes to
/// `Some(Value::Null)`.
///
/// # Errors
///
/// Returns `Error::Decoding` when the body is not well-formed JSON, does not
/// match the envelope shape, or violates the result/error exclusion.
///
/// # Examples
///
/// ```rust
/// use callr_core::codec;
///
/// // Success envelope
/// let ok = codec::decode_response(r#"{"id":1,"jsonrpc":"2.0","result":42}"#).unwrap();
/// assert!(ok.is_success());
///
/// // Error envelope
/// let err = codec::decode_response(
///     r#"{"id":1,"jsonrpc":"2.0","error":{"code":4001,"message":"rejected"}}"#,
/// ).unwrap();
/// assert!(err.is_error());
///
/// // Neither member present: malformed
/// assert!(codec::decode_response(r#"{"id":1,"jsonrpc":"2.0"}"#).is_err());
/// ```
pub fn decode_response(body: &str) -> Result<JsonRpcResponse> {
    let raw: serde_json::Value =
        serde_json::from_str(body).map_err(|e| Error::Decoding(e.to_string()))?;

    // Presence is checked on the raw object: void methods answer with an
    // explicit `"result": null`, which the typed pass folds into an absent
    // member. A null `error` member counts as absent.
    let has_result = raw.get("result").is_some();
    let has_error = raw.get("error").map_or(false, |e| !e.is_null());

    let mut response: JsonRpcResponse =
        serde_json::from_value(raw).map_err(|e| Error::Decoding(e.to_string()))?;

    match (has_result, has_error) {
        (true, true) => Err(Error::Decoding(
            "response carries both result and error".to_string(),
        )),
        (false, false) => Err(Error::Decoding(
            "response carries neither result nor error".to_string(),
        )),
        _ => {
            if has_result && response.result.is_none() {
                response.result = Some(serde_json::Value::Null);
            }
            Ok(response)
        }
    }
}
