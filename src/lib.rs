//! Callr - JSON-RPC 2.0 client SDK for the Callr web service
//!
//! This is the main convenience crate that re-exports the Callr sub-crates.
//! Use this crate if you want a single dependency for talking to the API.
//!
//! # Architecture
//!
//! The SDK is organized into modular crates:
//!
//! - **callr-core**: Wire types, envelope codec, error taxonomy
//! - **callr-client**: HTTPS client with authentication, login-as
//!   delegation, multi-URL failover and pluggable logging
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use callr::CallrClient;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Api Key Auth (use the customer portal to generate keys)
//!     let api = CallrClient::with_api_key(std::env::var("CALLR_API_KEY")?);
//!
//!     // Send an SMS with the "sms.send" JSON-RPC method
//!     let result = api
//!         .call("sms.send", vec![json!("SMS"), json!("+15555550123"), json!("Hello, world"), json!(null)])
//!         .await?;
//!
//!     // sms.send returns a string hash
//!     let hash: String = serde_json::from_value(result)?;
//!     println!("SMS sent: {}", hash);
//!     Ok(())
//! }
//! ```
//!
//! # Branching on Errors
//!
//! ```rust,no_run
//! use callr::{CallrClient, Error};
//!
//! # async fn example(api: CallrClient) {
//! match api.call("sms.send", vec![]).await {
//!     Ok(result) => println!("result: {}", result),
//!     Err(Error::Rpc(e)) => {
//!         // the API rejected the call; never retried
//!         eprintln!("remote error: code={} message={} data={:?}", e.code, e.message, e.data);
//!     }
//!     Err(Error::HttpStatus { status, message }) => {
//!         // infrastructure-level failure after exhausting the URL pool
//!         eprintln!("http error: [{}] {}", status, message);
//!     }
//!     Err(e) => eprintln!("other error: {}", e),
//! }
//! # }
//! ```

// Re-export all public APIs from sub-crates
// This allows users to access everything through the `callr::` prefix
pub use callr_client as client;
pub use callr_core as core;

// Convenience re-exports of the most commonly used types
// This avoids needing to write `callr::client::CallrClient`
pub use callr_client::{
    CallrClient, Credentials, EndpointPool, LogSink, LoginAs, LoginAsTarget, NoopSink,
    TracingSink, DEFAULT_API_URL, MAX_RETRIES,
};
pub use callr_core::{Error, Result, RpcErrorData};
