//! JSON-RPC 2.0 client for the Callr web service over HTTPS
//!
//! This crate provides the `CallrClient` handle: authentication, login-as
//! delegation, proxy support, and a dispatch core that retries transient
//! failures across a pool of endpoint URLs.
//!
//! # Core Features
//!
//! - **HTTPS Transport**: Async HTTP POST via reqwest
//! - **Authentication**: API key or basic (login + password)
//! - **Delegation**: Act on behalf of a sub-account or user ("login-as")
//! - **Failover**: Bounded retry across distinct URLs, drawn at random
//!   without replacement per call
//! - **Typed Errors**: Remote protocol errors are distinguished from
//!   transport failures and never retried
//! - **Pluggable Logging**: Per-handle log sink, defaulting to `tracing`
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use callr_client::CallrClient;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = CallrClient::with_api_key(std::env::var("CALLR_API_KEY")?);
//!
//!     let result = api
//!         .call("sms.send", vec![json!("SMS"), json!("+15555550123"), json!("Hello"), json!(null)])
//!         .await?;
//!
//!     // sms.send returns a string hash
//!     let hash: String = serde_json::from_value(result)?;
//!     println!("SMS sent: {}", hash);
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! ```rust,no_run
//! use callr_client::CallrClient;
//! use callr_core::Error;
//!
//! # async fn example(api: CallrClient) {
//! match api.call("sms.send", vec![]).await {
//!     Ok(result) => println!("result: {}", result),
//!     Err(Error::Rpc(e)) => eprintln!("remote error: code={} message={}", e.code, e.message),
//!     Err(Error::HttpStatus { status, message }) => eprintln!("http error: {} {}", status, message),
//!     Err(e) => eprintln!("other error: {}", e),
//! }
//! # }
//! ```

mod auth;
mod client;
mod log;
mod pool;

pub use auth::{Credentials, LoginAs, LoginAsTarget};
pub use client::{CallrClient, DEFAULT_API_URL, MAX_RETRIES};
pub use log::{LogSink, NoopSink, TracingSink};
pub use pool::EndpointPool;

// Re-export the core error types: every public API in this crate returns them
pub use callr_core::{Error, Result, RpcErrorData};
