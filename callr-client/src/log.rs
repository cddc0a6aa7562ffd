//! Pluggable log sink for retry and recovery events
//!
//! The dispatch core emits a warning before each retry (naming the failing
//! URL and cause) and an informational event when a call recovers after one
//! or more retries. Where those events go is configurable per client handle
//! via the `LogSink` trait - there is no process-wide log function, so two
//! handles with different sinks never interfere.
//!
//! The default sink forwards to the `tracing` ecosystem; use [`NoopSink`]
//! to disable logging entirely.

/// Destination for warning and recovery events emitted by the dispatch core
///
/// Implementations must be `Send + Sync`: a sink is shared by all concurrent
/// calls on a handle.
pub trait LogSink: Send + Sync {
    /// A retryable failure occurred; the message names the URL and cause
    fn warning(&self, message: &str);

    /// A call recovered after retries; the message names the URL and attempt
    fn info(&self, message: &str);
}

/// Default sink: forwards to `tracing::warn!` / `tracing::info!`
#[derive(Debug, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn warning(&self, message: &str) {
        tracing::warn!(target: "callr", "{}", message);
    }

    fn info(&self, message: &str) {
        tracing::info!(target: "callr", "{}", message);
    }
}

/// Sink that discards every event, disabling SDK logging
#[derive(Debug, Default)]
pub struct NoopSink;

impl LogSink for NoopSink {
    fn warning(&self, _message: &str) {}

    fn info(&self, _message: &str) {}
}
