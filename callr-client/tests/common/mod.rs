//! Shared helpers for client integration tests

use callr_client::LogSink;
use std::net::TcpListener;
use std::sync::{Arc, Mutex};

/// Log sink that records every event for later inspection
///
/// Cloneable: one clone goes into the client, the other stays in the test.
#[derive(Clone, Default)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<(String, String)>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|(level, _)| level == "warning")
            .map(|(_, message)| message.clone())
            .collect()
    }

    pub fn infos(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|(level, _)| level == "info")
            .map(|(_, message)| message.clone())
            .collect()
    }
}

impl LogSink for RecordingSink {
    fn warning(&self, message: &str) {
        self.events
            .lock()
            .unwrap()
            .push(("warning".to_string(), message.to_string()));
    }

    fn info(&self, message: &str) {
        self.events
            .lock()
            .unwrap()
            .push(("info".to_string(), message.to_string()));
    }
}

/// A URL on localhost where nothing is listening, so connections are refused
///
/// Binds an ephemeral port to learn a free port number, then releases it.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}/", port)
}
