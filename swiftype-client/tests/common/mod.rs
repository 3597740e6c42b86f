//! Shared test helpers for client tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Map, Value};
use swiftype_client::{ClientOptions, ClientResult, Credentials, Easy, Method, Transport};

/// One call seen by the recording transport.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: Method,
    pub path: String,
    pub params: Value,
}

/// Transport that records calls and replays queued responses.
///
/// When the queue is empty it answers with `{}`.
#[derive(Default)]
pub struct RecordingTransport {
    calls: Mutex<Vec<RecordedCall>>,
    responses: Mutex<VecDeque<ClientResult<Value>>>,
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond_with(&self, response: Value) {
        self.responses.lock().unwrap().push_back(Ok(response));
    }

    pub fn fail_with(&self, error: swiftype_client::ClientError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// The single recorded call; panics if there were zero or several.
    pub fn only_call(&self) -> RecordedCall {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one call, got {calls:?}");
        calls.into_iter().next().unwrap()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn request(
        &self,
        method: Method,
        path: &str,
        params: Map<String, Value>,
    ) -> ClientResult<Value> {
        self.calls.lock().unwrap().push(RecordedCall {
            method,
            path: path.to_string(),
            params: Value::Object(params),
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Value::Object(Map::new())))
    }
}

/// Installs a test log subscriber once; `RUST_LOG` controls verbosity.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A client over a fresh recording transport.
pub fn recording_client() -> (Easy, Arc<RecordingTransport>) {
    init_tracing();
    let transport = RecordingTransport::new();
    let client = Easy::with_transport(
        Credentials::new(Some("default-key".to_string()), ClientOptions::default()),
        transport.clone(),
    );
    (client, transport)
}
