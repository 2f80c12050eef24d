//! # Mock Backend & Testing Guide
//!
//! [`MockBackend`] implements the same [`Backend`](crate::Backend) API as the
//! production client but operates entirely in-memory, letting tests drive a
//! real container through every phase transition without a network.
//!
//! ## When to use MockBackend vs a real backend
//!
//! | Feature | MockBackend | ApiClient |
//! |---------|-------------|-----------|
//! | **Speed** | Instant (in-memory) | Network round trip |
//! | **Determinism** | 100% deterministic | Depends on the server |
//! | **Error injection** | Easy (`return_err`) | Hard (needs a broken server) |
//! | **Use case** | Container/client logic | Manual end-to-end runs |
//!
//! ## Usage
//!
//! Expectations are queued FIFO and consumed one per request:
//!
//! ```ignore
//! let backend = Arc::new(MockBackend::new());
//! backend.expect_get("/categories").return_json(json!([
//!     {"id": "1", "name": "Boards"},
//! ]));
//! backend
//!     .expect_post("/categories")
//!     .return_err(RequestError::Api("name is required".into()));
//!
//! let (store, client) = ResourceStore::<Category>::new(8);
//! tokio::spawn(store.run(backend.clone() as Arc<dyn Backend>));
//!
//! client.fetch_list().await?;
//! // ...
//! backend.verify(); // panics if expectations were unmet or mismatched
//! ```
//!
//! A request that arrives out of order (wrong method or path, or with no
//! expectation left) resolves to a transport error — so the container under
//! test sees an ordinary rejected operation — and is additionally recorded
//! so [`MockBackend::verify`] fails the test with the full list of
//! mismatches.

use crate::error::RequestError;
use crate::http::{Backend, Payload};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::fmt;
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

struct Expectation {
    verb: Verb,
    path: String,
    response: Result<Value, RequestError>,
}

/// In-memory [`Backend`] with an expectation queue.
#[derive(Default)]
pub struct MockBackend {
    expectations: Mutex<VecDeque<Expectation>>,
    mismatches: Mutex<Vec<String>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expect_get(&self, path: impl Into<String>) -> ExpectationBuilder<'_> {
        self.expect(Verb::Get, path)
    }

    pub fn expect_post(&self, path: impl Into<String>) -> ExpectationBuilder<'_> {
        self.expect(Verb::Post, path)
    }

    pub fn expect_put(&self, path: impl Into<String>) -> ExpectationBuilder<'_> {
        self.expect(Verb::Put, path)
    }

    pub fn expect_delete(&self, path: impl Into<String>) -> ExpectationBuilder<'_> {
        self.expect(Verb::Delete, path)
    }

    fn expect(&self, verb: Verb, path: impl Into<String>) -> ExpectationBuilder<'_> {
        ExpectationBuilder {
            mock: self,
            verb,
            path: path.into(),
        }
    }

    /// Panics if any expectation was unmet or any request mismatched.
    pub fn verify(&self) {
        let mismatches = self.mismatches.lock().unwrap();
        if !mismatches.is_empty() {
            panic!("mock backend saw unexpected requests: {mismatches:?}");
        }
        let remaining = self.expectations.lock().unwrap();
        if !remaining.is_empty() {
            let unmet: Vec<String> = remaining
                .iter()
                .map(|e| format!("{} {}", e.verb, e.path))
                .collect();
            panic!("mock backend has unmet expectations: {unmet:?}");
        }
    }

    fn respond(&self, verb: Verb, path: &str) -> Result<Value, RequestError> {
        let next = self.expectations.lock().unwrap().pop_front();
        match next {
            Some(expected) if expected.verb == verb && expected.path == path => expected.response,
            Some(expected) => {
                let message = format!(
                    "unexpected request: {verb} {path} (expected {} {})",
                    expected.verb, expected.path
                );
                self.mismatches.lock().unwrap().push(message.clone());
                Err(RequestError::Transport(message))
            }
            None => {
                let message = format!("unexpected request: {verb} {path} (no expectations left)");
                self.mismatches.lock().unwrap().push(message.clone());
                Err(RequestError::Transport(message))
            }
        }
    }
}

/// Second half of the fluent expectation API; see [`MockBackend`].
#[must_use = "an expectation without a response is never queued"]
pub struct ExpectationBuilder<'a> {
    mock: &'a MockBackend,
    verb: Verb,
    path: String,
}

impl ExpectationBuilder<'_> {
    /// Queue a successful JSON response.
    pub fn return_json(self, value: Value) {
        self.push(Ok(value));
    }

    /// Queue a failure.
    pub fn return_err(self, error: RequestError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Value, RequestError>) {
        self.mock.expectations.lock().unwrap().push_back(Expectation {
            verb: self.verb,
            path: self.path,
            response,
        });
    }
}

#[async_trait]
impl Backend for MockBackend {
    async fn get(&self, path: &str, _query: &[(String, String)]) -> Result<Value, RequestError> {
        self.respond(Verb::Get, path)
    }

    async fn post(&self, path: &str, _payload: Payload) -> Result<Value, RequestError> {
        self.respond(Verb::Post, path)
    }

    async fn put(&self, path: &str, _payload: Payload) -> Result<Value, RequestError> {
        self.respond(Verb::Put, path)
    }

    async fn delete(&self, path: &str) -> Result<Value, RequestError> {
        self.respond(Verb::Delete, path)
    }
}
