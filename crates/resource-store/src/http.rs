//! # HTTP Client Wrapper
//!
//! The transport layer behind every store operation. The [`Backend`] trait is
//! the seam: containers and entity implementations only ever see `Backend`, so
//! the production [`ApiClient`] (reqwest) and the in-memory
//! [`MockBackend`](crate::mock::MockBackend) are interchangeable.
//!
//! The wrapper does one thing: issue a request against the configured base
//! URL with the bearer token attached when available, and normalize failures
//! into [`RequestError`] — preferring the server's own `message` field over a
//! generic transport message. No retries, no caching, no request state.

use crate::error::RequestError;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// A request body.
#[derive(Debug, Clone)]
pub enum Payload {
    /// No body (e.g. the review verification toggle).
    Empty,
    /// JSON body.
    Json(Value),
    /// `multipart/form-data` body, used by endpoints that accept file uploads.
    Multipart(Vec<FormPart>),
}

/// One field of a multipart form.
#[derive(Debug, Clone)]
pub struct FormPart {
    pub name: String,
    pub value: FormValue,
}

/// The value of a multipart form field: plain text or an attached file.
#[derive(Debug, Clone)]
pub enum FormValue {
    Text(String),
    File {
        filename: String,
        content_type: String,
        data: Vec<u8>,
    },
}

impl FormPart {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: FormValue::Text(value.into()),
        }
    }

    pub fn file(
        name: impl Into<String>,
        filename: impl Into<String>,
        content_type: impl Into<String>,
        data: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            value: FormValue::File {
                filename: filename.into(),
                content_type: content_type.into(),
                data,
            },
        }
    }
}

/// The transport contract every store operation goes through.
///
/// All methods resolve to the parsed JSON response body (`Value::Null` for
/// empty bodies) or a [`RequestError`] carrying a human-readable message.
#[async_trait]
pub trait Backend: Send + Sync + 'static {
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Value, RequestError>;
    async fn post(&self, path: &str, payload: Payload) -> Result<Value, RequestError>;
    async fn put(&self, path: &str, payload: Payload) -> Result<Value, RequestError>;
    async fn delete(&self, path: &str) -> Result<Value, RequestError>;
}

/// Production [`Backend`] over `reqwest`.
///
/// Holds the API base URL and, when available, the authorization credential
/// attached as a bearer token to every outgoing request.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token: None,
        }
    }

    /// Attach an authorization credential sent as a bearer token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn execute(
        &self,
        method: reqwest::Method,
        path: &str,
        query: &[(String, String)],
        payload: Payload,
    ) -> Result<Value, RequestError> {
        debug!(%method, path, "sending request");

        let mut request = self.http.request(method, self.url(path));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        if !query.is_empty() {
            request = request.query(query);
        }
        request = match payload {
            Payload::Empty => request,
            Payload::Json(body) => request.json(&body),
            Payload::Multipart(parts) => request.multipart(build_form(parts)?),
        };

        let response = request
            .send()
            .await
            .map_err(|e| RequestError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RequestError::Transport(format!("failed to read response body: {e}")))?;

        if !status.is_success() {
            return Err(RequestError::Api(error_message(status.as_u16(), &body)));
        }
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body)
            .map_err(|e| RequestError::Transport(format!("invalid JSON response: {e}")))
    }
}

#[async_trait]
impl Backend for ApiClient {
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Value, RequestError> {
        self.execute(reqwest::Method::GET, path, query, Payload::Empty)
            .await
    }

    async fn post(&self, path: &str, payload: Payload) -> Result<Value, RequestError> {
        self.execute(reqwest::Method::POST, path, &[], payload).await
    }

    async fn put(&self, path: &str, payload: Payload) -> Result<Value, RequestError> {
        self.execute(reqwest::Method::PUT, path, &[], payload).await
    }

    async fn delete(&self, path: &str) -> Result<Value, RequestError> {
        self.execute(reqwest::Method::DELETE, path, &[], Payload::Empty)
            .await
    }
}

/// Extract the failure message from a non-success response: the server's
/// JSON `message` field when present, otherwise a generic status message.
fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .and_then(Value::as_str)
                .map(str::to_owned)
        })
        .unwrap_or_else(|| format!("request failed with status {status}"))
}

fn build_form(parts: Vec<FormPart>) -> Result<reqwest::multipart::Form, RequestError> {
    let mut form = reqwest::multipart::Form::new();
    for part in parts {
        form = match part.value {
            FormValue::Text(text) => form.text(part.name, text),
            FormValue::File {
                filename,
                content_type,
                data,
            } => {
                let file = reqwest::multipart::Part::bytes(data)
                    .file_name(filename)
                    .mime_str(&content_type)
                    .map_err(|e| RequestError::Transport(format!("invalid content type: {e}")))?;
                form.part(part.name, file)
            }
        };
    }
    Ok(form)
}

/// Deserialize a response body into a typed value.
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T, RequestError> {
    serde_json::from_value(value)
        .map_err(|e| RequestError::Transport(format!("invalid response shape: {e}")))
}

/// Serialize a request payload into a JSON body.
pub fn encode<T: Serialize>(value: &T) -> Result<Value, RequestError> {
    serde_json::to_value(value)
        .map_err(|e| RequestError::Transport(format!("invalid request payload: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_server_message_field() {
        let msg = error_message(400, r#"{"message":"name is required"}"#);
        assert_eq!(msg, "name is required");
    }

    #[test]
    fn falls_back_to_status_when_message_missing() {
        assert_eq!(
            error_message(500, r#"{"error":"boom"}"#),
            "request failed with status 500"
        );
        assert_eq!(
            error_message(502, "<html>bad gateway</html>"),
            "request failed with status 502"
        );
    }

    #[test]
    fn base_url_joins_without_double_slash() {
        let client = ApiClient::new("http://localhost:5000/");
        assert_eq!(client.url("/categories"), "http://localhost:5000/categories");
    }
}
