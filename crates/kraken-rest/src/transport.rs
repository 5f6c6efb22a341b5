//! HTTP transport abstraction
//!
//! All requests the client makes are form-encoded POSTs, so the transport
//! surface is a single call. Routing it through a trait lets tests substitute
//! a scripted responder for the real HTTP stack and exercise the full
//! dispatch/signing/decoding pipeline without network access.
//!
//! # Example
//!
//! ```no_run
//! use kraken_rest::transport::{HttpTransport, ReqwestTransport};
//! use std::time::Duration;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let transport = ReqwestTransport::new(Duration::from_secs(30), None);
//!     let body = transport
//!         .post("https://api.kraken.com/0/public/Time", "", &[])
//!         .await?;
//!     println!("{}", body);
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Media type of every request body
pub const FORM_MEDIA_TYPE: &str = "application/x-www-form-urlencoded";

/// Transport layer errors
#[derive(Error, Debug)]
pub enum TransportError {
    /// The HTTP round trip failed
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A scripted transport received a request it has no response for
    #[error("no scripted response for POST {url} with body {body:?}")]
    Unscripted {
        /// Requested URL
        url: String,
        /// Request body as sent
        body: String,
    },
}

/// Trait for the HTTP POST mechanism behind every API call.
///
/// Implementations return the raw response body; classifying that body
/// (envelope errors, deserialization) is the caller's job.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issue a form-encoded POST and return the response body
    async fn post(
        &self,
        url: &str,
        body: &str,
        headers: &[(&str, &str)],
    ) -> Result<String, TransportError>;
}

/// Production transport backed by a reqwest client
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport with the given request timeout and user agent
    pub fn new(timeout: Duration, user_agent: Option<&str>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent.unwrap_or(concat!("kraken-rest/", env!("CARGO_PKG_VERSION"))))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post(
        &self,
        url: &str,
        body: &str,
        headers: &[(&str, &str)],
    ) -> Result<String, TransportError> {
        debug!("POST {} ({} byte body)", url, body.len());

        let mut request = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, FORM_MEDIA_TYPE)
            .body(body.to_string());

        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        // The exchange reports failures inside the body envelope, so the
        // status line is not consulted here.
        let response = request.send().await?;
        Ok(response.text().await?)
    }
}

/// One request as seen by a [`ScriptedTransport`]
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Requested URL
    pub url: String,
    /// Request body as sent
    pub body: String,
    /// Custom headers the client attached
    pub headers: Vec<(String, String)>,
}

impl RecordedRequest {
    /// Look up a header by name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Scripted responder for tests.
///
/// Responses are keyed by `(url, body)`; a URL-only fallback covers private
/// calls whose body carries a freshly generated nonce. Every request is
/// recorded, headers included, so tests can assert on what actually went out.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<HashMap<(String, String), String>>,
    url_responses: Mutex<HashMap<String, String>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl ScriptedTransport {
    /// Empty script; every request errors until responses are added
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a response for an exact `(url, body)` pair
    pub fn respond(&self, url: impl Into<String>, body: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .insert((url.into(), body.into()), response.into());
    }

    /// Script a response for a URL regardless of body
    pub fn respond_any_body(&self, url: impl Into<String>, response: impl Into<String>) {
        self.url_responses.lock().insert(url.into(), response.into());
    }

    /// Requests seen so far, oldest first
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    /// How many requests have been issued
    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn post(
        &self,
        url: &str,
        body: &str,
        headers: &[(&str, &str)],
    ) -> Result<String, TransportError> {
        self.requests.lock().push(RecordedRequest {
            url: url.to_string(),
            body: body.to_string(),
            headers: headers
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        });

        if let Some(response) = self.responses.lock().get(&(url.to_string(), body.to_string())) {
            return Ok(response.clone());
        }
        if let Some(response) = self.url_responses.lock().get(url) {
            return Ok(response.clone());
        }

        Err(TransportError::Unscripted {
            url: url.to_string(),
            body: body.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_exact_match() {
        let transport = ScriptedTransport::new();
        transport.respond("https://example.test/a", "x=1", "ok");

        let body = transport.post("https://example.test/a", "x=1", &[]).await.unwrap();
        assert_eq!(body, "ok");
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test]
    async fn test_scripted_url_fallback() {
        let transport = ScriptedTransport::new();
        transport.respond_any_body("https://example.test/a", "fallback");

        let body = transport
            .post("https://example.test/a", "nonce=1234", &[])
            .await
            .unwrap();
        assert_eq!(body, "fallback");
    }

    #[tokio::test]
    async fn test_unscripted_request_errors() {
        let transport = ScriptedTransport::new();
        let result = transport.post("https://example.test/missing", "", &[]).await;
        assert!(matches!(result, Err(TransportError::Unscripted { .. })));
    }

    #[tokio::test]
    async fn test_requests_are_recorded_with_headers() {
        let transport = ScriptedTransport::new();
        transport.respond("https://example.test/a", "", "ok");

        transport
            .post("https://example.test/a", "", &[("API-Key", "k")])
            .await
            .unwrap();

        let recorded = transport.requests();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].header("API-Key"), Some("k"));
        assert_eq!(recorded[0].header("API-Sign"), None);
    }
}
