//! Main REST client implementation
//!
//! `query_public` and `query_private` are the two dispatch primitives every
//! typed endpoint goes through. Both return the raw response body after the
//! envelope's error array has been decoded and checked, so callers only ever
//! deserialize bodies that carry no hard failure.

use crate::cache::ReferenceCache;
use crate::config::ClientConfig;
use crate::error::{RestError, RestResult};
use crate::transport::{HttpTransport, ReqwestTransport};
use kraken_auth::{Credentials, NonceGenerator};
use kraken_models::{decode_errors, ApiError, ApiResponse};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, info};

/// Kraken REST API client
///
/// Provides access to both public and private endpoints. Clones share the
/// nonce sequence and the reference-data cache, so a clone behaves like the
/// instance it was cloned from.
///
/// # Example
///
/// ```no_run
/// use kraken_rest::{Credentials, KrakenClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = KrakenClient::new();
///     let time = client.server_time().await?;
///     println!("server time: {}", time.rfc1123);
///
///     // With credentials for private endpoints
///     let creds = Credentials::from_env()?;
///     let client = KrakenClient::with_credentials(creds);
///     let balance = client.balance().await?;
///     println!("balances: {:?}", balance);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct KrakenClient {
    transport: Arc<dyn HttpTransport>,
    credentials: Option<Credentials>,
    base_url: String,
    version: String,
    nonces: Arc<NonceGenerator>,
    pub(crate) cache: Arc<ReferenceCache>,
}

impl KrakenClient {
    /// Create a client without credentials; only public endpoints are usable
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client with credentials for private endpoints
    pub fn with_credentials(credentials: Credentials) -> Self {
        Self::with_config(ClientConfig::default().with_credentials(credentials))
    }

    /// Create a client from a full configuration, using the reqwest transport
    pub fn with_config(config: ClientConfig) -> Self {
        let transport = Arc::new(ReqwestTransport::new(
            config.timeout,
            config.user_agent.as_deref(),
        ));
        Self::with_transport(config, transport)
    }

    /// Create a client over a custom transport.
    ///
    /// This is the seam tests use to substitute a scripted responder for the
    /// HTTP stack.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn HttpTransport>) -> Self {
        info!("created Kraken REST client for {}", config.base_url);

        Self {
            transport,
            credentials: config.credentials,
            base_url: config.base_url,
            version: config.version,
            nonces: Arc::new(NonceGenerator::with_offset(config.nonce_offset)),
            cache: Arc::new(ReferenceCache::new(config.cache_enabled, config.cache_ttl)),
        }
    }

    /// Whether private endpoints are available
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Call a public API method and return the raw response body.
    ///
    /// The body is form-encoded from `params` in the given order; an empty
    /// parameter set posts an empty body.
    pub async fn query_public(&self, method: &str, params: &[(&str, &str)]) -> RestResult<String> {
        let body = encode_params(params)?;
        let url = format!("{}/{}/public/{}", self.base_url, self.version, method);

        debug!("querying public {}", method);
        let raw = self.transport.post(&url, &body, &[]).await?;
        self.ensure_no_errors(&raw)?;
        Ok(raw)
    }

    /// Call a private API method and return the raw response body.
    ///
    /// A nonce is generated and prepended unless `params` already carries an
    /// explicit `nonce` key. The request is signed over the exact body that
    /// goes on the wire and authenticated with the `API-Key` / `API-Sign`
    /// headers.
    pub async fn query_private(&self, method: &str, params: &[(&str, &str)]) -> RestResult<String> {
        let credentials = self.credentials.as_ref().ok_or(RestError::AuthRequired)?;

        let generated;
        let explicit = params.iter().find(|(key, _)| *key == "nonce");
        let nonce = match explicit {
            Some((_, value)) => *value,
            None => {
                generated = self.nonces.next();
                generated.as_str()
            }
        };

        let mut form: Vec<(&str, &str)> = Vec::with_capacity(params.len() + 1);
        if explicit.is_none() {
            form.push(("nonce", nonce));
        }
        form.extend_from_slice(params);

        let body = encode_params(&form)?;
        let path = format!("/{}/private/{}", self.version, method);
        let signature = credentials.sign(&path, nonce, &body);
        let url = format!("{}{}", self.base_url, path);

        debug!("querying private {}", method);
        let headers = [
            ("API-Key", credentials.api_key()),
            ("API-Sign", signature.as_str()),
        ];
        let raw = self.transport.post(&url, &body, &headers).await?;
        self.ensure_no_errors(&raw)?;
        Ok(raw)
    }

    /// Decode the error array and fail when any record is a hard failure
    fn ensure_no_errors(&self, raw: &str) -> RestResult<()> {
        let records =
            decode_errors(raw).map_err(|e| RestError::MalformedResponse(e.to_string()))?;
        if records.iter().any(ApiError::is_error) {
            return Err(RestError::Exchange(records));
        }
        Ok(())
    }
}

impl Default for KrakenClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for KrakenClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KrakenClient")
            .field("base_url", &self.base_url)
            .field("version", &self.version)
            .field("has_credentials", &self.has_credentials())
            .finish()
    }
}

/// Form-encode parameters preserving their order
fn encode_params(params: &[(&str, &str)]) -> RestResult<String> {
    serde_urlencoded::to_string(params).map_err(|e| RestError::InvalidParameter(e.to_string()))
}

/// Deserialize the `result` payload out of an already error-checked body
pub(crate) fn decode_result<T: DeserializeOwned>(raw: &str) -> RestResult<T> {
    let response: ApiResponse<T> =
        serde_json::from_str(raw).map_err(|e| RestError::MalformedResponse(e.to_string()))?;
    response
        .result
        .ok_or_else(|| RestError::MalformedResponse("response envelope has no result".to_string()))
}
