//! Client configuration
//!
//! Everything that varies between deployments is fixed here at construction
//! time; the client itself holds no mutable configuration.

use kraken_auth::{Credentials, DEFAULT_NONCE_OFFSET};
use std::time::Duration;

/// The default Kraken API url
pub const DEFAULT_BASE_URL: &str = "https://api.kraken.com";

/// The default Kraken API version
pub const DEFAULT_VERSION: &str = "0";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default lifetime of cached reference data
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(15 * 60);

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base url, without a trailing slash
    pub base_url: String,
    /// API version segment of every path
    pub version: String,
    /// API credentials (optional; private endpoints need them)
    pub credentials: Option<Credentials>,
    /// Whether reference data (assets, asset pairs) is cached
    pub cache_enabled: bool,
    /// Maximum age of a cached reference-data entry
    pub cache_ttl: Duration,
    /// Request timeout for the built-in transport
    pub timeout: Duration,
    /// Custom user agent
    pub user_agent: Option<String>,
    /// Additive offset applied by the nonce generator
    pub nonce_offset: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            version: DEFAULT_VERSION.to_string(),
            credentials: None,
            cache_enabled: true,
            cache_ttl: DEFAULT_CACHE_TTL,
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
            nonce_offset: DEFAULT_NONCE_OFFSET,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base url
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the API version segment
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Enable or disable reference-data caching
    pub fn with_cache_enabled(mut self, enabled: bool) -> Self {
        self.cache_enabled = enabled;
        self
    }

    /// Set the reference-data cache lifetime
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the nonce generator's additive offset
    pub fn with_nonce_offset(mut self, offset: u64) -> Self {
        self.nonce_offset = offset;
        self
    }
}
