//! Configuration for the PubMed pharma-papers pipeline.

use std::time::Duration;

/// NCBI E-utilities API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Base URL for the NCBI E-utilities API.
    pub const EUTILS_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

    /// Request timeout (EFetch bodies for large batches can be slow).
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Rate limit delay between requests without API key (334ms = 3 req/s).
    pub const RATE_LIMIT_DELAY: Duration = Duration::from_millis(334);

    /// Rate limit delay between requests with API key (100ms = 10 req/s).
    pub const RATE_LIMIT_DELAY_WITH_KEY: Duration = Duration::from_millis(100);

    /// Cache TTL (5 minutes).
    pub const CACHE_TTL: Duration = Duration::from_secs(300);

    /// Maximum cache size.
    pub const CACHE_MAX_SIZE: u64 = 100;

    /// Maximum keepalive connections.
    pub const MAX_KEEPALIVE: usize = 10;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);

    /// PMIDs per EFetch request (NCBI recommends batching, caps URLs at ~200 ids).
    pub const EFETCH_CHUNK: usize = 200;

    /// Default maximum number of papers to retrieve.
    pub const DEFAULT_MAX_RESULTS: usize = 100;

    /// Tool name sent with every E-utilities request.
    pub const TOOL_NAME: &str = "pharma-papers";
}

/// Pipeline configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// NCBI API key (optional, raises the rate limit).
    pub api_key: Option<String>,

    /// Contact email sent with E-utilities requests (NCBI asks for one).
    pub email: Option<String>,

    /// Base URL for E-utilities (overridable for testing with mock servers).
    pub eutils_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Rate limit delay between requests.
    pub rate_limit_delay: Duration,

    /// Cache TTL.
    pub cache_ttl: Duration,

    /// Maximum cache size.
    pub cache_max_size: u64,
}

impl Config {
    /// Create a new configuration with optional API key and contact email.
    ///
    /// The rate limit is adjusted based on API key presence:
    /// - Without key: 3 req/s
    /// - With key: 10 req/s
    #[must_use]
    pub fn new(api_key: Option<String>, email: Option<String>) -> Self {
        let has_key = api_key.is_some();
        Self {
            api_key,
            email,
            eutils_url: api::EUTILS_URL.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            rate_limit_delay: if has_key {
                api::RATE_LIMIT_DELAY_WITH_KEY
            } else {
                api::RATE_LIMIT_DELAY
            },
            cache_ttl: api::CACHE_TTL,
            cache_max_size: api::CACHE_MAX_SIZE,
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_key: None,
            email: None,
            eutils_url: format!("{base_url}/entrez/eutils"),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            rate_limit_delay: Duration::from_millis(0), // No delay in tests
            cache_ttl: Duration::from_secs(0),          // No caching in tests
            cache_max_size: 0,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns error if environment variables are invalid.
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = std::env::var("NCBI_API_KEY").ok();
        let email = std::env::var("ENTREZ_EMAIL").ok();
        Ok(Self::new(api_key, email))
    }

    /// Check if an API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None, None)
    }
}
