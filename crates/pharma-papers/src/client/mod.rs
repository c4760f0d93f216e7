//! NCBI E-utilities client.
//!
//! Provides an async HTTP client with:
//! - Connection pooling via reqwest
//! - Retry middleware with exponential backoff
//! - Rate limiting (3 req/s without API key, 10 req/s with one)
//! - Response caching with 5-minute TTL

mod xml;

use std::time::Duration;

use moka::future::Cache;
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::models::RawArticle;

pub use xml::{parse_efetch, parse_esearch};

/// PubMed E-utilities client.
#[derive(Clone)]
pub struct PubMedClient {
    /// HTTP client with middleware.
    client: ClientWithMiddleware,

    /// Raw response body cache.
    cache: Cache<String, String>,

    /// NCBI API key (optional).
    api_key: Option<String>,

    /// Contact email passed along with each request.
    email: Option<String>,

    /// E-utilities base URL.
    eutils_url: String,

    /// Rate limit delay.
    rate_limit_delay: Duration,
}

impl PubMedClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(api::MAX_KEEPALIVE)
            .pool_idle_timeout(api::KEEPALIVE_EXPIRY)
            .gzip(true)
            .build()?;

        let retry_policy = ExponentialBackoff::builder()
            .retry_bounds(Duration::from_secs(1), Duration::from_secs(30))
            .build_with_max_retries(3);

        let client = ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        let cache = Cache::builder()
            .max_capacity(config.cache_max_size)
            .time_to_live(config.cache_ttl)
            .build();

        Ok(Self {
            client,
            cache,
            api_key: config.api_key,
            email: config.email,
            eutils_url: config.eutils_url,
            rate_limit_delay: config.rate_limit_delay,
        })
    }

    /// Check if an API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Search PubMed and return matching PMIDs, relevance-sorted.
    ///
    /// `max_results` bounds how many IDs (and thus how many article records)
    /// are ever fetched.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn search(&self, query: &str, max_results: usize) -> ClientResult<Vec<String>> {
        let url = format!("{}/esearch.fcgi", self.eutils_url);

        let mut params = vec![
            ("db".to_string(), "pubmed".to_string()),
            ("term".to_string(), query.to_string()),
            ("retmax".to_string(), max_results.to_string()),
            ("sort".to_string(), "relevance".to_string()),
        ];
        self.push_common_params(&mut params);

        let body = self.get_text(&url, &params).await?;
        let pmids = parse_esearch(&body)?;

        tracing::debug!(query, found = pmids.len(), "esearch complete");
        Ok(pmids)
    }

    /// Fetch full article records for the given PMIDs, in chunks.
    ///
    /// Results come back in request order; invalid PMIDs are simply absent
    /// from the response.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn fetch_articles(&self, pmids: &[String]) -> ClientResult<Vec<RawArticle>> {
        let url = format!("{}/efetch.fcgi", self.eutils_url);
        let mut articles = Vec::with_capacity(pmids.len());

        for chunk in pmids.chunks(api::EFETCH_CHUNK) {
            let mut params = vec![
                ("db".to_string(), "pubmed".to_string()),
                ("id".to_string(), chunk.join(",")),
                ("retmode".to_string(), "xml".to_string()),
            ];
            self.push_common_params(&mut params);

            let body = self.get_text(&url, &params).await?;
            articles.extend(parse_efetch(&body)?);
        }

        tracing::debug!(requested = pmids.len(), fetched = articles.len(), "efetch complete");
        Ok(articles)
    }

    /// Search and fetch in one step.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn search_and_fetch(
        &self,
        query: &str,
        max_results: usize,
    ) -> ClientResult<Vec<RawArticle>> {
        let pmids = self.search(query, max_results).await?;
        if pmids.is_empty() {
            return Ok(Vec::new());
        }
        self.fetch_articles(&pmids).await
    }

    /// Append tool/email/api_key parameters NCBI expects on every request.
    fn push_common_params(&self, params: &mut Vec<(String, String)>) {
        params.push(("tool".to_string(), api::TOOL_NAME.to_string()));
        if let Some(ref email) = self.email {
            params.push(("email".to_string(), email.clone()));
        }
        if let Some(ref key) = self.api_key {
            params.push(("api_key".to_string(), key.clone()));
        }
    }

    /// Make a GET request, returning the raw response body.
    async fn get_text(&self, url: &str, params: &[(String, String)]) -> ClientResult<String> {
        // Check cache
        let cache_key = self.cache_key("GET", url, params);
        if let Some(cached) = self.cache.get(&cache_key).await {
            return Ok(cached);
        }

        // Rate limit
        tokio::time::sleep(self.rate_limit_delay).await;

        let response = self.client.get(url).query(params).send().await?;
        let response = self.handle_response(response).await?;
        let body = response.text().await?;

        // Cache response
        self.cache.insert(cache_key, body.clone()).await;

        Ok(body)
    }

    /// Handle API response status codes.
    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        match status.as_u16() {
            429 => {
                let retry_after = response
                    .headers()
                    .get("Retry-After")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(60);

                Err(ClientError::rate_limited(retry_after))
            }
            404 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::not_found(text))
            }
            400 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::bad_request(text))
            }
            500..=599 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::server(status.as_u16(), text))
            }
            _ => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::UnexpectedStatus { status: status.as_u16(), message: text })
            }
        }
    }

    /// Generate cache key.
    fn cache_key(&self, method: &str, url: &str, params: &[(String, String)]) -> String {
        use md5::{Digest, Md5};

        let mut hasher = Md5::new();
        hasher.update(method.as_bytes());
        hasher.update(b"|");
        hasher.update(url.as_bytes());
        hasher.update(b"|");

        for (k, v) in params {
            hasher.update(k.as_bytes());
            hasher.update(b"=");
            hasher.update(v.as_bytes());
            hasher.update(b"&");
        }

        format!("{:x}", hasher.finalize())
    }
}

impl std::fmt::Debug for PubMedClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PubMedClient").field("has_api_key", &self.has_api_key()).finish()
    }
}
