//! The API context every fetch runs against

use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use super::http_client::create_http_client_with_timeout;
use super::urls::normalize_api_domain;
use crate::config::Config;
use crate::constants::{
    DEFAULT_HTTP_TIMEOUT_SECONDS, DEFAULT_MAX_CONCURRENT_REQUESTS, DEFAULT_MAX_RETRIES,
    MAX_CONCURRENT_REQUESTS_LIMIT, cache as cache_defaults,
};
use crate::data_fetcher::cache::HttpResponseCache;
use crate::error::AppError;

/// Shared state for talking to the stats API: the pooled HTTP client, the
/// base domain, the response cache and the fan-out limits.
///
/// Cloning is cheap and clones share the same connection pool and cache.
#[derive(Debug, Clone)]
pub struct NhlApi {
    client: Client,
    api_domain: String,
    cache: Arc<HttpResponseCache>,
    max_concurrent_requests: usize,
    max_retries: u32,
}

impl NhlApi {
    /// Builds a context from the loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
        let cache = HttpResponseCache::new(
            config.cache_capacity,
            Duration::from_secs(config.cache_ttl_seconds),
        );

        debug!(
            "Created API context: domain={}, timeout={}s, cache_ttl={}s, concurrency={}",
            config.api_domain,
            config.http_timeout_seconds,
            config.cache_ttl_seconds,
            config.max_concurrent_requests
        );

        Ok(Self::with_client(client, &config.api_domain, Arc::new(cache))
            .with_max_concurrent_requests(config.max_concurrent_requests)
            .with_max_retries(config.max_retries))
    }

    /// Builds a context against `api_domain` with default limits.
    pub fn new(api_domain: &str) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(DEFAULT_HTTP_TIMEOUT_SECONDS)?;
        let cache = HttpResponseCache::new(
            cache_defaults::DEFAULT_CAPACITY,
            Duration::from_secs(cache_defaults::DEFAULT_TTL_SECONDS),
        );
        Ok(Self::with_client(client, api_domain, Arc::new(cache)))
    }

    /// Builds a context from an existing client and cache.
    pub fn with_client(client: Client, api_domain: &str, cache: Arc<HttpResponseCache>) -> Self {
        Self {
            client,
            api_domain: normalize_api_domain(api_domain),
            cache,
            max_concurrent_requests: DEFAULT_MAX_CONCURRENT_REQUESTS,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Sets the fan-out limit, clamped to `1..=MAX_CONCURRENT_REQUESTS_LIMIT`.
    pub fn with_max_concurrent_requests(mut self, limit: usize) -> Self {
        self.max_concurrent_requests = limit.clamp(1, MAX_CONCURRENT_REQUESTS_LIMIT);
        self
    }

    pub fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Replaces the response cache, e.g. to share one between contexts.
    pub fn with_cache(mut self, cache: Arc<HttpResponseCache>) -> Self {
        self.cache = cache;
        self
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn api_domain(&self) -> &str {
        &self.api_domain
    }

    pub fn cache(&self) -> &HttpResponseCache {
        &self.cache
    }

    pub fn max_concurrent_requests(&self) -> usize {
        self.max_concurrent_requests
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }
}
