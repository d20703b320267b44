//! HTTP client creation and configuration utilities

use reqwest::Client;
use std::time::Duration;

/// Creates the pooled HTTP client shared by every fetch.
///
/// One client multiplexes all concurrent requests of a fan-out; its pool is
/// safe for concurrent use, so it is cloned rather than rebuilt per request.
pub fn create_http_client_with_timeout(timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .user_agent(concat!("nhl_stats/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Creates an HTTP client for testing with default timeout
#[cfg(test)]
pub fn create_test_http_client() -> Client {
    create_http_client_with_timeout(crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS)
        .expect("Failed to create test HTTP client")
}
