//! Generic HTTP fetching with caching, optional retries and error mapping

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

use super::context::NhlApi;
use crate::constants::RETRY_INITIAL_BACKOFF_MS;
use crate::data_fetcher::cache::CacheKey;
use crate::error::AppError;

/// Fetches `url` and decodes the JSON body as `T`.
///
/// - A fresh cached body for `GET url` is served without a network call
/// - Transient failures (429, 5xx, timeouts, connect errors) are retried
///   up to `api.max_retries()` times with exponential backoff, honoring
///   `Retry-After`
/// - Only bodies that decode successfully are cached
#[instrument(skip(api))]
pub(super) async fn fetch<T: DeserializeOwned>(api: &NhlApi, url: &str) -> Result<T, AppError> {
    let key = CacheKey::get(url);

    if let Some(cached_response) = api.cache().get(&key).await {
        debug!("Using cached HTTP response for URL: {url}");
        match serde_json::from_str::<T>(&cached_response) {
            Ok(parsed) => return Ok(parsed),
            Err(e) => {
                warn!("Failed to parse cached response for URL {}: {}", url, e);
            }
        }
    }

    info!("Fetching data from URL: {url}");
    let response_text = fetch_text(api, url).await?;

    debug!("Response length: {} bytes", response_text.len());

    match serde_json::from_str::<T>(&response_text) {
        Ok(parsed) => {
            api.cache().put(key, response_text).await;
            Ok(parsed)
        }
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);
            debug!(
                "Response text (first 200 chars): {}",
                response_text.chars().take(200).collect::<String>()
            );
            Err(classify_parse_error(&response_text, &e, url))
        }
    }
}

/// Sends the request, retrying failures that [`AppError::is_retryable`]
/// accepts, and returns the body of a successful response.
async fn fetch_text(api: &NhlApi, url: &str) -> Result<String, AppError> {
    let max_retries = api.max_retries();
    let mut attempt = 0u32;
    let mut backoff = Duration::from_millis(RETRY_INITIAL_BACKOFF_MS);

    loop {
        let (error, retry_after) = match api.client().get(url).send().await {
            Ok(response) => {
                let status = response.status();
                debug!("Response status: {status}");

                if status.is_success() {
                    return response.text().await.map_err(|e| {
                        error!("Failed to read response text from URL {}: {}", url, e);
                        AppError::ApiFetch(e)
                    });
                }

                let retry_after = response
                    .headers()
                    .get(reqwest::header::RETRY_AFTER)
                    .and_then(|h| h.to_str().ok())
                    .and_then(|s| s.parse::<u64>().ok())
                    .map(Duration::from_secs);
                (status_error(status, url), retry_after)
            }
            Err(e) => (request_error(e, url), None),
        };

        if !error.is_retryable() || attempt >= max_retries {
            error!("Request failed for URL {}: {}", url, error);
            return Err(error);
        }

        let wait = retry_after.unwrap_or(backoff);
        warn!(
            "{} Retrying in {:?} (attempt {}/{})",
            error,
            wait,
            attempt + 1,
            max_retries
        );
        tokio::time::sleep(wait).await;
        attempt += 1;
        backoff = backoff.saturating_mul(2);
    }
}

/// Maps a transport error to its error variant.
fn request_error(error: reqwest::Error, url: &str) -> AppError {
    if error.is_timeout() {
        AppError::network_timeout(url)
    } else if error.is_connect() {
        AppError::network_connection(url, error.to_string())
    } else {
        AppError::ApiFetch(error)
    }
}

/// Maps a non-success status to its error variant.
fn status_error(status: StatusCode, url: &str) -> AppError {
    let status_code = status.as_u16();
    let reason = status.canonical_reason().unwrap_or("Unknown error");

    match status_code {
        404 => AppError::api_not_found(url),
        429 => AppError::api_rate_limit(reason, url),
        400..=499 => AppError::api_client_error(status_code, reason, url),
        502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
        _ => AppError::api_server_error(status_code, reason, url),
    }
}

/// Splits a decode failure into empty body, non-JSON body, or JSON of the
/// wrong shape.
fn classify_parse_error(body: &str, error: &serde_json::Error, url: &str) -> AppError {
    let trimmed = body.trim_start();
    if trimmed.is_empty() {
        AppError::api_no_data("Response body is empty", url)
    } else if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
        AppError::api_malformed_json("Response is not valid JSON", url)
    } else {
        AppError::api_unexpected_structure(error.to_string(), url)
    }
}
