use crate::config::Config;
use crate::constants::MAX_CONCURRENT_REQUESTS_LIMIT;
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API domain cannot be empty and must be an http(s) URL or look like a domain
/// - HTTP timeout must be positive
/// - Concurrency cap must be between 1 and `MAX_CONCURRENT_REQUESTS_LIMIT`
/// - Cache capacity must be positive
/// - If a log file path is provided, it cannot be empty and its parent directory must be creatable
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    let api_domain = config.api_domain.as_str();
    if api_domain.is_empty() {
        return Err(AppError::config_error("API domain cannot be empty"));
    }

    if !api_domain.starts_with("http://")
        && !api_domain.starts_with("https://")
        && !api_domain.contains('.')
        && !api_domain.starts_with("localhost")
    {
        return Err(AppError::config_error(
            "API domain must be a valid URL or domain name",
        ));
    }

    if config.http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least 1 second",
        ));
    }

    if config.max_concurrent_requests == 0
        || config.max_concurrent_requests > MAX_CONCURRENT_REQUESTS_LIMIT
    {
        return Err(AppError::config_error(format!(
            "max_concurrent_requests must be between 1 and {MAX_CONCURRENT_REQUESTS_LIMIT}"
        )));
    }

    if config.cache_capacity == 0 {
        return Err(AppError::config_error("cache_capacity must be at least 1"));
    }

    if let Some(log_path) = &config.log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
