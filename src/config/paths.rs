use std::path::Path;

/// Returns the platform-specific path for the config file.
///
/// Uses the platform config directory (e.g., ~/.config on Linux) and falls
/// back to the current directory when it is unavailable.
pub fn get_config_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join("nhl_stats")
        .join("config.toml")
        .to_string_lossy()
        .to_string()
}

/// Returns the platform-specific path for the log directory.
pub fn get_log_dir_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join("nhl_stats")
        .join("logs")
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_generation() {
        let path = get_config_path();
        assert!(path.ends_with("config.toml"));
        assert!(path.contains("nhl_stats"));
    }

    #[test]
    fn test_log_dir_path_generation() {
        let path = get_log_dir_path();
        assert!(path.ends_with("logs"));
        assert!(path.contains("nhl_stats"));
    }
}
