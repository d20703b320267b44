//! Application-wide constants and configuration defaults
//!
//! Centralizes the magic numbers used by the fetchers, cache and config layer.

/// Base URL of the public NHL web API
pub const DEFAULT_API_DOMAIN: &str = "https://api-web.nhle.com/v1";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host kept in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 32;

/// Default cap on simultaneously in-flight requests during fan-out
pub const DEFAULT_MAX_CONCURRENT_REQUESTS: usize = 8;

/// Upper bound accepted for `max_concurrent_requests`
pub const MAX_CONCURRENT_REQUESTS_LIMIT: usize = 256;

/// Default number of retries for transient failures (none)
pub const DEFAULT_MAX_RETRIES: u32 = 0;

/// Initial backoff between retries in milliseconds, doubled per attempt
pub const RETRY_INITIAL_BACKOFF_MS: u64 = 250;

/// Response cache defaults
pub mod cache {
    /// TTL for cached HTTP responses (1 hour)
    pub const DEFAULT_TTL_SECONDS: u64 = 3600;

    /// Number of responses kept before LRU eviction. A full player sweep
    /// touches ~32 rosters plus several hundred landing pages.
    pub const DEFAULT_CAPACITY: usize = 1024;
}

/// Environment variable names for configuration overrides
pub mod env_vars {
    pub const API_DOMAIN: &str = "NHL_STATS_API_DOMAIN";
    pub const LOG_FILE: &str = "NHL_STATS_LOG_FILE";
    pub const HTTP_TIMEOUT: &str = "NHL_STATS_HTTP_TIMEOUT";
    pub const CACHE_TTL: &str = "NHL_STATS_CACHE_TTL";
    pub const MAX_CONCURRENCY: &str = "NHL_STATS_MAX_CONCURRENCY";
}

/// Placeholder name used when a player's landing page cannot be fetched
pub const PLAYER_NOT_FOUND_NAME: &str = "No player found";

/// Default number of rows shown by the point leaders and top teams views
pub const DEFAULT_TOP_N: usize = 3;

/// Three-letter codes of every franchise, in the order rosters are fetched.
pub const NHL_TEAM_ABBREVIATIONS: [&str; 32] = [
    "ANA", // Anaheim Ducks
    "ARI", // Arizona Coyotes
    "BOS", // Boston Bruins
    "BUF", // Buffalo Sabres
    "CGY", // Calgary Flames
    "CAR", // Carolina Hurricanes
    "CHI", // Chicago Blackhawks
    "COL", // Colorado Avalanche
    "CBJ", // Columbus Blue Jackets
    "DAL", // Dallas Stars
    "DET", // Detroit Red Wings
    "EDM", // Edmonton Oilers
    "FLA", // Florida Panthers
    "LAK", // Los Angeles Kings
    "MIN", // Minnesota Wild
    "MTL", // Montreal Canadiens
    "NSH", // Nashville Predators
    "NJD", // New Jersey Devils
    "NYI", // New York Islanders
    "NYR", // New York Rangers
    "OTT", // Ottawa Senators
    "PHI", // Philadelphia Flyers
    "PIT", // Pittsburgh Penguins
    "SJS", // San Jose Sharks
    "SEA", // Seattle Kraken
    "STL", // St. Louis Blues
    "TBL", // Tampa Bay Lightning
    "TOR", // Toronto Maple Leafs
    "VAN", // Vancouver Canucks
    "VGK", // Vegas Golden Knights
    "WSH", // Washington Capitals
    "WPG", // Winnipeg Jets
];
