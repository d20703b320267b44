//! URL building utilities for API endpoints

/// Builds the current roster URL for a team.
///
/// # Example
/// ```
/// use nhl_stats::data_fetcher::api::build_roster_url;
///
/// let url = build_roster_url("https://api-web.nhle.com/v1", "BOS");
/// assert_eq!(url, "https://api-web.nhle.com/v1/roster/BOS/current");
/// ```
pub fn build_roster_url(api_domain: &str, team: &str) -> String {
    format!("{api_domain}/roster/{team}/current")
}

/// Builds the "landing" profile URL for a player.
///
/// # Example
/// ```
/// use nhl_stats::data_fetcher::api::build_player_landing_url;
///
/// let url = build_player_landing_url("https://api-web.nhle.com/v1", 8478402);
/// assert_eq!(url, "https://api-web.nhle.com/v1/player/8478402/landing");
/// ```
pub fn build_player_landing_url(api_domain: &str, player_id: u64) -> String {
    format!("{api_domain}/player/{player_id}/landing")
}

/// Builds the league-wide standings URL.
pub fn build_standings_url(api_domain: &str) -> String {
    format!("{api_domain}/standings/now")
}

/// Builds the scoreboard URL for a date in YYYY-MM-DD format.
///
/// # Example
/// ```
/// use nhl_stats::data_fetcher::api::build_score_url;
///
/// let url = build_score_url("https://api-web.nhle.com/v1", "2024-01-15");
/// assert_eq!(url, "https://api-web.nhle.com/v1/score/2024-01-15");
/// ```
pub fn build_score_url(api_domain: &str, date: &str) -> String {
    format!("{api_domain}/score/{date}")
}

/// Builds the regular season (game type 2) skater leaders URL for one category.
///
/// # Example
/// ```
/// use nhl_stats::data_fetcher::api::build_skater_leaders_url;
///
/// let url = build_skater_leaders_url("https://api-web.nhle.com/v1", "20232024", "points", 3);
/// assert_eq!(
///     url,
///     "https://api-web.nhle.com/v1/skater-stats-leaders/20232024/2?categories=points&limit=3"
/// );
/// ```
pub fn build_skater_leaders_url(
    api_domain: &str,
    season: &str,
    category: &str,
    limit: usize,
) -> String {
    format!("{api_domain}/skater-stats-leaders/{season}/2?categories={category}&limit={limit}")
}

/// Normalizes a configured API domain: adds an https:// scheme when missing
/// and strips trailing slashes so the builders above can append paths.
pub fn normalize_api_domain(api_domain: &str) -> String {
    let trimmed = api_domain.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}
