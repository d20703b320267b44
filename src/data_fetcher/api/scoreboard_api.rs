//! Daily scoreboard and skater leader fetching

use tracing::{info, instrument};

use super::context::NhlApi;
use super::fetch_utils::fetch;
use super::urls::{build_score_url, build_skater_leaders_url};
use crate::data_fetcher::models::{GameSummary, LeadersResponse, PointLeader, ScoreResponse};
use crate::data_fetcher::processors::{extract_game_summary, extract_point_leader};
use crate::error::AppError;

/// Fetches the games scheduled on `date` (YYYY-MM-DD).
#[instrument(skip(api))]
pub async fn fetch_todays_games(api: &NhlApi, date: &str) -> Result<Vec<GameSummary>, AppError> {
    let url = build_score_url(api.api_domain(), date);
    let response = fetch::<ScoreResponse>(api, &url).await?;

    let games: Vec<GameSummary> = response.games.iter().map(extract_game_summary).collect();
    info!("Fetched {} games for {date}", games.len());
    Ok(games)
}

/// Fetches the regular season points leaders of `season`, best first.
#[instrument(skip(api))]
pub async fn fetch_point_leaders(
    api: &NhlApi,
    season: &str,
    limit: usize,
) -> Result<Vec<PointLeader>, AppError> {
    let url = build_skater_leaders_url(api.api_domain(), season, "points", limit);
    let response = fetch::<LeadersResponse>(api, &url).await?;

    Ok(response
        .points
        .iter()
        .take(limit)
        .map(extract_point_leader)
        .collect())
}
