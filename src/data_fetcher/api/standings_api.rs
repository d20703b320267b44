//! League standings fetching

use tracing::{info, instrument};

use super::context::NhlApi;
use super::fetch_utils::fetch;
use super::urls::build_standings_url;
use crate::data_fetcher::models::{StandingsResponse, TeamStandingRecord, TopTeam};
use crate::data_fetcher::processors::{extract_team_standing, extract_top_team};
use crate::error::AppError;

/// Fetches the current league-wide standings, one record per team in
/// upstream order. A payload without standings yields an empty list.
#[instrument(skip(api))]
pub async fn fetch_team_standings(api: &NhlApi) -> Result<Vec<TeamStandingRecord>, AppError> {
    let url = build_standings_url(api.api_domain());
    let response = fetch::<StandingsResponse>(api, &url).await?;

    let records: Vec<TeamStandingRecord> =
        response.standings.iter().map(extract_team_standing).collect();
    info!("Fetched standings for {} teams", records.len());
    Ok(records)
}

/// The first `limit` teams of the current standings.
#[instrument(skip(api))]
pub async fn fetch_top_teams(api: &NhlApi, limit: usize) -> Result<Vec<TopTeam>, AppError> {
    let url = build_standings_url(api.api_domain());
    let response = fetch::<StandingsResponse>(api, &url).await?;

    Ok(response
        .standings
        .iter()
        .take(limit)
        .map(extract_top_team)
        .collect())
}
