//! Player profile fetching

use tracing::{debug, instrument, warn};

use super::context::NhlApi;
use super::fetch_utils::fetch;
use super::urls::build_player_landing_url;
use crate::data_fetcher::models::{PlayerId, PlayerLanding, PlayerStatEntry, PlayerStatRecord};
use crate::data_fetcher::processors::extract_player_stats;
use crate::error::AppError;

/// Fetches a player's landing profile and flattens it into a stat row.
#[instrument(skip(api))]
pub async fn try_fetch_player_stats(
    api: &NhlApi,
    player_id: PlayerId,
) -> Result<PlayerStatRecord, AppError> {
    let url = build_player_landing_url(api.api_domain(), player_id.0);
    let landing = fetch::<PlayerLanding>(api, &url).await?;
    let record = extract_player_stats(&landing);
    debug!("Player {player_id}: {} ({})", record.name, record.team);
    Ok(record)
}

/// Like [`try_fetch_player_stats`], but any failure becomes the
/// "No player found" placeholder entry.
pub async fn fetch_player_stats(api: &NhlApi, player_id: PlayerId) -> PlayerStatEntry {
    match try_fetch_player_stats(api, player_id).await {
        Ok(record) => PlayerStatEntry::from(record),
        Err(e) => {
            warn!("Stats for player {player_id} unavailable: {e}");
            PlayerStatEntry::not_found()
        }
    }
}
