pub mod api;
pub mod cache;
pub mod models;
pub mod processors;

pub use api::{
    NhlApi, PlayerStatsReport, fetch_player_stats, fetch_point_leaders, fetch_team_roster,
    fetch_team_standings, fetch_todays_games, fetch_top_teams, gather_all_player_stats,
};
pub use models::{PlayerId, PlayerStatEntry, PlayerStatRecord, TableRecord};
