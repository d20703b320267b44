pub mod context;
mod fetch_utils;
pub mod http_client;
pub mod orchestrator;
pub mod player_api;
pub mod roster_api;
pub mod scoreboard_api;
pub mod season_utils;
pub mod standings_api;
pub mod urls;

pub use context::NhlApi;
pub use http_client::create_http_client_with_timeout;
pub use orchestrator::{PlayerStatsReport, gather_all_player_stats, player_ids_in_order};
pub use player_api::{fetch_player_stats, try_fetch_player_stats};
pub use roster_api::{fetch_team_roster, roster_player_ids};
pub use scoreboard_api::{fetch_point_leaders, fetch_todays_games};
pub use season_utils::{current_season, parse_date, season_for_date, today_local, validate_season};
pub use standings_api::{fetch_team_standings, fetch_top_teams};
pub use urls::*;
