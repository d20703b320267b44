pub mod extraction;
pub mod formatting;

pub use extraction::{
    extract_game_summary, extract_player_stats, extract_point_leader, extract_team_standing,
    extract_top_team,
};
pub use formatting::{format_percentage, format_record, format_score, full_name};
