pub mod common;
pub mod player;
pub mod records;
pub mod roster;
pub mod scoreboard;
pub mod standings;

pub use common::{LocalizedName, localized_or_empty};
pub use player::{FeaturedStats, PlayerLanding, RegularSeasonStats, SkaterSeasonStats};
pub use records::{
    GameSummary, MissingPlayer, PLAYER_COLUMNS, PlayerStatEntry, PlayerStatRecord, PointLeader,
    STANDING_COLUMNS, TableRecord, TeamStandingRecord, TopTeam,
};
pub use roster::{PlayerId, RosterPlayer, RosterResponse};
pub use scoreboard::{LeaderEntry, LeadersResponse, ScoreGame, ScoreResponse, ScoreTeam};
pub use standings::{StandingEntry, StandingsResponse};
