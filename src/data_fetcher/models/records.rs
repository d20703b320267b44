//! Flat, display-ready records handed to the table presenter.
//!
//! Field names serialize to the column headers shown to the user, so a
//! record rendered as JSON and as a table carry the same keys.

use crate::constants::PLAYER_NOT_FOUND_NAME;
use serde::Serialize;
use std::collections::BTreeMap;

/// A record that can be laid out as one table row.
///
/// `cells` must line up with `COLUMNS`.
pub trait TableRecord {
    const COLUMNS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

pub const PLAYER_COLUMNS: [&str; 12] = [
    "Name",
    "Team",
    "Games Played",
    "Goals",
    "Assists",
    "Points",
    "Plus Minus",
    "Pim",
    "Game Winning Goals",
    "OT Goals",
    "Shots",
    "Shooting Percentage",
];

/// Season totals for one skater
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PlayerStatRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(rename = "Games Played")]
    pub games_played: u32,
    #[serde(rename = "Goals")]
    pub goals: u32,
    #[serde(rename = "Assists")]
    pub assists: u32,
    #[serde(rename = "Points")]
    pub points: u32,
    #[serde(rename = "Plus Minus")]
    pub plus_minus: i32,
    #[serde(rename = "Pim")]
    pub pim: u32,
    #[serde(rename = "Game Winning Goals")]
    pub game_winning_goals: u32,
    #[serde(rename = "OT Goals")]
    pub ot_goals: u32,
    #[serde(rename = "Shots")]
    pub shots: u32,
    #[serde(rename = "Shooting Percentage")]
    pub shooting_percentage: String,
}

impl TableRecord for PlayerStatRecord {
    const COLUMNS: &'static [&'static str] = &PLAYER_COLUMNS;

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.team.clone(),
            self.games_played.to_string(),
            self.goals.to_string(),
            self.assists.to_string(),
            self.points.to_string(),
            self.plus_minus.to_string(),
            self.pim.to_string(),
            self.game_winning_goals.to_string(),
            self.ot_goals.to_string(),
            self.shots.to_string(),
            self.shooting_percentage.clone(),
        ]
    }
}

/// Placeholder substituted for a player whose landing page could not be fetched.
/// Serializes exactly as `{"Name": "No player found", "Stats": {}}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MissingPlayer {
    #[serde(rename = "Name")]
    pub name: &'static str,
    #[serde(rename = "Stats")]
    pub stats: BTreeMap<String, String>,
}

impl Default for MissingPlayer {
    fn default() -> Self {
        Self {
            name: PLAYER_NOT_FOUND_NAME,
            stats: BTreeMap::new(),
        }
    }
}

/// One row of the aggregated player table
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum PlayerStatEntry {
    Found(PlayerStatRecord),
    NotFound(MissingPlayer),
}

impl PlayerStatEntry {
    pub fn not_found() -> Self {
        PlayerStatEntry::NotFound(MissingPlayer::default())
    }

    pub fn is_found(&self) -> bool {
        matches!(self, PlayerStatEntry::Found(_))
    }

    pub fn record(&self) -> Option<&PlayerStatRecord> {
        match self {
            PlayerStatEntry::Found(record) => Some(record),
            PlayerStatEntry::NotFound(_) => None,
        }
    }
}

impl From<PlayerStatRecord> for PlayerStatEntry {
    fn from(record: PlayerStatRecord) -> Self {
        PlayerStatEntry::Found(record)
    }
}

impl TableRecord for PlayerStatEntry {
    const COLUMNS: &'static [&'static str] = &PLAYER_COLUMNS;

    // The placeholder keeps the player column layout so it can share a table
    // with found players.
    fn cells(&self) -> Vec<String> {
        match self {
            PlayerStatEntry::Found(record) => record.cells(),
            PlayerStatEntry::NotFound(missing) => {
                let mut cells = vec![String::new(); PLAYER_COLUMNS.len()];
                cells[0] = missing.name.to_string();
                cells
            }
        }
    }
}

pub const STANDING_COLUMNS: [&str; 10] = [
    "Team",
    "Games Played",
    "Wins",
    "Losses",
    "Points",
    "Goal Differential",
    "Goal Differential Percentage",
    "Goal Against",
    "Goal For",
    "Goals For Percentage",
];

/// A team's line in the league standings
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TeamStandingRecord {
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(rename = "Games Played")]
    pub games_played: u32,
    #[serde(rename = "Wins")]
    pub wins: u32,
    #[serde(rename = "Losses")]
    pub losses: u32,
    #[serde(rename = "Points")]
    pub points: u32,
    #[serde(rename = "Goal Differential")]
    pub goal_differential: i32,
    #[serde(rename = "Goal Differential Percentage")]
    pub goal_differential_percentage: String,
    #[serde(rename = "Goal Against")]
    pub goal_against: u32,
    #[serde(rename = "Goal For")]
    pub goal_for: u32,
    #[serde(rename = "Goals For Percentage")]
    pub goals_for_percentage: String,
}

impl TableRecord for TeamStandingRecord {
    const COLUMNS: &'static [&'static str] = &STANDING_COLUMNS;

    fn cells(&self) -> Vec<String> {
        vec![
            self.team.clone(),
            self.games_played.to_string(),
            self.wins.to_string(),
            self.losses.to_string(),
            self.points.to_string(),
            self.goal_differential.to_string(),
            self.goal_differential_percentage.clone(),
            self.goal_against.to_string(),
            self.goal_for.to_string(),
            self.goals_for_percentage.clone(),
        ]
    }
}

/// A game on the daily scoreboard
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GameSummary {
    #[serde(rename = "Date")]
    pub game_date: String,
    #[serde(rename = "Matchup")]
    pub matchup: String,
    #[serde(rename = "Game State")]
    pub game_state: String,
    #[serde(rename = "Score")]
    pub score: String,
}

impl TableRecord for GameSummary {
    const COLUMNS: &'static [&'static str] = &["Date", "Matchup", "Game State", "Score"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.game_date.clone(),
            self.matchup.clone(),
            self.game_state.clone(),
            self.score.clone(),
        ]
    }
}

/// A skater from the point leaders list
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PointLeader {
    #[serde(rename = "Player")]
    pub player: String,
    #[serde(rename = "Points")]
    pub points: String,
    #[serde(rename = "Picture")]
    pub picture: String,
}

impl TableRecord for PointLeader {
    const COLUMNS: &'static [&'static str] = &["Player", "Points", "Picture"];

    fn cells(&self) -> Vec<String> {
        vec![self.player.clone(), self.points.clone(), self.picture.clone()]
    }
}

/// A team from the top of the standings
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TopTeam {
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(rename = "Record")]
    pub wins_losses: String,
    #[serde(rename = "Points")]
    pub points: u32,
    #[serde(rename = "Logo")]
    pub logo: String,
}

impl TableRecord for TopTeam {
    const COLUMNS: &'static [&'static str] = &["Team", "Record", "Points", "Logo"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.team.clone(),
            self.wins_losses.clone(),
            self.points.to_string(),
            self.logo.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> PlayerStatRecord {
        PlayerStatRecord {
            name: "John Doe".to_string(),
            team: "NYR".to_string(),
            games_played: 82,
            goals: 20,
            assists: 30,
            points: 50,
            plus_minus: -4,
            pim: 40,
            game_winning_goals: 5,
            ot_goals: 2,
            shots: 150,
            shooting_percentage: "13.33%".to_string(),
        }
    }

    #[test]
    fn test_sentinel_serializes_exactly() {
        let json = serde_json::to_string(&PlayerStatEntry::not_found()).unwrap();
        assert_eq!(json, r#"{"Name":"No player found","Stats":{}}"#);
    }

    #[test]
    fn test_player_record_serializes_display_keys_in_order() {
        let json = serde_json::to_string(&PlayerStatEntry::from(sample_record())).unwrap();
        assert!(json.starts_with(r#"{"Name":"John Doe","Team":"NYR","Games Played":82"#));
        assert!(json.contains(r#""Plus Minus":-4"#));
        assert!(json.ends_with(r#""Shooting Percentage":"13.33%"}"#));
    }

    #[test]
    fn test_cells_match_columns() {
        let record = sample_record();
        assert_eq!(PlayerStatRecord::COLUMNS.len(), record.cells().len());
        assert_eq!(record.cells()[6], "-4");

        let missing = PlayerStatEntry::not_found();
        let cells = missing.cells();
        assert_eq!(cells.len(), PLAYER_COLUMNS.len());
        assert_eq!(cells[0], "No player found");
        assert!(cells[1..].iter().all(String::is_empty));
    }

    #[test]
    fn test_entry_accessors() {
        let found = PlayerStatEntry::from(sample_record());
        assert!(found.is_found());
        assert_eq!(found.record().map(|r| r.goals), Some(20));
        assert!(PlayerStatEntry::not_found().record().is_none());
    }

    #[test]
    fn test_every_record_type_lines_up() {
        let game = GameSummary {
            game_date: "2024-01-15".to_string(),
            matchup: "BOS vs TOR".to_string(),
            game_state: "FINAL".to_string(),
            score: "4 - 2".to_string(),
        };
        assert_eq!(GameSummary::COLUMNS.len(), game.cells().len());

        let leader = PointLeader {
            player: "Nikita Kucherov".to_string(),
            points: "144".to_string(),
            picture: String::new(),
        };
        assert_eq!(PointLeader::COLUMNS.len(), leader.cells().len());

        let team = TopTeam {
            team: "Rangers".to_string(),
            wins_losses: "55 - 23".to_string(),
            points: 114,
            logo: String::new(),
        };
        assert_eq!(TopTeam::COLUMNS.len(), team.cells().len());
    }
}
