use super::common::LocalizedName;
use serde::{Deserialize, Serialize};

/// Scoreboard for one day
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ScoreResponse {
    #[serde(default)]
    pub games: Vec<ScoreGame>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreGame {
    #[serde(default)]
    pub game_date: Option<String>,
    #[serde(default)]
    pub game_state: Option<String>,
    #[serde(default)]
    pub home_team: Option<ScoreTeam>,
    #[serde(default)]
    pub away_team: Option<ScoreTeam>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct ScoreTeam {
    #[serde(default)]
    pub abbrev: Option<String>,
    #[serde(default)]
    pub score: Option<u32>,
    #[serde(default)]
    pub logo: Option<String>,
}

/// Skater stat leaders, keyed by the requested category
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct LeadersResponse {
    #[serde(default)]
    pub points: Vec<LeaderEntry>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeaderEntry {
    #[serde(default)]
    pub first_name: Option<LocalizedName>,
    #[serde(default)]
    pub last_name: Option<LocalizedName>,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub headshot: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_response_with_pregame_game() {
        let json = r#"{
            "currentDate": "2024-01-15",
            "games": [{
                "gameDate": "2024-01-15",
                "gameState": "FUT",
                "homeTeam": {
                    "abbrev": "BOS",
                    "logo": "https://assets.nhle.com/logos/nhl/svg/BOS_light.svg"
                },
                "awayTeam": {"abbrev": "TOR"}
            }]
        }"#;

        let response: ScoreResponse = serde_json::from_str(json).unwrap();
        let game = &response.games[0];
        assert_eq!(game.game_state.as_deref(), Some("FUT"));
        assert_eq!(game.home_team.as_ref().unwrap().score, None);
    }

    #[test]
    fn test_leaders_response() {
        let json = r#"{"points": [{
            "firstName": {"default": "Nikita"}, "lastName": {"default": "Kucherov"},
            "value": 144, "headshot": "https://assets.nhle.com/mugs/nhl/20232024/TBL/8476453.png"
        }]}"#;

        let response: LeadersResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.points[0].value, Some(144.0));
    }
}
