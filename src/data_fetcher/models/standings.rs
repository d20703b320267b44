use super::common::LocalizedName;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct StandingsResponse {
    #[serde(default)]
    pub standings: Vec<StandingEntry>,
}

/// One team's line in the league-wide standings
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StandingEntry {
    #[serde(default)]
    pub team_name: Option<LocalizedName>,
    #[serde(default)]
    pub team_abbrev: Option<LocalizedName>,
    #[serde(default)]
    pub team_logo: Option<String>,
    #[serde(default)]
    pub games_played: Option<u32>,
    #[serde(default)]
    pub wins: Option<u32>,
    #[serde(default)]
    pub losses: Option<u32>,
    #[serde(default)]
    pub points: Option<u32>,
    #[serde(default)]
    pub goal_differential: Option<i32>,
    #[serde(default)]
    pub goal_differential_pctg: Option<f64>,
    #[serde(default)]
    pub goal_against: Option<u32>,
    #[serde(default)]
    pub goal_for: Option<u32>,
    #[serde(default)]
    pub goals_for_pctg: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standings_deserialization() {
        let json = r#"{
            "wildCardIndicator": true,
            "standings": [{
                "teamName": {"default": "Boston Bruins"},
                "teamAbbrev": {"default": "BOS"},
                "gamesPlayed": 82, "wins": 47, "losses": 20, "points": 109,
                "goalDifferential": 43, "goalDifferentialPctg": 0.52,
                "goalAgainst": 224, "goalFor": 267, "goalsForPctg": 3.256
            }]
        }"#;

        let response: StandingsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.standings.len(), 1);
        let bos = &response.standings[0];
        assert_eq!(bos.team_name.as_ref().unwrap().default, "Boston Bruins");
        assert_eq!(bos.goal_differential, Some(43));
        assert_eq!(bos.goals_for_pctg, Some(3.256));
    }

    #[test]
    fn test_missing_standings_key() {
        let response: StandingsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.standings.is_empty());
    }
}
