use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric NHL player identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PlayerId {
    fn from(id: u64) -> Self {
        PlayerId(id)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct RosterPlayer {
    #[serde(default)]
    pub id: Option<PlayerId>,
}

/// Current roster of a team, split by position group
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct RosterResponse {
    #[serde(default)]
    pub forwards: Vec<RosterPlayer>,
    #[serde(default)]
    pub defensemen: Vec<RosterPlayer>,
    #[serde(default)]
    pub goalies: Vec<RosterPlayer>,
}

impl RosterResponse {
    /// Identifiers of the forwards in roster order. Entries without an id are skipped.
    pub fn forward_ids(&self) -> Vec<PlayerId> {
        self.forwards.iter().filter_map(|p| p.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_ids_preserve_roster_order() {
        let roster: RosterResponse = serde_json::from_str(
            r#"{
                "forwards": [{"id": 8478402, "firstName": {"default": "Connor"}}, {"id": 8477934}],
                "defensemen": [{"id": 8475218}],
                "goalies": []
            }"#,
        )
        .unwrap();

        assert_eq!(
            roster.forward_ids(),
            vec![PlayerId(8478402), PlayerId(8477934)]
        );
    }

    #[test]
    fn test_missing_forwards_is_empty() {
        let roster: RosterResponse = serde_json::from_str("{}").unwrap();
        assert!(roster.forward_ids().is_empty());
    }

    #[test]
    fn test_forward_without_id_is_skipped() {
        let roster: RosterResponse =
            serde_json::from_str(r#"{"forwards": [{"sweaterNumber": 97}, {"id": 3}]}"#).unwrap();
        assert_eq!(roster.forward_ids(), vec![PlayerId(3)]);
    }
}
