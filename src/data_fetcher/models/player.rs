use super::common::LocalizedName;
use serde::{Deserialize, Serialize};

/// Per-player "landing" payload, reduced to the fields the stats table reads.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerLanding {
    #[serde(default)]
    pub first_name: Option<LocalizedName>,
    #[serde(default)]
    pub last_name: Option<LocalizedName>,
    #[serde(default)]
    pub current_team_abbrev: Option<String>,
    #[serde(default)]
    pub featured_stats: Option<FeaturedStats>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedStats {
    #[serde(default)]
    pub regular_season: Option<RegularSeasonStats>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegularSeasonStats {
    #[serde(default)]
    pub sub_season: Option<SkaterSeasonStats>,
}

/// Skater totals for the featured season. Every field is optional upstream.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SkaterSeasonStats {
    #[serde(default)]
    pub games_played: Option<u32>,
    #[serde(default)]
    pub goals: Option<u32>,
    #[serde(default)]
    pub assists: Option<u32>,
    #[serde(default)]
    pub points: Option<u32>,
    #[serde(default)]
    pub plus_minus: Option<i32>,
    #[serde(default)]
    pub pim: Option<u32>,
    #[serde(default)]
    pub game_winning_goals: Option<u32>,
    #[serde(default)]
    pub ot_goals: Option<u32>,
    #[serde(default)]
    pub shots: Option<u32>,
    #[serde(default)]
    pub shooting_pctg: Option<f64>,
}

impl PlayerLanding {
    /// Regular season sub-season totals, if the payload carries them
    pub fn regular_season(&self) -> Option<&SkaterSeasonStats> {
        self.featured_stats
            .as_ref()
            .and_then(|f| f.regular_season.as_ref())
            .and_then(|r| r.sub_season.as_ref())
    }
}
