//! Pure reshaping of upstream payloads into flat display records.

use crate::data_fetcher::models::{
    GameSummary, LeaderEntry, PlayerLanding, PlayerStatRecord, PointLeader, ScoreGame,
    SkaterSeasonStats, StandingEntry, TeamStandingRecord, TopTeam, localized_or_empty,
};

use super::formatting::{format_percentage, format_record, format_score, full_name};

/// Builds a player's stat row from their landing payload.
///
/// Missing numeric stats default to 0 and a missing shooting percentage
/// renders as `"0.00%"`. The function is deterministic: the same payload
/// always produces an identical record.
pub fn extract_player_stats(landing: &PlayerLanding) -> PlayerStatRecord {
    let empty = SkaterSeasonStats::default();
    let stats = landing.regular_season().unwrap_or(&empty);

    PlayerStatRecord {
        name: full_name(
            localized_or_empty(&landing.first_name),
            localized_or_empty(&landing.last_name),
        ),
        team: landing.current_team_abbrev.clone().unwrap_or_default(),
        games_played: stats.games_played.unwrap_or(0),
        goals: stats.goals.unwrap_or(0),
        assists: stats.assists.unwrap_or(0),
        points: stats.points.unwrap_or(0),
        plus_minus: stats.plus_minus.unwrap_or(0),
        pim: stats.pim.unwrap_or(0),
        game_winning_goals: stats.game_winning_goals.unwrap_or(0),
        ot_goals: stats.ot_goals.unwrap_or(0),
        shots: stats.shots.unwrap_or(0),
        shooting_percentage: format_percentage(stats.shooting_pctg),
    }
}

pub fn extract_team_standing(entry: &StandingEntry) -> TeamStandingRecord {
    TeamStandingRecord {
        team: localized_or_empty(&entry.team_name).to_string(),
        games_played: entry.games_played.unwrap_or(0),
        wins: entry.wins.unwrap_or(0),
        losses: entry.losses.unwrap_or(0),
        points: entry.points.unwrap_or(0),
        goal_differential: entry.goal_differential.unwrap_or(0),
        goal_differential_percentage: format_percentage(entry.goal_differential_pctg),
        goal_against: entry.goal_against.unwrap_or(0),
        goal_for: entry.goal_for.unwrap_or(0),
        goals_for_percentage: format_percentage(entry.goals_for_pctg),
    }
}

pub fn extract_top_team(entry: &StandingEntry) -> TopTeam {
    TopTeam {
        team: localized_or_empty(&entry.team_name).to_string(),
        wins_losses: format_record(entry.wins.unwrap_or(0), entry.losses.unwrap_or(0)),
        points: entry.points.unwrap_or(0),
        logo: entry.team_logo.clone().unwrap_or_default(),
    }
}

pub fn extract_game_summary(game: &ScoreGame) -> GameSummary {
    let home = game.home_team.as_ref();
    let away = game.away_team.as_ref();
    let home_abbrev = home.and_then(|t| t.abbrev.as_deref()).unwrap_or("?");
    let away_abbrev = away.and_then(|t| t.abbrev.as_deref()).unwrap_or("?");

    GameSummary {
        game_date: game.game_date.clone().unwrap_or_default(),
        matchup: format!("{home_abbrev} vs {away_abbrev}"),
        game_state: game.game_state.clone().unwrap_or_default(),
        score: format_score(home.and_then(|t| t.score), away.and_then(|t| t.score)),
    }
}

pub fn extract_point_leader(entry: &LeaderEntry) -> PointLeader {
    PointLeader {
        player: full_name(
            localized_or_empty(&entry.first_name),
            localized_or_empty(&entry.last_name),
        ),
        points: entry.value.unwrap_or(0.0).to_string(),
        picture: entry.headshot.clone().unwrap_or_default(),
    }
}
