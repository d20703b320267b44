//! Fan-out/fan-in aggregation of player stats across teams

use futures::stream::{self, StreamExt};
use std::collections::BTreeMap;
use tracing::{info, instrument, warn};

use super::context::NhlApi;
use super::player_api::try_fetch_player_stats;
use super::roster_api::fetch_team_roster;
use crate::data_fetcher::models::{PlayerId, PlayerStatEntry};
use crate::error::{FailureKind, FetchFailure};

/// Outcome of a league-wide player stats aggregation.
///
/// `entries` holds one entry per roster player id, in team order and then
/// roster order. Failed rosters contribute no entries; failed player
/// fetches contribute a "No player found" placeholder. Both kinds of
/// failure are also listed so they can be reported.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerStatsReport {
    pub entries: Vec<PlayerStatEntry>,
    pub roster_failures: Vec<FetchFailure>,
    pub player_failures: Vec<FetchFailure>,
}

impl PlayerStatsReport {
    pub fn found_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_found()).count()
    }

    pub fn has_failures(&self) -> bool {
        !self.roster_failures.is_empty() || !self.player_failures.is_empty()
    }

    /// Number of failures per category, rosters and players combined.
    pub fn failure_counts(&self) -> BTreeMap<FailureKind, usize> {
        let mut counts = BTreeMap::new();
        for failure in self.roster_failures.iter().chain(&self.player_failures) {
            *counts.entry(failure.kind).or_insert(0) += 1;
        }
        counts
    }

    pub fn into_entries(self) -> Vec<PlayerStatEntry> {
        self.entries
    }
}

/// Fetches every team's roster concurrently and concatenates the forward
/// ids in team order. Teams whose roster fails contribute nothing and are
/// returned alongside.
#[instrument(skip(api, teams), fields(teams = teams.len()))]
pub async fn player_ids_in_order<S: AsRef<str>>(
    api: &NhlApi,
    teams: &[S],
) -> (Vec<PlayerId>, Vec<FetchFailure>) {
    let requests = teams
        .iter()
        .map(|team| fetch_team_roster(api, team.as_ref()));
    let rosters: Vec<_> = stream::iter(requests)
        .buffered(api.max_concurrent_requests())
        .collect()
        .await;

    let mut ids = Vec::new();
    let mut failures = Vec::new();
    for roster in rosters {
        match roster {
            Ok(team_ids) => ids.extend(team_ids),
            Err(failure) => failures.push(failure),
        }
    }

    (ids, failures)
}

/// Collects the stats of every forward on every team in `teams`.
///
/// Rosters are fetched concurrently first; once all have resolved the
/// player profiles are fetched concurrently. At most
/// `api.max_concurrent_requests()` requests are in flight per phase and the
/// output order never depends on completion order.
#[instrument(skip(api, teams), fields(teams = teams.len()))]
pub async fn gather_all_player_stats<S: AsRef<str>>(
    api: &NhlApi,
    teams: &[S],
) -> PlayerStatsReport {
    let (player_ids, roster_failures) = player_ids_in_order(api, teams).await;
    info!(
        "Collected {} player ids from {} teams ({} rosters failed)",
        player_ids.len(),
        teams.len(),
        roster_failures.len()
    );

    let results: Vec<_> = stream::iter(
        player_ids
            .iter()
            .map(|&id| async move { (id, try_fetch_player_stats(api, id).await) }),
    )
    .buffered(api.max_concurrent_requests())
    .collect()
    .await;

    let mut entries = Vec::with_capacity(results.len());
    let mut player_failures = Vec::new();
    for (id, result) in results {
        match result {
            Ok(record) => entries.push(PlayerStatEntry::from(record)),
            Err(e) => {
                warn!("Stats for player {id} unavailable: {e}");
                player_failures.push(FetchFailure::new(id.to_string(), &e));
                entries.push(PlayerStatEntry::not_found());
            }
        }
    }

    let report = PlayerStatsReport {
        entries,
        roster_failures,
        player_failures,
    };
    info!(
        "Aggregated {} players ({} found, {} placeholders)",
        report.entries.len(),
        report.found_count(),
        report.player_failures.len()
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use crate::data_fetcher::cache::HttpResponseCache;
    use std::sync::Arc;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_api(server: &MockServer) -> NhlApi {
        let cache = HttpResponseCache::new(64, Duration::from_secs(60));
        NhlApi::with_client(create_test_http_client(), &server.uri(), Arc::new(cache))
    }

    async fn mount_roster(server: &MockServer, team: &str, ids: &[u64], delay_ms: u64) {
        let forwards: Vec<_> = ids.iter().map(|id| serde_json::json!({"id": id})).collect();
        Mock::given(method("GET"))
            .and(path(format!("/roster/{team}/current")))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"forwards": forwards}))
                    .set_delay(Duration::from_millis(delay_ms)),
            )
            .expect(1)
            .mount(server)
            .await;
    }

    async fn mount_player(server: &MockServer, id: u64, last_name: &str, delay_ms: u64) {
        Mock::given(method("GET"))
            .and(path(format!("/player/{id}/landing")))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({
                        "firstName": {"default": "Player"},
                        "lastName": {"default": last_name},
                        "currentTeamAbbrev": "AAA",
                        "featuredStats": {"regularSeason": {"subSeason": {"points": id}}}
                    }))
                    .set_delay(Duration::from_millis(delay_ms)),
            )
            .mount(server)
            .await;
    }

    fn names(report: &PlayerStatsReport) -> Vec<String> {
        report
            .entries
            .iter()
            .map(|e| e.record().map(|r| r.name.clone()).unwrap_or_default())
            .collect()
    }

    #[tokio::test]
    async fn test_order_is_positional_not_completion_order() {
        let mock_server = MockServer::start().await;
        mount_roster(&mock_server, "AAA", &[1, 2], 150).await;
        mount_roster(&mock_server, "BBB", &[3], 0).await;
        mount_player(&mock_server, 1, "One", 120).await;
        mount_player(&mock_server, 2, "Two", 60).await;
        mount_player(&mock_server, 3, "Three", 0).await;

        let api = test_api(&mock_server);
        let report = gather_all_player_stats(&api, &["AAA", "BBB"]).await;

        assert_eq!(names(&report), vec!["Player One", "Player Two", "Player Three"]);
        assert!(!report.has_failures());
    }

    #[tokio::test]
    async fn test_failed_roster_contributes_nothing() {
        let mock_server = MockServer::start().await;
        mount_roster(&mock_server, "AAA", &[1], 0).await;
        Mock::given(method("GET"))
            .and(path("/roster/BBB/current"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&mock_server)
            .await;
        mount_player(&mock_server, 1, "One", 0).await;

        let api = test_api(&mock_server);
        let report = gather_all_player_stats(&api, &["AAA", "BBB"]).await;

        assert_eq!(names(&report), vec!["Player One"]);
        assert_eq!(report.roster_failures.len(), 1);
        assert_eq!(report.roster_failures[0].target, "BBB");
        assert_eq!(report.roster_failures[0].kind, FailureKind::ServerError);
    }

    #[tokio::test]
    async fn test_failed_player_keeps_its_position() {
        let mock_server = MockServer::start().await;
        mount_roster(&mock_server, "AAA", &[1, 2, 3], 0).await;
        mount_player(&mock_server, 1, "One", 0).await;
        Mock::given(method("GET"))
            .and(path("/player/2/landing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;
        mount_player(&mock_server, 3, "Three", 0).await;

        let api = test_api(&mock_server);
        let report = gather_all_player_stats(&api, &["AAA"]).await;

        assert_eq!(report.entries.len(), 3);
        assert!(report.entries[0].is_found());
        assert_eq!(report.entries[1], PlayerStatEntry::not_found());
        assert!(report.entries[2].is_found());
        assert_eq!(report.failure_counts().get(&FailureKind::NotFound), Some(&1));
    }

    #[tokio::test]
    async fn test_empty_team_list() {
        let mock_server = MockServer::start().await;
        let api = test_api(&mock_server);
        let teams: [&str; 0] = [];

        let report = gather_all_player_stats(&api, &teams).await;
        assert!(report.entries.is_empty());
        assert!(!report.has_failures());
    }

    #[tokio::test]
    async fn test_player_ids_in_order_with_limit_of_one() {
        let mock_server = MockServer::start().await;
        mount_roster(&mock_server, "AAA", &[5, 6], 0).await;
        mount_roster(&mock_server, "BBB", &[7], 0).await;

        let api = test_api(&mock_server).with_max_concurrent_requests(1);
        let (ids, failures) = player_ids_in_order(&api, &["AAA", "BBB"]).await;

        assert_eq!(ids, vec![PlayerId(5), PlayerId(6), PlayerId(7)]);
        assert!(failures.is_empty());
    }
}
