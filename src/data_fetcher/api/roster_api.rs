//! Team roster fetching

use tracing::{info, instrument, warn};

use super::context::NhlApi;
use super::fetch_utils::fetch;
use super::urls::build_roster_url;
use crate::data_fetcher::models::{PlayerId, RosterResponse};
use crate::error::FetchFailure;

/// Fetches the forward player ids of `team`'s current roster, in roster order.
///
/// Any failure (non-success status, transport error, undecodable body) is
/// returned as a categorised [`FetchFailure`] so callers can report it.
#[instrument(skip(api))]
pub async fn fetch_team_roster(api: &NhlApi, team: &str) -> Result<Vec<PlayerId>, FetchFailure> {
    let url = build_roster_url(api.api_domain(), team);

    match fetch::<RosterResponse>(api, &url).await {
        Ok(roster) => {
            let ids = roster.forward_ids();
            info!("Roster for {team}: {} forwards", ids.len());
            Ok(ids)
        }
        Err(e) => {
            warn!("Roster for {team} unavailable, contributing no players: {e}");
            Err(FetchFailure::new(team, &e))
        }
    }
}

/// Forward ids of `team`'s roster, or an empty list when it can't be fetched.
pub async fn roster_player_ids(api: &NhlApi, team: &str) -> Vec<PlayerId> {
    fetch_team_roster(api, team).await.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use crate::data_fetcher::cache::HttpResponseCache;
    use crate::error::FailureKind;
    use std::sync::Arc;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_api(server: &MockServer) -> NhlApi {
        let cache = HttpResponseCache::new(16, Duration::from_secs(60));
        NhlApi::with_client(create_test_http_client(), &server.uri(), Arc::new(cache))
    }

    #[tokio::test]
    async fn test_fetch_team_roster_returns_forwards_only() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/roster/EDM/current"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "forwards": [{"id": 8478402}, {"id": 8477934}],
                "defensemen": [{"id": 8475218}],
                "goalies": [{"id": 8479973}]
            })))
            .mount(&mock_server)
            .await;

        let api = test_api(&mock_server);
        let ids = fetch_team_roster(&api, "EDM").await.unwrap();

        assert_eq!(ids, vec![PlayerId(8478402), PlayerId(8477934)]);
    }

    #[tokio::test]
    async fn test_missing_forwards_key_is_empty() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/roster/SEA/current"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "goalies": [{"id": 1}]
            })))
            .mount(&mock_server)
            .await;

        let api = test_api(&mock_server);
        assert!(fetch_team_roster(&api, "SEA").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_not_found_degrades_to_empty() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/roster/XXX/current"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let api = test_api(&mock_server);

        let failure = fetch_team_roster(&api, "XXX").await.unwrap_err();
        assert_eq!(failure.target, "XXX");
        assert_eq!(failure.kind, FailureKind::NotFound);

        assert!(roster_player_ids(&api, "XXX").await.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_roster_is_categorised() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/roster/BOS/current"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let api = test_api(&mock_server);
        let failure = fetch_team_roster(&api, "BOS").await.unwrap_err();
        assert_eq!(failure.kind, FailureKind::MalformedPayload);
    }
}
