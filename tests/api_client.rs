//! HTTP-level client behaviour against a mock server: status codes map to
//! the `ApiResult` sum type.

use httpmock::prelude::*;
use serde_json::json;

use riftscope::api::{ApiClient, ApiResult, GameApi, PlayerApi};
use riftscope::domain::{RankedQueueSelector, Region};

#[tokio::test]
async fn ranked_games_success_decodes_matchlist() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/lol/match/v3/matchlists/by-account/10")
                .header("X-Riot-Token", "TEST_KEY");
            then.status(200).json_body(json!({
                "matches": [
                    {
                        "gameId": 4242,
                        "queue": 420,
                        "timestamp": 1_700_000_000_000i64,
                        "champion": 103
                    },
                    {
                        "gameId": 4243,
                        "queue": 440,
                        "timestamp": 1_700_000_100_000i64,
                        "champion": 64
                    }
                ]
            }));
        })
        .await;

    let client =
        ApiClient::new("TEST_KEY".to_string()).with_base_url(server.base_url());
    let result = client
        .get_ranked_games(Region::Euw, 10, RankedQueueSelector::SoloAndFlex)
        .await;

    mock.assert_async().await;
    match result {
        ApiResult::Success(games) => {
            assert_eq!(games.len(), 2);
            assert_eq!(games[0].game_id, 4242);
            assert_eq!(games[1].queue, 440);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn missing_rankings_map_to_not_found() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/lol/league/v3/positions/by-summoner/1");
            then.status(404);
        })
        .await;

    let client =
        ApiClient::new("TEST_KEY".to_string()).with_base_url(server.base_url());
    let result = client.get_rankings(Region::Euw, 1).await;

    assert_eq!(result, ApiResult::NotFound);
}

#[tokio::test]
async fn throttled_detail_fetch_reports_retry_after() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/lol/match/v3/matches/4242");
            then.status(429).header("Retry-After", "17");
        })
        .await;

    let client =
        ApiClient::new("TEST_KEY".to_string()).with_base_url(server.base_url());
    let result = client.get_game_detail(Region::Euw, 4242).await;

    assert_eq!(result, ApiResult::RateLimited(17));
}

#[tokio::test]
async fn server_failure_keeps_status_detail() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/lol/champion-mastery/v3/champion-masteries/by-summoner/1");
            then.status(500);
        })
        .await;

    let client =
        ApiClient::new("TEST_KEY".to_string()).with_base_url(server.base_url());
    let result = client.get_mastery_points(Region::Euw, 1).await;

    match result {
        ApiResult::ServerError(detail) => assert!(detail.contains("500")),
        other => panic!("unexpected result: {other:?}"),
    }
}
