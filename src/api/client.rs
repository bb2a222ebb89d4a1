use std::fmt::Debug;
use std::num::NonZeroU32;

use async_trait::async_trait;
use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use nonzero_ext::nonzero;
use reqwest::{StatusCode, header::RETRY_AFTER};
use serde::de::DeserializeOwned;

use super::{ApiResult, GameApi, PlayerApi};
use super::types::{ChampionMasteryDto, LeagueEntryDto, MatchDto, MatchReferenceDto, MatchlistDto};
use crate::domain::{RankedQueueSelector, Region};

/// Countdown used when a 429 response does not carry a Retry-After header.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Rate-limited client to the remote game-data API.
#[derive(Debug)]
pub struct ApiClient {
    client: reqwest::Client,
    limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    /// Riot API Key
    key: String,
    base_url: Option<String>,
}

impl ApiClient {
    pub fn new(api_key: String) -> Self {
        Self::with_rate_limit(api_key, nonzero!(100_u32))
    }

    pub fn with_rate_limit(api_key: String, per_minute: NonZeroU32) -> Self {
        let q = Quota::per_minute(per_minute).allow_burst(nonzero!(20_u32));

        Self {
            client: reqwest::Client::new(),
            limiter: RateLimiter::direct(q),
            key: api_key,
            base_url: None,
        }
    }

    /// Route every request to a fixed base URL instead of the region's
    /// endpoint host. Test hook.
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = Some(base_url);
        self
    }

    fn base(&self, region: Region) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| format!("https://{}", region.to_endpoint()))
    }

    async fn request<T: DeserializeOwned + Debug>(&self, path: String) -> ApiResult<T> {
        // Wait out our own quota before the server has to enforce its.
        self.limiter.until_ready().await;

        let res = match self
            .client
            .get(path)
            .header("X-Riot-Token", &self.key)
            .send()
            .await
        {
            Ok(res) => res,
            Err(e) => return ApiResult::ServerError(e.to_string()),
        };

        match res.status() {
            StatusCode::OK => match res.json().await {
                Ok(value) => ApiResult::Success(value),
                Err(e) => ApiResult::ServerError(e.to_string()),
            },
            StatusCode::NOT_FOUND => ApiResult::NotFound,
            StatusCode::TOO_MANY_REQUESTS => {
                let wait = res
                    .headers()
                    .get(RETRY_AFTER)
                    .and_then(|v| v.to_str().ok())
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_RETRY_AFTER_SECS);
                ApiResult::RateLimited(wait)
            }
            status => ApiResult::ServerError(format!("unexpected status: {status}")),
        }
    }
}

#[async_trait]
impl PlayerApi for ApiClient {
    async fn get_ranked_games(
        &self,
        region: Region,
        account_id: i64,
        selector: RankedQueueSelector,
    ) -> ApiResult<Vec<MatchReferenceDto>> {
        tracing::trace!(
            "[API::CLIENT] get_ranked_games {} in {:?}",
            account_id,
            region
        );

        let path = format!(
            "{}/lol/match/v3/matchlists/by-account/{}?{}",
            self.base(region),
            account_id,
            selector.to_query()
        );

        self.request::<MatchlistDto>(path)
            .await
            .map(|matchlist| matchlist.matches)
    }

    async fn get_mastery_points(
        &self,
        region: Region,
        summoner_id: i64,
    ) -> ApiResult<Vec<ChampionMasteryDto>> {
        tracing::trace!(
            "[API::CLIENT] get_mastery_points {} in {:?}",
            summoner_id,
            region
        );

        let path = format!(
            "{}/lol/champion-mastery/v3/champion-masteries/by-summoner/{}",
            self.base(region),
            summoner_id
        );

        self.request(path).await
    }

    async fn get_rankings(
        &self,
        region: Region,
        summoner_id: i64,
    ) -> ApiResult<Vec<LeagueEntryDto>> {
        tracing::trace!("[API::CLIENT] get_rankings {} in {:?}", summoner_id, region);

        let path = format!(
            "{}/lol/league/v3/positions/by-summoner/{}",
            self.base(region),
            summoner_id
        );

        self.request(path).await
    }
}

#[async_trait]
impl GameApi for ApiClient {
    async fn get_game_detail(&self, region: Region, game_id: i64) -> ApiResult<MatchDto> {
        tracing::trace!("[API::CLIENT] get_game_detail {} in {:?}", game_id, region);

        let path = format!("{}/lol/match/v3/matches/{}", self.base(region), game_id);

        self.request(path).await
    }
}
