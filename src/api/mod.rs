//! Abstract contracts to the remote game-data API, plus a concrete
//! rate-limited client.
//!
//! View models depend only on the [`PlayerApi`] and [`GameApi`] traits so
//! they can be driven by mock implementations in tests.

pub mod client;
pub mod types;

use std::fmt::Debug;

use async_trait::async_trait;

pub use client::ApiClient;

use crate::domain::{RankedQueueSelector, Region};
use types::{ChampionMasteryDto, LeagueEntryDto, MatchDto, MatchReferenceDto};

/// Outcome of a single API call. Every fetch resolves to exactly one of
/// these; transport failures are folded into `ServerError` so no call site
/// has to deal with a second error channel.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult<T> {
    Success(T),
    /// Resource absent, shown as an informational empty state.
    NotFound,
    /// Raw detail text kept for diagnostics.
    ServerError(String),
    /// Retry countdown in seconds; the request is not auto-retried.
    RateLimited(u64),
}

impl<T> ApiResult<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResult<U> {
        match self {
            ApiResult::Success(value) => ApiResult::Success(f(value)),
            ApiResult::NotFound => ApiResult::NotFound,
            ApiResult::ServerError(detail) => ApiResult::ServerError(detail),
            ApiResult::RateLimited(wait) => ApiResult::RateLimited(wait),
        }
    }
}

/// Summoner-scoped endpoints.
#[async_trait]
pub trait PlayerApi: Send + Sync + Debug {
    async fn get_ranked_games(
        &self,
        region: Region,
        account_id: i64,
        selector: RankedQueueSelector,
    ) -> ApiResult<Vec<MatchReferenceDto>>;

    async fn get_mastery_points(
        &self,
        region: Region,
        summoner_id: i64,
    ) -> ApiResult<Vec<ChampionMasteryDto>>;

    async fn get_rankings(&self, region: Region, summoner_id: i64)
    -> ApiResult<Vec<LeagueEntryDto>>;
}

/// Match-scoped endpoints.
#[async_trait]
pub trait GameApi: Send + Sync + Debug {
    async fn get_game_detail(&self, region: Region, game_id: i64) -> ApiResult<MatchDto>;
}
