//! View-model core for a League of Legends summoner statistics front-end.
//!
//! The crate reconciles asynchronously fetched, rate-limited API data with
//! static game metadata and derives the filtered and incrementally loaded
//! views a statistics UI displays: match history with lazy per-game
//! details, champion mastery standings, ranked-queue fallback selection,
//! pre-game teammate recent form and horizontal scroll paging. Rendering,
//! routing and translation tables stay outside; the view models here only
//! ever expose plain data and translation keys.

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod history;
pub mod i18n;
pub mod logging;
pub mod metadata;
pub mod ranking;
pub mod recent_form;
pub mod scroll;
pub mod timefmt;

pub use api::{ApiClient, ApiResult, GameApi, PlayerApi};
pub use domain::{
    ChampionMastery, GameRecord, GameRecordPersonalised, GameReference, LeaguePosition, Queue,
    RankedQueueSelector, Region, Summoner,
};
pub use error::AppError;
pub use history::{DetailOutcome, DisplayError, LoadState, SummonerStatistics};
pub use ranking::resolve_meaningful_position;
pub use recent_form::{FormWarning, RecentForm, extract_recent_form};
