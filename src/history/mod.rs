//! Game-history view model: holds the fetched history and mastery data for
//! one selected summoner, derives filtered views and drives lazy per-game
//! detail loading.
//!
//! All state mutation happens on the single event-processing thread between
//! suspension points, so no locking is needed. Cancellation of a superseded
//! joint fetch works through a generation counter: results carrying a stale
//! ticket are dropped on application.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::{debug, info};

use crate::api::types::{ChampionMasteryDto, MatchDto, MatchReferenceDto};
use crate::api::{ApiResult, GameApi, PlayerApi};
use crate::config::AUTOLOAD_DETAIL_COUNT;
use crate::domain::{
    ChampionMastery, GameRecord, GameRecordPersonalised, GameReference, Queue,
    RankedQueueSelector, Summoner,
};
use crate::i18n::keys;
use crate::metadata::{ChampionId, ChampionsContainer, ItemsContainer, SummonerspellsContainer};

/// Lifecycle of one summoner selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    /// At least one of the joint fetches delivered data. Partial success is
    /// permitted: history and mastery fail independently.
    Loaded,
    /// Both joint fetches failed; there is nothing to display.
    Failed,
}

/// Localized error surfaced to the view: a translation key plus the raw
/// detail text kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayError {
    pub text_key: &'static str,
    pub details: String,
}

impl DisplayError {
    fn keyed(text_key: &'static str) -> Self {
        Self {
            text_key,
            details: String::new(),
        }
    }

    fn with_details(text_key: &'static str, details: impl Into<String>) -> Self {
        Self {
            text_key,
            details: details.into(),
        }
    }
}

/// Proof of which summoner selection a fetch belongs to. Applying a
/// response with a stale ticket is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Both halves of the joint fetch, available atomically.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsResponse {
    pub history: ApiResult<Vec<MatchReferenceDto>>,
    pub masteries: ApiResult<Vec<ChampionMasteryDto>>,
}

/// What a detail-load request ended up doing.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailOutcome {
    /// Detail record fetched and attached to its game.
    Attached,
    /// A request for this game is already outstanding; nothing was issued.
    AlreadyLoading,
    /// The game already carries its detail record; nothing was issued.
    AlreadyLoaded,
    /// The game id is not part of the current history (or no summoner is
    /// selected).
    UnknownGame,
    Failed(DisplayError),
}

pub struct SummonerStatistics {
    player_api: Arc<dyn PlayerApi>,
    game_api: Arc<dyn GameApi>,
    champions: Arc<ChampionsContainer>,
    items: Arc<ItemsContainer>,
    summonerspells: Arc<SummonerspellsContainer>,

    state: LoadState,
    generation: u64,
    summoner: Option<Summoner>,

    gamehistory: Vec<GameReference>,
    gamehistory_error: Option<DisplayError>,
    masterypoints: Vec<ChampionMastery>,
    masterypoints_error: Option<DisplayError>,

    queue_filter: HashSet<Queue>,
    champion_filter: HashSet<ChampionId>,

    autoload_pending: Vec<i64>,
    details_in_flight: HashSet<i64>,
    detail_errors: HashMap<i64, DisplayError>,
}

impl SummonerStatistics {
    pub fn new(
        player_api: Arc<dyn PlayerApi>,
        game_api: Arc<dyn GameApi>,
        champions: Arc<ChampionsContainer>,
        items: Arc<ItemsContainer>,
        summonerspells: Arc<SummonerspellsContainer>,
    ) -> Self {
        Self {
            player_api,
            game_api,
            champions,
            items,
            summonerspells,
            state: LoadState::Idle,
            generation: 0,
            summoner: None,
            gamehistory: Vec::new(),
            gamehistory_error: None,
            masterypoints: Vec::new(),
            masterypoints_error: None,
            queue_filter: HashSet::new(),
            champion_filter: HashSet::new(),
            autoload_pending: Vec::new(),
            details_in_flight: HashSet::new(),
            detail_errors: HashMap::new(),
        }
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn summoner(&self) -> Option<&Summoner> {
        self.summoner.as_ref()
    }

    /// Canonical unfiltered history, in API order (newest first).
    pub fn gamehistory(&self) -> &[GameReference] {
        &self.gamehistory
    }

    pub fn gamehistory_error(&self) -> Option<&DisplayError> {
        self.gamehistory_error.as_ref()
    }

    /// Mastery standings, descending by points.
    pub fn masterypoints(&self) -> &[ChampionMastery] {
        &self.masterypoints
    }

    pub fn masterypoints_error(&self) -> Option<&DisplayError> {
        self.masterypoints_error.as_ref()
    }

    /// One of the two joint fetches failed while the other delivered data.
    pub fn has_partial_data(&self) -> bool {
        self.state == LoadState::Loaded
            && (self.gamehistory_error.is_some() ^ self.masterypoints_error.is_some())
    }

    pub fn detail_error(&self, game_id: i64) -> Option<&DisplayError> {
        self.detail_errors.get(&game_id)
    }

    /// Game ids queued for detail pre-warming, drained by
    /// [`Self::run_autoload`].
    pub fn autoload_queue(&self) -> &[i64] {
        &self.autoload_pending
    }

    fn transition(&mut self, next: LoadState) {
        debug!("statistics state {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    /// Switch to a new summoner: suppress any in-flight fetch for the old
    /// one, clear all derived state and enter `Loading`. The returned
    /// ticket must accompany the matching [`StatisticsResponse`].
    pub fn select_summoner(&mut self, summoner: Summoner) -> FetchTicket {
        self.generation += 1;
        self.gamehistory.clear();
        self.gamehistory_error = None;
        self.masterypoints.clear();
        self.masterypoints_error = None;
        self.autoload_pending.clear();
        self.details_in_flight.clear();
        self.detail_errors.clear();
        info!(
            "loading statistics for {} ({:?})",
            summoner.current_name, summoner.region
        );
        self.summoner = Some(summoner);
        self.transition(LoadState::Loading);
        FetchTicket(self.generation)
    }

    /// Joint fetch of ranked-game list and mastery points. Join semantics:
    /// neither half is observable before both completed.
    pub async fn fetch_statistics(&self, summoner: &Summoner) -> StatisticsResponse {
        let (history, masteries) = tokio::join!(
            self.player_api.get_ranked_games(
                summoner.region,
                summoner.account_id,
                RankedQueueSelector::SoloAndFlex,
            ),
            self.player_api
                .get_mastery_points(summoner.region, summoner.id),
        );

        StatisticsResponse { history, masteries }
    }

    /// Apply a joint-fetch result. Responses for a superseded selection are
    /// dropped, which is how changing the summoner cancels the old fetch.
    pub fn apply_statistics(&mut self, ticket: FetchTicket, response: StatisticsResponse) {
        if ticket != FetchTicket(self.generation) {
            debug!("dropping statistics response for superseded selection");
            return;
        }

        self.process_history(response.history);
        self.process_masteries(response.masteries);

        let next = if self.gamehistory_error.is_some() && self.masterypoints_error.is_some() {
            LoadState::Failed
        } else {
            LoadState::Loaded
        };
        self.transition(next);
    }

    fn process_history(&mut self, result: ApiResult<Vec<MatchReferenceDto>>) {
        match result {
            ApiResult::Success(dtos) => {
                self.gamehistory = GameReference::collect(dtos, &self.champions);
                self.autoload_pending = self
                    .gamehistory
                    .iter()
                    .take(AUTOLOAD_DETAIL_COUNT)
                    .map(|game| game.game_id)
                    .collect();
                info!(
                    "loaded {} games, pre-warming details for {}",
                    self.gamehistory.len(),
                    self.autoload_pending.len()
                );
            }
            ApiResult::NotFound => {
                self.gamehistory_error = Some(DisplayError::keyed(keys::GAMEHISTORY_NOT_FOUND));
            }
            ApiResult::RateLimited(wait) => {
                self.gamehistory_error = Some(DisplayError::with_details(
                    keys::TRY_AGAIN_IN_A_MINUTE,
                    format!("retry in {wait} seconds"),
                ));
            }
            ApiResult::ServerError(detail) => {
                self.gamehistory_error =
                    Some(DisplayError::with_details(keys::INTERNAL_SERVER_ERROR, detail));
            }
        }
    }

    fn process_masteries(&mut self, result: ApiResult<Vec<ChampionMasteryDto>>) {
        match result {
            ApiResult::Success(dtos) => {
                self.masterypoints = ChampionMastery::collect_sorted(dtos, &self.champions);
            }
            ApiResult::NotFound => {
                self.masterypoints_error = Some(DisplayError::keyed(keys::GAMEHISTORY_NOT_FOUND));
            }
            ApiResult::RateLimited(wait) => {
                self.masterypoints_error = Some(DisplayError::with_details(
                    keys::TRY_AGAIN_IN_A_MINUTE,
                    format!("retry in {wait} seconds"),
                ));
            }
            ApiResult::ServerError(detail) => {
                self.masterypoints_error =
                    Some(DisplayError::with_details(keys::INTERNAL_SERVER_ERROR, detail));
            }
        }
    }

    /// Select a summoner, run the joint fetch and pre-warm details.
    /// Convenience driver for embedders without their own event loop.
    pub async fn load(&mut self, summoner: Summoner) {
        let ticket = self.select_summoner(summoner.clone());
        let response = self.fetch_statistics(&summoner).await;
        self.apply_statistics(ticket, response);
        self.run_autoload().await;
    }

    // ========================================================================
    // Filtering
    // ========================================================================

    pub fn set_queue_filter(&mut self, queues: HashSet<Queue>) {
        self.queue_filter = queues;
    }

    pub fn set_champion_filter(&mut self, champion_ids: HashSet<ChampionId>) {
        self.champion_filter = champion_ids;
    }

    /// Conjunction of two optionally-empty allow-lists: an empty filter
    /// passes everything. Never mutates the canonical sequence.
    pub fn filtered_games(&self) -> Vec<&GameReference> {
        self.gamehistory
            .iter()
            .filter(|game| self.queue_filter.is_empty() || self.queue_filter.contains(&game.queue))
            .filter(|game| {
                self.champion_filter.is_empty() || self.champion_filter.contains(&game.champion.id)
            })
            .collect()
    }

    /// Like [`Self::filtered_games`] but restricted to games whose detail
    /// record has been attached.
    pub fn filtered_loaded_games(&self) -> Vec<&GameRecordPersonalised> {
        self.filtered_games()
            .into_iter()
            .filter_map(|game| game.details.as_ref())
            .collect()
    }

    // ========================================================================
    // Per-game detail loading
    // ========================================================================

    /// Claim the in-flight guard for one game. At most one outstanding
    /// request per game id; claiming while loaded, loading or unknown
    /// reports why without issuing anything.
    pub fn try_begin_detail_load(&mut self, game_id: i64) -> Result<(), DetailOutcome> {
        let Some(game) = self.gamehistory.iter().find(|g| g.game_id == game_id) else {
            return Err(DetailOutcome::UnknownGame);
        };
        if game.details.is_some() {
            return Err(DetailOutcome::AlreadyLoaded);
        }
        if !self.details_in_flight.insert(game_id) {
            debug!("detail fetch for game {} already outstanding", game_id);
            return Err(DetailOutcome::AlreadyLoading);
        }
        self.detail_errors.remove(&game_id);
        Ok(())
    }

    /// Release the guard and attach the record or surface the error.
    /// Failures never disturb details already loaded for other games.
    pub fn apply_detail_outcome(
        &mut self,
        game_id: i64,
        result: ApiResult<MatchDto>,
    ) -> DetailOutcome {
        self.details_in_flight.remove(&game_id);

        match result {
            ApiResult::Success(dto) => {
                let Some(summoner_id) = self.summoner.as_ref().map(|s| s.id) else {
                    return DetailOutcome::UnknownGame;
                };
                let record = GameRecord::new(dto);
                match record.personalise(
                    summoner_id,
                    &self.champions,
                    &self.items,
                    &self.summonerspells,
                ) {
                    Some(personalised) => {
                        if let Some(game) =
                            self.gamehistory.iter_mut().find(|g| g.game_id == game_id)
                        {
                            game.details = Some(personalised);
                        }
                        DetailOutcome::Attached
                    }
                    None => {
                        let error = DisplayError::with_details(
                            keys::INTERNAL_SERVER_ERROR,
                            "summoner not present in match",
                        );
                        self.detail_errors.insert(game_id, error.clone());
                        DetailOutcome::Failed(error)
                    }
                }
            }
            ApiResult::RateLimited(wait) => {
                let error = DisplayError::with_details(
                    keys::TRY_AGAIN_IN_A_MINUTE,
                    format!("Try again in {wait} seconds."),
                );
                self.detail_errors.insert(game_id, error.clone());
                DetailOutcome::Failed(error)
            }
            ApiResult::NotFound => {
                let error = DisplayError::keyed(keys::GAMEHISTORY_NOT_FOUND);
                self.detail_errors.insert(game_id, error.clone());
                DetailOutcome::Failed(error)
            }
            ApiResult::ServerError(detail) => {
                let error = DisplayError::with_details(keys::INTERNAL_SERVER_ERROR, detail);
                self.detail_errors.insert(game_id, error.clone());
                DetailOutcome::Failed(error)
            }
        }
    }

    /// Fetch and attach the detail record for one game. A second call while
    /// a request is outstanding, or once the record is attached, returns
    /// immediately without a network call.
    pub async fn load_details(&mut self, game_id: i64) -> DetailOutcome {
        let Some(region) = self.summoner.as_ref().map(|s| s.region) else {
            return DetailOutcome::UnknownGame;
        };
        if let Err(outcome) = self.try_begin_detail_load(game_id) {
            return outcome;
        }

        let result = self.game_api.get_game_detail(region, game_id).await;
        self.apply_detail_outcome(game_id, result)
    }

    /// Drive the queued detail pre-warm loads.
    pub async fn run_autoload(&mut self) {
        let pending = std::mem::take(&mut self.autoload_pending);
        for game_id in pending {
            self.load_details(game_id).await;
        }
    }
}
