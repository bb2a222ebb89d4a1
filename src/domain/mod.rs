//! Domain records built from raw API payloads plus static metadata.

mod game;
mod mastery;
mod queue;
mod region;

pub use game::{GameRecord, GameRecordPersonalised, GameReference};
pub use mastery::ChampionMastery;
pub use queue::{Queue, RankedQueueSelector};
pub use region::Region;

use tracing::{debug, info};

use crate::api::types::LeagueEntryDto;

/// A player account identity within a region. Identity fields are
/// immutable; only the display name can change when a rename is detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summoner {
    pub region: Region,
    pub id: i64,
    pub account_id: i64,
    pub current_name: String,
    pub icon_id: i32,
}

impl Summoner {
    pub fn new(
        region: Region,
        id: i64,
        account_id: i64,
        current_name: impl Into<String>,
        icon_id: i32,
    ) -> Self {
        Self {
            region,
            id,
            account_id,
            current_name: current_name.into(),
            icon_id,
        }
    }

    pub fn note_rename(&mut self, new_name: impl Into<String>) {
        let new_name = new_name.into();
        if new_name != self.current_name {
            info!("summoner {} renamed to {}", self.current_name, new_name);
            self.current_name = new_name;
        }
    }
}

/// One ranking entry per queue per summoner, read-only once fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaguePosition {
    pub queue: Queue,
    pub tier: String,
    pub rank: String,
    pub league_points: i32,
    pub wins: u32,
    pub losses: u32,
}

impl LeaguePosition {
    pub fn from_dto(dto: LeagueEntryDto) -> Option<Self> {
        let Some(queue) = Queue::from_league_queue_type(&dto.queue_type) else {
            debug!("skipping league entry with queue type {}", dto.queue_type);
            return None;
        };

        Some(Self {
            queue,
            tier: dto.tier,
            rank: dto.rank,
            league_points: dto.league_points,
            wins: dto.wins,
            losses: dto.losses,
        })
    }

    pub fn collect(dtos: Vec<LeagueEntryDto>) -> Vec<Self> {
        dtos.into_iter().filter_map(Self::from_dto).collect()
    }
}
