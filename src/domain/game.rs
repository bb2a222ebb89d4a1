use chrono::{DateTime, TimeZone, Utc};
use tracing::{debug, warn};

use crate::api::types::{MatchDto, MatchReferenceDto};
use crate::domain::Queue;
use crate::metadata::{Champion, ChampionsContainer, Item, ItemsContainer, SummonerSpell, SummonerspellsContainer};

/// One entry of a summoner's match list. Created in bulk from the history
/// response; the detail record is attached lazily once a detail fetch
/// succeeds. Entries are never removed, only annotated.
#[derive(Debug, Clone, PartialEq)]
pub struct GameReference {
    pub game_id: i64,
    pub queue: Queue,
    pub game_start_time: DateTime<Utc>,
    pub champion: Champion,
    pub details: Option<GameRecordPersonalised>,
}

impl GameReference {
    pub fn from_dto(dto: MatchReferenceDto, champions: &ChampionsContainer) -> Option<Self> {
        let Some(queue) = Queue::from_queue_id(dto.queue) else {
            debug!("game {} has unhandled queue id {}", dto.game_id, dto.queue);
            return None;
        };
        let Some(game_start_time) = Utc.timestamp_millis_opt(dto.timestamp).single() else {
            debug!("game {} has invalid timestamp {}", dto.game_id, dto.timestamp);
            return None;
        };

        Some(Self {
            game_id: dto.game_id,
            queue,
            game_start_time,
            champion: champions.get_or_placeholder(dto.champion),
            details: None,
        })
    }

    /// Wrap a full match-list response, skipping entries this crate cannot
    /// represent.
    pub fn collect(dtos: Vec<MatchReferenceDto>, champions: &ChampionsContainer) -> Vec<Self> {
        dtos.into_iter()
            .filter_map(|dto| Self::from_dto(dto, champions))
            .collect()
    }
}

/// Full per-participant breakdown of a single historical match, as returned
/// by the detail endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    raw: MatchDto,
}

impl GameRecord {
    pub fn new(raw: MatchDto) -> Self {
        Self { raw }
    }

    pub fn raw(&self) -> &MatchDto {
        &self.raw
    }

    pub fn queue(&self) -> Option<Queue> {
        Queue::from_queue_id(self.raw.queue_id)
    }

    /// Extract the given summoner's view of the match, binding champion,
    /// item and spell metadata. Returns `None` when the summoner did not
    /// take part in the match.
    pub fn personalise(
        &self,
        summoner_id: i64,
        champions: &ChampionsContainer,
        items: &ItemsContainer,
        summonerspells: &SummonerspellsContainer,
    ) -> Option<GameRecordPersonalised> {
        let Some(participant) = self
            .raw
            .participants
            .iter()
            .find(|p| p.summoner_id == summoner_id)
        else {
            warn!(
                "summoner {} not found among {} participants of game {}",
                summoner_id,
                self.raw.participants.len(),
                self.raw.game_id
            );
            return None;
        };

        Some(GameRecordPersonalised {
            game_id: self.raw.game_id,
            queue: self.queue(),
            game_duration_secs: self.raw.game_duration,
            win: participant.win,
            champion: champions.get_or_placeholder(participant.champion_id),
            kills: participant.kills,
            deaths: participant.deaths,
            assists: participant.assists,
            items: participant
                .items()
                .iter()
                .filter(|&&id| id != 0)
                .map(|&id| items.get_or_placeholder(id))
                .collect(),
            spells: vec![
                summonerspells.get_or_placeholder(participant.spell1_id),
                summonerspells.get_or_placeholder(participant.spell2_id),
            ],
        })
    }
}

/// A detail record viewed from one participant's perspective.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecordPersonalised {
    pub game_id: i64,
    pub queue: Option<Queue>,
    pub game_duration_secs: u64,
    pub win: bool,
    pub champion: Champion,
    pub kills: i32,
    pub deaths: i32,
    pub assists: i32,
    pub items: Vec<Item>,
    pub spells: Vec<SummonerSpell>,
}

impl GameRecordPersonalised {
    pub fn kda_ratio(&self) -> f64 {
        if self.deaths == 0 {
            (self.kills + self.assists) as f64
        } else {
            (self.kills + self.assists) as f64 / self.deaths as f64
        }
    }

    pub fn to_formatted_duration(&self) -> String {
        let minutes = self.game_duration_secs / 60;
        let seconds = self.game_duration_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}
