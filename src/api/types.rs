//! Raw API payload shapes. Treated as opaque inputs: only the fields this
//! crate actually reads are declared, everything else is ignored by serde.

use serde::Deserialize;

use crate::metadata::{ChampionId, ItemId, SummonerSpellId};

// ============================================================================
// Match list
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchlistDto {
    pub matches: Vec<MatchReferenceDto>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReferenceDto {
    pub game_id: i64,
    pub queue: u16,
    /// Game start, epoch milliseconds.
    pub timestamp: i64,
    pub champion: ChampionId,
}

// ============================================================================
// Champion mastery
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampionMasteryDto {
    pub champion_id: ChampionId,
    pub champion_points: i64,
    pub champion_level: i32,
}

// ============================================================================
// League positions
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntryDto {
    pub queue_type: String,
    pub tier: String,
    pub rank: String,
    pub league_points: i32,
    pub wins: u32,
    pub losses: u32,
}

// ============================================================================
// Match detail
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDto {
    pub game_id: i64,
    pub queue_id: u16,
    /// Seconds.
    pub game_duration: u64,
    /// Epoch milliseconds.
    pub game_creation: i64,
    pub participants: Vec<ParticipantDto>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    pub summoner_id: i64,
    pub champion_id: ChampionId,
    pub win: bool,
    pub kills: i32,
    pub deaths: i32,
    pub assists: i32,
    // Items (6 slots + ward)
    #[serde(default)]
    pub item0: ItemId,
    #[serde(default)]
    pub item1: ItemId,
    #[serde(default)]
    pub item2: ItemId,
    #[serde(default)]
    pub item3: ItemId,
    #[serde(default)]
    pub item4: ItemId,
    #[serde(default)]
    pub item5: ItemId,
    #[serde(default)]
    pub item6: ItemId,
    pub spell1_id: SummonerSpellId,
    pub spell2_id: SummonerSpellId,
}

impl ParticipantDto {
    /// Returns all item ids (0 = empty slot).
    pub fn items(&self) -> [ItemId; 7] {
        [
            self.item0, self.item1, self.item2, self.item3, self.item4, self.item5, self.item6,
        ]
    }
}
