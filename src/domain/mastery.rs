use crate::api::types::ChampionMasteryDto;
use crate::metadata::{Champion, ChampionsContainer};

/// Mastery standing of one champion for one summoner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChampionMastery {
    pub champion: Champion,
    pub total_points: i64,
    pub level: i32,
}

impl ChampionMastery {
    pub fn from_dto(dto: ChampionMasteryDto, champions: &ChampionsContainer) -> Self {
        Self {
            champion: champions.get_or_placeholder(dto.champion_id),
            total_points: dto.champion_points,
            level: dto.champion_level,
        }
    }

    /// Wrap a raw mastery response, sorted descending by points. The
    /// collection is immutable after this: callers only ever read it.
    pub fn collect_sorted(
        dtos: Vec<ChampionMasteryDto>,
        champions: &ChampionsContainer,
    ) -> Vec<Self> {
        let mut masteries: Vec<Self> = dtos
            .into_iter()
            .map(|dto| Self::from_dto(dto, champions))
            .collect();
        masteries.sort_by(|a, b| b.total_points.cmp(&a.total_points));
        masteries
    }
}
