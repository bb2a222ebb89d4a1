//! Static game metadata: champions, items and summoner spells.
//!
//! The containers are loaded once at startup from Data Dragon and stay
//! read-only for the lifetime of the session. Every record that needs a
//! display name or icon references them through an `Arc`, so any number of
//! in-flight record constructions can share them without contention.

use std::{collections::HashMap, env, sync::LazyLock};

use serde::Deserialize;

/// Loaded once at startup to avoid repeated environment lookups.
pub static DDRAGON_VERSION: LazyLock<String> =
    LazyLock::new(|| env::var("DDRAGON_VERSION").unwrap_or_else(|_| "15.12.1".to_string()));

fn ddragon_version() -> &'static str {
    DDRAGON_VERSION.as_str()
}

pub type ChampionId = i32;
pub type ItemId = i32;
pub type SummonerSpellId = i32;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Champion {
    pub id: ChampionId,
    pub name: String,
}

impl Champion {
    /// Stand-in for champion ids missing from the loaded metadata, so a
    /// stale Data Dragon dump never breaks record construction.
    pub fn placeholder(id: ChampionId) -> Self {
        Self {
            id,
            name: format!("Champion #{id}"),
        }
    }

    pub fn to_picture_url(&self) -> String {
        format!(
            "https://ddragon.leagueoflegends.com/cdn/{}/img/champion/{}.png",
            ddragon_version(),
            self.name
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
}

impl Item {
    pub fn placeholder(id: ItemId) -> Self {
        Self {
            id,
            name: format!("Item #{id}"),
        }
    }

    pub fn to_picture_url(&self) -> String {
        format!(
            "https://ddragon.leagueoflegends.com/cdn/{}/img/item/{}.png",
            ddragon_version(),
            self.id
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SummonerSpell {
    pub id: SummonerSpellId,
    pub name: String,
}

impl SummonerSpell {
    pub fn placeholder(id: SummonerSpellId) -> Self {
        Self {
            id,
            name: format!("Spell #{id}"),
        }
    }
}

/// Champion id → metadata mapping.
#[derive(Debug, Default)]
pub struct ChampionsContainer {
    by_id: HashMap<ChampionId, Champion>,
}

impl ChampionsContainer {
    pub fn new(champions: Vec<Champion>) -> Self {
        Self {
            by_id: champions.into_iter().map(|c| (c.id, c)).collect(),
        }
    }

    pub fn get(&self, id: ChampionId) -> Option<&Champion> {
        self.by_id.get(&id)
    }

    pub fn get_or_placeholder(&self, id: ChampionId) -> Champion {
        self.by_id
            .get(&id)
            .cloned()
            .unwrap_or_else(|| Champion::placeholder(id))
    }

    /// All champions ordered by display name, for filter dropdowns.
    pub fn list_by_name(&self) -> Vec<&Champion> {
        let mut champions: Vec<&Champion> = self.by_id.values().collect();
        champions.sort_by(|a, b| a.name.cmp(&b.name));
        champions
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Item id → metadata mapping.
#[derive(Debug, Default)]
pub struct ItemsContainer {
    by_id: HashMap<ItemId, Item>,
}

impl ItemsContainer {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            by_id: items.into_iter().map(|i| (i.id, i)).collect(),
        }
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.by_id.get(&id)
    }

    pub fn get_or_placeholder(&self, id: ItemId) -> Item {
        self.by_id
            .get(&id)
            .cloned()
            .unwrap_or_else(|| Item::placeholder(id))
    }
}

/// Summoner spell id → metadata mapping.
#[derive(Debug, Default)]
pub struct SummonerspellsContainer {
    by_id: HashMap<SummonerSpellId, SummonerSpell>,
}

impl SummonerspellsContainer {
    pub fn new(spells: Vec<SummonerSpell>) -> Self {
        Self {
            by_id: spells.into_iter().map(|s| (s.id, s)).collect(),
        }
    }

    pub fn get(&self, id: SummonerSpellId) -> Option<&SummonerSpell> {
        self.by_id.get(&id)
    }

    pub fn get_or_placeholder(&self, id: SummonerSpellId) -> SummonerSpell {
        self.by_id
            .get(&id)
            .cloned()
            .unwrap_or_else(|| SummonerSpell::placeholder(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn champions() -> ChampionsContainer {
        ChampionsContainer::new(vec![
            Champion {
                id: 103,
                name: "Ahri".to_string(),
            },
            Champion {
                id: 64,
                name: "Lee Sin".to_string(),
            },
            Champion {
                id: 12,
                name: "Alistar".to_string(),
            },
        ])
    }

    #[test]
    fn lookup_by_id_works() {
        let container = champions();
        assert_eq!(container.get(103).map(|c| c.name.as_str()), Some("Ahri"));
        assert!(container.get(9999).is_none());
    }

    #[test]
    fn unknown_id_yields_placeholder() {
        let container = champions();
        let champion = container.get_or_placeholder(9999);
        assert_eq!(champion.id, 9999);
        assert_eq!(champion.name, "Champion #9999");
    }

    #[test]
    fn list_by_name_is_sorted() {
        let container = champions();
        let names: Vec<&str> = container
            .list_by_name()
            .into_iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Ahri", "Alistar", "Lee Sin"]);
    }
}
