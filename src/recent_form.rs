//! Recent-form extraction for pre-game teammate previews.

use chrono::{DateTime, Duration, Utc};
use tracing::warn;

use crate::config::{LOW_CONFIDENCE_GAME_COUNT, RECENT_FORM_WINDOW_DAYS};
use crate::domain::{GameReference, Queue};
use crate::metadata::ChampionId;

/// Degradations encountered while selecting the game sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormWarning {
    /// No games in the requested queue; the complementary queue was
    /// consulted instead. Non-fatal on its own.
    SwitchedQueue { from: Queue, to: Queue },
    /// No usable games at all. Fatal for this feature.
    NoStatsAvailable,
    /// Fewer games than needed for a confident read; games are still kept.
    LowSampleSize(usize),
}

/// A teammate's recent ranked games plus any warnings about how the sample
/// was obtained.
#[derive(Debug, Clone, PartialEq)]
pub struct RecentForm {
    /// Queue the games were actually taken from (may differ from the
    /// requested one after a fallback switch).
    pub queue: Queue,
    pub games: Vec<GameReference>,
    pub warnings: Vec<FormWarning>,
}

impl RecentForm {
    pub fn is_usable(&self) -> bool {
        !self.warnings.contains(&FormWarning::NoStatsAvailable)
    }

    /// Games on one specific champion. Recomputed in full from the sample
    /// on every selection, never incrementally patched.
    pub fn games_for_champion(&self, champion_id: ChampionId) -> Vec<&GameReference> {
        self.games
            .iter()
            .filter(|game| game.champion.id == champion_id)
            .collect()
    }
}

/// Queue consulted when the requested one has no recent games.
fn complementary_queue(queue: Queue) -> Option<Queue> {
    match queue {
        Queue::SoloDuo => Some(Queue::Flex5v5),
        Queue::Flex5v5 => Some(Queue::SoloDuo),
        Queue::Flex3v3 => None,
    }
}

/// Window the raw game list to the last [`RECENT_FORM_WINDOW_DAYS`] days
/// and select the sample for the queue being entered.
pub fn extract_recent_form(
    games: &[GameReference],
    queueing_for: Queue,
    now: DateTime<Utc>,
) -> RecentForm {
    let cutoff = now - Duration::days(RECENT_FORM_WINDOW_DAYS);
    let windowed: Vec<&GameReference> = games
        .iter()
        .filter(|game| game.game_start_time > cutoff)
        .collect();

    let mut warnings = Vec::new();
    let mut queue = queueing_for;
    let mut selected: Vec<GameReference> = windowed
        .iter()
        .filter(|game| game.queue == queue)
        .map(|&game| game.clone())
        .collect();

    if selected.is_empty() {
        if let Some(fallback) = complementary_queue(queueing_for) {
            // The switch notice is recorded before the fallback sample is
            // inspected, so an empty complementary queue still leaves the
            // full warning trail.
            warn!(
                "no recent {:?} games, switching to {:?} stats",
                queueing_for, fallback
            );
            warnings.push(FormWarning::SwitchedQueue {
                from: queueing_for,
                to: fallback,
            });
            queue = fallback;
            selected = windowed
                .iter()
                .filter(|game| game.queue == fallback)
                .map(|&game| game.clone())
                .collect();
        }
    }

    if selected.is_empty() {
        warn!("no recent ranked games found, unable to produce stats");
        warnings.push(FormWarning::NoStatsAvailable);
        return RecentForm {
            queue,
            games: Vec::new(),
            warnings,
        };
    }

    if selected.len() < LOW_CONFIDENCE_GAME_COUNT {
        warnings.push(FormWarning::LowSampleSize(selected.len()));
    }

    RecentForm {
        queue,
        games: selected,
        warnings,
    }
}
