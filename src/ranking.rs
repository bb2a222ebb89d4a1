//! Picks the most meaningful displayable ranking for a target queue.

use crate::domain::{LeaguePosition, Queue};

/// Alternate queues consulted, in order, when the target queue has no
/// ranking data. Extend here when queue types change.
pub fn fallback_chain(target: Queue) -> [Queue; 2] {
    match target {
        Queue::SoloDuo => [Queue::Flex5v5, Queue::Flex3v3],
        Queue::Flex5v5 => [Queue::SoloDuo, Queue::Flex3v3],
        Queue::Flex3v3 => [Queue::Flex5v5, Queue::SoloDuo],
    }
}

/// Exact match on the target queue first, otherwise the first entry of the
/// fallback chain with data, otherwise `None` (unranked everywhere).
pub fn resolve_meaningful_position(
    rankings: &[LeaguePosition],
    target: Queue,
) -> Option<&LeaguePosition> {
    if let Some(exact) = rankings.iter().find(|position| position.queue == target) {
        return Some(exact);
    }

    fallback_chain(target)
        .into_iter()
        .find_map(|queue| rankings.iter().find(|position| position.queue == queue))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(queue: Queue, tier: &str) -> LeaguePosition {
        LeaguePosition {
            queue,
            tier: tier.to_string(),
            rank: "I".to_string(),
            league_points: 42,
            wins: 50,
            losses: 40,
        }
    }

    #[test]
    fn exact_match_wins_over_fallbacks() {
        let rankings = vec![
            position(Queue::Flex5v5, "GOLD"),
            position(Queue::SoloDuo, "PLATINUM"),
        ];

        let resolved = resolve_meaningful_position(&rankings, Queue::SoloDuo).unwrap();
        assert_eq!(resolved.queue, Queue::SoloDuo);
        assert_eq!(resolved.tier, "PLATINUM");
    }

    #[test]
    fn solo_target_falls_back_to_flex_5v5() {
        let rankings = vec![position(Queue::Flex5v5, "GOLD")];

        let resolved = resolve_meaningful_position(&rankings, Queue::SoloDuo).unwrap();
        assert_eq!(resolved.queue, Queue::Flex5v5);
    }

    #[test]
    fn solo_target_reaches_flex_3v3_last() {
        let rankings = vec![position(Queue::Flex3v3, "SILVER")];

        let resolved = resolve_meaningful_position(&rankings, Queue::SoloDuo).unwrap();
        assert_eq!(resolved.queue, Queue::Flex3v3);
    }

    #[test]
    fn flex_3v3_target_prefers_flex_5v5_over_solo() {
        let rankings = vec![
            position(Queue::SoloDuo, "PLATINUM"),
            position(Queue::Flex5v5, "GOLD"),
        ];

        let resolved = resolve_meaningful_position(&rankings, Queue::Flex3v3).unwrap();
        assert_eq!(resolved.queue, Queue::Flex5v5);
    }

    #[test]
    fn empty_rankings_resolve_to_none() {
        assert!(resolve_meaningful_position(&[], Queue::SoloDuo).is_none());
        assert!(resolve_meaningful_position(&[], Queue::Flex5v5).is_none());
        assert!(resolve_meaningful_position(&[], Queue::Flex3v3).is_none());
    }

    #[test]
    fn result_is_always_target_or_chain_member() {
        let all = [Queue::SoloDuo, Queue::Flex5v5, Queue::Flex3v3];
        for &target in &all {
            for &present in &all {
                let rankings = vec![position(present, "GOLD")];
                if let Some(resolved) = resolve_meaningful_position(&rankings, target) {
                    let chain = fallback_chain(target);
                    assert!(resolved.queue == target || chain.contains(&resolved.queue));
                }
            }
        }
    }
}
