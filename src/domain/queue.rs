/// Ranked matchmaking modes handled by the statistics views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Queue {
    /// Ranked Solo/Duo
    SoloDuo,
    /// Ranked Flex 5v5
    Flex5v5,
    /// Ranked Flex 3v3 (Twisted Treeline)
    Flex3v3,
}

impl Queue {
    /// Match-list responses carry numeric queue ids.
    pub fn from_queue_id(id: u16) -> Option<Self> {
        match id {
            420 => Some(Self::SoloDuo),
            440 => Some(Self::Flex5v5),
            470 => Some(Self::Flex3v3),
            _ => None,
        }
    }

    pub fn queue_id(&self) -> u16 {
        match self {
            Queue::SoloDuo => 420,
            Queue::Flex5v5 => 440,
            Queue::Flex3v3 => 470,
        }
    }

    /// League entries identify their queue with a string instead.
    pub fn from_league_queue_type(value: &str) -> Option<Self> {
        match value {
            "RANKED_SOLO_5x5" => Some(Self::SoloDuo),
            "RANKED_FLEX_SR" => Some(Self::Flex5v5),
            "RANKED_FLEX_TT" => Some(Self::Flex3v3),
            _ => None,
        }
    }

    pub fn as_league_queue_type(&self) -> &'static str {
        match self {
            Queue::SoloDuo => "RANKED_SOLO_5x5",
            Queue::Flex5v5 => "RANKED_FLEX_SR",
            Queue::Flex3v3 => "RANKED_FLEX_TT",
        }
    }
}

/// Queue filter the match-list endpoint is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankedQueueSelector {
    /// All three ranked queues.
    SoloAndFlex,
    /// Solo/Duo and Flex 5v5 only, used by the pre-game teammate preview.
    SoloAndFlex5v5,
}

impl RankedQueueSelector {
    pub fn queue_ids(&self) -> &'static [u16] {
        match self {
            RankedQueueSelector::SoloAndFlex => &[420, 440, 470],
            RankedQueueSelector::SoloAndFlex5v5 => &[420, 440],
        }
    }

    pub fn to_query(&self) -> String {
        self.queue_ids()
            .iter()
            .map(|id| format!("queue={id}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_id_conversions() {
        assert_eq!(Queue::from_queue_id(420), Some(Queue::SoloDuo));
        assert_eq!(Queue::from_queue_id(440), Some(Queue::Flex5v5));
        assert_eq!(Queue::from_queue_id(470), Some(Queue::Flex3v3));
        assert_eq!(Queue::from_queue_id(450), None);
        assert_eq!(Queue::SoloDuo.queue_id(), 420);
    }

    #[test]
    fn league_queue_type_conversions() {
        assert_eq!(
            Queue::from_league_queue_type("RANKED_SOLO_5x5"),
            Some(Queue::SoloDuo)
        );
        assert_eq!(Queue::from_league_queue_type("RANKED_TFT"), None);
        assert_eq!(Queue::Flex5v5.as_league_queue_type(), "RANKED_FLEX_SR");
    }

    #[test]
    fn selector_query_lists_every_queue() {
        assert_eq!(
            RankedQueueSelector::SoloAndFlex.to_query(),
            "queue=420&queue=440&queue=470"
        );
        assert_eq!(
            RankedQueueSelector::SoloAndFlex5v5.to_query(),
            "queue=420&queue=440"
        );
    }
}
