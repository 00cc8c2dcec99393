//! Per-bot view of one round

use ahash::AHashSet;

use crate::core::config::RoundConfig;
use crate::core::types::{BotId, RoundId};
use crate::events::Event;
use crate::hex::Position;

/// Everything a rule may look at for one bot in one round.
///
/// Built fresh for every bot every round and never stored.
#[derive(Debug, Clone, Copy)]
pub struct DecisionContext<'a> {
    pub bot_id: BotId,
    pub bot_position: Position,
    pub events: &'a [Event],
    pub round_id: RoundId,
    pub round_config: RoundConfig,
    pub friendly_ids: &'a AHashSet<BotId>,
}

impl<'a> DecisionContext<'a> {
    pub fn is_friendly(&self, bot: BotId) -> bool {
        self.friendly_ids.contains(&bot)
    }

    /// An enemy spotted this bot
    pub fn self_detected(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, Event::Detected { bot_id } if *bot_id == self.bot_id))
    }

    pub fn self_damaged(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, Event::Damaged { bot_id, .. } if *bot_id == self.bot_id))
    }

    /// A cannon shot connected with a bot that is not ours
    pub fn enemy_hit(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, Event::Hit { bot_id, .. } if !self.is_friendly(*bot_id)))
    }

    pub fn radar_echo_received(&self) -> bool {
        self.events.iter().any(|e| matches!(e, Event::RadarEcho { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context<'a>(events: &'a [Event], friends: &'a AHashSet<BotId>) -> DecisionContext<'a> {
        DecisionContext {
            bot_id: BotId(1),
            bot_position: Position::new(0, 0),
            events,
            round_id: 0,
            round_config: RoundConfig::default(),
            friendly_ids: friends,
        }
    }

    #[test]
    fn test_detection_must_target_this_bot() {
        let friends: AHashSet<BotId> = [BotId(1), BotId(2)].into_iter().collect();
        let events = vec![Event::Detected { bot_id: BotId(2) }];
        assert!(!context(&events, &friends).self_detected());

        let events = vec![Event::Detected { bot_id: BotId(1) }];
        assert!(context(&events, &friends).self_detected());
    }

    #[test]
    fn test_hit_on_friend_is_not_enemy_hit() {
        let friends: AHashSet<BotId> = [BotId(1), BotId(2)].into_iter().collect();
        let events = vec![Event::Hit { bot_id: BotId(2), source: None }];
        assert!(!context(&events, &friends).enemy_hit());

        let events = vec![Event::Hit { bot_id: BotId(40), source: None }];
        assert!(context(&events, &friends).enemy_hit());
    }

    #[test]
    fn test_seeing_an_enemy_triggers_nothing() {
        let friends = AHashSet::new();
        let events = vec![Event::See { bot_id: BotId(1), pos: None }];
        let ctx = context(&events, &friends);
        assert!(!ctx.radar_echo_received());
        assert!(!ctx.self_damaged());
        assert!(!ctx.self_detected());
    }
}
