//! Round controller: one decision per controlled bot per round

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::core::config::{EngineConfig, RoundConfig};
use crate::core::error::Result;
use crate::core::types::{BotId, RoundId};
use crate::events::Event;
use crate::hex::{Geometry, HexGeometry};
use crate::history::{Memory, MemoryBank};
use crate::host::{self, Action, BotHandle};
use crate::rules::{DecisionContext, Rule, RuleTable};
use crate::sampler::Sampler;

/// The action one bot took and the rule that chose it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    #[serde(rename = "botId")]
    pub bot_id: BotId,
    pub rule: Rule,
    #[serde(flatten)]
    pub action: Action,
}

/// A bot the host reported as not answering in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LateBot {
    #[serde(rename = "botId")]
    pub bot_id: BotId,
    pub data: serde_json::Value,
}

/// Outcome of one call to [`RoundController::decide_round`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundReport {
    #[serde(rename = "roundId")]
    pub round_id: RoundId,
    pub decisions: Vec<Decision>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub late_bots: Vec<LateBot>,
}

/// Drives the rule table for every controlled bot, round after round.
///
/// Owns all history for the lifetime of a match; bots decided later in a
/// round see what earlier bots recorded in the same round.
#[derive(Debug)]
pub struct RoundController<G: Geometry = HexGeometry> {
    config: EngineConfig,
    rules: RuleTable,
    memory: MemoryBank,
    sampler: Sampler,
    geometry: G,
    friendly_ids: Option<AHashSet<BotId>>,
}

impl RoundController<HexGeometry> {
    /// Controller with the built-in hex geometry
    pub fn new(config: EngineConfig, sampler: Sampler) -> Result<Self> {
        let geometry = HexGeometry::new(config.map_radius);
        Self::with_geometry(config, sampler, geometry)
    }
}

impl<G: Geometry> RoundController<G> {
    pub fn with_geometry(config: EngineConfig, sampler: Sampler, geometry: G) -> Result<Self> {
        config.validate()?;
        let rules = RuleTable::from_names(&config.rules)?;
        let memory = MemoryBank::new(config.memory_scope, config.radar_overlap_radius);

        Ok(Self {
            config,
            rules,
            memory,
            sampler,
            geometry,
            friendly_ids: None,
        })
    }

    /// Replace the rule table (the trailing fallback is enforced by
    /// [`RuleTable::new`])
    pub fn set_rules(&mut self, rules: RuleTable) {
        self.rules = rules;
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Display names offered to the host
    pub fn bot_names(&self) -> &[String] {
        &self.config.bot_names
    }

    /// Ids captured as friendly, once the first round has been seen
    pub fn friendly_ids(&self) -> Option<&AHashSet<BotId>> {
        self.friendly_ids.as_ref()
    }

    pub fn memory(&self) -> &MemoryBank {
        &self.memory
    }

    /// History `bot` decides against, if it has any yet
    pub fn memory_for(&self, bot: BotId) -> Option<&Memory> {
        self.memory.for_bot(bot)
    }

    /// Decide and issue one action for every bot in `bots`.
    ///
    /// Must be called once per round with that round's complete event batch.
    pub fn decide_round<B: BotHandle>(
        &mut self,
        round_id: RoundId,
        events: &[Event],
        bots: &mut [B],
        round_config: &RoundConfig,
    ) -> RoundReport {
        if round_id == 0 || self.friendly_ids.is_none() {
            self.capture_friendly_ids(round_id, bots);
        }
        for event in events {
            tracing::trace!("Round {}: event {}", round_id, event.kind());
        }

        let mut decisions = Vec::with_capacity(bots.len());
        for bot in bots.iter_mut() {
            let decision = self.decide_for(bot, round_id, events, round_config);
            decisions.push(decision);
        }

        let late_bots = report_late_bots(events);

        RoundReport {
            round_id,
            decisions,
            late_bots,
        }
    }

    fn capture_friendly_ids<B: BotHandle>(&mut self, round_id: RoundId, bots: &[B]) {
        let ids: AHashSet<BotId> = bots.iter().map(|b| b.bot_id()).collect();
        tracing::debug!("Round {}: controlling {} bots", round_id, ids.len());
        self.friendly_ids = Some(ids);
    }

    fn decide_for<B: BotHandle>(
        &mut self,
        bot: &mut B,
        round_id: RoundId,
        events: &[Event],
        round_config: &RoundConfig,
    ) -> Decision {
        let empty = AHashSet::new();
        let friendly_ids = self.friendly_ids.as_ref().unwrap_or(&empty);
        let bot_id = bot.bot_id();

        let ctx = DecisionContext {
            bot_id,
            bot_position: bot.position(),
            events,
            round_id,
            round_config: *round_config,
            friendly_ids,
        };

        let memory = self.memory.for_bot_mut(bot_id);
        let (rule, action) =
            self.rules
                .decide(&ctx, memory, &mut self.sampler, &self.geometry, &self.config);

        host::execute(bot, action);

        Decision { bot_id, rule, action }
    }
}

/// Log every `noaction` event. Purely diagnostic.
fn report_late_bots(events: &[Event]) -> Vec<LateBot> {
    events
        .iter()
        .filter_map(|e| match e {
            Event::NoAction { bot_id, data } => {
                tracing::warn!("Bot {} did not respond in required time: {}", bot_id, data);
                Some(LateBot {
                    bot_id: *bot_id,
                    data: data.clone(),
                })
            }
            _ => None,
        })
        .collect()
}
