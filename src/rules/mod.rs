//! Priority-ordered decision rules
//!
//! A [`RuleTable`] is an ordered list of [`Rule`]s. For each bot each round
//! the first rule whose condition holds picks the bot's single action. The
//! table always ends with [`Rule::Fallback`], which matches unconditionally.

pub mod context;
pub mod targeting;

use serde::{Deserialize, Serialize};

pub use context::DecisionContext;
pub use targeting::sample_radar_target;

use crate::core::config::EngineConfig;
use crate::core::error::{BotError, Result};
use crate::events::first_radar_echo;
use crate::hex::{Geometry, Position};
use crate::history::Memory;
use crate::host::Action;
use crate::sampler::Sampler;

/// Rule names in their standard priority order
pub const DEFAULT_RULE_ORDER: [&str; 6] = [
    "self_detected",
    "self_damaged",
    "enemy_hit",
    "radar_echo",
    "fresh_track",
    "fallback",
];

/// One (condition, response) pair of the decision table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// Spotted by an enemy: move to a random reachable hex
    SelfDetected,
    /// Took damage: move to a random reachable hex
    SelfDamaged,
    /// Our last shot connected: fire again close to it
    EnemyHit,
    /// Radar found an enemy: fire at it and remember where it was
    RadarEcho,
    /// Enemy seen recently: scan around its last known position
    FreshTrack,
    /// Scan a random free spot
    Fallback,
}

impl Rule {
    pub const ALL: [Rule; 6] = [
        Rule::SelfDetected,
        Rule::SelfDamaged,
        Rule::EnemyHit,
        Rule::RadarEcho,
        Rule::FreshTrack,
        Rule::Fallback,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::SelfDetected => "self_detected",
            Self::SelfDamaged => "self_damaged",
            Self::EnemyHit => "enemy_hit",
            Self::RadarEcho => "radar_echo",
            Self::FreshTrack => "fresh_track",
            Self::Fallback => "fallback",
        }
    }

    pub fn from_name(name: &str) -> Result<Rule> {
        Self::ALL
            .into_iter()
            .find(|rule| rule.name() == name)
            .ok_or_else(|| BotError::UnknownRule(name.to_string()))
    }

    /// Whether this rule applies to the bot described by `ctx`
    pub fn matches(&self, ctx: &DecisionContext<'_>, memory: &Memory, config: &EngineConfig) -> bool {
        match self {
            Self::SelfDetected => ctx.self_detected(),
            Self::SelfDamaged => ctx.self_damaged(),
            // Re-firing needs a previous shot to walk from
            Self::EnemyHit => ctx.enemy_hit() && memory.shots.latest().is_some(),
            Self::RadarEcho => ctx.radar_echo_received(),
            Self::FreshTrack => memory
                .enemy_track
                .is_fresh_as_of(ctx.round_id, config.track_freshness_rounds),
            Self::Fallback => true,
        }
    }

    /// Pick this rule's action, recording shots, tracks and scans in `memory`
    pub fn respond<G: Geometry + ?Sized>(
        &self,
        ctx: &DecisionContext<'_>,
        memory: &mut Memory,
        sampler: &mut Sampler,
        geometry: &G,
        config: &EngineConfig,
    ) -> Action {
        match self {
            Self::SelfDetected | Self::SelfDamaged => evasive_move(ctx, sampler, geometry),
            Self::EnemyHit => {
                let Some(previous) = memory.shots.latest() else {
                    return Self::Fallback.respond(ctx, memory, sampler, geometry, config);
                };
                let target = sampler.position_with_error_margin(previous, config.shot_error_margin);
                memory.shots.append(target);
                Action::Cannon { x: target.x, y: target.y }
            }
            Self::RadarEcho => {
                let Some(enemy) = first_radar_echo(ctx.events) else {
                    return Self::Fallback.respond(ctx, memory, sampler, geometry, config);
                };
                let target = sampler.position_with_error_margin(enemy, config.shot_error_margin);
                memory.shots.append(target);
                memory.enemy_track.append(enemy, ctx.round_id);
                Action::Cannon { x: target.x, y: target.y }
            }
            Self::FreshTrack => {
                let Some(last_seen) = memory.enemy_track.latest() else {
                    return Self::Fallback.respond(ctx, memory, sampler, geometry, config);
                };
                let margin = config.radar_error_margin;
                let target = sample_radar_target(
                    &memory.radar,
                    ctx.round_id,
                    config.max_radar_attempts,
                    sampler,
                    |s, previous| s.position_with_error_margin(previous.unwrap_or(last_seen), margin),
                );
                scan(memory, target, ctx)
            }
            Self::Fallback => {
                let target = sample_radar_target(
                    &memory.radar,
                    ctx.round_id,
                    config.max_radar_attempts,
                    sampler,
                    |s, _| s.random_map_position(),
                );
                scan(memory, target, ctx)
            }
        }
    }
}

fn scan(memory: &mut Memory, target: Position, ctx: &DecisionContext<'_>) -> Action {
    memory.radar.append(target, ctx.round_id);
    Action::Radar { x: target.x, y: target.y }
}

/// Move to a uniformly random hex within the round's movement range. Stays
/// put when nothing is reachable.
fn evasive_move<G: Geometry + ?Sized>(
    ctx: &DecisionContext<'_>,
    sampler: &mut Sampler,
    geometry: &G,
) -> Action {
    let reachable = geometry.neighbors(ctx.bot_position, ctx.round_config.move_range);
    let target = if reachable.is_empty() {
        ctx.bot_position
    } else {
        reachable[sampler.random_index(reachable.len())]
    };
    Action::Move { x: target.x, y: target.y }
}

/// Ordered decision table, first match wins
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl Default for RuleTable {
    fn default() -> Self {
        Self {
            rules: Rule::ALL.to_vec(),
        }
    }
}

impl RuleTable {
    /// Build a table from rules in priority order.
    ///
    /// The last rule must be [`Rule::Fallback`] so every bot gets an action.
    pub fn new(rules: Vec<Rule>) -> Result<Self> {
        match rules.last() {
            Some(Rule::Fallback) => Ok(Self { rules }),
            other => Err(BotError::MissingFallback(other.map(Rule::name))),
        }
    }

    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        let rules = names
            .iter()
            .map(|name| Rule::from_name(name.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Self::new(rules)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// First rule whose condition holds
    pub fn select(&self, ctx: &DecisionContext<'_>, memory: &Memory, config: &EngineConfig) -> Rule {
        self.rules
            .iter()
            .copied()
            .find(|rule| rule.matches(ctx, memory, config))
            .unwrap_or(Rule::Fallback)
    }

    /// Select a rule and run its response
    pub fn decide<G: Geometry + ?Sized>(
        &self,
        ctx: &DecisionContext<'_>,
        memory: &mut Memory,
        sampler: &mut Sampler,
        geometry: &G,
        config: &EngineConfig,
    ) -> (Rule, Action) {
        let rule = self.select(ctx, memory, config);
        let action = rule.respond(ctx, memory, sampler, geometry, config);
        tracing::debug!(
            "Round {}: {} -> {} {:?}",
            ctx.round_id,
            ctx.bot_id,
            rule.name(),
            action
        );
        (rule, action)
    }
}
