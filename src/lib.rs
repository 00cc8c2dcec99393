//! Hexbot - rule-priority decision engine for hex-grid combat bots

pub mod controller;
pub mod core;
pub mod events;
pub mod hex;
pub mod history;
pub mod host;
pub mod replay;
pub mod rules;
pub mod sampler;

pub use controller::{Decision, RoundController, RoundReport};
pub use crate::core::{BotError, BotId, EngineConfig, MemoryScope, Result, RoundConfig, RoundId};
pub use events::Event;
pub use hex::{Geometry, HexGeometry, Position};
pub use host::{Action, BotHandle, RecordingBot};
pub use rules::{Rule, RuleTable};
pub use sampler::Sampler;
