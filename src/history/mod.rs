//! Rolling history stores consulted by the decision rules
//!
//! Every store is append-only for the lifetime of the controller that owns
//! it. Nothing is truncated or rolled back.

pub mod enemy_track;
pub mod radar;
pub mod shots;

use ahash::AHashMap;

pub use enemy_track::{EnemyTrackHistory, TrackEntry};
pub use radar::{RadarEntry, RadarHistory};
pub use shots::ShotHistory;

use crate::core::config::MemoryScope;
use crate::core::types::BotId;

/// The three histories one bot (or one team) remembers between rounds
#[derive(Debug, Clone)]
pub struct Memory {
    pub radar: RadarHistory,
    pub enemy_track: EnemyTrackHistory,
    pub shots: ShotHistory,
}

impl Memory {
    pub fn new(radar_overlap_radius: u32) -> Self {
        Self {
            radar: RadarHistory::new(radar_overlap_radius),
            enemy_track: EnemyTrackHistory::new(),
            shots: ShotHistory::new(),
        }
    }
}

/// Memory storage honouring the configured [`MemoryScope`]
#[derive(Debug, Clone)]
pub enum MemoryBank {
    Shared(Memory),
    PerBot {
        radar_overlap_radius: u32,
        memories: AHashMap<BotId, Memory>,
    },
}

impl MemoryBank {
    pub fn new(scope: MemoryScope, radar_overlap_radius: u32) -> Self {
        match scope {
            MemoryScope::Shared => Self::Shared(Memory::new(radar_overlap_radius)),
            MemoryScope::PerBot => Self::PerBot {
                radar_overlap_radius,
                memories: AHashMap::new(),
            },
        }
    }

    /// Memory used when deciding for `bot`, created on first use
    pub fn for_bot_mut(&mut self, bot: BotId) -> &mut Memory {
        match self {
            Self::Shared(memory) => memory,
            Self::PerBot {
                radar_overlap_radius,
                memories,
            } => {
                let radius = *radar_overlap_radius;
                memories.entry(bot).or_insert_with(|| Memory::new(radius))
            }
        }
    }

    /// Memory for `bot` if it has one yet
    pub fn for_bot(&self, bot: BotId) -> Option<&Memory> {
        match self {
            Self::Shared(memory) => Some(memory),
            Self::PerBot { memories, .. } => memories.get(&bot),
        }
    }

}
