//! Last known enemy locations

use serde::{Deserialize, Serialize};

use crate::core::types::{rounds_between, RoundId};
use crate::hex::Position;

/// Enemy seen at `pos` during `round`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackEntry {
    pub pos: Position,
    pub round: RoundId,
}

/// Append-only enemy track. Only the latest entry is authoritative.
#[derive(Debug, Clone, Default)]
pub struct EnemyTrackHistory {
    entries: Vec<TrackEntry>,
}

impl EnemyTrackHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, pos: Position, round: RoundId) {
        self.entries.push(TrackEntry { pos, round });
    }

    pub fn latest_entry(&self) -> Option<&TrackEntry> {
        self.entries.last()
    }

    /// Last known enemy position
    pub fn latest(&self) -> Option<Position> {
        self.latest_entry().map(|e| e.pos)
    }

    /// True when a track exists and its latest entry is at most `max_age`
    /// rounds older than `current_round`
    pub fn is_fresh_as_of(&self, current_round: RoundId, max_age: u32) -> bool {
        match self.latest_entry() {
            Some(entry) => rounds_between(entry.round, current_round) <= i64::from(max_age),
            None => false,
        }
    }

    pub fn entries(&self) -> &[TrackEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
