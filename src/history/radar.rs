//! Radar scan history with round-local overlap detection

use serde::{Deserialize, Serialize};

use crate::core::types::RoundId;
use crate::hex::Position;

/// A radar scan issued at `pos` during `round`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadarEntry {
    pub pos: Position,
    pub round: RoundId,
}

#[derive(Debug, Clone)]
pub struct RadarHistory {
    entries: Vec<RadarEntry>,
    overlap_radius: u32,
}

impl RadarHistory {
    pub fn new(overlap_radius: u32) -> Self {
        Self {
            entries: Vec::new(),
            overlap_radius,
        }
    }

    pub fn append(&mut self, pos: Position, round: RoundId) {
        self.entries.push(RadarEntry { pos, round });
    }

    pub fn overlap_radius(&self) -> u32 {
        self.overlap_radius
    }

    /// Scans issued during `round`, in issue order
    pub fn scans_in_round(&self, round: RoundId) -> impl Iterator<Item = &RadarEntry> {
        self.entries.iter().filter(move |e| e.round == round)
    }

    /// Number of scans from `round` whose centre is closer to `candidate`
    /// than the overlap radius
    pub fn overlap_count(&self, candidate: Position, round: RoundId) -> usize {
        self.scans_in_round(round)
            .filter(|e| e.pos.distance(&candidate) < self.overlap_radius)
            .count()
    }

    /// True when a scan at `candidate` would overlap one already issued this
    /// round. Earlier rounds never count.
    pub fn overlaps(&self, candidate: Position, round: RoundId) -> bool {
        self.scans_in_round(round)
            .any(|e| e.pos.distance(&candidate) < self.overlap_radius)
    }

    pub fn entries(&self) -> &[RadarEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
