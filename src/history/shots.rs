//! Cannon shot history

use crate::hex::Position;

#[derive(Debug, Clone, Default)]
pub struct ShotHistory {
    locations: Vec<Position>,
}

impl ShotHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, pos: Position) {
        self.locations.push(pos);
    }

    /// Most recent shot location
    pub fn latest(&self) -> Option<Position> {
        self.locations.last().copied()
    }

    pub fn entries(&self) -> &[Position] {
        &self.locations
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}
