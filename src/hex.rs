//! Hex grid coordinates and the geometry provider seam.
//!
//! Uses axial coordinates (x, y) on a hexagon-shaped map of radius S centred
//! on the origin. The implicit third cube axis is `-x - y`.

use serde::{Deserialize, Serialize};

/// Axial hex coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Convert axial to cube coordinates for algorithms.
    pub fn to_cube(&self) -> (i32, i32, i32) {
        (self.x, self.y, -self.x - self.y)
    }

    /// Distance to another hex (in hex steps).
    pub fn distance(&self, other: &Position) -> u32 {
        let (x1, y1, z1) = self.to_cube();
        let (x2, y2, z2) = other.to_cube();
        ((x1.abs_diff(x2)) + (y1.abs_diff(y2)) + (z1.abs_diff(z2))) / 2
    }

    /// True when the position lies on a map of the given radius
    pub fn is_on_map(&self, radius: i32) -> bool {
        self.x.abs() <= radius && self.y.abs() <= radius && (self.x + self.y).abs() <= radius
    }

    /// All hexes within `range` steps, including this one
    pub fn hexes_in_range(&self, range: u32) -> Vec<Position> {
        let range = i32::try_from(range).unwrap_or(i32::MAX);
        let mut results = Vec::new();
        for dx in -range..=range {
            for dy in (-range).max(-dx - range)..=range.min(-dx + range) {
                results.push(Position::new(self.x + dx, self.y + dy));
            }
        }
        results
    }
}

/// Geometry operations the decision engine consumes.
///
/// The host game owns the authoritative hex math; [`HexGeometry`] is the
/// default provider used when nothing else is plugged in.
pub trait Geometry {
    /// Distance between two positions in hex steps
    fn distance(&self, a: Position, b: Position) -> u32;

    /// On-map positions a unit at `pos` can reach within `range` steps,
    /// excluding `pos` itself
    fn neighbors(&self, pos: Position, range: u32) -> Vec<Position>;

    fn make(&self, x: i32, y: i32) -> Position {
        Position::new(x, y)
    }
}

/// Axial hex geometry bounded by a map radius
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexGeometry {
    pub map_radius: i32,
}

impl HexGeometry {
    pub fn new(map_radius: i32) -> Self {
        Self { map_radius }
    }
}

impl Geometry for HexGeometry {
    fn distance(&self, a: Position, b: Position) -> u32 {
        a.distance(&b)
    }

    fn neighbors(&self, pos: Position, range: u32) -> Vec<Position> {
        // Nothing on the map is further than its diameter
        let diameter = 2 * self.map_radius.unsigned_abs();
        pos.hexes_in_range(range.min(diameter))
            .into_iter()
            .filter(|p| *p != pos && p.is_on_map(self.map_radius))
            .collect()
    }
}
