//! Grid and airspace coordinate types plus the distance metrics every other
//! crate relies on.
//!
//! Coordinates are `i32` grid cells.  Distances are `f32` — a zone is at
//! most a few thousand cells on a side, so single precision loses nothing
//! while keeping cost arithmetic cheap.

use std::fmt;

// ── GridPoint ─────────────────────────────────────────────────────────────────

/// A 2-D grid cell.
///
/// Derives `Ord` (x-major, then y) so search frontiers can use it as a
/// deterministic tie-break key and `VisitedSet`s can be dumped in a stable
/// order for tests.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance in whole steps — exact for 4-connected movement.
    #[inline]
    pub fn manhattan(self, other: GridPoint) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Straight-line 2-D Euclidean distance.
    #[inline]
    pub fn euclidean(self, other: GridPoint) -> f32 {
        let dx = (self.x - other.x) as f32;
        let dy = (self.y - other.y) as f32;
        (dx * dx + dy * dy).sqrt()
    }

    /// Place this cell at elevation `z`.
    #[inline]
    pub const fn lift(self, z: i32) -> AirPoint {
        AirPoint { x: self.x, y: self.y, z }
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── AirPoint ──────────────────────────────────────────────────────────────────

/// A 3-D point: a grid cell plus elevation.
///
/// Elevation participates only in cost approximation (take-off, landing and
/// cruise legs) — grid search itself is strictly 2-D.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AirPoint {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl AirPoint {
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Project onto the grid, discarding elevation.
    #[inline]
    pub const fn ground(self) -> GridPoint {
        GridPoint { x: self.x, y: self.y }
    }

    /// 3-D Euclidean distance.
    #[inline]
    pub fn euclidean(self, other: AirPoint) -> f32 {
        let dx = (self.x - other.x) as f32;
        let dy = (self.y - other.y) as f32;
        let dz = (self.z - other.z) as f32;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Vertical-only distance to the given altitude (climb or descend).
    #[inline]
    pub fn vertical_to(self, altitude: i32) -> f32 {
        (altitude - self.z).abs() as f32
    }
}

impl fmt::Display for AirPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
