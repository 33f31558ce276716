//! Time-windowed blocked cells.
//!
//! Static obstacles are plain `GridPoint`s; only the dynamic variant needs
//! its own type, for the activity window.

use crate::GridPoint;

/// A cell blocked only while the search time falls inside
/// `[active_from, active_until]` — inclusive on **both** ends.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DynamicObstacle {
    pub cell:         GridPoint,
    pub active_from:  f32,
    pub active_until: f32,
}

impl DynamicObstacle {
    pub const fn new(cell: GridPoint, active_from: f32, active_until: f32) -> Self {
        Self { cell, active_from, active_until }
    }

    /// `true` if the obstacle blocks its cell at time `at`.
    #[inline]
    pub fn is_active(&self, at: f32) -> bool {
        self.active_from <= at && at <= self.active_until
    }
}
