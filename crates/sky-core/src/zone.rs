//! The zone bounding box.

use std::fmt;

use crate::GridPoint;

/// The searchable volume: `width × height` grid cells, `depth` units of
/// airspace above them.
///
/// Containment is half-open: a cell is inside iff `0 ≤ x < width` and
/// `0 ≤ y < height`.  `depth` never constrains search — it only bounds the
/// scenario's site elevations.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Zone {
    pub width:  i32,
    pub height: i32,
    pub depth:  i32,
}

impl Zone {
    #[inline]
    pub const fn new(width: i32, height: i32, depth: i32) -> Self {
        Self { width, height, depth }
    }

    /// `true` if `cell` lies inside `[0, width) × [0, height)`.
    #[inline]
    pub fn contains(&self, cell: GridPoint) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}×{}", self.width, self.height, self.depth)
    }
}
