//! The obstacle field: one blocking predicate for every search mode.
//!
//! Static obstacles block their cell permanently; dynamic obstacles block
//! only while the query time falls inside their inclusive window.  Keeping
//! both behind a single `blocked` call guarantees the static-only and
//! time-aware searches can never disagree on what a wall is.

use rustc_hash::FxHashSet;

use sky_core::{DynamicObstacle, GridPoint, Scenario};

/// Static cells plus time-windowed dynamic obstacles.
#[derive(Clone, Debug, Default)]
pub struct ObstacleField {
    /// Permanently blocked cells.  FxHashSet: membership is the innermost
    /// operation of the search loop.
    static_cells: FxHashSet<GridPoint>,

    /// Dynamic obstacles, scanned linearly — zones carry at most a handful.
    dynamic: Vec<DynamicObstacle>,
}

impl ObstacleField {
    /// A field with no obstacles at all.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(static_cells: &[GridPoint], dynamic: &[DynamicObstacle]) -> Self {
        Self {
            static_cells: static_cells.iter().copied().collect(),
            dynamic:      dynamic.to_vec(),
        }
    }

    /// Build the field from a validated [`Scenario`].
    pub fn from_scenario(scenario: &Scenario) -> Self {
        Self::new(&scenario.static_obstacles, &scenario.dynamic_obstacles)
    }

    /// `true` if `cell` is blocked.
    ///
    /// `at = None` consults static obstacles only; `at = Some(t)` also
    /// blocks any cell whose dynamic window contains `t` (inclusive on both
    /// ends).
    #[inline]
    pub fn blocked(&self, cell: GridPoint, at: Option<f32>) -> bool {
        if self.static_cells.contains(&cell) {
            return true;
        }
        match at {
            None => false,
            Some(t) => self
                .dynamic
                .iter()
                .any(|d| d.cell == cell && d.is_active(t)),
        }
    }

    pub fn static_count(&self) -> usize {
        self.static_cells.len()
    }

    pub fn dynamic_count(&self) -> usize {
        self.dynamic.len()
    }

    pub fn is_empty(&self) -> bool {
        self.static_cells.is_empty() && self.dynamic.is_empty()
    }
}
