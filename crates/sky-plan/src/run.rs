//! Run (waypoint sequence) and the session-scoped visited set.

use rustc_hash::FxHashSet;

use sky_core::GridPoint;

// ── Run ───────────────────────────────────────────────────────────────────────

/// One depot-to-depot waypoint sequence.
///
/// Invariant: consecutive waypoints are 4-adjacent grid cells — every
/// extension goes through [`extend_with_path`](Run::extend_with_path) with a
/// pathfinder-produced segment, so a run never teleports.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Run {
    waypoints: Vec<GridPoint>,
}

impl Run {
    /// Begin a run at `start` (the depot's ground projection).
    pub fn start_at(start: GridPoint) -> Self {
        Self { waypoints: vec![start] }
    }

    /// The cell the drone currently occupies (the last waypoint).
    #[inline]
    pub fn current(&self) -> GridPoint {
        *self.waypoints.last().expect("a run is never empty")
    }

    /// Append a path segment, dropping its first point — the segment starts
    /// where the run currently ends, and the joint must not be duplicated.
    ///
    /// Empty segments are ignored (an unreachable leg extends nothing).
    pub fn extend_with_path(&mut self, segment: &[GridPoint]) {
        if segment.is_empty() {
            return;
        }
        debug_assert_eq!(segment[0], self.current(), "segment must start at the run's end");
        self.waypoints.extend_from_slice(&segment[1..]);
    }

    /// Number of grid steps travelled (waypoints − 1).
    #[inline]
    pub fn step_count(&self) -> usize {
        self.waypoints.len() - 1
    }

    /// The full waypoint sequence, depot to depot.
    #[inline]
    pub fn waypoints(&self) -> &[GridPoint] {
        &self.waypoints
    }

    /// `true` if `cell` appears anywhere on the run.
    pub fn visits(&self, cell: GridPoint) -> bool {
        self.waypoints.contains(&cell)
    }
}

// ── VisitedSet ────────────────────────────────────────────────────────────────

/// The enclosure cells already served in this planning session.
///
/// Owned by the session and passed explicitly into every planner call; it
/// only ever grows.  Candidate simulation must clone it (or keep a local
/// overlay) rather than mutate it speculatively — the session set changes
/// only when a run is committed.
#[derive(Clone, Debug, Default)]
pub struct VisitedSet {
    cells: FxHashSet<GridPoint>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `cell` as served.  Returns `false` if it already was.
    pub fn mark(&mut self, cell: GridPoint) -> bool {
        self.cells.insert(cell)
    }

    #[inline]
    pub fn contains(&self, cell: GridPoint) -> bool {
        self.cells.contains(&cell)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
