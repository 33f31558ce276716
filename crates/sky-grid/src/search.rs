//! Pathfinder trait and the default best-first grid search.
//!
//! # Pluggability
//!
//! `sky-plan` requests paths through the [`Pathfinder`] trait, so
//! applications can swap in custom implementations (weighted A*, jump-point
//! search, a memoizing wrapper) without touching the planners.  The default
//! [`GridAstar`] is sufficient for zone-scale grids.
//!
//! # Search modes
//!
//! One search function serves both obstacle modes, selected by
//! [`PathQuery::at`]:
//!
//! | `at`      | Blocking                      | Heuristic  |
//! |-----------|-------------------------------|------------|
//! | `None`    | static cells only             | Euclidean  |
//! | `Some(t)` | static + dynamic active at `t`| Manhattan  |
//!
//! The query time is fixed for the entire search call — expansion does not
//! advance it.  A known simplification of the model, kept deliberately:
//! dynamic windows are long relative to traversal, so a snapshot at
//! departure time is an acceptable approximation.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;

use sky_core::{GridPoint, SkyError, SkyResult, Zone};

use crate::ObstacleField;

// ── PathQuery ─────────────────────────────────────────────────────────────────

/// One point-to-point search request.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathQuery {
    pub start: GridPoint,
    pub goal:  GridPoint,
    /// `None` for static-only pathing; `Some(t)` to also avoid dynamic
    /// obstacles active at time `t`.
    pub at: Option<f32>,
}

impl PathQuery {
    /// Static-mode query: only permanent obstacles block.
    pub const fn fixed(start: GridPoint, goal: GridPoint) -> Self {
        Self { start, goal, at: None }
    }

    /// Time-aware query: dynamic obstacles active at `t` also block.
    pub const fn at_time(start: GridPoint, goal: GridPoint, t: f32) -> Self {
        Self { start, goal, at: Some(t) }
    }
}

// ── Pathfinder trait ──────────────────────────────────────────────────────────

/// Pluggable grid search.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so independent planning sessions
/// (and the allocator's parallel candidate scoring) can share one instance.
pub trait Pathfinder: Send + Sync {
    /// Compute a shortest 4-connected path from `query.start` to
    /// `query.goal`, both inclusive.
    ///
    /// Returns `Ok(vec![])` when the goal is unreachable — "no route" is a
    /// value the caller decides how to handle, not a fault.  Only a query
    /// whose endpoints lie outside `zone` is an error.
    fn find_path(
        &self,
        zone:  Zone,
        field: &ObstacleField,
        query: PathQuery,
    ) -> SkyResult<Vec<GridPoint>>;
}

// ── GridAstar ─────────────────────────────────────────────────────────────────

/// Best-first search over the 4-connected grid (no diagonal moves), frontier
/// ordered by `g + h` with unit step cost.
///
/// Tie-breaking is deterministic: equal-priority frontier entries pop in
/// ascending cell order, so identical inputs always yield identical paths.
pub struct GridAstar;

/// Neighbor generation order: +x, −x, +y, −y.
const OFFSETS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

impl Pathfinder for GridAstar {
    fn find_path(
        &self,
        zone:  Zone,
        field: &ObstacleField,
        query: PathQuery,
    ) -> SkyResult<Vec<GridPoint>> {
        for endpoint in [query.start, query.goal] {
            if !zone.contains(endpoint) {
                return Err(SkyError::OutOfZone { point: endpoint, zone });
            }
        }
        if query.start == query.goal {
            return Ok(vec![query.start]);
        }

        let h = |cell: GridPoint| -> f32 {
            match query.at {
                // Static mode: Euclidean estimate, admissible and a little
                // greedier than Manhattan on open ground.
                None => cell.euclidean(query.goal),
                // Dynamic mode: Manhattan, exact for 4-connected movement.
                Some(_) => cell.manhattan(query.goal) as f32,
            }
        };

        // g[cell] = best known step count to reach cell.
        let mut g_score: FxHashMap<GridPoint, u32> = FxHashMap::default();
        let mut came_from: FxHashMap<GridPoint, GridPoint> = FxHashMap::default();
        g_score.insert(query.start, 0);

        let mut frontier: BinaryHeap<Reverse<Open>> = BinaryHeap::new();
        frontier.push(Reverse(Open {
            f:    h(query.start),
            g:    0,
            cell: query.start,
        }));

        while let Some(Reverse(open)) = frontier.pop() {
            if open.cell == query.goal {
                return Ok(reconstruct(&came_from, query.start, query.goal));
            }

            // Skip stale entries superseded by a later relaxation.
            if open.g > g_score[&open.cell] {
                continue;
            }

            for (dx, dy) in OFFSETS {
                let neighbor = GridPoint::new(open.cell.x + dx, open.cell.y + dy);
                if !zone.contains(neighbor) || field.blocked(neighbor, query.at) {
                    continue;
                }

                let tentative = open.g + 1;
                match g_score.get(&neighbor) {
                    Some(&best) if tentative >= best => continue,
                    _ => {}
                }

                g_score.insert(neighbor, tentative);
                came_from.insert(neighbor, open.cell);
                frontier.push(Reverse(Open {
                    f:    tentative as f32 + h(neighbor),
                    g:    tentative,
                    cell: neighbor,
                }));
            }
        }

        // Frontier exhausted: the goal is walled off.
        Ok(vec![])
    }
}

/// Follow predecessor links from `goal` back to `start`, then reverse.
fn reconstruct(
    came_from: &FxHashMap<GridPoint, GridPoint>,
    start: GridPoint,
    goal:  GridPoint,
) -> Vec<GridPoint> {
    let mut path = vec![goal];
    let mut cur = goal;
    while cur != start {
        cur = came_from[&cur];
        path.push(cur);
    }
    path.reverse();
    path
}

// ── Frontier entry ────────────────────────────────────────────────────────────

/// A frontier entry: priority `f = g + h`, with the cell itself as the
/// secondary key so equal priorities order deterministically.
#[derive(Copy, Clone, Debug)]
struct Open {
    f:    f32,
    g:    u32,
    cell: GridPoint,
}

impl PartialEq for Open {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Open {}

impl PartialOrd for Open {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Open {
    fn cmp(&self, other: &Self) -> Ordering {
        // f is always finite (sums of finite heuristics), so total_cmp
        // matches plain numeric order.
        self.f
            .total_cmp(&other.f)
            .then_with(|| self.cell.cmp(&other.cell))
    }
}
