//! `sky-grid` — obstacle-aware shortest paths over the 4-connected zone grid.
//!
//! Two pieces:
//!
//! - [`ObstacleField`] — one predicate over static cells and time-windowed
//!   dynamic obstacles, so every search shares identical blocking logic.
//! - [`Pathfinder`] / [`GridAstar`] — a pluggable best-first search.  The
//!   planners in `sky-plan` call pathing through the trait, so a different
//!   search (weighted A*, JPS, a cached variant) can be swapped in without
//!   touching them.

pub mod field;
pub mod search;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use field::ObstacleField;
pub use search::{GridAstar, PathQuery, Pathfinder};
