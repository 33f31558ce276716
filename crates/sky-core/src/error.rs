//! Planner error type.
//!
//! Planning-level failures — an unreachable cell, a diet with no storage, a
//! run that cannot fit the budget — are *values* (empty paths, `None`,
//! discarded candidates), not errors.  `SkyError` is reserved for
//! structurally invalid input: malformed zones, non-positive budgets,
//! coordinates outside the zone.  Downstream `sky-*` crates reuse this enum
//! rather than defining their own.

use thiserror::Error;

use crate::{GridPoint, Zone};

/// The fatal error type for all `sky-*` crates.
#[derive(Debug, Error)]
pub enum SkyError {
    #[error("coordinate {point} outside zone {zone}")]
    OutOfZone { point: GridPoint, zone: Zone },

    #[error("budget must be positive, got {0}")]
    InvalidBudget(f32),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `sky-*` crates.
pub type SkyResult<T> = Result<T, SkyError>;
