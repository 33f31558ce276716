//! `sky-plan` — route construction on top of the grid search.
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`supply`]    | `SupplyIndex`, `ResupplyIndex` — nearest-site queries   |
//! | [`run`]       | `Run` (depot-to-depot waypoint sequence), `VisitedSet`  |
//! | [`cost`]      | 3-D trip-cost estimator for budget checks               |
//! | [`trip`]      | `TripPlanner` — greedy importance-first single trip     |
//! | [`allocator`] | `RunAllocator` — bounded-budget multi-run construction  |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Scores allocator candidates on Rayon's thread pool.     |
//! | `serde`    | Adds `Serialize`/`Deserialize` to all public types.     |

pub mod allocator;
pub mod cost;
pub mod run;
pub mod supply;
pub mod trip;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use allocator::{AllocatorConfig, RunAllocator};
pub use cost::{trip_cost, CRUISE_ALTITUDE};
pub use run::{Run, VisitedSet};
pub use supply::{ResupplyIndex, SupplyIndex};
pub use trip::TripPlanner;
