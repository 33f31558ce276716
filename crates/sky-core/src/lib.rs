//! `sky-core` — foundational types for the skyroute drone delivery planner.
//!
//! This crate is a dependency of every other `sky-*` crate.  It intentionally
//! has no `sky-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`geom`]     | `GridPoint`, `AirPoint`, distance metrics               |
//! | [`zone`]     | `Zone` bounding box                                     |
//! | [`resource`] | `Diet` enum (the resource-type key)                     |
//! | [`site`]     | `Storage`, `Enclosure`                                  |
//! | [`obstacle`] | `DynamicObstacle` (time-windowed blocked cell)          |
//! | [`scenario`] | `Scenario` — the normalized planning input + validation |
//! | [`error`]    | `SkyError`, `SkyResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod geom;
pub mod obstacle;
pub mod resource;
pub mod scenario;
pub mod site;
pub mod zone;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SkyError, SkyResult};
pub use geom::{AirPoint, GridPoint};
pub use obstacle::DynamicObstacle;
pub use resource::Diet;
pub use scenario::Scenario;
pub use site::{Enclosure, Storage};
pub use zone::Zone;
