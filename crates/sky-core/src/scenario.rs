//! The normalized planning input.
//!
//! The bespoke textual zone format is parsed by an external adapter; the
//! planner only ever sees this structure.  `validate()` is the single fatal
//! gate — once it passes, every downstream failure is a value (empty path,
//! skipped candidate), never an error.

use crate::{AirPoint, Diet, DynamicObstacle, Enclosure, GridPoint, SkyError, SkyResult, Storage, Zone};

/// One complete zone configuration for a single planning pass.
///
/// All fields are read-only once planning starts.  Build one directly or
/// via struct update from a default-ish base in tests.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    /// Zone bounding box.
    pub zone: Zone,

    /// The unique start/end location of every run.
    pub depot: AirPoint,

    /// Battery capacity, consumed one unit per grid step travelled.
    pub battery_capacity: f32,

    /// Feed sources, any number per diet (possibly zero — enclosures of a
    /// diet with no storage are permanently unservable, not an error).
    pub storages: Vec<Storage>,

    /// Delivery targets.
    pub enclosures: Vec<Enclosure>,

    /// Battery-swap stations the drone may detour to mid-trip.
    pub resupply_stations: Vec<AirPoint>,

    /// Permanently blocked cells.
    pub static_obstacles: Vec<GridPoint>,

    /// Cells blocked only during a bounded time window.
    pub dynamic_obstacles: Vec<DynamicObstacle>,
}

impl Scenario {
    /// Check structural validity: positive dimensions and budget, every
    /// coordinate inside the zone, well-formed obstacle windows.
    ///
    /// This is the only place a malformed configuration surfaces as an
    /// error; planning itself never faults.
    pub fn validate(&self) -> SkyResult<()> {
        if self.zone.width <= 0 || self.zone.height <= 0 || self.zone.depth <= 0 {
            return Err(SkyError::Config(format!(
                "zone dimensions must be positive, got {}",
                self.zone
            )));
        }
        if !(self.battery_capacity > 0.0) {
            return Err(SkyError::InvalidBudget(self.battery_capacity));
        }

        self.check_inside(self.depot.ground())?;
        for s in &self.storages {
            self.check_inside(s.position.ground())?;
        }
        for e in &self.enclosures {
            self.check_inside(e.position.ground())?;
        }
        for r in &self.resupply_stations {
            self.check_inside(r.ground())?;
        }
        for &c in &self.static_obstacles {
            self.check_inside(c)?;
        }
        for d in &self.dynamic_obstacles {
            self.check_inside(d.cell)?;
            if d.active_from > d.active_until {
                return Err(SkyError::Config(format!(
                    "dynamic obstacle at {} has inverted window [{}, {}]",
                    d.cell, d.active_from, d.active_until
                )));
            }
        }
        Ok(())
    }

    /// Enclosures of `diet`, in input order.
    pub fn enclosures_of(&self, diet: Diet) -> impl Iterator<Item = &Enclosure> {
        self.enclosures.iter().filter(move |e| e.diet == diet)
    }

    #[inline]
    fn check_inside(&self, cell: GridPoint) -> SkyResult<()> {
        if self.zone.contains(cell) {
            Ok(())
        } else {
            Err(SkyError::OutOfZone { point: cell, zone: self.zone })
        }
    }
}
