//! Greedy importance-first single-trip planner.
//!
//! Serves enclosures in descending importance order, detouring to the
//! nearest matching storage whenever the carried diet changes and to the
//! nearest battery-swap station whenever the remaining charge cannot cover
//! the next delivery.  Produces one continuous depot-to-depot [`Run`].

use sky_core::{AirPoint, Diet, Enclosure, GridPoint, SkyResult, Zone};
use sky_grid::{ObstacleField, PathQuery, Pathfinder};

use crate::{ResupplyIndex, Run, SupplyIndex, VisitedSet};

/// Single-trip planner over a fixed zone configuration.
///
/// # Unreachable legs
///
/// When any leg of an enclosure's service (resupply detour, storage detour,
/// or the delivery leg itself) comes back empty, the enclosure is **skipped
/// with no state mutation at all** — position, carried diet, and remaining
/// charge stay exactly as they were, and planning continues with the next
/// enclosure.  The budget is therefore never charged for a move that did
/// not happen.
pub struct TripPlanner<'a, P: Pathfinder> {
    pub zone:       Zone,
    pub field:      &'a ObstacleField,
    pub pathfinder: &'a P,
    pub supply:     &'a SupplyIndex,
    pub resupply:   &'a ResupplyIndex,

    /// Battery capacity; `None` disables charge tracking entirely.
    pub battery: Option<f32>,
}

/// The legs planned for one enclosure, held back until all of them resolve
/// so a failed leg commits nothing.
struct Service {
    legs:     Vec<Vec<GridPoint>>,
    carrying: Option<Diet>,
    charge:   Option<f32>,
}

impl<'a, P: Pathfinder> TripPlanner<'a, P> {
    /// Plan one trip from `depot`, serving as many unvisited enclosures as
    /// feasible, and return to the depot.
    ///
    /// `visited` is the session's served-cell set: enclosures already in it
    /// are skipped, and every enclosure served here is added to it.
    pub fn plan(
        &self,
        depot:      AirPoint,
        enclosures: &[Enclosure],
        visited:    &mut VisitedSet,
    ) -> SkyResult<Run> {
        // Descending importance; stable sort keeps input order on ties.
        let mut order: Vec<&Enclosure> = enclosures.iter().collect();
        order.sort_by(|a, b| b.importance.total_cmp(&a.importance));

        let depot_cell = depot.ground();
        let mut run = Run::start_at(depot_cell);
        let mut carrying: Option<Diet> = None;
        let mut charge = self.battery;

        for enc in order {
            let target = enc.position.ground();
            if visited.contains(target) {
                continue;
            }
            // A diet with zero storages is permanently unservable.
            if !self.supply.has_supply(enc.diet) {
                continue;
            }

            let Some(service) = self.plan_service(run.current(), target, enc.diet, carrying, charge)?
            else {
                continue; // skip-and-continue: nothing committed
            };

            for leg in &service.legs {
                run.extend_with_path(leg);
            }
            carrying = service.carrying;
            charge = service.charge;
            visited.mark(target);
        }

        // Close the run at the depot.  If even the way home is blocked the
        // run ends where it stands — same skip policy, documented above.
        let home = self.leg(run.current(), depot_cell)?;
        run.extend_with_path(&home);

        Ok(run)
    }

    /// Plan the legs needed to serve one enclosure from `from`, without
    /// committing anything.  Returns `None` if any leg is unreachable or a
    /// required resupply station is missing.
    fn plan_service(
        &self,
        from:     GridPoint,
        target:   GridPoint,
        diet:     Diet,
        carrying: Option<Diet>,
        charge:   Option<f32>,
    ) -> SkyResult<Option<Service>> {
        let mut legs: Vec<Vec<GridPoint>> = Vec::new();
        let mut pos = from;
        let mut carrying = carrying;
        let mut charge = charge;

        // Swap the battery first when the straight-line projection to the
        // target exceeds the remaining charge.
        if let Some(c) = charge {
            if pos.euclidean(target) > c {
                let Some(station) = self.resupply.nearest(pos) else {
                    return Ok(None);
                };
                let leg = self.leg(pos, station.ground())?;
                if leg.is_empty() {
                    return Ok(None);
                }
                pos = station.ground();
                legs.push(leg);
                charge = self.battery; // full again
            }
        }

        // Pick up the right diet if not already carrying it.
        if carrying != Some(diet) {
            // has_supply was checked by the caller, so nearest always hits.
            let Some(storage) = self.supply.nearest(diet, pos) else {
                return Ok(None);
            };
            let storage_cell = storage.position.ground();
            let leg = self.leg(pos, storage_cell)?;
            if leg.is_empty() {
                return Ok(None);
            }
            pos = storage_cell;
            legs.push(leg);
            carrying = Some(diet);
        }

        // The delivery leg itself; its steps are what the battery pays for.
        let leg = self.leg(pos, target)?;
        if leg.is_empty() {
            return Ok(None);
        }
        charge = charge.map(|c| c - (leg.len() - 1) as f32);
        legs.push(leg);

        Ok(Some(Service { legs, carrying, charge }))
    }

    /// One static-mode path query.
    fn leg(&self, from: GridPoint, to: GridPoint) -> SkyResult<Vec<GridPoint>> {
        self.pathfinder
            .find_path(self.zone, self.field, PathQuery::fixed(from, to))
    }
}
