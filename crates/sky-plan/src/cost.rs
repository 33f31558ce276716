//! 3-D trip-cost approximation from a 2-D stop list.
//!
//! The model: climb from the depot to a fixed cruise altitude, fly
//! point-to-point legs at that altitude, descend to the ground and climb
//! back at every intermediate stop (one landing + take-off per delivery),
//! then descend to depot elevation at the end.  Purely a budget heuristic —
//! it never changes the 2-D route itself.

use sky_core::{AirPoint, GridPoint};

/// Cruise altitude all legs are flown at.
pub const CRUISE_ALTITUDE: i32 = 50;

/// Estimated 3-D travel cost of visiting `stops` in order from a depot at
/// `depot` elevation.  Fewer than two stops cost nothing.
pub fn trip_cost(stops: &[GridPoint], depot: AirPoint) -> f32 {
    if stops.len() < 2 {
        return 0.0;
    }

    // Take-off: depot elevation up to cruise.
    let mut total = depot.vertical_to(CRUISE_ALTITUDE);

    // Cruise legs between consecutive stops.
    for w in stops.windows(2) {
        total += w[0].lift(CRUISE_ALTITUDE).euclidean(w[1].lift(CRUISE_ALTITUDE));
    }

    // Each intermediate stop lands to ground level and climbs back.
    for stop in &stops[1..stops.len() - 1] {
        total += stop.lift(0).vertical_to(CRUISE_ALTITUDE) * 2.0;
    }

    // Final descent back to depot elevation.
    total += depot.vertical_to(CRUISE_ALTITUDE);

    total
}
