//! zoofeed — end-to-end demo for the skyroute drone delivery planner.
//!
//! Plans feeding runs across a 100×100 zoo: one unconstrained tour with the
//! single-trip planner, then a budgeted schedule with the multi-run
//! allocator, and finally a time-aware path query around a temporary no-fly
//! cell.  All data is embedded; swap in a parsed zone file for real use.

use std::time::Instant;

use anyhow::Result;

use sky_core::{AirPoint, Diet, DynamicObstacle, Enclosure, GridPoint, Scenario, Storage, Zone};
use sky_grid::{GridAstar, ObstacleField, PathQuery, Pathfinder};
use sky_plan::{
    AllocatorConfig, ResupplyIndex, RunAllocator, SupplyIndex, TripPlanner, VisitedSet,
};

// ── Constants ─────────────────────────────────────────────────────────────────

const MAX_RUNS:     usize = 8;
const MAX_RUN_COST: f32   = 9_250.0; // estimated 3-D cost budget per run

// ── Embedded zone ─────────────────────────────────────────────────────────────

fn build_scenario() -> Scenario {
    use Diet::{Carnivore, Herbivore, Omnivore};

    Scenario {
        zone:             Zone::new(100, 100, 50),
        depot:            AirPoint::new(50, 49, 19),
        battery_capacity: 999_999.0,
        storages: vec![
            Storage::new(AirPoint::new(56, 74, 13), Herbivore),
            Storage::new(AirPoint::new(38, 79, 11), Carnivore),
            Storage::new(AirPoint::new(20, 49, 37), Omnivore),
        ],
        enclosures: vec![
            Enclosure::new(AirPoint::new(88, 78, 14), 0.09, Herbivore),
            Enclosure::new(AirPoint::new(36, 67, 35), 10.0, Carnivore),
            Enclosure::new(AirPoint::new(72, 4, 27), 1.49, Omnivore),
            Enclosure::new(AirPoint::new(14, 21, 26), 8.98, Omnivore),
            Enclosure::new(AirPoint::new(27, 36, 27), 0.34, Omnivore),
            Enclosure::new(AirPoint::new(25, 15, 34), 11.28, Herbivore),
            Enclosure::new(AirPoint::new(40, 17, 19), 8.0, Carnivore),
            Enclosure::new(AirPoint::new(55, 96, 9), 3.6, Herbivore),
        ],
        resupply_stations: vec![AirPoint::new(50, 50, 0)],
        static_obstacles:  vec![GridPoint::new(45, 45), GridPoint::new(46, 45)],
        dynamic_obstacles: vec![DynamicObstacle::new(GridPoint::new(50, 60), 0.0, 100.0)],
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== zoofeed — skyroute drone delivery planner ===");
    println!();

    // 1. Build and validate the zone configuration.
    let scenario = build_scenario();
    scenario.validate()?;
    println!(
        "Zone {}  |  depot {}  |  {} storages, {} enclosures",
        scenario.zone,
        scenario.depot,
        scenario.storages.len(),
        scenario.enclosures.len()
    );

    // 2. Indexes and obstacle field.
    let field = ObstacleField::from_scenario(&scenario);
    let supply = SupplyIndex::build(&scenario.storages);
    let resupply = ResupplyIndex::build(&scenario.resupply_stations);

    // 3. One unconstrained tour: serve everything in importance order.
    let trip = TripPlanner {
        zone:       scenario.zone,
        field:      &field,
        pathfinder: &GridAstar,
        supply:     &supply,
        resupply:   &resupply,
        battery:    Some(scenario.battery_capacity),
    };
    let t0 = Instant::now();
    let mut tour_visited = VisitedSet::new();
    let tour = trip.plan(scenario.depot, &scenario.enclosures, &mut tour_visited)?;
    println!();
    println!(
        "Single tour: {} enclosures served, {} grid steps ({:.1} ms)",
        tour_visited.len(),
        tour.step_count(),
        t0.elapsed().as_secs_f64() * 1e3
    );

    // 4. Budgeted schedule: multiple bounded runs from the depot.
    let allocator = RunAllocator {
        zone:       scenario.zone,
        field:      &field,
        pathfinder: &GridAstar,
        config:     AllocatorConfig { max_runs: MAX_RUNS, max_run_cost: MAX_RUN_COST },
    };
    let t1 = Instant::now();
    let mut visited = VisitedSet::new();
    let runs = allocator.plan_all(scenario.depot, &supply, &scenario.enclosures, &mut visited)?;
    println!();
    println!(
        "Budgeted schedule: {} runs, {} of {} enclosures served ({:.1} ms)",
        runs.len(),
        visited.len(),
        scenario.enclosures.len(),
        t1.elapsed().as_secs_f64() * 1e3
    );
    println!("{:<6} {:<10} {:<12}", "Run", "Steps", "Waypoints");
    println!("{}", "-".repeat(30));
    for (i, run) in runs.iter().enumerate() {
        println!("{:<6} {:<10} {:<12}", i + 1, run.step_count(), run.waypoints().len());
    }

    // 5. A time-aware query: the cell (50,60) is closed until t=100.
    let query = PathQuery::at_time(
        scenario.depot.ground(),
        GridPoint::new(50, 70),
        50.0,
    );
    let timed = GridAstar.find_path(scenario.zone, &field, query)?;
    println!();
    println!(
        "Timed path depot → (50, 70) at t=50: {} steps (detours around the closed cell)",
        timed.len().saturating_sub(1)
    );

    Ok(())
}
