//! Bounded-budget multi-run allocation.
//!
//! Builds successive depot-to-depot runs: each iteration simulates one
//! candidate per `(diet, storage)` pair, scores them, and commits the best.
//! Candidates are simulated against a **read-only** view of the session's
//! visited set plus a candidate-local overlay — the session set changes only
//! when a run is committed, so evaluated alternatives never contaminate each
//! other.
//!
//! With the `parallel` feature, candidate construction runs on Rayon's
//! thread pool; selection is a sequential stable pass, so results are
//! identical either way.

use sky_core::{AirPoint, Diet, Enclosure, GridPoint, SkyResult, Storage, Zone};
use sky_grid::{ObstacleField, PathQuery, Pathfinder};

use crate::{trip_cost, Run, SupplyIndex, VisitedSet};

/// Importance dominates the candidate score; estimated distance only breaks
/// near-ties.  Empirically chosen weighting — no optimality is claimed.
const IMPORTANCE_WEIGHT: f32 = 1000.0;

// ── Config ────────────────────────────────────────────────────────────────────

/// Allocation limits.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllocatorConfig {
    /// Maximum number of runs to commit.
    pub max_runs: usize,
    /// Maximum estimated round-trip cost of a single run.
    pub max_run_cost: f32,
}

// ── Candidate ─────────────────────────────────────────────────────────────────

/// One simulated run: the stop list (depot, storage, enclosures…, depot),
/// the enclosure cells it would serve, and its estimated cost.
struct Candidate {
    stops:      Vec<GridPoint>,
    served:     Vec<GridPoint>,
    importance: f32,
    cost:       f32,
}

impl Candidate {
    #[inline]
    fn score(&self) -> f32 {
        self.importance * IMPORTANCE_WEIGHT - self.cost
    }
}

// ── RunAllocator ──────────────────────────────────────────────────────────────

/// Greedy multi-run constructor over a fixed zone configuration.
pub struct RunAllocator<'a, P: Pathfinder> {
    pub zone:       Zone,
    pub field:      &'a ObstacleField,
    pub pathfinder: &'a P,
    pub config:     AllocatorConfig,
}

impl<'a, P: Pathfinder> RunAllocator<'a, P> {
    /// Build up to `max_runs` runs from `depot`, marking every served
    /// enclosure in `visited`.
    ///
    /// Terminates early when no candidate serves at least one enclosure
    /// within budget — a bare depot–storage round trip is never committed.
    /// With `visited` already covering every enclosure, returns zero runs.
    pub fn plan_all(
        &self,
        depot:      AirPoint,
        supply:     &SupplyIndex,
        enclosures: &[Enclosure],
        visited:    &mut VisitedSet,
    ) -> SkyResult<Vec<Run>> {
        // Per-diet target lists, descending importance, computed once.
        // Diets with no supply are dropped here — their enclosures are
        // permanently unservable.
        let mut targets: Vec<(Diet, Vec<&Enclosure>)> = Vec::new();
        for diet in Diet::ALL {
            if !supply.has_supply(diet) {
                continue;
            }
            let mut of_diet: Vec<&Enclosure> =
                enclosures.iter().filter(|e| e.diet == diet).collect();
            if of_diet.is_empty() {
                continue;
            }
            of_diet.sort_by(|a, b| b.importance.total_cmp(&a.importance));
            targets.push((diet, of_diet));
        }

        let mut runs = Vec::new();

        for _ in 0..self.config.max_runs {
            // Candidate seeds, in Diet::ALL × storage input order so ranking
            // ties resolve deterministically.
            let mut seeds: Vec<(&[&Enclosure], &Storage)> = Vec::new();
            for (diet, of_diet) in &targets {
                let any_unvisited = of_diet
                    .iter()
                    .any(|e| !visited.contains(e.position.ground()));
                if !any_unvisited {
                    continue;
                }
                for storage in supply.storages(*diet) {
                    seeds.push((of_diet.as_slice(), storage));
                }
            }

            let mut ranked = self.build_candidates(depot, &seeds, visited);
            // Stable sort: equal scores keep seed order.
            ranked.sort_by(|a, b| b.score().total_cmp(&a.score()));

            // Commit the best candidate whose stops all connect on the
            // grid; one with an unreachable segment is discarded and the
            // next-best is tried.
            let mut committed = false;
            for cand in &ranked {
                if let Some(run) = self.expand(&cand.stops)? {
                    for &cell in &cand.served {
                        visited.mark(cell);
                    }
                    runs.push(run);
                    committed = true;
                    break;
                }
            }
            if !committed {
                break; // nothing left that fits the budget
            }
        }

        Ok(runs)
    }

    /// Simulate all seeds into scored candidates.
    fn build_candidates(
        &self,
        depot:   AirPoint,
        seeds:   &[(&[&Enclosure], &Storage)],
        visited: &VisitedSet,
    ) -> Vec<Candidate> {
        #[cfg(not(feature = "parallel"))]
        {
            seeds
                .iter()
                .filter_map(|&(of_diet, storage)| {
                    self.build_candidate(depot, storage, of_diet, visited)
                })
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            seeds
                .par_iter()
                .filter_map(|&(of_diet, storage)| {
                    self.build_candidate(depot, storage, of_diet, visited)
                })
                .collect()
        }
    }

    /// Simulate one candidate: depot → `storage`, then greedily insert
    /// unvisited same-diet enclosures in descending importance, keeping the
    /// provisional round trip within budget.  Insertion stops at the first
    /// enclosure that would exceed it.
    ///
    /// Returns `None` when not even one enclosure fits — such a run must
    /// never be committed.
    fn build_candidate(
        &self,
        depot:   AirPoint,
        storage: &Storage,
        of_diet: &[&Enclosure],
        visited: &VisitedSet,
    ) -> Option<Candidate> {
        let depot_cell = depot.ground();
        let mut stops = vec![depot_cell, storage.position.ground()];
        let mut served: Vec<GridPoint> = Vec::new();
        let mut importance = 0.0f32;

        for enc in of_diet {
            let cell = enc.position.ground();
            if visited.contains(cell) || served.contains(&cell) {
                continue;
            }

            // Provisional round trip with this enclosure appended.
            let mut trial = stops.clone();
            trial.push(cell);
            trial.push(depot_cell);

            if trip_cost(&trial, depot) <= self.config.max_run_cost {
                stops.push(cell);
                served.push(cell);
                importance += enc.importance;
            } else {
                break;
            }
        }

        if served.is_empty() {
            return None;
        }

        stops.push(depot_cell);
        let cost = trip_cost(&stops, depot);
        Some(Candidate { stops, served, importance, cost })
    }

    /// Expand a stop list into a full cell-by-cell run via the pathfinder.
    ///
    /// Returns `Ok(None)` when any inter-stop segment is unreachable.
    fn expand(&self, stops: &[GridPoint]) -> SkyResult<Option<Run>> {
        let mut run = Run::start_at(stops[0]);
        for w in stops.windows(2) {
            let segment = self
                .pathfinder
                .find_path(self.zone, self.field, PathQuery::fixed(w[0], w[1]))?;
            if segment.is_empty() {
                return Ok(None);
            }
            run.extend_with_path(&segment);
        }
        Ok(Some(run))
    }
}
