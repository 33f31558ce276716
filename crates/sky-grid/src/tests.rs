//! Unit tests for sky-grid.
//!
//! All tests use hand-crafted fields on a small zone so expected paths can
//! be asserted exactly.

#[cfg(test)]
mod helpers {
    use sky_core::{GridPoint, SkyResult, Zone};

    use crate::{GridAstar, ObstacleField, PathQuery, Pathfinder};

    pub fn zone10() -> Zone {
        Zone::new(10, 10, 50)
    }

    pub fn path(field: &ObstacleField, query: PathQuery) -> SkyResult<Vec<GridPoint>> {
        GridAstar.find_path(zone10(), field, query)
    }

    /// Assert every consecutive pair of waypoints is 4-adjacent.
    pub fn assert_connected(path: &[GridPoint]) {
        for w in path.windows(2) {
            assert_eq!(
                w[0].manhattan(w[1]),
                1,
                "waypoints {} and {} are not adjacent",
                w[0],
                w[1]
            );
        }
    }
}

// ── Obstacle field ────────────────────────────────────────────────────────────

#[cfg(test)]
mod field {
    use sky_core::{DynamicObstacle, GridPoint};

    use crate::ObstacleField;

    #[test]
    fn static_cells_block_in_both_modes() {
        let f = ObstacleField::new(&[GridPoint::new(2, 2)], &[]);
        assert!(f.blocked(GridPoint::new(2, 2), None));
        assert!(f.blocked(GridPoint::new(2, 2), Some(0.0)));
        assert!(!f.blocked(GridPoint::new(2, 3), None));
    }

    #[test]
    fn dynamic_cells_block_only_inside_window_and_only_timed_queries() {
        let cell = GridPoint::new(4, 4);
        let f = ObstacleField::new(&[], &[DynamicObstacle::new(cell, 10.0, 20.0)]);

        // Static-mode queries never see dynamic obstacles.
        assert!(!f.blocked(cell, None));

        // Inclusive window.
        assert!(f.blocked(cell, Some(10.0)));
        assert!(f.blocked(cell, Some(20.0)));
        assert!(!f.blocked(cell, Some(9.0)));
        assert!(!f.blocked(cell, Some(21.0)));
    }

    #[test]
    fn counts_and_emptiness() {
        assert!(ObstacleField::empty().is_empty());
        let f = ObstacleField::new(
            &[GridPoint::new(0, 0)],
            &[DynamicObstacle::new(GridPoint::new(1, 1), 0.0, 1.0)],
        );
        assert_eq!(f.static_count(), 1);
        assert_eq!(f.dynamic_count(), 1);
        assert!(!f.is_empty());
    }
}

// ── Static-mode search ────────────────────────────────────────────────────────

#[cfg(test)]
mod static_search {
    use sky_core::{GridPoint, SkyError, Zone};

    use crate::{GridAstar, ObstacleField, PathQuery, Pathfinder};

    use super::helpers::{assert_connected, path, zone10};

    #[test]
    fn open_grid_path_length_is_manhattan() {
        let field = ObstacleField::empty();
        let start = GridPoint::new(0, 0);
        let goal = GridPoint::new(5, 5);
        let p = path(&field, PathQuery::fixed(start, goal)).unwrap();

        assert_eq!(p.first(), Some(&start));
        assert_eq!(p.last(), Some(&goal));
        assert_eq!(p.len() as u32 - 1, start.manhattan(goal));
        assert_connected(&p);
    }

    #[test]
    fn trivial_same_cell() {
        let p = path(
            &ObstacleField::empty(),
            PathQuery::fixed(GridPoint::new(3, 3), GridPoint::new(3, 3)),
        )
        .unwrap();
        assert_eq!(p, vec![GridPoint::new(3, 3)]);
    }

    #[test]
    fn detours_around_a_wall() {
        // Vertical wall at x = 5 with a single gap at y = 9.
        let wall: Vec<GridPoint> = (0..9).map(|y| GridPoint::new(5, y)).collect();
        let field = ObstacleField::new(&wall, &[]);

        let start = GridPoint::new(0, 0);
        let goal = GridPoint::new(9, 0);
        let p = path(&field, PathQuery::fixed(start, goal)).unwrap();

        assert!(!p.is_empty());
        assert_connected(&p);
        assert!(p.iter().all(|c| !wall.contains(c)));
        assert!(p.contains(&GridPoint::new(5, 9)), "must thread the gap");
    }

    #[test]
    fn enclosed_goal_is_unreachable() {
        // Box in (5,5) on all four sides.
        let walls = [
            GridPoint::new(4, 5),
            GridPoint::new(6, 5),
            GridPoint::new(5, 4),
            GridPoint::new(5, 6),
        ];
        let field = ObstacleField::new(&walls, &[]);
        let p = path(
            &field,
            PathQuery::fixed(GridPoint::new(0, 0), GridPoint::new(5, 5)),
        )
        .unwrap();
        assert!(p.is_empty(), "walled-off goal must yield an empty path");
    }

    #[test]
    fn out_of_zone_endpoint_is_an_error() {
        let r = GridAstar.find_path(
            zone10(),
            &ObstacleField::empty(),
            PathQuery::fixed(GridPoint::new(0, 0), GridPoint::new(10, 0)),
        );
        assert!(matches!(r, Err(SkyError::OutOfZone { .. })));
    }

    #[test]
    fn neighbors_never_leave_small_zone() {
        // 1×3 corridor: only legal moves are along y.
        let zone = Zone::new(1, 3, 10);
        let p = GridAstar
            .find_path(
                zone,
                &ObstacleField::empty(),
                PathQuery::fixed(GridPoint::new(0, 0), GridPoint::new(0, 2)),
            )
            .unwrap();
        assert_eq!(p.len(), 3);
        assert!(p.iter().all(|c| zone.contains(*c)));
    }

    #[test]
    fn identical_queries_yield_identical_paths() {
        let obstacles = [GridPoint::new(2, 1), GridPoint::new(3, 4), GridPoint::new(6, 2)];
        let field = ObstacleField::new(&obstacles, &[]);
        let q = PathQuery::fixed(GridPoint::new(0, 0), GridPoint::new(8, 7));
        let a = path(&field, q).unwrap();
        let b = path(&field, q).unwrap();
        assert_eq!(a, b);
    }
}

// ── Time-aware search ─────────────────────────────────────────────────────────

#[cfg(test)]
mod dynamic_search {
    use sky_core::{DynamicObstacle, GridPoint};

    use crate::{ObstacleField, PathQuery};

    use super::helpers::{assert_connected, path};

    fn blocker_at_5_0() -> ObstacleField {
        ObstacleField::new(
            &[],
            &[DynamicObstacle::new(GridPoint::new(5, 0), 0.0, 100.0)],
        )
    }

    #[test]
    fn active_obstacle_forces_a_detour() {
        let field = blocker_at_5_0();
        let start = GridPoint::new(0, 0);
        let goal = GridPoint::new(9, 0);

        let p = path(&field, PathQuery::at_time(start, goal, 50.0)).unwrap();
        assert!(!p.is_empty());
        assert_connected(&p);
        assert!(!p.contains(&GridPoint::new(5, 0)));
        // Straight run is 9 steps; stepping around one cell costs 2 more.
        assert_eq!(p.len() as u32 - 1, 11);
    }

    #[test]
    fn inactive_obstacle_does_not_block() {
        let field = blocker_at_5_0();
        let start = GridPoint::new(0, 0);
        let goal = GridPoint::new(9, 0);

        // t = 150 is strictly outside [0, 100]: the cell is free.
        let p = path(&field, PathQuery::at_time(start, goal, 150.0)).unwrap();
        assert_eq!(p.len() as u32 - 1, start.manhattan(goal));
        assert!(p.contains(&GridPoint::new(5, 0)));
    }

    #[test]
    fn static_mode_ignores_dynamic_obstacles() {
        let field = blocker_at_5_0();
        let p = path(
            &field,
            PathQuery::fixed(GridPoint::new(0, 0), GridPoint::new(9, 0)),
        )
        .unwrap();
        assert_eq!(p.len() as u32 - 1, 9);
    }

    #[test]
    fn time_is_fixed_for_the_whole_search() {
        // A window that "expires" mid-traversal still blocks: the search
        // evaluates every cell at the query time, not at arrival time.
        let field = ObstacleField::new(
            &[],
            &[DynamicObstacle::new(GridPoint::new(8, 0), 0.0, 1.0)],
        );
        let p = path(
            &field,
            PathQuery::at_time(GridPoint::new(0, 0), GridPoint::new(9, 0), 1.0),
        )
        .unwrap();
        assert!(!p.contains(&GridPoint::new(8, 0)));
    }
}
