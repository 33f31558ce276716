//! Nearest-site queries over storages and resupply stations.
//!
//! Storages are grouped by diet, with one R-tree (via `rstar`) per diet for
//! nearest-match lookups.  A diet with no registered storage simply has no
//! entry: `nearest` returns `None` and the caller excludes that diet's
//! enclosures — "no supply" is never a fault.

use rstar::{PointDistance, RTree, RTreeObject, AABB};
use rustc_hash::FxHashMap;

use sky_core::{AirPoint, Diet, GridPoint, Storage};

// ── R-tree site entry ─────────────────────────────────────────────────────────

/// Entry stored in a site R-tree: the ground-projected `[x, y]` point with
/// the index of the site in its backing `Vec`.
#[derive(Clone)]
struct SiteEntry {
    point: [f32; 2],
    idx:   usize,
}

impl SiteEntry {
    fn new(position: AirPoint, idx: usize) -> Self {
        Self { point: [position.x as f32, position.y as f32], idx }
    }
}

impl RTreeObject for SiteEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for SiteEntry {
    /// Squared 2-D Euclidean distance — order-preserving, no sqrt needed
    /// for nearest queries.
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

#[inline]
fn query_point(cell: GridPoint) -> [f32; 2] {
    [cell.x as f32, cell.y as f32]
}

// ── SupplyIndex ───────────────────────────────────────────────────────────────

/// Storages grouped by diet with per-diet nearest queries.
pub struct SupplyIndex {
    shelves: FxHashMap<Diet, Shelf>,
}

/// All storages of one diet plus their spatial index.
struct Shelf {
    storages: Vec<Storage>,
    tree:     RTree<SiteEntry>,
}

impl SupplyIndex {
    /// Group `storages` by diet and bulk-load one R-tree per diet.
    pub fn build(storages: &[Storage]) -> Self {
        let mut grouped: FxHashMap<Diet, Vec<Storage>> = FxHashMap::default();
        for &s in storages {
            grouped.entry(s.diet).or_default().push(s);
        }

        let shelves = grouped
            .into_iter()
            .map(|(diet, storages)| {
                let entries: Vec<SiteEntry> = storages
                    .iter()
                    .enumerate()
                    .map(|(i, s)| SiteEntry::new(s.position, i))
                    .collect();
                let tree = RTree::bulk_load(entries);
                (diet, Shelf { storages, tree })
            })
            .collect();

        Self { shelves }
    }

    /// `true` if at least one storage supplies `diet`.
    pub fn has_supply(&self, diet: Diet) -> bool {
        self.shelves.contains_key(&diet)
    }

    /// All storages of `diet`, in input order.  Empty slice if none.
    pub fn storages(&self, diet: Diet) -> &[Storage] {
        self.shelves
            .get(&diet)
            .map(|s| s.storages.as_slice())
            .unwrap_or(&[])
    }

    /// The storage of `diet` nearest to `from` by 2-D Euclidean distance.
    ///
    /// Returns `None` when no storage supplies `diet` — the caller must
    /// treat those enclosures as permanently unservable, not crash.
    pub fn nearest(&self, diet: Diet, from: GridPoint) -> Option<&Storage> {
        let shelf = self.shelves.get(&diet)?;
        shelf
            .tree
            .nearest_neighbor(&query_point(from))
            .map(|e| &shelf.storages[e.idx])
    }
}

// ── ResupplyIndex ─────────────────────────────────────────────────────────────

/// Battery-swap stations with a nearest query.  Same shape as one shelf of
/// the supply index, minus the diet key.
pub struct ResupplyIndex {
    stations: Vec<AirPoint>,
    tree:     RTree<SiteEntry>,
}

impl ResupplyIndex {
    pub fn build(stations: &[AirPoint]) -> Self {
        let entries: Vec<SiteEntry> = stations
            .iter()
            .enumerate()
            .map(|(i, &p)| SiteEntry::new(p, i))
            .collect();
        Self {
            stations: stations.to_vec(),
            tree:     RTree::bulk_load(entries),
        }
    }

    /// `true` if the zone has no swap stations at all.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// The station nearest to `from`, or `None` when there are none.
    pub fn nearest(&self, from: GridPoint) -> Option<AirPoint> {
        self.tree
            .nearest_neighbor(&query_point(from))
            .map(|e| self.stations[e.idx])
    }
}
