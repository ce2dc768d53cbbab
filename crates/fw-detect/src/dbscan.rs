//! Density-based clustering (DBSCAN) over geographic points.
//!
//! # Metric
//!
//! Plain Euclidean distance in `[lat, lon]` degree space.  At city scale a
//! degree of longitude is shorter than a degree of latitude, so the
//! neighbourhood is an ellipse on the ground; thresholds are tuned in
//! degrees with that in mind.
//!
//! # Spatial index
//!
//! Neighbourhoods come from an R-tree (via `rstar`) bulk-loaded once per
//! call, so each query is O(log N + k) instead of a full scan.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use fw_core::GeoPoint;

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// A `[lat, lon]` point tagged with its position in the input slice.
#[derive(Clone)]
struct PointEntry {
    point: [f64; 2],
    slot:  usize,
}

impl RTreeObject for PointEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for PointEntry {
    /// Squared Euclidean distance in lat/lon space.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

// ── DBSCAN ────────────────────────────────────────────────────────────────────

/// Group `points` into density clusters.
///
/// A point is a *core* point when at least `min_samples` points (itself
/// included) lie within `eps_deg` of it, boundary inclusive.  Clusters grow
/// from core points through their neighbourhoods; non-core points reached
/// this way join as border points, first cluster wins.  Points reached by no
/// cluster are noise and appear in no output group.
///
/// Returns one `Vec` of input indices per cluster, each sorted ascending.
/// Clusters are numbered in discovery order while scanning the input in
/// order, so the output is deterministic for a given input.
pub fn dbscan(points: &[GeoPoint], eps_deg: f64, min_samples: usize) -> Vec<Vec<usize>> {
    if points.is_empty() {
        return Vec::new();
    }

    let entries: Vec<PointEntry> = points
        .iter()
        .enumerate()
        .map(|(slot, p)| PointEntry { point: p.to_array(), slot })
        .collect();
    let tree = RTree::bulk_load(entries);

    let eps_2 = eps_deg * eps_deg;
    let neighbourhoods: Vec<Vec<usize>> = points
        .iter()
        .map(|p| {
            tree.locate_within_distance(p.to_array(), eps_2)
                .map(|e| e.slot)
                .collect()
        })
        .collect();
    let is_core = |i: usize| neighbourhoods[i].len() >= min_samples.max(1);

    let mut labels: Vec<Option<usize>> = vec![None; points.len()];
    let mut clusters: Vec<Vec<usize>> = Vec::new();

    for seed in 0..points.len() {
        if labels[seed].is_some() || !is_core(seed) {
            continue;
        }
        let cluster = clusters.len();
        let mut members = Vec::new();
        let mut frontier = vec![seed];

        while let Some(i) = frontier.pop() {
            if labels[i].is_some() {
                continue;
            }
            labels[i] = Some(cluster);
            members.push(i);
            if is_core(i) {
                frontier.extend(neighbourhoods[i].iter().copied().filter(|&j| labels[j].is_none()));
            }
        }

        members.sort_unstable();
        clusters.push(members);
    }

    clusters
}
