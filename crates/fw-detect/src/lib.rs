//! `fw-detect`: proximity clustering of buses and per-cluster risk.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`dbscan`]    | R-tree backed DBSCAN over `GeoPoint`s                      |
//! | [`analysis`]  | `ClusterAnalysis`: speed/occupancy/size risk rules        |
//! | [`detector`]  | `ClusterDetector`, `ClusterReport`, `detect_clusters`      |
//!
//! Detection is read-only: it looks at a slice of buses and produces
//! [`NewAlert`](fw_fleet::NewAlert) drafts via
//! [`ClusterAnalysis::to_alert_draft`].  Raising them is the caller's job.

pub mod analysis;
pub mod dbscan;
pub mod detector;

#[cfg(test)]
mod tests;

pub use analysis::{recommendations_for, ClusterAnalysis};
pub use dbscan::dbscan;
pub use detector::{detect_clusters, ClusterDetector, ClusterReport};
