//! `fw-core`: foundational types for the `fleetwatch` workspace.
//!
//! This crate is a dependency of every other `fw-*` crate.  It intentionally
//! has no `fw-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `BusId`, `AlertId`                                    |
//! | [`geo`]         | `GeoPoint`, haversine distance, centroid              |
//! | [`status`]      | `BusStatus`, `Severity`                               |
//! | [`time`]        | `Tick`                                                |
//! | [`rng`]         | `SimRng`                                              |
//! | [`config`]      | `FleetConfig`, `ClusterConfig`                        |
//! | [`error`]       | `FleetError`, `FleetResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod status;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ClusterConfig, FleetConfig};
pub use error::{FleetError, FleetResult};
pub use geo::GeoPoint;
pub use ids::{AlertId, BusId};
pub use rng::SimRng;
pub use status::{BusStatus, Severity};
pub use time::Tick;
