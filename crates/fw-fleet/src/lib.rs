//! `fw-fleet`: the fleet state store.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`bus`]     | `Bus`: latest telemetry and status of one vehicle                |
//! | [`alert`]   | `ClusterAlert`, `AlternateRoute`, `NewAlert`                      |
//! | [`store`]   | `FleetStore`: buses, alerts, owner map, tick and commands        |
//! | [`builder`] | `FleetStoreBuilder`: validated construction                      |
//! | [`source`]  | `PositionSource` trait, `JitterSource`, `ScriptedSource`, `HoldPosition` |
//! | [`demo`]    | The five-bus demonstration fleet                                  |
//!
//! # Status model
//!
//! `Normal → Alert` when a cluster alert is raised, `Alert → Alternate` on
//! operator reroute, and back to `Normal` only when the owning alert is
//! resolved.  [`FleetStore::tick`] moves buses but never changes status.
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                     |
//! |-----------|------------------------------------------------------------|
//! | `fx-hash` | FxHash for the id index and owner map.                     |
//! | `serde`   | Derives `Serialize`/`Deserialize` on buses, alerts, snapshots. |

pub mod alert;
pub mod builder;
pub mod bus;
pub mod demo;
pub mod source;
pub mod store;


pub use alert::{AlternateRoute, ClusterAlert, NewAlert};
pub use builder::FleetStoreBuilder;
pub use bus::Bus;
pub use demo::{demo_alerts, demo_buses, demo_fleet};
pub use source::{HoldPosition, JitterSource, PositionSource, Sample, ScriptedSource};
pub use store::{FleetSnapshot, FleetStore, Raised, Resolution, StatusChange, TickReport};

#[cfg(feature = "fx-hash")]
pub(crate) type FleetMap<K, V> = rustc_hash::FxHashMap<K, V>;
#[cfg(not(feature = "fx-hash"))]
pub(crate) type FleetMap<K, V> = std::collections::HashMap<K, V>;
