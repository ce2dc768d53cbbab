//! `fw-sim`: drives the fleet store over time.
//!
//! # Tick loop
//!
//! ```text
//! every config.tick_interval_ms (FleetTicker):
//!   lock SharedFleet
//!   FleetSim::tick(now)
//!     ① on_tick_start
//!     ② FleetStore::tick  : sample every bus from the PositionSource;
//!                            Alert buses held at 0 km/h
//!     ③ detection         : only with config.cluster.enabled: DBSCAN,
//!                            raise an alert per unowned cluster
//!     ④ on_tick_end
//!   unlock
//! ```
//!
//! Operator commands (`reroute_bus`, `resolve_alert`, `raise_alert`) take the
//! same lock, so they never interleave with a tick.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use fw_core::FleetConfig;
//! use fw_fleet::{demo_fleet, JitterSource};
//! use fw_sim::{shared, FleetSim, FleetTicker, TracingObserver};
//!
//! let config = FleetConfig::default();
//! let source = JitterSource::from_config(&config);
//! let sim = FleetSim::new(config, demo_fleet(chrono::Utc::now())?, source)?;
//! let fleet = shared(sim);
//!
//! let mut ticker = FleetTicker::new();
//! ticker.start(fleet.clone(), TracingObserver)?;
//! ```

pub mod error;
pub mod observer;
pub mod sim;
pub mod ticker;


pub use error::{SimError, SimResult};
pub use observer::{FleetObserver, NoopObserver, TracingObserver};
pub use sim::FleetSim;
pub use ticker::{shared, FleetTicker, SharedFleet};
