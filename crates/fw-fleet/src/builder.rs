//! Fluent builder for constructing a validated `FleetStore`.
//!
//! # Usage
//!
//! ```rust
//! use chrono::Utc;
//! use fw_core::{BusId, GeoPoint};
//! use fw_fleet::{Bus, FleetStoreBuilder};
//!
//! let now = Utc::now();
//! let store = FleetStoreBuilder::new()
//!     .bus(Bus::new(BusId(1001), "Route 42", GeoPoint::new(40.7128, -74.006), 50, now))
//!     .bus(Bus::new(BusId(1002), "Route 42", GeoPoint::new(40.7138, -74.008), 50, now))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(store.len(), 2);
//! assert!(store.alerts().is_empty());
//! ```

use fw_core::{FleetError, FleetResult};

use crate::{Bus, ClusterAlert, FleetMap, FleetStore};

/// Fluent builder for [`FleetStore`].
///
/// The fleet is fixed at build time: buses are neither added nor removed
/// afterwards.  Seeded alerts keep the statuses given on their buses, which
/// lets a session be restored exactly as it was observed.
#[derive(Default)]
pub struct FleetStoreBuilder {
    buses:  Vec<Bus>,
    alerts: Vec<ClusterAlert>,
}

impl FleetStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one bus.  Fleet order is insertion order.
    pub fn bus(mut self, bus: Bus) -> Self {
        self.buses.push(bus);
        self
    }

    pub fn buses<I: IntoIterator<Item = Bus>>(mut self, buses: I) -> Self {
        self.buses.extend(buses);
        self
    }

    /// Seed an already-active alert.
    pub fn alert(mut self, alert: ClusterAlert) -> Self {
        self.alerts.push(alert);
        self
    }

    pub fn alerts<I: IntoIterator<Item = ClusterAlert>>(mut self, alerts: I) -> Self {
        self.alerts.extend(alerts);
        self
    }

    /// Validate and construct the store.
    ///
    /// # Errors
    ///
    /// - [`FleetError::DuplicateBus`]: two buses share an id, or an alert
    ///   names the same bus twice.
    /// - [`FleetError::OccupancyExceedsCapacity`]: a bus is over capacity.
    /// - [`FleetError::DuplicateAlert`]: two alerts share an id.
    /// - [`FleetError::EmptyAlert`] / [`FleetError::UnknownBusInAlert`]:
    ///   an alert names no bus, or a bus outside the fleet.
    /// - [`FleetError::BusAlreadyInAlert`]: a bus is named by two alerts.
    pub fn build(self) -> FleetResult<FleetStore> {
        let mut index = FleetMap::default();
        for (i, bus) in self.buses.iter().enumerate() {
            if bus.occupancy > bus.capacity {
                return Err(FleetError::OccupancyExceedsCapacity {
                    bus:       bus.id,
                    occupancy: bus.occupancy,
                    capacity:  bus.capacity,
                });
            }
            if index.insert(bus.id, i).is_some() {
                return Err(FleetError::DuplicateBus(bus.id));
            }
        }

        let mut store = FleetStore::with_buses(self.buses, index);
        for alert in self.alerts {
            store.insert_seeded(alert)?;
        }
        Ok(store)
    }
}
