//! Cluster alerts and suggested detours.

use chrono::{DateTime, Utc};
use fw_core::{AlertId, BusId, GeoPoint, Severity};

/// A suggested detour around a cluster: an ordered list of waypoints between
/// two named stops.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlternateRoute {
    pub from_stop: String,
    pub to_stop:   String,
    pub points:    Vec<GeoPoint>,
}

/// An active clustering alert.
///
/// `bus_ids` are weak references into the fleet: lookup only, no ownership.
/// The store guarantees every id names a bus in the fleet and that a bus
/// appears in at most one active alert.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClusterAlert {
    pub id:        AlertId,
    pub bus_ids:   Vec<BusId>,
    /// Representative location of the cluster.
    pub location:  GeoPoint,
    pub severity:  Severity,
    /// Creation time.
    pub timestamp: DateTime<Utc>,
    /// Present only once a detour has been computed.
    pub alternate_route: Option<AlternateRoute>,
}

impl ClusterAlert {
    /// `true` if `bus` is one of the clustered buses.
    #[inline]
    pub fn involves(&self, bus: BusId) -> bool {
        self.bus_ids.contains(&bus)
    }
}

/// An alert that has been detected but not yet registered with the store.
///
/// The store assigns the id and creation timestamp in
/// [`FleetStore::raise_alert`][crate::FleetStore::raise_alert].
#[derive(Debug, Clone, PartialEq)]
pub struct NewAlert {
    pub bus_ids:         Vec<BusId>,
    pub location:        GeoPoint,
    pub severity:        Severity,
    pub alternate_route: Option<AlternateRoute>,
}

impl NewAlert {
    pub fn new(bus_ids: Vec<BusId>, location: GeoPoint, severity: Severity) -> Self {
        Self { bus_ids, location, severity, alternate_route: None }
    }

    pub fn with_alternate_route(mut self, route: AlternateRoute) -> Self {
        self.alternate_route = Some(route);
        self
    }
}
