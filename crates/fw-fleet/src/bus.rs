//! The `Bus` record.

use chrono::{DateTime, Utc};
use fw_core::{BusId, BusStatus, GeoPoint};

/// Latest known state of one vehicle.
///
/// Fields are `pub` for cheap read access from consumers; mutation goes
/// through [`FleetStore`][crate::FleetStore], which is the only place status
/// transitions happen.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bus {
    pub id: BusId,

    /// Current position; perturbed every tick.
    pub position: GeoPoint,

    /// Free-text route label, e.g. `"Route 42"`.
    pub route: String,

    pub status: BusStatus,

    /// Ground speed in km/h.  Always 0 after a tick while `status` is `Alert`.
    pub speed_kmh: u32,

    /// Bearing in degrees, `[0, 360)`.
    pub heading_deg: f64,

    /// Seats plus standing room.
    pub capacity: u32,

    /// Passengers on board.  Expected to stay `<= capacity`.
    pub occupancy: u32,

    /// Time of the most recent position update.
    pub last_updated: DateTime<Utc>,
}

impl Bus {
    /// A stationary, empty, `Normal` bus at `position`.
    pub fn new(
        id:       BusId,
        route:    impl Into<String>,
        position: GeoPoint,
        capacity: u32,
        now:      DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            position,
            route:        route.into(),
            status:       BusStatus::Normal,
            speed_kmh:    0,
            heading_deg:  0.0,
            capacity,
            occupancy:    0,
            last_updated: now,
        }
    }

    pub fn with_status(mut self, status: BusStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_speed(mut self, speed_kmh: u32) -> Self {
        self.speed_kmh = speed_kmh;
        self
    }

    /// Set the heading, normalised into `[0, 360)`.
    pub fn with_heading(mut self, heading_deg: f64) -> Self {
        self.heading_deg = heading_deg.rem_euclid(360.0);
        self
    }

    pub fn with_occupancy(mut self, occupancy: u32) -> Self {
        self.occupancy = occupancy;
        self
    }
}
