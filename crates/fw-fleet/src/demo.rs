//! The demonstration fleet: five buses in lower Manhattan on three routes,
//! with one medium-severity cluster on Route 42 / Route 36 and a suggested
//! detour from Union Square to Washington Square.

use chrono::{DateTime, Utc};
use fw_core::{AlertId, BusId, BusStatus, FleetResult, GeoPoint, Severity};

use crate::{AlternateRoute, Bus, ClusterAlert, FleetStore, FleetStoreBuilder};

/// The five demo buses, all stamped `now`.
pub fn demo_buses(now: DateTime<Utc>) -> Vec<Bus> {
    let bus = |n, route, lat, lon| Bus::new(BusId(n), route, GeoPoint::new(lat, lon), 50, now);
    vec![
        bus(1001, "Route 42", 40.7128, -74.006).with_speed(25).with_heading(90.0).with_occupancy(28),
        bus(1002, "Route 42", 40.7138, -74.008).with_speed(18).with_heading(180.0).with_occupancy(35),
        bus(1003, "Route 36", 40.7148, -74.003)
            .with_status(BusStatus::Alert)
            .with_heading(270.0)
            .with_occupancy(42),
        bus(1004, "Route 36", 40.7118, -74.001)
            .with_status(BusStatus::Alternate)
            .with_speed(22)
            .with_heading(45.0)
            .with_occupancy(15),
        bus(1005, "Route 15", 40.7108, -74.009).with_speed(30).with_heading(135.0).with_occupancy(22),
    ]
}

/// `ALERT-001`, naming `BUS-1003` and `BUS-1002`.
pub fn demo_alerts(now: DateTime<Utc>) -> Vec<ClusterAlert> {
    vec![ClusterAlert {
        id:        AlertId(1),
        bus_ids:   vec![BusId(1003), BusId(1002)],
        location:  GeoPoint::new(40.7143, -74.005),
        severity:  Severity::Medium,
        timestamp: now,
        alternate_route: Some(AlternateRoute {
            from_stop: "Union Square".into(),
            to_stop:   "Washington Square".into(),
            points: vec![
                GeoPoint::new(40.7143, -74.005),
                GeoPoint::new(40.7150, -74.0),
                GeoPoint::new(40.7160, -73.995),
            ],
        }),
    }]
}

/// A store pre-loaded with [`demo_buses`] and [`demo_alerts`].
pub fn demo_fleet(now: DateTime<Utc>) -> FleetResult<FleetStore> {
    FleetStoreBuilder::new()
        .buses(demo_buses(now))
        .alerts(demo_alerts(now))
        .build()
}
