//! Unit tests for fw-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AlertId, BusId, FleetError};

    #[test]
    fn display_is_prefixed_and_padded() {
        assert_eq!(BusId(1001).to_string(), "BUS-1001");
        assert_eq!(BusId(7).to_string(), "BUS-0007");
        assert_eq!(AlertId(1).to_string(), "ALERT-001");
        assert_eq!(AlertId(1234).to_string(), "ALERT-1234");
    }

    #[test]
    fn parse_roundtrip() {
        assert_eq!("BUS-1003".parse::<BusId>().unwrap(), BusId(1003));
        assert_eq!("ALERT-001".parse::<AlertId>().unwrap(), AlertId(1));
    }

    #[test]
    fn parse_rejects_wrong_prefix_and_garbage() {
        for bad in ["ALERT-001", "BUS1001", "BUS-", "BUS-12a", "bus-1001", ""] {
            let err = bad.parse::<BusId>().unwrap_err();
            assert!(matches!(err, FleetError::ParseId(_)), "{bad:?} → {err}");
        }
    }

    #[test]
    fn ordering_follows_number() {
        assert!(BusId(999) < BusId(1000));
        assert_eq!(AlertId(1).next(), Some(AlertId(2)));
    }

    #[test]
    fn last_alert_id_has_no_successor() {
        let last: AlertId = "ALERT-4294967295".parse().unwrap();
        assert_eq!(last, AlertId(u32::MAX));
        assert_eq!(last.next(), None);
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(40.7128, -74.006);
        assert!(p.distance_m(p) < 0.01);
    }

    #[test]
    fn one_degree_latitude() {
        let a = GeoPoint::new(40.0, -74.0);
        let b = GeoPoint::new(41.0, -74.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 500.0, "got {d}");
    }

    #[test]
    fn centroid_of_two_points() {
        let c = GeoPoint::centroid([GeoPoint::new(40.0, -74.0), GeoPoint::new(41.0, -73.0)]).unwrap();
        assert!((c.lat - 40.5).abs() < 1e-12);
        assert!((c.lon + 73.5).abs() < 1e-12);
        assert!(GeoPoint::centroid(std::iter::empty()).is_none());
    }

    #[test]
    fn display_four_decimals() {
        assert_eq!(GeoPoint::new(40.71434, -74.0051).to_string(), "(40.7143, -74.0051)");
    }
}

#[cfg(test)]
mod status {
    use crate::{BusStatus, Severity};

    #[test]
    fn priority_order() {
        assert!(BusStatus::Alert.priority() < BusStatus::Alternate.priority());
        assert!(BusStatus::Alternate.priority() < BusStatus::Normal.priority());
    }

    #[test]
    fn only_alert_is_held() {
        assert!(BusStatus::Alert.is_held());
        assert!(!BusStatus::Normal.is_held());
        assert!(!BusStatus::Alternate.is_held());
    }

    #[test]
    fn status_parse_display() {
        for s in [BusStatus::Normal, BusStatus::Alert, BusStatus::Alternate] {
            assert_eq!(s.to_string().parse::<BusStatus>().unwrap(), s);
        }
        assert!("stopped".parse::<BusStatus>().is_err());
    }

    #[test]
    fn severity_is_ordered_and_escalates() {
        assert!(Severity::Low < Severity::Medium && Severity::Medium < Severity::High);
        assert_eq!(Severity::Low.escalate(), Severity::Medium);
        assert_eq!(Severity::Medium.escalate(), Severity::High);
        assert_eq!(Severity::High.escalate(), Severity::High);
        assert_eq!("medium".parse::<Severity>().unwrap(), Severity::Medium);
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        assert_eq!(Tick(3).next(), Tick(4));
        assert_eq!(Tick::ZERO.next(), Tick(1));
        assert_eq!(Tick(2).to_string(), "T2");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn jitter_within_half_span() {
        let mut rng = SimRng::new(7);
        for _ in 0..1000 {
            let j = rng.jitter(0.0005);
            assert!((-0.00025..0.00025).contains(&j), "got {j}");
        }
        assert_eq!(rng.jitter(0.0), 0.0);
    }

    #[test]
    fn different_seeds_diverge() {
        let x: u64 = SimRng::new(1).random();
        let y: u64 = SimRng::new(2).random();
        assert_ne!(x, y);
    }
}

#[cfg(test)]
mod config {
    use std::time::Duration;

    use crate::{FleetConfig, FleetError};

    #[test]
    fn defaults_match_reference_dashboard() {
        let cfg = FleetConfig::default();
        assert_eq!(cfg.tick_interval(), Duration::from_secs(2));
        assert_eq!(cfg.jitter_deg, 0.0005);
        assert_eq!((cfg.speed_min_kmh, cfg.speed_max_kmh), (15, 29));
        assert!(!cfg.cluster.enabled);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_empty_speed_range() {
        let cfg = FleetConfig { speed_min_kmh: 30, speed_max_kmh: 10, ..FleetConfig::default() };
        assert!(matches!(cfg.validate(), Err(FleetError::Config(_))));
    }

    #[test]
    fn rejects_zero_interval_and_bad_eps() {
        let cfg = FleetConfig { tick_interval_ms: 0, ..FleetConfig::default() };
        assert!(cfg.validate().is_err());

        let mut cfg = FleetConfig::default();
        cfg.cluster.eps_deg = 0.0;
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod error {
    use crate::{AlertId, BusId, FleetError};

    #[test]
    fn families() {
        assert!(FleetError::BusNotFound(BusId(1)).is_not_found());
        assert!(FleetError::AlertNotFound(AlertId(1)).is_not_found());
        assert!(FleetError::EmptyAlert.is_invalid_state());
        assert!(!FleetError::EmptyAlert.is_not_found());
        assert!(FleetError::AlertIdsExhausted.is_invalid_state());
        assert_eq!(
            FleetError::BusNotFound(BusId(1001)).to_string(),
            "bus BUS-1001 not found"
        );
    }
}
