//! Unit tests for fw-detect.

use chrono::{DateTime, TimeZone, Utc};
use fw_core::{BusId, ClusterConfig, GeoPoint, Severity};
use fw_fleet::{demo_buses, Bus};

use crate::{dbscan, detect_clusters, recommendations_for, ClusterAnalysis, ClusterDetector};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap()
}

fn bus_at(n: u32, lat: f64, lon: f64) -> Bus {
    Bus::new(BusId(n), "Route 1", GeoPoint::new(lat, lon), 80, t0()).with_speed(25)
}

fn pts(coords: &[(f64, f64)]) -> Vec<GeoPoint> {
    coords.iter().map(|&(lat, lon)| GeoPoint::new(lat, lon)).collect()
}

fn enabled() -> ClusterConfig {
    ClusterConfig { enabled: true, ..ClusterConfig::default() }
}

// ── DBSCAN ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod clustering {
    use super::*;

    #[test]
    fn empty_input_has_no_clusters() {
        assert!(dbscan(&[], 0.01, 2).is_empty());
    }

    #[test]
    fn isolated_point_is_noise() {
        let p = pts(&[(40.71, -74.0), (40.7105, -74.0), (40.80, -74.0)]);
        assert_eq!(dbscan(&p, 0.01, 2), vec![vec![0, 1]]);
    }

    #[test]
    fn neighbourhood_boundary_is_inclusive() {
        let p = pts(&[(0.0, 0.0), (0.0, 0.01)]);
        assert_eq!(dbscan(&p, 0.01, 2), vec![vec![0, 1]]);
    }

    #[test]
    fn clusters_chain_through_core_points() {
        // 0 and 2 are 0.016 apart but both reach 1.
        let p = pts(&[(0.0, 0.0), (0.008, 0.0), (0.016, 0.0)]);
        assert_eq!(dbscan(&p, 0.01, 2), vec![vec![0, 1, 2]]);
    }

    #[test]
    fn min_samples_counts_the_point_itself() {
        let p = pts(&[(0.0, 0.0), (0.0, 0.005)]);
        assert_eq!(dbscan(&p, 0.01, 2).len(), 1);
        assert!(dbscan(&p, 0.01, 3).is_empty());
    }

    #[test]
    fn min_samples_one_makes_singletons() {
        let p = pts(&[(0.0, 0.0), (1.0, 1.0)]);
        assert_eq!(dbscan(&p, 0.01, 1), vec![vec![0], vec![1]]);
    }

    #[test]
    fn clusters_numbered_in_input_order() {
        let p = pts(&[(1.0, 1.0), (0.0, 0.0), (1.0, 1.001), (0.0, 0.001)]);
        assert_eq!(dbscan(&p, 0.01, 2), vec![vec![0, 2], vec![1, 3]]);
    }
}

// ── Risk analysis ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod analysis {
    use super::*;

    fn analyse(buses: &[Bus]) -> ClusterAnalysis {
        let refs: Vec<&Bus> = buses.iter().collect();
        ClusterAnalysis::of(&refs).unwrap()
    }

    #[test]
    fn empty_group_has_no_analysis() {
        assert!(ClusterAnalysis::of(&[]).is_none());
    }

    #[test]
    fn quiet_pair_is_low_risk() {
        let a = analyse(&[bus_at(1, 40.71, -74.0), bus_at(2, 40.711, -74.0)]);
        assert_eq!(a.risk, Severity::Low);
        assert!(a.notes.is_empty());
        assert_eq!(a.summary(), "Normal conditions");
        assert_eq!(a.recommendations, recommendations_for(Severity::Low));
        assert_eq!(a.size(), 2);
        // 0.001° of latitude is about 111 m; the centroid sits halfway.
        assert!((a.radius_m - 55.6).abs() < 1.0, "got {}", a.radius_m);
    }

    #[test]
    fn slow_traffic_is_medium() {
        let a = analyse(&[
            bus_at(1, 40.71, -74.0).with_speed(0),
            bus_at(2, 40.711, -74.0).with_speed(18),
        ]);
        assert_eq!(a.average_speed_kmh, 9.0);
        assert_eq!(a.risk, Severity::Medium);
        assert_eq!(a.summary(), "Low speed indicates possible traffic or stops");
    }

    #[test]
    fn fast_traffic_is_high() {
        let a = analyse(&[
            bus_at(1, 40.71, -74.0).with_speed(70),
            bus_at(2, 40.711, -74.0).with_speed(65),
        ]);
        assert_eq!(a.risk, Severity::High);
    }

    #[test]
    fn crowding_escalates_one_level() {
        let a = analyse(&[
            bus_at(1, 40.71, -74.0).with_occupancy(60),
            bus_at(2, 40.711, -74.0).with_occupancy(55),
        ]);
        assert_eq!(a.average_occupancy, 57.5);
        assert_eq!(a.risk, Severity::Medium);
        assert_eq!(a.notes, vec!["High passenger count detected".to_owned()]);
    }

    #[test]
    fn large_cluster_escalates_and_saturates() {
        let three: Vec<Bus> = (1..=3)
            .map(|n| bus_at(n, 40.71, -74.0).with_speed(70).with_occupancy(60))
            .collect();
        let a = analyse(&three);
        assert_eq!(a.risk, Severity::High);
        assert_eq!(a.notes.len(), 3);
        assert_eq!(a.notes[2], "Large cluster of 3 buses detected");
        assert_eq!(
            a.summary(),
            "High speed with multiple buses indicates potential safety risk \
             | High passenger count detected | Large cluster of 3 buses detected"
        );
    }

    #[test]
    fn draft_carries_members_centroid_and_risk() {
        let a = analyse(&[
            bus_at(7, 40.70, -74.0).with_speed(5),
            bus_at(3, 40.72, -74.0).with_speed(5),
        ]);
        let draft = a.to_alert_draft();
        assert_eq!(draft.bus_ids, vec![BusId(7), BusId(3)]);
        assert!((draft.location.lat - 40.71).abs() < 1e-9);
        assert_eq!(draft.severity, Severity::Medium);
        assert!(draft.alternate_route.is_none());
    }
}

// ── Detector ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod detector {
    use super::*;

    #[test]
    fn invalid_config_rejected() {
        let bad = ClusterConfig { eps_deg: 0.0, ..enabled() };
        assert!(ClusterDetector::new(&bad).is_err());
        let bad = ClusterConfig { min_samples: 0, ..enabled() };
        assert!(detect_clusters(&[], &bad).is_err());
    }

    #[test]
    fn no_clusters_means_low_and_no_advice() {
        let report = detect_clusters(&[bus_at(1, 0.0, 0.0), bus_at(2, 1.0, 1.0)], &enabled()).unwrap();
        assert!(report.is_empty());
        assert_eq!(report.overall_risk, Severity::Low);
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn demo_fleet_is_one_high_risk_cluster() {
        // Mean speed 19 km/h with five buses: slow, then escalated by size.
        let buses = demo_buses(t0());
        let report = detect_clusters(&buses, &enabled()).unwrap();
        assert_eq!(report.clusters.len(), 1);
        assert_eq!(report.clusters[0].size(), 5);
        assert_eq!(report.overall_risk, Severity::High);
        assert_eq!(report.recommendations, recommendations_for(Severity::High).to_vec());
    }

    #[test]
    fn overall_risk_is_max_and_advice_deduplicated() {
        let buses = vec![
            bus_at(1, 10.0, 10.0),
            bus_at(2, 10.0, 10.001),
            bus_at(3, 20.0, 20.0).with_speed(5),
            bus_at(4, 20.0, 20.001).with_speed(5),
            bus_at(5, 30.0, 30.0),
            bus_at(6, 30.0, 30.001),
        ];
        let report = ClusterDetector::new(&enabled()).unwrap().detect(&buses);
        assert_eq!(report.clusters.len(), 3);
        assert_eq!(report.overall_risk, Severity::Medium);
        // Low, Medium, Low: the second Low set adds nothing.
        assert_eq!(report.recommendations.len(), 5);
        assert_eq!(report.recommendations[0], "Normal service");
        assert_eq!(report.recommendations[2], "Monitor bus status");
    }
}
