//! Unit tests for fw-view.

use chrono::{DateTime, TimeZone, Utc};
use fw_core::{BusId, BusStatus, GeoPoint};
use fw_fleet::{demo_alerts, demo_buses, Bus};

use crate::*;

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap()
}

fn bus(n: u32, route: &str, capacity: u32, occupancy: u32) -> Bus {
    Bus::new(BusId(n), route, GeoPoint::new(40.71, -74.0), capacity, t0()).with_occupancy(occupancy)
}

fn ids(list: &[&Bus]) -> Vec<u32> {
    list.iter().map(|b| b.id.0).collect()
}

// ── Filter and sort ───────────────────────────────────────────────────────────

#[cfg(test)]
mod query {
    use super::*;

    #[test]
    fn route_filter_keeps_matching_buses() {
        let buses = demo_buses(t0());
        let out = filter_and_sort(&buses, "36", SortKey::Id, SortOrder::Asc);
        assert_eq!(ids(&out), vec![1003, 1004]);
        assert!(out.iter().all(|b| b.route == "Route 36"));
    }

    #[test]
    fn status_ascending_puts_alert_first() {
        let buses = vec![
            bus(1, "Route 36", 50, 0),
            bus(2, "Route 36", 50, 0).with_status(BusStatus::Alert),
            bus(3, "Route 42", 50, 0),
        ];
        let out = filter_and_sort(&buses, "36", SortKey::Status, SortOrder::Asc);
        assert_eq!(ids(&out), vec![2, 1]);
    }

    #[test]
    fn status_order_is_alert_alternate_normal() {
        let buses = demo_buses(t0());
        let out = filter_and_sort(&buses, "", SortKey::Status, SortOrder::Asc);
        // Ties among the three normal buses stay in fleet order.
        assert_eq!(ids(&out), vec![1003, 1004, 1001, 1002, 1005]);
    }

    #[test]
    fn descending_reverses_but_keeps_ties_stable() {
        let buses = demo_buses(t0());
        let out = filter_and_sort(&buses, "", SortKey::Status, SortOrder::Desc);
        assert_eq!(ids(&out), vec![1001, 1002, 1005, 1004, 1003]);
    }

    #[test]
    fn query_matches_displayed_id_case_insensitively() {
        let buses = demo_buses(t0());
        let out = filter_and_sort(&buses, "bus-1005", SortKey::Id, SortOrder::Asc);
        assert_eq!(ids(&out), vec![1005]);
        let out = filter_and_sort(&buses, "ROUTE 4", SortKey::Id, SortOrder::Desc);
        assert_eq!(ids(&out), vec![1002, 1001]);
    }

    #[test]
    fn query_is_matched_as_typed() {
        let buses = demo_buses(t0());
        assert_eq!(filter_and_sort(&buses, "", SortKey::Id, SortOrder::Asc).len(), 5);
        assert!(filter_and_sort(&buses, "  ", SortKey::Id, SortOrder::Asc).is_empty());
        assert!(filter_and_sort(&buses, "42 ", SortKey::Id, SortOrder::Asc).is_empty());
        assert!(filter_and_sort(&buses, "route 99", SortKey::Id, SortOrder::Asc).is_empty());
        assert_eq!(ids(&filter_and_sort(&buses, "e 42", SortKey::Id, SortOrder::Asc)), vec![1001, 1002]);
    }

    #[test]
    fn id_sort_follows_displayed_text() {
        let buses = vec![bus(9999, "A", 1, 0), bus(10000, "A", 1, 0), bus(1000, "A", 1, 0)];
        let out = filter_and_sort(&buses, "", SortKey::Id, SortOrder::Asc);
        assert_eq!(ids(&out), vec![1000, 10000, 9999]);
    }

    #[test]
    fn route_sort_ignores_case_first() {
        let buses = vec![bus(1, "b line", 1, 0), bus(2, "A line", 1, 0), bus(3, "a line", 1, 0)];
        let out = filter_and_sort(&buses, "", SortKey::Route, SortOrder::Asc);
        assert_eq!(ids(&out), vec![2, 3, 1]);
    }

    #[test]
    fn sort_key_and_order_parse() {
        assert_eq!("Status".parse::<SortKey>().unwrap(), SortKey::Status);
        assert_eq!("desc".parse::<SortOrder>().unwrap(), SortOrder::Desc);
        assert!("speed".parse::<SortKey>().is_err());
        assert_eq!(SortKey::Route.to_string(), "route");
    }

    #[test]
    fn footer_line() {
        assert_eq!(showing_line(2, 5), "Showing 2 of 5 buses");
    }
}

// ── Summary ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod summary {
    use super::*;

    #[test]
    fn average_occupancy_is_pooled() {
        let buses = vec![bus(1, "A", 50, 28), bus(2, "A", 50, 35)];
        let stats = summary_statistics(&buses, &[]);
        assert_eq!(stats.average_occupancy_percent, 63);
        assert_eq!(stats.active_bus_count, 2);
        assert_eq!(stats.active_alert_count, 0);
        assert_eq!(stats.system_status(), SystemStatus::Optimal);
    }

    #[test]
    fn empty_fleet_is_zero_percent() {
        let stats = summary_statistics(&[], &[]);
        assert_eq!(stats, SummaryStatistics::default());
    }

    #[test]
    fn zero_capacity_fleet_is_zero_percent() {
        let stats = summary_statistics(&[bus(1, "A", 0, 0)], &[]);
        assert_eq!(stats.average_occupancy_percent, 0);
    }

    #[test]
    fn demo_fleet_counts() {
        let now = t0();
        let stats = summary_statistics(&demo_buses(now), &demo_alerts(now));
        assert_eq!(stats.active_bus_count, 5);
        assert_eq!(stats.active_alert_count, 1);
        assert_eq!(stats.buses_in_alert, 1);
        assert_eq!(stats.buses_rerouted, 1);
        // 142 / 250
        assert_eq!(stats.average_occupancy_percent, 57);
        assert_eq!(stats.load_band(), LoadBand::Medium);
        assert_eq!(stats.system_status().to_string(), "Needs Attention");
    }
}

// ── Load bands ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod bands {
    use super::*;

    #[test]
    fn ratio_and_percent() {
        let b = bus(1, "A", 50, 35);
        assert!((occupancy_ratio(&b) - 0.7).abs() < 1e-12);
        assert_eq!(occupancy_percent(&b), 70);
        assert_eq!(occupancy_ratio(&bus(2, "A", 0, 0)), 0.0);
    }

    #[test]
    fn thresholds_are_exclusive() {
        assert_eq!(LoadBand::from_ratio(0.5), LoadBand::Low);
        assert_eq!(LoadBand::from_ratio(0.51), LoadBand::Medium);
        assert_eq!(LoadBand::from_ratio(0.8), LoadBand::Medium);
        assert_eq!(LoadBand::from_ratio(0.81), LoadBand::High);
        assert_eq!(LoadBand::of(&bus(1, "A", 50, 45)), LoadBand::High);
    }
}
