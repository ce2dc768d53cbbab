//! Text rendering of the operator view.

use std::fmt::Write;

use fw_detect::ClusterReport;
use fw_fleet::FleetSnapshot;
use fw_view::{
    filter_and_sort, occupancy_percent, showing_line, summary_statistics, LoadBand, SortKey,
    SortOrder,
};

/// How the bus list is filtered and ordered.
pub struct ListView<'a> {
    pub query: &'a str,
    pub key:   SortKey,
    pub order: SortOrder,
}

/// Summary header, alerts, and the filtered bus table.
pub fn render_dashboard(snapshot: &FleetSnapshot, view: &ListView<'_>) -> String {
    let stats = summary_statistics(&snapshot.buses, &snapshot.alerts);
    let mut out = String::new();

    let _ = writeln!(out, "== Fleet at {} ==", snapshot.tick);
    let _ = writeln!(
        out,
        "Active buses: {}   Alerts: {}   In alert: {}   Rerouted: {}",
        stats.active_bus_count, stats.active_alert_count, stats.buses_in_alert, stats.buses_rerouted,
    );
    let _ = writeln!(
        out,
        "Average occupancy: {}% ({})   System status: {}",
        stats.average_occupancy_percent,
        stats.load_band(),
        stats.system_status(),
    );

    if !snapshot.alerts.is_empty() {
        let _ = writeln!(out, "\nAlerts");
        for alert in &snapshot.alerts {
            let buses: Vec<String> = alert.bus_ids.iter().map(ToString::to_string).collect();
            let _ = writeln!(
                out,
                "  {} [{}] at {}: {}",
                alert.id,
                alert.severity,
                alert.location,
                buses.join(", "),
            );
            if let Some(route) = &alert.alternate_route {
                let _ = writeln!(
                    out,
                    "    detour {} -> {} ({} points)",
                    route.from_stop,
                    route.to_stop,
                    route.points.len(),
                );
            }
        }
    }

    let rows = filter_and_sort(&snapshot.buses, view.query, view.key, view.order);
    let _ = writeln!(out, "\n{:<10} {:<10} {:<10} {:>5} {:>8} {:<6}", "Bus", "Route", "Status", "km/h", "Load", "Band");
    for bus in &rows {
        let _ = writeln!(
            out,
            "{:<10} {:<10} {:<10} {:>5} {:>7}% {:<6}",
            bus.id.to_string(),
            bus.route,
            bus.status.as_str(),
            bus.speed_kmh,
            occupancy_percent(bus),
            LoadBand::of(bus).as_str(),
        );
    }
    let _ = writeln!(out, "{}", showing_line(rows.len(), snapshot.buses.len()));
    out
}

/// Cluster analysis section.
pub fn render_clusters(report: &ClusterReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nCluster analysis: overall risk {}", report.overall_risk);
    for cluster in &report.clusters {
        let _ = writeln!(
            out,
            "  {} buses within {:.0} m of {} [{}]: {}",
            cluster.size(),
            cluster.radius_m,
            cluster.centroid,
            cluster.risk,
            cluster.summary(),
        );
    }
    for advice in &report.recommendations {
        let _ = writeln!(out, "  - {advice}");
    }
    out
}
