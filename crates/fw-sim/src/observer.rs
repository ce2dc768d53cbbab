//! Notification hooks for fleet events.

use fw_core::Tick;
use fw_fleet::{ClusterAlert, StatusChange, TickReport};
use tracing::{debug, info};

/// Callbacks invoked by [`FleetSim`][crate::FleetSim] as state changes.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Status changes are reported after the
/// store has applied them, so a hook never sees a half-applied command.
///
/// # Example: alert banner
///
/// ```rust,ignore
/// struct Banner;
///
/// impl FleetObserver for Banner {
///     fn on_alert_raised(&mut self, alert: &ClusterAlert) {
///         println!("{} buses clustered near {}", alert.bus_ids.len(), alert.location);
///     }
/// }
/// ```
pub trait FleetObserver {
    /// Called before telemetry for `tick` is applied.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after telemetry is applied and detection has run.
    fn on_tick_end(&mut self, _report: &TickReport) {}

    /// Called once per bus whose status changed.
    fn on_status_change(&mut self, _change: StatusChange) {}

    /// Called after a new alert is registered, and after its buses'
    /// `on_status_change` calls.
    fn on_alert_raised(&mut self, _alert: &ClusterAlert) {}

    /// Called with the removed alert, after its buses'
    /// `on_status_change` calls.
    fn on_alert_resolved(&mut self, _alert: &ClusterAlert) {}
}

/// A [`FleetObserver`] that does nothing.
pub struct NoopObserver;

impl FleetObserver for NoopObserver {}

/// Forwards fleet events to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl FleetObserver for TracingObserver {
    fn on_tick_end(&mut self, report: &TickReport) {
        debug!(tick = %report.tick, updated = report.updated, held = report.held, "tick complete");
    }

    fn on_status_change(&mut self, change: StatusChange) {
        info!(bus = %change.bus, from = %change.from, to = %change.to, "bus status changed");
    }

    fn on_alert_raised(&mut self, alert: &ClusterAlert) {
        info!(
            alert = %alert.id,
            severity = %alert.severity,
            location = %alert.location,
            buses = alert.bus_ids.len(),
            "cluster alert raised"
        );
    }

    fn on_alert_resolved(&mut self, alert: &ClusterAlert) {
        info!(alert = %alert.id, "cluster alert resolved");
    }
}
