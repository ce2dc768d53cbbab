//! `FleetSim`: the store, its telemetry source, and optional clustering
//! detection behind one `&mut self` API.

use chrono::{DateTime, Utc};
use fw_core::{AlertId, BusId, FleetConfig};
use fw_detect::ClusterDetector;
use fw_fleet::{
    FleetSnapshot, FleetStore, NewAlert, PositionSource, Resolution, StatusChange, TickReport,
};
use tracing::debug;

use crate::{FleetObserver, SimError, SimResult};

/// The fleet simulation driver.
///
/// `FleetSim<S>` owns the [`FleetStore`] and the [`PositionSource`] feeding
/// it.  Every mutation (ticks and operator commands alike) goes through a
/// `&mut self` method, so they are serialized by construction; wrap the sim
/// in a [`SharedFleet`][crate::SharedFleet] to share it with a
/// [`FleetTicker`][crate::FleetTicker].
///
/// One tick is:
///
/// 1. `on_tick_start`
/// 2. Apply a telemetry sample to every bus ([`FleetStore::tick`]).
/// 3. If `config.cluster.enabled`: cluster the fleet and raise an alert for
///    every cluster none of whose buses already belongs to an alert.
/// 4. `on_tick_end`
pub struct FleetSim<S: PositionSource> {
    config:   FleetConfig,
    store:    FleetStore,
    source:   S,
    detector: Option<ClusterDetector>,
}

impl<S: PositionSource> FleetSim<S> {
    /// # Errors
    ///
    /// [`SimError::Config`] if `config` fails validation.
    pub fn new(config: FleetConfig, store: FleetStore, source: S) -> SimResult<Self> {
        config.validate().map_err(|e| SimError::Config(e.to_string()))?;
        let detector = if config.cluster.enabled {
            Some(ClusterDetector::new(&config.cluster).map_err(|e| SimError::Config(e.to_string()))?)
        } else {
            None
        };
        Ok(Self { config, store, source, detector })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &FleetConfig {
        &self.config
    }

    /// Read-only view of the fleet.
    pub fn store(&self) -> &FleetStore {
        &self.store
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn snapshot(&self) -> FleetSnapshot {
        self.store.snapshot()
    }

    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Advance one interval, stamping updated buses with `now`.
    pub fn tick<O>(&mut self, now: DateTime<Utc>, observer: &mut O) -> SimResult<TickReport>
    where
        O: FleetObserver + ?Sized,
    {
        observer.on_tick_start(self.store.current_tick().next());
        let report = self.store.tick(&mut self.source, now);
        if self.detector.is_some() {
            self.detect_and_raise(now, observer)?;
        }
        observer.on_tick_end(&report);
        Ok(report)
    }

    /// [`tick`](Self::tick) stamped with the wall clock.
    pub fn tick_now<O>(&mut self, observer: &mut O) -> SimResult<TickReport>
    where
        O: FleetObserver + ?Sized,
    {
        self.tick(Utc::now(), observer)
    }

    /// Run exactly `n` ticks on a simulated clock starting at `start` and
    /// advancing by `config.tick_interval_ms` per tick.
    ///
    /// Returns the report of the last tick, or `None` when `n == 0`.
    pub fn run_ticks<O>(
        &mut self,
        n:        u64,
        start:    DateTime<Utc>,
        observer: &mut O,
    ) -> SimResult<Option<TickReport>>
    where
        O: FleetObserver + ?Sized,
    {
        let step = chrono::Duration::milliseconds(
            i64::try_from(self.config.tick_interval_ms).unwrap_or(i64::MAX),
        );
        let mut now = start;
        let mut last = None;
        for _ in 0..n {
            last = Some(self.tick(now, observer)?);
            now += step;
        }
        Ok(last)
    }

    fn detect_and_raise<O>(&mut self, now: DateTime<Utc>, observer: &mut O) -> SimResult<()>
    where
        O: FleetObserver + ?Sized,
    {
        let Some(detector) = self.detector else {
            return Ok(());
        };
        let report = detector.detect(self.store.buses());
        let drafts: Vec<NewAlert> = report
            .clusters
            .iter()
            .filter(|c| c.bus_ids.iter().all(|&b| self.store.owning_alert(b).is_none()))
            .map(|c| c.to_alert_draft())
            .collect();

        debug!(
            clusters = report.clusters.len(),
            new = drafts.len(),
            overall = %report.overall_risk,
            "clustering pass"
        );
        for draft in drafts {
            self.raise_alert(draft, now, observer)?;
        }
        Ok(())
    }

    // ── Commands ──────────────────────────────────────────────────────────

    /// Put bus `id` on its alternate route.  See [`FleetStore::reroute_bus`].
    pub fn reroute_bus<O>(&mut self, id: BusId, observer: &mut O) -> SimResult<Option<StatusChange>>
    where
        O: FleetObserver + ?Sized,
    {
        let change = self.store.reroute_bus(id)?;
        if let Some(change) = change {
            observer.on_status_change(change);
        }
        Ok(change)
    }

    /// Dismiss alert `id`.  See [`FleetStore::resolve_alert`].
    pub fn resolve_alert<O>(&mut self, id: AlertId, observer: &mut O) -> SimResult<Resolution>
    where
        O: FleetObserver + ?Sized,
    {
        let resolution = self.store.resolve_alert(id)?;
        for &change in &resolution.changes {
            observer.on_status_change(change);
        }
        observer.on_alert_resolved(&resolution.alert);
        Ok(resolution)
    }

    /// Register an externally detected cluster.  See
    /// [`FleetStore::raise_alert`].
    pub fn raise_alert<O>(
        &mut self,
        draft:    NewAlert,
        now:      DateTime<Utc>,
        observer: &mut O,
    ) -> SimResult<AlertId>
    where
        O: FleetObserver + ?Sized,
    {
        let raised = self.store.raise_alert(draft, now)?;
        for &change in &raised.changes {
            observer.on_status_change(change);
        }
        if let Some(alert) = self.store.alert(raised.alert) {
            observer.on_alert_raised(alert);
        }
        Ok(raised.alert)
    }
}
