//! The `FleetStore`: buses, active alerts, and the bus→alert owner map.

use chrono::{DateTime, Utc};
use fw_core::{AlertId, BusId, BusStatus, FleetError, FleetResult, Tick};
use tracing::{debug, info, warn};

use crate::{Bus, ClusterAlert, FleetMap, NewAlert, PositionSource};

// ── Command results ───────────────────────────────────────────────────────────

/// One bus moving between statuses as a result of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChange {
    pub bus:  BusId,
    pub from: BusStatus,
    pub to:   BusStatus,
}

/// Outcome of one [`FleetStore::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub tick:    Tick,
    /// Buses whose telemetry was updated (the whole fleet).
    pub updated: usize,
    /// Buses pinned to zero speed because they are in `Alert`.
    pub held:    usize,
}

/// Outcome of [`FleetStore::raise_alert`].
#[derive(Debug, Clone, PartialEq)]
pub struct Raised {
    pub alert:   AlertId,
    pub changes: Vec<StatusChange>,
}

/// Outcome of [`FleetStore::resolve_alert`]: the removed alert and the buses
/// it released.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub alert:   ClusterAlert,
    pub changes: Vec<StatusChange>,
}

/// Owned, point-in-time copy of the store for readers on other threads.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FleetSnapshot {
    pub tick:   Tick,
    pub buses:  Vec<Bus>,
    pub alerts: Vec<ClusterAlert>,
}

impl FleetSnapshot {
    pub fn bus(&self, id: BusId) -> Option<&Bus> {
        self.buses.iter().find(|b| b.id == id)
    }
}

// ── FleetStore ────────────────────────────────────────────────────────────────

/// Single source of truth for bus and alert state.
///
/// Every mutation takes `&mut self` and runs to completion, so a tick can
/// never interleave with a reroute or resolve, and readers holding `&self`
/// always see a consistent fleet.  Commands validate before they mutate: a
/// command that returns `Err` has changed nothing.
///
/// Buses keep their insertion order for the lifetime of the store.  Alerts
/// are kept in creation order.
///
/// Build with [`FleetStoreBuilder`][crate::FleetStoreBuilder].
#[derive(Debug)]
pub struct FleetStore {
    buses:      Vec<Bus>,
    index:      FleetMap<BusId, usize>,
    alerts:     Vec<ClusterAlert>,
    /// Which active alert each clustered bus belongs to.  A bus appears at
    /// most once; entries are added by `raise_alert`/seeding and removed by
    /// `resolve_alert`.
    owners:     FleetMap<BusId, AlertId>,
    /// `None` once `ALERT-4294967295` has been handed out.
    next_alert: Option<AlertId>,
    tick:       Tick,
}

impl FleetStore {
    /// Package-private constructor used by `FleetStoreBuilder` once bus ids
    /// are known to be unique.  Seeded alerts are added afterwards through
    /// `insert_seeded`.
    pub(crate) fn with_buses(buses: Vec<Bus>, index: FleetMap<BusId, usize>) -> Self {
        Self {
            buses,
            index,
            alerts:     Vec::new(),
            owners:     FleetMap::default(),
            next_alert: Some(AlertId(1)),
            tick:       Tick::ZERO,
        }
    }

    // ── Reads ─────────────────────────────────────────────────────────────

    /// All buses in fleet order.
    #[inline]
    pub fn buses(&self) -> &[Bus] {
        &self.buses
    }

    /// Active alerts in creation order.
    #[inline]
    pub fn alerts(&self) -> &[ClusterAlert] {
        &self.alerts
    }

    pub fn bus(&self, id: BusId) -> Option<&Bus> {
        self.index.get(&id).map(|&i| &self.buses[i])
    }

    pub fn alert(&self, id: AlertId) -> Option<&ClusterAlert> {
        self.alerts.iter().find(|a| a.id == id)
    }

    /// The active alert `bus` belongs to, if any.
    pub fn owning_alert(&self, bus: BusId) -> Option<AlertId> {
        self.owners.get(&bus).copied()
    }

    /// Ticks applied since the store was built.
    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    pub fn len(&self) -> usize {
        self.buses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buses.is_empty()
    }

    /// Owned copy of buses and alerts at the current tick.
    pub fn snapshot(&self) -> FleetSnapshot {
        FleetSnapshot {
            tick:   self.tick,
            buses:  self.buses.clone(),
            alerts: self.alerts.clone(),
        }
    }

    // ── Telemetry ─────────────────────────────────────────────────────────

    /// Advance simulated time by one interval.
    ///
    /// Every bus gets a fresh sample from `source`: position and
    /// `last_updated` are always applied; speed is applied unless the bus is
    /// in `Alert`, in which case it is pinned to 0.  Status never changes
    /// here.
    pub fn tick<S>(&mut self, source: &mut S, now: DateTime<Utc>) -> TickReport
    where
        S: PositionSource + ?Sized,
    {
        let tick = self.tick.next();
        let mut held = 0;

        for bus in &mut self.buses {
            let sample = source.sample(bus, tick);
            bus.position = sample.position;
            bus.speed_kmh = if bus.status.is_held() {
                held += 1;
                0
            } else {
                sample.speed_kmh
            };
            bus.last_updated = now;
        }

        self.tick = tick;
        debug!(%tick, buses = self.buses.len(), held, "fleet telemetry applied");
        TickReport { tick, updated: self.buses.len(), held }
    }

    // ── Operator commands ─────────────────────────────────────────────────

    /// Put `id` on its alternate route.
    ///
    /// Idempotent: rerouting an `Alternate` bus succeeds and returns `None`.
    /// Alerts and ownership are untouched; the bus returns to `Normal` only
    /// when its alert is resolved.
    ///
    /// # Errors
    ///
    /// [`FleetError::BusNotFound`] if `id` is not in the fleet.
    pub fn reroute_bus(&mut self, id: BusId) -> FleetResult<Option<StatusChange>> {
        let Some(&i) = self.index.get(&id) else {
            warn!(bus = %id, "reroute rejected: unknown bus");
            return Err(FleetError::BusNotFound(id));
        };
        let bus = &mut self.buses[i];
        let from = bus.status;
        if from == BusStatus::Alternate {
            return Ok(None);
        }
        bus.status = BusStatus::Alternate;
        info!(bus = %id, %from, "bus rerouted");
        Ok(Some(StatusChange { bus: id, from, to: BusStatus::Alternate }))
    }

    /// Dismiss alert `id` and return its buses to `Normal`.
    ///
    /// The alert leaves the active set and every bus it names is reset in
    /// the same call, so no reader can observe one without the other.
    ///
    /// # Errors
    ///
    /// [`FleetError::AlertNotFound`] if no active alert has this id.
    pub fn resolve_alert(&mut self, id: AlertId) -> FleetResult<Resolution> {
        let Some(pos) = self.alerts.iter().position(|a| a.id == id) else {
            warn!(alert = %id, "resolve rejected: unknown alert");
            return Err(FleetError::AlertNotFound(id));
        };
        let alert = self.alerts.remove(pos);

        let mut changes = Vec::with_capacity(alert.bus_ids.len());
        for &bus_id in &alert.bus_ids {
            if self.owners.get(&bus_id) == Some(&id) {
                self.owners.remove(&bus_id);
            }
            // Alert members are validated on insert, so the lookup holds.
            if let Some(&i) = self.index.get(&bus_id) {
                let bus = &mut self.buses[i];
                if bus.status != BusStatus::Normal {
                    changes.push(StatusChange { bus: bus_id, from: bus.status, to: BusStatus::Normal });
                    bus.status = BusStatus::Normal;
                }
            }
        }

        info!(alert = %id, released = alert.bus_ids.len(), "alert resolved");
        Ok(Resolution { alert, changes })
    }

    /// Register a newly detected cluster and move its buses to `Alert`.
    ///
    /// # Errors
    ///
    /// - [`FleetError::EmptyAlert`] if `draft.bus_ids` is empty.
    /// - [`FleetError::DuplicateBus`] if a bus is named twice.
    /// - [`FleetError::BusNotFound`] if a bus is not in the fleet.
    /// - [`FleetError::BusAlreadyInAlert`] if a bus already belongs to an
    ///   active alert.
    /// - [`FleetError::AlertIdsExhausted`] if every alert id is taken.
    pub fn raise_alert(&mut self, draft: NewAlert, now: DateTime<Utc>) -> FleetResult<Raised> {
        self.check_members(&draft.bus_ids, FleetError::BusNotFound)?;

        let Some(id) = self.next_alert else {
            warn!("raise rejected: alert ids exhausted");
            return Err(FleetError::AlertIdsExhausted);
        };
        self.next_alert = id.next();

        let mut changes = Vec::with_capacity(draft.bus_ids.len());
        for &bus_id in &draft.bus_ids {
            self.owners.insert(bus_id, id);
            let bus = &mut self.buses[self.index[&bus_id]];
            if bus.status != BusStatus::Alert {
                changes.push(StatusChange { bus: bus_id, from: bus.status, to: BusStatus::Alert });
                bus.status = BusStatus::Alert;
            }
        }

        info!(alert = %id, severity = %draft.severity, buses = draft.bus_ids.len(), "alert raised");
        self.alerts.push(ClusterAlert {
            id,
            bus_ids:         draft.bus_ids,
            location:        draft.location,
            severity:        draft.severity,
            timestamp:       now,
            alternate_route: draft.alternate_route,
        });
        Ok(Raised { alert: id, changes })
    }

    /// Validate the member list of a prospective alert against the fleet and
    /// the owner map.  `unknown` builds the error for a bus not in the fleet.
    pub(crate) fn check_members(
        &self,
        bus_ids: &[BusId],
        unknown: impl Fn(BusId) -> FleetError,
    ) -> FleetResult<()> {
        if bus_ids.is_empty() {
            return Err(FleetError::EmptyAlert);
        }
        for (n, &bus) in bus_ids.iter().enumerate() {
            if bus_ids[..n].contains(&bus) {
                return Err(FleetError::DuplicateBus(bus));
            }
            if !self.index.contains_key(&bus) {
                return Err(unknown(bus));
            }
            if let Some(&alert) = self.owners.get(&bus) {
                return Err(FleetError::BusAlreadyInAlert { bus, alert });
            }
        }
        Ok(())
    }

    /// Insert a seeded alert as-is (statuses untouched), after validation.
    pub(crate) fn insert_seeded(&mut self, alert: ClusterAlert) -> FleetResult<()> {
        if self.alerts.iter().any(|a| a.id == alert.id) {
            return Err(FleetError::DuplicateAlert(alert.id));
        }
        self.check_members(&alert.bus_ids, |bus| FleetError::UnknownBusInAlert { bus })?;
        for &bus in &alert.bus_ids {
            self.owners.insert(bus, alert.id);
        }
        if self.next_alert.is_some_and(|next| alert.id >= next) {
            self.next_alert = alert.id.next();
        }
        self.alerts.push(alert);
        Ok(())
    }
}
