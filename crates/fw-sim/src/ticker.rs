//! Periodic driver: a tokio task that ticks a shared `FleetSim`.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Utc;
use fw_fleet::{PositionSource, TickReport};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{error, info, warn};

use crate::{FleetObserver, FleetSim, SimError, SimResult};

/// A `FleetSim` shared between the ticker task and operator commands.
///
/// The lock is held for exactly one tick or one command and never across an
/// `.await`.
pub type SharedFleet<S> = Arc<Mutex<FleetSim<S>>>;

pub fn shared<S: PositionSource>(sim: FleetSim<S>) -> SharedFleet<S> {
    Arc::new(Mutex::new(sim))
}

/// Owns the periodic tick task.
///
/// The first tick fires one full period after [`start`](Self::start).  If
/// the runtime falls behind, missed ticks are skipped rather than replayed
/// in a burst.  Dropping the ticker aborts the task.
#[derive(Default)]
pub struct FleetTicker {
    task: Option<JoinHandle<()>>,
}

impl FleetTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn the tick task on the current tokio runtime, ticking every
    /// `config.tick_interval_ms`.
    ///
    /// # Errors
    ///
    /// - [`SimError::AlreadyRunning`] if a task from an earlier `start` is
    ///   still alive.
    /// - [`SimError::Poisoned`] if the fleet lock is poisoned.
    ///
    /// # Panics
    ///
    /// Outside a tokio runtime, as [`tokio::spawn`] does.
    pub fn start<S, O>(&mut self, fleet: SharedFleet<S>, observer: O) -> SimResult<()>
    where
        S: PositionSource,
        O: FleetObserver + Send + 'static,
    {
        if self.is_running() {
            warn!("ticker start rejected: already running");
            return Err(SimError::AlreadyRunning);
        }
        let period = fleet.lock().map_err(|_| SimError::Poisoned)?.config().tick_interval();
        self.task = Some(tokio::spawn(tick_loop(fleet, observer, period)));
        info!(period_ms = period.as_millis() as u64, "fleet ticker started");
        Ok(())
    }

    /// Abort the tick task.  Returns `false` if nothing was running.
    ///
    /// A tick in progress finishes first: the task only yields between
    /// ticks.
    pub fn stop(&mut self) -> bool {
        match self.task.take() {
            Some(task) => {
                task.abort();
                info!("fleet ticker stopped");
                true
            }
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }
}

impl Drop for FleetTicker {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

async fn tick_loop<S, O>(fleet: SharedFleet<S>, mut observer: O, period: Duration)
where
    S: PositionSource,
    O: FleetObserver,
{
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // The first tick of a tokio interval completes immediately.
    interval.tick().await;

    loop {
        interval.tick().await;
        match tick_once(&fleet, &mut observer) {
            Ok(_) => {}
            Err(SimError::Poisoned) => {
                error!("fleet state lock poisoned; ticker exiting");
                break;
            }
            Err(e) => warn!(error = %e, "tick failed"),
        }
    }
}

fn tick_once<S, O>(fleet: &SharedFleet<S>, observer: &mut O) -> SimResult<TickReport>
where
    S: PositionSource,
    O: FleetObserver,
{
    let mut sim = fleet.lock().map_err(|_| SimError::Poisoned)?;
    sim.tick(Utc::now(), observer)
}
