//! Telemetry sources: where each tick's positions and speeds come from.
//!
//! [`FleetStore::tick`][crate::FleetStore::tick] asks a [`PositionSource`]
//! for one [`Sample`] per bus and applies it.  The store, not the source,
//! owns the status rules: a bus in `Alert` is pinned to zero speed whatever
//! the source proposes.  That keeps transition logic testable with
//! deterministic sources.

use std::collections::{HashMap, VecDeque};

use fw_core::{BusId, FleetConfig, GeoPoint, SimRng, Tick};

use crate::Bus;

/// One telemetry reading proposed for a bus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub position:  GeoPoint,
    pub speed_kmh: u32,
}

/// Pluggable telemetry feed.
///
/// Implement this trait to replace the jitter simulator with a recorded
/// trace or a live AVL feed adapter.
///
/// # Thread safety
///
/// Sources move into the periodic driver's task, so implementations must be
/// `Send`.
pub trait PositionSource: Send + 'static {
    /// Propose the next reading for `bus` at `tick`.
    fn sample(&mut self, bus: &Bus, tick: Tick) -> Sample;
}

// ── JitterSource ──────────────────────────────────────────────────────────────

/// Simulated telemetry: small random walk around the current position and a
/// uniformly drawn speed.
///
/// Latitude and longitude move independently by a uniform value in
/// `±jitter_deg / 2`; speed is uniform over `speed_min..=speed_max`.
pub struct JitterSource {
    rng:        SimRng,
    jitter_deg: f64,
    speed_min:  u32,
    speed_max:  u32,
}

impl JitterSource {
    pub fn new(seed: u64, jitter_deg: f64, speed_min: u32, speed_max: u32) -> Self {
        Self {
            rng: SimRng::new(seed),
            jitter_deg,
            speed_min: speed_min.min(speed_max),
            speed_max,
        }
    }

    /// Build from the run configuration (`seed`, `jitter_deg`, speed range).
    pub fn from_config(config: &FleetConfig) -> Self {
        Self::new(config.seed, config.jitter_deg, config.speed_min_kmh, config.speed_max_kmh)
    }
}

impl PositionSource for JitterSource {
    fn sample(&mut self, bus: &Bus, _tick: Tick) -> Sample {
        let d_lat = self.rng.jitter(self.jitter_deg);
        let d_lon = self.rng.jitter(self.jitter_deg);
        Sample {
            position:  bus.position.offset(d_lat, d_lon),
            speed_kmh: self.rng.gen_range(self.speed_min..=self.speed_max),
        }
    }
}

// ── ScriptedSource ────────────────────────────────────────────────────────────

/// Deterministic telemetry from a fixed per-bus sequence.
///
/// Each call pops the next scripted sample for that bus.  Once a bus's
/// script is exhausted (or it never had one) the bus holds its position at
/// `fallback_speed_kmh`.
pub struct ScriptedSource {
    scripts:            HashMap<BusId, VecDeque<Sample>>,
    fallback_speed_kmh: u32,
}

impl ScriptedSource {
    pub fn new(fallback_speed_kmh: u32) -> Self {
        Self { scripts: HashMap::new(), fallback_speed_kmh }
    }

    /// Append `samples` to the script for `bus`.
    pub fn script<I>(mut self, bus: BusId, samples: I) -> Self
    where
        I: IntoIterator<Item = Sample>,
    {
        self.scripts.entry(bus).or_default().extend(samples);
        self
    }

    /// Scripted samples not yet consumed for `bus`.
    pub fn remaining(&self, bus: BusId) -> usize {
        self.scripts.get(&bus).map_or(0, VecDeque::len)
    }
}

impl PositionSource for ScriptedSource {
    fn sample(&mut self, bus: &Bus, _tick: Tick) -> Sample {
        self.scripts
            .get_mut(&bus.id)
            .and_then(VecDeque::pop_front)
            .unwrap_or(Sample { position: bus.position, speed_kmh: self.fallback_speed_kmh })
    }
}

// ── HoldPosition ──────────────────────────────────────────────────────────────

/// A [`PositionSource`] that never moves anything.
///
/// Useful as a placeholder in tests or while a live feed is disconnected.
pub struct HoldPosition {
    pub speed_kmh: u32,
}

impl PositionSource for HoldPosition {
    fn sample(&mut self, bus: &Bus, _tick: Tick) -> Sample {
        Sample { position: bus.position, speed_kmh: self.speed_kmh }
    }
}
