//! Fleet simulation configuration.
//!
//! Typically loaded from a TOML file by the application crate (with the
//! `serde` feature) and passed to the simulation driver.  Every field has a
//! default, so a partial file is enough.

use std::time::Duration;

use crate::{FleetError, FleetResult};

/// Top-level configuration for the telemetry simulator and periodic driver.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FleetConfig {
    /// Milliseconds between ticks of the periodic driver.  Default: 2000.
    pub tick_interval_ms: u64,

    /// Total width, in degrees, of the per-tick positional jitter window.
    /// Each coordinate moves by a uniform value in `±jitter_deg / 2`.
    /// Default: 0.0005 (about ±28 m of latitude).
    pub jitter_deg: f64,

    /// Lower bound of simulated speed for buses not in alert, km/h.
    pub speed_min_kmh: u32,

    /// Upper bound (inclusive) of simulated speed, km/h.
    pub speed_max_kmh: u32,

    /// Master RNG seed.  The same seed always replays identical telemetry.
    pub seed: u64,

    /// Automatic clustering detection after every tick.
    pub cluster: ClusterConfig,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 2_000,
            jitter_deg:       0.0005,
            speed_min_kmh:    15,
            speed_max_kmh:    29,
            seed:             42,
            cluster:          ClusterConfig::default(),
        }
    }
}

impl FleetConfig {
    /// Period of the tick driver.
    #[inline]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Reject configurations the simulator cannot honour.
    pub fn validate(&self) -> FleetResult<()> {
        if self.tick_interval_ms == 0 {
            return Err(FleetError::Config("tick_interval_ms must be positive".into()));
        }
        if !self.jitter_deg.is_finite() || self.jitter_deg < 0.0 {
            return Err(FleetError::Config(format!(
                "jitter_deg must be a non-negative number, got {}",
                self.jitter_deg
            )));
        }
        if self.speed_min_kmh > self.speed_max_kmh {
            return Err(FleetError::Config(format!(
                "speed range is empty: {}..={} km/h",
                self.speed_min_kmh, self.speed_max_kmh
            )));
        }
        self.cluster.validate()
    }
}

/// Density-clustering parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClusterConfig {
    /// Run detection after every tick and raise alerts for new clusters.
    /// Off by default: alerts are normally seeded or raised externally.
    pub enabled: bool,

    /// Neighbourhood radius in degrees (Euclidean in lat/lon space).
    pub eps_deg: f64,

    /// Minimum neighbourhood size, counting the bus itself, for a bus to
    /// seed a cluster.
    pub min_samples: usize,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            enabled:     false,
            eps_deg:     0.01,
            min_samples: 2,
        }
    }
}

impl ClusterConfig {
    pub fn validate(&self) -> FleetResult<()> {
        if !self.eps_deg.is_finite() || self.eps_deg <= 0.0 {
            return Err(FleetError::Config(format!(
                "cluster.eps_deg must be positive, got {}",
                self.eps_deg
            )));
        }
        if self.min_samples == 0 {
            return Err(FleetError::Config("cluster.min_samples must be at least 1".into()));
        }
        Ok(())
    }
}
