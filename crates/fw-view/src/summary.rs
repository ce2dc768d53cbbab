//! Fleet-wide summary statistics and load classification.

use std::fmt;

use fw_core::BusStatus;
use fw_fleet::{Bus, ClusterAlert};

/// Ratio above which a bus is [`LoadBand::High`].
pub const HIGH_LOAD_RATIO: f64 = 0.8;
/// Ratio above which a bus is [`LoadBand::Medium`].
pub const MEDIUM_LOAD_RATIO: f64 = 0.5;

// ── Occupancy ─────────────────────────────────────────────────────────────────

/// `occupancy / capacity`; `0.0` for a bus with no capacity.
pub fn occupancy_ratio(bus: &Bus) -> f64 {
    if bus.capacity == 0 {
        0.0
    } else {
        f64::from(bus.occupancy) / f64::from(bus.capacity)
    }
}

/// [`occupancy_ratio`] as a whole percentage, rounded half away from zero.
pub fn occupancy_percent(bus: &Bus) -> u32 {
    (occupancy_ratio(bus) * 100.0).round() as u32
}

/// Load classification of a bus (or the fleet average).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LoadBand {
    Low,
    Medium,
    High,
}

impl LoadBand {
    /// Bands are exclusive at the threshold: exactly `0.8` is `Medium`.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio > HIGH_LOAD_RATIO {
            LoadBand::High
        } else if ratio > MEDIUM_LOAD_RATIO {
            LoadBand::Medium
        } else {
            LoadBand::Low
        }
    }

    pub fn of(bus: &Bus) -> Self {
        Self::from_ratio(occupancy_ratio(bus))
    }

    /// Band of a whole-number percentage such as
    /// [`SummaryStatistics::average_occupancy_percent`].
    pub fn from_percent(percent: u32) -> Self {
        Self::from_ratio(f64::from(percent) / 100.0)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LoadBand::Low    => "low",
            LoadBand::Medium => "medium",
            LoadBand::High   => "high",
        }
    }
}

impl fmt::Display for LoadBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Summary ───────────────────────────────────────────────────────────────────

/// Headline health of the fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SystemStatus {
    Optimal,
    NeedsAttention,
}

impl SystemStatus {
    pub fn from_alert_count(active_alerts: usize) -> Self {
        if active_alerts > 0 { SystemStatus::NeedsAttention } else { SystemStatus::Optimal }
    }
}

impl fmt::Display for SystemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SystemStatus::Optimal        => "Optimal",
            SystemStatus::NeedsAttention => "Needs Attention",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SummaryStatistics {
    pub active_bus_count:          usize,
    pub active_alert_count:        usize,
    /// Buses with status `Alert`.
    pub buses_in_alert:            usize,
    /// Buses with status `Alternate`.
    pub buses_rerouted:            usize,
    /// `round(100 · Σoccupancy / Σcapacity)`, `0` when there is no capacity.
    pub average_occupancy_percent: u32,
}

impl SummaryStatistics {
    pub fn system_status(&self) -> SystemStatus {
        SystemStatus::from_alert_count(self.active_alert_count)
    }

    pub fn load_band(&self) -> LoadBand {
        LoadBand::from_percent(self.average_occupancy_percent)
    }
}

/// Aggregate counts and average load over `buses` and `alerts`.
pub fn summary_statistics(buses: &[Bus], alerts: &[ClusterAlert]) -> SummaryStatistics {
    let mut stats = SummaryStatistics {
        active_bus_count: buses.len(),
        active_alert_count: alerts.len(),
        ..SummaryStatistics::default()
    };
    let (mut occupied, mut capacity) = (0u64, 0u64);
    for bus in buses {
        match bus.status {
            BusStatus::Alert     => stats.buses_in_alert += 1,
            BusStatus::Alternate => stats.buses_rerouted += 1,
            BusStatus::Normal    => {}
        }
        occupied += u64::from(bus.occupancy);
        capacity += u64::from(bus.capacity);
    }
    if capacity > 0 {
        stats.average_occupancy_percent =
            (100.0 * occupied as f64 / capacity as f64).round() as u32;
    }
    stats
}
