//! Bus status and alert severity enums shared across the workspace.

use std::fmt;
use std::str::FromStr;

use crate::FleetError;

/// Operational status of one bus.
///
/// ```text
/// Normal ──raise_alert──▶ Alert ──reroute──▶ Alternate
///    ▲                      │                    │
///    └──────── resolve_alert (owning alert) ◀────┘
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BusStatus {
    /// Running its scheduled route (initial state).
    #[default]
    Normal,
    /// Part of a detected cluster; held at zero speed until rerouted or resolved.
    Alert,
    /// Rerouted by an operator onto a suggested detour.
    Alternate,
}

impl BusStatus {
    /// Display priority: lower sorts first.  Buses needing attention come
    /// before rerouted ones, which come before normal ones.
    #[inline]
    pub fn priority(self) -> u8 {
        match self {
            BusStatus::Alert     => 0,
            BusStatus::Alternate => 1,
            BusStatus::Normal    => 2,
        }
    }

    /// `true` if the bus is held stationary by the simulator.
    #[inline]
    pub fn is_held(self) -> bool {
        matches!(self, BusStatus::Alert)
    }

    /// Lowercase label.
    pub fn as_str(self) -> &'static str {
        match self {
            BusStatus::Normal    => "normal",
            BusStatus::Alert     => "alert",
            BusStatus::Alternate => "alternate",
        }
    }
}

impl fmt::Display for BusStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BusStatus {
    type Err = FleetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal"    => Ok(BusStatus::Normal),
            "alert"     => Ok(BusStatus::Alert),
            "alternate" => Ok(BusStatus::Alternate),
            other       => Err(FleetError::Parse(format!("unknown bus status {other:?}"))),
        }
    }
}

/// Impact of a cluster alert.  Ordered: `Low < Medium < High`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    #[default]
    Low,
    Medium,
    High,
}

impl Severity {
    /// One step up, saturating at `High`.
    #[inline]
    pub fn escalate(self) -> Severity {
        match self {
            Severity::Low                     => Severity::Medium,
            Severity::Medium | Severity::High => Severity::High,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Low    => "low",
            Severity::Medium => "medium",
            Severity::High   => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = FleetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low"    => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high"   => Ok(Severity::High),
            other    => Err(FleetError::Parse(format!("unknown severity {other:?}"))),
        }
    }
}
