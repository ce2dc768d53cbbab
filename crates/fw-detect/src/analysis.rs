//! Per-cluster risk analysis.
//!
//! Risk starts at `Low` and is adjusted by four rules, applied in order:
//!
//! | Rule                                   | Effect                 |
//! |----------------------------------------|------------------------|
//! | mean speed below [`SLOW_SPEED_KMH`]     | set to `Medium`        |
//! | mean speed above [`FAST_SPEED_KMH`]     | set to `High`          |
//! | mean occupancy above [`CROWDED_OCCUPANCY`] | escalate one level  |
//! | at least [`LARGE_CLUSTER`] buses        | escalate one level     |
//!
//! Escalation saturates at `High`.

use fw_core::{BusId, GeoPoint, Severity};
use fw_fleet::{Bus, NewAlert};

pub const SLOW_SPEED_KMH: f64 = 20.0;
pub const FAST_SPEED_KMH: f64 = 60.0;
pub const CROWDED_OCCUPANCY: f64 = 50.0;
pub const LARGE_CLUSTER: usize = 3;

const HIGH_ADVICE: &[&str] = &[
    "Consider alternative routes",
    "Wait for next bus",
    "Check real-time updates",
];
const MEDIUM_ADVICE: &[&str] = &[
    "Monitor bus status",
    "Consider alternative timing",
    "Check for delays",
];
const LOW_ADVICE: &[&str] = &["Normal service", "Regular monitoring recommended"];

/// Passenger-facing advice for a risk level.
pub fn recommendations_for(risk: Severity) -> &'static [&'static str] {
    match risk {
        Severity::High   => HIGH_ADVICE,
        Severity::Medium => MEDIUM_ADVICE,
        Severity::Low    => LOW_ADVICE,
    }
}

/// The outcome of analysing one cluster of buses.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterAnalysis {
    /// Members in fleet order.
    pub bus_ids:           Vec<BusId>,
    pub centroid:          GeoPoint,
    /// Ground distance from the centroid to the farthest member, metres.
    pub radius_m:          f64,
    pub average_speed_kmh: f64,
    pub average_occupancy: f64,
    pub risk:              Severity,
    /// Which rules fired, in rule order.
    pub notes:             Vec<String>,
    pub recommendations:   &'static [&'static str],
}

impl ClusterAnalysis {
    /// Analyse a non-empty group of buses.  Returns `None` for an empty group.
    pub fn of(members: &[&Bus]) -> Option<Self> {
        let centroid = GeoPoint::centroid(members.iter().map(|b| b.position))?;
        let radius_m = members
            .iter()
            .map(|b| centroid.distance_m(b.position))
            .fold(0.0, f64::max);
        let n = members.len() as f64;
        let average_speed_kmh = members.iter().map(|b| f64::from(b.speed_kmh)).sum::<f64>() / n;
        let average_occupancy = members.iter().map(|b| f64::from(b.occupancy)).sum::<f64>() / n;

        let mut risk = Severity::Low;
        let mut notes = Vec::new();

        if average_speed_kmh < SLOW_SPEED_KMH {
            risk = Severity::Medium;
            notes.push("Low speed indicates possible traffic or stops".to_owned());
        } else if average_speed_kmh > FAST_SPEED_KMH {
            risk = Severity::High;
            notes.push("High speed with multiple buses indicates potential safety risk".to_owned());
        }
        if average_occupancy > CROWDED_OCCUPANCY {
            risk = risk.escalate();
            notes.push("High passenger count detected".to_owned());
        }
        if members.len() >= LARGE_CLUSTER {
            risk = risk.escalate();
            notes.push(format!("Large cluster of {} buses detected", members.len()));
        }

        Some(Self {
            bus_ids: members.iter().map(|b| b.id).collect(),
            centroid,
            radius_m,
            average_speed_kmh,
            average_occupancy,
            risk,
            notes,
            recommendations: recommendations_for(risk),
        })
    }

    pub fn size(&self) -> usize {
        self.bus_ids.len()
    }

    /// Notes joined with `" | "`, or `"Normal conditions"` when none fired.
    pub fn summary(&self) -> String {
        if self.notes.is_empty() {
            "Normal conditions".to_owned()
        } else {
            self.notes.join(" | ")
        }
    }

    /// A draft alert for this cluster, located at its centroid.
    pub fn to_alert_draft(&self) -> NewAlert {
        NewAlert::new(self.bus_ids.clone(), self.centroid, self.risk)
    }
}
