//! Fleet error type.
//!
//! Two families matter to callers: *not found* (a command named an unknown
//! bus or alert) and *invalid state* (a command or seed would break a fleet
//! invariant).  Both are local to a single command; the store validates
//! before it mutates, so a failed command leaves state untouched.

use thiserror::Error;

use crate::{AlertId, BusId};

/// The top-level error type for `fw-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum FleetError {
    #[error("bus {0} not found")]
    BusNotFound(BusId),

    #[error("alert {0} not found")]
    AlertNotFound(AlertId),

    #[error("bus {bus} occupancy {occupancy} exceeds capacity {capacity}")]
    OccupancyExceedsCapacity {
        bus:       BusId,
        occupancy: u32,
        capacity:  u32,
    },

    #[error("bus {bus} already belongs to active alert {alert}")]
    BusAlreadyInAlert { bus: BusId, alert: AlertId },

    #[error("alert names bus {bus} which is not in the fleet")]
    UnknownBusInAlert { bus: BusId },

    #[error("alert must name at least one bus")]
    EmptyAlert,

    #[error("bus {0} appears more than once")]
    DuplicateBus(BusId),

    #[error("alert {0} appears more than once")]
    DuplicateAlert(AlertId),

    #[error("no alert ids left to allocate")]
    AlertIdsExhausted,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid id: {0:?}")]
    ParseId(String),

    #[error("parse error: {0}")]
    Parse(String),
}

impl FleetError {
    /// `true` for errors caused by an unknown bus or alert id.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FleetError::BusNotFound(_) | FleetError::AlertNotFound(_))
    }

    /// `true` for errors caused by a broken fleet invariant.
    pub fn is_invalid_state(&self) -> bool {
        matches!(
            self,
            FleetError::OccupancyExceedsCapacity { .. }
                | FleetError::BusAlreadyInAlert { .. }
                | FleetError::UnknownBusInAlert { .. }
                | FleetError::EmptyAlert
                | FleetError::DuplicateBus(_)
                | FleetError::DuplicateAlert(_)
                | FleetError::AlertIdsExhausted
        )
    }
}

/// Shorthand result type for all `fw-*` crates.
pub type FleetResult<T> = Result<T, FleetError>;
