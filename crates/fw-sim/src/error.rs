use fw_core::FleetError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("fleet ticker is already running")]
    AlreadyRunning,

    #[error("fleet state lock poisoned by a panicking holder")]
    Poisoned,

    #[error(transparent)]
    Fleet(#[from] FleetError),
}

impl SimError {
    /// The command named an unknown bus or alert.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SimError::Fleet(e) if e.is_not_found())
    }
}

pub type SimResult<T> = Result<T, SimError>;
