//! Error taxonomy for the simulation.
//!
//! Invalid configurations are caught at construction time, misuse at
//! the offending call site. Nothing is retried or silently recovered.

use thiserror::Error;

/// Errors surfaced by track construction, setup, ticking, and export.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("speed limit must be positive, got {0}")]
    InvalidSpeedLimit(u32),

    #[error("slowdown probability must be within [0, 1], got {0}")]
    InvalidSlowdownProbability(f64),

    #[error("cell count must be positive, got {0}")]
    InvalidCellCount(u64),

    #[error("cannot tick a track with no vehicles attached")]
    NoVehicles,

    #[error("cannot attach a vehicle after {0} tick(s) have run")]
    SetupClosed(u64),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, SimError>`.
pub type SimResult<T> = Result<T, SimError>;
