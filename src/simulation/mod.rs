//! Standalone single-lane traffic simulation
//!
//! This module contains the full cellular-automaton engine: vehicles on
//! a single lane, the per-tick four-rule update, and the trajectory
//! export surface. It has no UI dependencies and can be driven from a
//! console binary or from tests.

mod error;
mod export;
mod track;
mod types;
mod vehicle;

pub use error::{SimError, SimResult};
pub use export::{CsvExporter, TrajectoryTable};
pub use track::Track;
pub use types::{TrajectoryPoint, VehicleId};
pub use vehicle::Vehicle;
