//! Vehicle state for the traffic simulation
//!
//! A vehicle is a thin state holder. All policy — speed limit,
//! car-following, random slowdown — lives in the track's update engine,
//! which is the only caller of the mutating methods here.

use super::types::TrajectoryPoint;

/// A single vehicle on the track.
#[derive(Debug, Clone)]
pub struct Vehicle {
    velocity: u32,
    position: u64,
    trajectory: Vec<TrajectoryPoint>,
}

impl Vehicle {
    /// Create a stationary vehicle at `position` with an empty trajectory.
    pub(crate) fn new(position: u64) -> Self {
        Self {
            velocity: 0,
            position,
            trajectory: Vec::new(),
        }
    }

    /// Current velocity in cells per tick.
    pub fn velocity(&self) -> u32 {
        self.velocity
    }

    /// Current cell position.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Every recorded (position, velocity) pair, one per completed tick,
    /// in tick order.
    pub fn trajectory(&self) -> &[TrajectoryPoint] {
        &self.trajectory
    }

    /// Overwrite the velocity with the engine's committed candidate.
    /// No clamping happens here; range policy belongs to the engine.
    pub(crate) fn set_velocity(&mut self, velocity: u32) {
        self.velocity = velocity;
    }

    /// Log the pre-move state, then move by the current velocity.
    ///
    /// The trajectory grows by exactly one entry per call, and position
    /// only ever changes through this method.
    pub(crate) fn advance(&mut self) {
        self.trajectory.push(TrajectoryPoint {
            position: self.position,
            velocity: self.velocity,
        });
        self.position += self.velocity as u64;
    }
}
