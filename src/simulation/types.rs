//! Core types for the traffic simulation

/// Index of a vehicle on its track.
///
/// Vehicles are addressed by their slot in the track's ordered
/// sequence: index 0 is the frontmost vehicle, and index i sits
/// immediately behind index i - 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VehicleId(pub usize);

/// One recorded trajectory entry.
///
/// Captures the state a vehicle committed for a tick, logged before the
/// position move happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrajectoryPoint {
    /// Cell the vehicle occupied when the tick committed.
    pub position: u64,
    /// Velocity committed for the tick, in cells per tick.
    pub velocity: u32,
}
