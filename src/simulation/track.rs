//! The track and its per-tick update engine.
//!
//! All of the model's policy lives here: parameter validation, the
//! setup/run lifecycle, and the Nagel–Schreckenberg four-rule update.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::error::{SimError, SimResult};
use super::types::VehicleId;
use super::vehicle::Vehicle;

/// A single-lane track: fixed parameters, an ordered vehicle sequence,
/// and the seeded random source feeding the slowdown rule.
///
/// Vehicle order encodes the "ahead of" relation: index 0 is the
/// frontmost vehicle and is never constrained by a leader; index i
/// follows index i - 1. The order is fixed once the first tick runs.
#[derive(Debug)]
pub struct Track {
    speed_limit: u32,
    slowdown_probability: f64,
    cell_count: u64,
    vehicles: Vec<Vehicle>,
    rng: StdRng,
    ticks_run: u64,
}

impl Track {
    /// Create a track with a freshly seeded RNG.
    ///
    /// Fails fast on invalid parameters: the per-tick engine assumes a
    /// validated configuration and performs no checks of its own.
    pub fn new(speed_limit: u32, slowdown_probability: f64, cell_count: u64) -> SimResult<Self> {
        Self::with_rng(
            speed_limit,
            slowdown_probability,
            cell_count,
            StdRng::from_rng(&mut rand::rng()),
        )
    }

    /// Create a track with a deterministic RNG for reproducible runs.
    ///
    /// The same seed, parameters, and vehicle setup produce bit-identical
    /// trajectories: the engine consumes exactly one draw per vehicle per
    /// tick, in index order.
    pub fn with_seed(
        speed_limit: u32,
        slowdown_probability: f64,
        cell_count: u64,
        seed: u64,
    ) -> SimResult<Self> {
        Self::with_rng(
            speed_limit,
            slowdown_probability,
            cell_count,
            StdRng::seed_from_u64(seed),
        )
    }

    fn with_rng(
        speed_limit: u32,
        slowdown_probability: f64,
        cell_count: u64,
        rng: StdRng,
    ) -> SimResult<Self> {
        if speed_limit == 0 {
            return Err(SimError::InvalidSpeedLimit(speed_limit));
        }
        // NaN fails the range check and is rejected along with it.
        if !(0.0..=1.0).contains(&slowdown_probability) {
            return Err(SimError::InvalidSlowdownProbability(slowdown_probability));
        }
        if cell_count == 0 {
            return Err(SimError::InvalidCellCount(cell_count));
        }

        Ok(Self {
            speed_limit,
            slowdown_probability,
            cell_count,
            vehicles: Vec::new(),
            rng,
            ticks_run: 0,
        })
    }

    /// Attach a stationary vehicle at `position`, behind every vehicle
    /// already on the track.
    ///
    /// Setup closes once the first tick runs; attaching after that is a
    /// misuse error.
    pub fn add_vehicle(&mut self, position: u64) -> SimResult<VehicleId> {
        if self.ticks_run > 0 {
            return Err(SimError::SetupClosed(self.ticks_run));
        }
        self.vehicles.push(Vehicle::new(position));
        Ok(VehicleId(self.vehicles.len() - 1))
    }

    /// Advance the simulation by one tick.
    ///
    /// Applies the four-rule update to every vehicle in index order:
    /// accelerate toward the speed limit, cap to the gap behind the
    /// leader, maybe slow down at random, then commit and move. The
    /// leader at index i - 1 has already completed its move when vehicle
    /// i is processed, so the gap is measured to the leader's
    /// end-of-tick position. That sequential ordering is part of the
    /// model's definition, not an implementation detail.
    pub fn tick(&mut self) -> SimResult<()> {
        if self.vehicles.is_empty() {
            return Err(SimError::NoVehicles);
        }

        for i in 0..self.vehicles.len() {
            // Rule 1: accelerate, capped at the speed limit.
            let mut candidate = (self.vehicles[i].velocity() + 1).min(self.speed_limit);

            // Rule 2: never outrun the open cells behind the leader.
            // The gap can be negative when vehicles were attached on
            // overlapping cells; the clamp stops the follower dead.
            if i > 0 {
                let gap = self.vehicles[i - 1].position() as i64
                    - self.vehicles[i].position() as i64
                    - 1;
                candidate = (candidate as i64).min(gap).max(0) as u32;
            }

            // Rule 3: random slowdown. One draw per vehicle per tick,
            // consumed whether or not it applies, so the draw sequence
            // stays aligned across configurations. Velocities of 0 and
            // 1 are exempt.
            let draw: f64 = self.rng.random();
            if draw < self.slowdown_probability && candidate > 1 {
                candidate -= 1;
            }

            // Rule 4: commit the velocity, log the pre-move state, move.
            self.vehicles[i].set_velocity(candidate);
            self.vehicles[i].advance();
        }

        self.ticks_run += 1;
        Ok(())
    }

    /// Run `ticks` consecutive update passes.
    pub fn run(&mut self, ticks: u64) -> SimResult<()> {
        for _ in 0..ticks {
            self.tick()?;
        }
        Ok(())
    }

    /// Maximum permissible velocity on this track.
    pub fn speed_limit(&self) -> u32 {
        self.speed_limit
    }

    /// Per-vehicle, per-tick probability of a random slowdown.
    pub fn slowdown_probability(&self) -> f64 {
        self.slowdown_probability
    }

    /// Track length in cells. Informational in the linear model; the
    /// lane is open-ended and positions grow without bound.
    pub fn cell_count(&self) -> u64 {
        self.cell_count
    }

    /// Number of completed ticks.
    pub fn ticks_run(&self) -> u64 {
        self.ticks_run
    }

    /// All vehicles in front-to-back order.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Look up a single vehicle by index.
    pub fn vehicle(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.get(id.0)
    }

    /// Mean of the current velocities, or 0.0 for an empty track.
    pub fn mean_velocity(&self) -> f64 {
        if self.vehicles.is_empty() {
            return 0.0;
        }
        let total: u64 = self.vehicles.iter().map(|v| v.velocity() as u64).sum();
        total as f64 / self.vehicles.len() as f64
    }

    /// One-line occupancy snapshot of cells [0, cell_count).
    ///
    /// Empty cells render as '.', occupied cells as the vehicle's
    /// velocity digit ('#' above 9). Vehicles that have driven past the
    /// displayed range drop off the right edge.
    pub fn render_row(&self) -> String {
        let mut row = vec!['.'; self.cell_count as usize];
        for vehicle in &self.vehicles {
            let position = vehicle.position();
            if position < self.cell_count {
                row[position as usize] = match vehicle.velocity() {
                    v @ 0..=9 => char::from_digit(v, 10).unwrap_or('#'),
                    _ => '#',
                };
            }
        }
        row.into_iter().collect()
    }
}
