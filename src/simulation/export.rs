//! Trajectory export: tick-major tables and CSV output.
//!
//! The engine records history per vehicle; downstream analysis tools
//! usually want the transpose — row = tick, column = vehicle.
//! [`TrajectoryTable`] builds that view, and [`CsvExporter`] writes one
//! file for positions and one for velocities, each with a header row of
//! vehicle indices and a leading tick column.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use super::error::{SimError, SimResult};
use super::track::Track;
use super::types::TrajectoryPoint;

/// A tick-major view of one trajectory field across all vehicles.
#[derive(Debug)]
pub struct TrajectoryTable {
    vehicle_count: usize,
    /// rows[tick][vehicle]
    rows: Vec<Vec<u64>>,
}

impl TrajectoryTable {
    /// Transpose every vehicle's recorded positions into tick-major rows.
    pub fn positions(track: &Track) -> SimResult<Self> {
        Self::build(track, |point| point.position)
    }

    /// Transpose every vehicle's recorded velocities into tick-major rows.
    pub fn velocities(track: &Track) -> SimResult<Self> {
        Self::build(track, |point| point.velocity as u64)
    }

    fn build(track: &Track, field: impl Fn(&TrajectoryPoint) -> u64) -> SimResult<Self> {
        if track.vehicles().is_empty() {
            return Err(SimError::NoVehicles);
        }

        // Every trajectory has exactly ticks_run entries, so indexing by
        // tick is safe for all vehicles.
        let ticks = track.ticks_run() as usize;
        let mut rows = Vec::with_capacity(ticks);
        for tick in 0..ticks {
            let row = track
                .vehicles()
                .iter()
                .map(|vehicle| field(&vehicle.trajectory()[tick]))
                .collect();
            rows.push(row);
        }

        Ok(Self {
            vehicle_count: track.vehicles().len(),
            rows,
        })
    }

    /// Number of ticks (rows).
    pub fn tick_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of vehicles (columns).
    pub fn vehicle_count(&self) -> usize {
        self.vehicle_count
    }

    /// The recorded values at `tick`, one per vehicle in index order.
    pub fn row(&self, tick: usize) -> Option<&[u64]> {
        self.rows.get(tick).map(Vec::as_slice)
    }

    /// All rows in tick order.
    pub fn rows(&self) -> &[Vec<u64>] {
        &self.rows
    }
}

/// Writes a track's trajectories to `positions.csv` and
/// `velocities.csv` in a directory.
pub struct CsvExporter {
    positions: Writer<File>,
    velocities: Writer<File>,
    finished: bool,
}

impl CsvExporter {
    /// Open (or create) the two CSV files in `dir`. Headers are written
    /// by [`CsvExporter::write_track`], once the vehicle count is known.
    pub fn new(dir: &Path) -> SimResult<Self> {
        let positions = Writer::from_path(dir.join("positions.csv"))?;
        let velocities = Writer::from_path(dir.join("velocities.csv"))?;
        Ok(Self {
            positions,
            velocities,
            finished: false,
        })
    }

    /// Write the full run: a header row of vehicle indices with a
    /// leading `tick` column, then one row per completed tick.
    pub fn write_track(&mut self, track: &Track) -> SimResult<()> {
        let positions = TrajectoryTable::positions(track)?;
        let velocities = TrajectoryTable::velocities(track)?;

        let mut header = vec!["tick".to_string()];
        header.extend((0..positions.vehicle_count()).map(|i| i.to_string()));
        self.positions.write_record(&header)?;
        self.velocities.write_record(&header)?;

        for (tick, row) in positions.rows().iter().enumerate() {
            self.positions.write_record(Self::record(tick, row))?;
        }
        for (tick, row) in velocities.rows().iter().enumerate() {
            self.velocities.write_record(Self::record(tick, row))?;
        }
        Ok(())
    }

    /// Flush both files. Safe to call more than once.
    pub fn finish(&mut self) -> SimResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.positions.flush()?;
        self.velocities.flush()?;
        Ok(())
    }

    fn record(tick: usize, row: &[u64]) -> Vec<String> {
        let mut record = vec![tick.to_string()];
        record.extend(row.iter().map(u64::to_string));
        record
    }
}
