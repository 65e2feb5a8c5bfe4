use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use traffic_ca::simulation::{CsvExporter, Track};

#[derive(Parser)]
#[command(name = "traffic_ca")]
#[command(about = "Single-lane Nagel-Schreckenberg traffic simulation")]
struct Cli {
    /// Number of simulation ticks to run
    #[arg(long, default_value = "200")]
    ticks: u64,

    /// Number of vehicles on the track
    #[arg(long, default_value = "10")]
    vehicles: u64,

    /// Empty cells between consecutive vehicles at setup
    #[arg(long, default_value = "6")]
    spacing: u64,

    /// Maximum vehicle velocity in cells per tick
    #[arg(long, default_value = "5")]
    speed_limit: u32,

    /// Per-vehicle, per-tick probability of a random slowdown
    #[arg(long, default_value = "0.3")]
    slowdown: f64,

    /// Track length in cells (display only; the lane is open-ended)
    #[arg(long, default_value = "120")]
    cells: u64,

    /// RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Directory to write positions.csv and velocities.csv into
    #[arg(long)]
    out: Option<PathBuf>,

    /// Print the track occupancy row every N ticks (0 disables)
    #[arg(long, default_value = "10")]
    draw_every: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut track = match cli.seed {
        Some(seed) => Track::with_seed(cli.speed_limit, cli.slowdown, cli.cells, seed),
        None => Track::new(cli.speed_limit, cli.slowdown, cli.cells),
    }
    .context("invalid track configuration")?;

    // Front vehicle first; each following vehicle sits `spacing` empty
    // cells behind its leader.
    let front = cli.vehicles.saturating_sub(1) * (cli.spacing + 1);
    for i in 0..cli.vehicles {
        track.add_vehicle(front - i * (cli.spacing + 1))?;
    }

    info!(
        "starting run: {} vehicles, {} ticks, speed limit {}, slowdown probability {}",
        cli.vehicles, cli.ticks, cli.speed_limit, cli.slowdown
    );

    for tick in 1..=cli.ticks {
        track.tick()?;
        if cli.draw_every > 0 && tick % cli.draw_every == 0 {
            println!(
                "t={:>5} |{}| mean velocity {:.2}",
                tick,
                track.render_row(),
                track.mean_velocity()
            );
        }
    }

    println!();
    println!("=== Run complete ===");
    println!("Ticks run: {}", track.ticks_run());
    println!("Vehicles: {}", track.vehicles().len());
    println!("Mean velocity: {:.2}", track.mean_velocity());

    if let Some(dir) = &cli.out {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating output directory {}", dir.display()))?;
        let mut exporter = CsvExporter::new(dir)?;
        exporter.write_track(&track)?;
        exporter.finish()?;
        info!("trajectories written to {}", dir.display());
    }

    Ok(())
}
