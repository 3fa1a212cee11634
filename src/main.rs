//! Astroshot headless runner.
//!
//! Runs the simulation without a window: the input collaborator reports idle
//! keys every frame and ships marked `autopilot` in the configuration fly
//! themselves. The run stops on a game outcome or after the frame budget.
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run --release -- --frames 7200 --snapshot last.json
//! ```

use std::path::PathBuf;

use astroshot::resources::gameconfig::GameConfig;
use astroshot::resources::input::InputState;
use astroshot::simulation::{Simulation, StepOutcome};
use clap::Parser;

/// Astroshot arcade shooter simulation core
#[derive(Parser)]
#[command(version, about = "Headless runner for the astroshot simulation core")]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Stop after this many frames.
    #[arg(long, value_name = "N", default_value_t = 3600)]
    frames: u64,

    /// Override the RNG seed from the configuration.
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Write the final frame snapshot as JSON.
    #[arg(long, value_name = "PATH")]
    snapshot: Option<PathBuf>,

    /// Write the effective configuration to PATH and exit.
    #[arg(long, value_name = "PATH")]
    write_config: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{}; using defaults", e);
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }

    // Early-exit: write the configuration and quit
    if let Some(path) = cli.write_config {
        config.config_path = path;
        if let Err(e) = config.save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Configuration written to {}", config.config_path.display());
        return;
    }

    let mut sim = Simulation::new(&config);
    let mut outcome = StepOutcome::Running;
    for _ in 0..cli.frames {
        outcome = sim.step(InputState::idle());
        match outcome {
            StepOutcome::Running => {}
            StepOutcome::Finished(_) => break,
            StepOutcome::Quit => std::process::exit(0),
        }
    }

    match outcome {
        StepOutcome::Finished(end_game) => {
            println!("Game over after {} frames: {:?}", sim.frame(), end_game)
        }
        _ => println!("No winner after {} frames", sim.frame()),
    }

    if let Some(path) = cli.snapshot {
        let written = serde_json::to_string_pretty(&sim.snapshot())
            .map_err(|e| e.to_string())
            .and_then(|json| std::fs::write(&path, json).map_err(|e| e.to_string()));
        match written {
            Ok(()) => log::info!("Snapshot written to {}", path.display()),
            Err(e) => {
                eprintln!("Error writing snapshot: {e}");
                std::process::exit(1);
            }
        }
    }
}
