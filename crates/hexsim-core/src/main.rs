//! Hex Ecosystem Simulation
//!
//! Runs the predator/prey world for a fixed number of ticks, printing the
//! grid after each one.

use clap::Parser;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hexsim_core::config::DEFAULT_CONFIG_PATH;
use hexsim_core::{Config, Ecosystem};

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "hexsim")]
#[command(about = "A predator/prey simulation on a hex grid")]
struct Args {
    /// Configuration file (defaults are used if it does not exist)
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Number of ticks to simulate
    #[arg(long)]
    ticks: Option<u64>,

    /// Width and height of the grid
    #[arg(long)]
    size: Option<i32>,

    /// Wait for Enter between frames
    #[arg(long)]
    step: bool,

    /// Pause between frames, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Print only the census line, not the grid
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = Config::load_or_default(&args.config)?;
    if let Some(seed) = args.seed {
        config.world.seed = seed;
    }
    if let Some(ticks) = args.ticks {
        config.run.ticks = ticks;
    }
    if let Some(size) = args.size {
        config.world.size = size;
    }
    if let Some(delay_ms) = args.delay_ms {
        config.run.delay_ms = delay_ms;
    }

    info!(
        seed = config.world.seed,
        ticks = config.run.ticks,
        size = config.world.size,
        "starting simulation"
    );

    let mut ecosystem = Ecosystem::from_config(&config)?;
    let delay = Duration::from_millis(config.run.delay_ms);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for _ in 0..config.run.ticks {
        if !args.quiet {
            writeln!(stdout, "{ecosystem}")?;
        }
        ecosystem.tick();
        writeln!(
            stdout,
            "[Tick {:>4}] {}",
            ecosystem.current_tick(),
            ecosystem.census()
        )?;
        stdout.flush()?;

        if args.step {
            let mut line = String::new();
            stdin.lock().read_line(&mut line)?;
        } else if !delay.is_zero() {
            thread::sleep(delay);
        }
    }

    if !args.quiet {
        writeln!(stdout, "{ecosystem}")?;
    }
    info!(
        ticks = ecosystem.current_tick(),
        census = %ecosystem.census(),
        "simulation complete"
    );
    Ok(())
}
