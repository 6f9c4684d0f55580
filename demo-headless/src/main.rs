//! Headless egg cooling run
//!
//! Runs the simulation to `t_final`, printing a progress table, a text heatmap
//! of the final frame and, optionally, a JSON summary or a validation report.
//!
//! # Usage
//!
//! ```bash
//! cargo run --release --package demo-headless -- --resolution 100 --duration 200
//! cargo run --release --package demo-headless -- --config egg.json --json
//! RUST_LOG=debug cargo run --package demo-headless -- --validate
//! ```

mod validation;

use clap::Parser;
use egg_cooling_core::params::{
    BATH_TEMP, DEFAULT_DURATION, DEFAULT_RESOLUTION, EGG_DIFFUSIVITY, EGG_INITIAL_TEMP, EGG_RADIUS,
};
use egg_cooling_core::render::ascii_heatmap;
use egg_cooling_core::{
    Backend, ConfigError, CoolingSimulation, FieldStats, PhysicalInputs, SimulationParameters,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Egg cooling demo with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "egg-cooling-demo")]
#[command(about = "Explicit finite-difference cooling of an egg in a cold bath", long_about = None)]
struct Args {
    /// Egg radius in metres
    #[arg(long, default_value_t = EGG_RADIUS)]
    radius: f64,

    /// Initial egg temperature in °C
    #[arg(long, default_value_t = EGG_INITIAL_TEMP, allow_negative_numbers = true)]
    initial_temp: f64,

    /// Bath temperature in °C
    #[arg(long, default_value_t = BATH_TEMP, allow_negative_numbers = true)]
    ambient_temp: f64,

    /// Thermal diffusivity in m²/s
    #[arg(short = 'D', long, default_value_t = EGG_DIFFUSIVITY)]
    diffusivity: f64,

    /// Grid points per axis
    #[arg(short = 'n', long, default_value_t = DEFAULT_RESOLUTION)]
    resolution: usize,

    /// Simulated duration in seconds
    #[arg(short, long, default_value_t = DEFAULT_DURATION)]
    duration: f64,

    /// Load parameters from a JSON file instead of the flags above
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Report interval in frames
    #[arg(short, long, default_value_t = 250)]
    report_every: usize,

    /// Heatmap size in characters per side (0 = no heatmap)
    #[arg(long, default_value_t = 30)]
    heatmap_size: usize,

    /// Step rows on the rayon thread pool
    #[arg(short, long)]
    parallel: bool,

    /// Print a JSON summary instead of the human-readable report
    #[arg(long)]
    json: bool,

    /// Run validation checks on the configured scenario
    #[arg(short, long)]
    validate: bool,
}

/// Errors that stop the demo before the simulation starts
#[derive(Debug)]
enum CliError {
    /// Failed to read the config file
    Read(PathBuf, std::io::Error),
    /// Config file is not valid JSON for the parameter set
    Parse(PathBuf, serde_json::Error),
    /// Parameters are physically meaningless
    Config(ConfigError),
    /// Failed to serialize the run summary
    Serialize(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Read(path, err) => write!(f, "Failed to read {}: {err}", path.display()),
            CliError::Parse(path, err) => write!(f, "Failed to parse {}: {err}", path.display()),
            CliError::Config(err) => write!(f, "Invalid configuration: {err}"),
            CliError::Serialize(err) => write!(f, "Failed to serialize summary: {err}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::Config(err)
    }
}

/// Machine-readable result of a run
#[derive(Debug, Serialize)]
struct RunSummary {
    parameters: SimulationParameters,
    dx: f64,
    dt: f64,
    frames: usize,
    elapsed_time: f64,
    final_stats: FieldStats,
}

fn load_params(args: &Args) -> Result<SimulationParameters, CliError> {
    match &args.config {
        Some(path) => read_config(path),
        None => Ok(SimulationParameters::new(PhysicalInputs {
            radius: args.radius,
            initial_temp: args.initial_temp,
            ambient_temp: args.ambient_temp,
            diffusivity: args.diffusivity,
            resolution: args.resolution,
            duration: args.duration,
        })?),
    }
}

fn read_config(path: &Path) -> Result<SimulationParameters, CliError> {
    let text =
        std::fs::read_to_string(path).map_err(|e| CliError::Read(path.to_path_buf(), e))?;
    let params = serde_json::from_str(&text).map_err(|e| CliError::Parse(path.to_path_buf(), e))?;
    info!("Loaded parameters from {}", path.display());
    Ok(params)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Returns `Ok(false)` if validation was requested and failed
fn run(args: &Args) -> Result<bool, CliError> {
    let params = load_params(args)?;
    let backend = if args.parallel {
        Backend::Parallel
    } else {
        Backend::Serial
    };
    let mut sim = CoolingSimulation::new(params, backend);

    if args.json {
        sim.run_to_completion();
        let summary = RunSummary {
            parameters: params,
            dx: params.dx(),
            dt: params.dt(),
            frames: sim.frame(),
            elapsed_time: sim.elapsed_time(),
            final_stats: sim.stats(),
        };
        let text = serde_json::to_string_pretty(&summary).map_err(CliError::Serialize)?;
        println!("{text}");
    } else {
        print_report(&mut sim, args);
    }

    if args.validate {
        return Ok(validation::run_validation(&params));
    }
    Ok(true)
}

fn print_report(sim: &mut CoolingSimulation, args: &Args) {
    let params = *sim.params();

    println!("=== Egg Cooling Simulation ===\n");
    println!(
        "Egg: radius {:.1} mm at {:.1}°C, bath at {:.1}°C",
        params.radius() * 1000.0,
        params.initial_temp(),
        params.ambient_temp()
    );
    println!(
        "Grid: {}x{} points, dx = {:.3e} m, dt = {:.4} s (D·dt/dx² = {:.3})",
        params.resolution(),
        params.resolution(),
        params.dx(),
        params.dt(),
        params.stability_number()
    );
    println!(
        "Duration: {:.1} s over {} frames{}\n",
        params.duration(),
        params.frame_count(),
        if sim.is_parallel() { " (parallel)" } else { "" }
    );

    println!("  Frame |  Time(s) | Center(°C) |  Min(°C) |  Max(°C) | Mean(°C)");
    println!("--------|----------|------------|----------|----------|---------");

    let report_every = args.report_every.max(1);
    print_row(sim);
    while !sim.is_complete() {
        sim.advance_by(report_every);
        print_row(sim);
    }

    let stats = sim.stats();
    println!("\n=== Simulation Complete ===");
    println!("Final time: {:.2} s", sim.elapsed_time());
    println!("Center temperature: {:.2}°C", stats.center);
    println!(
        "Hottest point: {:.2}°C at ({:.2}, {:.2}) mm",
        stats.max,
        stats.hottest_position.x * 1000.0,
        stats.hottest_position.y * 1000.0
    );
    println!("Mean egg temperature: {:.2}°C\n", stats.mean);

    if args.heatmap_size > 0 {
        print!("{}", ascii_heatmap(sim.field(), &params, args.heatmap_size));
    }
}

fn print_row(sim: &CoolingSimulation) {
    let stats = sim.stats();
    println!(
        "{:7} | {:8.2} | {:10.3} | {:8.3} | {:8.3} | {:8.3}",
        sim.frame(),
        sim.elapsed_time(),
        stats.center,
        stats.min,
        stats.max,
        stats.mean
    );
}
