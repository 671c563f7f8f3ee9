//! Sampler CLI - Command Line Access to Cached Sample Streams
//!
//! This is the operational entry point for the sampler_core library.
//!
//! # Commands
//!
//! - `sampler draw --kind vector -n 10` - Print typed samples in [0, 1)
//! - `sampler position --start -1 --end 1` - Print samples mapped into a range
//! - `sampler global --processes 4` - Simulate process-consistent global draws
//! - `sampler inspect` - Summarise the cached buffer

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::draw::SampleKind;
use config::{build_settings, Overrides};

/// Cached uniform sample streams from the command line
#[derive(Parser)]
#[command(name = "sampler")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level or tracing filter; RUST_LOG takes precedence
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Stream seed
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Number of cached samples; negative for an uncached stream
    #[arg(long, global = true, allow_hyphen_values = true)]
    count: Option<i64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print typed samples whose components lie in [0, 1)
    Draw {
        /// Value type to sample
        #[arg(short, long, value_enum, default_value = "scalar")]
        kind: SampleKind,

        /// Number of values
        #[arg(short, default_value = "10")]
        n: usize,
    },

    /// Print scalar samples mapped into [start, end)
    Position {
        /// Range start
        #[arg(long, allow_hyphen_values = true)]
        start: f64,

        /// Range end
        #[arg(long, allow_hyphen_values = true)]
        end: f64,

        /// Number of values
        #[arg(short, default_value = "10")]
        n: usize,
    },

    /// Simulate global draws across in-process members
    Global {
        /// Number of simulated processes
        #[arg(short, long, default_value = "2")]
        processes: usize,

        /// Number of global draws per member
        #[arg(short, default_value = "5")]
        n: usize,
    },

    /// Summarise the cached sample buffer
    Inspect {
        /// Number of leading samples to print
        #[arg(long, default_value = "8")]
        head: usize,
    },
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let overrides = Overrides {
        seed: cli.seed,
        count: cli.count,
        log_level: cli
            .log_level
            .clone()
            .or_else(|| cli.verbose.then(|| "debug".to_string())),
    };
    let settings = build_settings(cli.config.as_deref(), &overrides)?;

    // Initialise tracing
    init_tracing(&settings.log_level);

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    info!(
        seed = settings.sampler.seed(),
        cache_mode = ?settings.sampler.cache_mode(),
        "Sampler configuration loaded"
    );

    let sampler = &settings.sampler;
    match cli.command {
        Commands::Draw { kind, n } => commands::draw::run(sampler, kind, n),
        Commands::Position { start, end, n } => commands::position::run(sampler, start, end, n),
        Commands::Global { processes, n } => commands::global::run(sampler, processes, n),
        Commands::Inspect { head } => commands::inspect::run(sampler, head),
    }
}
