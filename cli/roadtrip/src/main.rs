//! Roadtrip CLI — shortest-distance and shortest-time driving directions.

mod commands;
mod config;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use config::{OutputFormat, RoadtripConfig, CONFIG_FILE};
use roadtrip_map::{TripMetric, MAX_PRECISION};

#[derive(Parser)]
#[command(name = "roadtrip", version, about = "Driving directions over a road map")]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print directions for every trip in the input
    Directions {
        /// Input file (default: standard input)
        input: Option<PathBuf>,
        /// Output format (text, json)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        /// Decimals for miles, speeds and seconds (0-12)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=MAX_PRECISION as i64))]
        precision: Option<u8>,
        /// Plan trips even if the map is not strongly connected
        #[arg(long)]
        allow_disconnected: bool,
    },
    /// Summarize a road map: counts and strong connectivity
    Check {
        /// Input file (default: standard input)
        input: Option<PathBuf>,
    },
    /// Plan a single trip between two locations
    Route {
        /// Input file (default: standard input)
        input: Option<PathBuf>,
        /// Start location id
        #[arg(long)]
        from: i64,
        /// Destination location id
        #[arg(long)]
        to: i64,
        /// What to minimize
        #[arg(long, value_enum, default_value_t = MetricArg::Distance)]
        metric: MetricArg,
        /// Output format (text, json)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        /// Decimals for miles, speeds and seconds (0-12)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=MAX_PRECISION as i64))]
        precision: Option<u8>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum MetricArg {
    Distance,
    Time,
}

impl From<MetricArg> for TripMetric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::Distance => TripMetric::Distance,
            MetricArg::Time => TripMetric::Time,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

/// Log to stderr. `RUST_LOG` wins unless `--verbose` is given.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let config = match RoadtripConfig::find_and_load(&cwd)? {
        Some((config, dir)) => {
            debug!(dir = %dir.display(), "loaded {CONFIG_FILE}");
            config
        }
        None => RoadtripConfig::default(),
    };

    match cli.command {
        Commands::Directions {
            input,
            format,
            precision,
            allow_disconnected,
        } => commands::directions::run(
            input.as_deref(),
            format.unwrap_or(config.output.format),
            precision.map_or(config.output.precision, usize::from),
            config.map.require_strongly_connected && !allow_disconnected,
        ),

        Commands::Check { input } => commands::check::run(input.as_deref()),

        Commands::Route {
            input,
            from,
            to,
            metric,
            format,
            precision,
        } => commands::route::run(
            input.as_deref(),
            from,
            to,
            metric.into(),
            format.unwrap_or(config.output.format),
            precision.map_or(config.output.precision, usize::from),
        ),
    }
}
