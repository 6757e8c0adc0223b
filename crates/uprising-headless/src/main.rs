//! Headless UPRISING runner.
//!
//! Reports go to stdout as JSON; logs go to stderr.

use std::io::Write;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use uprising_core::constants::DT;
use uprising_headless::runner::DEFAULT_MAX_TICKS;
use uprising_headless::{run_batch, run_session, HeadlessError, RunConfig, Strategy};

#[derive(Parser)]
#[command(name = "uprising-headless")]
#[command(about = "Run UPRISING sessions without presentation")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Pretty-print JSON output
    #[arg(short, long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one session and print its report
    Run {
        #[command(flatten)]
        session: SessionArgs,
    },
    /// Play consecutive seeds and print the aggregate
    Batch {
        #[command(flatten)]
        session: SessionArgs,

        /// Number of sessions
        #[arg(short, long, default_value = "20")]
        count: u32,
    },
}

#[derive(clap::Args)]
struct SessionArgs {
    /// Random seed (first seed for batches)
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Tick length in seconds
    #[arg(long, default_value_t = DT)]
    dt: f32,

    /// Stop after this many playing ticks
    #[arg(short, long, default_value_t = DEFAULT_MAX_TICKS)]
    max_ticks: u64,

    /// Scripted player
    #[arg(long, value_enum, default_value_t = Strategy::Autopilot)]
    strategy: Strategy,
}

impl SessionArgs {
    fn config(&self) -> RunConfig {
        RunConfig {
            seed: self.seed,
            dt: self.dt,
            max_ticks: self.max_ticks,
            strategy: self.strategy,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match cli.command {
        Some(Commands::Run { session }) => {
            run_session(&session.config()).and_then(|report| emit(&report, cli.pretty))
        }
        Some(Commands::Batch { session, count }) => {
            run_batch(&session.config(), count).and_then(|summary| emit(&summary, cli.pretty))
        }
        None => run_session(&RunConfig::default()).and_then(|report| emit(&report, cli.pretty)),
    };

    if let Err(e) = result {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

fn emit<T: Serialize>(value: &T, pretty: bool) -> Result<(), HeadlessError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}
