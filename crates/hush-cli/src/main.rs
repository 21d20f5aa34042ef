//! Hush CLI - silence gating from the command line
//!
//! # Usage
//!
//! ```bash
//! # Full policy decision
//! hush decide --coherence 0.9 --drift 0.1
//!
//! # Two-threshold gate
//! hush gate --coherence 0.5 --drift 0.1
//!
//! # Consensus across candidate responses
//! hush consensus "yes" "yes" "no"
//!
//! # Show defaults and configured providers
//! hush info
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{consensus, decide, gate, info};

/// Hush - silence as a control primitive
///
/// Gate AI pipeline output on coherence, drift, conflict, ambiguity,
/// and continuity. When the signals fail, the answer is no answer.
#[derive(Parser)]
#[command(
    name = "hush",
    version,
    about = "Hush CLI - silence gating for AI output",
    long_about = "Hush decides whether generated output should be emitted at all.\n\n\
                  If coherence is low, drift is high, or models disagree,\n\
                  no output is preferable to a wrong one."
)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the full decision policy
    #[command(name = "decide")]
    Decide(decide::DecideArgs),

    /// Apply the two-threshold coherence/drift gate
    #[command(name = "gate")]
    Gate(gate::GateArgs),

    /// Measure consensus across candidate responses
    #[command(name = "consensus")]
    Consensus(consensus::ConsensusArgs),

    /// Show defaults and configured providers
    #[command(name = "info")]
    Info(info::InfoArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    match cli.command {
        Commands::Decide(args) => decide::run(args),
        Commands::Gate(args) => gate::run(args),
        Commands::Consensus(args) => consensus::run(args),
        Commands::Info(args) => info::run(args),
    }
}

/// Setup logging based on verbosity level
fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}
