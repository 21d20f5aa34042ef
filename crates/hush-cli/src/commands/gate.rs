//! `hush gate` - the two-threshold coherence/drift gate

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use hush_core::{should_silence, GateConfig, COHERENCE_THRESHOLD, DRIFT_THRESHOLD};

#[derive(Args)]
pub struct GateArgs {
    /// Internal alignment score (0.0 - 1.0)
    #[arg(long)]
    pub coherence: f64,

    /// Trajectory deviation score (0.0 - 1.0)
    #[arg(long)]
    pub drift: f64,

    /// Coherence floor
    #[arg(long, default_value_t = COHERENCE_THRESHOLD)]
    pub coherence_threshold: f64,

    /// Drift ceiling
    #[arg(long, default_value_t = DRIFT_THRESHOLD)]
    pub drift_threshold: f64,
}

pub fn run(args: GateArgs) -> Result<()> {
    let config = GateConfig {
        coherence_threshold: args.coherence_threshold,
        drift_threshold: args.drift_threshold,
    };

    if should_silence(args.coherence, args.drift, &config) {
        println!("{}", "SILENCE".red().bold());
    } else {
        println!("{}", "ALLOW".green().bold());
    }

    Ok(())
}
