//! `hush decide` - evaluate the full decision policy

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use hush_core::{decide, Decision, Signals, Thresholds};

#[derive(Args)]
pub struct DecideArgs {
    /// Internal alignment of the candidate response (0.0 - 1.0)
    #[arg(long)]
    pub coherence: f64,

    /// Deviation from the historical trajectory (0.0 - 1.0)
    #[arg(long)]
    pub drift: f64,

    /// Inter-model disagreement (0.0 - 1.0)
    #[arg(long, default_value_t = 0.0)]
    pub conflict: f64,

    /// Detected input ambiguity (0.0 - 1.0)
    #[arg(long, default_value_t = 0.0)]
    pub ambiguity: f64,

    /// Mark conversational continuity as broken
    #[arg(long)]
    pub no_continuity: bool,

    /// Override the coherence floor
    #[arg(long)]
    pub coherence_min: Option<f64>,

    /// Override the drift ceiling
    #[arg(long)]
    pub drift_max: Option<f64>,

    /// Override the conflict ceiling
    #[arg(long)]
    pub conflict_max: Option<f64>,

    /// Override the ambiguity ceiling
    #[arg(long)]
    pub ambiguity_max: Option<f64>,

    /// Emit the verdict as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: DecideArgs) -> Result<()> {
    let signals = Signals {
        coherence: args.coherence,
        drift: args.drift,
        conflict: args.conflict,
        ambiguity: args.ambiguity,
        continuity: !args.no_continuity,
    };

    let defaults = Thresholds::default();
    let thresholds = Thresholds {
        coherence_min: args.coherence_min.unwrap_or(defaults.coherence_min),
        drift_max: args.drift_max.unwrap_or(defaults.drift_max),
        conflict_max: args.conflict_max.unwrap_or(defaults.conflict_max),
        ambiguity_max: args.ambiguity_max.unwrap_or(defaults.ambiguity_max),
        require_continuity: defaults.require_continuity,
    };

    let verdict = decide(&signals, &thresholds);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
        return Ok(());
    }

    let label = match verdict.decision {
        Decision::Respond => verdict.decision.as_str().green().bold(),
        Decision::Minimal => verdict.decision.as_str().yellow().bold(),
        Decision::Silence => verdict.decision.as_str().red().bold(),
    };
    println!("{label}");

    for reason in &verdict.reasons {
        println!("  [{:?}] {}", reason.code, reason.label);
    }

    Ok(())
}
