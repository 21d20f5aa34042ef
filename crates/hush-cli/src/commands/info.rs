//! `hush info` - defaults and configured providers

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use hush_core::{Thresholds, CONSENSUS_THRESHOLD};
use hush_llm::LlmConfig;

#[derive(Args)]
pub struct InfoArgs {}

pub fn run(_args: InfoArgs) -> Result<()> {
    let thresholds = Thresholds::default();
    let llm = LlmConfig::from_env();

    println!("{}", "hush".bold());
    println!("  version: {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("{}", "default thresholds".bold());
    println!("  coherence_min:      {}", thresholds.coherence_min);
    println!("  drift_max:          {}", thresholds.drift_max);
    println!("  conflict_max:       {}", thresholds.conflict_max);
    println!("  ambiguity_max:      {}", thresholds.ambiguity_max);
    println!("  require_continuity: {}", thresholds.require_continuity);
    println!("  consensus:          {CONSENSUS_THRESHOLD}");
    println!();
    println!("{}", "providers".bold());
    for provider in llm.available_providers() {
        println!("  {} {}", "✓".green(), provider);
    }
    if llm.api_key("openai").is_none() {
        println!("  {} openai (set OPENAI_API_KEY)", "✗".dimmed());
    }

    Ok(())
}
