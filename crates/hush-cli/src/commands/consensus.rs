//! `hush consensus` - agreement across candidate responses

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use hush_core::{consensus_gate, measure, CONSENSUS_THRESHOLD};

#[derive(Args)]
pub struct ConsensusArgs {
    /// Candidate responses to compare
    pub responses: Vec<String>,

    /// Consensus floor
    #[arg(long, default_value_t = CONSENSUS_THRESHOLD)]
    pub threshold: f64,
}

pub fn run(args: ConsensusArgs) -> Result<()> {
    let consensus = measure::consensus(&args.responses);

    println!(
        "consensus: {:.3} across {} response(s)",
        consensus,
        args.responses.len()
    );

    if consensus_gate(consensus, args.threshold) {
        println!("{}", "SILENCE".red().bold());
    } else {
        println!("{}", "ALLOW".green().bold());
    }

    Ok(())
}
