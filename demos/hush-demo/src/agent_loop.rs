//! Scripted agent loop.
//!
//! Pushes a fixed batch of queries through a gated agent whose drift
//! grows with every retained turn, and prints the running silence rate.
//! Early queries pass; once drift crosses the ceiling the agent goes
//! quiet until reset.
//!
//! Run with: cargo run -p hush-demo --bin agent-loop

use hush_agent::{Gated, SilenceGatedAgent};

fn main() -> anyhow::Result<()> {
    let mut agent = SilenceGatedAgent::new(|query: &str| format!("ack: {query}"))
        .coherence_with(|_, _| 0.85)
        .drift_with(|history| history.len() as f64 * 0.12);

    let queries = [
        "summarize the incident report",
        "what changed since yesterday",
        "who owns the follow-up",
        "draft a status update",
        "now estimate the quarter's revenue",
        "and the weather next month?",
    ];

    for query in queries {
        match agent.step(query) {
            Gated::Response(text) => println!("-> {text}"),
            Gated::Silence => println!("-> [SILENCE]"),
        }
        let stats = agent.stats();
        println!(
            "   responses={} silences={} rate={:.0}%",
            stats.responses,
            stats.silences,
            stats.silence_rate * 100.0
        );
    }

    println!("\nresetting agent");
    agent.reset();
    if let Gated::Response(text) = agent.step("fresh start") {
        println!("-> {text}");
    }

    Ok(())
}
