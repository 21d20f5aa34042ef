//! Interactive chatbot with silence gating.
//!
//! The bot answers from a canned model function; the interesting part is
//! the gate. When the coherence heuristic drops (hedged or stubby
//! replies) or drift accumulates over a long conversation, the bot says
//! nothing instead of guessing.
//!
//! Run with: cargo run -p hush-demo --bin chatbot
//!
//! Commands: /stats, /reset, /quit

use std::io::{self, BufRead, Write};

use hush_agent::{Gated, SilenceGatedAgent, Turn};

fn mock_llm(query: &str) -> String {
    // Long questions get a hedged answer, which the coherence
    // heuristic below will then score down.
    if query.contains('?') && query.len() > 50 {
        let snippet: String = query.chars().take(20).collect();
        return format!("I'm not sure, but... {snippet}...");
    }
    format!("Here's my take on: {query}")
}

fn heuristic_coherence(_history: &[Turn], query: &str) -> f64 {
    // Peek at what the model would say and score the candidate.
    let candidate = mock_llm(query);
    let lowered = candidate.to_lowercase();

    if lowered.contains("not sure") || lowered.contains("uncertain") {
        return 0.5;
    }
    if candidate.len() < 10 {
        return 0.4;
    }
    0.85
}

fn heuristic_drift(history: &[Turn]) -> f64 {
    // Drift accumulates with conversation length.
    (history.len() as f64 * 0.06).min(0.5)
}

fn main() -> anyhow::Result<()> {
    println!("============================================================");
    println!("Hush chatbot demo");
    println!("============================================================");
    println!();
    println!("This bot gates its own output. When it is uncertain, it");
    println!("stays silent instead of guessing.");
    println!();
    println!("Commands: /stats  /reset  /quit");
    println!("------------------------------------------------------------");

    let mut agent = SilenceGatedAgent::new(mock_llm)
        .coherence_with(heuristic_coherence)
        .drift_with(heuristic_drift);

    let stdin = io::stdin();
    loop {
        print!("\nYou: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!("\nGoodbye!");
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input {
            "/quit" => {
                println!("Goodbye!");
                break;
            }
            "/stats" => {
                let stats = agent.stats();
                println!("\nStatistics:");
                println!("  responses:    {}", stats.responses);
                println!("  silences:     {}", stats.silences);
                println!("  silence rate: {:.1}%", stats.silence_rate * 100.0);
                println!("  history:      {} turn(s)", stats.history_len);
            }
            "/reset" => {
                agent.reset();
                println!("Conversation reset.");
            }
            query => match agent.step(query) {
                Gated::Response(text) => println!("\nBot: {text}"),
                Gated::Silence => {
                    println!("\nBot: [SILENCE]");
                    println!("     (low coherence or high drift; no answer is the answer)");
                }
            },
        }
    }

    Ok(())
}
