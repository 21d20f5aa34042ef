//! Multi-model consensus demo.
//!
//! Three mock "models" answer the same prompt. When they agree, the
//! ensemble answers; when they disagree, it stays silent.
//!
//! Run with: cargo run -p hush-demo --bin multi-model

use std::sync::Arc;

use hush_agent::{Ensemble, Gated};
use hush_llm::MockProvider;

async fn ask(ensemble: &Ensemble, prompt: &str) {
    println!("Q: {prompt}");
    match ensemble.generate(prompt).await {
        Gated::Response(text) => println!("A: {text}\n"),
        Gated::Silence => println!("A: [SILENCE] (models disagree)\n"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!("=== Scenario 1: agreement ===\n");

    let agreeing = Ensemble::new()
        .with(Arc::new(MockProvider::named("model-a", "Paris")))
        .with(Arc::new(MockProvider::named("model-b", "Paris")))
        .with(Arc::new(MockProvider::named("model-c", "Paris")));

    ask(&agreeing, "What is the capital of France?").await;

    println!("=== Scenario 2: disagreement ===\n");

    let disagreeing = Ensemble::new()
        .with(Arc::new(MockProvider::named("model-a", "42")))
        .with(Arc::new(MockProvider::named("model-b", "43")))
        .with(Arc::new(MockProvider::named("model-c", "41")));

    ask(&disagreeing, "Pick a number.").await;

    println!("=== Scenario 3: majority ===\n");

    let majority = Ensemble::new()
        .with(Arc::new(MockProvider::named("model-a", "yes")))
        .with(Arc::new(MockProvider::named("model-b", "yes")))
        .with(Arc::new(MockProvider::named("model-c", "no")));

    ask(&majority, "Is silence a valid answer?").await;

    Ok(())
}
