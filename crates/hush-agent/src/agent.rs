//! Stateful conversation wrapper with silence gating.

use serde::Serialize;

use hush_core::{measure, should_silence, GateConfig};

use crate::gated::Gated;

/// One completed exchange retained by the agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Turn {
    pub query: String,
    pub response: String,
}

/// Running counters exposed by [`SilenceGatedAgent::stats`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AgentStats {
    pub responses: u64,
    pub silences: u64,
    /// Fraction of steps that were suppressed; 0.0 before any step.
    pub silence_rate: f64,
    /// Number of retained turns.
    pub history_len: usize,
}

/// Measurement hook over (history, query).
pub type HistoryScoreFn = Box<dyn Fn(&[Turn], &str) -> f64 + Send + Sync>;
/// Measurement hook over the history alone.
pub type HistoryDriftFn = Box<dyn Fn(&[Turn]) -> f64 + Send + Sync>;

/// Convenience wrapper for silence gating around a generation function.
///
/// Each [`step`](Self::step) measures coherence and drift against the
/// retained history, applies the two-threshold gate, and only invokes the
/// generation function when the gate passes. Suppressed steps leave the
/// history untouched. Single-threaded, synchronous use; the caller owns
/// the agent and its history.
pub struct SilenceGatedAgent<F> {
    model_fn: F,
    coherence_fn: HistoryScoreFn,
    drift_fn: HistoryDriftFn,
    config: GateConfig,
    history: Vec<Turn>,
    responses: u64,
    silences: u64,
}

impl<F> SilenceGatedAgent<F>
where
    F: FnMut(&str) -> String,
{
    /// Create an agent with the default gate and placeholder measurement.
    pub fn new(model_fn: F) -> Self {
        Self::with_config(model_fn, GateConfig::default())
    }

    /// Create with explicit gate thresholds.
    pub fn with_config(model_fn: F, config: GateConfig) -> Self {
        Self {
            model_fn,
            coherence_fn: Box::new(|history, query| {
                let context: Vec<&str> = history
                    .iter()
                    .flat_map(|t| [t.query.as_str(), t.response.as_str()])
                    .collect();
                if context.is_empty() {
                    // A fresh conversation has nothing to cohere against;
                    // score the query on its own merits.
                    measure::coherence(&[query], query)
                } else {
                    measure::coherence(&context, query)
                }
            }),
            drift_fn: Box::new(|history| {
                let trajectory: Vec<&str> = history
                    .iter()
                    .flat_map(|t| [t.query.as_str(), t.response.as_str()])
                    .collect();
                measure::drift(&trajectory)
            }),
            config,
            history: Vec::new(),
            responses: 0,
            silences: 0,
        }
    }

    /// Replace the coherence hook.
    pub fn coherence_with(
        mut self,
        f: impl Fn(&[Turn], &str) -> f64 + Send + Sync + 'static,
    ) -> Self {
        self.coherence_fn = Box::new(f);
        self
    }

    /// Replace the drift hook.
    pub fn drift_with(mut self, f: impl Fn(&[Turn]) -> f64 + Send + Sync + 'static) -> Self {
        self.drift_fn = Box::new(f);
        self
    }

    /// Process a query with silence gating.
    pub fn step(&mut self, query: &str) -> Gated<String> {
        let coherence = (self.coherence_fn)(&self.history, query);
        let drift = (self.drift_fn)(&self.history);

        if should_silence(coherence, drift, &self.config) {
            self.silences += 1;
            tracing::debug!(coherence, drift, "agent step suppressed");
            return Gated::Silence;
        }

        let response = (self.model_fn)(query);
        self.history.push(Turn {
            query: query.to_string(),
            response: response.clone(),
        });
        self.responses += 1;
        Gated::Response(response)
    }

    /// Retained conversation turns, oldest first.
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Current counters.
    pub fn stats(&self) -> AgentStats {
        let total = self.responses + self.silences;
        AgentStats {
            responses: self.responses,
            silences: self.silences,
            silence_rate: if total == 0 {
                0.0
            } else {
                self.silences as f64 / total as f64
            },
            history_len: self.history.len(),
        }
    }

    /// Clear history and counters.
    pub fn reset(&mut self) {
        self.history.clear();
        self.responses = 0;
        self.silences = 0;
    }
}
