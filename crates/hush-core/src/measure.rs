//! Placeholder measurement heuristics.
//!
//! Real deployments supply their own measurement functions (embedding
//! similarity, self-consistency sampling, topic-shift detection). These
//! stand-ins keep the gates runnable without any model in the loop:
//! consensus is an exact-match uniqueness ratio, coherence and drift are
//! fixed baselines once the inputs are non-trivial.

use std::collections::HashSet;

/// Baseline coherence reported for any non-empty context/response pair.
pub const BASELINE_COHERENCE: f64 = 0.85;
/// Baseline drift reported once a history exists.
pub const BASELINE_DRIFT: f64 = 0.1;

/// Agreement ratio across model responses: `1 / distinct_count`.
///
/// Exact string equality, not semantic similarity. Empty input measures
/// 0.0, which the consensus gate treats as total disagreement.
pub fn consensus<S: AsRef<str>>(responses: &[S]) -> f64 {
    if responses.is_empty() {
        return 0.0;
    }
    let unique: HashSet<&str> = responses.iter().map(|r| r.as_ref()).collect();
    1.0 / unique.len() as f64
}

/// Internal alignment between context and a candidate response.
///
/// 0.0 when either side is empty, the baseline otherwise.
pub fn coherence<S: AsRef<str>>(context: &[S], response: &str) -> f64 {
    if context.is_empty() || response.is_empty() {
        return 0.0;
    }
    BASELINE_COHERENCE
}

/// Deviation from the historical trajectory.
///
/// A history shorter than two entries has no trajectory to drift from.
pub fn drift<S: AsRef<str>>(history: &[S]) -> f64 {
    if history.len() < 2 {
        return 0.0;
    }
    BASELINE_DRIFT
}
