//! Binary gates: the two-threshold silence gate and the consensus gate.
//!
//! These are the degenerate restatements of the policy in [`crate::policy`]:
//! no reason tracking, just suppress-or-allow.

use serde::{Deserialize, Serialize};

use crate::{COHERENCE_THRESHOLD, CONSENSUS_THRESHOLD, DRIFT_THRESHOLD};

/// Limits for the two-threshold gate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GateConfig {
    /// Coherence below this suppresses output.
    #[serde(default = "default_coherence_threshold")]
    pub coherence_threshold: f64,
    /// Drift above this suppresses output.
    #[serde(default = "default_drift_threshold")]
    pub drift_threshold: f64,
}

fn default_coherence_threshold() -> f64 {
    COHERENCE_THRESHOLD
}

fn default_drift_threshold() -> f64 {
    DRIFT_THRESHOLD
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            coherence_threshold: default_coherence_threshold(),
            drift_threshold: default_drift_threshold(),
        }
    }
}

/// True when output should be suppressed.
///
/// Boundaries are inclusive on the allow side: a coherence exactly at the
/// threshold passes, a drift exactly at the threshold passes.
pub fn should_silence(coherence: f64, drift: f64, config: &GateConfig) -> bool {
    coherence < config.coherence_threshold || drift > config.drift_threshold
}

/// True when consensus is too low and multi-model output should be
/// suppressed.
pub fn consensus_gate(consensus: f64, threshold: f64) -> bool {
    consensus < threshold
}

/// [`consensus_gate`] with the canonical threshold.
pub fn default_consensus_gate(consensus: f64) -> bool {
    consensus_gate(consensus, CONSENSUS_THRESHOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_nominal_signals() {
        assert!(!should_silence(0.9, 0.1, &GateConfig::default()));
    }

    #[test]
    fn suppresses_low_coherence() {
        assert!(should_silence(0.45, 0.1, &GateConfig::default()));
    }

    #[test]
    fn suppresses_high_drift() {
        assert!(should_silence(0.85, 0.5, &GateConfig::default()));
    }

    #[test]
    fn boundaries_are_inclusive_on_allow_side() {
        let config = GateConfig::default();
        assert!(!should_silence(0.7, 0.3, &config));
        assert!(should_silence(0.69999, 0.1, &config));
        assert!(should_silence(0.9, 0.30001, &config));
    }

    #[test]
    fn custom_thresholds_shift_the_gate() {
        let config = GateConfig {
            coherence_threshold: 0.9,
            drift_threshold: 0.05,
        };
        assert!(should_silence(0.85, 0.0, &config));
        assert!(should_silence(0.95, 0.1, &config));
        assert!(!should_silence(0.95, 0.05, &config));
    }

    #[test]
    fn consensus_gate_suppresses_below_threshold() {
        assert!(consensus_gate(0.33, 0.5));
        assert!(!consensus_gate(0.5, 0.5));
        assert!(!default_consensus_gate(1.0));
        assert!(default_consensus_gate(0.0));
    }
}
