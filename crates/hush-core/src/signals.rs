use serde::{Deserialize, Serialize};

use crate::{COHERENCE_THRESHOLD, DRIFT_THRESHOLD};

/// Measurements describing a single generation attempt.
///
/// Each field is supplied by an external measurement function and trusted
/// as-is; no invariants link them. Constructed fresh per decision call and
/// not retained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Signals {
    /// Internal alignment of the candidate response with context (0.0 - 1.0).
    pub coherence: f64,
    /// Deviation from the historical trajectory (0.0 - 1.0).
    pub drift: f64,
    /// Degree of inter-model disagreement (0.0 - 1.0).
    pub conflict: f64,
    /// Detected ambiguity in the input (0.0 - 1.0).
    pub ambiguity: f64,
    /// Whether conversational continuity holds.
    pub continuity: bool,
}

/// Configurable limits for the decision policy.
///
/// Typically constructed once per deployment and reused across many
/// decision calls. Each field has a serde default, so a partial JSON
/// object (or an empty one) fills in the canonical values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Coherence below this triggers `A1`.
    #[serde(default = "default_coherence_min")]
    pub coherence_min: f64,
    /// Drift above this triggers `D1`.
    #[serde(default = "default_drift_max")]
    pub drift_max: f64,
    /// Conflict above this triggers `C2`.
    #[serde(default = "default_conflict_max")]
    pub conflict_max: f64,
    /// Ambiguity above this triggers `A2`.
    #[serde(default = "default_ambiguity_max")]
    pub ambiguity_max: f64,
    /// Whether a broken continuity flag triggers `K3`.
    #[serde(default = "default_require_continuity")]
    pub require_continuity: bool,
}

fn default_coherence_min() -> f64 {
    COHERENCE_THRESHOLD
}

fn default_drift_max() -> f64 {
    DRIFT_THRESHOLD
}

fn default_conflict_max() -> f64 {
    0.2
}

fn default_ambiguity_max() -> f64 {
    0.2
}

fn default_require_continuity() -> bool {
    true
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            coherence_min: default_coherence_min(),
            drift_max: default_drift_max(),
            conflict_max: default_conflict_max(),
            ambiguity_max: default_ambiguity_max(),
            require_continuity: default_require_continuity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_thresholds_fill_defaults() {
        let th: Thresholds = serde_json::from_str(r#"{"coherence_min": 0.9}"#).unwrap();
        assert_eq!(th.coherence_min, 0.9);
        assert_eq!(th.drift_max, 0.3);
        assert_eq!(th.conflict_max, 0.2);
        assert_eq!(th.ambiguity_max, 0.2);
        assert!(th.require_continuity);
    }

    #[test]
    fn empty_thresholds_object_is_default() {
        let th: Thresholds = serde_json::from_str("{}").unwrap();
        assert_eq!(th, Thresholds::default());
    }

    #[test]
    fn signals_roundtrip() {
        let signals = Signals {
            coherence: 0.85,
            drift: 0.1,
            conflict: 0.0,
            ambiguity: 0.05,
            continuity: true,
        };
        let json = serde_json::to_string(&signals).unwrap();
        let back: Signals = serde_json::from_str(&json).unwrap();
        assert_eq!(signals, back);
    }
}
