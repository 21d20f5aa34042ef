//! The decision policy: signals in, verdict out.

use serde::{Deserialize, Serialize, Serializer};

use crate::signals::{Signals, Thresholds};

/// Outcome of a gating decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    /// All signals within thresholds; emit the response.
    Respond,
    /// Only ambiguity was raised; emit a degraded (hedged, clarifying)
    /// response rather than suppressing outright.
    Minimal,
    /// One or more thresholds violated; emit nothing.
    Silence,
}

impl Decision {
    /// The wire/display form (`RESPOND`, `MINIMAL`, `SILENCE`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Respond => "RESPOND",
            Decision::Minimal => "MINIMAL",
            Decision::Silence => "SILENCE",
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Short code identifying a violated threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReasonCode {
    /// Coherence below `coherence_min`.
    A1,
    /// Drift above `drift_max`.
    D1,
    /// Conflict above `conflict_max`.
    C2,
    /// Ambiguity above `ambiguity_max`.
    A2,
    /// Continuity required but broken.
    K3,
}

impl ReasonCode {
    /// Human-readable label paired with the code.
    pub fn label(self) -> &'static str {
        match self {
            ReasonCode::A1 => "low_coherence",
            ReasonCode::D1 => "context_drift",
            ReasonCode::C2 => "inter_model_conflict",
            ReasonCode::A2 => "ambiguity_detected",
            ReasonCode::K3 => "continuity_invalid",
        }
    }
}

/// A single violated threshold, in evaluation order.
///
/// Serializes as a `(code, label)` pair, e.g. `["A1", "low_coherence"]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reason {
    pub code: ReasonCode,
    pub label: &'static str,
}

impl Reason {
    fn new(code: ReasonCode) -> Self {
        Self {
            code,
            label: code.label(),
        }
    }
}

impl Serialize for Reason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.code, self.label).serialize(serializer)
    }
}

/// Result of [`decide`]: the outcome plus every violated threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub decision: Decision,
    pub reasons: Vec<Reason>,
}

impl Verdict {
    /// Whether the verdict permits emitting any output at all.
    pub fn permits_output(&self) -> bool {
        self.decision != Decision::Silence
    }
}

/// Evaluate the five threshold predicates in fixed order and select an
/// outcome.
///
/// Total function: every well-formed input maps to a verdict, there is no
/// error path. Rules, in evaluation order:
///
/// - `coherence < coherence_min` → `A1`
/// - `drift > drift_max` → `D1`
/// - `conflict > conflict_max` → `C2`
/// - `ambiguity > ambiguity_max` → `A2`
/// - `require_continuity && !continuity` → `K3`
///
/// No violations → [`Decision::Respond`]. A lone `A2` → [`Decision::Minimal`]
/// (ambiguity alone degrades rather than suppresses). Anything else →
/// [`Decision::Silence`].
pub fn decide(signals: &Signals, thresholds: &Thresholds) -> Verdict {
    let mut reasons = Vec::new();

    if signals.coherence < thresholds.coherence_min {
        reasons.push(Reason::new(ReasonCode::A1));
    }
    if signals.drift > thresholds.drift_max {
        reasons.push(Reason::new(ReasonCode::D1));
    }
    if signals.conflict > thresholds.conflict_max {
        reasons.push(Reason::new(ReasonCode::C2));
    }
    if signals.ambiguity > thresholds.ambiguity_max {
        reasons.push(Reason::new(ReasonCode::A2));
    }
    if thresholds.require_continuity && !signals.continuity {
        reasons.push(Reason::new(ReasonCode::K3));
    }

    let decision = match reasons.as_slice() {
        [] => Decision::Respond,
        [only] if only.code == ReasonCode::A2 => Decision::Minimal,
        _ => Decision::Silence,
    };

    tracing::debug!(
        decision = %decision,
        reason_count = reasons.len(),
        "gating decision evaluated"
    );

    Verdict { decision, reasons }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nominal() -> Signals {
        Signals {
            coherence: 0.9,
            drift: 0.1,
            conflict: 0.0,
            ambiguity: 0.0,
            continuity: true,
        }
    }

    #[test]
    fn respond_when_all_signals_ok() {
        let verdict = decide(&nominal(), &Thresholds::default());
        assert_eq!(verdict.decision, Decision::Respond);
        assert!(verdict.reasons.is_empty());
    }

    #[test]
    fn silence_on_low_coherence() {
        let signals = Signals {
            coherence: 0.5,
            ..nominal()
        };
        let verdict = decide(&signals, &Thresholds::default());
        assert_eq!(verdict.decision, Decision::Silence);
        assert!(verdict.reasons.iter().any(|r| r.code == ReasonCode::A1));
    }

    #[test]
    fn minimal_on_ambiguity_alone() {
        let signals = Signals {
            ambiguity: 0.5,
            ..nominal()
        };
        let verdict = decide(&signals, &Thresholds::default());
        assert_eq!(verdict.decision, Decision::Minimal);
        assert_eq!(verdict.reasons.len(), 1);
        assert_eq!(verdict.reasons[0].code, ReasonCode::A2);
        assert_eq!(verdict.reasons[0].label, "ambiguity_detected");
    }

    #[test]
    fn ambiguity_plus_another_violation_silences() {
        let signals = Signals {
            ambiguity: 0.5,
            drift: 0.4,
            ..nominal()
        };
        let verdict = decide(&signals, &Thresholds::default());
        assert_eq!(verdict.decision, Decision::Silence);
        assert_eq!(verdict.reasons.len(), 2);
    }

    #[test]
    fn silence_on_multiple_issues_collects_all_codes() {
        let signals = Signals {
            coherence: 0.5,
            drift: 0.4,
            conflict: 0.3,
            ambiguity: 0.0,
            continuity: false,
        };
        let verdict = decide(&signals, &Thresholds::default());
        assert_eq!(verdict.decision, Decision::Silence);

        let codes: Vec<ReasonCode> = verdict.reasons.iter().map(|r| r.code).collect();
        assert_eq!(
            codes,
            vec![
                ReasonCode::A1,
                ReasonCode::D1,
                ReasonCode::C2,
                ReasonCode::K3
            ]
        );
    }

    #[test]
    fn continuity_ignored_when_not_required() {
        let thresholds = Thresholds {
            require_continuity: false,
            ..Thresholds::default()
        };
        let signals = Signals {
            continuity: false,
            ..nominal()
        };
        let verdict = decide(&signals, &thresholds);
        assert_eq!(verdict.decision, Decision::Respond);
    }

    #[test]
    fn threshold_equality_stays_on_allow_side() {
        let signals = Signals {
            coherence: 0.7,
            drift: 0.3,
            conflict: 0.2,
            ambiguity: 0.2,
            continuity: true,
        };
        let verdict = decide(&signals, &Thresholds::default());
        assert_eq!(verdict.decision, Decision::Respond);
    }

    #[test]
    fn verdict_serializes_reasons_as_pairs() {
        let signals = Signals {
            ambiguity: 0.5,
            ..nominal()
        };
        let verdict = decide(&signals, &Thresholds::default());
        let json = serde_json::to_value(&verdict).unwrap();
        assert_eq!(json["decision"], "MINIMAL");
        assert_eq!(
            json["reasons"],
            serde_json::json!([["A2", "ambiguity_detected"]])
        );
    }
}
