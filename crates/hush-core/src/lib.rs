//! # Hush Core
//!
//! Core types for silence-as-control gating:
//! - [`Signals`] — per-attempt measurement bundle
//! - [`Thresholds`] — configurable limits with canonical defaults
//! - [`decide`] — the policy function mapping signals to a [`Verdict`]
//! - [`should_silence`] / [`consensus_gate`] — the binary gates
//!
//! The premise: if continuity cannot be guaranteed, no output is
//! preferable to a wrong one. A gated pipeline measures its candidate
//! response, and when the measurements fall outside the configured
//! thresholds, it emits silence instead of the response.
//!
//! ## Quick Start
//!
//! ```rust
//! use hush_core::{decide, Decision, Signals, Thresholds};
//!
//! let signals = Signals {
//!     coherence: 0.9,
//!     drift: 0.1,
//!     conflict: 0.0,
//!     ambiguity: 0.0,
//!     continuity: true,
//! };
//!
//! let verdict = decide(&signals, &Thresholds::default());
//! assert_eq!(verdict.decision, Decision::Respond);
//! assert!(verdict.reasons.is_empty());
//! ```

pub mod gate;
pub mod measure;
pub mod policy;
pub mod signals;

pub use gate::{consensus_gate, should_silence, GateConfig};
pub use policy::{decide, Decision, Reason, ReasonCode, Verdict};
pub use signals::{Signals, Thresholds};

/// Coherence floor below which output is suppressed.
pub const COHERENCE_THRESHOLD: f64 = 0.7;
/// Drift ceiling above which output is suppressed.
pub const DRIFT_THRESHOLD: f64 = 0.3;
/// Consensus floor below which multi-model output is suppressed.
pub const CONSENSUS_THRESHOLD: f64 = 0.5;
