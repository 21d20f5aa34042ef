//! # Hush Agent
//!
//! Silence-gated wrappers around model providers:
//!
//! - [`GatedProvider`] — wraps any [`hush_llm::ModelProvider`] so that
//!   low-coherence or high-drift completions come back as
//!   [`Gated::Silence`] instead of text
//! - [`SilenceGatedAgent`] — a stateful conversation wrapper with an
//!   append-only history and response/silence counters
//! - [`Ensemble`] — fans one prompt out to several providers and
//!   suppresses the answer when they disagree
//!
//! ## Quick Start
//!
//! ```rust
//! use hush_agent::{Gated, SilenceGatedAgent};
//!
//! let mut agent = SilenceGatedAgent::new(|query: &str| format!("re: {query}"));
//!
//! match agent.step("hello") {
//!     Gated::Response(text) => println!("{text}"),
//!     Gated::Silence => println!("[SILENCE]"),
//! }
//! ```

pub mod agent;
pub mod ensemble;
pub mod gated;

pub use agent::{AgentStats, SilenceGatedAgent, Turn};
pub use ensemble::Ensemble;
pub use gated::{Gated, GatedProvider};
