//! Gated outcomes and the provider wrapper.

use std::sync::Arc;

use hush_core::{should_silence, GateConfig};
use hush_llm::{Completion, Generated, ModelError, ModelProvider};

/// Outcome of a gated generation: either the payload or deliberate
/// silence. Silence is a designed outcome, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Gated<T> {
    /// The gate passed; here is the output.
    Response(T),
    /// The gate fired; nothing is emitted.
    Silence,
}

impl<T> Gated<T> {
    /// True when the gate suppressed output.
    pub fn is_silence(&self) -> bool {
        matches!(self, Gated::Silence)
    }

    /// Convert to an `Option`, mapping silence to `None`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Gated::Response(value) => Some(value),
            Gated::Silence => None,
        }
    }

    /// Map the response payload, leaving silence as silence.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Gated<U> {
        match self {
            Gated::Response(value) => Gated::Response(f(value)),
            Gated::Silence => Gated::Silence,
        }
    }
}

/// Measurement hook over (prompt, candidate response).
pub type ScoreFn = Box<dyn Fn(&str, &str) -> f64 + Send + Sync>;

/// Wraps a provider so every completion passes the silence gate before it
/// reaches the caller.
///
/// The candidate is generated first, then scored by the pluggable
/// coherence and drift hooks; a failing score turns the completion into
/// [`Gated::Silence`]. Provider errors still surface as errors; silence
/// is reserved for the gate.
pub struct GatedProvider<P: ModelProvider> {
    inner: Arc<P>,
    config: GateConfig,
    coherence_fn: ScoreFn,
    drift_fn: ScoreFn,
}

impl<P: ModelProvider> GatedProvider<P> {
    /// Wrap a provider with the default gate and placeholder scoring.
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, GateConfig::default())
    }

    /// Wrap with explicit gate thresholds.
    pub fn with_config(provider: P, config: GateConfig) -> Self {
        Self {
            inner: Arc::new(provider),
            config,
            coherence_fn: Box::new(|prompt, response| {
                hush_core::measure::coherence(&[prompt], response)
            }),
            drift_fn: Box::new(|prompt, response| hush_core::measure::drift(&[prompt, response])),
        }
    }

    /// Replace the coherence hook.
    pub fn coherence_with(mut self, f: impl Fn(&str, &str) -> f64 + Send + Sync + 'static) -> Self {
        self.coherence_fn = Box::new(f);
        self
    }

    /// Replace the drift hook.
    pub fn drift_with(mut self, f: impl Fn(&str, &str) -> f64 + Send + Sync + 'static) -> Self {
        self.drift_fn = Box::new(f);
        self
    }

    /// Access the wrapped provider.
    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Run a completion through the gate.
    pub async fn complete(&self, request: Completion) -> Result<Gated<Generated>, ModelError> {
        let prompt = request.prompt.clone();
        let generated = self.inner.complete(request).await?;

        let coherence = (self.coherence_fn)(&prompt, &generated.content);
        let drift = (self.drift_fn)(&prompt, &generated.content);

        if should_silence(coherence, drift, &self.config) {
            tracing::info!(
                provider = self.inner.name(),
                coherence,
                drift,
                "completion suppressed by silence gate"
            );
            return Ok(Gated::Silence);
        }

        Ok(Gated::Response(generated))
    }

    /// Gate a bare prompt, returning only the text on pass.
    pub async fn generate(&self, prompt: &str) -> Result<Gated<String>, ModelError> {
        let gated = self.complete(Completion::simple(prompt)).await?;
        Ok(gated.map(|g| g.content))
    }
}

impl<P: ModelProvider> std::fmt::Debug for GatedProvider<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatedProvider")
            .field("inner", &self.inner)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hush_llm::MockProvider;

    #[tokio::test]
    async fn passes_when_scores_are_nominal() {
        let gated = GatedProvider::new(MockProvider::constant("fine answer"));
        let result = gated.generate("question").await.unwrap();
        assert_eq!(result, Gated::Response("fine answer".to_string()));
    }

    #[tokio::test]
    async fn suppresses_when_coherence_hook_reports_low() {
        let gated = GatedProvider::new(MockProvider::constant("dubious answer"))
            .coherence_with(|_, _| 0.4);
        let result = gated.generate("question").await.unwrap();
        assert!(result.is_silence());
    }

    #[tokio::test]
    async fn suppresses_when_drift_hook_reports_high() {
        let gated =
            GatedProvider::new(MockProvider::constant("off-topic answer")).drift_with(|_, _| 0.9);
        let result = gated.generate("question").await.unwrap();
        assert!(result.is_silence());
    }

    #[tokio::test]
    async fn custom_thresholds_move_the_gate() {
        let config = GateConfig {
            coherence_threshold: 0.95,
            drift_threshold: 0.3,
        };
        // Placeholder coherence is 0.85, below the raised floor.
        let gated = GatedProvider::with_config(MockProvider::constant("answer"), config);
        assert!(gated.generate("question").await.unwrap().is_silence());
    }

    #[test]
    fn gated_map_and_option() {
        let response: Gated<u32> = Gated::Response(2);
        assert_eq!(response.map(|n| n * 2).into_option(), Some(4));
        let silence: Gated<u32> = Gated::Silence;
        assert_eq!(silence.map(|n| n * 2).into_option(), None);
    }
}
