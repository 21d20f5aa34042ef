//! Multi-model consensus orchestration.

use std::sync::Arc;

use futures::future::join_all;

use hush_core::{consensus_gate, measure, CONSENSUS_THRESHOLD};
use hush_llm::ModelProvider;

use crate::gated::Gated;

/// Fans one prompt out to several providers and gates the answer on
/// their agreement.
///
/// Agreement is the exact-match uniqueness ratio from
/// [`hush_core::measure::consensus`]; when it falls below the configured
/// threshold the ensemble stays silent. Provider failures are logged and
/// excluded from the tally. An ensemble whose members all failed, or that
/// has no members, is silent by definition.
pub struct Ensemble {
    providers: Vec<Arc<dyn ModelProvider>>,
    consensus_threshold: f64,
}

impl Ensemble {
    /// Create an empty ensemble with the canonical threshold.
    pub fn new() -> Self {
        Self::with_threshold(CONSENSUS_THRESHOLD)
    }

    /// Create with an explicit consensus threshold.
    pub fn with_threshold(consensus_threshold: f64) -> Self {
        Self {
            providers: Vec::new(),
            consensus_threshold,
        }
    }

    /// Add a provider to the ensemble.
    pub fn push(&mut self, provider: Arc<dyn ModelProvider>) {
        self.providers.push(provider);
    }

    /// Builder-style [`push`](Self::push).
    pub fn with(mut self, provider: Arc<dyn ModelProvider>) -> Self {
        self.push(provider);
        self
    }

    /// Number of participating providers.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// True when no providers are registered.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Ask every provider, measure agreement, and either return the first
    /// response or stay silent.
    pub async fn generate(&self, prompt: &str) -> Gated<String> {
        let requests = self.providers.iter().map(|p| {
            let provider = Arc::clone(p);
            let prompt = prompt.to_string();
            async move {
                let name = provider.name().to_string();
                (name, provider.generate(&prompt).await)
            }
        });

        let mut responses = Vec::new();
        for (name, result) in join_all(requests).await {
            match result {
                Ok(text) => responses.push(text),
                Err(e) => {
                    tracing::warn!(provider = %name, error = %e, "ensemble member failed");
                }
            }
        }

        if responses.is_empty() {
            return Gated::Silence;
        }

        let consensus = measure::consensus(&responses);
        tracing::debug!(
            consensus,
            members = self.providers.len(),
            answered = responses.len(),
            "ensemble consensus measured"
        );

        if consensus_gate(consensus, self.consensus_threshold) {
            return Gated::Silence;
        }

        Gated::Response(responses.swap_remove(0))
    }
}

impl Default for Ensemble {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Ensemble {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ensemble")
            .field("providers", &self.providers.len())
            .field("consensus_threshold", &self.consensus_threshold)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hush_llm::MockProvider;

    fn member(name: &str, response: &str) -> Arc<dyn ModelProvider> {
        Arc::new(MockProvider::named(name, response))
    }

    #[tokio::test]
    async fn agreement_passes_the_gate() {
        let ensemble = Ensemble::new()
            .with(member("a", "42"))
            .with(member("b", "42"))
            .with(member("c", "42"));

        let result = ensemble.generate("meaning of life?").await;
        assert_eq!(result, Gated::Response("42".to_string()));
    }

    #[tokio::test]
    async fn disagreement_stays_silent() {
        let ensemble = Ensemble::new()
            .with(member("a", "yes"))
            .with(member("b", "no"))
            .with(member("c", "maybe"));

        assert!(ensemble.generate("anything").await.is_silence());
    }

    #[tokio::test]
    async fn two_distinct_answers_sit_exactly_on_the_threshold() {
        // Two distinct answers -> consensus 0.5, not below 0.5: passes.
        let ensemble = Ensemble::new()
            .with(member("a", "yes"))
            .with(member("b", "yes"))
            .with(member("c", "no"));

        let result = ensemble.generate("anything").await;
        assert_eq!(result, Gated::Response("yes".to_string()));
    }

    #[tokio::test]
    async fn empty_ensemble_is_silent() {
        let ensemble = Ensemble::new();
        assert!(ensemble.is_empty());
        assert!(ensemble.generate("anything").await.is_silence());
    }

    #[tokio::test]
    async fn stricter_threshold_requires_unanimity() {
        let ensemble = Ensemble::with_threshold(1.0)
            .with(member("a", "yes"))
            .with(member("b", "no"));

        assert!(ensemble.generate("anything").await.is_silence());
    }
}
