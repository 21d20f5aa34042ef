//! Mock model provider for tests and demos

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use crate::provider::{Completion, Generated, ModelError, ModelProvider};

/// A mock provider that returns predefined responses.
///
/// Cycles through its canned responses; with none configured it echoes the
/// prompt. Useful for exercising the gates without any model access.
#[derive(Debug)]
pub struct MockProvider {
    /// Name of this mock (shows up in consensus/demo output)
    pub name: String,
    /// Canned responses (cycles through them)
    responses: Vec<String>,
    /// Current response index
    index: AtomicUsize,
    /// Simulated latency in ms
    latency_ms: u64,
}

impl MockProvider {
    /// Create a new mock provider with given responses
    pub fn new(responses: Vec<String>) -> Self {
        Self {
            name: "mock".to_string(),
            responses,
            index: AtomicUsize::new(0),
            latency_ms: 10,
        }
    }

    /// Create a mock that always returns the same response
    pub fn constant(response: &str) -> Self {
        Self::new(vec![response.to_string()])
    }

    /// Create a named mock, for multi-model scenarios where each
    /// participant needs a distinct identity
    pub fn named(name: &str, response: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::constant(response)
        }
    }

    /// Create a mock that echoes the prompt back
    pub fn echo() -> Self {
        Self {
            name: "echo-mock".to_string(),
            responses: Vec::new(),
            index: AtomicUsize::new(0),
            latency_ms: 10,
        }
    }
}

#[async_trait]
impl ModelProvider for MockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn is_available(&self) -> bool {
        true // Mock is always available
    }

    async fn complete(&self, request: Completion) -> Result<Generated, ModelError> {
        let start = Instant::now();

        // Simulate latency
        tokio::time::sleep(std::time::Duration::from_millis(self.latency_ms)).await;

        let content = if self.responses.is_empty() {
            format!("You said: {}", request.prompt)
        } else {
            let idx = self.index.fetch_add(1, Ordering::Relaxed);
            self.responses[idx % self.responses.len()].clone()
        };

        Ok(Generated {
            content,
            model: self.name.clone(),
            latency_ms: start.elapsed().as_millis() as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn constant_mock_repeats_its_response() {
        let mock = MockProvider::constant("Hello, world!");
        assert_eq!(mock.generate("test").await.unwrap(), "Hello, world!");
        assert_eq!(mock.generate("again").await.unwrap(), "Hello, world!");
    }

    #[tokio::test]
    async fn mock_cycles_through_responses() {
        let mock = MockProvider::new(vec!["one".to_string(), "two".to_string()]);
        assert_eq!(mock.generate("a").await.unwrap(), "one");
        assert_eq!(mock.generate("b").await.unwrap(), "two");
        assert_eq!(mock.generate("c").await.unwrap(), "one");
    }

    #[tokio::test]
    async fn echo_mock_reflects_the_prompt() {
        let mock = MockProvider::echo();
        let response = mock.generate("ping").await.unwrap();
        assert!(response.contains("ping"));
    }
}
