//! Model provider trait and common types

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from model providers
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    #[error("Provider not available")]
    NotAvailable,
}

/// A completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Completion {
    /// System prompt (role/persona)
    pub system: String,
    /// User message
    pub prompt: String,
    /// Temperature (0.0 = deterministic, 1.0 = creative)
    pub temperature: f32,
    /// Maximum tokens to generate
    pub max_tokens: u32,
}

impl Completion {
    /// Create a simple request with default settings
    pub fn simple(prompt: &str) -> Self {
        Self {
            system: "You are a careful assistant. If unsure, say so.".to_string(),
            prompt: prompt.to_string(),
            temperature: 0.7,
            max_tokens: 1024,
        }
    }

    /// Create a request with a specific system prompt
    pub fn with_system(system: &str, prompt: &str) -> Self {
        Self {
            system: system.to_string(),
            prompt: prompt.to_string(),
            temperature: 0.7,
            max_tokens: 1024,
        }
    }
}

/// Text produced by a provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Generated {
    /// The generated text
    pub content: String,
    /// Model used
    pub model: String,
    /// Time taken in milliseconds
    pub latency_ms: u64,
}

/// Trait for model providers
#[async_trait]
pub trait ModelProvider: Send + Sync + std::fmt::Debug {
    /// Get the provider name
    fn name(&self) -> &str;

    /// Check if the provider is reachable
    async fn is_available(&self) -> bool;

    /// Generate a completion
    async fn complete(&self, request: Completion) -> Result<Generated, ModelError>;

    /// Generate from a bare prompt (convenience method)
    async fn generate(&self, prompt: &str) -> Result<String, ModelError> {
        let response = self.complete(Completion::simple(prompt)).await?;
        Ok(response.content)
    }
}
