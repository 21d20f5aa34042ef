//! # Hush LLM
//!
//! Model provider integrations for hush. Providers are opaque
//! collaborators that turn a prompt into text; the gating layers in
//! `hush-agent` wrap them without caring which backend is underneath.
//!
//! ## Supported Backends
//!
//! | Provider | Type | Key Required |
//! |----------|------|--------------|
//! | OpenAI | API | `OPENAI_API_KEY` |
//! | Ollama | Local | None |
//! | Mock | Testing | None |
//!
//! ## Quick Start
//!
//! ```rust
//! use hush_llm::{MockProvider, ModelProvider};
//!
//! #[tokio::main]
//! async fn main() {
//!     let model = MockProvider::constant("the answer");
//!     let response = model.generate("any question").await.unwrap();
//!     assert_eq!(response, "the answer");
//! }
//! ```
//!
//! ## With a local Ollama
//!
//! ```rust,ignore
//! use hush_llm::OllamaProvider;
//!
//! let model = OllamaProvider::new("llama3");
//! let response = model.generate("Why silence?").await?;
//! ```

pub mod config;
pub mod mock;
pub mod ollama;
pub mod openai;
pub mod provider;

pub use config::LlmConfig;
pub use mock::MockProvider;
pub use ollama::OllamaProvider;
pub use openai::OpenAiProvider;
pub use provider::{Completion, Generated, ModelError, ModelProvider};
