//! # tracker-runtime
//!
//! Text-generation providers for the crypto tracker.
//!
//! ## Providers
//!
//! - **Groq** (default): hosted inference through Groq's OpenAI-compatible API
//! - **Ollama**: local inference via an Ollama server
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tracker_runtime::{GroqConfig, GroqProvider};
//!
//! let config = GroqConfig::from_env()?;
//! let options = config.generation_options();
//! let provider = GroqProvider::from_config(config)?;
//! let lookup = DescriptionLookup::new(Arc::new(provider), options);
//! ```

mod http;

pub mod groq;
pub mod ollama;

#[cfg(test)]
mod test_support;

pub use groq::{GroqConfig, GroqProvider};
pub use ollama::{OllamaConfig, OllamaProvider};

// Re-export core types for convenience
pub use tracker_core::{GenerationOptions, LlmError, LlmProvider, Message, Result, Role};
