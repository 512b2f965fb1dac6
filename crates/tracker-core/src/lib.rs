//! # tracker-core
//!
//! Shared building blocks for the crypto tracker: the normalized asset
//! identifier, a provider-agnostic LLM abstraction, and the description
//! lookup that sits on top of it.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                 DescriptionLookup                    │
//! │  ┌──────────────────┐      ┌──────────────────────┐  │
//! │  │  Prompt builder  │──────│  LlmProvider         │  │
//! │  │  (AssetId → str) │      │  (Groq, Ollama, ...) │  │
//! │  └──────────────────┘      └──────────────────────┘  │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! The `LlmProvider` trait lets the tracker swap between Groq, a local
//! Ollama instance, or a test double without touching the lookup itself.

pub mod asset;
pub mod describe;
pub mod error;
pub mod message;
pub mod provider;

pub use asset::AssetIdentifier;
pub use describe::{DescriptionLookup, DescriptionText};
pub use error::{LlmError, Result};
pub use message::{Message, Role};
pub use provider::{Completion, GenerationOptions, LlmProvider};
