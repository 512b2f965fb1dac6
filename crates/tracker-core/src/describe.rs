//! Description Lookup
//!
//! Asks the configured LLM provider for a short write-up of an asset.
//! Every call re-queries the provider; nothing is cached.

use std::sync::Arc;

use crate::asset::AssetIdentifier;
use crate::error::Result;
use crate::message::Message;
use crate::provider::{GenerationOptions, LlmProvider};

/// Generated description, passed through untouched
pub type DescriptionText = String;

/// Build the fixed description prompt for an asset
pub fn build_prompt(identifier: &AssetIdentifier) -> String {
    format!("Provide a brief description of {identifier} and its use cases.")
}

/// Description lookup backed by any `LlmProvider`
#[derive(Clone)]
pub struct DescriptionLookup {
    provider: Arc<dyn LlmProvider>,
    options: GenerationOptions,
}

impl DescriptionLookup {
    pub fn new(provider: Arc<dyn LlmProvider>, options: GenerationOptions) -> Self {
        Self { provider, options }
    }

    /// Name of the underlying provider
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn provider(&self) -> &Arc<dyn LlmProvider> {
        &self.provider
    }

    /// Generate a description for `identifier`.
    ///
    /// Provider failures are returned as-is; callers decide whether to
    /// degrade or abort.
    pub async fn describe(&self, identifier: &AssetIdentifier) -> Result<DescriptionText> {
        let messages = [Message::user(build_prompt(identifier))];

        tracing::debug!(
            provider = self.provider.name(),
            model = %self.options.model,
            asset = %identifier,
            "requesting description"
        );

        let completion = self.provider.complete(&messages, &self.options).await?;
        Ok(completion.content)
    }
}
