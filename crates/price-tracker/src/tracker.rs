//! Price-then-describe controller

use chrono::Utc;
use std::sync::Arc;
use tracker_core::{AssetIdentifier, DescriptionLookup};

use crate::error::TrackerError;
use crate::model::{Description, Report};
use crate::source::PriceSource;

/// Runs one lookup: price first, description only if the price succeeded
#[derive(Clone)]
pub struct Tracker {
    prices: Arc<dyn PriceSource>,
    descriptions: DescriptionLookup,
}

impl Tracker {
    pub fn new(prices: Arc<dyn PriceSource>, descriptions: DescriptionLookup) -> Self {
        Self {
            prices,
            descriptions,
        }
    }

    pub fn price_source(&self) -> &dyn PriceSource {
        self.prices.as_ref()
    }

    pub fn descriptions(&self) -> &DescriptionLookup {
        &self.descriptions
    }

    /// Look up `raw_input` and build a report.
    ///
    /// Empty input makes no upstream calls. A failed price lookup ends the
    /// run before the LLM is asked anything. A failed description still
    /// returns the price, with the description marked unavailable.
    pub async fn run(&self, raw_input: &str) -> Result<Report, TrackerError> {
        let identifier = AssetIdentifier::parse(raw_input).ok_or(TrackerError::EmptyInput)?;

        let price = self.prices.lookup(&identifier).await.map_err(|e| {
            tracing::info!(asset = %identifier, source = self.prices.name(), "price lookup failed: {}", e);
            e
        })?;

        let description = match self.descriptions.describe(&identifier).await {
            Ok(text) => Description::Generated(text),
            Err(e) => {
                tracing::warn!(
                    asset = %identifier,
                    provider = self.descriptions.provider_name(),
                    "description unavailable: {}",
                    e
                );
                Description::Unavailable(e.user_message())
            }
        };

        Ok(Report {
            identifier,
            price,
            description,
            generated_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LookupError;
    use crate::model::PriceRecord;
    use crate::source::StaticPriceSource;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracker_core::{
        Completion, GenerationOptions, LlmError, LlmProvider, Message,
        provider::ModelInfo,
    };

    /// Counts completions; optionally fails them
    struct CountingProvider {
        calls: AtomicUsize,
        fail: bool,
    }

    impl CountingProvider {
        fn ok() -> Arc<Self> {
            Arc::new(Self { calls: AtomicUsize::new(0), fail: false })
        }

        fn broken() -> Arc<Self> {
            Arc::new(Self { calls: AtomicUsize::new(0), fail: true })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl LlmProvider for CountingProvider {
        fn name(&self) -> &str {
            "counting"
        }

        async fn health_check(&self) -> tracker_core::Result<bool> {
            Ok(!self.fail)
        }

        async fn complete(
            &self,
            messages: &[Message],
            options: &GenerationOptions,
        ) -> tracker_core::Result<Completion> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(LlmError::ProviderUnavailable("connection refused".into()));
            }
            Ok(Completion {
                content: format!("About: {}", messages[0].content),
                model: options.model.clone(),
                usage: None,
                finish_reason: None,
            })
        }

        async fn list_models(&self) -> tracker_core::Result<Vec<ModelInfo>> {
            Ok(Vec::new())
        }
    }

    const BITCOIN_BODY: &str = r#"{"bitcoin": {"usd": 65000.5, "usd_market_cap": 1280000000000.0, "usd_24h_change": -1.23}}"#;

    fn tracker(prices: Arc<StaticPriceSource>, llm: Arc<CountingProvider>) -> Tracker {
        Tracker::new(prices, DescriptionLookup::new(llm, GenerationOptions::default()))
    }

    #[tokio::test]
    async fn test_run_bitcoin() {
        let prices = Arc::new(StaticPriceSource::with_body(BITCOIN_BODY));
        let llm = CountingProvider::ok();
        let report = tracker(prices.clone(), llm.clone()).run("Bitcoin").await.unwrap();

        assert_eq!(report.identifier.as_str(), "bitcoin");
        assert_eq!(report.price, PriceRecord::new(65000.5, 1_280_000_000_000.0, -1.23));
        assert_eq!(
            report.description,
            Description::Generated(
                "About: Provide a brief description of bitcoin and its use cases.".into()
            )
        );
        assert_eq!(prices.call_count(), 1);
        assert_eq!(llm.calls(), 1);
    }

    #[tokio::test]
    async fn test_empty_input_makes_no_calls() {
        let prices = Arc::new(StaticPriceSource::with_body(BITCOIN_BODY));
        let llm = CountingProvider::ok();
        let err = tracker(prices.clone(), llm.clone()).run("   ").await.unwrap_err();

        assert_eq!(err, TrackerError::EmptyInput);
        assert_eq!(prices.call_count(), 0);
        assert_eq!(llm.calls(), 0);
    }

    #[tokio::test]
    async fn test_not_found_skips_description() {
        let prices = Arc::new(StaticPriceSource::with_body("{}"));
        let llm = CountingProvider::ok();
        let err = tracker(prices, llm.clone()).run("doesnotexist123").await.unwrap_err();

        assert_eq!(err, TrackerError::Lookup(LookupError::NotFound));
        assert_eq!(llm.calls(), 0);
    }

    #[tokio::test]
    async fn test_transport_error_skips_description() {
        let prices = Arc::new(StaticPriceSource::failing("HTTP 503 Service Unavailable"));
        let llm = CountingProvider::ok();
        let err = tracker(prices, llm.clone()).run("bitcoin").await.unwrap_err();

        match err {
            TrackerError::Lookup(LookupError::Transport(msg)) => assert!(!msg.is_empty()),
            other => panic!("expected transport error, got {:?}", other),
        }
        assert_eq!(llm.calls(), 0);
    }

    #[tokio::test]
    async fn test_malformed_skips_description() {
        let prices = Arc::new(StaticPriceSource::with_body(r#"{"bitcoin": {"usd": 1.0}}"#));
        let llm = CountingProvider::ok();
        let err = tracker(prices, llm.clone()).run("bitcoin").await.unwrap_err();

        assert_eq!(err, TrackerError::Lookup(LookupError::MalformedResponse));
        assert_eq!(llm.calls(), 0);
    }

    #[tokio::test]
    async fn test_description_failure_degrades() {
        let prices = Arc::new(StaticPriceSource::with_body(BITCOIN_BODY));
        let llm = CountingProvider::broken();
        let report = tracker(prices, llm.clone()).run("bitcoin").await.unwrap();

        assert_eq!(report.price.price_usd, 65000.5);
        assert!(matches!(report.description, Description::Unavailable(ref m) if !m.is_empty()));
        assert_eq!(llm.calls(), 1);
    }

    #[tokio::test]
    async fn test_repeated_runs_match() {
        let prices = Arc::new(StaticPriceSource::with_body(BITCOIN_BODY));
        let t = tracker(prices.clone(), CountingProvider::ok());

        let first = t.run("bitcoin").await.unwrap();
        let second = t.run("bitcoin").await.unwrap();
        assert_eq!(first.price, second.price);
        assert_eq!(first.description, second.description);
        assert_eq!(prices.call_count(), 2);
    }
}
