//! Static Price Source
//!
//! For testing and offline demos. Serves canned `/simple/price` bodies through
//! the same parser the CoinGecko client uses.

use async_trait::async_trait;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracker_core::AssetIdentifier;

use super::{PriceSource, parse_simple_price};
use crate::error::LookupError;
use crate::model::PriceRecord;

enum Canned {
    Body(Vec<u8>),
    TransportFailure(String),
}

/// Price source answering every lookup from one canned upstream response
pub struct StaticPriceSource {
    canned: Canned,
    calls: AtomicUsize,
}

impl Default for StaticPriceSource {
    fn default() -> Self {
        Self::demo()
    }
}

impl StaticPriceSource {
    /// Respond with `body` as if it were the upstream JSON
    pub fn with_body(body: impl Into<Vec<u8>>) -> Self {
        Self {
            canned: Canned::Body(body.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Fail every lookup at the transport layer
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            canned: Canned::TransportFailure(message.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Realistic static prices for a handful of majors
    pub fn demo() -> Self {
        let body = json!({
            "bitcoin":  {"usd": 97500.0, "usd_market_cap": 1_930_000_000_000.0_f64, "usd_24h_change": 2.5},
            "ethereum": {"usd": 3450.0,  "usd_market_cap": 415_000_000_000.0_f64,   "usd_24h_change": 1.8},
            "solana":   {"usd": 195.0,   "usd_market_cap": 93_000_000_000.0_f64,    "usd_24h_change": 4.2},
            "cardano":  {"usd": 0.95,    "usd_market_cap": 33_500_000_000.0_f64,    "usd_24h_change": -1.2},
            "dogecoin": {"usd": 0.38,    "usd_market_cap": 56_000_000_000.0_f64,    "usd_24h_change": 12.0},
        });
        Self::with_body(body.to_string())
    }

    /// Number of lookups served so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PriceSource for StaticPriceSource {
    async fn lookup(&self, identifier: &AssetIdentifier) -> Result<PriceRecord, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.canned {
            Canned::Body(body) => parse_simple_price(body, identifier),
            Canned::TransportFailure(message) => Err(LookupError::Transport(message.clone())),
        }
    }

    fn name(&self) -> &str {
        "static"
    }
}
