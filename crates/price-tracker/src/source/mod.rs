//! Price Sources
//!
//! Abstractions and implementations for price-data services.

mod coingecko;
mod mock;

pub use coingecko::{CoinGeckoClient, CoinGeckoConfig, parse_simple_price};
pub use mock::StaticPriceSource;

use async_trait::async_trait;
use tracker_core::AssetIdentifier;

use crate::error::LookupError;
use crate::model::PriceRecord;

/// Price source trait (Strategy pattern)
///
/// Implement this for each price service. One call is one upstream
/// request; implementations must not retry.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Current USD price, market cap and 24h change for an asset
    async fn lookup(&self, identifier: &AssetIdentifier) -> Result<PriceRecord, LookupError>;

    /// Source name
    fn name(&self) -> &str;
}
