//! Domain Models
//!
//! Price values are kept exactly as the price service returned them.
//! Rounding only happens when rendering a `Report` summary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracker_core::AssetIdentifier;

use crate::format::{float_repr, grouped_2dp, percent_2dp};

/// Price snapshot for one asset, quoted in USD
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    /// Spot price
    pub price_usd: f64,

    /// Market capitalization
    pub market_cap_usd: f64,

    /// Price change over the last 24 hours, in percent
    pub change_24h_pct: f64,
}

impl PriceRecord {
    pub fn new(price_usd: f64, market_cap_usd: f64, change_24h_pct: f64) -> Self {
        Self {
            price_usd,
            market_cap_usd,
            change_24h_pct,
        }
    }
}

/// Outcome of the description step
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "text", rename_all = "snake_case")]
pub enum Description {
    /// Text from the LLM, unmodified
    Generated(String),
    /// The provider failed; carries a user-facing reason
    Unavailable(String),
}

/// Everything shown for one lookup
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Report {
    pub identifier: AssetIdentifier,
    pub price: PriceRecord,
    pub description: Description,
    pub generated_at: DateTime<Utc>,
}

impl Report {
    /// Human-readable price block
    ///
    /// ```text
    /// Current Price of Bitcoin
    /// Price (USD): $65000.5
    /// Market Cap (USD): $1,280,000,000,000.00
    /// 24h Price Change: -1.23%
    /// ```
    pub fn summary(&self) -> String {
        format!(
            "Current Price of {}\nPrice (USD): ${}\nMarket Cap (USD): ${}\n24h Price Change: {}",
            self.identifier.display_name(),
            float_repr(self.price.price_usd),
            grouped_2dp(self.price.market_cap_usd),
            percent_2dp(self.price.change_24h_pct),
        )
    }
}
