//! CoinGecko price source implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracker_core::AssetIdentifier;

use super::PriceSource;
use crate::error::LookupError;
use crate::model::PriceRecord;

/// CoinGecko API base URL
pub const COINGECKO_API_URL: &str = "https://api.coingecko.com/api/v3";

/// CoinGecko API endpoint for simple price queries
pub const SIMPLE_PRICE_ENDPOINT: &str = "/simple/price";

/// HTTP request timeout when fetching prices (in seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// CoinGecko client configuration
#[derive(Clone)]
pub struct CoinGeckoConfig {
    /// API base URL, without the endpoint path
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Optional demo API key, sent as `x-cg-demo-api-key`
    pub api_key: Option<String>,
}

impl std::fmt::Debug for CoinGeckoConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinGeckoConfig")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Default for CoinGeckoConfig {
    fn default() -> Self {
        Self {
            base_url: COINGECKO_API_URL.into(),
            timeout_secs: REQUEST_TIMEOUT_SECS,
            api_key: None,
        }
    }
}

impl CoinGeckoConfig {
    /// Read `COINGECKO_BASE_URL`, `PRICE_TIMEOUT_SECS` and `COINGECKO_API_KEY`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("COINGECKO_BASE_URL").unwrap_or(defaults.base_url),
            timeout_secs: std::env::var("PRICE_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.timeout_secs),
            api_key: std::env::var("COINGECKO_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
        }
    }
}

/// Fields required from each entry of a `/simple/price` response
#[derive(Debug, Deserialize)]
struct SimplePriceEntry {
    usd: f64,
    usd_market_cap: f64,
    usd_24h_change: f64,
}

/// Interpret a `/simple/price` body for one asset.
///
/// A body that is not JSON at all counts as a transport failure; JSON of the
/// wrong shape is `MalformedResponse`; a missing key is `NotFound`.
pub fn parse_simple_price(
    body: &[u8],
    identifier: &AssetIdentifier,
) -> Result<PriceRecord, LookupError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| LookupError::Transport(format!("response body is not JSON: {}", e)))?;

    let Value::Object(mut prices) = value else {
        tracing::warn!("CoinGecko response is not a JSON object");
        return Err(LookupError::MalformedResponse);
    };

    let entry = prices
        .remove(identifier.as_str())
        .ok_or(LookupError::NotFound)?;

    let entry: SimplePriceEntry = serde_json::from_value(entry).map_err(|e| {
        tracing::warn!("CoinGecko entry for {} is malformed: {}", identifier, e);
        LookupError::MalformedResponse
    })?;

    Ok(PriceRecord::new(
        entry.usd,
        entry.usd_market_cap,
        entry.usd_24h_change,
    ))
}

/// CoinGecko price source
pub struct CoinGeckoClient {
    client: Client,
    config: CoinGeckoConfig,
}

impl CoinGeckoClient {
    /// Creates a new CoinGecko client
    pub fn new(config: CoinGeckoConfig) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("crypto-tracker/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &CoinGeckoConfig {
        &self.config
    }

    fn url(&self) -> String {
        format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            SIMPLE_PRICE_ENDPOINT
        )
    }
}

#[async_trait]
impl PriceSource for CoinGeckoClient {
    async fn lookup(&self, identifier: &AssetIdentifier) -> Result<PriceRecord, LookupError> {
        let url = self.url();
        tracing::debug!("Fetching price from CoinGecko: {} ids={}", url, identifier);

        let mut request = self
            .client
            .get(&url)
            .header("accept", "application/json")
            .query(&[
                ("ids", identifier.as_str()),
                ("vs_currencies", "usd"),
                ("include_market_cap", "true"),
                ("include_24hr_change", "true"),
            ]);
        if let Some(key) = &self.config.api_key {
            request = request.header("x-cg-demo-api-key", key);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Transport(format!("HTTP {}", status)));
        }

        let body = response.bytes().await?;
        tracing::debug!("CoinGecko returned {} bytes", body.len());

        parse_simple_price(&body, identifier)
    }

    fn name(&self) -> &str {
        "coingecko"
    }
}
