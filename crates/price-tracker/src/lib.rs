//! # price-tracker
//!
//! Current price, market cap and 24h change for a cryptocurrency, followed
//! by an LLM-written description.
//!
//! ## Flow
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Tracker::run("Bitcoin")                                     │
//! ├──────────────────────────────────────────────────────────────┤
//! │  1. normalize   "Bitcoin" → bitcoin       (empty → rejected) │
//! │  2. PriceSource GET /simple/price?ids=bitcoin&vs_currencies… │
//! │       NotFound / Transport / Malformed → stop, no LLM call   │
//! │  3. Description "Provide a brief description of bitcoin…"   │
//! │       failure → report price, description marked unavailable│
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every step is a single attempt. Nothing is cached or retried.

pub mod error;
pub mod format;
pub mod model;
pub mod source;
pub mod tracker;

pub use error::{LookupError, TrackerError};
pub use model::{Description, PriceRecord, Report};
pub use source::{CoinGeckoClient, CoinGeckoConfig, PriceSource, StaticPriceSource};
pub use tracker::Tracker;
pub use tracker_core::AssetIdentifier;
