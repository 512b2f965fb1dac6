//! Asset Identifiers

use serde::{Deserialize, Serialize};

/// Lowercase key naming a cryptocurrency (e.g. "bitcoin", "ethereum").
///
/// This is the id CoinGecko uses, not a ticker symbol. Construction only
/// trims and case-folds; whether the id actually exists is for the price
/// source to decide.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetIdentifier(String);

impl AssetIdentifier {
    /// Normalize raw user input. Returns `None` when nothing is left.
    pub fn parse(raw: &str) -> Option<Self> {
        let id = raw.trim().to_lowercase();
        if id.is_empty() {
            None
        } else {
            Some(Self(id))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display name with the first letter upper-cased ("bitcoin" → "Bitcoin")
    pub fn display_name(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl std::fmt::Display for AssetIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AssetIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
