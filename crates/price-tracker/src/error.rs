//! Error Types for Price Tracking

use thiserror::Error;

/// Why a price lookup failed. None of these are retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The price service does not know the identifier
    #[error("Cryptocurrency not found")]
    NotFound,

    /// Network or HTTP failure before a structured body was obtained
    #[error("CoinGecko API error: {0}")]
    Transport(String),

    /// The body parsed but lacks the fields we need
    #[error("Invalid response from CoinGecko API")]
    MalformedResponse,
}

impl LookupError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            LookupError::NotFound => "NOT_FOUND",
            LookupError::Transport(_) => "TRANSPORT_ERROR",
            LookupError::MalformedResponse => "MALFORMED_RESPONSE",
        }
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        LookupError::Transport(err.to_string())
    }
}

/// Errors surfaced by the tracker controller
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    #[error("Please enter a cryptocurrency name.")]
    EmptyInput,

    #[error(transparent)]
    Lookup(#[from] LookupError),
}

impl TrackerError {
    pub fn code(&self) -> &'static str {
        match self {
            TrackerError::EmptyInput => "EMPTY_INPUT",
            TrackerError::Lookup(e) => e.code(),
        }
    }
}
