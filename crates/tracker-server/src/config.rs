//! Startup Configuration
//!
//! Read once from the environment (after `.env` is loaded) and handed to
//! the components explicitly.

use std::str::FromStr;

use anyhow::Context;
use price_tracker::CoinGeckoConfig;
use tracker_runtime::{GroqConfig, OllamaConfig};

/// Which price source backs `/api/lookup`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PriceSourceKind {
    /// Live CoinGecko API
    CoinGecko,
    /// Built-in static prices, no network
    Static,
}

impl FromStr for PriceSourceKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "coingecko" => Ok(Self::CoinGecko),
            "static" | "mock" => Ok(Self::Static),
            other => anyhow::bail!("unknown PRICE_SOURCE '{}' (expected coingecko or static)", other),
        }
    }
}

/// Which text-generation backend to use
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LlmProviderKind {
    Groq,
    Ollama,
}

impl FromStr for LlmProviderKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "groq" => Ok(Self::Groq),
            "ollama" => Ok(Self::Ollama),
            other => anyhow::bail!("unknown LLM_PROVIDER '{}' (expected groq or ollama)", other),
        }
    }
}

/// Provider-specific LLM settings
#[derive(Clone, Debug)]
pub enum LlmConfig {
    Groq(GroqConfig),
    Ollama(OllamaConfig),
}

/// Everything the server needs at startup
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: String,
    pub static_dir: String,
    pub price_source: PriceSourceKind,
    pub coingecko: CoinGeckoConfig,
    pub llm: LlmConfig,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let price_source: PriceSourceKind = env_or("PRICE_SOURCE", "coingecko").parse()?;
        let provider: LlmProviderKind = env_or("LLM_PROVIDER", "groq").parse()?;

        let llm = match provider {
            LlmProviderKind::Groq => LlmConfig::Groq(
                GroqConfig::from_env().context("Groq is the selected LLM provider")?,
            ),
            LlmProviderKind::Ollama => LlmConfig::Ollama(OllamaConfig::from_env()),
        };

        Ok(Self {
            bind_addr: env_or("BIND_ADDR", "0.0.0.0:3000"),
            static_dir: env_or("STATIC_DIR", "static"),
            price_source,
            coingecko: CoinGeckoConfig::from_env(),
            llm,
        })
    }
}
