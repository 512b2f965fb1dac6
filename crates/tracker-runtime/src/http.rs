//! HTTP error mapping shared by the providers

use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracker_core::LlmError;

/// Build a client with a bounded request timeout
pub(crate) fn build_client(timeout_secs: u64) -> Result<Client, LlmError> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(concat!("crypto-tracker/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| LlmError::Config(format!("failed to build HTTP client: {}", e)))
}

/// Classify a failure that happened before any response arrived
pub(crate) fn map_send_error(provider: &str, err: reqwest::Error) -> LlmError {
    if err.is_connect() || err.is_timeout() {
        LlmError::ProviderUnavailable(format!("{}: {}", provider, err))
    } else {
        LlmError::Provider(format!("{}: {}", provider, err))
    }
}

/// Classify a non-success status
pub(crate) fn map_status(provider: &str, status: StatusCode, body: &str) -> LlmError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            LlmError::Auth(format!("{} rejected credentials (HTTP {})", provider, status))
        }
        StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimited(format!("{}: {}", provider, body)),
        s if s.is_server_error() => {
            LlmError::ProviderUnavailable(format!("{} HTTP {}: {}", provider, s, body))
        }
        s => LlmError::Provider(format!("{} HTTP {}: {}", provider, s, body)),
    }
}

/// Read a response body, turning non-success statuses into errors
pub(crate) async fn read_success_body(
    provider: &str,
    response: reqwest::Response,
) -> Result<String, LlmError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| map_send_error(provider, e))?;

    if !status.is_success() {
        return Err(map_status(provider, status, &body));
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            map_status("groq", StatusCode::UNAUTHORIZED, ""),
            LlmError::Auth(_)
        ));
        assert!(matches!(
            map_status("groq", StatusCode::TOO_MANY_REQUESTS, "slow down"),
            LlmError::RateLimited(_)
        ));
        assert!(matches!(
            map_status("groq", StatusCode::BAD_GATEWAY, ""),
            LlmError::ProviderUnavailable(_)
        ));
        assert!(matches!(
            map_status("groq", StatusCode::BAD_REQUEST, "bad model"),
            LlmError::Provider(ref m) if m.contains("bad model")
        ));
    }
}
