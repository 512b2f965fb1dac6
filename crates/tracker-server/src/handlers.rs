//! HTTP Handlers

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use price_tracker::{LookupError, Report, TrackerError};
use tracker_core::provider::ModelInfo;

use crate::state::AppState;

// ============================================================================
// Request / Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub price_source: String,
    pub llm_provider: String,
    pub llm_connected: bool,
}

#[derive(Debug, Deserialize)]
pub struct LookupRequest {
    /// Raw asset identifier as typed by the user
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct LookupResponse {
    pub request_id: String,
    /// Formatted price block
    pub summary: String,
    #[serde(flatten)]
    pub report: Report,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn tracker_error(err: &TrackerError) -> ApiError {
    let status = match err {
        TrackerError::EmptyInput => StatusCode::BAD_REQUEST,
        TrackerError::Lookup(LookupError::NotFound) => StatusCode::NOT_FOUND,
        TrackerError::Lookup(LookupError::Transport(_) | LookupError::MalformedResponse) => {
            StatusCode::BAD_GATEWAY
        }
    };
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
            code: err.code().into(),
        }),
    )
}

fn invalid_request(rejection: &JsonRejection) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: rejection.body_text(),
            code: "INVALID_REQUEST".into(),
        }),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let descriptions = state.tracker.descriptions();
    let llm_connected = descriptions.provider().health_check().await.unwrap_or(false);

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        price_source: state.tracker.price_source().name().to_string(),
        llm_provider: descriptions.provider_name().to_string(),
        llm_connected,
    })
}

/// Price plus description for one asset
pub async fn lookup_handler(
    State(state): State<AppState>,
    payload: Result<Json<LookupRequest>, JsonRejection>,
) -> Result<Json<LookupResponse>, ApiError> {
    let request_id = uuid::Uuid::new_v4().to_string();
    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!(%request_id, "rejected lookup body: {}", rejection);
        invalid_request(&rejection)
    })?;

    let report = state.tracker.run(&payload.id).await.map_err(|e| {
        if matches!(e, TrackerError::Lookup(LookupError::Transport(_) | LookupError::MalformedResponse)) {
            tracing::error!(%request_id, "lookup failed: {}", e);
        }
        tracker_error(&e)
    })?;

    Ok(Json(LookupResponse {
        request_id,
        summary: report.summary(),
        report,
    }))
}

/// Models offered by the configured LLM provider
pub async fn list_models(State(state): State<AppState>) -> Result<Json<Vec<ModelInfo>>, ApiError> {
    state
        .tracker
        .descriptions()
        .provider()
        .list_models()
        .await
        .map(Json)
        .map_err(|e| {
            tracing::warn!("Failed to list models: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: e.user_message(),
                    code: "PROVIDER_ERROR".into(),
                }),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_router;
    use async_trait::async_trait;
    use axum::{
        body::{Body, to_bytes},
        http::Request,
    };
    use price_tracker::{StaticPriceSource, Tracker};
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;
    use tracker_core::{Completion, DescriptionLookup, GenerationOptions, LlmError, LlmProvider, Message};

    struct CannedProvider {
        up: bool,
    }

    #[async_trait]
    impl LlmProvider for CannedProvider {
        fn name(&self) -> &str {
            "canned"
        }

        async fn health_check(&self) -> tracker_core::Result<bool> {
            Ok(self.up)
        }

        async fn complete(
            &self,
            _messages: &[Message],
            options: &GenerationOptions,
        ) -> tracker_core::Result<Completion> {
            if !self.up {
                return Err(LlmError::ProviderUnavailable("down".into()));
            }
            Ok(Completion {
                content: "Bitcoin is a peer-to-peer currency.".into(),
                model: options.model.clone(),
                usage: None,
                finish_reason: None,
            })
        }

        async fn list_models(&self) -> tracker_core::Result<Vec<ModelInfo>> {
            if !self.up {
                return Err(LlmError::ProviderUnavailable("down".into()));
            }
            Ok(vec![ModelInfo { id: "canned-1".into(), owned_by: None }])
        }
    }

    fn app(prices: StaticPriceSource, llm_up: bool) -> axum::Router {
        app_with(Arc::new(prices), llm_up)
    }

    fn app_with(prices: Arc<StaticPriceSource>, llm_up: bool) -> axum::Router {
        let descriptions = DescriptionLookup::new(
            Arc::new(CannedProvider { up: llm_up }),
            GenerationOptions::default(),
        );
        let state = AppState {
            tracker: Arc::new(Tracker::new(prices, descriptions)),
        };
        build_router(state, "static")
    }

    async fn send(app: axum::Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn post_lookup(app: axum::Router, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/api/lookup")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        send(app, request).await
    }

    async fn get(app: axum::Router, uri: &str) -> (StatusCode, Value) {
        send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
    }

    const BITCOIN_BODY: &str = r#"{"bitcoin": {"usd": 65000.5, "usd_market_cap": 1280000000000.0, "usd_24h_change": -1.23}}"#;

    #[tokio::test]
    async fn test_lookup_success() {
        let app = app(StaticPriceSource::with_body(BITCOIN_BODY), true);
        let (status, json) = post_lookup(app, r#"{"id": "Bitcoin"}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["identifier"], "bitcoin");
        assert_eq!(json["price"]["price_usd"], 65000.5);
        assert_eq!(json["description"]["status"], "generated");
        assert!(json["summary"].as_str().unwrap().contains("$1,280,000,000,000.00"));
        assert!(!json["request_id"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_lookup_degraded_description() {
        let app = app(StaticPriceSource::with_body(BITCOIN_BODY), false);
        let (status, json) = post_lookup(app, r#"{"id": "bitcoin"}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["description"]["status"], "unavailable");
    }

    #[tokio::test]
    async fn test_lookup_error_statuses() {
        let cases = [
            (StaticPriceSource::with_body("{}"), r#"{"id": "doesnotexist123"}"#, StatusCode::NOT_FOUND, "NOT_FOUND"),
            (StaticPriceSource::with_body(BITCOIN_BODY), r#"{"id": "  "}"#, StatusCode::BAD_REQUEST, "EMPTY_INPUT"),
            (StaticPriceSource::failing("HTTP 500"), r#"{"id": "bitcoin"}"#, StatusCode::BAD_GATEWAY, "TRANSPORT_ERROR"),
            (
                StaticPriceSource::with_body(r#"{"bitcoin": {"usd": 1.0}}"#),
                r#"{"id": "bitcoin"}"#,
                StatusCode::BAD_GATEWAY,
                "MALFORMED_RESPONSE",
            ),
        ];

        for (prices, body, expected_status, expected_code) in cases {
            let (status, json) = post_lookup(app(prices, true), body).await;
            assert_eq!(status, expected_status, "body: {}", body);
            assert_eq!(json["code"], expected_code);
            assert!(!json["error"].as_str().unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn test_lookup_rejects_bad_bodies() {
        for body in ["{}", "not json", r#"{"id": 42}"#] {
            let prices = Arc::new(StaticPriceSource::with_body(BITCOIN_BODY));
            let (status, json) = post_lookup(app_with(prices.clone(), true), body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body: {}", body);
            assert_eq!(json["code"], "INVALID_REQUEST");
            assert!(!json["error"].as_str().unwrap().is_empty());
            assert_eq!(prices.call_count(), 0);
        }
    }

    #[tokio::test]
    async fn test_lookup_without_content_type() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/lookup")
            .body(Body::from(r#"{"id": "bitcoin"}"#))
            .unwrap();
        let (status, json) = send(app(StaticPriceSource::demo(), true), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "INVALID_REQUEST");
    }

    #[tokio::test]
    async fn test_list_models() {
        let (status, json) = get(app(StaticPriceSource::demo(), true), "/api/models").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json.as_array().unwrap().len(), 1);
        assert_eq!(json[0]["id"], "canned-1");
    }

    #[tokio::test]
    async fn test_list_models_provider_down() {
        let (status, json) = get(app(StaticPriceSource::demo(), false), "/api/models").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(json["code"], "PROVIDER_ERROR");
        assert!(!json["error"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_health() {
        let (status, json) = get(app(StaticPriceSource::demo(), true), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["price_source"], "static");
        assert_eq!(json["llm_provider"], "canned");
        assert_eq!(json["llm_connected"], true);
    }
}
