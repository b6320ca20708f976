use axum::{extract::State, routing::get, Json, Router};

use crate::config::{API_VERSION, SERVICE_NAME};
use crate::models::{AppState, HealthResponse, ServiceInfo};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .with_state(state)
}

async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: SERVICE_NAME.to_string(),
        version: API_VERSION.to_string(),
        status: "running".to_string(),
    })
}

/// Reports `healthy` while the shared agent exists; never an error status.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let connected = state.agent.is_some();

    Json(HealthResponse {
        status: if connected { "healthy" } else { "degraded" }.to_string(),
        version: API_VERSION.to_string(),
        ai_foundry_connected: connected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::util::ServiceExt;

    use crate::agent::ResumeAnalyzerAgent;
    use crate::config::{AnalysisConfig, Config, FoundryConfig, ServerConfig};
    use crate::llm::ChatClient;
    use crate::types::{AppResult, ChatReply, ChatRequest};

    struct NoopClient;

    #[async_trait]
    impl ChatClient for NoopClient {
        async fn complete(&self, _request: &ChatRequest) -> AppResult<ChatReply> {
            Ok(ChatReply {
                content: String::new(),
                finish_reason: None,
                usage: None,
            })
        }
    }

    fn test_config() -> Config {
        Config {
            server: ServerConfig {
                port: 8000,
                host: "0.0.0.0".to_string(),
            },
            foundry: FoundryConfig {
                endpoint: "https://foundry.example.com".to_string(),
                deployment: "gpt-4o-deployment".to_string(),
                api_key: "test-key".to_string(),
            },
            analysis: AnalysisConfig {
                max_analysis_length: 10_000,
                request_timeout_secs: 30,
            },
            log_level: "INFO".to_string(),
        }
    }

    fn state(with_agent: bool) -> AppState {
        let config = test_config();
        let agent = with_agent.then(|| {
            Arc::new(ResumeAnalyzerAgent::new(
                Arc::new(NoopClient),
                config.foundry.deployment.clone(),
                config.analysis.clone(),
            ))
        });
        AppState { config, agent }
    }

    async fn get_json(state: AppState, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router(state)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_root_reports_service_info() {
        let (status, body) = get_json(state(true), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["service"], "cv-analyzer-ai-service");
        assert_eq!(body["version"], "1.0.0");
        assert_eq!(body["status"], "running");
    }

    #[tokio::test]
    async fn test_health_healthy_when_agent_exists() {
        let (status, body) = get_json(state(true), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["ai_foundry_connected"], true);
    }

    #[tokio::test]
    async fn test_health_degraded_without_agent() {
        let (status, body) = get_json(state(false), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "degraded");
        assert_eq!(body["ai_foundry_connected"], false);
    }
}
