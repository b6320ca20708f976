// Type definitions shared across the service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ChatMessage {
    pub role: String, // "user", "assistant", "system"
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ChatReply {
    pub content: String,
    pub finish_reason: Option<String>,
    pub usage: Option<TokenUsage>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("Analysis request timed out. Please try again.")]
    Timeout,

    #[error("LLM API error: {0}")]
    LLMApi(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

const GENERIC_ANALYSIS_ERROR: &str =
    "An error occurred during resume analysis. Please try again later.";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Only client input problems and timeouts are shown verbatim;
        // everything else is logged and replaced by a generic message.
        let (status, detail) = match &self {
            AppError::InvalidRequest(_) | AppError::Timeout => {
                tracing::warn!(error = %self, "Client error during analysis");
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::LLMApi(_) | AppError::Internal(_) => {
                tracing::error!(error = %self, "Server error during analysis");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    GENERIC_ANALYSIS_ERROR.to_string(),
                )
            }
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_message_is_user_facing() {
        assert_eq!(
            AppError::Timeout.to_string(),
            "Analysis request timed out. Please try again."
        );
    }

    #[test]
    fn test_status_mapping() {
        let res = AppError::InvalidRequest("too short".into()).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let res = AppError::Timeout.into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let res = AppError::LLMApi("boom".into()).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let res = AppError::Internal("boom".into()).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
