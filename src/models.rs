use std::sync::Arc;

use crate::agent::ResumeAnalyzerAgent;
use crate::config::Config;
use crate::types::AppError;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Shared analyzer agent, set once at startup. `None` means the remote
    /// client could not be constructed and the service runs degraded.
    pub agent: Option<Arc<ResumeAnalyzerAgent>>,
}

const MIN_CONTENT_LENGTH: usize = 10;
const MAX_CONTENT_LENGTH: usize = 10_000;
const MAX_USER_ID_LENGTH: usize = 100;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AnalyzeRequest {
    /// Resume content to analyze
    pub content: String,
    /// User ID for tracking
    pub user_id: String,
}

impl AnalyzeRequest {
    /// Validate field constraints before the request reaches the agent.
    pub fn validate(&self) -> Result<(), AppError> {
        let content_chars = self.content.chars().count();
        if content_chars < MIN_CONTENT_LENGTH {
            return Err(AppError::InvalidRequest(format!(
                "content must be at least {} characters",
                MIN_CONTENT_LENGTH
            )));
        }
        if content_chars > MAX_CONTENT_LENGTH {
            return Err(AppError::InvalidRequest(format!(
                "content must be at most {} characters",
                MAX_CONTENT_LENGTH
            )));
        }
        if self.content.trim().is_empty() {
            return Err(AppError::InvalidRequest(
                "content cannot be empty or whitespace".to_string(),
            ));
        }
        if self.user_id.is_empty() {
            return Err(AppError::InvalidRequest(
                "user_id cannot be empty".to_string(),
            ));
        }
        if self.user_id.chars().count() > MAX_USER_ID_LENGTH {
            return Err(AppError::InvalidRequest(format!(
                "user_id must be at most {} characters",
                MAX_USER_ID_LENGTH
            )));
        }
        Ok(())
    }
}

/// Individual improvement suggestion from the model
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Suggestion {
    pub category: String,
    pub description: String,
    /// Priority 1-5, where 1 is highest
    pub priority: u8,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AnalyzeResponse {
    /// Overall resume score (0-100)
    pub score: f64,
    /// AI-optimized version of the resume
    pub optimized_content: String,
    pub suggestions: Vec<Suggestion>,
    pub analysis_metadata: AnalysisMetadata,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AnalysisMetadata {
    pub processing_time_ms: f64,
    pub model_used: String,
    /// Length of the content actually submitted (after truncation)
    pub content_length: usize,
    pub user_id: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub ai_foundry_connected: bool,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ServiceInfo {
    pub service: String,
    pub version: String,
    pub status: String,
}
