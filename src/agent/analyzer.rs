use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::time::timeout;
use tracing::{error, info, warn};

use crate::agent::{parser, prompts};
use crate::config::AnalysisConfig;
use crate::llm::ChatClient;
use crate::models::{AnalysisMetadata, AnalyzeResponse};
use crate::types::{AppError, AppResult, ChatMessage, ChatRequest};

/// Resume analyzer agent. One instance is constructed at startup and shared
/// by all requests; the injected client is the only remote dependency.
pub struct ResumeAnalyzerAgent {
    client: Arc<dyn ChatClient>,
    deployment: String,
    settings: AnalysisConfig,
}

impl ResumeAnalyzerAgent {
    pub fn new(
        client: Arc<dyn ChatClient>,
        deployment: impl Into<String>,
        settings: AnalysisConfig,
    ) -> Self {
        Self {
            client,
            deployment: deployment.into(),
            settings,
        }
    }

    /// Analyze a resume and return structured results.
    ///
    /// The remote call is bounded by the configured timeout; an unparseable
    /// model reply is absorbed into the normalizer's fallback and is never an
    /// error here.
    pub async fn analyze(&self, content: &str, user_id: &str) -> AppResult<AnalyzeResponse> {
        let started = Instant::now();

        info!(
            user_id,
            content_length = content.chars().count(),
            "Analyzing resume"
        );

        let content = self.truncate(content);

        let request = ChatRequest {
            model: self.deployment.clone(),
            messages: vec![
                ChatMessage::system(prompts::AGENT_INSTRUCTIONS),
                ChatMessage::user(prompts::analysis_prompt(content)),
            ],
            max_tokens: None,
            temperature: None,
        };

        let budget = Duration::from_secs(self.settings.request_timeout_secs);
        let reply = match timeout(budget, self.client.complete(&request)).await {
            Ok(result) => result.map_err(|e| {
                error!(user_id, error = %e, "Analysis failed");
                e
            })?,
            Err(_) => {
                error!(user_id, "Analysis timeout");
                return Err(AppError::Timeout);
            }
        };

        let analysis = parser::normalize(&reply.content);

        let processing_time_ms =
            (started.elapsed().as_secs_f64() * 1000.0 * 100.0).round() / 100.0;
        let metadata = AnalysisMetadata {
            processing_time_ms,
            model_used: self.deployment.clone(),
            content_length: content.chars().count(),
            user_id: user_id.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        info!(
            user_id,
            score = analysis.score,
            processing_time_ms,
            "Analysis complete"
        );

        Ok(AnalyzeResponse {
            score: analysis.score,
            optimized_content: analysis.optimized_content,
            suggestions: analysis.suggestions,
            analysis_metadata: metadata,
        })
    }

    /// Hard cut at the configured maximum character count, no marker.
    fn truncate<'a>(&self, content: &'a str) -> &'a str {
        match content.char_indices().nth(self.settings.max_analysis_length) {
            Some((idx, _)) => {
                warn!(
                    max = self.settings.max_analysis_length,
                    "Content truncated for analysis"
                );
                &content[..idx]
            }
            None => content,
        }
    }
}
