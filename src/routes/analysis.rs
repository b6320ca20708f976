use axum::{extract::State, routing::post, Json, Router};
use tracing::info;

use crate::models::{AnalyzeRequest, AnalyzeResponse, AppState};
use crate::types::AppError;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/analyze", post(analyze_resume))
        .with_state(state)
}

/// Analyze a resume and provide optimization suggestions.
///
/// Request validation happens before the agent is touched; agent errors map
/// to HTTP statuses via `AppError`'s `IntoResponse`.
async fn analyze_resume(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    info!(user_id = %request.user_id, "Received analysis request");

    request.validate()?;

    let agent = state
        .agent
        .clone()
        .ok_or_else(|| AppError::Internal("Agent not initialized".to_string()))?;

    let response = agent
        .analyze(request.content.trim(), &request.user_id)
        .await?;

    info!(
        user_id = %request.user_id,
        score = response.score,
        suggestions = response.suggestions.len(),
        "Analysis completed"
    );

    Ok(Json(response))
}
