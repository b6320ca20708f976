//! API Routes
//!
//! - `GET /` - service info
//! - `GET /health` - health check
//! - `POST /analyze` - resume analysis

pub mod analysis;
pub mod health;

use std::any::Any;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::middleware::cors::apply_cors;
use crate::models::AppState;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    let router = Router::new()
        .merge(health::router(state.clone()))
        .merge(analysis::router(state));

    apply_cors(router)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
}

/// Last-resort handler: any panic while serving a request becomes the same
/// generic 500 body instead of a dropped connection.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> axum::response::Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };
    error!(panic = %detail, "Unhandled panic while serving request");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({
            "detail": "An unexpected error occurred. Please try again later."
        })),
    )
        .into_response()
}
