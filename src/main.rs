use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cv_analyzer_ai_service::agent::ResumeAnalyzerAgent;
use cv_analyzer_ai_service::llm::FoundryClient;
use cv_analyzer_ai_service::{create_router, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing, defaulting the filter from LOG_LEVEL
    let default_filter = format!(
        "cv_analyzer_ai_service={},tower_http=info",
        config.log_level.to_lowercase()
    );
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CV Analyzer AI Service...");
    info!("Configuration loaded: {:?}", config.server);

    // One client and one agent for the process lifetime, shared by all
    // requests through AppState.
    let client = Arc::new(FoundryClient::new(&config.foundry));
    let agent = Arc::new(ResumeAnalyzerAgent::new(
        client,
        config.foundry.deployment.clone(),
        config.analysis.clone(),
    ));
    info!(
        deployment = %config.foundry.deployment,
        "Resume Analyzer Agent initialized"
    );

    let state = AppState {
        config: config.clone(),
        agent: Some(agent),
    };

    let app = create_router(state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    info!("Server listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutting down CV Analyzer AI Service...");
}
