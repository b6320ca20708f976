use anyhow::Result;
use serde::Deserialize;
use std::env;

pub const SERVICE_NAME: &str = "cv-analyzer-ai-service";
pub const API_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub foundry: FoundryConfig,
    pub analysis: AnalysisConfig,
    pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FoundryConfig {
    pub endpoint: String,
    pub deployment: String,
    pub api_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Max characters submitted for analysis; longer input is hard-truncated.
    pub max_analysis_length: usize,
    /// Budget for a single remote call, in seconds.
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .unwrap_or_else(|_| "8000".to_string())
                    .parse()?,
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            },
            foundry: FoundryConfig {
                endpoint: env::var("AI_FOUNDRY_ENDPOINT")
                    .unwrap_or_else(|_| "https://your-foundry-project.api.azureml.ms".to_string()),
                deployment: env::var("MODEL_DEPLOYMENT_NAME")
                    .unwrap_or_else(|_| "gpt-4o-deployment".to_string()),
                api_key: env::var("AI_FOUNDRY_API_KEY").unwrap_or_default(),
            },
            analysis: AnalysisConfig {
                max_analysis_length: env::var("MAX_ANALYSIS_LENGTH")
                    .unwrap_or_else(|_| "10000".to_string())
                    .parse()?,
                request_timeout_secs: env::var("REQUEST_TIMEOUT")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()?,
            },
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "INFO".to_string()),
        })
    }
}
