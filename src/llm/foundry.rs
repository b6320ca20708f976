// Azure AI Foundry adapter (Azure OpenAI chat-completions wire format)
//
// The deployment is addressed as
//   {endpoint}/openai/deployments/{deployment}/chat/completions?api-version=...
// and authenticated with the `api-key` header.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::FoundryConfig;
use crate::llm::provider::ChatClient;
use crate::types::{AppError, AppResult, ChatMessage, ChatReply, ChatRequest, TokenUsage};

const API_VERSION: &str = "2024-06-01";

pub struct FoundryClient {
    client: Client,
    endpoint: String,
    deployment: String,
    api_key: String,
}

// Request types for the chat-completions API
#[derive(Serialize)]
struct FoundryChatRequest<'a> {
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

// Response types for the chat-completions API
#[derive(Deserialize)]
struct FoundryChatResponse {
    choices: Vec<FoundryChoice>,
    #[serde(default)]
    usage: Option<FoundryUsage>,
}

#[derive(Deserialize)]
struct FoundryChoice {
    message: FoundryResponseMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct FoundryResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct FoundryUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

#[derive(Deserialize)]
struct FoundryErrorResponse {
    error: FoundryError,
}

#[derive(Deserialize)]
struct FoundryError {
    message: String,
}

impl FoundryClient {
    pub fn new(config: &FoundryConfig) -> Self {
        Self {
            client: Client::new(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            deployment: config.deployment.clone(),
            api_key: config.api_key.clone(),
        }
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint, self.deployment, API_VERSION
        )
    }
}

#[async_trait]
impl ChatClient for FoundryClient {
    async fn complete(&self, request: &ChatRequest) -> AppResult<ChatReply> {
        let body = FoundryChatRequest {
            messages: &request.messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        let response = self
            .client
            .post(self.completions_url())
            .header("api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::LLMApi(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<FoundryErrorResponse>(&text)
                .map(|e| e.error.message)
                .unwrap_or(text);
            return Err(AppError::LLMApi(format!(
                "Foundry returned {}: {}",
                status, message
            )));
        }

        let parsed: FoundryChatResponse = response
            .json()
            .await
            .map_err(|e| AppError::LLMApi(format!("Invalid response body: {}", e)))?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::LLMApi("Response contained no choices".to_string()))?;

        let content = choice
            .message
            .content
            .ok_or_else(|| AppError::LLMApi("Response contained no content".to_string()))?;

        Ok(ChatReply {
            content,
            finish_reason: choice.finish_reason,
            usage: parsed.usage.map(|u| TokenUsage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(endpoint: &str) -> FoundryConfig {
        FoundryConfig {
            endpoint: endpoint.to_string(),
            deployment: "gpt-4o-deployment".to_string(),
            api_key: "test-key".to_string(),
        }
    }

    fn request() -> ChatRequest {
        ChatRequest {
            model: "gpt-4o-deployment".to_string(),
            messages: vec![ChatMessage::user("hello")],
            max_tokens: Some(16),
            temperature: Some(0.3),
        }
    }

    #[test]
    fn test_completions_url() {
        let client = FoundryClient::new(&config("https://foundry.example.com/"));
        assert_eq!(
            client.completions_url(),
            format!(
                "https://foundry.example.com/openai/deployments/gpt-4o-deployment/chat/completions?api-version={}",
                API_VERSION
            )
        );
    }

    #[tokio::test]
    async fn test_complete_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock(
                "POST",
                mockito::Matcher::Regex("/openai/deployments/gpt-4o-deployment/chat/completions.*".to_string()),
            )
            .match_header("api-key", "test-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "choices": [
                        {"message": {"role": "assistant", "content": "hi there"}, "finish_reason": "stop"}
                    ],
                    "usage": {"prompt_tokens": 5, "completion_tokens": 2, "total_tokens": 7}
                }"#,
            )
            .create_async()
            .await;

        let client = FoundryClient::new(&config(&server.url()));
        let reply = client.complete(&request()).await.unwrap();

        assert_eq!(reply.content, "hi there");
        assert_eq!(reply.finish_reason.as_deref(), Some("stop"));
        assert_eq!(reply.usage.unwrap().total_tokens, 7);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_complete_api_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock(
                "POST",
                mockito::Matcher::Regex("/openai/deployments/.*".to_string()),
            )
            .with_status(401)
            .with_body(r#"{"error": {"message": "invalid api key", "code": "401"}}"#)
            .create_async()
            .await;

        let client = FoundryClient::new(&config(&server.url()));
        let err = client.complete(&request()).await.unwrap_err();

        match err {
            AppError::LLMApi(message) => assert!(message.contains("invalid api key")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_complete_empty_choices() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock(
                "POST",
                mockito::Matcher::Regex("/openai/deployments/.*".to_string()),
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices": []}"#)
            .create_async()
            .await;

        let client = FoundryClient::new(&config(&server.url()));
        assert!(client.complete(&request()).await.is_err());
    }
}
