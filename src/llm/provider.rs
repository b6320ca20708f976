use async_trait::async_trait;

use crate::types::{AppResult, ChatReply, ChatRequest};

/// Object-safe seam over the hosted chat-completion service.
///
/// Production code uses `FoundryClient`; tests substitute a fake
/// implementation so the agent can be exercised without the network.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn complete(&self, request: &ChatRequest) -> AppResult<ChatReply>;
}
