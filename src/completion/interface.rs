use async_trait::async_trait;
use thiserror::Error;

/// One chat-style completion request: the system instruction plus the
/// user message carrying the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatPrompt {
    pub system: String,
    pub user: String,
}

/// Failure taxonomy at the gateway seam. Variants stay typed inside the
/// relay and are flattened to an "Error: <message>" string only when a
/// response is serialized.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("gateway returned status {status}: {message}")]
    Api { status: u16, message: String },
    #[error("malformed completion response: {0}")]
    Malformed(String),
}

/// Interface to the external LLM completion gateway.
///
/// The gateway is an opaque capability: given a prompt it returns
/// generated text or fails. Implementations must be safe to share
/// across concurrent requests.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, prompt: &ChatPrompt) -> Result<String, CompletionError>;
}
