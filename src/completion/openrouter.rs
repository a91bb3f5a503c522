use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::interface::{ChatPrompt, CompletionError, CompletionProvider};
use crate::config::Config;

/// Sampling temperature kept low to favor fidelity over creativity.
const TEMPERATURE: f32 = 0.3;
/// Output allowance sized so long source documents are never truncated.
const MAX_TOKENS: u32 = 180_000;

/// Client for an OpenRouter-compatible chat-completions endpoint.
///
/// Built once at startup; the API key and attribution headers are baked
/// into the underlying client and never mutated per request.
pub struct OpenRouterProvider {
    client: Client,
    base_url: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

impl OpenRouterProvider {
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", config.api_key))?,
        );
        headers.insert("HTTP-Referer", HeaderValue::from_str(&config.site_url)?);
        headers.insert("X-Title", HeaderValue::from_str(&config.site_name)?);

        let client = Client::builder().default_headers(headers).build()?;
        info!(
            "Initialized OpenRouterProvider: model={}, base_url={}",
            config.model, config.base_url
        );
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl CompletionProvider for OpenRouterProvider {
    async fn complete(&self, prompt: &ChatPrompt) -> Result<String, CompletionError> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &prompt.system,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt.user,
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let response = self.client.post(&url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CompletionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;
        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| CompletionError::Malformed("no choices in completion".to_string()))?;
        Ok(choice.message.content)
    }
}
