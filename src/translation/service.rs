use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::completion::{CompletionError, CompletionProvider};
use crate::translation::prompt::build_prompt;

/// Fixed-interval pacing between consecutive gateway calls within one
/// batch. The upstream gateway rate-limits per caller; pacing trades
/// latency for not getting burst-rejected.
#[derive(Debug, Clone, Copy)]
pub struct RequestPacer {
    interval: Duration,
}

impl RequestPacer {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    /// Suspend until the next call may be issued.
    pub async fn pause(&self) {
        tokio::time::sleep(self.interval).await;
    }
}

impl Default for RequestPacer {
    fn default() -> Self {
        Self::from_millis(500)
    }
}

/// Outcome of translating one language. Exactly one of translated text
/// or error; stays typed until the response is serialized.
#[derive(Debug)]
pub struct TranslationResult {
    pub language: String,
    pub outcome: Result<String, CompletionError>,
}

/// One request's translator: fans a single source text out across
/// target languages through the shared completion provider. Owned by
/// the request that built it; no state survives the response.
pub struct TranslationService {
    provider: Arc<dyn CompletionProvider>,
    pacer: RequestPacer,
}

impl TranslationService {
    pub fn new(provider: Arc<dyn CompletionProvider>, pacer: RequestPacer) -> Self {
        Self { provider, pacer }
    }

    /// Translate into one language. Provider failures of any kind are
    /// captured into the result; they never propagate to the caller, so
    /// one language cannot abort its siblings.
    pub async fn translate(
        &self,
        text: &str,
        language: &str,
        cultural_context: f64,
    ) -> TranslationResult {
        let prompt = build_prompt(text, language, cultural_context);
        match self.provider.complete(&prompt).await {
            Ok(completion) => TranslationResult {
                language: language.to_string(),
                outcome: Ok(completion.trim().to_string()),
            },
            Err(err) => {
                warn!("Translation into {} failed: {}", language, err);
                TranslationResult {
                    language: language.to_string(),
                    outcome: Err(err),
                }
            }
        }
    }

    /// Translate into every language in order, producing exactly one
    /// result per input language. Languages are processed strictly
    /// sequentially with a pacing pause between consecutive calls
    /// (none after the last).
    pub async fn batch_translate(
        &self,
        text: &str,
        languages: &[String],
        cultural_context: f64,
    ) -> Vec<TranslationResult> {
        let mut results = Vec::with_capacity(languages.len());
        for (i, language) in languages.iter().enumerate() {
            debug!(
                "Translating into {} ({}/{})",
                language,
                i + 1,
                languages.len()
            );
            results.push(self.translate(text, language, cultural_context).await);

            if i < languages.len() - 1 {
                self.pacer.pause().await;
            }
        }
        results
    }
}
