use std::sync::Arc;

use crate::completion::{CompletionProvider, OpenRouterProvider};
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub completions: Arc<dyn CompletionProvider>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let completions = Arc::new(OpenRouterProvider::new(&config)?);
        Ok(Self {
            config,
            completions,
        })
    }

    /// Build a state around an existing provider, so tests can
    /// substitute the gateway.
    pub fn with_provider(config: Config, completions: Arc<dyn CompletionProvider>) -> Self {
        Self {
            config,
            completions,
        }
    }
}
