use serde::{Deserialize, Serialize};

/// Runtime configuration, read once from the environment at startup and
/// shared read-only for the lifetime of the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub port: u16,
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    /// Forwarded to the gateway as HTTP-Referer, used upstream for
    /// attribution only.
    pub site_url: String,
    /// Forwarded to the gateway as X-Title.
    pub site_name: String,
    /// Pause between consecutive gateway calls within one batch.
    pub pacing_ms: u64,
}

fn default_base_url() -> String {
    "https://openrouter.ai/api/v1".to_string()
}

fn default_model() -> String {
    "openai/gpt-4o-mini".to_string()
}

fn default_site_url() -> String {
    "https://your-app-domain.com".to_string()
}

fn default_site_name() -> String {
    "Translation Service".to_string()
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env_parsed("PORT", 8000),
            api_key: std::env::var("OPENROUTER_API_KEY").unwrap_or_default(),
            base_url: std::env::var("OPENROUTER_BASE_URL").unwrap_or_else(|_| default_base_url()),
            model: std::env::var("OPENROUTER_MODEL").unwrap_or_else(|_| default_model()),
            site_url: std::env::var("SITE_URL").unwrap_or_else(|_| default_site_url()),
            site_name: std::env::var("SITE_NAME").unwrap_or_else(|_| default_site_name()),
            pacing_ms: env_parsed("PACING_MS", 500),
        }
    }
}

fn env_parsed<T: std::str::FromStr>(name: &str, fallback: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(fallback)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8000,
            api_key: String::new(),
            base_url: default_base_url(),
            model: default_model(),
            site_url: default_site_url(),
            site_name: default_site_name(),
            pacing_ms: 500,
        }
    }
}
