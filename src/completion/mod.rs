pub mod interface;
pub mod openrouter;

pub use interface::{ChatPrompt, CompletionError, CompletionProvider};
pub use openrouter::OpenRouterProvider;
