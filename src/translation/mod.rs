pub mod prompt;
pub mod service;

pub use prompt::build_prompt;
pub use service::{RequestPacer, TranslationResult, TranslationService};
