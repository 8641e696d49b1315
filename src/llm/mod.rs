mod client;
mod types;

pub use client::{GeminiClient, LlmClient, normalize_model_name};
pub use types::*;
