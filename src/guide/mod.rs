//! Tourist guide generation.
//!
//! A guide is produced in one model call: build the prompt, send it, pull the
//! first JSON object out of the reply and fill in whatever the model left out.
//! Callers of [`TouristGuide::describe`] always get a [`PlaceResponse`]; the
//! failure reason ends up in its `introduction`.

mod extract;
mod prompt;
mod types;

pub use extract::{ExtractError, extract_guide, locate_json_span};
pub use prompt::build_prompt;
pub use types::*;

use crate::{Result, llm::LlmClient};
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Clone)]
pub struct TouristGuide {
    llm_client: Arc<dyn LlmClient>,
}

impl TouristGuide {
    pub fn new(llm_client: Arc<dyn LlmClient>) -> Self {
        Self { llm_client }
    }

    /// Guide for `place`, degraded instead of failing.
    pub async fn describe(&self, place: &str) -> PlaceResponse {
        let place = place.trim();

        match self.try_describe(place).await {
            Ok(guide) => guide,
            Err(e) => {
                warn!("Returning degraded guide for '{}': {}", place, e);
                PlaceResponse::degraded(place, e)
            }
        }
    }

    pub async fn try_describe(&self, place: &str) -> Result<PlaceResponse> {
        let place = place.trim();
        let prompt = build_prompt(place);

        let raw = self.llm_client.generate(&prompt).await?;
        debug!(
            "Model replied with {} bytes for '{}'",
            raw.as_ref().map_or(0, String::len),
            place
        );

        Ok(extract_guide(raw.as_deref(), place)?)
    }
}
