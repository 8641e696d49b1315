use super::types::PlaceResponse;
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use thiserror::Error;

// First `{` through last `}`, across newlines.
static JSON_OBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[\s\S]*\}").expect("JSON object pattern is valid"));

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("Model did not return text")]
    EmptyResponse,

    #[error("Model output is not valid JSON")]
    NoJsonFound,

    #[error("Model output contains malformed JSON: {0}")]
    MalformedJson(String),
}

/// Fields as the model sent them; anything absent or null falls back later.
#[derive(Debug, Deserialize)]
struct RawGuide {
    place: Option<String>,
    introduction: Option<String>,
    top_attractions: Option<Vec<String>>,
    famous_foods: Option<Vec<String>>,
    cultural_highlights: Option<Vec<String>>,
    travel_tips: Option<Vec<String>>,
}

/// Greedy brace-delimited span, if the text contains one.
pub fn locate_json_span(text: &str) -> Option<&str> {
    JSON_OBJECT.find(text).map(|m| m.as_str())
}

/// Turns raw model output into a guide for `place`.
pub fn extract_guide(raw: Option<&str>, place: &str) -> Result<PlaceResponse, ExtractError> {
    let text = match raw {
        Some(text) if !text.is_empty() => text,
        _ => return Err(ExtractError::EmptyResponse),
    };

    let span = locate_json_span(text).ok_or(ExtractError::NoJsonFound)?;

    let guide: RawGuide =
        serde_json::from_str(span).map_err(|e| ExtractError::MalformedJson(e.to_string()))?;

    Ok(PlaceResponse {
        place: guide.place.unwrap_or_else(|| place.to_string()),
        introduction: guide.introduction.unwrap_or_default(),
        top_attractions: guide.top_attractions.unwrap_or_default(),
        famous_foods: guide.famous_foods.unwrap_or_default(),
        cultural_highlights: guide.cultural_highlights.unwrap_or_default(),
        travel_tips: guide.travel_tips.unwrap_or_default(),
    })
}
