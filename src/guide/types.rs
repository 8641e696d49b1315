use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct PlaceRequest {
    pub place: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceResponse {
    pub place: String,
    pub introduction: String,
    pub top_attractions: Vec<String>,
    pub famous_foods: Vec<String>,
    pub cultural_highlights: Vec<String>,
    pub travel_tips: Vec<String>,
}

impl PlaceResponse {
    /// Best-effort answer carrying `reason` in the introduction and no lists.
    pub fn degraded(place: &str, reason: impl std::fmt::Display) -> Self {
        Self {
            place: place.to_string(),
            introduction: format!("An error occurred: {}", reason),
            top_attractions: Vec::new(),
            famous_foods: Vec::new(),
            cultural_highlights: Vec::new(),
            travel_tips: Vec::new(),
        }
    }
}
