/// Prompt asking the model for exactly one JSON object describing `place`.
pub fn build_prompt(place: &str) -> String {
    format!(
        r#"You are a professional tourist guide.
Return ONLY a valid JSON object, with no explanations or markdown.

{{
  "place": "{place}",
  "introduction": "Short introduction (3-4 sentences) about {place}",
  "top_attractions": ["Top attraction 1", "Top attraction 2", "Top attraction 3", "Top attraction 4", "Top attraction 5"],
  "famous_foods": ["Famous food 1", "Famous food 2", "Famous food 3"],
  "cultural_highlights": ["Highlight 1", "Highlight 2"],
  "travel_tips": ["Tip 1", "Tip 2", "Tip 3"]
}}
"#
    )
}
