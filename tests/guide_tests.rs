use pretty_assertions::assert_eq;
use rstest::rstest;
use std::sync::Arc;
use tourist_guide::{
    Error,
    guide::{ExtractError, PlaceResponse, TouristGuide},
};

mod common;

use common::{mocks::MockLlmClient, test_utils::PARIS_REPLY};

fn guide_with(client: MockLlmClient) -> (TouristGuide, Arc<MockLlmClient>) {
    let client = Arc::new(client);
    (TouristGuide::new(client.clone()), client)
}

#[tokio::test]
async fn test_describe_paris_verbatim() {
    let (guide, _) = guide_with(MockLlmClient::new().with_reply(PARIS_REPLY));

    let response = guide.describe("Paris").await;

    assert_eq!(
        response,
        PlaceResponse {
            place: "Paris".to_string(),
            introduction: "A city.".to_string(),
            top_attractions: vec!["Eiffel Tower".to_string()],
            famous_foods: vec![],
            cultural_highlights: vec![],
            travel_tips: vec![],
        }
    );
}

#[tokio::test]
async fn test_describe_sends_one_prompt_with_trimmed_place() {
    let (guide, client) = guide_with(MockLlmClient::new().with_reply(PARIS_REPLY));

    guide.describe("  Paris \n").await;

    let prompts = client.get_prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains(r#""place": "Paris""#));
}

#[tokio::test]
async fn test_describe_echoes_place_when_model_omits_it() {
    let reply = r#"```json
{"introduction": "Harbour city.", "famous_foods": ["Meat pie"]}
```"#;
    let (guide, _) = guide_with(MockLlmClient::new().with_reply(reply));

    let response = guide.describe(" Sydney ").await;

    assert_eq!(response.place, "Sydney");
    assert_eq!(response.introduction, "Harbour city.");
    assert_eq!(response.famous_foods, vec!["Meat pie".to_string()]);
    assert!(response.top_attractions.is_empty());
}

#[rstest]
#[case::no_object("Sorry, I can only talk about the weather.")]
#[case::malformed("Here you go: {\"place\": \"Rome\", \"introduction\": }")]
#[case::empty("")]
#[tokio::test]
async fn test_describe_degrades_on_bad_reply(#[case] reply: &str) {
    let (guide, _) = guide_with(MockLlmClient::new().with_reply(reply));

    let response = guide.describe("Rome").await;

    assert_eq!(response.place, "Rome");
    assert!(
        response.introduction.contains("error"),
        "introduction was: {}",
        response.introduction
    );
    assert!(response.top_attractions.is_empty());
    assert!(response.famous_foods.is_empty());
    assert!(response.cultural_highlights.is_empty());
    assert!(response.travel_tips.is_empty());
}

#[tokio::test]
async fn test_describe_degrades_on_provider_error() {
    let (guide, _) = guide_with(MockLlmClient::new().with_error("upstream unavailable"));

    let response = guide.describe("Rome").await;

    assert_eq!(
        response,
        PlaceResponse::degraded("Rome", "LLM error: upstream unavailable")
    );
}

#[tokio::test]
async fn test_try_describe_reports_empty_response() {
    let (guide, _) = guide_with(MockLlmClient::new());

    let result = guide.try_describe("Rome").await;

    assert!(matches!(
        result,
        Err(Error::Extract(ExtractError::EmptyResponse))
    ));
}

#[tokio::test]
async fn test_try_describe_reports_no_json() {
    let (guide, _) = guide_with(MockLlmClient::new().with_reply("plain prose"));

    let result = guide.try_describe("Rome").await;

    assert!(matches!(result, Err(Error::Extract(ExtractError::NoJsonFound))));
}

#[tokio::test]
async fn test_try_describe_reports_malformed_json() {
    let (guide, _) = guide_with(MockLlmClient::new().with_reply("{not json}"));

    let result = guide.try_describe("Rome").await;

    assert!(matches!(
        result,
        Err(Error::Extract(ExtractError::MalformedJson(_)))
    ));
}

#[tokio::test]
async fn test_try_describe_reports_provider_error() {
    let (guide, _) = guide_with(MockLlmClient::new().with_error("boom"));

    let result = guide.try_describe("Rome").await;

    assert!(matches!(result, Err(Error::Llm(ref msg)) if msg == "boom"));
}
