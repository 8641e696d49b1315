use super::mocks::MockLlmClient;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use serde_json::Value;
use std::sync::Arc;
use tourist_guide::{
    config::{AppConfig, ServerConfig},
    llm::ModelInfo,
    server::{build_router, handlers::AppState},
};

/// Reply from the model that wraps a complete guide for Paris in chatter.
pub const PARIS_REPLY: &str = r#"Sure! {"place":"Paris","introduction":"A city.","top_attractions":["Eiffel Tower"],"famous_foods":[],"cultural_highlights":[],"travel_tips":[]}"#;

pub fn create_test_app_config() -> AppConfig {
    AppConfig {
        name: "Tourist Guide API".to_string(),
        version: "3.4".to_string(),
    }
}

/// Router wired to the given mock, with a single allowed CORS origin.
pub fn create_test_app(client: MockLlmClient) -> Router {
    create_test_app_with_origins(client, &["http://localhost:4200"])
}

pub fn create_test_app_with_origins(client: MockLlmClient, origins: &[&str]) -> Router {
    let server = ServerConfig {
        allowed_origins: origins.iter().map(|o| o.to_string()).collect(),
        ..ServerConfig::default()
    };
    let state = AppState::new(create_test_app_config(), Arc::new(client));

    build_router(state, &server)
}

pub fn create_test_model(name: &str) -> ModelInfo {
    ModelInfo {
        name: name.to_string(),
        supported_generation_methods: vec!["generateContent".to_string()],
        description: format!("Test model {}", name),
    }
}

pub fn json_post(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn response_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Asserts the body carries every guide field with the expected JSON types.
pub fn assert_guide_shape(body: &Value) {
    assert!(body["place"].is_string(), "place missing in {body}");
    assert!(body["introduction"].is_string(), "introduction missing in {body}");
    for key in [
        "top_attractions",
        "famous_foods",
        "cultural_highlights",
        "travel_tips",
    ] {
        assert!(body[key].is_array(), "{key} missing in {body}");
    }
}
