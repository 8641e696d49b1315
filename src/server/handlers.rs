use super::types::{HealthResponse, ModelsResponse, WelcomeResponse};
use crate::{
    config::AppConfig,
    guide::{PlaceRequest, PlaceResponse, TouristGuide},
    llm::LlmClient,
};
use axum::{extract::State, response::Json};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub app: Arc<AppConfig>,
    pub llm_client: Arc<dyn LlmClient>,
    pub guide: TouristGuide,
}

impl AppState {
    pub fn new(app: AppConfig, llm_client: Arc<dyn LlmClient>) -> Self {
        Self {
            app: Arc::new(app),
            guide: TouristGuide::new(llm_client.clone()),
            llm_client,
        }
    }
}

pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the Tourist Guide API".to_string(),
    })
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    match state.llm_client.ping().await {
        Ok(()) => Json(HealthResponse::healthy(&state.app.name, &state.app.version)),
        Err(e) => {
            error!("Health check could not reach Gemini: {}", e);
            Json(HealthResponse::degraded(e.to_string()))
        }
    }
}

pub async fn list_models(State(state): State<AppState>) -> Json<ModelsResponse> {
    match state.llm_client.list_models().await {
        Ok(models) => {
            info!("Listing {} models", models.len());
            Json(ModelsResponse::success(models))
        }
        Err(e) => {
            error!("Failed to list models: {}", e);
            Json(ModelsResponse::Error {
                error: e.to_string(),
            })
        }
    }
}

pub async fn tourist_guide(
    State(state): State<AppState>,
    Json(request): Json<PlaceRequest>,
) -> Json<PlaceResponse> {
    info!("Received tourist guide request for place: {}", request.place);

    Json(state.guide.describe(&request.place).await)
}
