use crate::llm::ModelInfo;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub gemini_status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthResponse {
    pub fn healthy(app_name: &str, version: &str) -> Self {
        Self {
            status: HealthStatus::Healthy,
            app_name: Some(app_name.to_string()),
            version: Some(version.to_string()),
            gemini_status: "connected".to_string(),
            error: None,
        }
    }

    pub fn degraded(error: impl Into<String>) -> Self {
        Self {
            status: HealthStatus::Degraded,
            app_name: None,
            version: None,
            gemini_status: "not connected".to_string(),
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ModelsResponse {
    Success {
        total_models: usize,
        models: Vec<ModelInfo>,
    },
    Error {
        error: String,
    },
}

impl ModelsResponse {
    pub fn success(models: Vec<ModelInfo>) -> Self {
        Self::Success {
            total_models: models.len(),
            models,
        }
    }
}
