pub mod handlers;
pub mod types;

use crate::{
    Result,
    config::{Config, ServerConfig},
    llm::{GeminiClient, LlmClient},
};
use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

pub async fn run(config: Config) -> Result<()> {
    if config.llm.api_key.is_empty() {
        warn!("GEMINI_API_KEY is not set; Gemini calls will be rejected");
    }

    // Initialize the model client once; handlers share it read-only
    let llm_client: Arc<dyn LlmClient> = Arc::new(GeminiClient::new(config.llm.clone()));
    let app_state = AppState::new(config.app.clone(), llm_client);

    let app = build_router(app_state, &config.server);

    // Start server
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!(
        "Starting {} v{} on {}",
        config.app.name, config.app.version, addr
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

pub fn build_router(state: AppState, server: &ServerConfig) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/models", get(handlers::list_models))
        .route("/tourist-guide", post(handlers::tourist_guide))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(&server.allowed_origins)),
        )
        .with_state(state)
}

/// Credentialed CORS for the configured origins; `*` mirrors the caller.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let allow_origin = if allowed_origins.iter().any(|origin| origin == "*") {
        AllowOrigin::mirror_request()
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Skipping invalid CORS origin: '{}'", origin);
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
