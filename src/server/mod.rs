mod handlers;
mod types;

pub use handlers::AppState;
pub use types::{HealthResponse, RootResponse};

use crate::{
    Result,
    config::{Config, CorsConfig},
    gateway::{ChatGateway, mode_label},
    llm::create_backend,
    serverless::ServerlessFunctions,
};
use axum::{
    Router,
    http::HeaderValue,
    routing::{any, get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

pub async fn run(config: Config) -> Result<()> {
    let backend = create_backend(&config.backend).await?;
    info!("Backend ready: {}", backend.model());

    let functions = ServerlessFunctions::from_config(&config, &backend);
    let gateway_config = config.gateway.for_backend(config.backend.kind);

    let app_state = AppState {
        mode: mode_label(config.backend.kind, gateway_config.quick_responses),
        gateway: Arc::new(ChatGateway::new(backend, gateway_config)),
        functions: Arc::new(functions),
    };

    let app = router(app_state, &config.server.cors);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// The function routes answer their own CORS headers, so the CORS layer only
/// wraps the regular API.
pub fn router(state: AppState, cors: &CorsConfig) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/chat", post(handlers::chat))
        .route("/analyze-training", post(handlers::analyze_training))
        .layer(cors_layer(cors))
        .route("/chat-python", any(handlers::chat_function))
        .route("/health-python", any(handlers::health_function))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.allowed_origins.iter().any(|origin| origin == "*") {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();
    layer.allow_origin(origins)
}
