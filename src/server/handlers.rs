use super::types::{HealthResponse, RootResponse};
use crate::{
    gateway::{ChatGateway, ChatRequest, ChatResponse},
    serverless::{FunctionEvent, FunctionResponse, ServerlessFunctions},
};
use axum::{extract::State, http::Method, response::Json};
use std::sync::Arc;
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<ChatGateway>,
    pub functions: Arc<ServerlessFunctions>,
    /// Health `mode` label, fixed at startup.
    pub mode: &'static str,
}

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "GymBro Training Assistant API".to_string(),
        status: "running".to_string(),
    })
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let backend = state.gateway.backend();
    let model_loaded = backend.is_available().await;
    Json(HealthResponse::new(model_loaded, state.mode, backend.model()))
}

pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let span = info_span!("chat", request_id = %Uuid::new_v4());
    let response = state.gateway.chat(request).instrument(span).await;
    Json(response)
}

pub async fn analyze_training(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let span = info_span!("analyze_training", request_id = %Uuid::new_v4());
    let response = state
        .gateway
        .analyze_training_data(request)
        .instrument(span)
        .await;
    Json(response)
}

pub async fn chat_function(
    State(state): State<AppState>,
    method: Method,
    body: String,
) -> FunctionResponse {
    info!("Function chat invoked with {}", method);
    state.functions.chat(function_event(method, body)).await
}

pub async fn health_function(
    State(state): State<AppState>,
    method: Method,
    body: String,
) -> FunctionResponse {
    state.functions.health(function_event(method, body)).await
}

fn function_event(method: Method, body: String) -> FunctionEvent {
    let body = (!body.is_empty()).then_some(body);
    FunctionEvent::new(method.as_str(), body)
}
