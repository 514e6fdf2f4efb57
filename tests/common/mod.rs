#![allow(dead_code)]

pub mod mocks;

use gymbro_gateway::{
    config::{GatewayConfig, OllamaConfig, PromptStyle},
    gateway::ChatGateway,
    llm::LlmBackend,
    serverless::FunctionResponse,
};
use serde_json::Value;
use std::sync::Arc;

/// Ollama settings pointing at `base_url` with short timeouts.
pub fn ollama_config(base_url: &str) -> OllamaConfig {
    OllamaConfig {
        base_url: base_url.to_string(),
        model: "gpt-oss:20b".to_string(),
        timeout_secs: Some(5),
        health_timeout_secs: 1,
        ..OllamaConfig::default()
    }
}

/// An address nothing listens on.
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:9";

pub fn gateway_with(backend: Arc<dyn LlmBackend>, quick_responses: bool) -> ChatGateway {
    ChatGateway::new(
        backend,
        GatewayConfig {
            quick_responses,
            prompt_style: PromptStyle::Coach,
        },
    )
}

pub trait FunctionResponseExt {
    /// Body parsed as JSON, `None` for empty or non-JSON bodies.
    fn body_json(&self) -> Option<Value>;
}

impl FunctionResponseExt for FunctionResponse {
    fn body_json(&self) -> Option<Value> {
        serde_json::from_str(&self.body).ok()
    }
}
