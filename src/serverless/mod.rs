//! The chat contract packaged as function-as-a-service handlers.
//!
//! Each handler takes one [`FunctionEvent`] and always answers with a
//! [`FunctionResponse`] carrying CORS headers, including on errors. The model
//! is loaded on the first valid call; until that succeeds callers get static
//! advice instead of an error.

mod types;

pub use types::*;

use crate::{
    Error, Result,
    config::{BackendKind, Config, GatewayConfig, PromptStyle, ServerlessConfig},
    gateway::{ChatGateway, ChatRequest, ChatResponse, Reply, default_reasoning_level},
    knowledge,
    llm::{Generation, LlmBackend, PipelineBackend, load_generator},
};
use chrono::Utc;
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{error, info, warn};

pub type ModelLoader = dyn Fn() -> Result<Arc<dyn LlmBackend>> + Send + Sync;

const FALLBACK_MODEL: &str = "fallback";

pub struct ServerlessFunctions {
    config: ServerlessConfig,
    loader: Arc<ModelLoader>,
    model: OnceCell<Arc<dyn LlmBackend>>,
}

impl ServerlessFunctions {
    pub fn new(
        config: ServerlessConfig,
        loader: impl Fn() -> Result<Arc<dyn LlmBackend>> + Send + Sync + 'static,
    ) -> Self {
        Self {
            config,
            loader: Arc::new(loader),
            model: OnceCell::new(),
        }
    }

    /// Starts with `model` already loaded; the loader is never called.
    pub fn with_model(mut self, model: Arc<dyn LlmBackend>) -> Self {
        self.model = OnceCell::new_with(Some(model));
        self
    }

    /// Reuses `startup` when the server already runs the in-process pipeline,
    /// otherwise loads the pipeline on first use.
    pub fn from_config(config: &Config, startup: &Arc<dyn LlmBackend>) -> Self {
        let pipeline = config.backend.pipeline.clone();
        let functions = Self::new(config.serverless.clone(), move || {
            let generator = load_generator(&pipeline)?;
            let backend: Arc<dyn LlmBackend> =
                Arc::new(PipelineBackend::new(pipeline.clone(), generator));
            Ok(backend)
        });

        match config.backend.kind {
            BackendKind::Pipeline => functions.with_model(Arc::clone(startup)),
            BackendKind::Ollama | BackendKind::Knowledge => functions,
        }
    }

    pub fn is_model_loaded(&self) -> bool {
        self.model.initialized()
    }

    /// Returns the cached model, loading it if needed. A failed load is not
    /// cached, so the next call tries again.
    async fn model(&self) -> Option<Arc<dyn LlmBackend>> {
        let loader = Arc::clone(&self.loader);
        let loaded = self
            .model
            .get_or_try_init(|| async move {
                match tokio::task::spawn_blocking(move || (*loader)()).await {
                    Ok(result) => result,
                    Err(e) => Err(e.into()),
                }
            })
            .await;

        match loaded {
            Ok(model) => Some(Arc::clone(model)),
            Err(e) => {
                warn!("Model not available, answering with fallback: {}", e);
                None
            }
        }
    }

    pub async fn chat(&self, event: FunctionEvent) -> FunctionResponse {
        match event.http_method.as_str() {
            "OPTIONS" => return FunctionResponse::new(200, ""),
            "POST" => {}
            _ => return FunctionResponse::json(405, &json!({"error": "Method not allowed"})),
        }

        let raw = event.body.as_deref().unwrap_or("{}");
        let body: FunctionChatBody = match serde_json::from_str(raw).map_err(Error::from) {
            Ok(body) => body,
            Err(e) => {
                error!("Invalid function body: {}", e);
                return self.internal_error(&e.to_string());
            }
        };

        let message = body.message.unwrap_or_default();
        let reasoning_level = body.reasoning_level.unwrap_or_else(default_reasoning_level);
        if message.is_empty() {
            return FunctionResponse::json(400, &json!({"error": "Message is required"}));
        }

        info!(
            "Message received: {}...",
            message.chars().take(100).collect::<String>()
        );
        info!(
            "Context received (length): {}",
            body.context.as_deref().map_or(0, |c| c.chars().count())
        );

        let Some(model) = self.model().await else {
            return FunctionResponse::json(
                200,
                &json!({
                    "response": knowledge::setup_fallback(&message),
                    "model": FALLBACK_MODEL,
                    "reasoning_level": reasoning_level,
                }),
            );
        };

        let gateway = ChatGateway::new(
            Arc::clone(&model),
            GatewayConfig {
                quick_responses: false,
                prompt_style: PromptStyle::Coach,
            },
        );
        let request = ChatRequest {
            message,
            reasoning_level: reasoning_level.clone(),
            context: body.context,
            max_tokens: body.max_tokens,
            temperature: body.temperature,
        };

        match gateway.reply(request).await {
            Reply::Model(Generation::Failed(reason)) => self.internal_error(&reason),
            reply => {
                let response = ChatResponse::from(reply);
                FunctionResponse::json(
                    200,
                    &json!({
                        "response": response.response,
                        "model": model.model(),
                        "reasoning_level": reasoning_level,
                    }),
                )
            }
        }
    }

    pub async fn health(&self, event: FunctionEvent) -> FunctionResponse {
        match event.http_method.as_str() {
            "OPTIONS" => return FunctionResponse::new(200, ""),
            "GET" => {}
            _ => return FunctionResponse::json(405, &json!({"error": "Method not allowed"})),
        }

        let loaded = self.model.get();
        let mode = if loaded.is_some() { "pipeline" } else { FALLBACK_MODEL };
        let model = loaded.map_or(FALLBACK_MODEL, |model| model.model());
        FunctionResponse::json(
            200,
            &json!({
                "status": "healthy",
                "model_loaded": loaded.is_some(),
                "mode": mode,
                "model": model,
                "timestamp": Utc::now().to_rfc3339(),
                "environment": self.config.environment,
            }),
        )
    }

    fn internal_error(&self, details: &str) -> FunctionResponse {
        let mut body = json!({"error": "Error interno del servidor"});
        if self.config.expose_details() {
            body["details"] = Value::String(details.to_string());
        }
        FunctionResponse::json(500, &body)
    }
}
