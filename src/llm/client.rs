use super::types::{Generation, GenerationRequest, PromptFormat};
use super::{KnowledgeBackend, OllamaBackend, PipelineBackend};
use crate::{
    Result,
    config::{BackendConfig, BackendKind},
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

/// A model backend the gateway can delegate a prompt to.
///
/// `generate` never returns an error: failures come back as
/// [`Generation::Failed`] so the caller can still answer the request.
#[async_trait]
pub trait LlmBackend: Send + Sync {
    /// Model identifier reported by `/health`.
    fn model(&self) -> &str;

    fn prompt_format(&self) -> PromptFormat {
        PromptFormat::Text
    }

    async fn is_available(&self) -> bool;

    async fn generate(&self, request: GenerationRequest) -> Generation;
}

/// Builds the configured backend. Loading an in-process model happens here,
/// so a failure is fatal to the caller.
pub async fn create_backend(config: &BackendConfig) -> Result<Arc<dyn LlmBackend>> {
    match config.kind {
        BackendKind::Ollama => {
            info!(
                "Using Ollama backend at {} with model {}",
                config.ollama.base_url, config.ollama.model
            );
            Ok(Arc::new(OllamaBackend::new(config.ollama.clone())?))
        }
        BackendKind::Pipeline => {
            info!("Loading in-process model {}", config.pipeline.model_id);
            let pipeline = config.pipeline.clone();
            let generator = tokio::task::spawn_blocking(move || load_generator(&pipeline)).await??;
            info!("Model {} loaded", config.pipeline.model_id);
            Ok(Arc::new(PipelineBackend::new(config.pipeline.clone(), generator)))
        }
        BackendKind::Knowledge => {
            info!("Using static knowledge backend");
            Ok(Arc::new(KnowledgeBackend))
        }
    }
}

#[cfg(feature = "candle")]
pub fn load_generator(
    config: &crate::config::PipelineConfig,
) -> Result<Arc<dyn super::TextGenerator>> {
    Ok(Arc::new(super::candle::CandleGenerator::load(config)?))
}

#[cfg(not(feature = "candle"))]
pub fn load_generator(
    config: &crate::config::PipelineConfig,
) -> Result<Arc<dyn super::TextGenerator>> {
    Err(crate::Error::config(format!(
        "cannot load {}: built without the `candle` feature",
        config.model_id
    )))
}
