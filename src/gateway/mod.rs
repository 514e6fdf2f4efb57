mod types;

pub use types::*;

use crate::{
    config::{BackendKind, GatewayConfig},
    knowledge,
    llm::{Generation, GenerationRequest, LlmBackend, Prompt, PromptFormat, Task},
    prompt,
};
use std::sync::Arc;
use tracing::{error, info};

/// Turns chat requests into at most one backend call each.
pub struct ChatGateway {
    backend: Arc<dyn LlmBackend>,
    config: GatewayConfig,
}

impl ChatGateway {
    pub fn new(backend: Arc<dyn LlmBackend>, config: GatewayConfig) -> Self {
        Self { backend, config }
    }

    pub fn backend(&self) -> &Arc<dyn LlmBackend> {
        &self.backend
    }

    pub async fn chat(&self, request: ChatRequest) -> ChatResponse {
        self.reply(request).await.into()
    }

    /// Like [`chat`](Self::chat) but keeps track of where the answer came from.
    pub async fn reply(&self, request: ChatRequest) -> Reply {
        info!("Processing message: {}", request.message);

        if self.config.quick_responses {
            if let Some(entry) = knowledge::quick::find(&request.message) {
                info!("Using quick response for category '{}'", entry.category);
                return Reply::Quick {
                    category: entry.category,
                    text: entry.text,
                };
            }
        }

        info!("Using model {}", self.backend.model());

        let prompt = match self.backend.prompt_format() {
            PromptFormat::Text => Prompt::Text(prompt::chat_prompt(
                self.config.prompt_style,
                &request.message,
                request.context(),
                &request.reasoning_level,
            )),
            PromptFormat::Messages => {
                Prompt::Messages(prompt::chat_messages(&request.message, request.context()))
            }
        };

        let generation = self
            .dispatch(GenerationRequest {
                task: Task::Chat,
                message: request.message,
                prompt,
                reasoning_level: request.reasoning_level,
                max_tokens: request.max_tokens,
                temperature: request.temperature,
            })
            .await;

        Reply::Model(generation)
    }

    pub async fn analyze_training_data(&self, request: ChatRequest) -> ChatResponse {
        self.analyze(request).await.into()
    }

    pub async fn analyze(&self, request: ChatRequest) -> Generation {
        info!(
            "Analyzing {} chars of training data",
            request.message.chars().count()
        );

        let prompt = prompt::analysis_prompt(self.config.prompt_style, &request.message);

        self.dispatch(GenerationRequest {
            task: Task::Analysis,
            message: request.message,
            prompt: Prompt::Text(prompt),
            reasoning_level: request.reasoning_level,
            max_tokens: None,
            temperature: None,
        })
        .await
    }

    async fn dispatch(&self, request: GenerationRequest) -> Generation {
        let generation = self.backend.generate(request).await;
        if let Generation::Failed(message) = &generation {
            error!("Backend {} failed: {}", self.backend.model(), message);
        }
        generation
    }
}

/// Label reported as `mode` by the health endpoint.
pub fn mode_label(kind: BackendKind, quick_responses: bool) -> &'static str {
    match (kind, quick_responses) {
        (BackendKind::Ollama, true) => "hybrid",
        (BackendKind::Ollama, false) => "fast_ai",
        (BackendKind::Pipeline, _) => "pipeline",
        (BackendKind::Knowledge, _) => "intelligent",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_labels() {
        assert_eq!(mode_label(BackendKind::Ollama, true), "hybrid");
        assert_eq!(mode_label(BackendKind::Ollama, false), "fast_ai");
        assert_eq!(mode_label(BackendKind::Pipeline, true), "pipeline");
        assert_eq!(mode_label(BackendKind::Knowledge, false), "intelligent");
    }
}
