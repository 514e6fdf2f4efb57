//! In-process text generation behind a chat template.
//!
//! The generator is loaded once and shared by handle. Generation is
//! synchronous and runs on the blocking pool; any serialization of concurrent
//! calls is up to the generator itself.

use super::client::LlmBackend;
use super::types::{
    ChatMessage, DegradedReason, Generation, GenerationRequest, PromptFormat, Role, Task,
};
use crate::{Result, config::PipelineConfig};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

pub const TURN_START: &str = "<|im_start|>";
pub const TURN_END: &str = "<|im_end|>";
pub const ASSISTANT_START: &str = "<|im_start|>assistant\n";

const ANALYSIS_MAX_TOKENS: u32 = 768;
const ANALYSIS_TEMPERATURE: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    pub max_tokens: u32,
    pub temperature: f64,
}

/// A loaded tokenizer + causal language model.
///
/// Returns the full text, prompt included, the way a text-generation
/// pipeline does by default.
pub trait TextGenerator: Send + Sync {
    fn generate(&self, prompt: &str, params: &SamplingParams) -> Result<String>;
}

/// Renders the turns with the `<|im_start|>`/`<|im_end|>` vocabulary and
/// leaves an open assistant turn at the end.
pub fn format_chat(messages: &[ChatMessage], reasoning_level: &str) -> String {
    let mut formatted = String::new();

    for message in messages {
        formatted.push_str(TURN_START);
        formatted.push_str(message.role.as_str());
        formatted.push('\n');
        if message.role == Role::System {
            formatted.push_str(&format!("Reasoning: {reasoning_level}\n"));
        }
        formatted.push_str(&message.content);
        formatted.push_str(TURN_END);
        formatted.push('\n');
    }

    formatted.push_str(ASSISTANT_START);
    formatted
}

/// Pulls the last assistant turn out of the generated text.
///
/// Without an assistant delimiter the whole output comes back trimmed and
/// tagged as degraded.
pub fn extract_assistant_reply(generated: &str) -> Generation {
    match generated.rsplit_once(ASSISTANT_START) {
        Some((_, reply)) => Generation::Answer(reply.replace(TURN_END, "").trim().to_string()),
        None => Generation::Degraded {
            text: generated.trim().to_string(),
            reason: DegradedReason::MissingDelimiter,
        },
    }
}

pub struct PipelineBackend {
    config: PipelineConfig,
    generator: Arc<dyn TextGenerator>,
}

impl PipelineBackend {
    pub fn new(config: PipelineConfig, generator: Arc<dyn TextGenerator>) -> Self {
        Self { config, generator }
    }

    fn sampling_for(&self, request: &GenerationRequest) -> SamplingParams {
        match request.task {
            Task::Chat => SamplingParams {
                max_tokens: request.max_tokens.unwrap_or(self.config.max_tokens),
                temperature: request.temperature.unwrap_or(self.config.temperature),
            },
            Task::Analysis => SamplingParams {
                max_tokens: ANALYSIS_MAX_TOKENS,
                temperature: ANALYSIS_TEMPERATURE,
            },
        }
    }
}

#[async_trait]
impl LlmBackend for PipelineBackend {
    fn model(&self) -> &str {
        &self.config.model_id
    }

    fn prompt_format(&self) -> PromptFormat {
        PromptFormat::Messages
    }

    async fn is_available(&self) -> bool {
        true
    }

    async fn generate(&self, request: GenerationRequest) -> Generation {
        let params = self.sampling_for(&request);
        let formatted = format_chat(&request.prompt.into_messages(), &request.reasoning_level);

        info!(
            "Generating with reasoning level {} (max_tokens={}, temperature={})",
            request.reasoning_level, params.max_tokens, params.temperature
        );
        debug!(
            "Formatted input (first 200 chars): {}",
            formatted.chars().take(200).collect::<String>()
        );

        let generator = Arc::clone(&self.generator);
        let outcome =
            tokio::task::spawn_blocking(move || generator.generate(&formatted, &params)).await;

        match outcome {
            Ok(Ok(text)) => {
                let generation = extract_assistant_reply(&text);
                if generation.is_degraded() {
                    warn!("Generated text has no assistant delimiter, returning raw output");
                }
                generation
            }
            Ok(Err(e)) => {
                error!("Generation failed: {}", e);
                Generation::Failed(format!("Error generando respuesta: {e}"))
            }
            Err(e) => {
                error!("Generation task aborted: {}", e);
                Generation::Failed(format!("Error generando respuesta: {e}"))
            }
        }
    }
}
