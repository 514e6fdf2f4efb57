use super::client::LlmBackend;
use super::types::{Generation, GenerationRequest, Task};
use crate::knowledge;
use async_trait::async_trait;

/// Answers from the static training knowledge without any model.
pub struct KnowledgeBackend;

#[async_trait]
impl LlmBackend for KnowledgeBackend {
    fn model(&self) -> &str {
        "knowledge-base"
    }

    async fn is_available(&self) -> bool {
        true
    }

    async fn generate(&self, request: GenerationRequest) -> Generation {
        match request.task {
            Task::Chat => Generation::Answer(knowledge::answer(&request.message)),
            Task::Analysis => Generation::Answer(knowledge::analysis_summary(
                &request.message,
                &request.reasoning_level,
            )),
        }
    }
}
