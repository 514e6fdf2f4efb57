use async_trait::async_trait;
use gymbro_gateway::{
    Error, Result,
    llm::{
        Generation, GenerationRequest, LlmBackend, PromptFormat, SamplingParams, TextGenerator,
    },
};
use std::sync::{Arc, Mutex};

/// Mock backend that records every request and replays scripted generations
#[derive(Debug)]
pub struct MockBackend {
    pub generations: Arc<Mutex<Vec<Generation>>>,
    pub requests: Arc<Mutex<Vec<GenerationRequest>>>,
    pub available: bool,
    pub format: PromptFormat,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            generations: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            available: true,
            format: PromptFormat::Text,
        }
    }

    pub fn with_generations(self, generations: Vec<Generation>) -> Self {
        *self.generations.lock().unwrap() = generations;
        self
    }

    pub fn with_answer(self, text: &str) -> Self {
        self.with_generations(vec![Generation::Answer(text.to_string())])
    }

    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }

    pub fn with_format(mut self, format: PromptFormat) -> Self {
        self.format = format;
        self
    }

    pub fn get_requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LlmBackend for MockBackend {
    fn model(&self) -> &str {
        "mock-model"
    }

    fn prompt_format(&self) -> PromptFormat {
        self.format
    }

    async fn is_available(&self) -> bool {
        self.available
    }

    async fn generate(&self, request: GenerationRequest) -> Generation {
        self.requests.lock().unwrap().push(request);

        let mut generations = self.generations.lock().unwrap();
        if generations.is_empty() {
            return Generation::Failed("No more mock generations available".to_string());
        }
        generations.remove(0)
    }
}

/// Text generator that echoes the prompt followed by a scripted completion
#[derive(Debug, Default)]
pub struct ScriptedGenerator {
    pub completion: String,
    pub error: Option<String>,
    /// When set, the prompt is not echoed back.
    pub raw_output: Option<String>,
    pub calls: Mutex<Vec<(String, SamplingParams)>>,
}

impl ScriptedGenerator {
    pub fn completing(completion: &str) -> Self {
        Self {
            completion: completion.to_string(),
            ..Self::default()
        }
    }

    pub fn raw(output: &str) -> Self {
        Self {
            raw_output: Some(output.to_string()),
            ..Self::default()
        }
    }

    pub fn failing(error: &str) -> Self {
        Self {
            error: Some(error.to_string()),
            ..Self::default()
        }
    }

    pub fn get_calls(&self) -> Vec<(String, SamplingParams)> {
        self.calls.lock().unwrap().clone()
    }
}

impl TextGenerator for ScriptedGenerator {
    fn generate(&self, prompt: &str, params: &SamplingParams) -> Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), *params));

        if let Some(ref error) = self.error {
            return Err(Error::model(error.clone()));
        }

        match self.raw_output {
            Some(ref output) => Ok(output.clone()),
            None => Ok(format!("{prompt}{}", self.completion)),
        }
    }
}
