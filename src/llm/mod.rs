#[cfg(feature = "candle")]
pub mod candle;
pub mod client;
pub mod knowledge;
pub mod ollama;
pub mod pipeline;
pub mod types;

pub use client::{LlmBackend, create_backend, load_generator};
pub use knowledge::KnowledgeBackend;
pub use ollama::OllamaBackend;
pub use pipeline::{PipelineBackend, SamplingParams, TextGenerator};
pub use types::*;
