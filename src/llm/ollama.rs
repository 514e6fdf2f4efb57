//! Remote inference daemon speaking the Ollama HTTP API.

use super::client::LlmBackend;
use super::types::{DegradedReason, Generation, GenerationRequest};
use crate::{
    Result,
    config::{OllamaConfig, SamplingOptions},
};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, warn};

pub const NON_SUCCESS_MESSAGE: &str = "Error al generar respuesta";
pub const MISSING_RESPONSE_MESSAGE: &str = "No se pudo generar una respuesta";

#[derive(Debug, Serialize)]
struct OllamaGenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: &'a SamplingOptions,
}

#[derive(Debug, Deserialize)]
struct OllamaGenerateResponse {
    #[serde(default)]
    response: Option<String>,
}

pub struct OllamaBackend {
    config: OllamaConfig,
    client: Client,
    health_client: Client,
}

impl OllamaBackend {
    pub fn new(config: OllamaConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        let health_client = Client::builder()
            .timeout(Duration::from_secs(config.health_timeout_secs))
            .build()?;

        Ok(Self {
            config,
            client,
            health_client,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl LlmBackend for OllamaBackend {
    fn model(&self) -> &str {
        &self.config.model
    }

    async fn is_available(&self) -> bool {
        match self.health_client.get(self.endpoint("/api/tags")).send().await {
            Ok(response) => response.status() == StatusCode::OK,
            Err(e) => {
                debug!("Ollama health probe failed: {}", e);
                false
            }
        }
    }

    async fn generate(&self, request: GenerationRequest) -> Generation {
        let prompt = request.prompt.into_text();
        let payload = OllamaGenerateRequest {
            model: &self.config.model,
            prompt: &prompt,
            stream: false,
            options: &self.config.options,
        };

        debug!(
            "Sending {} char prompt to Ollama model {}",
            prompt.len(),
            self.config.model
        );

        let response = match self
            .client
            .post(self.endpoint("/api/generate"))
            .json(&payload)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                error!("Error communicating with Ollama: {}", e);
                return Generation::Failed(format!("Error de conexión: {e}"));
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            error!("Ollama returned {}: {}", status, body);
            return Generation::Failed(NON_SUCCESS_MESSAGE.to_string());
        }

        match response.json::<OllamaGenerateResponse>().await {
            Ok(OllamaGenerateResponse {
                response: Some(text),
            }) => Generation::Answer(text),
            Ok(OllamaGenerateResponse { response: None }) => {
                warn!("Ollama reply had no response field");
                Generation::Degraded {
                    text: MISSING_RESPONSE_MESSAGE.to_string(),
                    reason: DegradedReason::MissingResponseField,
                }
            }
            Err(e) => {
                error!("Failed to decode Ollama reply: {}", e);
                Generation::Failed(format!("Error de conexión: {e}"))
            }
        }
    }
}
