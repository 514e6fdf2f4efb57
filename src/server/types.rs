use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model_loaded: bool,
    pub mode: String,
    pub model: String,
}

impl HealthResponse {
    pub fn new(model_loaded: bool, mode: &str, model: &str) -> Self {
        Self {
            status: if model_loaded { "healthy" } else { "unhealthy" }.to_string(),
            model_loaded,
            mode: mode.to_string(),
            model: model.to_string(),
        }
    }
}
