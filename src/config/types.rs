use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub serverless: ServerlessConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
    #[serde(default)]
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Answer common questions from the keyword table without calling a model.
    #[serde(default = "default_true")]
    pub quick_responses: bool,
    #[serde(default)]
    pub prompt_style: PromptStyle,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptStyle {
    /// Persona prompt with reasoning level and response directives.
    #[default]
    Coach,
    /// Short "fitness expert" prompt.
    Brief,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default)]
    pub kind: BackendKind,
    #[serde(default)]
    pub ollama: OllamaConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    #[default]
    Ollama,
    Pipeline,
    Knowledge,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaConfig {
    #[serde(default = "default_ollama_url")]
    pub base_url: String,
    #[serde(default = "default_ollama_model")]
    pub model: String,
    /// `None` leaves generation calls unbounded.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: Option<u64>,
    #[serde(default = "default_health_timeout_secs")]
    pub health_timeout_secs: u64,
    #[serde(default)]
    pub options: SamplingOptions,
}

/// Sampling options sent verbatim in the daemon's `options` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplingOptions {
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_top_p")]
    pub top_p: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_predict: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_penalty: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mirostat: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mirostat_tau: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mirostat_eta: Option<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    #[serde(default = "default_pipeline_model_id")]
    pub model_id: String,
    #[serde(default = "default_model_path")]
    pub model_path: String,
    #[serde(default = "default_tokenizer_path")]
    pub tokenizer_path: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_pipeline_temperature")]
    pub temperature: f64,
    #[serde(default = "default_seed")]
    pub seed: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerlessConfig {
    /// `development` exposes error details in 500 bodies.
    #[serde(default = "default_environment")]
    pub environment: String,
}

impl GatewayConfig {
    /// Settings the gateway runs with for `kind`. The knowledge backend already
    /// covers the keyword topics with fuller answers, so it skips the table.
    pub fn for_backend(&self, kind: BackendKind) -> Self {
        Self {
            quick_responses: self.quick_responses && kind != BackendKind::Knowledge,
            ..self.clone()
        }
    }
}

impl ServerlessConfig {
    pub fn expose_details(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logs: LogsConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            quick_responses: true,
            prompt_style: PromptStyle::default(),
        }
    }
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: default_ollama_url(),
            model: default_ollama_model(),
            timeout_secs: default_timeout_secs(),
            health_timeout_secs: default_health_timeout_secs(),
            options: SamplingOptions::default(),
        }
    }
}

impl Default for SamplingOptions {
    fn default() -> Self {
        Self {
            temperature: default_temperature(),
            top_p: default_top_p(),
            top_k: Some(40),
            num_predict: Some(1024),
            repeat_penalty: Some(1.1),
            mirostat: Some(2),
            mirostat_tau: Some(5.0),
            mirostat_eta: Some(0.1),
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            model_id: default_pipeline_model_id(),
            model_path: default_model_path(),
            tokenizer_path: default_tokenizer_path(),
            max_tokens: default_max_tokens(),
            temperature: default_pipeline_temperature(),
            seed: default_seed(),
        }
    }
}

impl Default for ServerlessConfig {
    fn default() -> Self {
        Self {
            environment: default_environment(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8001
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_ollama_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_ollama_model() -> String {
    "gpt-oss:20b".to_string()
}

fn default_timeout_secs() -> Option<u64> {
    Some(60)
}

fn default_health_timeout_secs() -> u64 {
    5
}

fn default_temperature() -> f32 {
    0.7
}

fn default_top_p() -> f32 {
    0.9
}

fn default_pipeline_model_id() -> String {
    "openai/gpt-oss-20b".to_string()
}

fn default_model_path() -> String {
    "models/model.gguf".to_string()
}

fn default_tokenizer_path() -> String {
    "models/tokenizer.json".to_string()
}

fn default_max_tokens() -> u32 {
    1000
}

fn default_pipeline_temperature() -> f64 {
    0.7
}

fn default_seed() -> u64 {
    299_792_458
}

fn default_environment() -> String {
    "production".to_string()
}
