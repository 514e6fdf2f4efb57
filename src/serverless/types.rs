use axum::{
    body::Body,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::error;

/// Incoming HTTP event as a function platform hands it over.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionEvent {
    pub http_method: String,
    #[serde(default)]
    pub body: Option<String>,
}

impl FunctionEvent {
    pub fn new(http_method: impl Into<String>, body: Option<String>) -> Self {
        Self {
            http_method: http_method.into(),
            body,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl FunctionResponse {
    /// Response with the CORS headers every function reply carries.
    pub fn new(status_code: u16, body: impl Into<String>) -> Self {
        Self {
            status_code,
            headers: cors_headers(),
            body: body.into(),
        }
    }

    pub fn json(status_code: u16, body: &Value) -> Self {
        Self::new(status_code, body.to_string())
    }
}

/// Body of a chat function call. Every field is optional so a missing
/// message can be reported as 400 instead of a parse failure. Optional
/// fields of the wrong type or out of range count as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FunctionChatBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub context: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub reasoning_level: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub max_tokens: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub temperature: Option<f64>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| serde_json::from_value(value).ok()))
}

pub fn cors_headers() -> BTreeMap<String, String> {
    [
        ("Access-Control-Allow-Origin", "*"),
        ("Access-Control-Allow-Headers", "Content-Type, Authorization"),
        (
            "Access-Control-Allow-Methods",
            "GET, POST, PUT, DELETE, OPTIONS",
        ),
        ("Content-Type", "application/json"),
    ]
    .into_iter()
    .map(|(name, value)| (name.to_string(), value.to_string()))
    .collect()
}

impl IntoResponse for FunctionResponse {
    fn into_response(self) -> Response {
        let mut builder = Response::builder().status(self.status_code);
        for (name, value) in &self.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        match builder.body(Body::from(self.body)) {
            Ok(response) => response,
            Err(e) => {
                error!("Failed to build function response: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
