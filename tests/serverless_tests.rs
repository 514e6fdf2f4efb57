use gymbro_gateway::{
    Error,
    config::{BackendKind, Config, PipelineConfig, ServerlessConfig},
    llm::{LlmBackend, PipelineBackend},
    serverless::{FunctionEvent, ServerlessFunctions},
};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

mod common;

use common::{
    FunctionResponseExt,
    mocks::{MockBackend, ScriptedGenerator},
};

fn serverless(environment: &str) -> ServerlessConfig {
    ServerlessConfig {
        environment: environment.to_string(),
    }
}

fn with_answer(text: &'static str) -> ServerlessFunctions {
    ServerlessFunctions::new(serverless("production"), move || {
        let backend: Arc<dyn LlmBackend> = Arc::new(MockBackend::new().with_answer(text));
        Ok(backend)
    })
}

fn never_loads(environment: &str) -> ServerlessFunctions {
    ServerlessFunctions::new(serverless(environment), || {
        Err(Error::model("weights not found"))
    })
}

fn post(body: serde_json::Value) -> FunctionEvent {
    FunctionEvent::new("POST", Some(body.to_string()))
}

#[tokio::test]
async fn test_options_is_empty_with_cors() {
    let functions = never_loads("production");

    let response = functions.chat(FunctionEvent::new("OPTIONS", None)).await;

    assert_eq!(response.status_code, 200);
    assert_eq!(response.body, "");
    assert_eq!(response.headers["Access-Control-Allow-Origin"], "*");
    assert_eq!(
        response.headers["Access-Control-Allow-Headers"],
        "Content-Type, Authorization"
    );
    assert_eq!(
        response.headers["Access-Control-Allow-Methods"],
        "GET, POST, PUT, DELETE, OPTIONS"
    );
    assert_eq!(response.headers["Content-Type"], "application/json");
    assert!(!functions.is_model_loaded());
}

#[tokio::test]
async fn test_non_post_is_rejected() {
    let functions = never_loads("production");

    let response = functions.chat(FunctionEvent::new("GET", None)).await;

    assert_eq!(response.status_code, 405);
    assert_eq!(response.body_json(), Some(json!({"error": "Method not allowed"})));
    assert_eq!(response.headers["Access-Control-Allow-Origin"], "*");
}

#[tokio::test]
async fn test_missing_message_is_bad_request() {
    let functions = never_loads("production");

    for body in [json!({}), json!({"message": ""}), json!({"context": "x"})] {
        let response = functions.chat(post(body)).await;
        assert_eq!(response.status_code, 400);
        assert_eq!(response.body_json(), Some(json!({"error": "Message is required"})));
    }

    let response = functions.chat(FunctionEvent::new("POST", None)).await;
    assert_eq!(response.status_code, 400);
}

#[tokio::test]
async fn test_invalid_json_hides_details_in_production() {
    let functions = never_loads("production");

    let response = functions
        .chat(FunctionEvent::new("POST", Some("{not json".to_string())))
        .await;

    assert_eq!(response.status_code, 500);
    assert_eq!(
        response.body_json(),
        Some(json!({"error": "Error interno del servidor"}))
    );
}

#[tokio::test]
async fn test_invalid_json_shows_details_in_development() {
    let functions = never_loads("development");

    let response = functions
        .chat(FunctionEvent::new("POST", Some("{not json".to_string())))
        .await;

    assert_eq!(response.status_code, 500);
    let body = response.body_json().unwrap();
    assert_eq!(body["error"], "Error interno del servidor");
    assert!(body["details"].is_string());
}

#[tokio::test]
async fn test_load_failure_answers_with_fallback() {
    let functions = never_loads("production");

    let response = functions
        .chat(post(json!({"message": "¿Cómo mejoro mi sentadilla?", "reasoning_level": "low"})))
        .await;

    assert_eq!(response.status_code, 200);
    let body = response.body_json().unwrap();
    assert_eq!(body["model"], "fallback");
    assert_eq!(body["reasoning_level"], "low");
    assert!(body["response"].as_str().unwrap().starts_with("Para mejorar tus sentadillas"));

    let response = functions
        .chat(post(json!({"message": "¿Cuántas series hago hoy?"})))
        .await;
    let body = response.body_json().unwrap();
    assert!(body["response"].as_str().unwrap().contains("¿Cuántas series hago hoy?"));
    assert_eq!(body["reasoning_level"], "medium");
}

#[tokio::test]
async fn test_failed_load_is_retried() {
    let attempts = Arc::new(AtomicUsize::new(0));
    let counter = attempts.clone();
    let functions = ServerlessFunctions::new(serverless("production"), move || {
        if counter.fetch_add(1, Ordering::SeqCst) == 0 {
            return Err(Error::model("disk busy"));
        }
        let backend: Arc<dyn LlmBackend> = Arc::new(MockBackend::new().with_answer("Listo."));
        Ok(backend)
    });

    let first = functions.chat(post(json!({"message": "hola"}))).await;
    assert_eq!(first.body_json().unwrap()["model"], "fallback");

    let second = functions.chat(post(json!({"message": "hola"}))).await;
    assert_eq!(
        second.body_json(),
        Some(json!({"response": "Listo.", "model": "mock-model", "reasoning_level": "medium"}))
    );

    functions.chat(post(json!({"message": "hola"}))).await;
    assert_eq!(attempts.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_success_skips_keyword_table() {
    let functions = with_answer("Respuesta del modelo.");

    let response = functions
        .chat(post(json!({"message": "¿Cómo mejoro mi sentadilla?"})))
        .await;

    assert_eq!(response.status_code, 200);
    assert_eq!(
        response.body_json(),
        Some(json!({
            "response": "Respuesta del modelo.",
            "model": "mock-model",
            "reasoning_level": "medium"
        }))
    );
    assert!(functions.is_model_loaded());
}

#[tokio::test]
async fn test_generation_failure_is_internal_error() {
    // The mock runs out of scripted answers after the first call
    let functions = with_answer("una vez");

    functions.chat(post(json!({"message": "hola"}))).await;
    let response = functions.chat(post(json!({"message": "hola"}))).await;

    assert_eq!(response.status_code, 500);
    assert_eq!(
        response.body_json(),
        Some(json!({"error": "Error interno del servidor"}))
    );
}

#[tokio::test]
async fn test_health_function() {
    let functions = with_answer("hola");

    let response = functions.health(FunctionEvent::new("GET", None)).await;
    assert_eq!(response.status_code, 200);
    let body = response.body_json().unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["model_loaded"], false);
    assert_eq!(body["mode"], "fallback");
    assert_eq!(body["environment"], "production");
    assert!(body["timestamp"].is_string());

    functions.chat(post(json!({"message": "hola"}))).await;

    let body = functions
        .health(FunctionEvent::new("GET", None))
        .await
        .body_json()
        .unwrap();
    assert_eq!(body["model_loaded"], true);
    assert_eq!(body["mode"], "pipeline");
    assert_eq!(body["model"], "mock-model");

    let response = functions.health(FunctionEvent::new("POST", None)).await;
    assert_eq!(response.status_code, 405);

    let response = functions.health(FunctionEvent::new("OPTIONS", None)).await;
    assert_eq!(response.status_code, 200);
    assert_eq!(response.body, "");
}

#[tokio::test]
async fn test_preloaded_model_skips_loader() {
    let attempts = Arc::new(AtomicUsize::new(0));
    let counter = attempts.clone();
    let functions = ServerlessFunctions::new(serverless("production"), move || {
        counter.fetch_add(1, Ordering::SeqCst);
        Err(Error::model("should not load"))
    })
    .with_model(Arc::new(MockBackend::new().with_answer("Ya cargado.")));

    assert!(functions.is_model_loaded());

    let response = functions.chat(post(json!({"message": "hola"}))).await;

    assert_eq!(response.body_json().unwrap()["response"], "Ya cargado.");
    assert_eq!(attempts.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_pipeline_config_shares_startup_model() {
    let mut config = Config::default();
    config.backend.kind = BackendKind::Pipeline;
    let generator = Arc::new(ScriptedGenerator::completing("Compartido.<|im_end|>"));
    let startup: Arc<dyn LlmBackend> =
        Arc::new(PipelineBackend::new(PipelineConfig::default(), generator.clone()));

    let functions = ServerlessFunctions::from_config(&config, &startup);
    let response = functions.chat(post(json!({"message": "hola"}))).await;

    assert_eq!(response.status_code, 200);
    assert_eq!(response.body_json().unwrap()["response"], "Compartido.");
    assert_eq!(generator.get_calls().len(), 1);
}

#[tokio::test]
async fn test_other_backends_load_lazily() {
    let config = Config::default();
    let startup: Arc<dyn LlmBackend> = Arc::new(MockBackend::new());

    let functions = ServerlessFunctions::from_config(&config, &startup);

    assert!(!functions.is_model_loaded());
}

#[tokio::test]
async fn test_null_reasoning_level_defaults_to_medium() {
    let functions = with_answer("Vale.");

    let response = functions
        .chat(post(json!({"message": "hola", "reasoning_level": null})))
        .await;

    assert_eq!(response.status_code, 200);
    assert_eq!(response.body_json().unwrap()["reasoning_level"], "medium");
}

#[tokio::test]
async fn test_negative_max_tokens_is_ignored() {
    let backend = Arc::new(MockBackend::new().with_answer("Vale."));
    let functions = ServerlessFunctions::new(serverless("production"), || {
        Err(Error::model("unused"))
    })
    .with_model(backend.clone());

    let response = functions
        .chat(post(json!({"message": "hola", "max_tokens": -1, "temperature": 0.3})))
        .await;

    assert_eq!(response.status_code, 200);
    let requests = backend.get_requests();
    assert_eq!(requests[0].max_tokens, None);
    assert_eq!(requests[0].temperature, Some(0.3));
}
