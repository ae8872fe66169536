/// Integration tests for the scope-service HTTP API
///
/// This test module covers:
/// - The generate-scope endpoint happy path
/// - Request validation (invalid input never reaches the provider)
/// - Upstream failure classes and their response statuses
/// - Concurrent request isolation
use actix_web::{test, web, App};
use async_trait::async_trait;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use scope_service::handlers;
use scope_service::models::ScopeResponse;
use scope_service::services::{CompletionProvider, GeminiError, ScopeGenerator};

enum MockMode {
    /// Return the prompt itself, so assertions can see what was sent
    Echo,
    Fail(fn() -> GeminiError),
}

struct MockProvider {
    calls: AtomicUsize,
    mode: MockMode,
}

impl MockProvider {
    fn new(mode: MockMode) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            mode,
        })
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionProvider for MockProvider {
    async fn complete(&self, prompt: &str) -> Result<String, GeminiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.mode {
            MockMode::Echo => Ok(prompt.to_string()),
            MockMode::Fail(make) => Err(make()),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

macro_rules! scope_app {
    ($provider:expr) => {{
        let provider: Arc<dyn CompletionProvider> = $provider.clone();
        let generator = Arc::new(ScopeGenerator::new(provider));
        test::init_service(
            App::new().app_data(web::Data::new(generator)).service(
                web::scope("/api/v1")
                    .route("/generate-scope", web::post().to(handlers::generate_scope)),
            ),
        )
        .await
    }};
}

fn valid_payload(industry: &str) -> serde_json::Value {
    json!({
        "idea": "A mobile application that connects local artisans with buyers interested in unique, handmade crafts",
        "industry": industry
    })
}

#[actix_web::test]
async fn test_valid_request_returns_generated_scope() {
    let provider = MockProvider::new(MockMode::Echo);
    let app = scope_app!(provider);

    let req = test::TestRequest::post()
        .uri("/api/v1/generate-scope")
        .set_json(valid_payload("E-commerce"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    let body: ScopeResponse = test::read_body_json(resp).await;
    assert!(!body.generated_scope.trim().is_empty());
    assert_eq!(provider.call_count(), 1);
}

#[actix_web::test]
async fn test_short_idea_rejected_without_upstream_call() {
    let provider = MockProvider::new(MockMode::Echo);
    let app = scope_app!(provider);

    let req = test::TestRequest::post()
        .uri("/api/v1/generate-scope")
        .set_json(json!({"idea": "too short", "industry": "E-commerce"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], 400);
    assert_eq!(provider.call_count(), 0);
}

#[actix_web::test]
async fn test_blank_idea_rejected_without_upstream_call() {
    let provider = MockProvider::new(MockMode::Echo);
    let app = scope_app!(provider);

    let req = test::TestRequest::post()
        .uri("/api/v1/generate-scope")
        .set_json(json!({"idea": " ".repeat(20), "industry": "E-commerce"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 400);
    assert_eq!(provider.call_count(), 0);
}

#[actix_web::test]
async fn test_missing_industry_rejected_without_upstream_call() {
    let provider = MockProvider::new(MockMode::Echo);
    let app = scope_app!(provider);

    let req = test::TestRequest::post()
        .uri("/api/v1/generate-scope")
        .set_json(json!({"idea": "A mobile application for local artisan commerce"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_client_error());
    assert_eq!(provider.call_count(), 0);
}

#[actix_web::test]
async fn test_upstream_failures_map_to_service_unavailable() {
    let failures: [fn() -> GeminiError; 3] = [
        || GeminiError::Timeout,
        || GeminiError::Unauthorized,
        || GeminiError::RateLimited,
    ];

    for make in failures {
        let provider = MockProvider::new(MockMode::Fail(make));
        let app = scope_app!(provider);

        let req = test::TestRequest::post()
            .uri("/api/v1/generate-scope")
            .set_json(valid_payload("E-commerce"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 503);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], 503);
        assert_eq!(provider.call_count(), 1);
    }
}

#[actix_web::test]
async fn test_safety_block_maps_to_bad_request() {
    let provider = MockProvider::new(MockMode::Fail(|| GeminiError::Blocked("SAFETY".into())));
    let app = scope_app!(provider);

    let req = test::TestRequest::post()
        .uri("/api/v1/generate-scope")
        .set_json(valid_payload("E-commerce"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("SAFETY"));
}

#[actix_web::test]
async fn test_malformed_upstream_response_maps_to_internal_error() {
    let provider =
        MockProvider::new(MockMode::Fail(|| GeminiError::ResponseParse("eof".into())));
    let app = scope_app!(provider);

    let req = test::TestRequest::post()
        .uri("/api/v1/generate-scope")
        .set_json(valid_payload("E-commerce"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 500);
}

#[actix_web::test]
async fn test_concurrent_requests_do_not_interfere() {
    let provider = MockProvider::new(MockMode::Echo);
    let app = scope_app!(provider);

    let req_a = test::TestRequest::post()
        .uri("/api/v1/generate-scope")
        .set_json(valid_payload("Maritime Logistics"))
        .to_request();
    let req_b = test::TestRequest::post()
        .uri("/api/v1/generate-scope")
        .set_json(valid_payload("Pet Care Services"))
        .to_request();

    let (resp_a, resp_b) = tokio::join!(
        test::call_service(&app, req_a),
        test::call_service(&app, req_b)
    );

    assert!(resp_a.status().is_success());
    assert!(resp_b.status().is_success());

    let body_a: ScopeResponse = test::read_body_json(resp_a).await;
    let body_b: ScopeResponse = test::read_body_json(resp_b).await;

    // Echo mode reflects the prompt, so each response must carry its own
    // industry and not the other request's
    assert!(body_a.generated_scope.contains("Maritime Logistics"));
    assert!(!body_a.generated_scope.contains("Pet Care Services"));
    assert!(body_b.generated_scope.contains("Pet Care Services"));
    assert!(!body_b.generated_scope.contains("Maritime Logistics"));
    assert_eq!(provider.call_count(), 2);
}
