//! Router-level tests for the chat API
//!
//! These drive the assembled router with `tower::ServiceExt::oneshot` and a
//! scripted provider, pinning down the HTTP contract: payload shape on
//! success and status/message mapping for every error class.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use emissary_config::{ContextDocument, Persona};
use emissary_core::{ChatError, ChatResult};
use emissary_llm::ChatProvider;
use emissary_web::{build_router, ChatService};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;

/// Provider returning a scripted result and counting invocations.
struct ScriptedProvider {
    result: ChatResult<String>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedProvider {
    fn new(result: ChatResult<String>) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                result,
                calls: calls.clone(),
            },
            calls,
        )
    }
}

#[async_trait]
impl ChatProvider for ScriptedProvider {
    async fn generate_reply(&self, _prompt: &str) -> ChatResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }

    fn provider_name(&self) -> &str {
        "scripted"
    }
}

fn router_with(provider: Option<Box<dyn ChatProvider>>) -> axum::Router {
    let service = ChatService::new(
        provider,
        ContextDocument::from_string("test context"),
        Persona::default(),
    );
    build_router(Arc::new(service))
}

fn chat_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn successful_chat_returns_the_full_payload() {
    let (provider, _) = ScriptedProvider::new(Ok("A short answer.".to_string()));
    let app = router_with(Some(Box::new(provider)));

    let response = app
        .oneshot(chat_request(json!({"message": "Hello"})))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["message"], "A short answer.");
    assert_eq!(body["messageParts"], json!(["A short answer."]));
    assert_eq!(body["success"], true);
    assert_eq!(body["totalParts"], 1);
    assert_eq!(body["responseLength"], 15);
    assert_eq!(body["character"]["avatar"], "🤖");
    assert!(body["timestamp"].as_str().expect("timestamp").contains('T'));
}

#[tokio::test]
async fn long_replies_are_split_into_bubbles() {
    let reply = (0..3)
        .map(|p| {
            (0..60)
                .map(|i| format!("p{p}w{i}"))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n\n");
    let (provider, _) = ScriptedProvider::new(Ok(reply));
    let app = router_with(Some(Box::new(provider)));

    let response = app
        .oneshot(chat_request(json!({"message": "Tell me everything"})))
        .await
        .expect("response");
    let body = response_json(response).await;

    let parts = body["messageParts"].as_array().expect("array");
    assert!(parts.len() > 1);
    assert!(parts.len() <= 6);
    assert_eq!(body["totalParts"], parts.len());
}

#[tokio::test]
async fn empty_message_is_rejected_with_400() {
    let (provider, calls) = ScriptedProvider::new(Ok("unused".to_string()));
    let app = router_with(Some(Box::new(provider)));

    let response = app
        .oneshot(chat_request(json!({"message": "   "})))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["message"], "Message cannot be empty.");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn missing_message_field_is_rejected_with_400() {
    let (provider, _) = ScriptedProvider::new(Ok("unused".to_string()));
    let app = router_with(Some(Box::new(provider)));

    let response = app
        .oneshot(chat_request(json!({})))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_credential_yields_500_without_a_provider_call() {
    let app = router_with(None);

    let response = app
        .oneshot(chat_request(json!({"message": "Hello"})))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response_json(response).await;
    assert_eq!(
        body["message"],
        "Server configuration is incomplete. Please contact the administrator."
    );
}

#[tokio::test]
async fn provider_timeout_yields_408() {
    let (provider, _) = ScriptedProvider::new(Err(ChatError::Timeout(60)));
    let app = router_with(Some(Box::new(provider)));

    let response = app
        .oneshot(chat_request(json!({"message": "Hello"})))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);

    let body = response_json(response).await;
    assert_eq!(
        body["message"],
        "Request timeout. Please try again with a shorter question."
    );
}

#[tokio::test]
async fn upstream_failure_yields_500_with_a_generic_message() {
    let (provider, _) =
        ScriptedProvider::new(Err(ChatError::UpstreamFailure("status 503".to_string())));
    let app = router_with(Some(Box::new(provider)));

    let response = app
        .oneshot(chat_request(json!({"message": "Hello"})))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response_json(response).await;
    let message = body["message"].as_str().expect("message");
    assert!(!message.contains("503"));
}

#[tokio::test]
async fn invalid_upstream_response_yields_500() {
    let (provider, _) = ScriptedProvider::new(Err(ChatError::InvalidUpstreamResponse(
        "no candidates".to_string(),
    )));
    let app = router_with(Some(Box::new(provider)));

    let response = app
        .oneshot(chat_request(json!({"message": "Hello"})))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response_json(response).await;
    assert_eq!(
        body["message"],
        "Sorry, the AI did not return a valid response. Please try again."
    );
}

#[tokio::test]
async fn health_endpoints_respond() {
    let (provider, _) = ScriptedProvider::new(Ok("unused".to_string()));
    let app = router_with(Some(Box::new(provider)));

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["service"], "emissary-web");
}
