//! End-to-end webhook tests.
//!
//! Drives the full router with signed HTTP requests: signature gate, envelope
//! decoding, command dispatch, and the wire shape of every response.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use ed25519_dalek::{Signer, SigningKey};
use rand::rngs::OsRng;
use serde_json::{Value, json};
use ticketbot_core::{CommandRegistry, SignatureVerifier, commands::CalcCommand};
use ticketbot_web::{AppState, build_router};
use tower::ServiceExt;

const TIMESTAMP: &str = "1700000000";

fn test_app() -> (SigningKey, Router) {
    let signing = SigningKey::generate(&mut OsRng);
    let verifier = SignatureVerifier::new(signing.verifying_key());

    let mut registry = CommandRegistry::new();
    registry.register(Box::new(CalcCommand));

    (signing, build_router(AppState::new(verifier, registry)))
}

fn sign(key: &SigningKey, timestamp: &str, body: &str) -> String {
    let mut message = timestamp.as_bytes().to_vec();
    message.extend_from_slice(body.as_bytes());
    hex::encode(key.sign(&message).to_bytes())
}

fn signed_request(key: &SigningKey, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/interactions")
        .header("Content-Type", "application/json")
        .header("X-Signature-Ed25519", sign(key, TIMESTAMP, body))
        .header("X-Signature-Timestamp", TIMESTAMP)
        .body(Body::from(body.to_owned()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn signed_ping_returns_pong() {
    let (key, app) = test_app();

    let response = app.oneshot(signed_request(&key, r#"{"type":1}"#)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"type": 1}));
}

#[tokio::test]
async fn tampered_signature_is_rejected() {
    let (key, app) = test_app();

    // Sign one body, deliver another.
    let request = Request::builder()
        .method("POST")
        .uri("/interactions")
        .header("X-Signature-Ed25519", sign(&key, TIMESTAMP, r#"{"type":1}"#))
        .header("X-Signature-Timestamp", TIMESTAMP)
        .body(Body::from(r#"{"type":2}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn missing_signature_headers_are_rejected() {
    let (_, app) = test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/interactions")
        .body(Body::from(r#"{"type":1}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn foreign_key_signature_is_rejected() {
    let (_, app) = test_app();
    let other_key = SigningKey::generate(&mut OsRng);

    let response = app
        .oneshot(signed_request(&other_key, r#"{"type":1}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn malformed_body_is_rejected_after_auth() {
    let (key, app) = test_app();

    let response = app.oneshot(signed_request(&key, "not json")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_command_is_rejected() {
    let (key, app) = test_app();
    let body = r#"{"type":2,"data":{"name":"frobnicate","options":[]}}"#;

    let response = app.oneshot(signed_request(&key, body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unsupported_interaction_type_is_rejected() {
    let (key, app) = test_app();

    let response = app.oneshot(signed_request(&key, r#"{"type":3}"#)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Invalid interaction type.");
}

#[tokio::test]
async fn calc_command_returns_ephemeral_projection() {
    let (key, app) = test_app();
    let body = r#"{
        "type": 2,
        "data": {
            "name": "calc",
            "options": [
                {"name": "type", "value": "đen"},
                {"name": "current_tickets", "value": 10},
                {"name": "months", "value": 3}
            ]
        }
    }"#;

    let response = app.oneshot(signed_request(&key, body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let payload = body_json(response).await;
    assert_eq!(payload["type"], 4);
    assert_eq!(payload["data"]["flags"], 64);

    let content = payload["data"]["content"].as_str().unwrap();
    assert!(content.contains("Tháng 1 (Sau 1 tháng): **91 vé đen**"));
    assert!(content.contains("Tháng 3 (Sau 3 tháng): **253 vé đen**"));
}

#[tokio::test]
async fn invalid_months_option_is_rejected() {
    let (key, app) = test_app();
    let body = r#"{
        "type": 2,
        "data": {
            "name": "calc",
            "options": [
                {"name": "type", "value": "đen"},
                {"name": "current_tickets", "value": 10},
                {"name": "months", "value": 0}
            ]
        }
    }"#;

    let response = app.oneshot(signed_request(&key, body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn liveness_needs_no_signature() {
    let (_, app) = test_app();

    let request = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert!(body["status"].as_str().unwrap().contains("running"));
}
