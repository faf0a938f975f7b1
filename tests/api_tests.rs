//! Router tests driving the full middleware stack in-process.
//!
//! Run with: cargo test --test api_tests
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use voice_api::create_router;

async fn send(method: Method, uri: &str, body: Body) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body)
        .unwrap();

    create_router().oneshot(request).await.unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

async fn voice(body: &str) -> Value {
    let response = send(Method::POST, "/api/voice", Body::from(body.to_string())).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

fn assert_cors_headers(response: &Response) {
    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-methods"], "GET, POST, OPTIONS");
    assert_eq!(headers["access-control-allow-headers"], "Content-Type");
}

fn content_type(response: &Response) -> &str {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

#[tokio::test]
async fn test_preflight_on_every_path() {
    for path in ["/", "/health", "/api/voice", "/somewhere/else"] {
        let response = send(Method::OPTIONS, path, Body::empty()).await;
        assert_eq!(response.status(), StatusCode::OK, "path {}", path);
        assert_cors_headers(&response);
        assert!(body_bytes(response).await.is_empty(), "path {}", path);
    }
}

#[tokio::test]
async fn test_root_status() {
    let response = send(Method::GET, "/", Body::empty()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_cors_headers(&response);
    assert!(content_type(&response).starts_with("application/json"));

    let json = body_json(response).await;
    assert_eq!(json["status"], "active");
    assert_eq!(json["message"], "🎤 AgenticSeek Voice API is running!");
}

#[tokio::test]
async fn test_unknown_path_falls_back_to_root() {
    let response = send(Method::GET, "/not/a/route", Body::empty()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_cors_headers(&response);

    let json = body_json(response).await;
    assert_eq!(json["status"], "active");
}

#[tokio::test]
async fn test_health_omits_message() {
    let response = send(Method::GET, "/health", Body::empty()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_cors_headers(&response);
    assert!(content_type(&response).starts_with("application/json"));

    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert!(json.get("message").is_none());
}

#[tokio::test]
async fn test_health_ignores_method() {
    let response = send(Method::POST, "/health", Body::empty()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "healthy");
}

#[tokio::test]
async fn test_voice_hello() {
    let json = voice(r#"{"message": "hello there"}"#).await;
    assert_eq!(json["response"], "Hello! I'm your AgenticSeek voice assistant.");
    assert_eq!(json["processed"], true);
    assert_eq!(json["echo"], "hello there");
}

#[tokio::test]
async fn test_voice_jarvis_before_help() {
    let json = voice(r#"{"message": "can jarvis help"}"#).await;
    assert_eq!(json["response"], "Yes, I'm here! How can I help you?");
    assert_eq!(json["echo"], "can jarvis help");
}

#[tokio::test]
async fn test_voice_help() {
    let json = voice(r#"{"message": "help me", "agent_type": "casual"}"#).await;
    assert_eq!(json["response"], "I'm ready to assist you with voice commands!");
}

#[tokio::test]
async fn test_voice_invalid_body_fails_open() {
    for body in ["", "not json", r#"{"message": 42}"#] {
        let json = voice(body).await;
        assert_eq!(
            json["response"], "I heard: Unknown command. How can I help?",
            "body {:?}",
            body
        );
        assert_eq!(json["processed"], true);
        assert_eq!(json["echo"], "Unknown command");
    }
}

#[tokio::test]
async fn test_voice_missing_message_is_empty() {
    for body in ["{}", "null", r#"{"agent_type": "casual"}"#] {
        let json = voice(body).await;
        assert_eq!(json["response"], "I heard: . How can I help?", "body {:?}", body);
        assert_eq!(json["processed"], true);
        assert!(json.get("echo").is_none(), "body {:?}", body);
    }
}

#[tokio::test]
async fn test_voice_reads_first_json_value_only() {
    for body in [
        r#"{"message": "hello"} junk"#,
        r#"{"message": "hello"}{"message": "x"}"#,
    ] {
        let json = voice(body).await;
        assert_eq!(json["response"], "Hello! I'm your AgenticSeek voice assistant.");
        assert_eq!(json["echo"], "hello");
    }
}

#[tokio::test]
async fn test_voice_keys_fold_case_and_last_wins() {
    let json = voice(r#"{"Message": "hello"}"#).await;
    assert_eq!(json["echo"], "hello");

    let json = voice(r#"{"message": "a", "message": "hello"}"#).await;
    assert_eq!(json["echo"], "hello");
}

#[tokio::test]
async fn test_voice_large_body_is_read() {
    let pad = "a".repeat(3 * 1024 * 1024);
    let body = format!(r#"{{"message": "hello", "pad": "{}"}}"#, pad);

    let json = voice(&body).await;
    assert_eq!(json["response"], "Hello! I'm your AgenticSeek voice assistant.");
    assert_eq!(json["echo"], "hello");
}

#[tokio::test]
async fn test_voice_no_keyword_echoes() {
    let json = voice(r#"{"message": "xyz"}"#).await;
    assert_eq!(json["response"], "I heard: xyz. How can I help?");
    assert_eq!(json["echo"], "xyz");
}

#[tokio::test]
async fn test_voice_is_case_sensitive() {
    let json = voice(r#"{"message": "HELLO"}"#).await;
    assert_eq!(json["response"], "I heard: HELLO. How can I help?");
}

#[tokio::test]
async fn test_voice_empty_message_has_no_echo() {
    let json = voice(r#"{"message": ""}"#).await;
    assert_eq!(json["response"], "I heard: . How can I help?");
    assert!(json.get("echo").is_none());
}

#[tokio::test]
async fn test_voice_response_headers() {
    let response = send(
        Method::POST,
        "/api/voice",
        Body::from(r#"{"message": "hi"}"#),
    )
    .await;
    assert_cors_headers(&response);
    assert!(content_type(&response).starts_with("application/json"));
}

#[tokio::test]
async fn test_voice_wrong_method() {
    for method in [Method::DELETE, Method::GET, Method::PUT] {
        let response = send(method.clone(), "/api/voice", Body::empty()).await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "method {}", method);
        assert_cors_headers(&response);
        assert!(content_type(&response).starts_with("text/plain"));

        let body = body_bytes(response).await;
        assert_eq!(body, b"Method not allowed\n");
        assert!(serde_json::from_slice::<Value>(&body).is_err());
    }
}
