//! End-to-end exercises of the API router.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use hush_api::{api_router, AppState};
use hush_core::Thresholds;

fn app() -> axum::Router {
    api_router(AppState::default())
}

async fn post_json(app: axum::Router, path: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

#[tokio::test]
async fn health_reports_version() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn decide_nominal_signals_respond() {
    let (status, body) = post_json(
        app(),
        "/v1/decide",
        json!({
            "signals": {
                "coherence": 0.9,
                "drift": 0.1,
                "conflict": 0.0,
                "ambiguity": 0.0,
                "continuity": true
            }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["decision"], "RESPOND");
    assert_eq!(body["meta"]["reasons"], json!([]));
}

#[tokio::test]
async fn decide_ambiguity_alone_is_minimal() {
    let (status, body) = post_json(
        app(),
        "/v1/decide",
        json!({
            "signals": {
                "coherence": 0.9,
                "drift": 0.1,
                "conflict": 0.0,
                "ambiguity": 0.5,
                "continuity": true
            }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["decision"], "MINIMAL");
    assert_eq!(body["meta"]["reasons"], json!([["A2", "ambiguity_detected"]]));
}

#[tokio::test]
async fn decide_honors_partial_threshold_overrides() {
    // Raise the coherence floor past the supplied signal.
    let (status, body) = post_json(
        app(),
        "/v1/decide",
        json!({
            "signals": {
                "coherence": 0.8,
                "drift": 0.1,
                "conflict": 0.0,
                "ambiguity": 0.0,
                "continuity": true
            },
            "thresholds": { "coherence_min": 0.95 }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["decision"], "SILENCE");
    assert_eq!(body["meta"]["reasons"], json!([["A1", "low_coherence"]]));
}

#[tokio::test]
async fn decide_missing_signal_field_is_rejected() {
    let (status, _) = post_json(
        app(),
        "/v1/decide",
        json!({
            "signals": { "coherence": 0.9 }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn deployment_thresholds_apply_when_request_has_none() {
    let strict = Thresholds {
        coherence_min: 0.95,
        ..Thresholds::default()
    };
    let app = api_router(AppState::new(strict));

    let (status, body) = post_json(
        app,
        "/v1/decide",
        json!({
            "signals": {
                "coherence": 0.9,
                "drift": 0.1,
                "conflict": 0.0,
                "ambiguity": 0.0,
                "continuity": true
            }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["decision"], "SILENCE");
}

#[tokio::test]
async fn gate_endpoint_applies_both_thresholds() {
    let (status, body) = post_json(
        app(),
        "/v1/gate",
        json!({ "coherence": 0.9, "drift": 0.1 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["silence"], json!(false));

    let (_, body) = post_json(
        app(),
        "/v1/gate",
        json!({ "coherence": 0.5, "drift": 0.1 }),
    )
    .await;
    assert_eq!(body["silence"], json!(true));

    let (_, body) = post_json(
        app(),
        "/v1/gate",
        json!({
            "coherence": 0.9,
            "drift": 0.1,
            "thresholds": { "drift_threshold": 0.05 }
        }),
    )
    .await;
    assert_eq!(body["silence"], json!(true));
}

#[tokio::test]
async fn consensus_endpoint_measures_and_gates() {
    let (status, body) = post_json(
        app(),
        "/v1/consensus",
        json!({ "responses": ["x", "x", "x"] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["consensus"], json!(1.0));
    assert_eq!(body["silence"], json!(false));

    let (_, body) = post_json(
        app(),
        "/v1/consensus",
        json!({ "responses": ["a", "b", "c"] }),
    )
    .await;
    assert_eq!(body["silence"], json!(true));

    let (_, body) = post_json(app(), "/v1/consensus", json!({ "responses": [] })).await;
    assert_eq!(body["consensus"], json!(0.0));
    assert_eq!(body["silence"], json!(true));
}

#[tokio::test]
async fn unknown_route_is_a_structured_404() {
    let response = app()
        .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}
