//! Integration tests for the HTTP API

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt;

use testimony::core::{create_router, Annotator, AnnotatorHandle};
use testimony::types::{AnalysisError, Annotation, DepLabel, FineTag, Pos, Sentence, Token};

fn router_without_annotator() -> axum::Router {
    create_router(AnnotatorHandle::uninitialized())
}

/// Minimal annotator backend: every whitespace word becomes a noun.
struct StubAnnotator;

impl Annotator for StubAnnotator {
    fn annotate(&self, text: &str) -> Result<Annotation, AnalysisError> {
        let tokens: Vec<Token> = text
            .split_whitespace()
            .map(|w| Token {
                text: w.to_string(),
                pos: Pos::Noun,
                tag: FineTag::new("NN"),
                lemma: w.to_lowercase(),
                dep: DepLabel::Root,
                head: 0,
                lefts: vec![],
                rights: vec![],
                ent_type: None,
            })
            .collect();
        if tokens.is_empty() {
            return Err(AnalysisError::Annotator("empty input".to_string()));
        }
        let end = tokens.len();
        Ok(Annotation {
            tokens,
            entities: vec![],
            sentences: vec![Sentence { start: 0, end }],
        })
    }
}

fn annotation_body() -> String {
    json!({
        "tokens": [
            {"text": "could", "pos": "VERB", "tag": "MD", "lemma": "could",
             "dep": "aux", "head": 2},
            {"text": "might", "pos": "VERB", "tag": "MD", "lemma": "might",
             "dep": "aux", "head": 2},
            {"text": "happen", "pos": "VERB", "tag": "VB", "lemma": "happen",
             "dep": "ROOT", "head": 2}
        ],
        "entities": [],
        "sentences": [{"start": 0, "end": 3}]
    })
    .to_string()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_reports_annotator_state() {
    let app = router_without_annotator();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["annotator"], "uninitialized");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_verdict_scores_annotation() {
    let app = router_without_annotator();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/verdict")
                .header("content-type", "application/json")
                .body(Body::from(annotation_body()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    // Two modal verbs: hedging fires for 10 raw points, normalized to 5
    assert_eq!(json["raw_score"], 10);
    assert_eq!(json["normalized_score"], 5);
    assert_eq!(json["verdict"], "NO_SUSPICION");
    assert_eq!(json["short_statement"], true);
    assert_eq!(json["indicators"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_verdict_rejects_empty_annotation() {
    let app = router_without_annotator();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/verdict")
                .header("content-type", "application/json")
                .body(Body::from(
                    r#"{"tokens": [], "entities": [], "sentences": []}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "E001_EMPTY_ANNOTATION");
}

#[tokio::test]
async fn test_verdict_rejects_malformed_body() {
    let app = router_without_annotator();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/verdict")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_analyze_without_backend_is_not_ready() {
    let app = router_without_annotator();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/analyze")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"text": "the dog ran home"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json = body_json(response).await;
    assert_eq!(json["code"], "E102_ANNOTATOR_NOT_READY");
}

#[tokio::test]
async fn test_analyze_with_registered_backend() {
    let app = create_router(AnnotatorHandle::ready(Box::new(StubAnnotator)));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/analyze")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"text": "the dog ran home"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["annotation"]["tokens"].as_array().unwrap().len(), 4);
    assert_eq!(json["result"]["verdict"], "NO_SUSPICION");
}

#[tokio::test]
async fn test_analyze_backend_failure_is_bad_gateway() {
    let app = create_router(AnnotatorHandle::ready(Box::new(StubAnnotator)));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/analyze")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"text": ""}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "E101_ANNOTATOR_FAILED");
}
