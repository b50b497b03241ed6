//! HTTP API for testimony analysis
//!
//! Endpoints:
//! - POST /verdict - Score a pre-computed annotation
//! - POST /analyze - Annotate raw text (registered backend) and score it
//! - GET /health - Health check with annotator lifecycle state

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::core::{AnnotatorHandle, SuspicionScorer};
use crate::types::{AnalysisError, Annotation, VerdictResult};
use crate::VERSION;

/// App state: the stateless scorer plus the annotator handle the host
/// registered (or left uninitialized).
pub struct AppState {
    pub scorer: SuspicionScorer,
    pub annotator: RwLock<AnnotatorHandle>,
}

/// Analyze-text request
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

/// Analyze-text response: the annotation alongside its verdict
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub annotation: Annotation,
    pub result: VerdictResult,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub annotator: String,
}

/// Error body for failed requests
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn error_response(err: AnalysisError) -> ApiError {
    let status = match &err {
        AnalysisError::EmptyAnnotation | AnalysisError::HeadOutOfRange { .. } => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        AnalysisError::NotReady => StatusCode::SERVICE_UNAVAILABLE,
        AnalysisError::Annotator(_) => StatusCode::BAD_GATEWAY,
    };
    (
        status,
        Json(ErrorResponse {
            code: err.code().to_string(),
            error: err.to_string(),
        }),
    )
}

/// Build the router around an annotator handle. Hosts that embed a real
/// NLP backend pass `AnnotatorHandle::ready(...)`; the default binary runs
/// with an uninitialized handle and serves /verdict only.
pub fn create_router(annotator: AnnotatorHandle) -> Router {
    let state = Arc::new(AppState {
        scorer: SuspicionScorer::new(),
        annotator: RwLock::new(annotator),
    });

    Router::new()
        .route("/health", get(health))
        .route("/verdict", post(verdict))
        .route("/analyze", post(analyze))
        .with_state(state)
}

/// GET /health
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let annotator = state.annotator.read().await;
    Json(HealthResponse {
        status: "ok".to_string(),
        version: VERSION.to_string(),
        annotator: annotator.status().to_string(),
    })
}

/// POST /verdict - score an externally produced annotation
async fn verdict(
    State(state): State<Arc<AppState>>,
    Json(annotation): Json<Annotation>,
) -> Result<Json<VerdictResult>, ApiError> {
    state
        .scorer
        .evaluate(&annotation)
        .map(Json)
        .map_err(error_response)
}

/// POST /analyze - annotate raw text and score the result
async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let annotation = {
        let annotator = state.annotator.read().await;
        annotator.annotate(&request.text).map_err(error_response)?
    };
    let result = state
        .scorer
        .evaluate(&annotation)
        .map_err(error_response)?;
    Ok(Json(AnalyzeResponse { annotation, result }))
}

/// Run the HTTP server
pub async fn run_server(
    addr: &str,
    annotator: AnnotatorHandle,
) -> Result<(), Box<dyn std::error::Error>> {
    let router = create_router(annotator);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    println!("Listening on http://{}", addr);
    println!("Endpoints:");
    println!("  POST /verdict - score an annotation dump");
    println!("  POST /analyze - annotate and score raw text");
    println!("  GET  /health  - health check");

    axum::serve(listener, router).await?;
    Ok(())
}
