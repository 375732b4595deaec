//! HTTP routes and handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;
use thiserror::Error;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::document::{file_type, DocumentRecord, DEFAULT_FILENAME};
use crate::state::AppState;

pub const SERVICE_NAME: &str = "docsense document analysis API";

pub fn create_router(state: AppState, allowed_origin: HeaderValue) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::exact(allowed_origin))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let documents = Router::new()
        .route("/analyze", post(analyze_document))
        .route("/all", get(all_documents))
        .route("/health", get(health_check))
        .route("/:id/analysis", get(get_analysis));

    Router::new()
        .nest("/api/documents", documents)
        .route("/health", get(health_check))
        .route("/metrics", get(metrics))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Text extracted from an uploaded document
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub filename: Option<String>,
    pub text: String,
}

async fn analyze_document(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<DocumentRecord>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::InvalidRequest(e.body_text()))?;

    if request.text.is_empty() {
        return Err(AppError::InvalidRequest(
            "Please provide text to analyze".to_string(),
        ));
    }

    let filename = request
        .filename
        .unwrap_or_else(|| DEFAULT_FILENAME.to_string());
    let file_type = file_type(&filename).ok_or_else(|| {
        AppError::InvalidRequest(
            "Unsupported file type. Please upload PDF, DOCX, or TXT files.".to_string(),
        )
    })?;
    debug!("Analyzing {} ({} bytes)", filename, request.text.len());

    let record = state
        .analyze_document(filename, file_type, &request.text)
        .await;
    Ok(Json(record))
}

async fn get_analysis(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DocumentRecord>, AppError> {
    state
        .store
        .get(&id)
        .map(Json)
        .ok_or(AppError::NotFound(id))
}

async fn all_documents(State(state): State<AppState>) -> Json<HashMap<String, DocumentRecord>> {
    Json(state.store.all())
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({ "status": "UP", "service": SERVICE_NAME }))
}

async fn metrics(State(state): State<AppState>) -> String {
    state.metrics_handle.render()
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("Document {0} not found")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        };
        metrics::counter!("docsense_errors_total", "status" => status.as_str().to_string())
            .increment(1);

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
