//! Care-advice analysis endpoints.

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use dementiaide_common::ApiError;
use serde::Deserialize;

use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub query: Option<String>,
}

/// POST /api/advice/analyze - analyze a care query.
/// Responses are safe to cache per user for an hour: the bundle only depends
/// on the detected tone.
pub async fn analyze(
    State(state): State<SharedState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let query = match req.query.as_deref().map(str::trim) {
        Some(q) if !q.is_empty() => q.to_string(),
        _ => return Err(ApiError::BadRequest("Query is required".to_string())),
    };

    let advice = state.advice.analyze_care_query(&query).await;
    Ok(([(header::CACHE_CONTROL, "private, max-age=3600")], Json(advice)))
}

/// GET /api/advice/selftest - live classification of a fixed probe sentence.
pub async fn selftest(State(state): State<SharedState>) -> Result<impl IntoResponse, ApiError> {
    let result = state
        .advice
        .self_test()
        .await
        .map_err(|e| ApiError::UpstreamFailure(e.to_string()))?;

    Ok(Json(serde_json::json!({
        "success": true,
        "model": state.advice.model_id(),
        "result": result,
    })))
}
