//! Service health endpoint.

use axum::extract::State;
use axum::Json;

use crate::state::SharedState;

/// GET /api/health - liveness plus per-subsystem configuration status.
pub async fn health(State(state): State<SharedState>) -> Json<serde_json::Value> {
    let video_keys = state.videos.pool_entries().len();
    Json(serde_json::json!({
        "status": "ok",
        "service": "dementiaide-web",
        "version": env!("CARGO_PKG_VERSION"),
        "adviceModel": state.advice.model_id(),
        "videoKeysTracked": video_keys,
        "retailProviders": state.retail.provider_names(),
    }))
}
