//! Caregiver video search endpoints.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::state::SharedState;
use dementiaide_videos::Video;

#[derive(Debug, Deserialize)]
pub struct VideoQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct VideosResponse {
    pub videos: Vec<Video>,
}

/// GET /api/videos?q= - search caregiver videos.
/// Never fails: quota exhaustion or upstream errors degrade to the curated
/// fallback set inside the client.
pub async fn search(
    State(state): State<SharedState>,
    Query(query): Query<VideoQuery>,
) -> Json<VideosResponse> {
    let videos = state.videos.search(&query.q).await;
    Json(VideosResponse { videos })
}

/// GET /api/videos/diagnostics - probe every configured key and, when one is
/// usable, run a sample search through the normal rotation path.
pub async fn diagnostics(State(state): State<SharedState>) -> Json<serde_json::Value> {
    let probes = state.videos.probe_keys().await;
    let keys_configured = !probes.is_empty();
    let any_valid = probes.iter().any(|p| p.valid);

    if !any_valid {
        return Json(serde_json::json!({
            "success": false,
            "error": "No valid API keys found",
            "apiKeysConfigured": keys_configured,
            "keyTests": probes,
            "pool": state.videos.pool_entries(),
        }));
    }

    let videos = state.videos.search("care basics").await;
    Json(serde_json::json!({
        "success": true,
        "apiKeysConfigured": keys_configured,
        "keyTests": probes,
        "pool": state.videos.pool_entries(),
        "videos": videos,
    }))
}
