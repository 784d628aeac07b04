//! Care-aid search and cross-retailer product search.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use dementiaide_catalog::{search_care_aids, CareAid, CareAidQuery};
use dementiaide_common::ApiError;
use dementiaide_retail::{Listing, RetailError, SearchOptions};
use serde::{Deserialize, Serialize};

use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct CareAidsResponse {
    pub products: Vec<CareAid>,
    pub total: usize,
}

/// GET /api/products?q&category&min_price&max_price - search care aids.
pub async fn care_aids(
    State(state): State<SharedState>,
    Query(query): Query<CareAidQuery>,
) -> Json<CareAidsResponse> {
    let products = search_care_aids(&state.care_aids, &query);
    let total = products.len();
    Json(CareAidsResponse { products, total })
}

#[derive(Debug, Deserialize)]
pub struct AggregateQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct ListingsResponse {
    pub products: Vec<Listing>,
}

/// GET /api/products/search?q= - fan-out search across every registered
/// retail provider. An empty query returns an empty list; 502 when every
/// provider fails.
pub async fn aggregate_search(
    State(state): State<SharedState>,
    Query(query): Query<AggregateQuery>,
) -> Result<Json<ListingsResponse>, ApiError> {
    if query.q.trim().is_empty() {
        return Ok(Json(ListingsResponse { products: Vec::new() }));
    }
    let options = SearchOptions {
        max_results: state.config.retail.default_limit,
        ..SearchOptions::default()
    };
    let products = state
        .retail
        .search_all(&query.q, &options)
        .await
        .map_err(|err| ApiError::UpstreamFailure(err.to_string()))?;
    Ok(Json(ListingsResponse { products }))
}

#[derive(Debug, Deserialize)]
pub struct RetailQuery {
    pub q: Option<String>,
    pub provider: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub limit: Option<u32>,
}

/// GET /api/retail/search?q&provider&category&min_price&max_price&limit -
/// retailer search with explicit options. 400 without a query; an unknown
/// provider is 404 and a provider failure 502.
pub async fn retail_search(
    State(state): State<SharedState>,
    Query(query): Query<RetailQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let q = match query.q.as_deref().map(str::trim) {
        Some(q) if !q.is_empty() => q.to_string(),
        _ => return Err(ApiError::BadRequest("Search query is required".to_string())),
    };

    let options = SearchOptions {
        category: query.category,
        max_results: query.limit.unwrap_or(state.config.retail.default_limit),
        min_price: query.min_price,
        max_price: query.max_price,
    };

    let products = match query.provider {
        Some(name) => state
            .retail
            .search_provider(&name, &q, &options)
            .await
            .map_err(|err| match err {
                RetailError::ProviderNotFound(p) => ApiError::NotFound(format!("unknown provider: {p}")),
                other => ApiError::UpstreamFailure(other.to_string()),
            })?,
        None => state
            .retail
            .search_all(&q, &options)
            .await
            .map_err(|err| ApiError::UpstreamFailure(err.to_string()))?,
    };

    Ok(Json(ListingsResponse { products }))
}
