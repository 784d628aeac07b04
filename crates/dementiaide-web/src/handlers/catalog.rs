//! Storefront catalog endpoint.

use axum::extract::{Query, State};
use axum::Json;
use dementiaide_catalog::{filter_and_sort, CatalogFilter, StorefrontItem};
use serde::Serialize;

use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub products: Vec<StorefrontItem>,
    pub total: usize,
}

/// GET /api/catalog?category&on_sale&in_stock&sort - filtered, sorted shop
/// listing.
pub async fn list(
    State(state): State<SharedState>,
    Query(filter): Query<CatalogFilter>,
) -> Json<CatalogResponse> {
    let products = filter_and_sort(&state.storefront, &filter);
    let total = products.len();
    Json(CatalogResponse { products, total })
}
