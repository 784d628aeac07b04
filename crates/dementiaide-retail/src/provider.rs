//! Retail provider trait and shared search types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RetailError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Retailer API error [{status}]: {message}")]
    Upstream { status: u16, message: String },
    #[error("Provider not registered: {0}")]
    ProviderNotFound(String),
    #[error("Provider not configured: {0}")]
    NotConfigured(String),
}

/// One product listing from a retailer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub currency: String,
    pub image_url: String,
    pub product_url: String,
    pub retailer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchOptions {
    pub category: Option<String>,
    #[serde(default = "default_max_results")]
    pub max_results: u32,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

fn default_max_results() -> u32 {
    10
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { category: None, max_results: default_max_results(), min_price: None, max_price: None }
    }
}

impl SearchOptions {
    /// Price-range check shared by providers that filter client-side.
    pub fn price_in_range(&self, price: f64) -> bool {
        if let Some(min) = self.min_price {
            if price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if price > max {
                return false;
            }
        }
        true
    }
}

#[async_trait]
pub trait RetailProvider: Send + Sync {
    async fn search(&self, query: &str, options: &SearchOptions) -> Result<Vec<Listing>, RetailError>;
    fn name(&self) -> &str;
}
