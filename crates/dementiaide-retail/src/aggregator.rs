//! Provider registry. Searches fan out to every registered provider; a
//! single failing provider is logged and skipped, but a failure of every
//! provider is surfaced so callers can report the outage.

use crate::provider::{Listing, RetailError, RetailProvider, SearchOptions};
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Default)]
pub struct Aggregator {
    providers: HashMap<String, Arc<dyn RetailProvider>>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self { providers: HashMap::new() }
    }

    pub fn register(&mut self, provider: Arc<dyn RetailProvider>) {
        self.providers.insert(provider.name().to_string(), provider);
    }

    pub fn provider_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.providers.keys().cloned().collect();
        names.sort();
        names
    }

    /// Search one named provider.
    pub async fn search_provider(
        &self,
        name: &str,
        query: &str,
        options: &SearchOptions,
    ) -> Result<Vec<Listing>, RetailError> {
        let provider = self
            .providers
            .get(name)
            .ok_or_else(|| RetailError::ProviderNotFound(name.to_string()))?;
        provider.search(query, options).await
    }

    /// Fan out to every provider in name order and merge, capped at
    /// `options.max_results`. Individual failures are logged and skipped;
    /// an error is returned only when every registered provider failed.
    pub async fn search_all(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<Vec<Listing>, RetailError> {
        let mut providers: Vec<_> = self.providers.iter().collect();
        providers.sort_by(|a, b| a.0.cmp(b.0));

        let mut merged = Vec::new();
        let mut succeeded = false;
        let mut last_error = None;
        for (name, provider) in providers {
            match provider.search(query, options).await {
                Ok(mut listings) => {
                    succeeded = true;
                    merged.append(&mut listings);
                }
                Err(err) => {
                    tracing::warn!(provider = %name, error = %err, "retail provider failed");
                    last_error = Some(err);
                }
            }
        }

        if let (false, Some(err)) = (succeeded, last_error) {
            return Err(err);
        }
        merged.truncate(options.max_results as usize);
        Ok(merged)
    }
}
