//! Curated cross-retailer listings.
//! Stands in for the retailer affiliate APIs until those integrations land;
//! matches the query against title and description.

use crate::provider::{Listing, RetailError, RetailProvider, SearchOptions};
use async_trait::async_trait;

pub struct CuratedProvider {
    listings: Vec<Listing>,
}

impl CuratedProvider {
    pub fn new() -> Self {
        Self { listings: curated_listings() }
    }
}

impl Default for CuratedProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RetailProvider for CuratedProvider {
    async fn search(&self, query: &str, options: &SearchOptions) -> Result<Vec<Listing>, RetailError> {
        let q = query.to_lowercase();
        let results: Vec<Listing> = self
            .listings
            .iter()
            .filter(|l| {
                l.title.to_lowercase().contains(&q) || l.description.to_lowercase().contains(&q)
            })
            .filter(|l| options.price_in_range(l.price))
            .take(options.max_results as usize)
            .cloned()
            .collect();
        Ok(results)
    }

    fn name(&self) -> &str {
        "curated"
    }
}

fn curated_listings() -> Vec<Listing> {
    vec![
        Listing {
            id: "amz1".to_string(),
            title: "Digital Calendar Day Clock".to_string(),
            description: "Large, Clear, Premium Quality - Perfect for Memory Loss, Impaired \
                Vision, Elderly, Dementia"
                .to_string(),
            price: 39.99,
            currency: "USD".to_string(),
            image_url: "https://via.placeholder.com/200x200".to_string(),
            product_url: "https://amazon.com/example".to_string(),
            retailer: "Amazon".to_string(),
            rating: Some(4.5),
            reviews: Some(1250),
        },
        Listing {
            id: "tgt1".to_string(),
            title: "Memory Foam Comfort Mat".to_string(),
            description: "Anti-Fatigue Floor Mat - Reduces Stress on Feet, Knees and Joints"
                .to_string(),
            price: 29.99,
            currency: "USD".to_string(),
            image_url: "https://via.placeholder.com/200x200".to_string(),
            product_url: "https://target.com/example".to_string(),
            retailer: "Target".to_string(),
            rating: Some(4.2),
            reviews: Some(850),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_search_matches_title_and_description() {
        let provider = CuratedProvider::new();
        let options = SearchOptions::default();

        let by_title = provider.search("calendar", &options).await.unwrap();
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].retailer, "Amazon");

        let by_description = provider.search("anti-fatigue", &options).await.unwrap();
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].retailer, "Target");
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let provider = CuratedProvider::new();
        let results = provider.search("MEMORY", &SearchOptions::default()).await.unwrap();
        assert_eq!(results.len(), 2);
    }

    #[tokio::test]
    async fn test_price_filter_applies() {
        let provider = CuratedProvider::new();
        let options = SearchOptions { max_price: Some(30.0), ..SearchOptions::default() };
        let results = provider.search("memory", &options).await.unwrap();
        assert_eq!(results.len(), 1);
        assert!(results[0].price <= 30.0);
    }

    #[tokio::test]
    async fn test_max_results_caps_output() {
        let provider = CuratedProvider::new();
        let options = SearchOptions { max_results: 1, ..SearchOptions::default() };
        let results = provider.search("memory", &options).await.unwrap();
        assert_eq!(results.len(), 1);
    }

    #[tokio::test]
    async fn test_no_match_is_empty() {
        let provider = CuratedProvider::new();
        let results = provider.search("lawnmower", &SearchOptions::default()).await.unwrap();
        assert!(results.is_empty());
    }
}
