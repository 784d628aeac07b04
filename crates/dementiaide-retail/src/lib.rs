//! dementiaide-retail — Cross-retailer product search.
//! A small provider registry in front of retailer-specific search backends;
//! the shipped provider serves a curated cross-retailer list. Adding a real
//! retailer API means implementing `RetailProvider` and registering it.

pub mod aggregator;
pub mod curated;
pub mod provider;

pub use aggregator::Aggregator;
pub use curated::CuratedProvider;
pub use provider::{Listing, RetailError, RetailProvider, SearchOptions};
