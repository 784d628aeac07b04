//! dementiaide-web — JSON API for the DementiAide site.
//! Routes:
//!   - care-advice analysis (emotion classification → canned bundle)
//!   - caregiver video search (key rotation, cache, fallback)
//!   - storefront catalog and care-aid search
//!   - cross-retailer product search

pub mod handlers;
pub mod router;
pub mod state;
