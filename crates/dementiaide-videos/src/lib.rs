//! dementiaide-videos — Caregiver video search.
//! Thin client over the YouTube Data API v3 with three survival mechanisms:
//! a rotating pool of API keys (quota exhaustion on one key must not take the
//! feature down), a TTL'd in-memory result cache, and a curated fallback set
//! returned when no key is usable.

pub mod cache;
pub mod client;
pub mod fallback;
pub mod keypool;

use serde::{Deserialize, Serialize};

pub use cache::VideoCache;
pub use client::{KeyProbe, VideoClient};
pub use fallback::fallback_videos;
pub use keypool::{KeyPool, KeyPoolEntry};

/// One video result as served to the site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub channel_title: String,
    pub published_at: String,
}
