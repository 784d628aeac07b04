//! In-memory result cache keyed by the normalized search term.
//! Entries expire after the configured TTL; the map is bounded and evicts
//! its oldest entry at capacity so a long-lived process cannot grow without
//! limit on unique queries.

use crate::Video;
use std::collections::HashMap;
use std::time::{Duration, Instant};

const DEFAULT_CAPACITY: usize = 256;

#[derive(Debug, Clone)]
struct CacheEntry {
    videos: Vec<Video>,
    fetched_at: Instant,
}

#[derive(Debug)]
pub struct VideoCache {
    entries: HashMap<String, CacheEntry>,
    ttl: Duration,
    capacity: usize,
}

impl VideoCache {
    pub fn new(ttl: Duration) -> Self {
        Self::with_capacity(ttl, DEFAULT_CAPACITY)
    }

    pub fn with_capacity(ttl: Duration, capacity: usize) -> Self {
        Self { entries: HashMap::new(), ttl, capacity: capacity.max(1) }
    }

    pub fn get(&self, term: &str, now: Instant) -> Option<Vec<Video>> {
        let entry = self.entries.get(term)?;
        if now.duration_since(entry.fetched_at) < self.ttl {
            Some(entry.videos.clone())
        } else {
            None
        }
    }

    pub fn insert(&mut self, term: String, videos: Vec<Video>, now: Instant) {
        // Drop expired entries first; evict the oldest survivor if still full.
        self.entries
            .retain(|_, e| now.duration_since(e.fetched_at) < self.ttl);
        if self.entries.len() >= self.capacity && !self.entries.contains_key(&term) {
            if let Some(oldest) = self
                .entries
                .iter()
                .min_by_key(|(_, e)| e.fetched_at)
                .map(|(k, _)| k.clone())
            {
                self.entries.remove(&oldest);
            }
        }
        self.entries.insert(term, CacheEntry { videos, fetched_at: now });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: &str) -> Video {
        Video {
            id: id.to_string(),
            title: "t".to_string(),
            description: "d".to_string(),
            thumbnail_url: "u".to_string(),
            channel_title: "c".to_string(),
            published_at: "2023-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_fresh_entry_is_served() {
        let t0 = Instant::now();
        let mut cache = VideoCache::new(Duration::from_secs(60));
        cache.insert("dementia sleep".to_string(), vec![video("a")], t0);
        let hit = cache.get("dementia sleep", t0 + Duration::from_secs(59)).unwrap();
        assert_eq!(hit[0].id, "a");
    }

    #[test]
    fn test_expired_entry_is_not_served() {
        let t0 = Instant::now();
        let mut cache = VideoCache::new(Duration::from_secs(60));
        cache.insert("dementia sleep".to_string(), vec![video("a")], t0);
        assert!(cache.get("dementia sleep", t0 + Duration::from_secs(60)).is_none());
    }

    #[test]
    fn test_miss_on_unknown_term() {
        let cache = VideoCache::new(Duration::from_secs(60));
        assert!(cache.get("anything", Instant::now()).is_none());
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let t0 = Instant::now();
        let mut cache = VideoCache::with_capacity(Duration::from_secs(3600), 2);
        cache.insert("q1".to_string(), vec![video("a")], t0);
        cache.insert("q2".to_string(), vec![video("b")], t0 + Duration::from_secs(1));
        cache.insert("q3".to_string(), vec![video("c")], t0 + Duration::from_secs(2));
        assert_eq!(cache.len(), 2);
        assert!(cache.get("q1", t0 + Duration::from_secs(3)).is_none());
        assert!(cache.get("q3", t0 + Duration::from_secs(3)).is_some());
    }

    #[test]
    fn test_reinsert_refreshes_entry() {
        let t0 = Instant::now();
        let mut cache = VideoCache::new(Duration::from_secs(60));
        cache.insert("q".to_string(), vec![video("a")], t0);
        cache.insert("q".to_string(), vec![video("b")], t0 + Duration::from_secs(30));
        let hit = cache.get("q", t0 + Duration::from_secs(80)).unwrap();
        assert_eq!(hit[0].id, "b");
    }
}
