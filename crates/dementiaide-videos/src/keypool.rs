//! API key pool with rotation and failure tracking.
//!
//! Selection is least-recently-used among keys that are neither quota-flagged
//! nor over the error limit; both flags clear after the reset window so a key
//! exhausted today is retried tomorrow. Key order is stable, so LRU ties
//! resolve to the first configured key.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct KeyStatus {
    key: String,
    quota_exceeded: bool,
    error_count: u32,
    last_used: Option<Instant>,
    last_reset: Instant,
}

/// Redacted view of one key's state, for diagnostics.
#[derive(Debug, Clone, serde::Serialize)]
pub struct KeyPoolEntry {
    pub key: String,
    pub quota_exceeded: bool,
    pub error_count: u32,
}

#[derive(Debug)]
pub struct KeyPool {
    keys: Vec<KeyStatus>,
    max_error_count: u32,
    error_reset: Duration,
}

impl KeyPool {
    pub fn new(max_error_count: u32, error_reset: Duration) -> Self {
        Self { keys: Vec::new(), max_error_count, error_reset }
    }

    /// Parse a comma-separated credential string into its key list.
    pub fn parse_keys(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Bring the pool in line with the configured key set: new keys join with
    /// a clean slate, removed keys drop their state, surviving keys keep it.
    pub fn sync(&mut self, configured: &[String], now: Instant) {
        self.keys.retain(|s| configured.contains(&s.key));
        for key in configured {
            if !self.keys.iter().any(|s| &s.key == key) {
                self.keys.push(KeyStatus {
                    key: key.clone(),
                    quota_exceeded: false,
                    error_count: 0,
                    last_used: None,
                    last_reset: now,
                });
            }
        }
    }

    /// Pick the least-recently-used eligible key, clearing stale failure
    /// flags first. Returns None when every key is flagged out.
    pub fn next_available(&mut self, now: Instant) -> Option<String> {
        for status in &mut self.keys {
            if now.duration_since(status.last_reset) > self.error_reset {
                status.error_count = 0;
                status.quota_exceeded = false;
                status.last_reset = now;
            }
        }

        self.keys
            .iter()
            .filter(|s| !s.quota_exceeded && s.error_count < self.max_error_count)
            .min_by_key(|s| s.last_used)
            .map(|s| s.key.clone())
    }

    pub fn mark_used(&mut self, key: &str, now: Instant) {
        if let Some(status) = self.keys.iter_mut().find(|s| s.key == key) {
            status.last_used = Some(now);
        }
    }

    pub fn mark_quota_exceeded(&mut self, key: &str) {
        if let Some(status) = self.keys.iter_mut().find(|s| s.key == key) {
            status.quota_exceeded = true;
            status.error_count += 1;
            tracing::warn!(
                key = %redact(&status.key),
                error_count = status.error_count,
                "API key flagged as quota-exceeded"
            );
        }
    }

    pub fn mark_error(&mut self, key: &str) {
        if let Some(status) = self.keys.iter_mut().find(|s| s.key == key) {
            status.error_count += 1;
        }
    }

    pub fn entries(&self) -> Vec<KeyPoolEntry> {
        self.keys
            .iter()
            .map(|s| KeyPoolEntry {
                key: redact(&s.key),
                quota_exceeded: s.quota_exceeded,
                error_count: s.error_count,
            })
            .collect()
    }
}

/// First five characters of the key, for logs and diagnostics.
pub fn redact(key: &str) -> String {
    let prefix: String = key.chars().take(5).collect();
    format!("{prefix}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool_with(keys: &[&str], now: Instant) -> KeyPool {
        let mut pool = KeyPool::new(3, Duration::from_secs(3600));
        let keys: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
        pool.sync(&keys, now);
        pool
    }

    #[test]
    fn test_parse_keys_trims_and_drops_blanks() {
        let keys = KeyPool::parse_keys(" a1 ,b2,, c3 ");
        assert_eq!(keys, vec!["a1", "b2", "c3"]);
        assert!(KeyPool::parse_keys("").is_empty());
    }

    #[test]
    fn test_never_used_keys_win_lru() {
        let now = Instant::now();
        let mut pool = pool_with(&["k1", "k2"], now);
        pool.mark_used("k1", now);
        assert_eq!(pool.next_available(now).as_deref(), Some("k2"));
    }

    #[test]
    fn test_lru_rotation_spreads_usage() {
        let t0 = Instant::now();
        let mut pool = pool_with(&["k1", "k2", "k3"], t0);
        pool.mark_used("k1", t0);
        pool.mark_used("k2", t0 + Duration::from_secs(1));
        pool.mark_used("k3", t0 + Duration::from_secs(2));
        // k1 is now the stalest
        assert_eq!(pool.next_available(t0 + Duration::from_secs(3)).as_deref(), Some("k1"));
        pool.mark_used("k1", t0 + Duration::from_secs(3));
        assert_eq!(pool.next_available(t0 + Duration::from_secs(4)).as_deref(), Some("k2"));
    }

    #[test]
    fn test_quota_flagged_key_is_skipped() {
        let now = Instant::now();
        let mut pool = pool_with(&["k1", "k2"], now);
        pool.mark_quota_exceeded("k1");
        assert_eq!(pool.next_available(now).as_deref(), Some("k2"));
    }

    #[test]
    fn test_all_keys_flagged_yields_none() {
        let now = Instant::now();
        let mut pool = pool_with(&["k1", "k2"], now);
        pool.mark_quota_exceeded("k1");
        pool.mark_quota_exceeded("k2");
        assert_eq!(pool.next_available(now), None);
    }

    #[test]
    fn test_error_limit_disqualifies_key() {
        let now = Instant::now();
        let mut pool = pool_with(&["k1", "k2"], now);
        for _ in 0..3 {
            pool.mark_error("k1");
        }
        assert_eq!(pool.next_available(now).as_deref(), Some("k2"));
    }

    #[test]
    fn test_flags_reset_after_window() {
        let t0 = Instant::now();
        let mut pool = pool_with(&["k1"], t0);
        pool.mark_quota_exceeded("k1");
        assert_eq!(pool.next_available(t0 + Duration::from_secs(10)), None);
        // One hour plus a second later the flag has expired
        let later = t0 + Duration::from_secs(3601);
        assert_eq!(pool.next_available(later).as_deref(), Some("k1"));
    }

    #[test]
    fn test_sync_keeps_state_and_drops_removed_keys() {
        let now = Instant::now();
        let mut pool = pool_with(&["k1", "k2"], now);
        pool.mark_quota_exceeded("k1");

        pool.sync(&["k1".to_string(), "k3".to_string()], now);
        assert_eq!(pool.len(), 2);
        // k1 keeps its quota flag, so the fresh k3 is chosen
        assert_eq!(pool.next_available(now).as_deref(), Some("k3"));
    }

    #[test]
    fn test_entries_redact_keys() {
        let now = Instant::now();
        let pool = pool_with(&["AIzaSyExample"], now);
        assert_eq!(pool.entries()[0].key, "AIzaS...");
    }
}
