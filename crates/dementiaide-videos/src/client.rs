//! YouTube Data API v3 search client.
//!
//! One request per search, plus at most one retry with a different key when
//! the first key comes back quota-exceeded. The client never errors out to
//! its caller: cache miss + upstream failure degrades to the curated
//! fallback set.

use crate::cache::VideoCache;
use crate::fallback::fallback_videos;
use crate::keypool::{redact, KeyPool, KeyPoolEntry};
use crate::Video;
use dementiaide_config::{Config, VideoConfig};
use secrecy::ExposeSecret;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

enum FetchError {
    QuotaExceeded,
    Other(String),
}

/// Result of probing a single configured key.
#[derive(Debug, Clone, serde::Serialize)]
pub struct KeyProbe {
    pub key: String,
    pub valid: bool,
    pub error: Option<String>,
}

pub struct VideoClient {
    http: reqwest::Client,
    base_url: String,
    max_results: u32,
    search_prefix: String,
    api_keys_secret: String,
    pool: Mutex<KeyPool>,
    cache: Mutex<VideoCache>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl VideoClient {
    pub fn new(config: &VideoConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_results: config.max_results,
            search_prefix: config.search_prefix.clone(),
            api_keys_secret: config.api_keys_secret.clone(),
            pool: Mutex::new(KeyPool::new(
                config.max_error_count,
                Duration::from_secs(config.error_reset_secs),
            )),
            cache: Mutex::new(VideoCache::new(Duration::from_secs(config.cache_ttl_secs))),
        }
    }

    /// Keys are re-read from the environment on every search so an operator
    /// can rotate credentials without a restart.
    fn configured_keys(&self) -> Vec<String> {
        match Config::resolve_secret(&self.api_keys_secret) {
            Some(secret) => KeyPool::parse_keys(secret.expose_secret()),
            None => Vec::new(),
        }
    }

    pub fn pool_entries(&self) -> Vec<KeyPoolEntry> {
        lock(&self.pool).entries()
    }

    /// Search for caregiver videos. Total: every failure path returns the
    /// fallback set rather than an error.
    pub async fn search(&self, query: &str) -> Vec<Video> {
        let now = Instant::now();
        let keys = self.configured_keys();
        let term = format!("{} {}", self.search_prefix, query).to_lowercase();

        lock(&self.pool).sync(&keys, now);

        if let Some(hit) = lock(&self.cache).get(&term, now) {
            tracing::debug!(%term, "video cache hit");
            return hit;
        }

        let Some(key) = lock(&self.pool).next_available(now) else {
            tracing::error!("no available video API keys");
            return fallback_videos();
        };

        match self.fetch(&term, &key).await {
            Ok(videos) => {
                let now = Instant::now();
                lock(&self.pool).mark_used(&key, now);
                lock(&self.cache).insert(term, videos.clone(), now);
                videos
            }
            Err(FetchError::QuotaExceeded) => {
                let retry_key = {
                    let mut pool = lock(&self.pool);
                    pool.mark_quota_exceeded(&key);
                    pool.next_available(Instant::now())
                };
                match retry_key {
                    Some(next) if next != key => self.retry_with(&term, &next).await,
                    _ => fallback_videos(),
                }
            }
            Err(FetchError::Other(message)) => {
                tracing::error!(key = %redact(&key), %message, "video search failed");
                lock(&self.pool).mark_error(&key);
                fallback_videos()
            }
        }
    }

    async fn retry_with(&self, term: &str, key: &str) -> Vec<Video> {
        match self.fetch(term, key).await {
            Ok(videos) => {
                let now = Instant::now();
                lock(&self.pool).mark_used(key, now);
                lock(&self.cache).insert(term.to_string(), videos.clone(), now);
                videos
            }
            Err(FetchError::QuotaExceeded) => {
                lock(&self.pool).mark_quota_exceeded(key);
                fallback_videos()
            }
            Err(FetchError::Other(message)) => {
                tracing::error!(key = %redact(key), %message, "video search retry failed");
                lock(&self.pool).mark_error(key);
                fallback_videos()
            }
        }
    }

    async fn fetch(&self, term: &str, key: &str) -> Result<Vec<Video>, FetchError> {
        let url = format!("{}/search", self.base_url);
        let resp = self
            .http
            .get(&url)
            .query(&[
                ("part", "snippet"),
                ("q", term),
                ("type", "video"),
                ("maxResults", &self.max_results.to_string()),
                ("key", key),
            ])
            .send()
            .await
            .map_err(|e| FetchError::Other(e.to_string()))?;

        let status = resp.status();
        let body: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| FetchError::Other(e.to_string()))?;

        if !status.is_success() {
            if quota_exceeded(&body) {
                return Err(FetchError::QuotaExceeded);
            }
            let message = body["error"]["message"]
                .as_str()
                .unwrap_or("video API request failed")
                .to_string();
            return Err(FetchError::Other(format!("[{}] {}", status.as_u16(), message)));
        }

        Ok(parse_items(&body))
    }

    /// One live maxResults=1 probe per configured key.
    pub async fn probe_keys(&self) -> Vec<KeyProbe> {
        let mut probes = Vec::new();
        for key in self.configured_keys() {
            let url = format!("{}/search", self.base_url);
            let result = self
                .http
                .get(&url)
                .query(&[
                    ("part", "snippet"),
                    ("q", "test"),
                    ("type", "video"),
                    ("maxResults", "1"),
                    ("key", &key),
                ])
                .send()
                .await;

            let probe = match result {
                Ok(resp) => {
                    let ok = resp.status().is_success();
                    let error = if ok {
                        None
                    } else {
                        let body: serde_json::Value = resp.json().await.unwrap_or_default();
                        Some(
                            body["error"]["message"]
                                .as_str()
                                .unwrap_or("request failed")
                                .to_string(),
                        )
                    };
                    KeyProbe { key: redact(&key), valid: ok, error }
                }
                Err(e) => KeyProbe { key: redact(&key), valid: false, error: Some(e.to_string()) },
            };
            probes.push(probe);
        }
        probes
    }
}

/// True when the error body names quota exhaustion as the reason.
fn quota_exceeded(body: &serde_json::Value) -> bool {
    body["error"]["errors"][0]["reason"].as_str() == Some("quotaExceeded")
}

fn parse_items(body: &serde_json::Value) -> Vec<Video> {
    body["items"]
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| {
                    let id = item["id"]["videoId"].as_str()?;
                    let snippet = &item["snippet"];
                    Some(Video {
                        id: id.to_string(),
                        title: snippet["title"].as_str().unwrap_or("").to_string(),
                        description: snippet["description"].as_str().unwrap_or("").to_string(),
                        thumbnail_url: snippet["thumbnails"]["high"]["url"]
                            .as_str()
                            .unwrap_or("")
                            .to_string(),
                        channel_title: snippet["channelTitle"].as_str().unwrap_or("").to_string(),
                        published_at: snippet["publishedAt"].as_str().unwrap_or("").to_string(),
                    })
                })
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_items_maps_snippet_fields() {
        let body = serde_json::json!({
            "items": [{
                "id": { "videoId": "abc123" },
                "snippet": {
                    "title": "Sundowning explained",
                    "description": "Evening restlessness and what helps.",
                    "thumbnails": { "high": { "url": "https://i.ytimg.com/vi/abc123/hqdefault.jpg" } },
                    "channelTitle": "Care Channel",
                    "publishedAt": "2024-03-01T00:00:00Z"
                }
            }]
        });
        let videos = parse_items(&body);
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].id, "abc123");
        assert_eq!(videos[0].channel_title, "Care Channel");
    }

    #[test]
    fn test_parse_items_skips_entries_without_video_id() {
        let body = serde_json::json!({
            "items": [
                { "id": { "channelId": "UC123" }, "snippet": { "title": "a channel" } },
                { "id": { "videoId": "v1" }, "snippet": { "title": "a video" } }
            ]
        });
        let videos = parse_items(&body);
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].id, "v1");
    }

    #[test]
    fn test_parse_items_handles_missing_items() {
        assert!(parse_items(&serde_json::json!({})).is_empty());
    }

    #[test]
    fn test_quota_reason_detection() {
        let quota = serde_json::json!({
            "error": { "errors": [{ "reason": "quotaExceeded" }], "message": "Quota exceeded" }
        });
        let forbidden = serde_json::json!({
            "error": { "errors": [{ "reason": "forbidden" }], "message": "Forbidden" }
        });
        assert!(quota_exceeded(&quota));
        assert!(!quota_exceeded(&forbidden));
        assert!(!quota_exceeded(&serde_json::json!({})));
    }

    #[tokio::test]
    async fn test_quota_exceeded_retries_once_with_distinct_key() {
        use wiremock::matchers::{method, path, query_param};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("key", "first-key-0001"))
            .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
                "error": { "errors": [{ "reason": "quotaExceeded" }], "message": "Quota exceeded" }
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("key", "second-key-0002"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "items": [{
                    "id": { "videoId": "v1" },
                    "snippet": {
                        "title": "Managing sundowning",
                        "description": "",
                        "thumbnails": { "high": { "url": "" } },
                        "channelTitle": "Care Channel",
                        "publishedAt": "2024-03-01T00:00:00Z"
                    }
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        std::env::set_var("DEMENTIAIDE_TEST_QUOTA_KEYS", "first-key-0001,second-key-0002");
        let config = VideoConfig {
            base_url: server.uri(),
            api_keys_secret: "DEMENTIAIDE_TEST_QUOTA_KEYS".to_string(),
            ..VideoConfig::default()
        };
        let client = VideoClient::new(&config);

        let videos = client.search("sundowning").await;
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].id, "v1");

        let entries = client.pool_entries();
        let first = entries.iter().find(|e| e.key == redact("first-key-0001")).unwrap();
        assert!(first.quota_exceeded);
        let second = entries.iter().find(|e| e.key == redact("second-key-0002")).unwrap();
        assert!(!second.quota_exceeded);

        // Each mock expects exactly one hit, so a third request fails here
        server.verify().await;
    }

    #[tokio::test]
    async fn test_search_without_keys_returns_fallback() {
        std::env::set_var("DEMENTIAIDE_TEST_NO_KEYS", "");
        let config = VideoConfig {
            api_keys_secret: "DEMENTIAIDE_TEST_NO_KEYS".to_string(),
            ..VideoConfig::default()
        };
        let client = VideoClient::new(&config);
        let videos = client.search("wandering at night").await;
        assert_eq!(videos, fallback_videos());
    }
}
