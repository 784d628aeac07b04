//! Configuration loading for DementiAide.
//! Reads dementiaide.toml from the current directory or the path in the
//! DEMENTIAIDE_CONFIG env var. Every field has a default, so a missing file
//! yields a fully usable config; API credentials are never stored in the
//! file itself — each section names the env var holding its secret.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub advice: AdviceConfig,
    #[serde(default)]
    pub videos: VideoConfig,
    #[serde(default)]
    pub retail: RetailConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 3001 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviceConfig {
    /// Text-classification model used for emotion detection.
    #[serde(default = "default_emotion_model")]
    pub model: String,
    #[serde(default = "default_hf_base_url")]
    pub base_url: String,
    /// Env var holding the Hugging Face API token.
    #[serde(default = "default_hf_secret")]
    pub api_key_secret: String,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_emotion_model() -> String { "j-hartmann/emotion-english-distilroberta-base".to_string() }
fn default_hf_base_url() -> String { "https://api-inference.huggingface.co".to_string() }
fn default_hf_secret() -> String { "HUGGINGFACE_API_KEY".to_string() }
fn default_request_timeout() -> u64 { 30 }

impl Default for AdviceConfig {
    fn default() -> Self {
        Self {
            model: default_emotion_model(),
            base_url: default_hf_base_url(),
            api_key_secret: default_hf_secret(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoConfig {
    #[serde(default = "default_youtube_base_url")]
    pub base_url: String,
    /// Env var holding the comma-separated list of API keys.
    #[serde(default = "default_youtube_secret")]
    pub api_keys_secret: String,
    #[serde(default = "default_max_results")]
    pub max_results: u32,
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,
    #[serde(default = "default_error_reset")]
    pub error_reset_secs: u64,
    #[serde(default = "default_max_error_count")]
    pub max_error_count: u32,
    /// Prepended to every care query before it is sent upstream.
    #[serde(default = "default_search_prefix")]
    pub search_prefix: String,
}

fn default_youtube_base_url() -> String { "https://www.googleapis.com/youtube/v3".to_string() }
fn default_youtube_secret() -> String { "YOUTUBE_API_KEYS".to_string() }
fn default_max_results() -> u32 { 5 }
fn default_cache_ttl() -> u64 { 24 * 60 * 60 }
fn default_error_reset() -> u64 { 60 * 60 }
fn default_max_error_count() -> u32 { 3 }
fn default_search_prefix() -> String { "dementia".to_string() }

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            base_url: default_youtube_base_url(),
            api_keys_secret: default_youtube_secret(),
            max_results: default_max_results(),
            cache_ttl_secs: default_cache_ttl(),
            error_reset_secs: default_error_reset(),
            max_error_count: default_max_error_count(),
            search_prefix: default_search_prefix(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetailConfig {
    #[serde(default = "default_providers")]
    pub providers: Vec<String>,
    #[serde(default = "default_retail_limit")]
    pub default_limit: u32,
}

fn default_providers() -> Vec<String> {
    vec!["curated".to_string()]
}
fn default_retail_limit() -> u32 { 10 }

impl Default for RetailConfig {
    fn default() -> Self {
        Self { providers: default_providers(), default_limit: default_retail_limit() }
    }
}

impl Config {
    /// Load configuration from dementiaide.toml.
    /// Checks DEMENTIAIDE_CONFIG env var first, then the current directory.
    /// A missing file is not an error: defaults cover every field.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("DEMENTIAIDE_CONFIG")
            .unwrap_or_else(|_| "dementiaide.toml".to_string());

        if !Path::new(&path).exists() {
            tracing::info!(path, "config file not found, using defaults");
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Resolve a secret from the env var named by `secret_name`.
    /// Returns None when the var is unset or blank.
    pub fn resolve_secret(secret_name: &str) -> Option<SecretString> {
        match std::env::var(secret_name) {
            Ok(v) if !v.trim().is_empty() => Some(SecretString::from(v)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_defaults_cover_empty_file() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.videos.max_results, 5);
        assert_eq!(config.videos.cache_ttl_secs, 86_400);
        assert_eq!(config.retail.providers, vec!["curated".to_string()]);
    }

    #[test]
    fn test_partial_file_overrides() {
        let config: Config = toml::from_str(
            r#"
            [server]
            port = 8080

            [videos]
            max_results = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.videos.max_results, 3);
        assert_eq!(config.videos.error_reset_secs, 3_600);
    }

    #[test]
    fn test_resolve_secret_blank_is_none() {
        std::env::set_var("DEMENTIAIDE_TEST_BLANK", "   ");
        assert!(Config::resolve_secret("DEMENTIAIDE_TEST_BLANK").is_none());
        assert!(Config::resolve_secret("DEMENTIAIDE_TEST_UNSET_VAR").is_none());
    }

    #[test]
    fn test_resolve_secret_present() {
        std::env::set_var("DEMENTIAIDE_TEST_KEY", "hf_abc123");
        let secret = Config::resolve_secret("DEMENTIAIDE_TEST_KEY").unwrap();
        assert_eq!(secret.expose_secret(), "hf_abc123");
    }
}
