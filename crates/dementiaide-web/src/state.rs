//! Shared application state for the web server.

use dementiaide_advice::{AdviceService, HfClassifier};
use dementiaide_catalog::{care_aid_items, storefront_items, CareAid, StorefrontItem};
use dementiaide_config::Config;
use dementiaide_retail::{Aggregator, CuratedProvider};
use dementiaide_videos::VideoClient;
use std::sync::Arc;

/// Shared state injected into every Axum handler.
pub struct AppState {
    pub config: Config,
    pub advice: AdviceService,
    pub videos: VideoClient,
    pub retail: Aggregator,
    pub storefront: Vec<StorefrontItem>,
    pub care_aids: Vec<CareAid>,
}

impl AppState {
    pub fn from_config(config: Config) -> Self {
        let hf_token = Config::resolve_secret(&config.advice.api_key_secret);
        if hf_token.is_none() {
            tracing::warn!(
                secret = %config.advice.api_key_secret,
                "no classifier API token configured, calls may be rate-limited"
            );
        }
        let advice = AdviceService::new(Arc::new(HfClassifier::new(&config.advice, hf_token)));

        let videos = VideoClient::new(&config.videos);

        let mut retail = Aggregator::new();
        for name in &config.retail.providers {
            match name.as_str() {
                "curated" => retail.register(Arc::new(CuratedProvider::new())),
                other => tracing::warn!(provider = other, "unknown retail provider, skipping"),
            }
        }

        Self {
            config,
            advice,
            videos,
            retail,
            storefront: storefront_items(),
            care_aids: care_aid_items(),
        }
    }
}

pub type SharedState = Arc<AppState>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_registers_curated_provider() {
        let state = AppState::from_config(Config::default());
        assert_eq!(state.retail.provider_names(), vec!["curated"]);
        assert!(!state.storefront.is_empty());
        assert!(!state.care_aids.is_empty());
    }

    #[test]
    fn test_unknown_provider_is_skipped() {
        let mut config = Config::default();
        config.retail.providers = vec!["curated".to_string(), "walmart".to_string()];
        let state = AppState::from_config(config);
        assert_eq!(state.retail.provider_names(), vec!["curated"]);
    }
}
