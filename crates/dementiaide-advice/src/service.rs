//! Advice service: glue between the classifier and the canned bundles.
//! Every public entry point is total — a classifier failure downgrades to a
//! static response instead of surfacing an error to the caller.

use crate::classifier::{ClassifierError, EmotionClassifier, EmotionScore};
use crate::emotions::Emotion;
use crate::responses::{bundle_for, fallback_advice, CareAdvice, RELATED_TOPICS};
use std::sync::Arc;

const MAX_SUGGESTIONS: usize = 5;
const MAX_RELATED_TOPICS: usize = 6;

#[derive(Clone)]
pub struct AdviceService {
    classifier: Arc<dyn EmotionClassifier>,
}

impl AdviceService {
    pub fn new(classifier: Arc<dyn EmotionClassifier>) -> Self {
        Self { classifier }
    }

    pub fn model_id(&self) -> &str {
        self.classifier.model_id()
    }

    /// Analyze a care query and assemble the advice bundle for its tone.
    pub async fn analyze_care_query(&self, query: &str) -> CareAdvice {
        let scores = match self.classifier.classify(query).await {
            Ok(scores) if !scores.is_empty() => scores,
            Ok(_) => {
                tracing::warn!("classifier returned no scores, using fallback advice");
                return fallback_advice();
            }
            Err(err) => {
                tracing::error!(error = %err, "error analyzing care query");
                return fallback_advice();
            }
        };

        let primary = Emotion::from_label(&scores[0].label);
        let secondary = scores
            .get(1)
            .map(|s| Emotion::from_label(&s.label))
            .unwrap_or(Emotion::Neutral);

        let bundle = bundle_for(primary);
        tracing::info!(
            emotion = primary.as_str(),
            category = bundle.category.as_str(),
            confidence = scores[0].score,
            "care query analyzed"
        );

        let search_suggestions: Vec<String> = [
            format!(
                "{} strategies in dementia care",
                bundle.category.as_str().to_lowercase()
            ),
            format!("managing {} in dementia care", primary.as_str()),
            format!("{} coping techniques dementia", secondary.as_str()),
            "evidence-based dementia care approaches".to_string(),
            "professional dementia care resources".to_string(),
        ]
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .collect();

        CareAdvice {
            explanation: bundle.explanation.to_string(),
            tips: bundle.tips.iter().map(|t| t.to_string()).collect(),
            search_suggestions,
            related_topics: RELATED_TOPICS
                .iter()
                .take(MAX_RELATED_TOPICS)
                .map(|t| t.to_string())
                .collect(),
            category: bundle.category,
        }
    }

    /// Tag a piece of content with its tone-derived category.
    pub async fn categorize_content(&self, content: &str) -> Vec<String> {
        match self.classifier.classify(content).await {
            Ok(scores) if !scores.is_empty() => {
                let category = Emotion::from_label(&scores[0].label).category();
                vec![category.as_str().to_string(), "Dementia Care".to_string()]
            }
            Ok(_) => vec!["Dementia Care".to_string()],
            Err(err) => {
                tracing::error!(error = %err, "error categorizing content");
                vec!["Dementia Care".to_string()]
            }
        }
    }

    /// Expand a search query with tone-appropriate keywords.
    /// Returns the query unchanged when classification fails.
    pub async fn enhance_search_query(&self, query: &str) -> String {
        match self.classifier.classify(query).await {
            Ok(scores) if !scores.is_empty() => {
                let emotion = Emotion::from_label(&scores[0].label);
                format!("{} {} dementia care", query, emotion.keywords().join(" "))
            }
            Ok(_) => query.to_string(),
            Err(err) => {
                tracing::error!(error = %err, "error enhancing search query");
                query.to_string()
            }
        }
    }

    /// Raw classification of a fixed probe sentence, for diagnostics.
    pub async fn self_test(&self) -> Result<Vec<EmotionScore>, ClassifierError> {
        self.classifier.classify("Hello, how are you?").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emotions::CareCategory;
    use async_trait::async_trait;

    struct CannedClassifier {
        scores: Vec<EmotionScore>,
    }

    #[async_trait]
    impl EmotionClassifier for CannedClassifier {
        async fn classify(&self, _text: &str) -> Result<Vec<EmotionScore>, ClassifierError> {
            Ok(self.scores.clone())
        }
        fn model_id(&self) -> &str {
            "canned"
        }
    }

    struct BrokenClassifier;

    #[async_trait]
    impl EmotionClassifier for BrokenClassifier {
        async fn classify(&self, _text: &str) -> Result<Vec<EmotionScore>, ClassifierError> {
            Err(ClassifierError::Unavailable("offline".to_string()))
        }
        fn model_id(&self) -> &str {
            "broken"
        }
    }

    fn service_with(scores: Vec<(&str, f32)>) -> AdviceService {
        let scores = scores
            .into_iter()
            .map(|(label, score)| EmotionScore { label: label.to_string(), score })
            .collect();
        AdviceService::new(Arc::new(CannedClassifier { scores }))
    }

    #[tokio::test]
    async fn test_fear_query_yields_safety_advice() {
        let service = service_with(vec![("fear", 0.9), ("sadness", 0.05)]);
        let advice = service.analyze_care_query("mom keeps wandering at night").await;
        assert_eq!(advice.category, CareCategory::Safety);
        assert!(advice.tips.iter().any(|t| t.contains("door alarms")));
        assert_eq!(advice.search_suggestions.len(), 5);
        assert_eq!(advice.related_topics.len(), 6);
    }

    #[tokio::test]
    async fn test_suggestions_use_primary_and_secondary_emotion() {
        let service = service_with(vec![("anger", 0.7), ("fear", 0.2)]);
        let advice = service.analyze_care_query("he refuses to eat").await;
        assert!(advice.search_suggestions[0].starts_with("behavior strategies"));
        assert!(advice.search_suggestions[1].contains("managing anger"));
        assert!(advice.search_suggestions[2].contains("fear coping"));
    }

    #[tokio::test]
    async fn test_classifier_failure_falls_back() {
        let service = AdviceService::new(Arc::new(BrokenClassifier));
        let advice = service.analyze_care_query("anything").await;
        assert_eq!(advice.category, CareCategory::General);
        assert!(advice.explanation.contains("having trouble"));
    }

    #[tokio::test]
    async fn test_empty_scores_fall_back() {
        let service = service_with(vec![]);
        let advice = service.analyze_care_query("anything").await;
        assert_eq!(advice.category, CareCategory::General);
    }

    #[tokio::test]
    async fn test_categorize_content_appends_brand_tag() {
        let service = service_with(vec![("disgust", 0.8)]);
        let tags = service.categorize_content("soiled clothing every morning").await;
        assert_eq!(tags, vec!["Health".to_string(), "Dementia Care".to_string()]);
    }

    #[tokio::test]
    async fn test_categorize_content_failure_keeps_brand_tag() {
        let service = AdviceService::new(Arc::new(BrokenClassifier));
        let tags = service.categorize_content("anything").await;
        assert_eq!(tags, vec!["Dementia Care".to_string()]);
    }

    #[tokio::test]
    async fn test_enhance_search_query_appends_keywords() {
        let service = service_with(vec![("fear", 0.9)]);
        let enhanced = service.enhance_search_query("wandering").await;
        assert_eq!(enhanced, "wandering safety prevention security dementia care");
    }

    #[tokio::test]
    async fn test_enhance_search_query_failure_is_identity() {
        let service = AdviceService::new(Arc::new(BrokenClassifier));
        assert_eq!(service.enhance_search_query("wandering").await, "wandering");
    }
}
