//! Emotion labels and their deterministic mapping onto care categories.

use serde::{Deserialize, Serialize};

/// Emotion labels emitted by the classification model.
/// Labels we have never seen map to Neutral rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emotion {
    Joy,
    Sadness,
    Anger,
    Fear,
    Surprise,
    Disgust,
    Neutral,
}

impl Emotion {
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "joy" => Emotion::Joy,
            "sadness" => Emotion::Sadness,
            "anger" => Emotion::Anger,
            "fear" => Emotion::Fear,
            "surprise" => Emotion::Surprise,
            "disgust" => Emotion::Disgust,
            _ => Emotion::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
            Emotion::Anger => "anger",
            Emotion::Fear => "fear",
            Emotion::Surprise => "surprise",
            Emotion::Disgust => "disgust",
            Emotion::Neutral => "neutral",
        }
    }

    /// Category used when tagging content by tone.
    pub fn category(&self) -> CareCategory {
        match self {
            Emotion::Joy => CareCategory::Activities,
            Emotion::Sadness => CareCategory::Communication,
            Emotion::Anger => CareCategory::Behavior,
            Emotion::Fear => CareCategory::Safety,
            Emotion::Surprise => CareCategory::DailyCare,
            Emotion::Disgust => CareCategory::Health,
            Emotion::Neutral => CareCategory::General,
        }
    }

    /// Keywords appended when rewriting a search query for this tone.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Emotion::Joy => &["positive", "activities", "engagement"],
            Emotion::Sadness => &["support", "coping", "care"],
            Emotion::Anger => &["managing", "behavior", "strategies"],
            Emotion::Fear => &["safety", "prevention", "security"],
            Emotion::Surprise => &["adapting", "changes", "flexibility"],
            Emotion::Disgust => &["hygiene", "health", "care"],
            Emotion::Neutral => &["general", "basic", "guide"],
        }
    }
}

/// Advice categories surfaced to the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CareCategory {
    Behavior,
    Safety,
    #[serde(rename = "Daily Care")]
    DailyCare,
    Communication,
    Activities,
    Health,
    General,
}

impl CareCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            CareCategory::Behavior => "Behavior",
            CareCategory::Safety => "Safety",
            CareCategory::DailyCare => "Daily Care",
            CareCategory::Communication => "Communication",
            CareCategory::Activities => "Activities",
            CareCategory::Health => "Health",
            CareCategory::General => "General",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_label_maps_to_neutral() {
        assert_eq!(Emotion::from_label("confusion"), Emotion::Neutral);
        assert_eq!(Emotion::from_label(""), Emotion::Neutral);
    }

    #[test]
    fn test_label_parsing_is_case_insensitive() {
        assert_eq!(Emotion::from_label("JOY"), Emotion::Joy);
        assert_eq!(Emotion::from_label("Fear"), Emotion::Fear);
    }

    #[test]
    fn test_emotion_category_mapping() {
        assert_eq!(Emotion::Joy.category(), CareCategory::Activities);
        assert_eq!(Emotion::Sadness.category(), CareCategory::Communication);
        assert_eq!(Emotion::Anger.category(), CareCategory::Behavior);
        assert_eq!(Emotion::Fear.category(), CareCategory::Safety);
        assert_eq!(Emotion::Surprise.category(), CareCategory::DailyCare);
        assert_eq!(Emotion::Disgust.category(), CareCategory::Health);
        assert_eq!(Emotion::Neutral.category(), CareCategory::General);
    }

    #[test]
    fn test_daily_care_serializes_with_space() {
        let json = serde_json::to_string(&CareCategory::DailyCare).unwrap();
        assert_eq!(json, "\"Daily Care\"");
    }
}
