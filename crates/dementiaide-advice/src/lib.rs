//! dementiaide-advice — Care-advice engine.
//! Classifies the emotional tone of a caregiver's free-text query with an
//! external text-classification model, then maps the dominant emotion onto
//! a pre-written advice bundle. The mapping is deterministic; the classifier
//! is the only networked piece and every entry point degrades to a static
//! fallback when it fails.

pub mod classifier;
pub mod emotions;
pub mod responses;
pub mod service;

pub use classifier::{ClassifierError, EmotionClassifier, EmotionScore, HfClassifier};
pub use emotions::{CareCategory, Emotion};
pub use responses::CareAdvice;
pub use service::AdviceService;
