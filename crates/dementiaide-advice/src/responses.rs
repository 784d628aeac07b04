//! Pre-written advice bundles, one per detected tone.
//! The copy here is editorial content, reviewed by the care team; code only
//! selects and assembles it.

use crate::emotions::{CareCategory, Emotion};
use serde::{Deserialize, Serialize};

/// The advice payload returned to the site for a care query.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareAdvice {
    pub explanation: String,
    pub tips: Vec<String>,
    pub search_suggestions: Vec<String>,
    pub related_topics: Vec<String>,
    pub category: CareCategory,
}

pub(crate) struct AdviceBundle {
    pub category: CareCategory,
    pub explanation: &'static str,
    pub tips: &'static [&'static str],
}

static JOY: AdviceBundle = AdviceBundle {
    category: CareCategory::Activities,
    explanation: "It's wonderful that you're seeking positive activities for dementia care. \
        Engaging in enjoyable activities can significantly improve quality of life for both \
        the person with dementia and their caregivers. Activities that bring joy not only \
        help maintain cognitive function but also strengthen emotional bonds and create \
        meaningful moments together.",
    tips: &[
        "Continue engaging in enjoyable activities that connect with past interests and hobbies",
        "Maintain a consistent routine but be flexible when needed",
        "Celebrate small victories and positive moments throughout the day",
        "Use music, art, or gentle exercise to promote engagement",
        "Create a memory book or photo album to reminisce together",
        "Schedule activities during the person's best time of day",
        "Break activities into simple, manageable steps",
        "Focus on the process rather than the outcome of activities",
    ],
};

static SADNESS: AdviceBundle = AdviceBundle {
    category: CareCategory::Communication,
    explanation: "It's completely normal and valid to feel emotional when dealing with \
        dementia care challenges. The journey of caring for someone with dementia can be \
        emotionally demanding, and it's important to acknowledge these feelings while also \
        finding healthy ways to cope and communicate. Remember that seeking support is a \
        sign of strength, not weakness.",
    tips: &[
        "Take time for self-care and emotional well-being",
        "Seek support from family, friends, or support groups",
        "Practice patience and understanding with yourself and your loved one",
        "Use clear, simple language when communicating",
        "Pay attention to non-verbal cues and body language",
        "Join a caregiver support group to share experiences",
        "Consider professional counseling or therapy",
        "Keep a journal to process your emotions",
        "Take regular breaks to prevent emotional exhaustion",
        "Maintain connections with your support network",
    ],
};

static ANGER: AdviceBundle = AdviceBundle {
    category: CareCategory::Behavior,
    explanation: "Challenging behaviors are common in dementia care, and it's natural to \
        feel frustrated at times. Understanding that these behaviors are part of the \
        condition, not intentional actions, can help in developing effective management \
        strategies. The key is to focus on the underlying needs or triggers while \
        maintaining a calm, supportive environment.",
    tips: &[
        "Try to identify specific triggers for difficult behaviors",
        "Stay calm and patient, even in challenging moments",
        "Consider environmental factors like noise, lighting, or time of day",
        "Keep a behavior log to track patterns and triggers",
        "Use redirection instead of confrontation",
        "Ensure basic needs are met (hunger, thirst, comfort)",
        "Maintain a consistent daily routine",
        "Create a calming environment",
        "Use positive reinforcement for good behaviors",
        "Consult with healthcare providers about behavior management strategies",
    ],
};

static FEAR: AdviceBundle = AdviceBundle {
    category: CareCategory::Safety,
    explanation: "Your concern for safety is crucial in providing good dementia care. \
        Creating a secure environment while maintaining dignity and independence requires \
        careful balance. Safety planning is an ongoing process that should adapt as needs \
        change, and it's important to stay proactive rather than reactive in addressing \
        safety concerns.",
    tips: &[
        "Create a safe, clearly organized environment",
        "Establish regular check-ins and monitoring systems",
        "Have emergency contacts and plans readily available",
        "Install safety devices like grab bars and night lights",
        "Remove or secure potentially dangerous items",
        "Use door alarms or monitoring systems if wandering is a concern",
        "Keep important medications secure and organized",
        "Create a detailed emergency plan",
        "Regular safety assessments of the living space",
        "Consider medical alert systems or GPS devices",
    ],
};

static SURPRISE: AdviceBundle = AdviceBundle {
    category: CareCategory::DailyCare,
    explanation: "Unexpected situations are common in dementia care, and being prepared \
        while maintaining flexibility is key. Each day may bring new challenges, but \
        viewing these as opportunities to learn and adapt can help build resilience. \
        Having structured routines while being ready to adjust them helps maintain a \
        balance between consistency and adaptability.",
    tips: &[
        "Maintain flexible routines that can adapt to changing needs",
        "Have backup plans ready for common situations",
        "Document new developments and successful strategies",
        "Keep a daily log of activities and observations",
        "Prepare for different scenarios in advance",
        "Build a network of backup caregivers",
        "Keep essential supplies well-stocked",
        "Learn to recognize early signs of changes in condition",
        "Stay connected with healthcare providers",
        "Practice stress-management techniques for unexpected situations",
    ],
};

static NEUTRAL: AdviceBundle = AdviceBundle {
    category: CareCategory::General,
    explanation: "Understanding dementia care is an ongoing journey that combines practical \
        knowledge with compassionate support. While each person's experience with dementia \
        is unique, having a strong foundation of care principles and resources helps \
        provide consistent, quality care. Regular learning and adaptation to changing \
        needs ensures the best possible support for both the person with dementia and \
        their caregivers.",
    tips: &[
        "Learn about the specific type of dementia and its progression",
        "Establish and maintain consistent daily routines",
        "Stay connected with healthcare providers and specialists",
        "Create a support network of family, friends, and professionals",
        "Keep organized records of medications and appointments",
        "Attend caregiver education programs and workshops",
        "Plan for future care needs and decisions",
        "Practice self-care and stress management",
        "Use available community resources and services",
        "Regular assessment of care needs and adjustments as necessary",
    ],
};

/// Bundle for a detected tone. Disgust has no dedicated copy and shares the
/// neutral bundle.
pub(crate) fn bundle_for(emotion: Emotion) -> &'static AdviceBundle {
    match emotion {
        Emotion::Joy => &JOY,
        Emotion::Sadness => &SADNESS,
        Emotion::Anger => &ANGER,
        Emotion::Fear => &FEAR,
        Emotion::Surprise => &SURPRISE,
        Emotion::Disgust | Emotion::Neutral => &NEUTRAL,
    }
}

pub(crate) const RELATED_TOPICS: [&str; 8] = [
    "Caregiver Support and Self-Care",
    "Daily Care Routines and Schedules",
    "Communication Strategies and Tips",
    "Safety Measures and Prevention",
    "Behavior Management Techniques",
    "Activities and Engagement",
    "Memory Care Strategies",
    "Legal and Financial Planning",
];

/// Returned whenever the classifier cannot be reached.
pub fn fallback_advice() -> CareAdvice {
    CareAdvice {
        explanation: "I apologize, but I'm having trouble processing your query at the \
            moment. Please try again."
            .to_string(),
        tips: vec![
            "Consider rephrasing your question".to_string(),
            "Try breaking down complex questions into simpler ones".to_string(),
        ],
        search_suggestions: vec!["dementia care basics".to_string()],
        related_topics: vec![
            "dementia care".to_string(),
            "caregiver support".to_string(),
            "dementia symptoms".to_string(),
        ],
        category: CareCategory::General,
    }
}
