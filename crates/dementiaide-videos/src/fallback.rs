//! Curated fallback videos, served when no API key is usable.

use crate::Video;

/// Five evergreen caregiver videos covering the most common topics.
pub fn fallback_videos() -> Vec<Video> {
    vec![
        Video {
            id: "HUNbiS7uHpI".to_string(),
            title: "Understanding Dementia: A Guide for Caregivers".to_string(),
            description: "Learn about the basics of dementia care and how to support your loved ones.".to_string(),
            thumbnail_url: "https://i.ytimg.com/vi/HUNbiS7uHpI/hqdefault.jpg".to_string(),
            channel_title: "Alzheimer's Association".to_string(),
            published_at: "2023-01-01T00:00:00Z".to_string(),
        },
        Video {
            id: "wNYptduVHxk".to_string(),
            title: "Daily Care Tips for People with Dementia".to_string(),
            description: "Practical tips and strategies for daily dementia care.".to_string(),
            thumbnail_url: "https://i.ytimg.com/vi/wNYptduVHxk/hqdefault.jpg".to_string(),
            channel_title: "Dementia Care Tips".to_string(),
            published_at: "2023-02-01T00:00:00Z".to_string(),
        },
        Video {
            id: "DfQ6sFrN_KE".to_string(),
            title: "Communication Strategies in Dementia Care".to_string(),
            description: "How to effectively communicate with someone who has dementia.".to_string(),
            thumbnail_url: "https://i.ytimg.com/vi/DfQ6sFrN_KE/hqdefault.jpg".to_string(),
            channel_title: "Caregiver Support".to_string(),
            published_at: "2023-03-01T00:00:00Z".to_string(),
        },
        Video {
            id: "BPfq8xvCfEk".to_string(),
            title: "Managing Behavioral Changes in Dementia".to_string(),
            description: "Expert guidance on handling challenging behaviors and maintaining quality of life.".to_string(),
            thumbnail_url: "https://i.ytimg.com/vi/BPfq8xvCfEk/hqdefault.jpg".to_string(),
            channel_title: "Dementia Care Education".to_string(),
            published_at: "2023-04-01T00:00:00Z".to_string(),
        },
        Video {
            id: "YQk5tL6pzk4".to_string(),
            title: "Creating a Safe Home Environment for Dementia Patients".to_string(),
            description: "Home safety tips and modifications for people living with dementia.".to_string(),
            thumbnail_url: "https://i.ytimg.com/vi/YQk5tL6pzk4/hqdefault.jpg".to_string(),
            channel_title: "Caregiver Resources".to_string(),
            published_at: "2023-05-01T00:00:00Z".to_string(),
        },
    ]
}
