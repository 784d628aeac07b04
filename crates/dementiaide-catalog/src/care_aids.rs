//! Daily-living care aids searched from the resources pages.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CareAid {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image: String,
    pub tags: Vec<String>,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CareAidQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

/// Case-insensitive substring search over name, description and tags,
/// narrowed by category equality and price range.
pub fn search_care_aids(items: &[CareAid], query: &CareAidQuery) -> Vec<CareAid> {
    let text = query.q.as_deref().map(str::to_lowercase).filter(|q| !q.is_empty());
    let category = query.category.as_deref().map(str::to_lowercase);
    let min = query.min_price.unwrap_or(0.0);
    let max = query.max_price.unwrap_or(f64::INFINITY);

    items
        .iter()
        .filter(|p| {
            text.as_deref().map_or(true, |q| {
                p.name.to_lowercase().contains(q)
                    || p.description.to_lowercase().contains(q)
                    || p.tags.iter().any(|t| t.to_lowercase().contains(q))
            })
        })
        .filter(|p| category.as_deref().map_or(true, |c| p.category.to_lowercase() == c))
        .filter(|p| p.price >= min && p.price <= max)
        .cloned()
        .collect()
}

fn aid(
    id: &str,
    name: &str,
    description: &str,
    price: f64,
    category: &str,
    image: &str,
    tags: &[&str],
    features: &[&str],
) -> CareAid {
    CareAid {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        category: category.to_string(),
        image: image.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        features: features.iter().map(|f| f.to_string()).collect(),
    }
}

pub fn care_aid_items() -> Vec<CareAid> {
    vec![
        aid(
            "1",
            "Adaptive Clothing Set",
            "Easy-to-wear clothing designed for people with dementia, featuring magnetic \
             closures and simple designs.",
            79.99,
            "Clothing",
            "/products/adaptive-clothing.jpg",
            &["clothing", "adaptive", "easy-wear", "comfortable"],
            &[
                "Magnetic closures instead of buttons",
                "Soft, non-irritating fabric",
                "Easy to put on and take off",
                "Machine washable",
            ],
        ),
        aid(
            "2",
            "Memory Picture Phone",
            "Phone with large picture buttons for easy dialing, perfect for people with \
             memory difficulties.",
            89.99,
            "Communication",
            "/products/memory-phone.jpg",
            &["phone", "communication", "memory aid", "easy-use"],
            &[
                "Large picture buttons",
                "Pre-programmable numbers",
                "Clear sound quality",
                "Emergency button",
            ],
        ),
        aid(
            "3",
            "Digital Calendar Clock",
            "Large display clock showing time, date, and day of the week clearly to help \
             maintain daily orientation.",
            49.99,
            "Memory Aids",
            "/products/calendar-clock.jpg",
            &["clock", "calendar", "memory aid", "orientation"],
            &[
                "Large, clear display",
                "Shows date and time",
                "Automatic day/night mode",
                "Battery backup",
            ],
        ),
        aid(
            "4",
            "Safe Haven GPS Tracker",
            "Discreet GPS tracker with SOS button and geofencing capabilities for peace of \
             mind.",
            129.99,
            "Safety",
            "/products/gps-tracker.jpg",
            &["safety", "gps", "tracking", "emergency"],
            &[
                "Real-time GPS tracking",
                "SOS button",
                "Geofencing alerts",
                "Long battery life",
            ],
        ),
        aid(
            "5",
            "Memory Foam Chair Pad",
            "Comfortable chair pad with pressure-relieving memory foam and anti-slip bottom.",
            39.99,
            "Comfort",
            "/products/chair-pad.jpg",
            &["comfort", "seating", "pressure relief", "support"],
            &[
                "Memory foam filling",
                "Anti-slip bottom",
                "Washable cover",
                "Ergonomic design",
            ],
        ),
        aid(
            "6",
            "Reminder Medication System",
            "Automated medication dispenser with alarms and notifications for medication \
             management.",
            199.99,
            "Health",
            "/products/med-reminder.jpg",
            &["medication", "health", "reminder", "management"],
            &[
                "Automated dispensing",
                "Programmable alarms",
                "Mobile notifications",
                "Lockable system",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_search_matches_tags() {
        let items = care_aid_items();
        let query = CareAidQuery { q: Some("gps".to_string()), ..CareAidQuery::default() };
        let out = search_care_aids(&items, &query);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "4");
    }

    #[test]
    fn test_text_search_is_case_insensitive() {
        let items = care_aid_items();
        let query = CareAidQuery { q: Some("MEMORY".to_string()), ..CareAidQuery::default() };
        let out = search_care_aids(&items, &query);
        assert!(out.len() >= 3);
    }

    #[test]
    fn test_category_must_match_exactly() {
        let items = care_aid_items();
        let query = CareAidQuery {
            category: Some("memory aids".to_string()),
            ..CareAidQuery::default()
        };
        let out = search_care_aids(&items, &query);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].category, "Memory Aids");
    }

    #[test]
    fn test_price_range_filter() {
        let items = care_aid_items();
        let query = CareAidQuery {
            min_price: Some(50.0),
            max_price: Some(100.0),
            ..CareAidQuery::default()
        };
        let out = search_care_aids(&items, &query);
        assert!(out.iter().all(|p| p.price >= 50.0 && p.price <= 100.0));
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let items = care_aid_items();
        let out = search_care_aids(&items, &CareAidQuery::default());
        assert_eq!(out.len(), items.len());
    }

    #[test]
    fn test_blank_query_string_is_ignored() {
        let items = care_aid_items();
        let query = CareAidQuery { q: Some("".to_string()), ..CareAidQuery::default() };
        assert_eq!(search_care_aids(&items, &query).len(), items.len());
    }
}
