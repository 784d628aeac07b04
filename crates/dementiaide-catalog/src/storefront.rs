//! Storefront apparel: adaptive clothing and awareness merchandise.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApparelCategory {
    Clothing,
    Accessories,
    #[serde(rename = "Adaptive Wear")]
    AdaptiveWear,
    Awareness,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    pub category: ApparelCategory,
    pub image: String,
    pub on_sale: bool,
    pub featured: bool,
    pub in_stock: bool,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub sizes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub colors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews: Option<u32>,
}

/// Sort orders exposed by the shop page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    NameAsc,
    NameDesc,
    PriceAsc,
    PriceDesc,
    /// Seed order, newest arrivals first.
    Newest,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogFilter {
    pub category: Option<ApparelCategory>,
    #[serde(default)]
    pub on_sale: bool,
    #[serde(default)]
    pub in_stock: bool,
    #[serde(default)]
    pub sort: SortOrder,
}

/// Apply filters then the requested sort order. The seed list is left
/// untouched; callers get an owned result.
pub fn filter_and_sort(items: &[StorefrontItem], filter: &CatalogFilter) -> Vec<StorefrontItem> {
    let mut out: Vec<StorefrontItem> = items
        .iter()
        .filter(|p| filter.category.map_or(true, |c| p.category == c))
        .filter(|p| !filter.on_sale || p.on_sale)
        .filter(|p| !filter.in_stock || p.in_stock)
        .cloned()
        .collect();

    match filter.sort {
        SortOrder::NameAsc => out.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase())),
        SortOrder::NameDesc => out.sort_by(|a, b| b.name.to_lowercase().cmp(&a.name.to_lowercase())),
        SortOrder::PriceAsc => out.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortOrder::PriceDesc => out.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortOrder::Newest => {} // seed order is newest first
    }
    out
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// The storefront seed, newest arrivals first.
pub fn storefront_items() -> Vec<StorefrontItem> {
    vec![
        StorefrontItem {
            id: "bear-hug-jumpsuit".to_string(),
            name: "Anti-Strip Back-zip Jumpsuit - Adaptive Alzheimer's and Dementia Clothing"
                .to_string(),
            description: "The Bear Hug Care Jumpsuit - Designed specifically for dementia care. \
                Easy-access back zipper, tamper-resistant design, soft breathable medical-grade \
                fabric. Making daily routines easier, safer, and more dignified."
                .to_string(),
            price: 69.99,
            original_price: Some(110.95),
            category: ApparelCategory::AdaptiveWear,
            image: "/products/bear-hug-jumpsuit.jpg".to_string(),
            on_sale: true,
            featured: true,
            in_stock: true,
            sizes: strings(&["S", "M", "L", "XL", "2XL"]),
            colors: strings(&["Navy", "Gray", "White"]),
            rating: Some(4.8),
            reviews: Some(2847),
        },
        StorefrontItem {
            id: "baseball-hat-find-cure".to_string(),
            name: "Alzheimer's Awareness Clothing | Baseball Hat \"Find a Cure\" | Dementia \
                Awareness Apparel"
                .to_string(),
            description: "Show your support with this comfortable baseball hat featuring \
                \"Find a Cure\" embroidery. Perfect for raising awareness and starting \
                conversations about Alzheimer's and dementia."
                .to_string(),
            price: 29.99,
            original_price: Some(38.99),
            category: ApparelCategory::Awareness,
            image: "/products/baseball-hat-find-cure.jpg".to_string(),
            on_sale: true,
            featured: true,
            in_stock: true,
            sizes: Vec::new(),
            colors: strings(&["White", "Black", "Navy"]),
            rating: Some(4.6),
            reviews: Some(523),
        },
        StorefrontItem {
            id: "bucket-hat-find-cure".to_string(),
            name: "Alzheimer's Awareness Clothing | Bucket Hat \"Find a Cure\" | Women's \
                Alzheimer's Awareness Clothing Purple"
                .to_string(),
            description: "Stylish purple bucket hat with \"Find a Cure\" message. Comfortable, \
                fashionable, and supports Alzheimer's awareness. Perfect for everyday wear."
                .to_string(),
            price: 29.50,
            original_price: Some(35.99),
            category: ApparelCategory::Awareness,
            image: "/products/bucket-hat-find-cure.jpg".to_string(),
            on_sale: true,
            featured: true,
            in_stock: true,
            sizes: Vec::new(),
            colors: strings(&["Purple", "White", "Pink"]),
            rating: Some(4.7),
            reviews: Some(412),
        },
        StorefrontItem {
            id: "adaptive-sweatshirt".to_string(),
            name: "Adaptive Open-Back Sweatshirt - Easy Dressing for Seniors".to_string(),
            description: "Comfortable sweatshirt with back opening for easy dressing. Perfect \
                for individuals with limited mobility. Soft fleece material with velcro closures."
                .to_string(),
            price: 54.99,
            original_price: Some(74.99),
            category: ApparelCategory::AdaptiveWear,
            image: "/products/adaptive-sweatshirt.jpg".to_string(),
            on_sale: true,
            featured: false,
            in_stock: true,
            sizes: strings(&["S", "M", "L", "XL", "2XL"]),
            colors: strings(&["Gray", "Navy", "Black"]),
            rating: Some(4.5),
            reviews: Some(189),
        },
        StorefrontItem {
            id: "awareness-tshirt".to_string(),
            name: "Alzheimer's Awareness T-Shirt - Support & Awareness".to_string(),
            description: "Comfortable cotton t-shirt featuring Alzheimer's awareness messaging. \
                Available in multiple colors and sizes. Perfect for awareness events and daily \
                wear."
                .to_string(),
            price: 24.99,
            original_price: None,
            category: ApparelCategory::Awareness,
            image: "/products/awareness-tshirt.jpg".to_string(),
            on_sale: false,
            featured: false,
            in_stock: true,
            sizes: strings(&["S", "M", "L", "XL", "2XL"]),
            colors: strings(&["Purple", "White", "Gray"]),
            rating: Some(4.4),
            reviews: Some(756),
        },
        StorefrontItem {
            id: "non-slip-socks".to_string(),
            name: "Non-Slip Grip Socks for Seniors - Safety First".to_string(),
            description: "Hospital-grade non-slip socks with grip bottoms. Prevents falls and \
                provides comfort. Machine washable and durable."
                .to_string(),
            price: 19.99,
            original_price: None,
            category: ApparelCategory::Accessories,
            image: "/products/non-slip-socks.jpg".to_string(),
            on_sale: false,
            featured: false,
            in_stock: true,
            sizes: strings(&["S/M", "L/XL"]),
            colors: strings(&["White", "Gray", "Navy"]),
            rating: Some(4.9),
            reviews: Some(1234),
        },
    ]
}
