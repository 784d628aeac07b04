//! dementiaide-catalog — Static product data behind the shop and search
//! routes. Two distinct sets: storefront apparel (browsed with filters and
//! sort orders) and daily-living care aids (searched by text, category and
//! price range). Both are seed data compiled into the binary; filtering
//! never mutates the seeds.

pub mod care_aids;
pub mod storefront;

pub use care_aids::{care_aid_items, search_care_aids, CareAid, CareAidQuery};
pub use storefront::{
    filter_and_sort, storefront_items, ApparelCategory, CatalogFilter, SortOrder, StorefrontItem,
};
