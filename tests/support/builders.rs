// tests/support/builders.rs
use std::sync::Arc;

use chrono::{TimeZone, Utc};

use plaza_core::application::services::ApplicationServices;
use plaza_core::domain::content::entity::ContentItem;
use plaza_core::domain::content::repository::{ContentReadStore, ContentWriteStore};
use plaza_core::domain::content::value_objects::{ContentKind, ItemId, ItemTitle, Slug};
use plaza_core::domain::taxonomy::{CategoryDescriptor, Taxonomy};
use plaza_core::infrastructure::repositories::InMemoryContentStore;
use plaza_core::infrastructure::util::DefaultSlugGenerator;

use super::mocks::FixedClock;

pub fn vendor_taxonomy() -> Taxonomy {
    Taxonomy::new(vec![
        CategoryDescriptor::new("Landscaping", "landscaping").unwrap(),
        CategoryDescriptor::new("Home", "home").unwrap(),
        CategoryDescriptor::new("Home Services", "home-services").unwrap(),
        CategoryDescriptor::new("Food & Dining", "food-dining").unwrap(),
        CategoryDescriptor::new("Professional Services", "professional-services").unwrap(),
    ])
    .unwrap()
}

pub fn forum_taxonomy() -> Taxonomy {
    Taxonomy::new(vec![
        CategoryDescriptor::new("Community", "community").unwrap(),
        CategoryDescriptor::new("General Discussion", "general-discussion").unwrap(),
        CategoryDescriptor::new("Support", "support").unwrap(),
    ])
    .unwrap()
}

pub fn seeded_item(
    id: &str,
    kind: ContentKind,
    title: &str,
    category_name: &str,
    slug: &str,
    order: Option<i64>,
) -> ContentItem {
    let at = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    ContentItem {
        id: ItemId::new(id).unwrap(),
        kind,
        title: ItemTitle::new(title).unwrap(),
        category_name: category_name.to_owned(),
        slug: Slug::new(slug).unwrap(),
        order,
        is_hidden: false,
        created_at: at,
        updated_at: at,
    }
}

/// Command and query services over one in-memory store, with a fixed clock
/// and the production slug generator.
pub fn wire(store: Arc<InMemoryContentStore>) -> ApplicationServices {
    let write_store: Arc<dyn ContentWriteStore> = store.clone();
    let read_store: Arc<dyn ContentReadStore> = store;
    ApplicationServices::new(
        write_store,
        read_store,
        Arc::new(FixedClock::default()),
        Arc::new(DefaultSlugGenerator),
    )
}
