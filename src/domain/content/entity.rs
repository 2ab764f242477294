// src/domain/content/entity.rs
use crate::domain::content::value_objects::{ContentKind, ItemId, ItemTitle, Slug};
use chrono::{DateTime, Utc};

/// A page, vendor listing, or forum category as the store hands it back.
///
/// `order` is not required to be contiguous or unique at rest; the sibling
/// comparator in `services::ordering` gives any list of these a strict total
/// order regardless.
#[derive(Debug, Clone)]
pub struct ContentItem {
    pub id: ItemId,
    pub kind: ContentKind,
    pub title: ItemTitle,
    pub category_name: String,
    pub slug: Slug,
    pub order: Option<i64>,
    pub is_hidden: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContentItem {
    pub fn set_content(&mut self, title: ItemTitle, category_name: String, now: DateTime<Utc>) {
        self.title = title;
        self.category_name = category_name;
        self.updated_at = now;
    }

    pub fn set_slug(&mut self, slug: Slug, now: DateTime<Utc>) {
        self.slug = slug;
        self.updated_at = now;
    }

    pub fn set_order(&mut self, order: i64, now: DateTime<Utc>) {
        self.order = Some(order);
        self.updated_at = now;
    }

    /// Soft visibility: hidden items stay addressable by administrators and
    /// are only filtered from public listings.
    pub fn set_hidden(&mut self, hidden: bool, now: DateTime<Utc>) {
        self.is_hidden = hidden;
        self.updated_at = now;
    }
}

/// Everything but the id, which the store assigns on insert.
#[derive(Debug, Clone)]
pub struct NewContentItem {
    pub kind: ContentKind,
    pub title: ItemTitle,
    pub category_name: String,
    pub slug: Slug,
    pub order: Option<i64>,
    pub is_hidden: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> ContentItem {
        ContentItem {
            id: ItemId::new("item-1").unwrap(),
            kind: ContentKind::Vendors,
            title: ItemTitle::new("Joe's Mowing").unwrap(),
            category_name: "Landscaping".into(),
            slug: Slug::new("vendors-landscaping-joes-mowing").unwrap(),
            order: Some(0),
            is_hidden: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn set_hidden_flips_only_visibility() {
        let mut item = sample_item();
        let slug_before = item.slug.clone();
        let order_before = item.order;
        let now = Utc::now();
        item.set_hidden(true, now);
        assert!(item.is_hidden);
        assert_eq!(item.slug, slug_before);
        assert_eq!(item.order, order_before);
        assert_eq!(item.updated_at, now);
    }

    #[test]
    fn set_order_updates_timestamp() {
        let mut item = sample_item();
        let now = Utc::now();
        item.set_order(7, now);
        assert_eq!(item.order, Some(7));
        assert_eq!(item.updated_at, now);
    }

    #[test]
    fn set_content_updates_fields() {
        let mut item = sample_item();
        let now = Utc::now();
        let title = ItemTitle::new("Landscaping by Joe").unwrap();
        item.set_content(title.clone(), "Landscaping".into(), now);
        assert_eq!(item.title.as_str(), title.as_str());
        assert_eq!(item.updated_at, now);
    }
}
