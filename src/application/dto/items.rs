use crate::domain::content::ContentItem;
use crate::domain::content::value_objects::ContentKind;
use crate::domain::taxonomy::CategoryDescriptor;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItemDto {
    pub id: String,
    pub kind: ContentKind,
    pub title: String,
    pub category_name: String,
    pub slug: String,
    pub order: Option<i64>,
    pub is_hidden: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ContentItem> for ContentItemDto {
    fn from(item: ContentItem) -> Self {
        Self {
            id: item.id.into(),
            kind: item.kind,
            title: item.title.into(),
            category_name: item.category_name,
            slug: item.slug.into(),
            order: item.order,
            is_hidden: item.is_hidden,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDto {
    pub name: String,
    pub slug_prefix: String,
}

impl From<&CategoryDescriptor> for CategoryDto {
    fn from(descriptor: &CategoryDescriptor) -> Self {
        Self {
            name: descriptor.name().to_owned(),
            slug_prefix: descriptor.slug_prefix().to_owned(),
        }
    }
}

/// One category's slice of a grouped admin listing, items already in
/// comparator order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryGroupDto {
    pub category: CategoryDto,
    pub items: Vec<ContentItemDto>,
}
