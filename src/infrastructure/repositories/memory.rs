use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::content::entity::{ContentItem, NewContentItem};
use crate::domain::content::repository::{ContentReadStore, ContentWriteStore};
use crate::domain::content::value_objects::{ContentKind, ItemId, Slug};
use crate::domain::errors::{DomainError, DomainResult};

/// Reference content store: a mutex'd map keyed by item id.
///
/// Deliberately as dumb as the real stores this core targets — ids are
/// assigned on insert, `replace` swallows whole records without diffing, and
/// no uniqueness of slugs or order keys is enforced. Embedders with real
/// persistence implement the same traits.
#[derive(Default)]
pub struct InMemoryContentStore {
    inner: Mutex<HashMap<String, ContentItem>>,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store for tests and demos; items keep their ids.
    pub fn seeded(items: impl IntoIterator<Item = ContentItem>) -> Self {
        let map = items
            .into_iter()
            .map(|item| (item.id.as_str().to_owned(), item))
            .collect();
        Self {
            inner: Mutex::new(map),
        }
    }

    fn lock(&self) -> DomainResult<MutexGuard<'_, HashMap<String, ContentItem>>> {
        self.inner
            .lock()
            .map_err(|_| DomainError::Persistence("content store mutex poisoned".into()))
    }
}

#[async_trait]
impl ContentWriteStore for InMemoryContentStore {
    async fn insert(&self, item: NewContentItem) -> DomainResult<ContentItem> {
        let id = ItemId::new(Uuid::new_v4().to_string())?;
        let record = ContentItem {
            id: id.clone(),
            kind: item.kind,
            title: item.title,
            category_name: item.category_name,
            slug: item.slug,
            order: item.order,
            is_hidden: item.is_hidden,
            created_at: item.created_at,
            updated_at: item.updated_at,
        };
        self.lock()?
            .insert(id.as_str().to_owned(), record.clone());
        Ok(record)
    }

    async fn replace(&self, item: ContentItem) -> DomainResult<ContentItem> {
        let mut map = self.lock()?;
        if !map.contains_key(item.id.as_str()) {
            return Err(DomainError::NotFound(format!(
                "content item '{}' does not exist",
                item.id
            )));
        }
        map.insert(item.id.as_str().to_owned(), item.clone());
        Ok(item)
    }

    async fn delete(&self, id: &ItemId) -> DomainResult<()> {
        let mut map = self.lock()?;
        map.remove(id.as_str()).ok_or_else(|| {
            DomainError::NotFound(format!("content item '{id}' does not exist"))
        })?;
        Ok(())
    }
}

#[async_trait]
impl ContentReadStore for InMemoryContentStore {
    async fn find_by_id(&self, id: &ItemId) -> DomainResult<Option<ContentItem>> {
        Ok(self.lock()?.get(id.as_str()).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<ContentItem>> {
        Ok(self
            .lock()?
            .values()
            .find(|item| item.slug == *slug)
            .cloned())
    }

    async fn list_by_category(
        &self,
        kind: ContentKind,
        category_name: &str,
    ) -> DomainResult<Vec<ContentItem>> {
        Ok(self
            .lock()?
            .values()
            .filter(|item| item.kind == kind && item.category_name == category_name)
            .cloned()
            .collect())
    }

    async fn list_by_kind(&self, kind: ContentKind) -> DomainResult<Vec<ContentItem>> {
        Ok(self
            .lock()?
            .values()
            .filter(|item| item.kind == kind)
            .cloned()
            .collect())
    }
}
