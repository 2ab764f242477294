use crate::domain::content::entity::{ContentItem, NewContentItem};
use crate::domain::content::value_objects::{ContentKind, ItemId, Slug};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ContentWriteStore: Send + Sync {
    async fn insert(&self, item: NewContentItem) -> DomainResult<ContentItem>;
    /// Whole-record replacement keyed by `item.id`. The store cannot tell an
    /// omitted field from a cleared one, so callers resend every field.
    async fn replace(&self, item: ContentItem) -> DomainResult<ContentItem>;
    async fn delete(&self, id: &ItemId) -> DomainResult<()>;
}

#[async_trait]
pub trait ContentReadStore: Send + Sync {
    async fn find_by_id(&self, id: &ItemId) -> DomainResult<Option<ContentItem>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<ContentItem>>;
    async fn list_by_category(
        &self,
        kind: ContentKind,
        category_name: &str,
    ) -> DomainResult<Vec<ContentItem>>;
    async fn list_by_kind(&self, kind: ContentKind) -> DomainResult<Vec<ContentItem>>;
}
