// tests/support/mocks/store.rs
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use plaza_core::domain::content::entity::{ContentItem, NewContentItem};
use plaza_core::domain::content::repository::ContentWriteStore;
use plaza_core::domain::content::value_objects::ItemId;
use plaza_core::domain::errors::{DomainError, DomainResult};
use plaza_core::infrastructure::repositories::InMemoryContentStore;

/// Write store that fails selected `replace` calls (1-based call numbers),
/// for exercising the partial-swap and rollback paths.
pub struct FlakyWriteStore {
    inner: Arc<InMemoryContentStore>,
    replace_calls: AtomicUsize,
    fail_on: HashSet<usize>,
}

impl FlakyWriteStore {
    pub fn new(inner: Arc<InMemoryContentStore>, fail_on: impl IntoIterator<Item = usize>) -> Self {
        Self {
            inner,
            replace_calls: AtomicUsize::new(0),
            fail_on: fail_on.into_iter().collect(),
        }
    }
}

#[async_trait]
impl ContentWriteStore for FlakyWriteStore {
    async fn insert(&self, item: NewContentItem) -> DomainResult<ContentItem> {
        self.inner.insert(item).await
    }

    async fn replace(&self, item: ContentItem) -> DomainResult<ContentItem> {
        let call = self.replace_calls.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail_on.contains(&call) {
            return Err(DomainError::Persistence(format!(
                "simulated outage on write {call}"
            )));
        }
        self.inner.replace(item).await
    }

    async fn delete(&self, id: &ItemId) -> DomainResult<()> {
        self.inner.delete(id).await
    }
}
