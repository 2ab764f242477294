use super::ItemQueryService;
use crate::{
    application::{dto::ContentItemDto, error::ApplicationResult},
    domain::content::{services::ordering::sort_siblings, value_objects::ContentKind},
};

pub struct ListSiblingsQuery {
    pub kind: ContentKind,
    pub category_name: String,
    /// Admin listings pass `true`; the public-facing collaborator filters
    /// hidden items out by passing `false`.
    pub include_hidden: bool,
}

impl ItemQueryService {
    pub async fn list_siblings(
        &self,
        query: ListSiblingsQuery,
    ) -> ApplicationResult<Vec<ContentItemDto>> {
        let mut siblings = self
            .read_store
            .list_by_category(query.kind, &query.category_name)
            .await?;
        if !query.include_hidden {
            siblings.retain(|item| !item.is_hidden);
        }
        sort_siblings(&mut siblings);
        Ok(siblings.into_iter().map(Into::into).collect())
    }
}
