use super::ItemQueryService;
use crate::{
    application::{
        dto::{CategoryDto, CategoryGroupDto},
        error::ApplicationResult,
    },
    domain::{
        content::{
            entity::ContentItem, services::ordering::sort_siblings, value_objects::ContentKind,
        },
        taxonomy::{CategoryDescriptor, Taxonomy},
    },
};

pub struct GroupedListingQuery {
    pub kind: ContentKind,
    pub include_hidden: bool,
}

impl ItemQueryService {
    /// The grouped admin view: every item of a kind bucketed under the
    /// category its *slug* resolves to — not the stored category name — so
    /// stale or legacy identifiers surface visibly under the category the
    /// router would pick for them. Groups follow taxonomy declaration
    /// order; Uncategorized, when occupied, comes last.
    pub async fn grouped_listing(
        &self,
        taxonomy: &Taxonomy,
        query: GroupedListingQuery,
    ) -> ApplicationResult<Vec<CategoryGroupDto>> {
        let mut items = self.read_store.list_by_kind(query.kind).await?;
        if !query.include_hidden {
            items.retain(|item| !item.is_hidden);
        }

        let mut buckets: Vec<(&CategoryDescriptor, Vec<ContentItem>)> = taxonomy
            .descriptors()
            .iter()
            .map(|descriptor| (descriptor, Vec::new()))
            .collect();
        let mut uncategorized: Vec<ContentItem> = Vec::new();

        for item in items {
            let resolved = taxonomy.resolve_category(query.kind, &item.slug);
            match buckets
                .iter_mut()
                .find(|(descriptor, _)| descriptor.name() == resolved.name())
            {
                Some((_, bucket)) => bucket.push(item),
                None => uncategorized.push(item),
            }
        }

        let mut groups: Vec<CategoryGroupDto> = buckets
            .into_iter()
            .map(|(descriptor, mut bucket)| {
                sort_siblings(&mut bucket);
                CategoryGroupDto {
                    category: CategoryDto::from(descriptor),
                    items: bucket.into_iter().map(Into::into).collect(),
                }
            })
            .collect();

        if !uncategorized.is_empty() {
            sort_siblings(&mut uncategorized);
            groups.push(CategoryGroupDto {
                category: CategoryDto::from(CategoryDescriptor::uncategorized()),
                items: uncategorized.into_iter().map(Into::into).collect(),
            });
        }

        Ok(groups)
    }
}
