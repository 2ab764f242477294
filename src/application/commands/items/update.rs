use super::ItemCommandService;
use crate::{
    application::{
        dto::ContentItemDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        content::{ItemId, ItemTitle},
        taxonomy::Taxonomy,
    },
};

pub struct UpdateItemCommand {
    pub id: String,
    pub title: Option<String>,
    pub category_name: Option<String>,
}

impl ItemCommandService {
    /// Edit title and/or category. Either edit re-derives the slug: a title
    /// change derives fresh from the new title, while a category-only move
    /// carries the existing suffix across so the identifier stays
    /// recognizable.
    pub async fn update_item(
        &self,
        taxonomy: &Taxonomy,
        command: UpdateItemCommand,
    ) -> ApplicationResult<ContentItemDto> {
        let UpdateItemCommand {
            id,
            title,
            category_name,
        } = command;
        let id = ItemId::new(id)?;
        let mut item = self
            .read_store
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("content item not found"))?;

        if title.is_none() && category_name.is_none() {
            return Ok(item.into());
        }

        let title_opt = title.map(ItemTitle::new).transpose()?;
        let title_changed = title_opt
            .as_ref()
            .is_some_and(|new_title| new_title.as_str() != item.title.as_str());

        let category_name = category_name.unwrap_or_else(|| item.category_name.clone());
        let category = taxonomy.find_by_name(&category_name).ok_or_else(|| {
            ApplicationError::validation(format!("unknown category '{category_name}'"))
        })?;

        let new_title = title_opt.unwrap_or_else(|| item.title.clone());
        let existing = if title_changed {
            None
        } else {
            Some(item.slug.clone())
        };
        let slug = self
            .slug_service
            .generate_unique_slug(
                taxonomy,
                item.kind,
                category,
                new_title.as_str(),
                existing.as_ref(),
                Some(&id),
            )
            .await?;

        let now = self.clock.now();
        item.set_content(new_title, category.name().to_owned(), now);
        item.set_slug(slug, now);

        let updated = self.write_store.replace(item).await?;
        Ok(updated.into())
    }
}
