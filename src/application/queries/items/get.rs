use super::ItemQueryService;
use crate::{
    application::{
        dto::ContentItemDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::content::{ItemId, Slug},
};

impl ItemQueryService {
    pub async fn get_item(&self, id: &str) -> ApplicationResult<ContentItemDto> {
        let id = ItemId::new(id)?;
        let item = self
            .read_store
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("content item not found"))?;
        Ok(item.into())
    }

    pub async fn get_item_by_slug(&self, slug: &str) -> ApplicationResult<ContentItemDto> {
        let slug = Slug::new(slug)?;
        let item = self
            .read_store
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("content item not found"))?;
        Ok(item.into())
    }
}
