use super::ItemCommandService;
use crate::{
    application::{
        dto::ContentItemDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::content::ItemId,
};

pub struct SetHiddenCommand {
    pub id: String,
    pub hidden: bool,
}

impl ItemCommandService {
    /// Flip soft visibility. Goes through the same whole-record write path
    /// as every other mutation; order and slug are untouched.
    pub async fn set_hidden(&self, command: SetHiddenCommand) -> ApplicationResult<ContentItemDto> {
        let id = ItemId::new(command.id)?;
        let mut item = self
            .read_store
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("content item not found"))?;

        if item.is_hidden == command.hidden {
            return Ok(item.into());
        }

        item.set_hidden(command.hidden, self.clock.now());
        let updated = self.write_store.replace(item).await?;
        Ok(updated.into())
    }
}
