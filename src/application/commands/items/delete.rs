// src/application/commands/items/delete.rs
use super::ItemCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::content::ItemId,
};

pub struct DeleteItemCommand {
    pub id: String,
}

impl ItemCommandService {
    /// Remove an item from its category's sibling set. Survivors keep their
    /// order keys; `renumber_category` is the explicit way to close gaps.
    pub async fn delete_item(&self, command: DeleteItemCommand) -> ApplicationResult<()> {
        let id = ItemId::new(command.id)?;
        self.read_store
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("content item not found"))?;

        self.write_store.delete(&id).await?;
        Ok(())
    }
}
