use super::ItemCommandService;
use crate::{
    application::{
        dto::ContentItemDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::content::{
        entity::ContentItem,
        services::ordering::{SwapPlan, plan_move_down, plan_move_up, sort_siblings},
        value_objects::ContentKind,
    },
};

pub struct MoveItemCommand {
    pub kind: ContentKind,
    pub category_name: String,
    /// Position of the item in the comparator-sorted sibling list.
    pub index: usize,
}

impl ItemCommandService {
    /// Swap the item at `command.index` with the sibling before it. Moving
    /// the first item is a successful no-op.
    pub async fn move_item_up(
        &self,
        command: MoveItemCommand,
    ) -> ApplicationResult<Vec<ContentItemDto>> {
        self.move_item(command, plan_move_up).await
    }

    /// Mirror of [`Self::move_item_up`] against the following sibling.
    pub async fn move_item_down(
        &self,
        command: MoveItemCommand,
    ) -> ApplicationResult<Vec<ContentItemDto>> {
        self.move_item(command, plan_move_down).await
    }

    async fn move_item(
        &self,
        command: MoveItemCommand,
        plan: fn(&[ContentItem], usize) -> Option<SwapPlan>,
    ) -> ApplicationResult<Vec<ContentItemDto>> {
        let mut siblings = self
            .read_store
            .list_by_category(command.kind, &command.category_name)
            .await?;
        sort_siblings(&mut siblings);

        if command.index >= siblings.len() {
            return Err(ApplicationError::validation(format!(
                "index {} out of range for {} siblings in '{}'",
                command.index,
                siblings.len(),
                command.category_name
            )));
        }

        let Some(plan) = plan(&siblings, command.index) else {
            // already at the boundary
            return Ok(siblings.into_iter().map(Into::into).collect());
        };

        let original = siblings[command.index].clone();
        let (moved, displaced) = self.execute_swap(original, plan).await?;

        for record in [moved, displaced] {
            if let Some(slot) = siblings.iter_mut().find(|sibling| sibling.id == record.id) {
                *slot = record;
            }
        }
        sort_siblings(&mut siblings);
        Ok(siblings.into_iter().map(Into::into).collect())
    }

    /// Two sequential whole-record writes. The store is not transactional:
    /// if the second write fails the first is compensated by rewriting the
    /// original record, and only a failed compensation surfaces as
    /// `PartialReorder`.
    async fn execute_swap(
        &self,
        original: ContentItem,
        plan: SwapPlan,
    ) -> ApplicationResult<(ContentItem, ContentItem)> {
        let now = self.clock.now();
        let SwapPlan {
            mut moved,
            mut displaced,
        } = plan;
        moved.updated_at = now;
        displaced.updated_at = now;

        let moved = self.write_store.replace(moved).await?;
        match self.write_store.replace(displaced).await {
            Ok(displaced) => Ok((moved, displaced)),
            Err(err) => {
                tracing::warn!(
                    item = %moved.id,
                    error = %err,
                    "second write of reorder swap failed, rolling back first write"
                );
                match self.write_store.replace(original).await {
                    Ok(_) => Err(err.into()),
                    Err(rollback_err) => Err(ApplicationError::partial_reorder(format!(
                        "'{}' was reordered but its neighbour was not ({err}), and rollback \
                         failed: {rollback_err}",
                        moved.id
                    ))),
                }
            }
        }
    }
}
