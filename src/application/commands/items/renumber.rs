use super::ItemCommandService;
use crate::{
    application::{dto::ContentItemDto, error::ApplicationResult},
    domain::content::{services::ordering::sort_siblings, value_objects::ContentKind},
};

pub struct RenumberCategoryCommand {
    pub kind: ContentKind,
    pub category_name: String,
}

impl ItemCommandService {
    /// Rewrite a category's siblings to contiguous order keys `0..n` in
    /// comparator order. One write per sibling, so this is the bulk path —
    /// moves stay two writes — used after imports or to tidy accumulated
    /// gaps and duplicates. Siblings already holding their target key are
    /// not rewritten.
    #[allow(clippy::cast_possible_wrap)]
    pub async fn renumber_category(
        &self,
        command: RenumberCategoryCommand,
    ) -> ApplicationResult<Vec<ContentItemDto>> {
        let mut siblings = self
            .read_store
            .list_by_category(command.kind, &command.category_name)
            .await?;
        sort_siblings(&mut siblings);

        let now = self.clock.now();
        let mut renumbered = Vec::with_capacity(siblings.len());
        for (position, mut item) in siblings.into_iter().enumerate() {
            let target = position as i64;
            if item.order == Some(target) {
                renumbered.push(item.into());
                continue;
            }
            item.set_order(target, now);
            let updated = self.write_store.replace(item).await?;
            renumbered.push(updated.into());
        }
        Ok(renumbered)
    }
}
