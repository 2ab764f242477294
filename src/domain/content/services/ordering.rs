//! Sibling sequencing: the comparator every listing sorts with, and the
//! two-record swap plans behind move-up/move-down.
//!
//! A move touches exactly two records regardless of category size; the cost
//! is that order keys elsewhere in the list may stay sparse or duplicated,
//! which the comparator's id tie-break absorbs.

use std::cmp::Ordering;

use crate::domain::content::entity::ContentItem;

/// Ascending by order key; items with no key sink to the end so freshly
/// imported rows never jump ahead of curated ones; exact ties break by id.
pub fn sibling_cmp(a: &ContentItem, b: &ContentItem) -> Ordering {
    let key_a = a.order.unwrap_or(i64::MAX);
    let key_b = b.order.unwrap_or(i64::MAX);
    key_a.cmp(&key_b).then_with(|| a.id.cmp(&b.id))
}

pub fn sort_siblings(siblings: &mut [ContentItem]) {
    siblings.sort_by(sibling_cmp);
}

/// Two whole records with exchanged order keys. Both must be persisted for
/// the move to take effect; `moved` is written first.
#[derive(Debug, Clone)]
pub struct SwapPlan {
    pub moved: ContentItem,
    pub displaced: ContentItem,
}

/// Swap the item at `index` with the one before it. `None` when the item is
/// already first or the index is out of range.
pub fn plan_move_up(siblings: &[ContentItem], index: usize) -> Option<SwapPlan> {
    if index == 0 || index >= siblings.len() {
        return None;
    }
    let current = &siblings[index];
    let prior = &siblings[index - 1];

    let current_key = resolved_order(current, index);
    let mut prior_key = resolved_order(prior, index - 1);
    if prior_key == current_key {
        // An exact tie would make the swap a silent no-op.
        prior_key = current_key - 1;
    }

    Some(swap(current, prior, prior_key, current_key))
}

/// Swap the item at `index` with the one after it. `None` when the item is
/// already last or the index is out of range.
pub fn plan_move_down(siblings: &[ContentItem], index: usize) -> Option<SwapPlan> {
    let last = siblings.len().checked_sub(1)?;
    if index >= last {
        return None;
    }
    let current = &siblings[index];
    let next = &siblings[index + 1];

    let current_key = resolved_order(current, index);
    let mut next_key = resolved_order(next, index + 1);
    if next_key == current_key {
        next_key = current_key + 1;
    }

    Some(swap(current, next, next_key, current_key))
}

/// Order key for a freshly created item: one past the largest resolved key,
/// so new items land last in their category.
pub fn next_order_key(siblings: &[ContentItem]) -> i64 {
    siblings
        .iter()
        .enumerate()
        .map(|(position, item)| resolved_order(item, position))
        .max()
        .map_or(0, |largest| largest + 1)
}

fn swap(
    current: &ContentItem,
    neighbour: &ContentItem,
    current_target: i64,
    neighbour_target: i64,
) -> SwapPlan {
    let mut moved = current.clone();
    moved.order = Some(current_target);
    let mut displaced = neighbour.clone();
    displaced.order = Some(neighbour_target);
    SwapPlan { moved, displaced }
}

#[allow(clippy::cast_possible_wrap)]
fn resolved_order(item: &ContentItem, position: usize) -> i64 {
    item.order.unwrap_or(position as i64)
}
