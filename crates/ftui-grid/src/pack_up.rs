#![forbid(unsafe_code)]

//! Pack-up compactor.

use crate::columns::Columns;
use crate::item::GridItem;

/// Remove `removed_id` and lift everything directly beneath it.
///
/// An item is lifted by the removed item's height (floored at row 0) when it
/// shares at least one column with the removed item and starts at or below
/// its bottom edge. All other items are returned untouched, in input order.
/// An absent id returns a copy of `items`.
///
/// This is a single translation pass, not a resolver: an item that only
/// partly shares the removed columns can be lifted into a neighbour outside
/// them. A later push-down separates such items again.
///
/// `columns` is accepted so every resolver shares one call shape; lifting is
/// purely vertical and never consults it.
#[must_use]
pub fn pack_up(items: &[GridItem], removed_id: &str, _columns: Columns) -> Vec<GridItem> {
    let Some(removed) = items.iter().find(|item| item.id == removed_id) else {
        return items.to_vec();
    };
    let removed_bottom = removed.bottom();

    items
        .iter()
        .filter(|item| item.id != removed_id)
        .map(|item| {
            if item.overlaps_columns(removed) && item.y >= removed_bottom {
                item.at_y(item.y.saturating_sub(removed.h))
            } else {
                item.clone()
            }
        })
        .collect()
}
