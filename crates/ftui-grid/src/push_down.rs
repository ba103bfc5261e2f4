#![forbid(unsafe_code)]

//! Push-down resolver.
//!
//! One item is pinned where the caller put it; every other item settles
//! downward, top to bottom, until nothing overlaps.
//!
//! # Ordering
//!
//! Others are processed by ascending `y`, ties broken by ascending id. An item
//! is resolved against everything settled before it and is never revisited,
//! which makes the result independent of input order and bounds the work at
//! O(n²) collision checks.

use crate::columns::Columns;
use crate::geometry::{clamp_item, collides};
use crate::item::GridItem;
use crate::logging::trace;

/// Pin `item` (clamped to the grid) and push every other member of `items`
/// down just far enough to clear it and each other.
///
/// Members of `items` sharing `item`'s id are dropped. Only `y` changes for the
/// displaced items; `x`, `w` and `h` are left as given. The result is the
/// pinned item followed by the others in resolution order.
#[must_use]
pub fn push_down(item: &GridItem, items: &[GridItem], columns: Columns) -> Vec<GridItem> {
    let placed = clamp_item(item, columns);

    let mut others: Vec<&GridItem> = items.iter().filter(|other| other.id != placed.id).collect();
    others.sort_by(|a, b| a.y.cmp(&b.y).then_with(|| a.id.cmp(&b.id)));

    // Append-only: an entry is final once pushed.
    let mut resolved: Vec<GridItem> = Vec::with_capacity(others.len() + 1);
    resolved.push(placed);

    for other in others {
        let settled = settle(other, &resolved);
        if settled.y != other.y {
            trace!(id = %other.id, from_y = other.y, to_y = settled.y, "pushed down");
        }
        resolved.push(settled);
    }

    resolved
}

/// Move `item` down until it clears every member of `resolved`.
///
/// Each step snaps below the first resolved item it hits. That item is then
/// behind it for good, so at most `resolved.len()` steps are taken.
fn settle(item: &GridItem, resolved: &[GridItem]) -> GridItem {
    let mut current = item.clone();
    for _ in 0..=resolved.len() {
        match resolved.iter().find(|settled| collides(&current, settled)) {
            Some(hit) => current.y = hit.bottom(),
            None => return current,
        }
    }
    debug_assert!(
        resolved.iter().all(|settled| !collides(&current, settled)),
        "push-down exceeded its step bound"
    );
    current
}
