#![forbid(unsafe_code)]

//! Layout diffs and action outcomes.
//!
//! The engine signals nothing when an action is a no-op; callers that need
//! to know what changed compare snapshots. [`apply_action`] does that
//! comparison for them.

use std::hash::{Hash, Hasher};

use rustc_hash::{FxHashMap, FxHasher};
use serde::{Deserialize, Serialize};

use crate::action::LayoutActionKind;
use crate::engine::{ComputeLayoutInput, compute_layout};
use crate::item::GridItem;

/// How one item differs between two snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Added,
    Removed,
    Moved,
    Resized,
    MovedAndResized,
}

/// One changed item. `before` is `None` for additions, `after` for removals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutChange {
    pub id: String,
    pub kind: ChangeKind,
    pub before: Option<GridItem>,
    pub after: Option<GridItem>,
}

/// Per-item geometry changes from `before` to `after`, matched by id.
///
/// Removed and changed items come first in `before` order, then added items
/// in `after` order. Constraint-only edits are not reported.
#[must_use]
pub fn diff_layouts(before: &[GridItem], after: &[GridItem]) -> Vec<LayoutChange> {
    let mut after_by_id: FxHashMap<&str, &GridItem> = FxHashMap::default();
    for item in after {
        after_by_id.entry(item.id.as_str()).or_insert(item);
    }
    let mut before_by_id: FxHashMap<&str, &GridItem> = FxHashMap::default();
    for item in before {
        before_by_id.entry(item.id.as_str()).or_insert(item);
    }

    let mut changes = Vec::new();
    for old in before {
        if !std::ptr::eq(before_by_id[old.id.as_str()], old) {
            continue;
        }
        let Some(&new) = after_by_id.get(old.id.as_str()) else {
            changes.push(LayoutChange {
                id: old.id.clone(),
                kind: ChangeKind::Removed,
                before: Some(old.clone()),
                after: None,
            });
            continue;
        };
        let moved = old.x != new.x || old.y != new.y;
        let resized = old.w != new.w || old.h != new.h;
        let kind = match (moved, resized) {
            (false, false) => continue,
            (true, false) => ChangeKind::Moved,
            (false, true) => ChangeKind::Resized,
            (true, true) => ChangeKind::MovedAndResized,
        };
        changes.push(LayoutChange {
            id: old.id.clone(),
            kind,
            before: Some(old.clone()),
            after: Some(new.clone()),
        });
    }

    for new in after {
        if before_by_id.contains_key(new.id.as_str())
            || !std::ptr::eq(after_by_id[new.id.as_str()], new)
        {
            continue;
        }
        changes.push(LayoutChange {
            id: new.id.clone(),
            kind: ChangeKind::Added,
            before: None,
            after: Some(new.clone()),
        });
    }

    changes
}

/// Deterministic, order-sensitive hash of a snapshot for replay diagnostics.
#[must_use]
pub fn layout_hash(items: &[GridItem]) -> u64 {
    let mut hasher = FxHasher::default();
    items.len().hash(&mut hasher);
    for item in items {
        item.hash(&mut hasher);
    }
    hasher.finish()
}

/// Result of applying one action, with what it touched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutOutcome {
    pub items: Vec<GridItem>,
    pub kind: LayoutActionKind,
    pub changes: Vec<LayoutChange>,
    pub before_hash: u64,
    pub after_hash: u64,
}

impl LayoutOutcome {
    /// True when no item's position or size changed and none was added or removed.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.changes.is_empty()
    }

    /// Ids of every changed item, in change order.
    pub fn touched_ids(&self) -> impl Iterator<Item = &str> {
        self.changes.iter().map(|change| change.id.as_str())
    }
}

/// [`compute_layout`] plus a diff against the input snapshot.
#[must_use]
pub fn apply_action(input: &ComputeLayoutInput) -> LayoutOutcome {
    let items = compute_layout(input);
    LayoutOutcome {
        kind: input.action.kind(),
        changes: diff_layouts(&input.items, &items),
        before_hash: layout_hash(&input.items),
        after_hash: layout_hash(&items),
        items,
    }
}
