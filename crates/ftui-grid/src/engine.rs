#![forbid(unsafe_code)]

//! Action dispatch.
//!
//! [`compute_layout`] is a pure function of its input: it reads a snapshot,
//! applies one [`LayoutAction`], and returns a freshly built item list. No
//! state survives between calls.

use serde::{Deserialize, Serialize};

use crate::action::LayoutAction;
use crate::columns::Columns;
use crate::geometry::{SizeBounds, clamp_item, clamp_signed, clamp_to_u32};
use crate::item::GridItem;
use crate::logging::{debug, debug_span};
use crate::pack_up::pack_up;
use crate::placement::find_free_y;
use crate::push_down::push_down;

/// A layout snapshot plus the change to apply to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputeLayoutInput {
    pub items: Vec<GridItem>,
    pub action: LayoutAction,
    pub columns: Columns,
}

impl ComputeLayoutInput {
    /// Bundle a snapshot, an action and a grid width.
    pub fn new(items: Vec<GridItem>, action: LayoutAction, columns: Columns) -> Self {
        Self {
            items,
            action,
            columns,
        }
    }
}

/// Apply `input.action` to `input.items` and return the new layout.
///
/// - **Add**: the item is clamped, replaces any item with its id, and drops
///   to the first free row at or below its requested row. Nothing else moves.
/// - **Move**: `x` is clamped to `[0, columns - w]` and `y` to
///   `[0, u32::MAX - h]`; size is kept. Colliders are pushed down.
/// - **Resize**: `w`/`h` are clamped to the item's size bounds at its current
///   column, so zero or negative requests become the minimum; position is
///   kept. Colliders are pushed down.
/// - **Remove**: the item is dropped and the items beneath it pack upward.
///
/// Move, resize and remove of an unknown id return the items unchanged.
#[must_use]
pub fn compute_layout(input: &ComputeLayoutInput) -> Vec<GridItem> {
    let ComputeLayoutInput {
        items,
        action,
        columns,
    } = input;
    let columns = *columns;
    let _span = debug_span!(
        "grid.compute_layout",
        kind = action.kind().as_str(),
        items = items.len(),
        columns = columns.get()
    )
    .entered();

    match action {
        LayoutAction::Add { item } => add(items, item, columns),
        LayoutAction::Move { id, x, y } => {
            let Some(target) = find(items, id) else {
                debug!(id = %id, "move target not found");
                return items.clone();
            };
            let max_x = i64::from(columns.get()) - i64::from(target.w);
            let moved = GridItem {
                x: clamp_signed(*x, max_x),
                y: clamp_to_u32(*y),
                ..target.clone()
            };
            push_down(&moved, items, columns)
        }
        LayoutAction::Resize { id, w, h } => {
            let Some(target) = find(items, id) else {
                debug!(id = %id, "resize target not found");
                return items.clone();
            };
            let bounds = SizeBounds::resolve(target, columns, target.x);
            let resized = GridItem {
                w: bounds.clamp_w(clamp_to_u32(*w)),
                h: bounds.clamp_h(clamp_to_u32(*h)),
                ..target.clone()
            };
            push_down(&resized, items, columns)
        }
        LayoutAction::Remove { id } => {
            if find(items, id).is_none() {
                debug!(id = %id, "remove target not found");
            }
            pack_up(items, id, columns)
        }
    }
}

fn add(items: &[GridItem], item: &GridItem, columns: Columns) -> Vec<GridItem> {
    let added = clamp_item(item, columns);
    let mut out: Vec<GridItem> = items
        .iter()
        .filter(|existing| existing.id != added.id)
        .cloned()
        .collect();
    let y = find_free_y(&added, &out);
    out.push(added.at_y(y));
    out
}

fn find<'a>(items: &'a [GridItem], id: &str) -> Option<&'a GridItem> {
    items.iter().find(|item| item.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::collides;

    const COLS: Columns = Columns::TWELVE;

    fn run(items: &[GridItem], action: LayoutAction) -> Vec<GridItem> {
        compute_layout(&ComputeLayoutInput::new(items.to_vec(), action, COLS))
    }

    fn get<'a>(items: &'a [GridItem], id: &str) -> &'a GridItem {
        items
            .iter()
            .find(|item| item.id == id)
            .expect("item present")
    }

    fn pair() -> Vec<GridItem> {
        vec![
            GridItem::new("a", 0, 0, 6, 2),
            GridItem::new("b", 0, 2, 6, 2),
        ]
    }

    #[test]
    fn add_drops_below_existing_item() {
        let items = [GridItem::new("a", 0, 0, 6, 2)];
        let out = run(&items, LayoutAction::add(GridItem::new("b", 0, 0, 6, 2)));
        assert_eq!(out.len(), 2);
        assert_eq!(get(&out, "a").y, 0);
        assert_eq!(get(&out, "b").y, 2);
    }

    #[test]
    fn add_appends_and_never_moves_existing() {
        let items = [
            GridItem::new("a", 0, 0, 4, 3),
            GridItem::new("b", 4, 0, 4, 1),
        ];
        let out = run(&items, LayoutAction::add(GridItem::new("c", 2, 0, 4, 2)));
        assert_eq!(&out[..2], &items);
        assert_eq!(out[2], GridItem::new("c", 2, 3, 4, 2));
    }

    #[test]
    fn add_replaces_item_with_same_id() {
        let items = pair();
        let out = run(&items, LayoutAction::add(GridItem::new("b", 6, 0, 6, 2)));
        assert_eq!(
            out,
            vec![GridItem::new("a", 0, 0, 6, 2), GridItem::new("b", 6, 0, 6, 2)]
        );
    }

    #[test]
    fn add_clamps_the_new_item() {
        let out = run(&[], LayoutAction::add(GridItem::new("a", 10, 0, 5, 0)));
        assert_eq!(out, vec![GridItem::new("a", 10, 0, 2, 1)]);
    }

    #[test]
    fn move_pushes_collider_down() {
        let out = run(&pair(), LayoutAction::move_to("b", 0, 0));
        assert_eq!(get(&out, "b").y, 0);
        assert_eq!(get(&out, "a").y, 2);
    }

    #[test]
    fn move_clamps_to_grid() {
        let out = run(&pair(), LayoutAction::move_to("a", 20, -4));
        let a = get(&out, "a");
        assert_eq!((a.x, a.y, a.w, a.h), (6, 0, 6, 2));
        assert_eq!(get(&out, "b").y, 2);
    }

    #[test]
    fn move_negative_x_snaps_to_left_edge() {
        let out = run(&pair(), LayoutAction::move_to("b", -3, 5));
        let b = get(&out, "b");
        assert_eq!((b.x, b.y), (0, 5));
    }

    #[test]
    fn move_unknown_id_is_a_no_op() {
        let items = pair();
        assert_eq!(run(&items, LayoutAction::move_to("nope", 3, 3)), items);
    }

    #[test]
    fn resize_grows_and_pushes() {
        let out = run(&pair(), LayoutAction::resize("a", 6, 4));
        let a = get(&out, "a");
        assert_eq!((a.w, a.h), (6, 4));
        assert_eq!(get(&out, "b").y, 4);
    }

    #[test]
    fn resize_keeps_position() {
        let out = run(&pair(), LayoutAction::resize("b", 6, 4));
        let b = get(&out, "b");
        assert_eq!((b.x, b.y, b.h), (0, 2, 4));
    }

    #[test]
    fn resize_respects_constraints_and_grid_edge() {
        let items = [GridItem::new("a", 8, 0, 2, 2)
            .with_min_w(2)
            .with_min_h(2)
            .with_max_h(5)];
        let out = run(&items, LayoutAction::resize("a", 10, 9));
        assert_eq!((out[0].w, out[0].h), (4, 5));
        let out = run(&items, LayoutAction::resize("a", 0, 0));
        assert_eq!((out[0].w, out[0].h), (2, 2));
    }

    #[test]
    fn resize_unknown_id_is_a_no_op() {
        let items = pair();
        assert_eq!(run(&items, LayoutAction::resize("nope", 1, 1)), items);
    }

    #[test]
    fn remove_packs_up() {
        let out = run(&pair(), LayoutAction::remove("b"));
        assert_eq!(out, vec![GridItem::new("a", 0, 0, 6, 2)]);

        let out = run(&pair(), LayoutAction::remove("a"));
        assert_eq!(out, vec![GridItem::new("b", 0, 0, 6, 2)]);
    }

    #[test]
    fn remove_unknown_id_is_a_no_op() {
        let items = pair();
        assert_eq!(run(&items, LayoutAction::remove("nope")), items);
    }

    #[test]
    fn identical_input_gives_identical_output() {
        let input = ComputeLayoutInput::new(pair(), LayoutAction::move_to("a", 0, 2), COLS);
        assert_eq!(compute_layout(&input), compute_layout(&input));
    }

    #[test]
    fn input_is_left_untouched() {
        let input = ComputeLayoutInput::new(pair(), LayoutAction::move_to("b", 0, 0), COLS);
        let before = input.clone();
        let _ = compute_layout(&input);
        assert_eq!(input, before);
    }

    #[test]
    fn move_result_is_overlap_free() {
        let items = [
            GridItem::new("a", 0, 0, 4, 2),
            GridItem::new("b", 4, 0, 4, 3),
            GridItem::new("c", 8, 0, 4, 2),
            GridItem::new("d", 0, 2, 4, 2),
            GridItem::new("e", 8, 2, 4, 4),
        ];
        let out = run(&items, LayoutAction::move_to("e", 2, 1));
        for (i, a) in out.iter().enumerate() {
            for b in &out[i + 1..] {
                assert!(!collides(a, b), "{} overlaps {}", a.id, b.id);
            }
        }
    }

    #[test]
    fn resize_negative_request_clamps_to_minimum() {
        let out = run(&pair(), LayoutAction::resize("a", -1, -7));
        let a = get(&out, "a");
        assert_eq!((a.w, a.h), (1, 1));
        assert_eq!(get(&out, "b").y, 2);

        let constrained = [GridItem::new("c", 0, 0, 4, 4).with_min_w(3).with_min_h(2)];
        let out = run(&constrained, LayoutAction::resize("c", i64::MIN, -1));
        assert_eq!((out[0].w, out[0].h), (3, 2));
    }

    #[test]
    fn resize_huge_request_hits_grid_edge() {
        let out = run(&pair(), LayoutAction::resize("a", i64::MAX, 3));
        assert_eq!(get(&out, "a").w, 12);
    }

    #[test]
    fn move_far_down_keeps_bottom_edge_in_range() {
        let out = run(&pair(), LayoutAction::move_to("a", 0, i64::MAX));
        let a = get(&out, "a");
        assert_eq!(a.y, u32::MAX - 2);
        assert_eq!(a.bottom(), u32::MAX);
        assert_eq!(get(&out, "b").y, 2);
    }

    #[cfg(feature = "tracing")]
    mod logging {
        use super::*;
        use tracing_test::traced_test;

        #[traced_test]
        #[test]
        fn unknown_targets_are_logged() {
            let items = pair();
            let _ = run(&items, LayoutAction::move_to("ghost", 0, 0));
            let _ = run(&items, LayoutAction::remove("ghost"));
            assert!(logs_contain("move target not found"));
            assert!(logs_contain("remove target not found"));
        }
    }
}
