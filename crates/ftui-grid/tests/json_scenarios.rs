//! End-to-end scenarios fed through the JSON shape a UI host sends.

use ftui_grid::{
    Columns, ComputeLayoutInput, GridItem, LayoutAction, compute_layout, pack_up, push_down,
};
use serde_json::json;

fn compute(value: serde_json::Value) -> Vec<GridItem> {
    let input: ComputeLayoutInput =
        serde_json::from_value(value).expect("input should deserialize");
    compute_layout(&input)
}

fn rows(items: &[GridItem]) -> Vec<(&str, u32)> {
    items.iter().map(|item| (item.id.as_str(), item.y)).collect()
}

#[test]
fn add_lands_below_existing() {
    let out = compute(json!({
        "items": [{"id": "a", "x": 0, "y": 0, "w": 6, "h": 2}],
        "action": {"type": "add", "item": {"id": "b", "x": 0, "y": 0, "w": 6, "h": 2}},
        "columns": 12
    }));
    assert_eq!(rows(&out), [("a", 0), ("b", 2)]);
}

#[test]
fn remove_drops_item() {
    let out = compute(json!({
        "items": [
            {"id": "a", "x": 0, "y": 0, "w": 6, "h": 2},
            {"id": "b", "x": 0, "y": 2, "w": 6, "h": 2}
        ],
        "action": {"type": "remove", "id": "b"},
        "columns": 12
    }));
    assert_eq!(out, vec![GridItem::new("a", 0, 0, 6, 2)]);
}

#[test]
fn move_and_resize_requests_parse() {
    let items = json!([
        {"id": "a", "x": 0, "y": 0, "w": 6, "h": 2},
        {"id": "b", "x": 0, "y": 2, "w": 6, "h": 2}
    ]);

    let out = compute(json!({
        "items": items.clone(),
        "action": {"type": "move", "id": "b", "x": -1, "y": 0},
        "columns": 12
    }));
    assert_eq!(rows(&out), [("b", 0), ("a", 2)]);

    let out = compute(json!({
        "items": items,
        "action": {"type": "resize", "id": "b", "w": 6, "h": 4},
        "columns": 12
    }));
    let b = out.iter().find(|item| item.id == "b").expect("b present");
    assert_eq!(b.h, 4);
}

#[test]
fn negative_resize_clamps_to_minimum() {
    let out = compute(json!({
        "items": [
            {"id": "a", "x": 0, "y": 0, "w": 6, "h": 2, "minH": 2},
            {"id": "b", "x": 0, "y": 2, "w": 6, "h": 2}
        ],
        "action": {"type": "resize", "id": "a", "w": -1, "h": -4},
        "columns": 12
    }));
    let a = out.iter().find(|item| item.id == "a").expect("a present");
    assert_eq!((a.x, a.y, a.w, a.h), (0, 0, 1, 2));
    assert_eq!(rows(&out), [("a", 0), ("b", 2)]);
}

#[test]
fn negative_add_position_clamps_to_origin() {
    let out = compute(json!({
        "items": [],
        "action": {
            "type": "add",
            "item": {"id": "a", "x": -1, "y": -3, "w": 4, "h": -2, "minW": -1}
        },
        "columns": 12
    }));
    assert_eq!(out.len(), 1);
    let a = &out[0];
    assert_eq!((a.x, a.y, a.w, a.h), (0, 0, 4, 1));
    assert_eq!(a.min_w, Some(0));
}

#[test]
fn add_request_still_serializes_as_plain_item() {
    let action = LayoutAction::add(GridItem::new("a", 1, 2, 3, 4).with_max_h(6));
    let value = serde_json::to_value(&action).expect("serialize");
    assert_eq!(
        value,
        json!({"type": "add", "item": {"id": "a", "x": 1, "y": 2, "w": 3, "h": 4, "maxH": 6}})
    );
    let back: LayoutAction = serde_json::from_value(value).expect("deserialize");
    assert_eq!(back, action);
}

#[test]
fn constraint_keys_are_camel_case() {
    let item: GridItem = serde_json::from_value(json!({
        "id": "w", "x": 0, "y": 0, "w": 2, "h": 2, "minW": 2, "maxH": 4
    }))
    .expect("item should deserialize");
    assert_eq!(item.min_w, Some(2));
    assert_eq!(item.max_h, Some(4));
    assert_eq!(item.max_w, None);

    let value = serde_json::to_value(&item).expect("serialize");
    assert_eq!(
        value,
        json!({"id": "w", "x": 0, "y": 0, "w": 2, "h": 2, "minW": 2, "maxH": 4})
    );
}

#[test]
fn action_tag_is_lowercase() {
    let value = serde_json::to_value(LayoutAction::move_to("a", 3, -1)).expect("serialize");
    assert_eq!(value, json!({"type": "move", "id": "a", "x": 3, "y": -1}));
}

#[test]
fn zero_columns_are_rejected() {
    let err = serde_json::from_value::<ComputeLayoutInput>(json!({
        "items": [],
        "action": {"type": "remove", "id": "a"},
        "columns": 0
    }))
    .expect_err("zero columns must not deserialize");
    assert!(err.to_string().contains("at least 1"), "{err}");
}

#[test]
fn push_down_scenarios() {
    let cols = Columns::TWELVE;

    let out = push_down(
        &GridItem::new("b", 0, 0, 6, 2),
        &[GridItem::new("a", 0, 0, 6, 2)],
        cols,
    );
    assert_eq!(rows(&out), [("b", 0), ("a", 2)]);

    let out = push_down(
        &GridItem::new("c", 0, 2, 6, 2),
        &[
            GridItem::new("a", 0, 0, 6, 2),
            GridItem::new("b", 0, 2, 6, 2),
        ],
        cols,
    );
    assert_eq!(rows(&out), [("c", 2), ("a", 0), ("b", 4)]);
}

#[test]
fn pack_up_scenarios() {
    let cols = Columns::TWELVE;

    let out = pack_up(
        &[
            GridItem::new("a", 0, 0, 6, 2),
            GridItem::new("b", 0, 2, 6, 2),
            GridItem::new("c", 0, 4, 6, 2),
        ],
        "b",
        cols,
    );
    assert_eq!(rows(&out), [("a", 0), ("c", 2)]);

    let out = pack_up(
        &[
            GridItem::new("a", 0, 0, 6, 2),
            GridItem::new("b", 6, 2, 6, 2),
        ],
        "a",
        cols,
    );
    assert_eq!(rows(&out), [("b", 2)]);
}
