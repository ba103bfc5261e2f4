#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use ftui_grid::{
    Columns, ComputeLayoutInput, GridItem, InvariantCode, LayoutAction, compute_layout,
    validate_layout,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    Add { slot: u8, x: u8, y: u8, w: u8, h: u8, max_h: Option<u8> },
    Move { slot: u8, x: i16, y: i16 },
    Resize { slot: u8, w: i8, h: i8 },
    Remove { slot: u8 },
}

fn id(slot: u8) -> String {
    // A small id space so actions keep hitting existing items.
    format!("w{}", slot % 24)
}

fn to_action(op: Op) -> LayoutAction {
    match op {
        Op::Add { slot, x, y, w, h, max_h } => {
            let mut item = GridItem::new(id(slot), x.into(), y.into(), w.into(), h.into());
            item.max_h = max_h.map(u32::from);
            LayoutAction::add(item)
        }
        Op::Move { slot, x, y } => LayoutAction::move_to(id(slot), x.into(), y.into()),
        Op::Resize { slot, w, h } => LayoutAction::resize(id(slot), w.into(), h.into()),
        Op::Remove { slot } => LayoutAction::remove(id(slot)),
    }
}

fuzz_target!(|data: &[u8]| {
    // First byte picks the grid width (1..=32).
    let Some((&first, rest)) = data.split_first() else {
        return;
    };
    let Ok(columns) = Columns::new(u32::from(first % 32) + 1) else {
        return;
    };
    let mut u = Unstructured::new(rest);
    let mut items: Vec<GridItem> = Vec::new();

    for _ in 0..64 {
        let Ok(op) = Op::arbitrary(&mut u) else {
            break;
        };
        let action = to_action(op);
        // Push-down re-resolves every item, so its result is always overlap-free.
        let pushes = matches!(
            action,
            LayoutAction::Move { .. } | LayoutAction::Resize { .. }
        ) && items.iter().any(|item| item.id == action.target_id());
        items = compute_layout(&ComputeLayoutInput::new(items, action, columns));

        let report = validate_layout(&items, columns);
        assert_eq!(report.with_code(InvariantCode::DuplicateId).count(), 0);
        assert_eq!(report.with_code(InvariantCode::OutOfBounds).count(), 0);
        assert_eq!(report.with_code(InvariantCode::ZeroSize).count(), 0);
        if pushes {
            assert_eq!(report.with_code(InvariantCode::Overlap).count(), 0);
        }
    }
});
