#![forbid(unsafe_code)]

//! Collision predicate, collision queries, and clamping.

use crate::columns::Columns;
use crate::item::GridItem;

/// Concrete size limits for one item at one column position.
///
/// Resolved from the item's optional constraints, the grid width, and the
/// item's left edge. Width and height clamp as `max(min, min(max, value))`,
/// so a minimum that exceeds the maximum wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeBounds {
    pub min_w: u32,
    pub max_w: u32,
    pub min_h: u32,
    /// `u32::MAX` when the item has no height limit.
    pub max_h: u32,
}

impl SizeBounds {
    /// Resolve the bounds of `item` if its left edge sat at column `x`.
    #[must_use]
    pub fn resolve(item: &GridItem, columns: Columns, x: u32) -> Self {
        let room = columns.get().saturating_sub(x);
        Self {
            min_w: item.min_w.unwrap_or(1).max(1),
            max_w: item.max_w.map_or(room, |max_w| max_w.min(room)),
            min_h: item.min_h.unwrap_or(1).max(1),
            max_h: item.max_h.unwrap_or(u32::MAX),
        }
    }

    /// Clamp a requested width into these bounds.
    #[inline]
    #[must_use]
    pub fn clamp_w(&self, w: u32) -> u32 {
        w.min(self.max_w).max(self.min_w)
    }

    /// Clamp a requested height into these bounds.
    #[inline]
    #[must_use]
    pub fn clamp_h(&self, h: u32) -> u32 {
        h.min(self.max_h).max(self.min_h)
    }

    /// Whether `w x h` is what clamping would produce.
    #[must_use]
    pub fn admits(&self, w: u32, h: u32) -> bool {
        self.clamp_w(w) == w && self.clamp_h(h) == h
    }
}

/// Whether two distinct items overlap on both axes.
///
/// Overlap is strict: items that only share an edge do not collide, and an
/// item never collides with anything carrying its own id.
#[inline]
#[must_use]
pub fn collides(a: &GridItem, b: &GridItem) -> bool {
    a.id != b.id && a.overlaps_columns(b) && a.overlaps_rows(b)
}

/// Every member of `items` that collides with `item`, in input order.
#[must_use]
pub fn colliding_items(item: &GridItem, items: &[GridItem]) -> Vec<GridItem> {
    items
        .iter()
        .filter(|other| collides(item, other))
        .cloned()
        .collect()
}

/// Corrected copy of `item` that fits the grid and its own constraints.
///
/// `x` is pulled into `[0, columns - 1]`, then `w` and `h` are clamped into
/// the item's [`SizeBounds`] at that column. `y` is capped at
/// `u32::MAX - h` so the bottom edge stays representable. Everything else
/// passes through.
#[must_use]
pub fn clamp_item(item: &GridItem, columns: Columns) -> GridItem {
    let x = item.x.min(columns.get() - 1);
    let bounds = SizeBounds::resolve(item, columns, x);
    let h = bounds.clamp_h(item.h);
    GridItem {
        x,
        y: item.y.min(u32::MAX - h),
        w: bounds.clamp_w(item.w),
        h,
        ..item.clone()
    }
}

/// Clamp a signed request into `[0, max]`; a negative `max` yields 0.
#[inline]
pub(crate) fn clamp_signed(value: i64, max: i64) -> u32 {
    u32::try_from(value.min(max).max(0)).unwrap_or(u32::MAX)
}

/// Clamp a signed size or coordinate into the `u32` range.
#[inline]
pub(crate) fn clamp_to_u32(value: i64) -> u32 {
    clamp_signed(value, i64::from(u32::MAX))
}
