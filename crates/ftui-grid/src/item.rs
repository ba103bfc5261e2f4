#![forbid(unsafe_code)]

//! Grid items.

use serde::{Deserialize, Serialize};

use crate::geometry::clamp_to_u32;

/// A rectangular item placed on the grid, in cell units.
///
/// Constraint fields are optional; the defaults (`min_w = 1`,
/// `max_w = columns - x`, `min_h = 1`, unbounded `max_h`) are resolved by
/// [`SizeBounds`](crate::SizeBounds) when an operation needs them.
///
/// Rows end at `u32::MAX`. Items produced by [`clamp_item`](crate::clamp_item)
/// keep `y + h` within that ceiling; edges of items beyond it saturate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridItem {
    /// Identifier, unique within a layout.
    pub id: String,
    /// Left column (inclusive).
    pub x: u32,
    /// Top row (inclusive).
    pub y: u32,
    /// Width in columns.
    pub w: u32,
    /// Height in rows.
    pub h: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_w: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_w: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_h: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_h: Option<u32>,
}

impl GridItem {
    /// Create an unconstrained item.
    pub fn new(id: impl Into<String>, x: u32, y: u32, w: u32, h: u32) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            w,
            h,
            min_w: None,
            max_w: None,
            min_h: None,
            max_h: None,
        }
    }

    /// Set the minimum width.
    #[must_use]
    pub fn with_min_w(mut self, min_w: u32) -> Self {
        self.min_w = Some(min_w);
        self
    }

    /// Set the maximum width.
    #[must_use]
    pub fn with_max_w(mut self, max_w: u32) -> Self {
        self.max_w = Some(max_w);
        self
    }

    /// Set the minimum height.
    #[must_use]
    pub fn with_min_h(mut self, min_h: u32) -> Self {
        self.min_h = Some(min_h);
        self
    }

    /// Set the maximum height.
    #[must_use]
    pub fn with_max_h(mut self, max_h: u32) -> Self {
        self.max_h = Some(max_h);
        self
    }

    /// Copy of this item at a new row.
    #[must_use]
    pub fn at_y(&self, y: u32) -> Self {
        Self { y, ..self.clone() }
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u32 {
        self.x.saturating_add(self.w)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u32 {
        self.y.saturating_add(self.h)
    }

    /// True when both items cover at least one common column.
    #[inline]
    pub const fn overlaps_columns(&self, other: &GridItem) -> bool {
        self.x < other.right() && other.x < self.right()
    }

    /// True when both items cover at least one common row.
    #[inline]
    pub const fn overlaps_rows(&self, other: &GridItem) -> bool {
        self.y < other.bottom() && other.y < self.bottom()
    }

    /// Same position and size, ignoring id and constraints.
    #[inline]
    pub const fn same_geometry(&self, other: &GridItem) -> bool {
        self.x == other.x && self.y == other.y && self.w == other.w && self.h == other.h
    }
}

/// Wire form of an item in an add request, before clamping.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignedGridItem {
    id: String,
    x: i64,
    y: i64,
    w: i64,
    h: i64,
    #[serde(default)]
    min_w: Option<i64>,
    #[serde(default)]
    max_w: Option<i64>,
    #[serde(default)]
    min_h: Option<i64>,
    #[serde(default)]
    max_h: Option<i64>,
}

impl From<SignedGridItem> for GridItem {
    fn from(raw: SignedGridItem) -> Self {
        Self {
            id: raw.id,
            x: clamp_to_u32(raw.x),
            y: clamp_to_u32(raw.y),
            w: clamp_to_u32(raw.w),
            h: clamp_to_u32(raw.h),
            min_w: raw.min_w.map(clamp_to_u32),
            max_w: raw.max_w.map(clamp_to_u32),
            min_h: raw.min_h.map(clamp_to_u32),
            max_h: raw.max_h.map(clamp_to_u32),
        }
    }
}

/// Read an item that may carry negative numbers, flooring them at 0.
pub(crate) fn deserialize_clamped<'de, D>(deserializer: D) -> Result<GridItem, D::Error>
where
    D: serde::Deserializer<'de>,
{
    SignedGridItem::deserialize(deserializer).map(GridItem::from)
}
