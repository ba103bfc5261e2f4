#![forbid(unsafe_code)]

//! Dashboard grid layout engine.
//!
//! Computes positions and sizes of rectangular items on a fixed-width,
//! unbounded-height cell grid after one mutation (add, move, resize, remove),
//! keeping items from overlapping and moving unrelated items only when a
//! cascade forces it.
//!
//! # Pieces
//! - [`collides`] / [`colliding_items`]: strict two-axis overlap.
//! - [`clamp_item`] / [`SizeBounds`]: fit an item to the grid and its own limits.
//! - [`find_free_y`]: lowest free row for a new item.
//! - [`push_down`]: pin one item and settle everything else beneath it.
//! - [`pack_up`]: remove an item and lift the items directly below it.
//! - [`compute_layout`]: dispatch a [`LayoutAction`].
//!
//! Every operation is a pure function over borrowed input returning a new
//! `Vec`; nothing is cached between calls.
//!
//! # Example
//!
//! ```
//! use ftui_grid::{Columns, ComputeLayoutInput, GridItem, LayoutAction, compute_layout};
//!
//! let items = vec![GridItem::new("a", 0, 0, 6, 2)];
//! let input = ComputeLayoutInput::new(
//!     items,
//!     LayoutAction::add(GridItem::new("b", 0, 0, 6, 2)),
//!     Columns::TWELVE,
//! );
//! let out = compute_layout(&input);
//! assert_eq!(out[1].y, 2);
//! ```

pub mod action;
pub mod columns;
pub mod config;
pub mod debug;
pub mod diff;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod invariants;
pub mod item;
mod logging;
pub mod pack_up;
pub mod placement;
pub mod push_down;

pub use action::{LayoutAction, LayoutActionKind};
pub use columns::Columns;
pub use config::{COLUMNS_ENV, GridConfig};
pub use diff::{ChangeKind, LayoutChange, LayoutOutcome, apply_action, diff_layouts, layout_hash};
pub use engine::{ComputeLayoutInput, compute_layout};
pub use error::GridError;
pub use geometry::{SizeBounds, clamp_item, colliding_items, collides};
pub use invariants::{
    InvariantCode, InvariantIssue, InvariantSeverity, LayoutInvariantReport, validate_layout,
};
pub use item::GridItem;
pub use pack_up::pack_up;
pub use placement::find_free_y;
pub use push_down::push_down;
