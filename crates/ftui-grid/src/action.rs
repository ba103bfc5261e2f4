#![forbid(unsafe_code)]

//! Layout mutation requests.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::item::GridItem;

/// A single requested change to a layout.
///
/// Serialized with an internal `type` tag, e.g.
/// `{"type":"move","id":"a","x":0,"y":2}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LayoutAction {
    /// Insert an item (replacing any item with the same id) at the first free
    /// row at or below its requested row. Existing items never move.
    ///
    /// Negative numbers in a serialized item are accepted and read as 0.
    Add {
        #[serde(deserialize_with = "crate::item::deserialize_clamped")]
        item: GridItem,
    },
    /// Move an item, pushing colliders down. Coordinates may point off the
    /// grid; they are clamped.
    Move { id: String, x: i64, y: i64 },
    /// Resize an item in place, pushing colliders down. Sizes below the
    /// item's minimum, including negative ones, are clamped up.
    Resize { id: String, w: i64, h: i64 },
    /// Remove an item and pack the items beneath it upward.
    Remove { id: String },
}

impl LayoutAction {
    /// Add request.
    pub fn add(item: GridItem) -> Self {
        Self::Add { item }
    }

    /// Move request.
    pub fn move_to(id: impl Into<String>, x: i64, y: i64) -> Self {
        Self::Move { id: id.into(), x, y }
    }

    /// Resize request.
    pub fn resize(id: impl Into<String>, w: i64, h: i64) -> Self {
        Self::Resize { id: id.into(), w, h }
    }

    /// Remove request.
    pub fn remove(id: impl Into<String>) -> Self {
        Self::Remove { id: id.into() }
    }

    /// Action family.
    #[must_use]
    pub const fn kind(&self) -> LayoutActionKind {
        match self {
            Self::Add { .. } => LayoutActionKind::Add,
            Self::Move { .. } => LayoutActionKind::Move,
            Self::Resize { .. } => LayoutActionKind::Resize,
            Self::Remove { .. } => LayoutActionKind::Remove,
        }
    }

    /// Id of the item the action targets.
    #[must_use]
    pub fn target_id(&self) -> &str {
        match self {
            Self::Add { item } => &item.id,
            Self::Move { id, .. } | Self::Resize { id, .. } | Self::Remove { id } => id,
        }
    }
}

/// Discriminant of a [`LayoutAction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutActionKind {
    Add,
    Move,
    Resize,
    Remove,
}

impl LayoutActionKind {
    /// Stable lowercase name, matching the serialized tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Move => "move",
            Self::Resize => "resize",
            Self::Remove => "remove",
        }
    }
}

impl fmt::Display for LayoutActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
