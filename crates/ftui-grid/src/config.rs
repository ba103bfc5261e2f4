#![forbid(unsafe_code)]

//! Host-side grid configuration.
//!
//! The engine takes its column count on every call and keeps nothing between
//! calls. Hosts that want one configured default read it here.

use serde::{Deserialize, Serialize};

use crate::action::LayoutAction;
use crate::columns::Columns;
use crate::engine::ComputeLayoutInput;
use crate::item::GridItem;
use crate::logging::warn;

/// Environment variable holding the default column count.
pub const COLUMNS_ENV: &str = "FTUI_GRID_COLUMNS";

/// Grid settings supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GridConfig {
    /// Columns passed to every layout call.
    #[serde(default)]
    pub columns: Columns,
}

impl GridConfig {
    /// Config for a grid of the given width.
    #[must_use]
    pub fn new(columns: Columns) -> Self {
        Self { columns }
    }

    /// Load config from environment variables.
    ///
    /// Reads:
    /// - `FTUI_GRID_COLUMNS`: default column count (positive integer)
    ///
    /// Missing or unusable values fall back to the 12-column default.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Load config using a custom environment lookup (for tests).
    #[must_use]
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn from_env_with<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = get_env(COLUMNS_ENV) {
            match raw.parse::<Columns>() {
                Ok(columns) => config.columns = columns,
                Err(err) => {
                    warn!(
                        var = COLUMNS_ENV,
                        value = %raw,
                        error = %err,
                        "ignoring grid column override"
                    );
                }
            }
        }
        config
    }

    /// Builder-style column override.
    #[must_use]
    pub fn with_columns(mut self, columns: Columns) -> Self {
        self.columns = columns;
        self
    }

    /// Pair a snapshot and an action with this config's column count.
    pub fn input(&self, items: Vec<GridItem>, action: LayoutAction) -> ComputeLayoutInput {
        ComputeLayoutInput::new(items, action, self.columns)
    }
}
