#![forbid(unsafe_code)]

//! Validated grid column count.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// Number of columns in a grid. Always at least 1.
///
/// Every engine entry point takes a `Columns`, so a zero-width grid is
/// rejected once at construction instead of inside the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Columns(NonZeroU32);

impl Columns {
    /// The conventional twelve-column dashboard grid.
    pub const TWELVE: Self = match NonZeroU32::new(12) {
        Some(count) => Self(count),
        None => unreachable!(),
    };

    /// Create a column count, rejecting zero.
    pub fn new(count: u32) -> Result<Self, GridError> {
        NonZeroU32::new(count)
            .map(Self)
            .ok_or(GridError::ZeroColumns)
    }

    /// Raw column count.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for Columns {
    fn default() -> Self {
        Self::TWELVE
    }
}

impl TryFrom<u32> for Columns {
    type Error = GridError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Columns> for u32 {
    fn from(columns: Columns) -> Self {
        columns.get()
    }
}

impl From<NonZeroU32> for Columns {
    fn from(value: NonZeroU32) -> Self {
        Self(value)
    }
}

impl FromStr for Columns {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let count = s
            .trim()
            .parse::<u32>()
            .map_err(|_| GridError::InvalidColumns {
                value: s.to_string(),
            })?;
        Self::new(count)
    }
}

impl fmt::Display for Columns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}
