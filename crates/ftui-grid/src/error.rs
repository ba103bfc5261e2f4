#![forbid(unsafe_code)]

//! Boundary errors.
//!
//! The layout operations themselves never fail: unknown ids are no-ops and
//! out-of-range requests are clamped. Errors only arise where a caller hands
//! the crate something it cannot represent (a zero column count) or asks for
//! strict validation of a snapshot.

use std::fmt;

/// Errors raised at the grid engine boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A column count of zero was supplied.
    ZeroColumns,
    /// A textual column count could not be parsed.
    InvalidColumns { value: String },
    /// A layout snapshot violates one or more set invariants.
    InvalidLayout {
        issue_count: usize,
        first_issue: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroColumns => write!(f, "grid column count must be at least 1"),
            Self::InvalidColumns { value } => {
                write!(f, "invalid grid column count {value:?}")
            }
            Self::InvalidLayout {
                issue_count,
                first_issue,
            } => write!(
                f,
                "layout has {issue_count} invariant violation(s), first: {first_issue}"
            ),
        }
    }
}

impl std::error::Error for GridError {}
