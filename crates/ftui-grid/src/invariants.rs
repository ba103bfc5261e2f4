#![forbid(unsafe_code)]

//! Structural checks over a layout snapshot.
//!
//! The engine keeps these invariants for its own output; the report exists
//! for snapshots that arrive from elsewhere (storage, a peer, a test) and for
//! asserting engine output in tests and fuzzing.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::columns::Columns;
use crate::diff::layout_hash;
use crate::error::GridError;
use crate::geometry::{SizeBounds, collides};
use crate::item::GridItem;

/// Severity for one invariant finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvariantSeverity {
    Error,
    Warning,
}

/// Stable code for invariant findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvariantCode {
    DuplicateId,
    ZeroSize,
    OutOfBounds,
    SizeBoundsViolated,
    Overlap,
}

impl InvariantCode {
    /// Severity assigned to this code.
    #[must_use]
    pub const fn severity(self) -> InvariantSeverity {
        match self {
            Self::SizeBoundsViolated => InvariantSeverity::Warning,
            Self::DuplicateId | Self::ZeroSize | Self::OutOfBounds | Self::Overlap => {
                InvariantSeverity::Error
            }
        }
    }
}

/// One actionable invariant finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvariantIssue {
    pub code: InvariantCode,
    pub severity: InvariantSeverity,
    pub item_id: String,
    pub related_item: Option<String>,
    pub message: String,
}

impl InvariantIssue {
    fn new(code: InvariantCode, item: &GridItem, message: String) -> Self {
        Self {
            code,
            severity: code.severity(),
            item_id: item.id.clone(),
            related_item: None,
            message,
        }
    }
}

/// Structured invariant report over a layout snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutInvariantReport {
    pub snapshot_hash: u64,
    pub issues: Vec<InvariantIssue>,
}

impl LayoutInvariantReport {
    /// True when no finding of any severity exists.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// True when any error-level finding exists.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.issues
            .iter()
            .any(|issue| issue.severity == InvariantSeverity::Error)
    }

    /// Findings with the given code.
    pub fn with_code(&self, code: InvariantCode) -> impl Iterator<Item = &InvariantIssue> {
        self.issues.iter().filter(move |issue| issue.code == code)
    }

    /// `Ok(())` unless an error-level finding exists.
    pub fn into_result(self) -> Result<(), GridError> {
        if !self.has_errors() {
            return Ok(());
        }
        let errors: Vec<_> = self
            .issues
            .into_iter()
            .filter(|issue| issue.severity == InvariantSeverity::Error)
            .collect();
        Err(GridError::InvalidLayout {
            issue_count: errors.len(),
            first_issue: errors
                .first()
                .map(|issue| issue.message.clone())
                .unwrap_or_default(),
        })
    }
}

/// Check `items` against the set invariants of a grid `columns` wide.
///
/// Issues are reported in item order; overlaps are reported once per pair.
#[must_use]
pub fn validate_layout(items: &[GridItem], columns: Columns) -> LayoutInvariantReport {
    let mut issues = Vec::new();
    let mut seen: FxHashSet<&str> = FxHashSet::default();

    for item in items {
        if !seen.insert(item.id.as_str()) {
            issues.push(InvariantIssue::new(
                InvariantCode::DuplicateId,
                item,
                format!("id {:?} appears more than once", item.id),
            ));
        }

        if item.w == 0 || item.h == 0 {
            issues.push(InvariantIssue::new(
                InvariantCode::ZeroSize,
                item,
                format!("item {:?} has empty size {}x{}", item.id, item.w, item.h),
            ));
        }

        if item.right() > columns.get() {
            issues.push(InvariantIssue::new(
                InvariantCode::OutOfBounds,
                item,
                format!(
                    "item {:?} spans columns {}..{} on a {}-column grid",
                    item.id,
                    item.x,
                    item.right(),
                    columns
                ),
            ));
        }

        let bounds = SizeBounds::resolve(item, columns, item.x.min(columns.get() - 1));
        if item.w > 0 && item.h > 0 && !bounds.admits(item.w, item.h) {
            issues.push(InvariantIssue::new(
                InvariantCode::SizeBoundsViolated,
                item,
                format!(
                    "item {:?} size {}x{} is outside its bounds",
                    item.id, item.w, item.h
                ),
            ));
        }
    }

    for (i, a) in items.iter().enumerate() {
        for b in &items[i + 1..] {
            if collides(a, b) {
                let mut issue = InvariantIssue::new(
                    InvariantCode::Overlap,
                    a,
                    format!("items {:?} and {:?} overlap", a.id, b.id),
                );
                issue.related_item = Some(b.id.clone());
                issues.push(issue);
            }
        }
    }

    LayoutInvariantReport {
        snapshot_hash: layout_hash(items),
        issues,
    }
}
