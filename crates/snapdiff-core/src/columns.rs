//! Side-by-side alignment of an edit script.
//!
//! Every op yields exactly one row: one cell in the left column and one in
//! the right. Removed lines leave an [`ColumnCell::Empty`] gap on the right,
//! added lines leave one on the left, so unchanged lines stay level.

use serde::{Deserialize, Serialize};

use crate::ops::EditOp;

/// One cell of a rendered column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "camelCase")]
pub enum ColumnCell {
    /// Line unchanged on both sides.
    Equal(String),
    /// Side-specific line: removed on the left column, added on the right.
    OneSided(String),
    /// Placeholder row, rendered blank.
    Empty,
}

impl ColumnCell {
    /// The cell's text, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            ColumnCell::Equal(t) | ColumnCell::OneSided(t) => Some(t),
            ColumnCell::Empty => None,
        }
    }
}

/// Aligned two-column view of a diff.
///
/// `left_column` and `right_column` always have the same length, equal to
/// the number of edit ops the result was built from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffResult {
    pub left_column: Vec<ColumnCell>,
    pub right_column: Vec<ColumnCell>,
    /// Number of `Added` ops.
    pub added_count: usize,
    /// Number of `Removed` ops.
    pub removed_count: usize,
    /// `true` if either input was cut to the character budget.
    pub truncated: bool,
}

impl DiffResult {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.left_column.len()
    }

    /// Returns `true` if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.left_column.is_empty()
    }

    /// Returns `true` if any line was added or removed.
    pub fn has_changes(&self) -> bool {
        self.added_count > 0 || self.removed_count > 0
    }

    /// Iterate `(left, right)` row pairs.
    pub fn rows(&self) -> impl Iterator<Item = (&ColumnCell, &ColumnCell)> {
        self.left_column.iter().zip(&self.right_column)
    }
}

/// Align an edit script into two gap-padded columns.
pub fn build_columns(ops: &[EditOp], truncated: bool) -> DiffResult {
    let mut result = DiffResult {
        left_column: Vec::with_capacity(ops.len()),
        right_column: Vec::with_capacity(ops.len()),
        truncated,
        ..Default::default()
    };

    for op in ops {
        let (left, right) = match op {
            EditOp::Equal(text) => (ColumnCell::Equal(text.clone()), ColumnCell::Equal(text.clone())),
            EditOp::Removed(text) => {
                result.removed_count += 1;
                (ColumnCell::OneSided(text.clone()), ColumnCell::Empty)
            }
            EditOp::Added(text) => {
                result.added_count += 1;
                (ColumnCell::Empty, ColumnCell::OneSided(text.clone()))
            }
        };
        result.left_column.push(left);
        result.right_column.push(right);
    }

    result
}
