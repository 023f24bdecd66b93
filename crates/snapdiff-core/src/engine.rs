//! Diff entry points: size guard, line split, algorithm selection, alignment.
//!
//! Pure and total. Work per call is bounded by [`DiffLimits`]: inputs are cut
//! to `char_limit` chars before splitting, and the quadratic exact algorithm
//! only runs while both sides have at most `max_lines` lines.

use tracing::debug;

use crate::columns::{build_columns, DiffResult};
use crate::fallback::set_diff;
use crate::lcs::lcs_diff;
use crate::limits::{apply_char_guard, DiffLimits};
use crate::ops::EditOp;
use crate::split::split_lines;

/// The diff algorithm chosen for an input pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Minimal edit script from the LCS table.
    Exact,
    /// Linear set-membership diff; not minimal.
    SetFallback,
}

impl Algorithm {
    /// Pick the algorithm for `old_lines` x `new_lines` under `limits`.
    pub fn select(old_lines: usize, new_lines: usize, limits: &DiffLimits) -> Self {
        if old_lines <= limits.max_lines && new_lines <= limits.max_lines {
            Algorithm::Exact
        } else {
            Algorithm::SetFallback
        }
    }
}

/// Raw edit script plus how it was produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiffOutcome {
    pub ops: Vec<EditOp>,
    pub algorithm: Algorithm,
    /// `true` if either input was cut to the character budget.
    pub truncated: bool,
}

/// Compute the line-level edit script between `old` and `new`.
pub fn diff_ops(old: &str, new: &str, limits: &DiffLimits) -> DiffOutcome {
    let guarded = apply_char_guard(old, new, limits);
    if guarded.truncated {
        debug!(
            char_limit = limits.char_limit,
            "input exceeds character budget, truncating both sides"
        );
    }

    let old_lines = split_lines(guarded.old);
    let new_lines = split_lines(guarded.new);
    let algorithm = Algorithm::select(old_lines.len(), new_lines.len(), limits);
    debug!(
        old_lines = old_lines.len(),
        new_lines = new_lines.len(),
        ?algorithm,
        "computing line diff"
    );

    let ops = match algorithm {
        Algorithm::Exact => lcs_diff(&old_lines, &new_lines),
        Algorithm::SetFallback => set_diff(&old_lines, &new_lines),
    };

    DiffOutcome {
        ops,
        algorithm,
        truncated: guarded.truncated,
    }
}

/// Diff two texts and align the result into columns, with the given limits.
pub fn compute_line_diff_with(old: &str, new: &str, limits: &DiffLimits) -> DiffResult {
    let outcome = diff_ops(old, new, limits);
    let result = build_columns(&outcome.ops, outcome.truncated);
    debug!(
        rows = result.len(),
        added = result.added_count,
        removed = result.removed_count,
        "line diff complete"
    );
    result
}

/// Diff two texts and align the result into columns.
///
/// Uses [`CHAR_LIMIT`](crate::CHAR_LIMIT) and [`MAX_LINES`](crate::MAX_LINES).
pub fn compute_line_diff(old: &str, new: &str) -> DiffResult {
    compute_line_diff_with(old, new, &DiffLimits::default())
}
