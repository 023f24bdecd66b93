//! Line diff engine for job-description snapshots.
//!
//! Computes a line-level edit script between two text blobs within a bounded
//! amount of work, then aligns it into two equal-length columns for a
//! side-by-side "version compare" view.
//!
//! # Key Types
//!
//! - [`EditOp`] -- One line-level edit (equal / removed / added)
//! - [`DiffResult`] / [`ColumnCell`] -- Gap-padded left/right columns plus counts
//! - [`DiffLimits`] -- Character budget and exact-algorithm line threshold
//! - [`Algorithm`] -- Which diff algorithm ran for a given input pair
//!
//! # Example
//!
//! ```
//! use snapdiff_core::{compute_line_diff, ColumnCell};
//!
//! let result = compute_line_diff("a\nb\nc", "a\nx\nc");
//! assert_eq!(result.added_count, 1);
//! assert_eq!(result.removed_count, 1);
//! assert_eq!(result.left_column[1], ColumnCell::OneSided("b".into()));
//! assert_eq!(result.right_column[1], ColumnCell::Empty);
//! ```

pub mod columns;
pub mod engine;
pub mod fallback;
pub mod lcs;
pub mod limits;
pub mod ops;
pub mod split;

pub use columns::{build_columns, ColumnCell, DiffResult};
pub use engine::{compute_line_diff, compute_line_diff_with, diff_ops, Algorithm, DiffOutcome};
pub use limits::{DiffLimits, CHAR_LIMIT, MAX_LINES};
pub use ops::{new_lines, old_lines, EditOp};
