//! Work bounds for a single diff call.
//!
//! Two guards keep one call from consuming unbounded CPU or memory:
//!
//! - a character budget applied to both inputs before line splitting, and
//! - a line-count threshold above which the quadratic exact algorithm is
//!   replaced by the linear set-based fallback.

use serde::{Deserialize, Serialize};

/// Character budget per input. Longer inputs are cut to this many chars.
pub const CHAR_LIMIT: usize = 20_000;

/// Largest line count (per side) for which the exact LCS diff runs.
pub const MAX_LINES: usize = 500;

/// Configurable bounds for a diff call.
///
/// `Default` yields [`CHAR_LIMIT`] and [`MAX_LINES`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffLimits {
    /// Maximum characters considered from each input.
    pub char_limit: usize,
    /// Maximum lines per side for the exact algorithm.
    pub max_lines: usize,
}

impl Default for DiffLimits {
    fn default() -> Self {
        Self {
            char_limit: CHAR_LIMIT,
            max_lines: MAX_LINES,
        }
    }
}

impl DiffLimits {
    /// Limits that never truncate and always run the exact algorithm.
    ///
    /// Only for callers that already bound their input size.
    pub fn unbounded() -> Self {
        Self {
            char_limit: usize::MAX,
            max_lines: usize::MAX,
        }
    }
}

/// Both inputs after the character guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Guarded<'a> {
    pub old: &'a str,
    pub new: &'a str,
    /// `true` if either input exceeded the character budget.
    pub truncated: bool,
}

/// Prefix of `text` holding at most `limit` chars, and whether anything was cut.
///
/// Cuts on a char boundary, never inside a UTF-8 sequence.
pub fn truncate_chars(text: &str, limit: usize) -> (&str, bool) {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => (&text[..idx], true),
        None => (text, false),
    }
}

/// Apply the character budget to both inputs.
///
/// If either side exceeds `limits.char_limit`, both sides are cut to the
/// budget and `truncated` is set. Otherwise both pass through unchanged.
pub fn apply_char_guard<'a>(old: &'a str, new: &'a str, limits: &DiffLimits) -> Guarded<'a> {
    let (old_cut, old_over) = truncate_chars(old, limits.char_limit);
    let (new_cut, new_over) = truncate_chars(new, limits.char_limit);
    if old_over || new_over {
        Guarded {
            old: old_cut,
            new: new_cut,
            truncated: true,
        }
    } else {
        Guarded {
            old,
            new,
            truncated: false,
        }
    }
}
