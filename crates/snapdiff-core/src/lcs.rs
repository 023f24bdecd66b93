//! Exact line diff via a longest-common-subsequence table.
//!
//! O(m·n) time and memory. Callers gate this behind
//! [`DiffLimits::max_lines`](crate::DiffLimits::max_lines).
//!
//! # Tie-break
//!
//! When dropping a line from either side keeps the same LCS length, the
//! backtrack consumes from the *new* side first, so the line is reported as
//! `Added` (and the matching old line surfaces as `Removed` earlier in the
//! script). This picks one fixed script among equally minimal ones.

use crate::ops::EditOp;

/// Row-major `(m + 1) x (n + 1)` LCS length table.
struct LcsTable {
    cols: usize,
    cells: Vec<usize>,
}

impl LcsTable {
    fn build(old: &[&str], new: &[&str]) -> Self {
        let cols = new.len() + 1;
        let mut cells = vec![0usize; (old.len() + 1) * cols];
        for i in 1..=old.len() {
            for j in 1..=new.len() {
                cells[i * cols + j] = if old[i - 1] == new[j - 1] {
                    cells[(i - 1) * cols + (j - 1)] + 1
                } else {
                    cells[(i - 1) * cols + j].max(cells[i * cols + (j - 1)])
                };
            }
        }
        Self { cols, cells }
    }

    fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.cols + j]
    }
}

/// Length of the longest common subsequence of `old` and `new`.
pub fn lcs_len(old: &[&str], new: &[&str]) -> usize {
    LcsTable::build(old, new).get(old.len(), new.len())
}

/// Minimal edit script from `old` to `new`.
pub fn lcs_diff(old: &[&str], new: &[&str]) -> Vec<EditOp> {
    let table = LcsTable::build(old, new);
    let mut ops = Vec::with_capacity(old.len() + new.len());
    let (mut i, mut j) = (old.len(), new.len());

    // Walk back from the bottom-right corner; ops come out in reverse.
    while i > 0 || j > 0 {
        if i > 0 && j > 0 && old[i - 1] == new[j - 1] {
            ops.push(EditOp::Equal(old[i - 1].to_string()));
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table.get(i, j - 1) >= table.get(i - 1, j)) {
            ops.push(EditOp::Added(new[j - 1].to_string()));
            j -= 1;
        } else {
            ops.push(EditOp::Removed(old[i - 1].to_string()));
            i -= 1;
        }
    }

    ops.reverse();
    ops
}
