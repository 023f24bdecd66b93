//! Linear-time set-membership diff for inputs too large for the LCS table.
//!
//! Walks every old line in order, then every new line absent from the old
//! side. A line is `Equal` if it occurs anywhere on both sides, `Removed` if
//! only in old, `Added` if only in new. Repeated lines and reordering are not
//! distinguished, so the script is not minimal.

use std::collections::HashSet;

use crate::ops::EditOp;

/// Set-based edit script from `old` to `new`.
pub fn set_diff(old: &[&str], new: &[&str]) -> Vec<EditOp> {
    let in_old: HashSet<&str> = old.iter().copied().collect();
    let in_new: HashSet<&str> = new.iter().copied().collect();

    let appended = new.iter().copied().filter(|line| !in_old.contains(line));

    old.iter()
        .copied()
        .chain(appended)
        .map(|line| match (in_old.contains(line), in_new.contains(line)) {
            (true, true) => EditOp::Equal(line.to_string()),
            (true, false) => EditOp::Removed(line.to_string()),
            _ => EditOp::Added(line.to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_changed_line() {
        let ops = set_diff(&["a", "b", "c"], &["a", "x", "c"]);
        assert_eq!(
            ops,
            vec![
                EditOp::Equal("a".into()),
                EditOp::Removed("b".into()),
                EditOp::Equal("c".into()),
                EditOp::Added("x".into()),
            ]
        );
    }

    #[test]
    fn reorder_is_invisible() {
        let ops = set_diff(&["a", "b"], &["b", "a"]);
        assert!(ops.iter().all(|op| !op.is_change()));
        assert_eq!(ops.len(), 2);
    }

    #[test]
    fn duplicates_are_not_counted_positionally() {
        // An extra copy of a line already on the old side is not reported.
        let ops = set_diff(&["a", "b"], &["a", "a", "b"]);
        assert_eq!(ops.len(), 2);
        assert!(ops.iter().all(|op| !op.is_change()));

        // Every old occurrence is walked, even repeated ones.
        let ops = set_diff(&["a", "a"], &["b"]);
        assert_eq!(ops.len(), 3);
    }

    #[test]
    fn old_order_is_preserved() {
        let old = ["z", "y", "x"];
        let ops = set_diff(&old, &["x"]);
        assert_eq!(crate::ops::old_lines(&ops), old.to_vec());
    }

    #[test]
    fn empty_sides() {
        assert!(set_diff(&[], &[]).is_empty());
        assert_eq!(set_diff(&[], &["n"]), vec![EditOp::Added("n".into())]);
        assert_eq!(set_diff(&["o"], &[]), vec![EditOp::Removed("o".into())]);
    }
}
