//! Line-level edit operations.
//!
//! An ordered `[EditOp]` reconstructs both inputs: the non-`Added` ops give
//! the old lines and the non-`Removed` ops give the new lines.

use serde::{Deserialize, Serialize};

/// A single line-level edit.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "camelCase")]
pub enum EditOp {
    /// Line present unchanged in both inputs.
    Equal(String),
    /// Line present only in the old input.
    Removed(String),
    /// Line present only in the new input.
    Added(String),
}

impl EditOp {
    /// The line text carried by this op.
    pub fn text(&self) -> &str {
        match self {
            EditOp::Equal(t) | EditOp::Removed(t) | EditOp::Added(t) => t,
        }
    }

    /// Returns `true` for `Added` and `Removed`.
    pub fn is_change(&self) -> bool {
        !matches!(self, EditOp::Equal(_))
    }
}

/// Lines of the old input, recovered from an edit script.
pub fn old_lines(ops: &[EditOp]) -> Vec<&str> {
    ops.iter()
        .filter(|op| !matches!(op, EditOp::Added(_)))
        .map(EditOp::text)
        .collect()
}

/// Lines of the new input, recovered from an edit script.
pub fn new_lines(ops: &[EditOp]) -> Vec<&str> {
    ops.iter()
        .filter(|op| !matches!(op, EditOp::Removed(_)))
        .map(EditOp::text)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script() -> Vec<EditOp> {
        vec![
            EditOp::Equal("a".into()),
            EditOp::Removed("b".into()),
            EditOp::Added("x".into()),
            EditOp::Equal("c".into()),
        ]
    }

    #[test]
    fn text_and_is_change() {
        let ops = script();
        assert_eq!(ops[1].text(), "b");
        assert!(!ops[0].is_change());
        assert!(ops[1].is_change());
        assert!(ops[2].is_change());
    }

    #[test]
    fn reconstruct_both_sides() {
        let ops = script();
        assert_eq!(old_lines(&ops), vec!["a", "b", "c"]);
        assert_eq!(new_lines(&ops), vec!["a", "x", "c"]);
    }

    #[test]
    fn empty_script_reconstructs_nothing() {
        assert!(old_lines(&[]).is_empty());
        assert!(new_lines(&[]).is_empty());
    }

    #[test]
    fn serde_shape() {
        let json = serde_json::to_string(&EditOp::Removed("b".into())).unwrap();
        assert_eq!(json, r#"{"kind":"removed","text":"b"}"#);
    }
}
