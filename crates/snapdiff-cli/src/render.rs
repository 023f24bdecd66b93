//! Text rendering of an aligned diff: two columns, a summary banner, and a
//! truncation notice.

use colored::{ColoredString, Colorize};
use snapdiff_core::{ColumnCell, DiffResult};

use crate::config::CliConfig;

const SEPARATOR: &str = " | ";

#[derive(Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Full side-by-side view followed by the summary.
pub fn render_text(result: &DiffResult, config: &CliConfig) -> String {
    let mut out = String::new();
    for (left, right) in result.rows() {
        out.push_str(&render_cell(left, Side::Left, config));
        out.push_str(SEPARATOR);
        out.push_str(render_cell(right, Side::Right, config).trim_end());
        out.push('\n');
    }
    out.push_str(&render_summary(result, config));
    out
}

/// `+added -removed` banner, plus the truncation notice when applicable.
pub fn render_summary(result: &DiffResult, config: &CliConfig) -> String {
    let color = config.render.color;
    let added = paint(format!("+{}", result.added_count), color, |s| s.green());
    let removed = paint(format!("-{}", result.removed_count), color, |s| s.red());
    let mut out = format!("{added} {removed} ({} rows)\n", result.len());
    if result.truncated {
        let notice = format!(
            "note: input longer than {} characters; only the first {} of each side were compared",
            config.limits.char_limit, config.limits.char_limit
        );
        out.push_str(&paint(notice, color, |s| s.yellow()).to_string());
        out.push('\n');
    }
    out
}

fn render_cell(cell: &ColumnCell, side: Side, config: &CliConfig) -> String {
    let width = config.render.width;
    let (marker, text) = match (cell, side) {
        (ColumnCell::Equal(t), _) => (' ', t.as_str()),
        (ColumnCell::OneSided(t), Side::Left) => ('-', t.as_str()),
        (ColumnCell::OneSided(t), Side::Right) => ('+', t.as_str()),
        (ColumnCell::Empty, _) => return " ".repeat(width),
    };

    let body = format!("{marker} {}", clip(text, width - 2));
    let padded = format!("{body:<width$}");
    match marker {
        '-' => paint(padded, config.render.color, |s| s.red()).to_string(),
        '+' => paint(padded, config.render.color, |s| s.green()).to_string(),
        _ => padded,
    }
}

/// At most `max` chars of `text`, ending in `…` when cut.
fn clip(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(max.saturating_sub(1)).collect();
    clipped.push('…');
    clipped
}

fn paint(text: String, color: bool, style: impl Fn(&str) -> ColoredString) -> ColoredString {
    if color {
        style(&text)
    } else {
        text.normal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snapdiff_core::compute_line_diff;

    fn plain(width: usize) -> CliConfig {
        let mut config = CliConfig::default();
        config.render.width = width;
        config.render.color = false;
        config
    }

    #[test]
    fn clip_short_and_long() {
        assert_eq!(clip("abc", 5), "abc");
        assert_eq!(clip("abcdef", 4), "abc…");
        assert_eq!(clip("héllo", 3), "hé…");
    }

    #[test]
    fn rows_are_aligned() {
        let result = compute_line_diff("a\nb\nc", "a\nx\nc");
        let out = render_text(&result, &plain(8));
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "  a      |   a");
        assert_eq!(lines[1], "- b      | ");
        assert_eq!(lines[2], "         | + x");
        assert_eq!(lines[3], "  c      |   c");
        assert_eq!(lines[4], "+1 -1 (4 rows)");
    }

    #[test]
    fn long_lines_are_clipped() {
        let result = compute_line_diff("responsibilities", "responsibilities");
        let out = render_text(&result, &plain(8));
        assert!(out.starts_with("  respo… |   respo…"));
    }

    #[test]
    fn truncation_notice() {
        let long = "z".repeat(snapdiff_core::CHAR_LIMIT + 10);
        let result = compute_line_diff(&long, &long);
        let summary = render_summary(&result, &plain(20));
        assert!(summary.contains("only the first 20000"));

        let short = compute_line_diff("a", "a");
        assert!(!render_summary(&short, &plain(20)).contains("note:"));
    }
}
