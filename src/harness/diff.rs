//! Structured line diff
//!
//! Wraps `similar` so callers inspect each line by kind instead of by the
//! marker character a unified diff would print in front of it.

use similar::{ChangeTag, TextDiff};

/// What happened to a line going from the golden to the produced text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Present in both
    Context,
    /// Present only in the golden text
    Removed,
    /// Present only in the produced text
    Added,
}

/// A single line of diff output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffLine {
    pub kind: LineKind,
    /// Line content without its trailing newline
    pub content: String,
}

impl DiffLine {
    fn new(kind: LineKind, raw: &str) -> Self {
        Self {
            kind,
            content: raw.trim_end_matches('\n').to_string(),
        }
    }
}

impl From<ChangeTag> for LineKind {
    fn from(tag: ChangeTag) -> Self {
        match tag {
            ChangeTag::Equal => LineKind::Context,
            ChangeTag::Delete => LineKind::Removed,
            ChangeTag::Insert => LineKind::Added,
        }
    }
}

/// Line diff from `golden` to `produced`
///
/// Lines keep their terminators while diffing, so a final line with and
/// without a trailing newline compare as different lines.
pub fn line_diff(golden: &str, produced: &str) -> Vec<DiffLine> {
    TextDiff::from_lines(golden, produced)
        .iter_all_changes()
        .map(|change| DiffLine::new(change.tag().into(), change.value()))
        .collect()
}

/// Lines present in the golden text but missing from the produced one
pub fn removed_lines(golden: &str, produced: &str) -> impl Iterator<Item = DiffLine> {
    line_diff(golden, produced)
        .into_iter()
        .filter(|line| line.kind == LineKind::Removed)
}
