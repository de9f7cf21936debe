//! The document model: an ordered sequence of lines plus a single caret.
//!
//! The document is the authoritative text state. It never stores layout
//! values; screen geometry is projected from it on demand by the hit tester
//! and caret presenter. Every edit operation returns an `EditInfo` telling
//! the renderer which line(s) changed, so unaffected lines are never
//! reflowed.
//!
//! Invariants, upheld by every operation:
//! - the document always contains at least one line
//! - `caret.column` is within `[0, len(active line)]`

use crate::line::Line;
use crate::types::Caret;

/// Which structural change an edit performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    /// In-place content change on `EditInfo::line`.
    Edited,
    /// A new line was inserted at `EditInfo::line`, splitting `split_from`.
    LineInserted { split_from: usize },
    /// The line at `EditInfo::line` was removed and merged into `into`.
    LineMerged { into: usize },
}

/// Render-relevant summary of one edit operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditInfo {
    /// Index of the line the structural change happened at (see `kind`).
    pub line: usize,
    pub kind: EditKind,
}

/// The per-line, per-character text model with a single caret.
///
/// Created with exactly one empty line and the caret at `(0, 0)`. Owned
/// exclusively by one widget instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<Line>,
    caret: Caret,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            lines: vec![Line::new()],
            caret: Caret::default(),
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    /// The line currently containing the caret; target of all edits.
    pub fn active_line(&self) -> &Line {
        &self.lines[self.caret.line]
    }

    pub fn caret(&self) -> Caret {
        self.caret
    }

    /// Move the caret, clamping both indices to valid bounds.
    ///
    /// Used by the hit tester on pointer release; a geometry miss can only
    /// produce a nearest-valid position, never a corrupt one.
    pub fn set_caret(&mut self, line: usize, column: usize) {
        let line = line.min(self.lines.len() - 1);
        let column = column.min(self.lines[line].len());
        self.caret = Caret::new(line, column);
    }

    /// Insert text at the caret, advancing the caret past it.
    ///
    /// Returns `None` (no-op) for empty input. A literal space is normalized
    /// to its non-breaking form by the line (see `line` module).
    pub fn insert_at_caret(&mut self, text: &str) -> Option<EditInfo> {
        if text.is_empty() {
            return None;
        }
        let line = self.caret.line;
        let inserted = self.lines[line].insert_str(self.caret.column, text);
        self.caret.column += inserted;
        tracing::trace!(target: "nib::document", line, inserted, "insert at caret");
        Some(EditInfo {
            line,
            kind: EditKind::Edited,
        })
    }

    /// Delete one character immediately before the caret.
    ///
    /// At column 0 on an empty line (other than the first), the line is
    /// removed and the previous line becomes active with the caret at its
    /// end. At the absolute start of the document this is a no-op,
    /// repeatable indefinitely without state change.
    pub fn delete_before_caret(&mut self) -> Option<EditInfo> {
        if self.caret.column > 0 {
            let line = self.caret.line;
            self.lines[line].remove(self.caret.column - 1);
            self.caret.column -= 1;
            return Some(EditInfo {
                line,
                kind: EditKind::Edited,
            });
        }

        // Column 0: merge only an empty line into its predecessor. The
        // placeholder break is a render artifact, so "empty" covers it.
        if self.caret.line == 0 || !self.active_line().is_empty() {
            return None;
        }

        let removed = self.caret.line;
        self.lines.remove(removed);
        self.caret.line -= 1;
        self.caret.column = self.lines[self.caret.line].len();
        tracing::trace!(target: "nib::document", removed, into = self.caret.line, "merge line");
        Some(EditInfo {
            line: removed,
            kind: EditKind::LineMerged {
                into: self.caret.line,
            },
        })
    }

    /// Insert a new line after the active one and make it active.
    ///
    /// The tail of the active line after the caret moves to the new line;
    /// when the caret is at end-of-line the new line starts empty. The
    /// vacated line keeps its placeholder break if it ended up empty.
    pub fn insert_newline(&mut self) -> EditInfo {
        let from = self.caret.line;
        let tail = self.lines[from].split_off(self.caret.column);
        let new_line = from + 1;
        self.lines.insert(new_line, tail);
        self.caret = Caret::new(new_line, 0);
        tracing::trace!(target: "nib::document", from, new_line, "insert newline");
        EditInfo {
            line: new_line,
            kind: EditKind::LineInserted { split_from: from },
        }
    }

    /// Logical document text, lines joined with `\n`.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&line.text());
        }
        out
    }

    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        assert!(!self.lines.is_empty(), "document lost its last line");
        assert!(self.caret.line < self.lines.len(), "caret line out of range");
        assert!(
            self.caret.column <= self.lines[self.caret.line].len(),
            "caret column out of range"
        );
    }
}
