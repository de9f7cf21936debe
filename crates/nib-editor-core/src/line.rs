//! A single editable line: an ordered sequence of character cells.
//!
//! Each cell is one rendered unit. A literal space is normalized to a
//! non-breaking space on insertion so the cell keeps visible width for hit
//! testing (an ordinary trailing space collapses to zero width in layout).
//! HTML-significant characters are escaped at projection time, not in
//! storage, so `text()` round-trips the logical content.

use smol_str::SmolStr;

/// Non-breaking space, the stored form of a literal space cell.
pub const NBSP: char = '\u{a0}';

/// One line of the document: a sequence of single-character cells.
///
/// A line may be empty; the markup projection then emits a placeholder break
/// marker so the line still occupies vertical space and is hit-testable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    cells: Vec<SmolStr>,
}

impl Line {
    pub fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// Build a line from logical text (spaces get normalized).
    pub fn from_text(text: &str) -> Self {
        let mut line = Self::new();
        line.insert_str(0, text);
        line
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Insert logical text at a cell index, one cell per character.
    ///
    /// Returns the number of cells inserted. Out-of-range indices clamp to
    /// the end of the line.
    pub fn insert_str(&mut self, at: usize, text: &str) -> usize {
        let at = at.min(self.cells.len());
        let mut inserted = 0;
        for (i, ch) in text.chars().enumerate() {
            self.cells.insert(at + i, normalize_cell(ch));
            inserted += 1;
        }
        inserted
    }

    /// Remove the cell at the given index. No-op when out of range.
    pub fn remove(&mut self, at: usize) {
        if at < self.cells.len() {
            self.cells.remove(at);
        }
    }

    /// Split the line at a cell index, returning the tail.
    pub fn split_off(&mut self, at: usize) -> Line {
        let at = at.min(self.cells.len());
        Line {
            cells: self.cells.split_off(at),
        }
    }

    /// Append all cells of another line (backspace merge).
    pub fn append(&mut self, mut tail: Line) {
        self.cells.append(&mut tail.cells);
    }

    /// Logical text content, with non-breaking spaces mapped back to spaces.
    pub fn text(&self) -> String {
        let mut out = String::with_capacity(self.cells.len());
        for cell in &self.cells {
            for ch in cell.chars() {
                out.push(if ch == NBSP { ' ' } else { ch });
            }
        }
        out
    }

    /// Plain markup projection: escaped cells, or the placeholder break
    /// marker when the line is empty.
    pub fn markup(&self) -> String {
        if self.cells.is_empty() {
            return "<br>".to_string();
        }
        let mut out = String::new();
        for cell in &self.cells {
            push_escaped(&mut out, cell);
        }
        out
    }

    /// Per-character markup projection for transient hit-test
    /// materialization: one marker span per cell.
    ///
    /// The renderer swaps this in only for the duration of a hit-test pass,
    /// then restores the plain projection.
    pub fn char_markup(&self) -> String {
        if self.cells.is_empty() {
            return "<br>".to_string();
        }
        let mut out = String::new();
        for cell in &self.cells {
            out.push_str("<span class=\"ch\">");
            push_escaped(&mut out, cell);
            out.push_str("</span>");
        }
        out
    }
}

fn normalize_cell(ch: char) -> SmolStr {
    if ch == ' ' {
        SmolStr::new_inline("\u{a0}")
    } else {
        let mut buf = [0u8; 4];
        SmolStr::new(ch.encode_utf8(&mut buf))
    }
}

fn push_escaped(out: &mut String, cell: &str) {
    for ch in cell.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            NBSP => out.push_str("&nbsp;"),
            other => out.push(other),
        }
    }
}
