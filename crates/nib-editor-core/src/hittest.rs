//! Coordinate-to-caret hit testing.
//!
//! Maps a raw pointer/touch coordinate to a `(line, column)` caret position
//! by geometric containment against rendered line and character boxes. The
//! algorithm is pure; the DOM side supplies geometry through the
//! `LineGeometry` trait and is expected to materialize per-character boxes
//! transiently (split - measure - restore) so steady-state rendering stays
//! cheap.
//!
//! The routine never fails: a point that misses every box clamps to the
//! nearest valid caret position (end of the candidate line).

use crate::document::Document;
use crate::types::{CaretScreenPosition, Point, Rect};

/// Geometry provider for rendered lines.
///
/// The browser implementation reads live layout; tests use fixture rects.
/// `char_rects` may rewrite the line's DOM content while measuring but must
/// restore the plain projection before returning.
pub trait LineGeometry {
    /// Number of rendered line elements.
    fn line_count(&self) -> usize;

    /// Bounding box of one line element, if it exists.
    fn line_rect(&self, line: usize) -> Option<Rect>;

    /// One bounding box per character cell of the line, in order.
    fn char_rects(&self, line: usize) -> Vec<Rect>;
}

/// Result of a hit test: a caret position plus its screen projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub line: usize,
    pub column: usize,
    pub caret: CaretScreenPosition,
}

/// Resolve a screen point to a caret position.
///
/// 1. Candidate line: the first whose vertical span contains `point.y`;
///    if none matches (point below all content), the last line.
/// 2. Scan the candidate's character boxes in document order; the first box
///    containing the point (closed intervals on all four sides) wins, and
///    the caret lands at that box's left edge.
/// 3. No box contains the point (past end of content, or empty line): the
///    caret lands at end-of-line, at the line box's right edge.
pub fn locate(point: Point, geometry: &impl LineGeometry, doc: &Document) -> Hit {
    let line = candidate_line(point, geometry, doc);
    let line_rect = geometry.line_rect(line).unwrap_or_default();
    let line_len = doc.line(line).map(|l| l.len()).unwrap_or(0);

    for (column, rect) in geometry.char_rects(line).iter().enumerate() {
        if rect.contains(point) {
            tracing::trace!(target: "nib::hit", line, column, "character hit");
            return Hit {
                line,
                column,
                caret: CaretScreenPosition::new(rect.left, line_rect.top),
            };
        }
    }

    tracing::trace!(target: "nib::hit", line, column = line_len, "end-of-line fallback");
    Hit {
        line,
        column: line_len,
        caret: CaretScreenPosition::new(line_rect.right(), line_rect.top),
    }
}

/// Project the model caret to screen coordinates.
///
/// Inverse direction of `locate`: used by the caret presenter after every
/// edit. A caret inside the line sits at its character's left edge; a caret
/// at end-of-line sits at the line box's right edge. Degenerate geometry
/// (document momentarily empty) clamps to the origin of whatever line box
/// exists.
pub fn caret_screen_position(
    geometry: &impl LineGeometry,
    caret: crate::types::Caret,
) -> CaretScreenPosition {
    let line_rect = geometry.line_rect(caret.line).unwrap_or_default();
    let rects = geometry.char_rects(caret.line);
    match rects.get(caret.column) {
        Some(rect) => CaretScreenPosition::new(rect.left, line_rect.top),
        None => CaretScreenPosition::new(line_rect.right(), line_rect.top),
    }
}

fn candidate_line(point: Point, geometry: &impl LineGeometry, doc: &Document) -> usize {
    let count = geometry.line_count().min(doc.line_count());
    for line in 0..count {
        if let Some(rect) = geometry.line_rect(line) {
            if rect.contains_y(point.y) {
                return line;
            }
        }
    }
    count.saturating_sub(1)
}
