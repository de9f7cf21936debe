//! Core widget types: caret, geometry, and pointer gesture state.
//!
//! These types are platform-agnostic. Screen-space values only appear as
//! *inputs* to hit testing and *outputs* for caret presentation - layout never
//! feeds back into the document model.

/// An ephemeral pointer/touch coordinate sample.
///
/// Recomputed on every pointer event, never persisted beyond the gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned bounding box read from live layout.
///
/// Derived state: recomputed on demand by the hit tester, never cached,
/// since any edit invalidates it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Containment test, closed on all four sides.
    pub fn contains(&self, point: Point) -> bool {
        self.left <= point.x
            && point.x <= self.right()
            && self.top <= point.y
            && point.y <= self.bottom()
    }

    /// Vertical-span containment only (closed interval).
    pub fn contains_y(&self, y: f64) -> bool {
        self.top <= y && y <= self.bottom()
    }
}

/// Caret position as an index pair into the document.
///
/// `line` references the active line; `column` is a character index in
/// `[0, line_len]`. Column 0 means "before the first character", column ==
/// line length means "after the last character".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Caret {
    pub line: usize,
    pub column: usize,
}

impl Caret {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Screen coordinates for the visible caret marker.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CaretScreenPosition {
    pub x: f64,
    pub y: f64,
}

impl CaretScreenPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Per-widget pointer gesture tracking.
///
/// Replaces flag state hung off DOM nodes: each widget instance owns one of
/// these and threads it through its own handlers. Motion events arriving
/// while no press is active are ignored (stray moves from unrelated
/// gestures). Any motion during an active press marks the gesture as a drag,
/// which suppresses character-level hit testing and the context-menu toggle
/// on release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GestureState {
    pointer_down: bool,
    dragged: bool,
}

/// Outcome of a pointer release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureEnd {
    /// A press was actually in progress when the release arrived.
    pub was_active: bool,
    /// At least one motion event occurred during the press.
    pub was_drag: bool,
}

impl GestureState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer went down: start tracking a fresh gesture.
    pub fn press(&mut self) {
        self.pointer_down = true;
        self.dragged = false;
    }

    /// Pointer moved. Returns true if the motion belongs to an active
    /// gesture (and has therefore marked it a drag); false for stray moves.
    pub fn motion(&mut self) -> bool {
        if !self.pointer_down {
            return false;
        }
        self.dragged = true;
        true
    }

    /// Pointer went up: end the gesture and report how it ended.
    pub fn release(&mut self) -> GestureEnd {
        let end = GestureEnd {
            was_active: self.pointer_down,
            was_drag: self.pointer_down && self.dragged,
        };
        self.pointer_down = false;
        self.dragged = false;
        end
    }

    pub fn is_pressed(&self) -> bool {
        self.pointer_down
    }
}
