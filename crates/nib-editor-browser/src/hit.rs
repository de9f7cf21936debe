//! Live-layout geometry source for the core hit tester.
//!
//! Implements `LineGeometry` by reading bounding boxes from the rendered
//! line elements. Character boxes are measured through a transient
//! per-character materialization: the line's content is swapped to marker
//! spans, measured, and restored to the plain projection before the call
//! returns, so steady-state rendering stays cheap.

use wasm_bindgen::JsCast;

use nib_editor_core::{Document, LineGeometry, Rect};

use crate::render;

/// Geometry provider over a widget's line surface.
pub struct DomLineGeometry<'a> {
    surface: &'a web_sys::Element,
    doc: &'a Document,
}

impl<'a> DomLineGeometry<'a> {
    pub fn new(surface: &'a web_sys::Element, doc: &'a Document) -> Self {
        Self { surface, doc }
    }
}

impl LineGeometry for DomLineGeometry<'_> {
    fn line_count(&self) -> usize {
        self.surface.child_element_count() as usize
    }

    fn line_rect(&self, line: usize) -> Option<Rect> {
        let el = render::line_element(self.surface, line)?;
        Some(rect_from_dom(&el.get_bounding_client_rect()))
    }

    fn char_rects(&self, line: usize) -> Vec<Rect> {
        let Some(el) = render::line_element(self.surface, line) else {
            return Vec::new();
        };
        let Some(model_line) = self.doc.line(line) else {
            return Vec::new();
        };
        if model_line.is_empty() {
            return Vec::new();
        }

        render::materialize_chars(&el, model_line);
        let mut rects = Vec::with_capacity(model_line.len());
        if let Ok(spans) = el.query_selector_all("span.ch") {
            for i in 0..spans.length() {
                if let Some(span) = spans.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok())
                {
                    rects.push(rect_from_dom(&span.get_bounding_client_rect()));
                }
            }
        }
        // Restore plain content before anything else can observe the line.
        render::render_line(&el, model_line);

        if rects.len() != model_line.len() {
            tracing::warn!(
                target: "nib::hit",
                line,
                measured = rects.len(),
                expected = model_line.len(),
                "character box count mismatch"
            );
        }
        rects
    }
}

fn rect_from_dom(rect: &web_sys::DomRect) -> Rect {
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}
