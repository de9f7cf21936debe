//! Line rendering: projecting the document model into line elements.
//!
//! One block element per line, children of the line surface in document
//! order. Rendering a line never touches its siblings. The per-character
//! projection exists only transiently during a hit-test pass; steady state
//! is always the plain projection.

use wasm_bindgen::JsCast;

use nib_editor_core::{Document, EditInfo, EditKind, Line, PlatformError};

/// Class of every rendered line element.
pub const LINE_CLASS: &str = "nib-line";

/// Create an element for a line and render its plain projection.
pub fn create_line_element(
    dom: &web_sys::Document,
    line: &Line,
) -> Result<web_sys::HtmlElement, PlatformError> {
    let el: web_sys::HtmlElement = dom
        .create_element("div")
        .map_err(|e| PlatformError(format!("create_element failed: {e:?}")))?
        .dyn_into()
        .map_err(|_| PlatformError("line element is not an HtmlElement".into()))?;
    el.set_class_name(LINE_CLASS);
    render_line(&el, line);
    Ok(el)
}

/// Re-render one line element from the model (plain projection).
///
/// An empty line gets the placeholder break marker so it keeps vertical
/// space and stays hit-testable.
pub fn render_line(el: &web_sys::Element, line: &Line) {
    el.set_inner_html(&line.markup());
}

/// Swap a line element to the per-character projection for hit testing.
pub fn materialize_chars(el: &web_sys::Element, line: &Line) {
    el.set_inner_html(&line.char_markup());
}

/// The rendered element for a line index, if it exists.
pub fn line_element(surface: &web_sys::Element, index: usize) -> Option<web_sys::Element> {
    surface.children().item(index as u32)
}

/// Apply one edit's rendering consequences to the line surface.
///
/// Dispatches on the edit kind so only affected lines reflow: an in-place
/// edit re-renders one element, a newline re-renders the split line and
/// inserts one element, a merge removes one element and re-renders the
/// merge target.
pub fn apply_edit(
    surface: &web_sys::Element,
    doc: &Document,
    info: &EditInfo,
) -> Result<(), PlatformError> {
    match info.kind {
        EditKind::Edited => {
            let el = line_element(surface, info.line)
                .ok_or_else(|| PlatformError(format!("no element for line {}", info.line)))?;
            let line = doc
                .line(info.line)
                .ok_or_else(|| PlatformError(format!("no model line {}", info.line)))?;
            render_line(&el, line);
        }
        EditKind::LineInserted { split_from } => {
            let dom = gloo_utils::document();
            let vacated = line_element(surface, split_from)
                .ok_or_else(|| PlatformError(format!("no element for line {split_from}")))?;
            let vacated_line = doc
                .line(split_from)
                .ok_or_else(|| PlatformError(format!("no model line {split_from}")))?;
            render_line(&vacated, vacated_line);

            let new_line = doc
                .line(info.line)
                .ok_or_else(|| PlatformError(format!("no model line {}", info.line)))?;
            let new_el = create_line_element(&dom, new_line)?;
            let before = line_element(surface, info.line);
            let before_node: Option<&web_sys::Node> = before.as_ref().map(|el| el.as_ref());
            surface
                .insert_before(&new_el, before_node)
                .map_err(|e| PlatformError(format!("insert_before failed: {e:?}")))?;
        }
        EditKind::LineMerged { into } => {
            if let Some(removed) = line_element(surface, info.line) {
                removed.remove();
            }
            let el = line_element(surface, into)
                .ok_or_else(|| PlatformError(format!("no element for line {into}")))?;
            let line = doc
                .line(into)
                .ok_or_else(|| PlatformError(format!("no model line {into}")))?;
            render_line(&el, line);
        }
    }
    Ok(())
}

/// Render the full document into an empty surface (attach time only).
pub fn render_all(
    dom: &web_sys::Document,
    surface: &web_sys::Element,
    doc: &Document,
) -> Result<(), PlatformError> {
    surface.set_inner_html("");
    for index in 0..doc.line_count() {
        let line = doc
            .line(index)
            .ok_or_else(|| PlatformError(format!("no model line {index}")))?;
        let el = create_line_element(dom, line)?;
        surface
            .append_child(&el)
            .map_err(|e| PlatformError(format!("append_child failed: {e:?}")))?;
    }
    Ok(())
}
