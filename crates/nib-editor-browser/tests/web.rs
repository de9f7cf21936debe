//! WASM browser tests for nib-editor-browser.
//!
//! Run with: `wasm-pack test --headless --firefox` or `--chrome`

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use wasm_bindgen::JsCast;

use nib_editor_browser::hit::DomLineGeometry;
use nib_editor_browser::{
    Caret, EditStrategy, EditorOptions, EditorWidget, LineGeometry, attach_with_strategy,
};

fn make_target() -> web_sys::HtmlElement {
    let dom = gloo_utils::document();
    let target: web_sys::HtmlElement = dom
        .create_element("div")
        .unwrap()
        .dyn_into()
        .expect("target is an HtmlElement");
    gloo_utils::body().append_child(&target).unwrap();
    target
}

fn attach_fallback(target: &web_sys::HtmlElement) -> EditorWidget {
    attach_with_strategy(target, EditorOptions::default(), EditStrategy::Fallback)
        .expect("attach failed")
}

fn type_text(widget: &EditorWidget, text: &str) {
    let input = widget.proxy_input().expect("fallback mode");
    input.set_value(text);
    let event = web_sys::Event::new("input").unwrap();
    input.dispatch_event(&event).unwrap();
}

fn dispatch_mouse(target: &web_sys::EventTarget, event_type: &str, x: f64, y: f64) {
    let init = web_sys::MouseEventInit::new();
    init.set_bubbles(true);
    init.set_client_x(x as i32);
    init.set_client_y(y as i32);
    let event =
        web_sys::MouseEvent::new_with_mouse_event_init_dict(event_type, &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

fn tap(surface: &web_sys::HtmlElement, x: f64, y: f64) {
    dispatch_mouse(surface, "mousedown", x, y);
    dispatch_mouse(surface, "mouseup", x, y);
}

fn press_key(widget: &EditorWidget, key: &str) {
    let input = widget.proxy_input().expect("fallback mode");
    let init = web_sys::KeyboardEventInit::new();
    init.set_key(key);
    let event =
        web_sys::KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    input.dispatch_event(&event).unwrap();
}

// === Markup contract ===

#[wasm_bindgen_test]
fn toolbar_has_four_actions() {
    let target = make_target();
    let _widget = attach_fallback(&target);

    let items = target.query_selector_all("ul.nav li a").unwrap();
    assert_eq!(items.length(), 4);
    target.remove();
}

#[wasm_bindgen_test]
fn toolbar_click_toggles_active_class_only() {
    let target = make_target();
    let widget = attach_fallback(&target);

    let anchor: web_sys::HtmlElement = target
        .query_selector("ul.nav li a")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    let item: web_sys::Element = anchor.parent_element().unwrap();

    anchor.click();
    assert!(item.class_list().contains("active"));
    anchor.click();
    assert!(!item.class_list().contains("active"));

    // Decorative only: the model is untouched.
    assert_eq!(widget.text(), Some(String::new()));
    target.remove();
}

#[wasm_bindgen_test]
fn native_mode_builds_editable_surface() {
    let target = make_target();
    let widget = attach_with_strategy(&target, EditorOptions::default(), EditStrategy::Native)
        .expect("attach failed");

    assert_eq!(widget.strategy(), EditStrategy::Native);
    assert!(widget.text().is_none());
    let editable = target
        .query_selector("[contenteditable='true']")
        .unwrap()
        .expect("native editable surface");
    assert!(editable.class_list().contains("contenteditable"));
    // No fallback scaffolding in native mode.
    assert!(target.query_selector(".nib-proxy-input").unwrap().is_none());
    assert!(target.query_selector(".nib-caret").unwrap().is_none());
    target.remove();
}

#[wasm_bindgen_test]
fn fallback_mode_builds_engine_scaffolding() {
    let target = make_target();
    let widget = attach_fallback(&target);

    assert_eq!(widget.strategy(), EditStrategy::Fallback);
    assert!(target.query_selector(".nib-proxy-input").unwrap().is_some());
    assert!(target.query_selector(".nib-caret").unwrap().is_some());
    assert!(target.query_selector(".nib-menu").unwrap().is_some());

    // One empty line, rendered with the placeholder break.
    let surface = widget.surface().unwrap();
    assert_eq!(surface.child_element_count(), 1);
    let line = surface.first_element_child().unwrap();
    assert_eq!(line.inner_html(), "<br>");
    target.remove();
}

// === Proxy input bridge ===

#[wasm_bindgen_test]
fn typed_value_is_consumed_then_cleared() {
    let target = make_target();
    let widget = attach_fallback(&target);

    type_text(&widget, "a b");
    assert_eq!(widget.text(), Some("a b".to_string()));
    assert_eq!(widget.caret(), Some(Caret::new(0, 3)));
    // Consume-then-clear: nothing accumulates for the next key event.
    assert_eq!(widget.proxy_input().unwrap().value(), "");

    // The space renders as a non-breaking space cell.
    let line = widget.surface().unwrap().first_element_child().unwrap();
    assert_eq!(line.inner_html(), "a\u{a0}b");
    target.remove();
}

#[wasm_bindgen_test]
fn enter_key_inserts_a_rendered_line() {
    let target = make_target();
    let widget = attach_fallback(&target);

    press_key(&widget, "Enter");
    assert_eq!(widget.caret(), Some(Caret::new(1, 0)));

    let surface = widget.surface().unwrap();
    assert_eq!(surface.child_element_count(), 2);
    // The vacated empty line keeps its placeholder break.
    assert_eq!(surface.first_element_child().unwrap().inner_html(), "<br>");
    target.remove();
}

#[wasm_bindgen_test]
fn backspace_merges_line_and_updates_dom() {
    let target = make_target();
    let widget = attach_fallback(&target);

    type_text(&widget, "hi");
    press_key(&widget, "Enter");
    assert_eq!(widget.surface().unwrap().child_element_count(), 2);

    press_key(&widget, "Backspace");
    let surface = widget.surface().unwrap();
    assert_eq!(surface.child_element_count(), 1);
    assert_eq!(widget.text(), Some("hi".to_string()));
    assert_eq!(widget.caret(), Some(Caret::new(0, 2)));
    target.remove();
}

#[wasm_bindgen_test]
fn backspace_at_document_start_is_harmless() {
    let target = make_target();
    let widget = attach_fallback(&target);

    for _ in 0..3 {
        press_key(&widget, "Backspace");
    }
    assert_eq!(widget.text(), Some(String::new()));
    assert_eq!(widget.surface().unwrap().child_element_count(), 1);
    target.remove();
}

// === Hit-test geometry ===

#[wasm_bindgen_test]
fn char_rects_measure_and_restore_plain_content() {
    let target = make_target();
    let widget = attach_fallback(&target);
    type_text(&widget, "abc");

    let surface = widget.surface().unwrap();
    let doc = nib_editor_core::Document::new();
    // Rebuild the same content in a local model for geometry queries.
    let mut doc = doc;
    doc.insert_at_caret("abc");

    let geometry = DomLineGeometry::new(surface, &doc);
    let rects = geometry.char_rects(0);
    assert_eq!(rects.len(), 3);
    // Left-to-right, non-overlapping order.
    assert!(rects[0].left <= rects[1].left);
    assert!(rects[1].left <= rects[2].left);

    // Transient materialization was reverted to the plain projection.
    assert!(surface.query_selector("span.ch").unwrap().is_none());
    assert_eq!(
        surface.first_element_child().unwrap().inner_html(),
        "abc"
    );
    target.remove();
}

#[wasm_bindgen_test]
fn caret_marker_clamps_into_content_region() {
    let target = make_target();
    let widget = attach_fallback(&target);

    let presenter = widget.presenter().unwrap();
    presenter.place(nib_editor_core::CaretScreenPosition::new(-5000.0, -5000.0));
    let style = presenter.marker().style();
    let left: f64 = style
        .get_property_value("left")
        .unwrap()
        .trim_end_matches("px")
        .parse()
        .unwrap();
    assert!(left >= 0.0);
    target.remove();
}

#[wasm_bindgen_test]
fn menu_toggle_alternates() {
    let target = make_target();
    let widget = attach_fallback(&target);

    let presenter = widget.presenter().unwrap();
    assert!(!presenter.is_menu_open());
    presenter.toggle_menu();
    assert!(presenter.is_menu_open());
    presenter.toggle_menu();
    assert!(!presenter.is_menu_open());
    target.remove();
}

// === Gesture wiring ===

#[wasm_bindgen_test]
fn tap_at_caret_toggles_menu_through_gesture_wiring() {
    let target = make_target();
    let widget = attach_fallback(&target);

    let surface = widget.surface().unwrap();
    let rect = surface.first_element_child().unwrap().get_bounding_client_rect();
    let (x, y) = (rect.left() + 2.0, rect.top() + 2.0);

    // Empty document: the tap resolves to (0, 0), where the caret already
    // sits, so the menu alternates.
    let presenter = widget.presenter().unwrap();
    tap(surface, x, y);
    assert!(presenter.is_menu_open());
    tap(surface, x, y);
    assert!(!presenter.is_menu_open());
    target.remove();
}

#[wasm_bindgen_test]
fn drag_release_does_not_toggle_menu() {
    let target = make_target();
    let widget = attach_fallback(&target);

    let surface = widget.surface().unwrap();
    let rect = surface.first_element_child().unwrap().get_bounding_client_rect();
    let (x, y) = (rect.left() + 2.0, rect.top() + 2.0);

    dispatch_mouse(surface, "mousedown", x, y);
    dispatch_mouse(surface, "mousemove", x + 10.0, y);
    dispatch_mouse(surface, "mouseup", x + 10.0, y);
    assert!(!widget.presenter().unwrap().is_menu_open());
    target.remove();
}

#[wasm_bindgen_test]
fn relocating_tap_dismisses_menu_instead_of_toggling() {
    let target = make_target();
    let widget = attach_fallback(&target);
    type_text(&widget, "ab");
    assert_eq!(widget.caret(), Some(Caret::new(0, 2)));

    let surface = widget.surface().unwrap();
    let rect = surface.first_element_child().unwrap().get_bounding_client_rect();
    let (x, y) = (rect.left() + 1.0, rect.top() + 1.0);

    // The tap lands in the first character's box and moves the caret from
    // column 2 to column 0, so the menu stays closed.
    let presenter = widget.presenter().unwrap();
    tap(surface, x, y);
    assert_eq!(widget.caret(), Some(Caret::new(0, 0)));
    assert!(!presenter.is_menu_open());

    // The same spot again is no longer a relocation: now the menu opens.
    tap(surface, x, y);
    assert_eq!(widget.caret(), Some(Caret::new(0, 0)));
    assert!(presenter.is_menu_open());
    target.remove();
}

// === Focus scope ===

#[wasm_bindgen_test]
fn toolbar_tap_keeps_editing_focus() {
    let target = make_target();
    let widget = attach_fallback(&target);

    let surface = widget.surface().unwrap();
    let rect = surface.first_element_child().unwrap().get_bounding_client_rect();
    tap(surface, rect.left() + 2.0, rect.top() + 2.0);

    let input = widget.proxy_input().unwrap();
    let presenter = widget.presenter().unwrap();
    assert!(presenter.is_menu_open());

    // A press on a toolbar action is inside the widget root: the proxy
    // keeps focus and the menu is untouched.
    let anchor = target.query_selector("ul.nav li a").unwrap().unwrap();
    dispatch_mouse(&anchor, "mousedown", 0.0, 0.0);
    let active = gloo_utils::document().active_element();
    assert!(matches!(active, Some(el) if el.is_same_node(Some(input.as_ref()))));
    assert!(presenter.is_menu_open());
    target.remove();
}

#[wasm_bindgen_test]
fn outside_tap_exits_editing_and_hides_menu() {
    let target = make_target();
    let widget = attach_fallback(&target);
    let outside = make_target();

    let surface = widget.surface().unwrap();
    let rect = surface.first_element_child().unwrap().get_bounding_client_rect();
    tap(surface, rect.left() + 2.0, rect.top() + 2.0);
    assert!(widget.presenter().unwrap().is_menu_open());

    dispatch_mouse(&outside, "mousedown", 0.0, 0.0);
    assert!(!widget.presenter().unwrap().is_menu_open());
    let input = widget.proxy_input().unwrap();
    let active = gloo_utils::document().active_element();
    assert!(!matches!(active, Some(el) if el.is_same_node(Some(input.as_ref()))));
    outside.remove();
    target.remove();
}

#[wasm_bindgen_test]
fn detach_removes_generated_markup() {
    let target = make_target();
    let widget = attach_fallback(&target);
    assert!(target.query_selector(".nib-lines").unwrap().is_some());

    widget.detach();
    assert!(target.query_selector(".nib-lines").unwrap().is_none());
    target.remove();
}
