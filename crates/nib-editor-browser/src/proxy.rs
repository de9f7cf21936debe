//! The hidden proxy input bridge.
//!
//! In fallback mode the platform's key events need a real focusable input to
//! land in (and the soft keyboard only appears for one), so the widget keeps
//! a visually hidden input focused while editing. Its events are translated
//! into semantic `EditAction`s - this bridge is the sole producer of text
//! mutations in fallback mode.
//!
//! The input's own value buffer is drained to empty immediately after each
//! consumption (consume-then-clear); anything left behind would be
//! re-inserted on the next value change.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use smol_str::SmolStr;
use wasm_bindgen::JsCast;

use nib_editor_core::{EditAction, PlatformError, apply_action, caret_screen_position};

use crate::caret::CaretPresenter;
use crate::hit::DomLineGeometry;
use crate::render;
use crate::widget::WidgetState;

/// Create the hidden input element.
///
/// Hidden by stylesheet (moved off-screen), never `display: none` - a
/// non-rendered input cannot hold focus or summon the soft keyboard.
pub fn build_input(dom: &web_sys::Document) -> Result<web_sys::HtmlInputElement, PlatformError> {
    let input: web_sys::HtmlInputElement = dom
        .create_element("input")
        .map_err(|e| PlatformError(format!("create_element failed: {e:?}")))?
        .dyn_into()
        .map_err(|_| PlatformError("proxy element is not an HtmlInputElement".into()))?;
    input
        .set_attribute("type", "text")
        .map_err(|e| PlatformError(format!("set_attribute failed: {e:?}")))?;
    input.set_class_name("nib-proxy-input");
    Ok(input)
}

/// Wire the proxy input's key and value-change events to the model.
pub fn wire(
    input: &web_sys::HtmlInputElement,
    state: Rc<RefCell<WidgetState>>,
    surface: web_sys::HtmlElement,
    presenter: Rc<CaretPresenter>,
) -> Vec<EventListener> {
    let mut listeners = Vec::with_capacity(2);

    {
        let state = state.clone();
        let surface = surface.clone();
        let presenter = presenter.clone();
        listeners.push(EventListener::new(input, "keydown", move |event| {
            let Some(key_event) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
                return;
            };
            let action = match key_event.key().as_str() {
                "Backspace" => EditAction::DeleteBackward,
                "Enter" => EditAction::InsertNewline,
                _ => return,
            };
            event.prevent_default();
            apply_and_present(&state, &surface, &presenter, &action);
        }));
    }

    {
        let target = input.clone();
        let input = input.clone();
        listeners.push(EventListener::new(&target, "input", move |_event| {
            // The platform has committed text into the hidden input
            // (post-composition). Treat the whole held value as the
            // inserted delta, then clear it so it never accumulates.
            let value = input.value();
            if value.is_empty() {
                return;
            }
            input.set_value("");
            tracing::trace!(target: "nib::proxy", len = value.len(), "consume proxy value");
            apply_and_present(
                &state,
                &surface,
                &presenter,
                &EditAction::Insert(SmolStr::new(&value)),
            );
        }));
    }

    listeners
}

/// Apply an action, re-render the affected line(s), reposition the caret.
///
/// Every mutation goes through here so the renderer and presenter can never
/// drift from the model.
pub(crate) fn apply_and_present(
    state: &Rc<RefCell<WidgetState>>,
    surface: &web_sys::HtmlElement,
    presenter: &CaretPresenter,
    action: &EditAction,
) {
    let mut state = state.borrow_mut();
    let Some(info) = apply_action(&mut state.document, action) else {
        return;
    };
    if let Err(err) = render::apply_edit(surface, &state.document, &info) {
        tracing::warn!(target: "nib::proxy", %err, "render update failed");
    }
    let geometry = DomLineGeometry::new(surface, &state.document);
    let position = caret_screen_position(&geometry, state.document.caret());
    presenter.place(position);
}
