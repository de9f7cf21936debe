//! Pointer/touch gesture wiring for the fallback engine.
//!
//! All caret-placement input flows through here: press starts a gesture and
//! focuses the proxy input, motion during a gesture drags the caret marker
//! directly at the raw coordinate (no character resolution, for
//! responsiveness while the finger is moving), and a non-drag release runs
//! the full hit test and moves the model caret. The context menu alternates
//! only on non-drag taps that resolve to the position the caret already
//! holds; a relocating tap dismisses it. A drag release leaves the marker
//! where the drag put it and suppresses both the hit test and the menu
//! toggle.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;

use nib_editor_core::{Caret, CaretScreenPosition, Point, locate};

use crate::caret::CaretPresenter;
use crate::hit::DomLineGeometry;
use crate::widget::WidgetState;

const PRESS_EVENTS: [&str; 2] = ["mousedown", "touchstart"];
const MOTION_EVENTS: [&str; 2] = ["mousemove", "touchmove"];
const RELEASE_EVENTS: [&str; 2] = ["mouseup", "touchend"];

/// Wire the gesture listeners on the line surface.
pub fn wire(
    surface: &web_sys::HtmlElement,
    input: &web_sys::HtmlInputElement,
    state: Rc<RefCell<WidgetState>>,
    presenter: Rc<CaretPresenter>,
) -> Vec<EventListener> {
    let mut listeners = Vec::with_capacity(6);

    for event_type in PRESS_EVENTS {
        let state = state.clone();
        let input = input.clone();
        listeners.push(EventListener::new(surface, event_type, move |_event| {
            let mut state = state.borrow_mut();
            state.gesture.press();
            state.editing = true;
            // Keep the proxy focused so key events have somewhere to land.
            let _ = input.focus();
        }));
    }

    for event_type in MOTION_EVENTS {
        let state = state.clone();
        let presenter = presenter.clone();
        listeners.push(EventListener::new(surface, event_type, move |event| {
            let Some(point) = event_point(event) else {
                return;
            };
            // Ignores stray moves from gestures that started elsewhere.
            if !state.borrow_mut().gesture.motion() {
                return;
            }
            presenter.place(CaretScreenPosition::new(point.x, point.y));
        }));
    }

    for event_type in RELEASE_EVENTS {
        let state = state.clone();
        let presenter = presenter.clone();
        let target = surface.clone();
        let surface = surface.clone();
        listeners.push(EventListener::new(&target, event_type, move |event| {
            let end = state.borrow_mut().gesture.release();
            if !end.was_active || end.was_drag {
                // Drag placement already happened during motion; the menu
                // toggle is suppressed.
                return;
            }
            let Some(point) = event_point(event) else {
                return;
            };

            let (hit, relocated) = {
                let state = state.borrow();
                let geometry = DomLineGeometry::new(&surface, &state.document);
                let hit = locate(point, &geometry, &state.document);
                let prior = state.document.caret();
                (hit, prior != Caret::new(hit.line, hit.column))
            };
            state.borrow_mut().document.set_caret(hit.line, hit.column);
            tracing::trace!(
                target: "nib::events",
                line = hit.line,
                column = hit.column,
                relocated,
                "caret placed by tap"
            );
            presenter.place(hit.caret);
            // The menu alternates only on taps that leave the caret where
            // it was; a tap that relocates the caret dismisses it.
            if relocated {
                presenter.hide_menu();
            } else {
                presenter.toggle_menu();
            }
        }));
    }

    listeners
}

/// Extract the gesture coordinate from a mouse or touch event.
///
/// Touch events carry it on the first changed touch; a touchend has no
/// active touches, only changed ones.
pub fn event_point(event: &web_sys::Event) -> Option<Point> {
    if let Some(touch_event) = event.dyn_ref::<web_sys::TouchEvent>() {
        let touch = touch_event.changed_touches().get(0)?;
        return Some(Point::new(touch.client_x() as f64, touch.client_y() as f64));
    }
    let mouse = event.dyn_ref::<web_sys::MouseEvent>()?;
    Some(Point::new(mouse.client_x() as f64, mouse.client_y() as f64))
}
