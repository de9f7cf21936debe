//! Widget assembly and lifecycle.
//!
//! `attach` builds the widget markup under a target element: a toolbar
//! region plus a content region holding either a native editable surface or
//! the fallback engine (hidden proxy input, line surface, caret marker,
//! context menu). The edit strategy is decided once per instance at attach
//! time and held immutable - mixed-mode behavior mid-session is not
//! supported.
//!
//! Each matched target gets an isolated widget instance: its own document,
//! gesture state, and listeners. Dropping the widget detaches every
//! listener; `detach` additionally removes the generated markup.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;

use nib_editor_core::{
    Caret, Document, EditStrategy, GestureState, PlatformError, caret_screen_position,
};

use crate::caret::CaretPresenter;
use crate::hit::DomLineGeometry;
use crate::platform::platform;
use crate::{events, proxy, render, toolbar};

/// Widget configuration. No options are recognized yet; the default is the
/// empty configuration.
#[derive(Debug, Clone, Default)]
pub struct EditorOptions {}

/// Mutable per-widget state shared across event handlers.
///
/// Handlers receive this explicitly (an `Rc<RefCell<..>>` per instance)
/// instead of closing over loose shared locals or hanging flags off DOM
/// nodes.
pub struct WidgetState {
    pub document: Document,
    pub gesture: GestureState,
    /// The widget currently holds editing focus (proxy input focused).
    pub editing: bool,
}

impl WidgetState {
    fn new() -> Self {
        Self {
            document: Document::new(),
            gesture: GestureState::new(),
            editing: false,
        }
    }
}

struct FallbackEngine {
    state: Rc<RefCell<WidgetState>>,
    surface: web_sys::HtmlElement,
    input: web_sys::HtmlInputElement,
    presenter: Rc<CaretPresenter>,
}

/// One attached widget instance.
pub struct EditorWidget {
    container: web_sys::HtmlElement,
    strategy: EditStrategy,
    fallback: Option<FallbackEngine>,
    listeners: Vec<EventListener>,
}

/// Attach the widget to a target element, choosing the edit strategy from
/// the ambient platform.
pub fn attach(
    target: &web_sys::HtmlElement,
    options: EditorOptions,
) -> Result<EditorWidget, PlatformError> {
    attach_with_strategy(target, options, platform().strategy)
}

/// Attach with an explicit edit strategy.
///
/// `attach` resolves the strategy from the user agent; this variant exists
/// for embedders (and tests) that need to force one path.
pub fn attach_with_strategy(
    target: &web_sys::HtmlElement,
    _options: EditorOptions,
    strategy: EditStrategy,
) -> Result<EditorWidget, PlatformError> {
    let dom = gloo_utils::document();
    target.set_inner_html("");

    let container = create_div(&dom, "content")?;
    let (topbar, mut listeners) = toolbar::build(&dom)?;
    append(&container, &topbar)?;

    let content = create_div(&dom, "nib-content")?;
    append(&container, &content)?;
    append(target, &container)?;

    let fallback = match strategy {
        EditStrategy::Native => {
            let editable = create_div(&dom, "contenteditable")?;
            editable
                .set_attribute("contenteditable", "true")
                .map_err(|e| PlatformError(format!("set_attribute failed: {e:?}")))?;
            append(&content, &editable)?;
            None
        }
        EditStrategy::Fallback => {
            let engine = build_fallback(&dom, &container, &content, &mut listeners)?;
            Some(engine)
        }
    };

    tracing::debug!(target: "nib::widget", ?strategy, "widget attached");
    Ok(EditorWidget {
        container,
        strategy,
        fallback,
        listeners,
    })
}

fn build_fallback(
    dom: &web_sys::Document,
    root: &web_sys::HtmlElement,
    content: &web_sys::HtmlElement,
    listeners: &mut Vec<EventListener>,
) -> Result<FallbackEngine, PlatformError> {
    let state = Rc::new(RefCell::new(WidgetState::new()));

    let input = proxy::build_input(dom)?;
    append(content, &input)?;

    let surface = create_div(dom, "nib-lines")?;
    render::render_all(dom, &surface, &state.borrow().document)?;
    append(content, &surface)?;

    let presenter = Rc::new(CaretPresenter::build(dom, content)?);

    // Initial caret at the document origin (now that geometry is live).
    {
        let state = state.borrow();
        let geometry = DomLineGeometry::new(&surface, &state.document);
        presenter.place(caret_screen_position(&geometry, state.document.caret()));
    }

    listeners.extend(proxy::wire(
        &input,
        state.clone(),
        surface.clone(),
        presenter.clone(),
    ));
    listeners.extend(events::wire(
        &surface,
        &input,
        state.clone(),
        presenter.clone(),
    ));
    // Scoped to the widget root, not the content region: a toolbar tap is
    // inside the widget and must not dismiss the keyboard.
    listeners.extend(outside_tap_listeners(
        root,
        &input,
        state.clone(),
        presenter.clone(),
    ));

    Ok(FallbackEngine {
        state,
        surface,
        input,
        presenter,
    })
}

/// Document-wide listeners that exit editing focus when a press lands
/// outside the widget.
fn outside_tap_listeners(
    root: &web_sys::HtmlElement,
    input: &web_sys::HtmlInputElement,
    state: Rc<RefCell<WidgetState>>,
    presenter: Rc<CaretPresenter>,
) -> Vec<EventListener> {
    let mut listeners = Vec::with_capacity(2);
    for event_type in ["mousedown", "touchstart"] {
        let root = root.clone();
        let input = input.clone();
        let state = state.clone();
        let presenter = presenter.clone();
        listeners.push(EventListener::new(
            &gloo_utils::document(),
            event_type,
            move |event| {
                let inside = event
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
                    .map(|node| root.contains(Some(&node)))
                    .unwrap_or(false);
                if inside {
                    return;
                }
                let mut state = state.borrow_mut();
                if !state.editing {
                    return;
                }
                state.editing = false;
                let _ = input.blur();
                presenter.hide_menu();
                tracing::trace!(target: "nib::widget", "editing focus exited");
            },
        ));
    }
    listeners
}

impl EditorWidget {
    /// The strategy this instance was attached with.
    pub fn strategy(&self) -> EditStrategy {
        self.strategy
    }

    /// Logical text of the fallback document. `None` in native mode, where
    /// the platform owns the content.
    pub fn text(&self) -> Option<String> {
        self.fallback
            .as_ref()
            .map(|engine| engine.state.borrow().document.text())
    }

    /// Current model caret. `None` in native mode.
    pub fn caret(&self) -> Option<Caret> {
        self.fallback
            .as_ref()
            .map(|engine| engine.state.borrow().document.caret())
    }

    /// The line surface element (fallback mode only).
    pub fn surface(&self) -> Option<&web_sys::HtmlElement> {
        self.fallback.as_ref().map(|engine| &engine.surface)
    }

    /// The hidden proxy input element (fallback mode only).
    pub fn proxy_input(&self) -> Option<&web_sys::HtmlInputElement> {
        self.fallback.as_ref().map(|engine| &engine.input)
    }

    /// The caret presenter (fallback mode only).
    pub fn presenter(&self) -> Option<&CaretPresenter> {
        self.fallback.as_ref().map(|engine| engine.presenter.as_ref())
    }

    /// Remove the generated markup and drop all listeners.
    pub fn detach(self) {
        self.container.remove();
        // Listeners detach when dropped with `self`.
    }
}

fn create_div(
    dom: &web_sys::Document,
    class: &str,
) -> Result<web_sys::HtmlElement, PlatformError> {
    let el: web_sys::HtmlElement = dom
        .create_element("div")
        .map_err(|e| PlatformError(format!("create_element failed: {e:?}")))?
        .dyn_into()
        .map_err(|_| PlatformError("element is not an HtmlElement".into()))?;
    el.set_class_name(class);
    Ok(el)
}

fn append(parent: &web_sys::Element, child: &web_sys::Element) -> Result<(), PlatformError> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| PlatformError(format!("append_child failed: {e:?}")))
}
