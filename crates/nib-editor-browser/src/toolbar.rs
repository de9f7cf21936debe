//! The formatting toolbar: four fixed, decorative actions.
//!
//! Bold/Italic/Underline/Strikethrough toggle only a visual `active` class
//! on their list item - they are never wired to the text model. The markup
//! mirrors the widget's original contract: `div.topbar > div.topbar-inner >
//! div.container > ul.nav > li > a`.

use gloo_events::EventListener;
use wasm_bindgen::JsCast;

use nib_editor_core::PlatformError;

const ACTIONS: [(&str, &str); 4] = [
    ("#bold", "<strong>B</strong>"),
    ("#italic", "<em>I</em>"),
    ("#underline", "<u>U</u>"),
    ("#strikethrough", "<strike>S</strike>"),
];

/// Build the toolbar region and its click listeners.
///
/// The returned listeners must be kept alive for as long as the toolbar is
/// in the document.
pub fn build(
    dom: &web_sys::Document,
) -> Result<(web_sys::HtmlElement, Vec<EventListener>), PlatformError> {
    let topbar = create(dom, "div", "topbar")?;
    let inner = create(dom, "div", "topbar-inner")?;
    let container = create(dom, "div", "container")?;
    let nav = create(dom, "ul", "nav")?;

    let mut listeners = Vec::with_capacity(ACTIONS.len());
    for (href, label) in ACTIONS {
        let item = create(dom, "li", "")?;
        let anchor = create(dom, "a", "")?;
        anchor
            .set_attribute("href", href)
            .map_err(|e| PlatformError(format!("set_attribute failed: {e:?}")))?;
        anchor.set_inner_html(label);
        append(&item, &anchor)?;
        append(&nav, &item)?;

        listeners.push(EventListener::new(&anchor, "click", move |event| {
            event.prevent_default();
            let _ = item.class_list().toggle("active");
        }));
    }

    append(&container, &nav)?;
    append(&inner, &container)?;
    append(&topbar, &inner)?;
    Ok((topbar, listeners))
}

fn create(
    dom: &web_sys::Document,
    tag: &str,
    class: &str,
) -> Result<web_sys::HtmlElement, PlatformError> {
    let el: web_sys::HtmlElement = dom
        .create_element(tag)
        .map_err(|e| PlatformError(format!("create_element failed: {e:?}")))?
        .dyn_into()
        .map_err(|_| PlatformError("element is not an HtmlElement".into()))?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    Ok(el)
}

fn append(parent: &web_sys::Element, child: &web_sys::Element) -> Result<(), PlatformError> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| PlatformError(format!("append_child failed: {e:?}")))
}
