//! Caret marker and context menu presentation.
//!
//! Positions the visible caret indicator at the screen coordinates the hit
//! tester (or an edit) produced, and toggles the contextual Select/Paste
//! affordance above it. Placement never fails: coordinates clamp into the
//! line surface's last known box when geometry is degenerate. Menu fades are
//! CSS transitions driven by a class flip - fire-and-forget, they never gate
//! input.

use nib_editor_core::{CaretScreenPosition, PlatformError};
use wasm_bindgen::JsCast;

/// Class toggled on the menu element to fade it in/out.
const MENU_OPEN_CLASS: &str = "open";

/// Owns the caret marker and context menu elements inside one widget.
pub struct CaretPresenter {
    /// Positioning context: the content region both elements are absolutely
    /// positioned within.
    container: web_sys::HtmlElement,
    marker: web_sys::HtmlElement,
    menu: web_sys::HtmlElement,
}

impl CaretPresenter {
    /// Build the marker and menu elements under the content region.
    pub fn build(
        dom: &web_sys::Document,
        container: &web_sys::HtmlElement,
    ) -> Result<Self, PlatformError> {
        let marker = create_div(dom, "nib-caret")?;
        let menu = create_div(dom, "nib-menu")?;
        menu.set_inner_html(
            "<span class=\"nib-menu-item\">Select</span>\
             <span class=\"nib-menu-item\">Paste</span>",
        );
        container
            .append_child(&marker)
            .map_err(|e| PlatformError(format!("append_child failed: {e:?}")))?;
        container
            .append_child(&menu)
            .map_err(|e| PlatformError(format!("append_child failed: {e:?}")))?;
        Ok(Self {
            container: container.clone(),
            marker,
            menu,
        })
    }

    /// Place the caret marker at viewport coordinates.
    ///
    /// Converts to container-relative coordinates and clamps into the
    /// container's box, so a momentarily empty document still yields a
    /// sensible position.
    pub fn place(&self, position: CaretScreenPosition) {
        let bounds = self.container.get_bounding_client_rect();
        let x = position.x.clamp(bounds.left(), bounds.right()) - bounds.left();
        let y = position.y.clamp(bounds.top(), bounds.bottom()) - bounds.top();

        let style = self.marker.style();
        let _ = style.set_property("left", &format!("{x}px"));
        let _ = style.set_property("top", &format!("{y}px"));

        if self.is_menu_open() {
            self.position_menu(x, y);
        }
    }

    /// Alternate the context menu open/closed, centered above the caret.
    pub fn toggle_menu(&self) {
        if self.is_menu_open() {
            self.hide_menu();
        } else {
            let style = self.marker.style();
            let x = parse_px(&style.get_property_value("left").unwrap_or_default());
            let y = parse_px(&style.get_property_value("top").unwrap_or_default());
            self.position_menu(x, y);
            let _ = self.menu.class_list().add_1(MENU_OPEN_CLASS);
        }
    }

    pub fn hide_menu(&self) {
        let _ = self.menu.class_list().remove_1(MENU_OPEN_CLASS);
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.class_list().contains(MENU_OPEN_CLASS)
    }

    pub fn marker(&self) -> &web_sys::HtmlElement {
        &self.marker
    }

    pub fn menu(&self) -> &web_sys::HtmlElement {
        &self.menu
    }

    /// Center the menu horizontally on the caret, sitting above it.
    fn position_menu(&self, caret_x: f64, caret_y: f64) {
        let width = self.menu.offset_width() as f64;
        let height = self.menu.offset_height() as f64;
        let style = self.menu.style();
        let _ = style.set_property("left", &format!("{}px", caret_x - width / 2.0));
        let _ = style.set_property("top", &format!("{}px", caret_y - height));
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

fn parse_px(value: &str) -> f64 {
    value.trim_end_matches("px").parse().unwrap_or(0.0)
}
