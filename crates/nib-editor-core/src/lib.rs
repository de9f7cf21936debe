//! nib-editor-core: Pure Rust editing logic without browser dependencies.
//!
//! This crate provides:
//! - `Document` / `Line` - the per-line, per-character text model
//! - `EditAction` / `apply_action` - semantic edit operations
//! - `LineGeometry` / `locate` - coordinate-to-caret hit testing
//! - User-agent parsing for the native-editing capability decision
//!
//! Everything here compiles for native targets, so the model and the hit-test
//! algorithm are tested with plain `cargo test`. The browser layer lives in
//! `nib-editor-browser`.

pub mod actions;
pub mod document;
pub mod error;
pub mod hittest;
pub mod line;
pub mod platform;
pub mod types;

pub use actions::{EditAction, apply_action};
pub use document::{Document, EditInfo, EditKind};
pub use error::PlatformError;
pub use hittest::{Hit, LineGeometry, caret_screen_position, locate};
pub use line::Line;
pub use platform::{
    EditStrategy, NATIVE_EDITING_MIN_MAJOR, is_touch_phone_or_tablet, mobile_os_major_version,
    supports_native_editing,
};
pub use smol_str::SmolStr;
pub use types::{Caret, CaretScreenPosition, GestureEnd, GestureState, Point, Rect};
