//! Browser DOM layer for the nib contenteditable widget.
//!
//! This crate builds the widget markup under a target element and, when the
//! platform's native editable surface is unusable, runs the fallback
//! text-editing engine: a hidden proxy input for key events, per-line
//! rendering, coordinate hit testing, and a hand-positioned caret marker.
//! It assumes a `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `widget`: `attach` entry point, markup assembly, listener ownership
//! - `toolbar`: the four decorative formatting buttons
//! - `render`: line element rendering and transient per-character markup
//! - `hit`: `LineGeometry` over live layout for the core hit tester
//! - `proxy`: the hidden always-focused input bridge
//! - `caret`: caret marker and context menu presentation
//! - `events`: pointer/touch gesture wiring
//! - `platform`: cached capability detection from the user agent
//!
//! # Re-exports
//!
//! This crate re-exports `nib-editor-core` for convenience, so consumers
//! only need to depend on `nib-editor-browser`.

pub use nib_editor_core;
pub use nib_editor_core::*;

pub mod caret;
pub mod events;
pub mod hit;
pub mod platform;
pub mod proxy;
pub mod render;
pub mod toolbar;
pub mod widget;

pub use platform::{Platform, platform};
pub use widget::{EditorOptions, EditorWidget, attach, attach_with_strategy};
