//! Semantic edit actions and their dispatch.
//!
//! The proxy input bridge translates raw key/input events into `EditAction`
//! values; `apply_action` is the single point where they mutate the
//! document. In fallback mode this is the sole producer of text mutations -
//! nothing writes to the document through the render surface.

use smol_str::SmolStr;

use crate::document::{Document, EditInfo};

/// A semantic editing operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditAction {
    /// Insert text at the caret (post-composition value from the proxy
    /// input; spaces are normalized by the model).
    Insert(SmolStr),
    /// Delete one character before the caret (backspace key).
    DeleteBackward,
    /// Insert a new line after the active one (enter key).
    InsertNewline,
}

/// Apply an action to the document.
///
/// Returns `None` when the action was a no-op (empty insert, delete at the
/// absolute document start); the caller skips re-rendering in that case.
pub fn apply_action(doc: &mut Document, action: &EditAction) -> Option<EditInfo> {
    match action {
        EditAction::Insert(text) => doc.insert_at_caret(text),
        EditAction::DeleteBackward => doc.delete_before_caret(),
        EditAction::InsertNewline => Some(doc.insert_newline()),
    }
}
