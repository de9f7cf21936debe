//! User-agent parsing for the native-editing capability decision.
//!
//! Old mobile WebKit (the touch phone/tablet family before major version 5)
//! ships a `contenteditable` attribute that cannot take a caret, so those
//! devices get the fallback engine. Everything else - including an
//! unrecognized or version-less agent string - fails open to native editing.
//!
//! The parsing is pure so it is testable off-browser; the browser crate
//! feeds it `navigator.userAgent` once per widget instantiation and holds
//! the result immutable for the widget's lifetime.

/// A touch phone/tablet needs at least this OS major version for usable
/// native editing.
pub const NATIVE_EDITING_MIN_MAJOR: u32 = 5;

/// How a widget instance edits text. Decided once at attach time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditStrategy {
    /// Delegate fully to the platform's editable surface.
    Native,
    /// Hand-built caret/hit-test/proxy-input engine.
    Fallback,
}

impl EditStrategy {
    /// Pick the strategy for a user-agent string.
    pub fn for_user_agent(ua: &str) -> Self {
        if supports_native_editing(ua) {
            EditStrategy::Native
        } else {
            EditStrategy::Fallback
        }
    }
}

/// Whether the agent string identifies the touch phone/tablet family.
pub fn is_touch_phone_or_tablet(ua: &str) -> bool {
    let ua = ua.to_lowercase();
    ua.contains("iphone") || ua.contains("ipod") || ua.contains("ipad")
}

/// Extract the OS major version from the `OS <major>_<minor>(_<patch>)? like`
/// token. Returns `None` when the token is absent ("version unknown").
pub fn mobile_os_major_version(ua: &str) -> Option<u32> {
    let ua = ua.to_lowercase();
    let mut rest = ua.as_str();
    while let Some(idx) = rest.find("os ") {
        let candidate = &rest[idx + 3..];
        if let Some(major) = parse_version_token(candidate) {
            return Some(major);
        }
        rest = &rest[idx + 3..];
    }
    None
}

/// Parse `<major>_<minor>(_<patch>)? like` at the start of the input.
fn parse_version_token(input: &str) -> Option<u32> {
    let mut rest = input;
    let major = take_number(&mut rest)?;
    rest = rest.strip_prefix('_')?;
    take_number(&mut rest)?;
    if let Some(after) = rest.strip_prefix('_') {
        let mut after = after;
        take_number(&mut after)?;
        rest = after;
    }
    rest.strip_prefix(" like")?;
    Some(major)
}

fn take_number(rest: &mut &str) -> Option<u32> {
    let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return None;
    }
    let value = rest[..digits].parse().ok()?;
    *rest = &rest[digits..];
    Some(value)
}

/// Whether the platform's native editable surface is usable.
///
/// False only for the touch phone/tablet family below
/// [`NATIVE_EDITING_MIN_MAJOR`]; a missing version token on such a device
/// defaults to native-capable (fail open).
pub fn supports_native_editing(ua: &str) -> bool {
    if !is_touch_phone_or_tablet(ua) {
        return true;
    }
    match mobile_os_major_version(ua) {
        Some(major) => major >= NATIVE_EDITING_MIN_MAJOR,
        None => true,
    }
}
