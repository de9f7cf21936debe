//! Cached capability detection from the browser user agent.
//!
//! Detection runs once; every widget attached afterwards sees the same
//! immutable result, so a session never mixes edit strategies.

use std::sync::OnceLock;

use nib_editor_core::platform::EditStrategy;

/// Cached platform detection results.
#[derive(Debug, Clone)]
pub struct Platform {
    /// The raw user-agent string detection ran against.
    pub user_agent: String,
    /// Touch phone/tablet family match.
    pub mobile_device: bool,
    /// OS major version from the `OS <major>_<minor> like` token, if present.
    pub os_major: Option<u32>,
    /// The edit strategy every widget in this session uses.
    pub strategy: EditStrategy,
}

impl Default for Platform {
    fn default() -> Self {
        // No browser context: fail open to native editing.
        Self {
            user_agent: String::new(),
            mobile_device: false,
            os_major: None,
            strategy: EditStrategy::Native,
        }
    }
}

static PLATFORM: OnceLock<Platform> = OnceLock::new();

/// Get cached platform info. Detection runs once on first call.
pub fn platform() -> &'static Platform {
    PLATFORM.get_or_init(detect_platform)
}

#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
fn detect_platform() -> Platform {
    use nib_editor_core::platform::{is_touch_phone_or_tablet, mobile_os_major_version};

    let user_agent = web_sys::window()
        .map(|w| w.navigator())
        .and_then(|n| n.user_agent().ok())
        .unwrap_or_default();

    let detected = Platform {
        mobile_device: is_touch_phone_or_tablet(&user_agent),
        os_major: mobile_os_major_version(&user_agent),
        strategy: EditStrategy::for_user_agent(&user_agent),
        user_agent,
    };
    tracing::debug!(
        target: "nib::platform",
        mobile = detected.mobile_device,
        os_major = ?detected.os_major,
        strategy = ?detected.strategy,
        "platform detected"
    );
    detected
}

#[cfg(not(all(target_arch = "wasm32", target_os = "unknown")))]
fn detect_platform() -> Platform {
    Platform::default()
}
