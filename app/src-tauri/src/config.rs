//! FILENAME: app/src-tauri/src/config.rs
// PURPOSE: Fixed settings of the desktop shell.

pub const APP_NAME: &str = "Tailscale Browser";

pub const MAIN_WINDOW_LABEL: &str = "main";
pub const DEFAULT_WIDTH: f64 = 1200.0;
pub const DEFAULT_HEIGHT: f64 = 800.0;
pub const MIN_WIDTH: f64 = 480.0;
pub const MIN_HEIGHT: f64 = 320.0;

/// Webview hosting the toolbar, tab strip and dialogs.
pub const CHROME_LABEL: &str = "chrome";
pub const CHROME_PAGE: &str = "index.html";
/// Height of the toolbar plus tab strip, in logical pixels.
pub const CHROME_HEIGHT: f64 = 76.0;

/// Tab webviews are labelled `tab-<id>`.
pub const TAB_LABEL_PREFIX: &str = "tab-";

/// Event carrying a fresh `TabsResult` to the chrome webview.
pub const TABS_CHANGED_EVENT: &str = "tabs-changed";
