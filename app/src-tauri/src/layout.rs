//! FILENAME: app/src-tauri/src/layout.rs
// PURPOSE: Placement of the chrome webview and the tab webviews in the window.
// CONTEXT: The chrome strip sits on top; tabs fill the rest. While a dialog is
//          open the chrome covers the whole window.

use tauri::{AppHandle, LogicalPosition, LogicalSize, Manager, Position, Rect, Size, Window, Wry};

use tabs::Bounds;

use crate::config::{CHROME_HEIGHT, CHROME_LABEL, MAIN_WINDOW_LABEL};
use crate::{log_warn, BrowserState};

pub fn chrome_bounds(width: f64, height: f64, expanded: bool) -> Bounds {
    let chrome_height = if expanded { height } else { CHROME_HEIGHT.min(height) };
    Bounds::new(0.0, 0.0, width, chrome_height)
}

pub fn content_bounds(width: f64, height: f64) -> Bounds {
    Bounds::new(0.0, CHROME_HEIGHT, width, (height - CHROME_HEIGHT).max(0.0))
}

pub fn to_position(bounds: Bounds) -> Position {
    LogicalPosition::new(bounds.x, bounds.y).into()
}

pub fn to_size(bounds: Bounds) -> Size {
    LogicalSize::new(bounds.width, bounds.height).into()
}

pub fn to_rect(bounds: Bounds) -> Rect {
    Rect {
        position: to_position(bounds),
        size: to_size(bounds),
    }
}

/// Client area of `window` in logical pixels.
pub fn logical_size(window: &Window<Wry>) -> Result<LogicalSize<f64>, String> {
    let physical = window.inner_size().map_err(|e| e.to_string())?;
    let scale = window.scale_factor().map_err(|e| e.to_string())?;
    Ok(physical.to_logical(scale))
}

/// Re-place the chrome and every tab for the current window size and dialog state.
pub fn apply_layout(app: &AppHandle) -> Result<(), String> {
    let window = app
        .get_window(MAIN_WINDOW_LABEL)
        .ok_or("Main window not found")?;
    let size = logical_size(&window)?;
    let state = app
        .try_state::<BrowserState>()
        .ok_or("Browser state not ready")?;

    let mut controller = state.controller.lock().map_err(|e| e.to_string())?;
    controller.set_content_bounds(content_bounds(size.width, size.height));

    if let Some(chrome) = app.get_webview(CHROME_LABEL) {
        let bounds = chrome_bounds(size.width, size.height, controller.is_modal());
        chrome.set_bounds(to_rect(bounds)).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Called from window events on the UI thread; the work runs on the async
/// runtime so it never waits on a lock held by a command.
pub fn schedule_layout(app: &AppHandle) {
    let app = app.clone();
    tauri::async_runtime::spawn(async move {
        if let Err(e) = apply_layout(&app) {
            log_warn!("WINDOW", "Layout failed: {}", e);
        }
    });
}
