//! FILENAME: app/src-tauri/src/lib.rs
// PURPOSE: Main library entry point (Tauri Bridge).
// CONTEXT: One window: a chrome webview (toolbar, tab strip, dialogs) on top
//          and one child webview per open tab below it.

use std::sync::Mutex;

use recents::RecentsStore;
use tabs::TabController;
use tauri::window::WindowBuilder;
use tauri::{LogicalPosition, LogicalSize, Manager, WebviewBuilder, WebviewUrl, WindowEvent};

pub mod api_types;
pub mod commands;
pub mod config;
pub mod layout;
pub mod logging;
pub mod webview;

pub use api_types::{FlowOutcome, FlowResult, RecentInfo, TabsResult};
pub use logging::{init_log_file, get_log_path, next_seq, write_log, write_log_raw};
pub use webview::{TauriSurface, TauriSurfaceFactory};

use config::{
    APP_NAME, CHROME_LABEL, CHROME_PAGE, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAIN_WINDOW_LABEL,
    MIN_HEIGHT, MIN_WIDTH,
};


// ============================================================================
// APPLICATION STATE
// ============================================================================

pub struct BrowserState {
    /// Open tabs plus the recents list and its store
    pub controller: Mutex<TabController<TauriSurfaceFactory>>,
}

impl BrowserState {
    pub fn new(controller: TabController<TauriSurfaceFactory>) -> Self {
        BrowserState {
            controller: Mutex::new(controller),
        }
    }
}

// ============================================================================
// SETUP
// ============================================================================

fn setup(app: &mut tauri::App) -> Result<(), Box<dyn std::error::Error>> {
    let window = WindowBuilder::new(app.handle(), MAIN_WINDOW_LABEL)
        .title(APP_NAME)
        .inner_size(DEFAULT_WIDTH, DEFAULT_HEIGHT)
        .min_inner_size(MIN_WIDTH, MIN_HEIGHT)
        .build()?;

    let chrome = layout::chrome_bounds(DEFAULT_WIDTH, DEFAULT_HEIGHT, false);
    let chrome_builder = WebviewBuilder::new(CHROME_LABEL, WebviewUrl::App(CHROME_PAGE.into()));
    window.add_child(
        webview::with_browser_args(chrome_builder),
        LogicalPosition::new(chrome.x, chrome.y),
        LogicalSize::new(chrome.width, chrome.height),
    )?;

    let store = RecentsStore::in_home_dir()?;
    log_info!("SYS", "Recents file: {}", store.path().display());

    let controller = TabController::new(store, TauriSurfaceFactory::new(window.clone()))
        .with_content_bounds(layout::content_bounds(DEFAULT_WIDTH, DEFAULT_HEIGHT));
    app.manage(BrowserState::new(controller));

    let handle = app.handle().clone();
    window.on_window_event(move |event| {
        if let WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } = event {
            layout::schedule_layout(&handle);
        }
    });

    Ok(())
}

// ============================================================================
// ENTRY POINT
// ============================================================================

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    match init_log_file() {
        Ok(path) => {
            log_info!("SYS", "Tauri backend starting, log={}", path.display());
        }
        Err(e) => {
            eprintln!("[LOG_INIT] FAILED: {}", e);
            eprintln!("[LOG_INIT] Continuing with console-only logging");
        }
    }

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .setup(setup)
        .invoke_handler(tauri::generate_handler![
            // Tab commands
            commands::get_tabs,
            commands::submit_add_tab,
            commands::close_tab,
            commands::activate_tab,
            commands::set_dialog_open,
            // Recents commands
            commands::get_recents,
            commands::open_recent,
            // Logging commands
            logging::log_frontend,
            logging::log_frontend_atomic,
            logging::get_next_seq,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
