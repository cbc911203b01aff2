//! FILENAME: app/src-tauri/src/webview.rs
// PURPOSE: Tab surfaces backed by Tauri child webviews.
// CONTEXT: Each tab is a `tab-<id>` webview added to the main window under the
//          chrome strip. Certificate and console policy are applied per platform.

use tauri::webview::{PageLoadEvent, PageLoadPayload};
use tauri::{Manager, Url, Webview, WebviewBuilder, WebviewUrl, Window, Wry};

use tabs::{Bounds, LoadEvent, Surface, SurfaceConfig, SurfaceError, SurfaceFactory, TabId};

use crate::api_types::TabsResult;
use crate::commands::utils::emit_tabs_changed;
use crate::config::TAB_LABEL_PREFIX;
use crate::layout::{to_position, to_rect, to_size};
use crate::{log_error, log_info, log_warn, BrowserState};

pub fn tab_label(id: TabId) -> String {
    format!("{}{}", TAB_LABEL_PREFIX, id)
}

fn surface_error(e: tauri::Error) -> SurfaceError {
    SurfaceError::new(e.to_string())
}

// ============================================================================
// SURFACE
// ============================================================================

pub struct TauriSurface {
    webview: Webview<Wry>,
}

impl Surface for TauriSurface {
    fn show(&self) -> Result<(), SurfaceError> {
        self.webview.show().map_err(surface_error)
    }

    fn hide(&self) -> Result<(), SurfaceError> {
        self.webview.hide().map_err(surface_error)
    }

    fn set_bounds(&self, bounds: Bounds) -> Result<(), SurfaceError> {
        self.webview.set_bounds(to_rect(bounds)).map_err(surface_error)
    }

    fn release(self) -> Result<(), SurfaceError> {
        log_info!("WEBVIEW", "Closing {}", self.webview.label());
        self.webview.close().map_err(surface_error)
    }
}

// ============================================================================
// FACTORY
// ============================================================================

pub struct TauriSurfaceFactory {
    window: Window<Wry>,
}

impl TauriSurfaceFactory {
    pub fn new(window: Window<Wry>) -> Self {
        TauriSurfaceFactory { window }
    }
}

impl SurfaceFactory for TauriSurfaceFactory {
    type Surface = TauriSurface;

    fn create(
        &mut self,
        id: TabId,
        url: &str,
        config: &SurfaceConfig,
        bounds: Bounds,
    ) -> Result<TauriSurface, SurfaceError> {
        let target = page_target(url);
        let label = tab_label(id);

        let builder = WebviewBuilder::new(&label, initial_url(target.as_ref()))
            .on_page_load(move |webview, payload| forward_page_load(webview, id, &payload));
        let builder = with_browser_args(builder);

        let webview = self
            .window
            .add_child(builder, to_position(bounds), to_size(bounds))
            .map_err(surface_error)?;
        log_info!("WEBVIEW", "Created {} for {}", label, url);

        let address = target.as_ref().map_or(url, Url::as_str).to_string();
        apply_surface_policy(&webview, config, address);
        Ok(TauriSurface { webview })
    }
}

// ============================================================================
// PLATFORM POLICY
// ============================================================================

/// Parsed form of a tab address. Addresses the URL parser rejects (a literal
/// `httpfoo.com`, a host with a space) still get a tab; the engine decides
/// what to show for them.
pub fn page_target(url: &str) -> Option<Url> {
    match Url::parse(url) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            log_warn!("WEBVIEW", "'{}' is not a valid URL ({}), opening it as typed", url, e);
            None
        }
    }
}

fn blank_url() -> WebviewUrl {
    match Url::parse("about:blank") {
        Ok(blank) => WebviewUrl::External(blank),
        Err(_) => WebviewUrl::default(),
    }
}

/// On Linux the page is loaded only after the TLS policy is in place, so the
/// webview starts blank and WebKit gets the address as typed.
#[cfg(target_os = "linux")]
pub fn initial_url(_target: Option<&Url>) -> WebviewUrl {
    blank_url()
}

/// Elsewhere an unparseable address leaves the tab blank.
#[cfg(not(target_os = "linux"))]
pub fn initial_url(target: Option<&Url>) -> WebviewUrl {
    match target {
        Some(url) => WebviewUrl::External(url.clone()),
        None => blank_url(),
    }
}

/// WebView2 refuses webviews with differing browser arguments in one
/// environment, so the chrome webview goes through here too.
#[cfg(windows)]
pub fn with_browser_args(builder: WebviewBuilder<Wry>) -> WebviewBuilder<Wry> {
    builder.additional_browser_args("--ignore-certificate-errors")
}

#[cfg(not(windows))]
pub fn with_browser_args(builder: WebviewBuilder<Wry>) -> WebviewBuilder<Wry> {
    builder
}

#[cfg(target_os = "linux")]
fn apply_surface_policy(webview: &Webview<Wry>, config: &SurfaceConfig, address: String) {
    use tabs::{CertificatePolicy, ConsoleLogging};
    use webkit2gtk::{SettingsExt, TLSErrorsPolicy, WebContextExt, WebViewExt};

    let config = *config;
    let result = webview.with_webview(move |platform| {
        let view = platform.inner();
        if config.certificates == CertificatePolicy::AcceptInvalid {
            if let Some(context) = view.context() {
                context.set_tls_errors_policy(TLSErrorsPolicy::Ignore);
            }
        }
        if let Some(settings) = WebViewExt::settings(&view) {
            settings.set_enable_write_console_messages_to_stdout(
                config.console == ConsoleLogging::Forwarded,
            );
        }
        view.load_uri(&address);
    });

    if let Err(e) = result {
        log_error!("WEBVIEW", "Failed to configure {}: {}", webview.label(), e);
    }
}

#[cfg(windows)]
fn apply_surface_policy(_webview: &Webview<Wry>, _config: &SurfaceConfig, _address: String) {}

#[cfg(not(any(target_os = "linux", windows)))]
fn apply_surface_policy(webview: &Webview<Wry>, config: &SurfaceConfig, _address: String) {
    if config.certificates == tabs::CertificatePolicy::AcceptInvalid {
        log_warn!(
            "WEBVIEW",
            "{}: invalid certificates cannot be accepted on this platform",
            webview.label()
        );
    }
}

// ============================================================================
// LOAD EVENTS
// ============================================================================

/// Runs on the UI thread, so the state update is handed to the async runtime
/// instead of locking here.
fn forward_page_load(webview: Webview<Wry>, id: TabId, payload: &PageLoadPayload<'_>) {
    let event = match payload.event() {
        PageLoadEvent::Started => LoadEvent::Started,
        PageLoadEvent::Finished => LoadEvent::Finished,
    };
    let app = webview.app_handle().clone();

    tauri::async_runtime::spawn(async move {
        let Some(state) = app.try_state::<BrowserState>() else {
            return;
        };
        let tabs = match state.controller.lock() {
            Ok(mut controller) => {
                if !controller.on_load_event(id, event) {
                    return;
                }
                TabsResult::from_controller(&controller)
            }
            Err(e) => {
                log_warn!("WEBVIEW", "Dropping load event for tab {}: {}", id, e);
                return;
            }
        };
        emit_tabs_changed(&app, &tabs);
    });
}
