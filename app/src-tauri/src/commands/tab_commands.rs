// PURPOSE: Tab strip commands: list, add, close, focus, and the modal toggle.
// CONTEXT: Async so they run off the UI thread; creating or closing a webview
//          waits on the UI thread, which must stay free meanwhile.

use tabs::{AddTabForm, AddTabOutcome};
use tauri::{AppHandle, Manager, State};

use crate::api_types::{FlowOutcome, FlowResult, RecentInfo, TabsResult};
use crate::commands::utils::{emit_tabs_changed, report_persist_failure, SubmittedDialogs};
use crate::config::CHROME_LABEL;
use crate::layout;
use crate::{log_enter_info, log_exit_info, log_info, log_warn, BrowserState};

#[tauri::command]
pub async fn get_tabs(state: State<'_, BrowserState>) -> Result<TabsResult, String> {
    let controller = state.controller.lock().map_err(|e| e.to_string())?;
    Ok(TabsResult::from_controller(&controller))
}

/// Answer of the add-tab dialog. `form` is `None` when the user cancelled.
#[tauri::command]
pub async fn submit_add_tab(
    app: AppHandle,
    state: State<'_, BrowserState>,
    form: Option<AddTabForm>,
) -> Result<FlowResult, String> {
    log_enter_info!("CMD", "submit_add_tab", "confirmed={}", form.is_some());

    let mut dialogs = SubmittedDialogs::new_tab(form.map(|f| f.resolve()));
    let (outcome, tabs, recents, path) = {
        let mut controller = state.controller.lock().map_err(|e| e.to_string())?;
        let outcome = controller.add_tab(&mut dialogs).map_err(|e| {
            log_warn!("TABS", "Add tab failed: {}", e);
            e.to_string()
        })?;
        (
            outcome,
            TabsResult::from_controller(&controller),
            RecentInfo::list(controller.recents()),
            controller.store().path().to_path_buf(),
        )
    };

    let result = match outcome {
        AddTabOutcome::Cancelled => flow(FlowOutcome::Cancelled, false, None, tabs, recents),
        AddTabOutcome::EmptyAddress => flow(FlowOutcome::EmptyAddress, false, None, tabs, recents),
        AddTabOutcome::Opened {
            recorded,
            persist_error,
            ..
        } => {
            let warning = persist_error.map(|e| e.to_string());
            if let Some(ref message) = warning {
                report_persist_failure(&app, &path, message);
            }
            emit_tabs_changed(&app, &tabs);
            flow(FlowOutcome::Opened, recorded, warning, tabs, recents)
        }
    };

    log_exit_info!("CMD", "submit_add_tab", "{:?}", result.outcome);
    Ok(result)
}

/// Close the tab at `index`. Refused (returns the unchanged strip) when it is
/// the only tab.
#[tauri::command]
pub async fn close_tab(
    app: AppHandle,
    state: State<'_, BrowserState>,
    index: usize,
) -> Result<TabsResult, String> {
    let tabs = {
        let mut controller = state.controller.lock().map_err(|e| e.to_string())?;
        if controller.close_tab(index) {
            log_info!("TABS", "Closed tab at {}", index);
        }
        TabsResult::from_controller(&controller)
    };
    emit_tabs_changed(&app, &tabs);
    Ok(tabs)
}

#[tauri::command]
pub async fn activate_tab(
    app: AppHandle,
    state: State<'_, BrowserState>,
    index: usize,
) -> Result<TabsResult, String> {
    let tabs = {
        let mut controller = state.controller.lock().map_err(|e| e.to_string())?;
        controller.activate(index).map_err(|e| e.to_string())?;
        TabsResult::from_controller(&controller)
    };
    emit_tabs_changed(&app, &tabs);
    Ok(tabs)
}

/// The chrome calls this around every dialog: the chrome grows over the
/// window and the focused tab is hidden until the dialog closes.
#[tauri::command]
pub async fn set_dialog_open(
    app: AppHandle,
    state: State<'_, BrowserState>,
    open: bool,
) -> Result<(), String> {
    {
        let mut controller = state.controller.lock().map_err(|e| e.to_string())?;
        controller.set_modal(open);
    }

    let window = app
        .get_window(crate::config::MAIN_WINDOW_LABEL)
        .ok_or("Main window not found")?;
    let size = layout::logical_size(&window)?;
    if let Some(chrome) = app.get_webview(CHROME_LABEL) {
        let bounds = layout::chrome_bounds(size.width, size.height, open);
        chrome
            .set_bounds(layout::to_rect(bounds))
            .map_err(|e| e.to_string())?;
        if open {
            chrome.set_focus().map_err(|e| e.to_string())?;
        }
    }
    Ok(())
}

pub(crate) fn flow(
    outcome: FlowOutcome,
    recorded: bool,
    warning: Option<String>,
    tabs: TabsResult,
    recents: Vec<RecentInfo>,
) -> FlowResult {
    FlowResult {
        outcome,
        recorded,
        warning,
        tabs,
        recents,
    }
}
