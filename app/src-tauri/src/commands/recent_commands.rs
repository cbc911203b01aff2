// PURPOSE: Commands reading the recents list and opening one of its entries.

use tabs::OpenRecentOutcome;
use tauri::{AppHandle, State};

use crate::api_types::{FlowOutcome, FlowResult, RecentInfo, TabsResult};
use crate::commands::tab_commands::flow;
use crate::commands::utils::{emit_tabs_changed, SubmittedDialogs};
use crate::{log_enter_info, log_exit_info, BrowserState};

#[tauri::command]
pub async fn get_recents(state: State<'_, BrowserState>) -> Result<Vec<RecentInfo>, String> {
    let controller = state.controller.lock().map_err(|e| e.to_string())?;
    Ok(RecentInfo::list(controller.recents()))
}

/// Answer of the open-recent list. `selection` is `None` when cancelled.
#[tauri::command]
pub async fn open_recent(
    app: AppHandle,
    state: State<'_, BrowserState>,
    selection: Option<usize>,
) -> Result<FlowResult, String> {
    log_enter_info!("CMD", "open_recent", "selection={:?}", selection);

    let mut dialogs = SubmittedDialogs::pick(selection);
    let (outcome, tabs, recents) = {
        let mut controller = state.controller.lock().map_err(|e| e.to_string())?;
        let outcome = controller.open_recent(&mut dialogs).map_err(|e| e.to_string())?;
        (
            outcome,
            TabsResult::from_controller(&controller),
            RecentInfo::list(controller.recents()),
        )
    };

    let outcome = match outcome {
        OpenRecentOutcome::NoRecents => FlowOutcome::NoRecents,
        OpenRecentOutcome::Cancelled => FlowOutcome::Cancelled,
        OpenRecentOutcome::Opened(_) => {
            emit_tabs_changed(&app, &tabs);
            FlowOutcome::Opened
        }
    };

    log_exit_info!("CMD", "open_recent", "{:?}", outcome);
    Ok(flow(outcome, false, None, tabs, recents))
}
