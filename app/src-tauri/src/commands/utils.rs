// PURPOSE: Helpers shared between the tab and recents commands.

use std::path::Path;

use tabs::{NewTabRequest, TabDialogs};
use tauri::{AppHandle, Emitter};
use tauri_plugin_dialog::{DialogExt, MessageDialogKind};

use crate::api_types::TabsResult;
use crate::config::{APP_NAME, CHROME_LABEL, TABS_CHANGED_EVENT};
use crate::log_warn;

/// The chrome webview runs the dialogs and sends back the answer; this
/// replays that answer to the controller.
#[derive(Debug, Default)]
pub struct SubmittedDialogs {
    new_tab: Option<NewTabRequest>,
    pick: Option<usize>,
}

impl SubmittedDialogs {
    pub fn new_tab(answer: Option<NewTabRequest>) -> Self {
        SubmittedDialogs {
            new_tab: answer,
            pick: None,
        }
    }

    pub fn pick(answer: Option<usize>) -> Self {
        SubmittedDialogs {
            new_tab: None,
            pick: answer,
        }
    }
}

impl TabDialogs for SubmittedDialogs {
    fn prompt_new_tab(&mut self, _recents: &[recents::RecentEntry]) -> Option<NewTabRequest> {
        self.new_tab.take()
    }

    fn pick_recent(&mut self, labels: &[String]) -> Option<usize> {
        self.pick.take().filter(|index| *index < labels.len())
    }
}

pub fn emit_tabs_changed(app: &AppHandle, tabs: &TabsResult) {
    if let Err(e) = app.emit_to(CHROME_LABEL, TABS_CHANGED_EVENT, tabs) {
        log_warn!("CMD", "Failed to emit {}: {}", TABS_CHANGED_EVENT, e);
    }
}

/// Tell the user the recents file could not be written. The tab stays open.
pub fn report_persist_failure(app: &AppHandle, path: &Path, error: &str) {
    app.dialog()
        .message(format!(
            "The tab was opened, but the recent addresses could not be saved to {}:\n{}",
            path.display(),
            error
        ))
        .title(APP_NAME)
        .kind(MessageDialogKind::Warning)
        .show(|_| {});
}
