//! FILENAME: app/src-tauri/src/api_types.rs
// PURPOSE: Shared type definitions for Tauri API communication.
// CONTEXT: All structs use camelCase serialization for JavaScript interoperability.

use recents::RecentEntry;
use serde::{Deserialize, Serialize};
use tabs::{SurfaceFactory, TabController, TabInfo};

/// Open tabs as shown in the tab strip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TabsResult {
    pub tabs: Vec<TabInfo>,
    pub active_index: Option<usize>,
    /// False while only one tab is open (its close button is disabled).
    pub can_close: bool,
}

impl TabsResult {
    pub fn from_controller<F: SurfaceFactory>(controller: &TabController<F>) -> Self {
        TabsResult {
            tabs: controller.snapshot(),
            active_index: controller.active_index(),
            can_close: controller.len() > 1,
        }
    }
}

/// One remembered address, for the add-tab combo and the open-recent list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecentInfo {
    pub index: usize,
    pub name: String,
    pub url: String,
    /// `"{name} ({url})"`
    pub label: String,
}

impl RecentInfo {
    pub fn list(entries: &[RecentEntry]) -> Vec<RecentInfo> {
        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| RecentInfo {
                index,
                name: entry.name.clone(),
                url: entry.url.clone(),
                label: entry.label(),
            })
            .collect()
    }
}

/// How a dialog flow ended.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum FlowOutcome {
    Opened,
    Cancelled,
    EmptyAddress,
    NoRecents,
}

/// Result of `submit_add_tab` and `open_recent`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FlowResult {
    pub outcome: FlowOutcome,
    /// Whether a new entry went into the recents list.
    pub recorded: bool,
    /// Set when the tab opened but the recents file could not be written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    pub tabs: TabsResult,
    pub recents: Vec<RecentInfo>,
}
