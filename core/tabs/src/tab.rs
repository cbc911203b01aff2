//! FILENAME: core/tabs/src/tab.rs

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a tab for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(pub u64);

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Page load notifications coming back from a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadEvent {
    Started,
    /// Percentage, values above 100 are clamped.
    Progress(u8),
    Finished,
}

/// An open tab and the surface it owns.
#[derive(Debug)]
pub struct Tab<S> {
    id: TabId,
    label: String,
    url: String,
    progress: u8,
    loading: bool,
    surface: S,
}

impl<S> Tab<S> {
    pub(crate) fn new(id: TabId, label: String, url: String, surface: S) -> Self {
        Tab {
            id,
            label,
            url,
            progress: 0,
            loading: true,
            surface,
        }
    }

    pub fn id(&self) -> TabId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub(crate) fn into_surface(self) -> S {
        self.surface
    }

    pub(crate) fn apply_load_event(&mut self, event: LoadEvent) {
        match event {
            LoadEvent::Started => {
                self.loading = true;
                self.progress = 0;
            }
            LoadEvent::Progress(percent) => {
                self.loading = true;
                self.progress = percent.min(100);
            }
            LoadEvent::Finished => {
                self.loading = false;
                self.progress = 100;
            }
        }
    }
}

/// Tab state sent to the chrome UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabInfo {
    pub id: TabId,
    pub index: usize,
    pub label: String,
    pub url: String,
    pub progress: u8,
    pub loading: bool,
    pub active: bool,
}
