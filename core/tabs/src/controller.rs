//! FILENAME: core/tabs/src/controller.rs
//! PURPOSE: Owns the open tabs and the recents list, and runs the add-tab,
//!          open-recent and close-tab flows.
//! CONTEXT: Runs on one thread in response to discrete UI events. Focus and
//!          visibility of surfaces are driven from here; rendering is not.

use recents::{ConfigDocument, RecentEntry, RecentsError, RecentsStore};

use crate::address::normalize_address;
use crate::dialog::{NewTabRequest, TabDialogs};
use crate::error::{SurfaceError, TabsError};
use crate::surface::{Bounds, Surface, SurfaceConfig, SurfaceFactory};
use crate::tab::{LoadEvent, Tab, TabId, TabInfo};

/// Result of the add-tab flow.
#[derive(Debug)]
pub enum AddTabOutcome {
    Cancelled,
    /// Confirmed, but neither the address field nor the combo had text.
    EmptyAddress,
    Opened {
        id: TabId,
        /// The entry was new and went into the recents list.
        recorded: bool,
        /// The recents list changed but could not be written.
        persist_error: Option<RecentsError>,
    },
}

/// Result of the open-recent flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenRecentOutcome {
    NoRecents,
    Cancelled,
    Opened(TabId),
}

pub struct TabController<F: SurfaceFactory> {
    factory: F,
    store: RecentsStore,
    document: ConfigDocument,
    surface_config: SurfaceConfig,
    content_bounds: Bounds,
    tabs: Vec<Tab<F::Surface>>,
    active: Option<usize>,
    modal: bool,
    next_id: u64,
}

impl<F: SurfaceFactory> TabController<F> {
    /// Loads the recents from `store` (creating or repairing the file as needed).
    pub fn new(store: RecentsStore, factory: F) -> Self {
        let document = store.load();
        TabController {
            factory,
            store,
            document,
            surface_config: SurfaceConfig::default(),
            content_bounds: Bounds::default(),
            tabs: Vec::new(),
            active: None,
            modal: false,
            next_id: 1,
        }
    }

    pub fn with_surface_config(mut self, config: SurfaceConfig) -> Self {
        self.surface_config = config;
        self
    }

    pub fn with_content_bounds(mut self, bounds: Bounds) -> Self {
        self.content_bounds = bounds;
        self
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    pub fn store(&self) -> &RecentsStore {
        &self.store
    }

    pub fn recents(&self) -> &[RecentEntry] {
        &self.document.recent
    }

    pub fn recent_labels(&self) -> Vec<String> {
        self.document.labels()
    }

    pub fn tabs(&self) -> &[Tab<F::Surface>] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn index_of(&self, id: TabId) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.id() == id)
    }

    pub fn content_bounds(&self) -> Bounds {
        self.content_bounds
    }

    pub fn snapshot(&self) -> Vec<TabInfo> {
        self.tabs
            .iter()
            .enumerate()
            .map(|(index, tab)| TabInfo {
                id: tab.id(),
                index,
                label: tab.label().to_string(),
                url: tab.url().to_string(),
                progress: tab.progress(),
                loading: tab.is_loading(),
                active: self.active == Some(index),
            })
            .collect()
    }

    // ------------------------------------------------------------------------
    // Flows
    // ------------------------------------------------------------------------

    /// Ask for a name/address and open it. New named entries are remembered.
    pub fn add_tab<D: TabDialogs + ?Sized>(&mut self, dialogs: &mut D) -> Result<AddTabOutcome, TabsError> {
        match dialogs.prompt_new_tab(&self.document.recent) {
            Some(request) => self.open_request(request),
            None => Ok(AddTabOutcome::Cancelled),
        }
    }

    /// The part of [`add_tab`](Self::add_tab) after the dialog was confirmed.
    pub fn open_request(&mut self, request: NewTabRequest) -> Result<AddTabOutcome, TabsError> {
        let address = request.address.trim();
        if address.is_empty() {
            log::debug!("Add tab confirmed without an address, ignoring");
            return Ok(AddTabOutcome::EmptyAddress);
        }

        let url = normalize_address(address);
        let name = request.name.trim().to_string();
        let label = if name.is_empty() { url.clone() } else { name.clone() };
        let id = self.open_surface(label, url.clone())?;

        let (recorded, persist_error) = match self.store.record(&mut self.document, RecentEntry::new(name, url)) {
            Ok(recorded) => (recorded, None),
            Err(e) => {
                log::warn!("Failed to save recents to {}: {}", self.store.path().display(), e);
                (true, Some(e))
            }
        };

        Ok(AddTabOutcome::Opened {
            id,
            recorded,
            persist_error,
        })
    }

    /// Offer the recents as `"{name} ({url})"` and open the picked one
    /// without recording it again.
    pub fn open_recent<D: TabDialogs + ?Sized>(&mut self, dialogs: &mut D) -> Result<OpenRecentOutcome, TabsError> {
        if self.document.recent.is_empty() {
            return Ok(OpenRecentOutcome::NoRecents);
        }

        let labels = self.document.labels();
        let entry = match dialogs
            .pick_recent(&labels)
            .and_then(|index| self.document.get(index))
        {
            Some(entry) => entry.clone(),
            None => return Ok(OpenRecentOutcome::Cancelled),
        };

        let id = self.open_surface(entry.display_name().to_string(), entry.url)?;
        Ok(OpenRecentOutcome::Opened(id))
    }

    /// Close the tab at `index`. The last remaining tab is never closed.
    /// Returns whether a tab was removed.
    pub fn close_tab(&mut self, index: usize) -> bool {
        if self.tabs.len() <= 1 || index >= self.tabs.len() {
            log::debug!("Ignoring close of tab {} ({} open)", index, self.tabs.len());
            return false;
        }

        let tab = self.tabs.remove(index);
        let id = tab.id();
        if let Err(e) = tab.into_surface().release() {
            log::warn!("Failed to release surface of tab {}: {}", id, e);
        }

        let was_active = self.active == Some(index);
        self.active = match self.active {
            Some(active) if active == index => Some(index.min(self.tabs.len() - 1)),
            Some(active) if active > index => Some(active - 1),
            other => other,
        };
        if was_active {
            self.show_active();
        }
        true
    }

    /// Focus the tab at `index`, hiding the previously focused one.
    pub fn activate(&mut self, index: usize) -> Result<(), TabsError> {
        if index >= self.tabs.len() {
            return Err(TabsError::IndexOutOfRange(index));
        }
        if self.active == Some(index) {
            return Ok(());
        }
        self.hide_active();
        self.active = Some(index);
        self.show_active();
        Ok(())
    }

    /// While a modal dialog is up the focused surface is hidden so the dialog
    /// can use the whole window.
    pub fn set_modal(&mut self, modal: bool) {
        if self.modal == modal {
            return;
        }
        self.modal = modal;
        if modal {
            self.hide_active();
        } else {
            self.show_active();
        }
    }

    pub fn is_modal(&self) -> bool {
        self.modal
    }

    /// Move every surface into `bounds` (the area under the tab strip).
    pub fn set_content_bounds(&mut self, bounds: Bounds) {
        self.content_bounds = bounds;
        for tab in &self.tabs {
            report(tab.id(), "resize", tab.surface().set_bounds(bounds));
        }
    }

    /// Returns false when no tab has `id` (it was closed meanwhile).
    pub fn on_load_event(&mut self, id: TabId, event: LoadEvent) -> bool {
        match self.tabs.iter_mut().find(|tab| tab.id() == id) {
            Some(tab) => {
                tab.apply_load_event(event);
                true
            }
            None => false,
        }
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    fn open_surface(&mut self, label: String, url: String) -> Result<TabId, TabsError> {
        let id = TabId(self.next_id);
        let surface = self
            .factory
            .create(id, &url, &self.surface_config, self.content_bounds)?;
        self.next_id += 1;

        log::info!("Opened tab {} '{}' at {}", id, label, url);
        self.hide_active();
        self.tabs.push(Tab::new(id, label, url, surface));
        self.active = Some(self.tabs.len() - 1);
        if self.modal {
            self.hide_active();
        }
        Ok(id)
    }

    fn hide_active(&self) {
        if let Some(tab) = self.active.and_then(|i| self.tabs.get(i)) {
            report(tab.id(), "hide", tab.surface().hide());
        }
    }

    fn show_active(&self) {
        if self.modal {
            return;
        }
        if let Some(tab) = self.active.and_then(|i| self.tabs.get(i)) {
            report(tab.id(), "show", tab.surface().show());
        }
    }
}

fn report(id: TabId, action: &str, result: Result<(), SurfaceError>) {
    if let Err(e) = result {
        log::warn!("Failed to {} surface of tab {}: {}", action, id, e);
    }
}
