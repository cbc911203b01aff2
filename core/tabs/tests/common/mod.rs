//! FILENAME: tests/common/mod.rs
//! Test harness and fakes for tab controller integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use recents::{RecentEntry, RecentsStore};
use tabs::{
    AddTabOutcome, Bounds, NewTabRequest, Surface, SurfaceConfig, SurfaceError, SurfaceFactory,
    TabController, TabDialogs, TabId,
};
use tempfile::TempDir;

// ============================================================================
// FAKE SURFACES
// ============================================================================

/// Everything the controller asked the fake web views to do, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    Create(TabId, String),
    Show(TabId),
    Hide(TabId),
    SetBounds(TabId, Bounds),
    Release(TabId),
}

pub type CallLog = Rc<RefCell<Vec<SurfaceCall>>>;

pub struct FakeSurface {
    id: TabId,
    pub config: SurfaceConfig,
    pub initial_bounds: Bounds,
    calls: CallLog,
}

impl Surface for FakeSurface {
    fn show(&self) -> Result<(), SurfaceError> {
        self.calls.borrow_mut().push(SurfaceCall::Show(self.id));
        Ok(())
    }

    fn hide(&self) -> Result<(), SurfaceError> {
        self.calls.borrow_mut().push(SurfaceCall::Hide(self.id));
        Ok(())
    }

    fn set_bounds(&self, bounds: Bounds) -> Result<(), SurfaceError> {
        self.calls.borrow_mut().push(SurfaceCall::SetBounds(self.id, bounds));
        Ok(())
    }

    fn release(self) -> Result<(), SurfaceError> {
        self.calls.borrow_mut().push(SurfaceCall::Release(self.id));
        Ok(())
    }
}

pub struct FakeFactory {
    calls: CallLog,
    /// URLs the factory refuses to open.
    pub failing_urls: Vec<String>,
}

impl SurfaceFactory for FakeFactory {
    type Surface = FakeSurface;

    fn create(
        &mut self,
        id: TabId,
        url: &str,
        config: &SurfaceConfig,
        bounds: Bounds,
    ) -> Result<FakeSurface, SurfaceError> {
        if self.failing_urls.iter().any(|u| u == url) {
            return Err(SurfaceError::new(format!("cannot load {}", url)));
        }
        self.calls.borrow_mut().push(SurfaceCall::Create(id, url.to_string()));
        Ok(FakeSurface {
            id,
            config: *config,
            initial_bounds: bounds,
            calls: self.calls.clone(),
        })
    }
}

// ============================================================================
// SCRIPTED DIALOGS
// ============================================================================

/// Dialogs that answer from a queue. An empty queue answers "cancel".
#[derive(Default)]
pub struct ScriptedDialogs {
    new_tab_answers: VecDeque<Option<NewTabRequest>>,
    pick_answers: VecDeque<Option<usize>>,
    pub seen_recents: Vec<Vec<RecentEntry>>,
    pub seen_labels: Vec<Vec<String>>,
}

impl ScriptedDialogs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer_new_tab(mut self, name: &str, address: &str) -> Self {
        self.new_tab_answers
            .push_back(Some(NewTabRequest::new(name, address)));
        self
    }

    pub fn cancel_new_tab(mut self) -> Self {
        self.new_tab_answers.push_back(None);
        self
    }

    pub fn pick(mut self, index: usize) -> Self {
        self.pick_answers.push_back(Some(index));
        self
    }

    pub fn cancel_pick(mut self) -> Self {
        self.pick_answers.push_back(None);
        self
    }
}

impl TabDialogs for ScriptedDialogs {
    fn prompt_new_tab(&mut self, recents: &[RecentEntry]) -> Option<NewTabRequest> {
        self.seen_recents.push(recents.to_vec());
        self.new_tab_answers.pop_front().flatten()
    }

    fn pick_recent(&mut self, labels: &[String]) -> Option<usize> {
        self.seen_labels.push(labels.to_vec());
        self.pick_answers.pop_front().flatten()
    }
}

// ============================================================================
// HARNESS
// ============================================================================

/// A controller over fake surfaces with its config file in a temp dir.
pub struct TestHarness {
    pub dir: TempDir,
    pub controller: TabController<FakeFactory>,
    pub calls: CallLog,
}

impl TestHarness {
    /// Fresh harness; the config file does not exist yet.
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        Self::build(dir, Vec::new())
    }

    /// Harness whose config file starts with `json`.
    pub fn with_config(json: &str) -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".tailscale_browser"), json).unwrap();
        Self::build(dir, Vec::new())
    }

    /// Harness whose factory fails for the given URLs.
    pub fn with_failing_urls(urls: &[&str]) -> Self {
        let dir = TempDir::new().unwrap();
        Self::build(dir, urls.iter().map(|u| u.to_string()).collect())
    }

    fn build(dir: TempDir, failing_urls: Vec<String>) -> Self {
        let calls: CallLog = Rc::new(RefCell::new(Vec::new()));
        let factory = FakeFactory {
            calls: calls.clone(),
            failing_urls,
        };
        let store = RecentsStore::new(dir.path().join(".tailscale_browser"));
        let controller = TabController::new(store, factory);
        TestHarness {
            dir,
            controller,
            calls,
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join(".tailscale_browser")
    }

    pub fn config_json(&self) -> serde_json::Value {
        let text = fs::read_to_string(self.config_path()).unwrap();
        serde_json::from_str(&text).unwrap()
    }

    /// Run the add-tab flow with a confirmed dialog and return the new tab id.
    pub fn open(&mut self, name: &str, address: &str) -> TabId {
        let mut dialogs = ScriptedDialogs::new().answer_new_tab(name, address);
        match self.controller.add_tab(&mut dialogs).unwrap() {
            AddTabOutcome::Opened { id, .. } => id,
            other => panic!("expected a tab to open, got {:?}", other),
        }
    }

    pub fn labels(&self) -> Vec<String> {
        self.controller
            .tabs()
            .iter()
            .map(|tab| tab.label().to_string())
            .collect()
    }

    pub fn take_calls(&self) -> Vec<SurfaceCall> {
        std::mem::take(&mut *self.calls.borrow_mut())
    }
}
