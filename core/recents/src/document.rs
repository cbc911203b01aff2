//! FILENAME: core/recents/src/document.rs
//! PURPOSE: In-memory shape of the recents config file.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Maximum number of remembered addresses.
pub const MAX_RECENTS: usize = 10;

/// One remembered address. Extra keys on an entry survive a rewrite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentEntry {
    pub name: String,
    pub url: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RecentEntry {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            extra: Map::new(),
        }
    }

    /// Label used by the pickers, e.g. `Router (http://192.168.1.1)`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.url)
    }

    /// Tab title for this entry: the name, or the url when the name is blank.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.url
        } else {
            &self.name
        }
    }
}

/// The whole config file. Keys other than `recent` are carried through
/// untouched so a rewrite never drops them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigDocument {
    #[serde(default)]
    pub recent: Vec<RecentEntry>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ConfigDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains_url(&self, url: &str) -> bool {
        self.recent.iter().any(|entry| entry.url == url)
    }

    /// Insert `entry` at the front if it has a name and a url that is not
    /// already remembered, then drop everything past [`MAX_RECENTS`].
    /// Returns whether the list changed.
    pub fn push_recent(&mut self, entry: RecentEntry) -> bool {
        if entry.name.is_empty() || entry.url.is_empty() || self.contains_url(&entry.url) {
            return false;
        }
        self.recent.insert(0, entry);
        self.recent.truncate(MAX_RECENTS);
        true
    }

    pub fn labels(&self) -> Vec<String> {
        self.recent.iter().map(RecentEntry::label).collect()
    }

    pub fn get(&self, index: usize) -> Option<&RecentEntry> {
        self.recent.get(index)
    }
}
