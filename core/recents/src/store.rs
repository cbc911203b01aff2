//! FILENAME: core/recents/src/store.rs
//! PURPOSE: Load, save and update the recents config file on disk.
//! CONTEXT: Single process, single window. The file is always read whole
//!          and rewritten whole; there is no locking.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::NamedTempFile;

use crate::document::{ConfigDocument, RecentEntry};
use crate::error::RecentsError;

/// File name of the config file inside the home directory.
pub const CONFIG_FILE_NAME: &str = ".tailscale_browser";

/// Handle to the config file. Construct once at startup and hand it to
/// whoever owns the recents list.
#[derive(Debug, Clone)]
pub struct RecentsStore {
    path: PathBuf,
}

impl RecentsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<home>/.tailscale_browser`.
    pub fn in_home_dir() -> Result<Self, RecentsError> {
        let home = dirs::home_dir().ok_or(RecentsError::NoHomeDir)?;
        Ok(Self::new(home.join(CONFIG_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the config file, creating or resetting it when it is missing,
    /// unreadable, not JSON, or not a JSON object. A missing `recent` key is
    /// filled in memory only. Entries that are not `{name, url}` string pairs
    /// are dropped and the file is rewritten without them, other keys kept.
    pub fn load(&self) -> ConfigDocument {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("Config {} not found, creating it", self.path.display());
                return self.reset();
            }
            Err(e) => {
                log::warn!("Config {} unreadable ({}), resetting", self.path.display(), e);
                return self.reset();
            }
        };

        match parse_document(&text) {
            Ok(Parsed::Clean(doc)) => doc,
            Ok(Parsed::Repaired { doc, dropped }) => {
                log::warn!(
                    "Config {} had {} malformed recent entries, dropping them",
                    self.path.display(),
                    dropped
                );
                if let Err(e) = self.save(&doc) {
                    log::warn!("Failed to rewrite config {}: {}", self.path.display(), e);
                }
                doc
            }
            Err(e) => {
                log::warn!("Config {} is corrupt ({}), resetting", self.path.display(), e);
                self.reset()
            }
        }
    }

    /// Replace the config file with `doc`, pretty-printed with two-space
    /// indentation. Writes a temp file next to the target and renames it over.
    pub fn save(&self, doc: &ConfigDocument) -> Result<(), RecentsError> {
        let json = serde_json::to_string_pretty(doc)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }

    /// Remember `entry` and persist. Returns `Ok(false)` without touching the
    /// disk when the entry has no name, no url, or a url already present.
    /// On a write error the in-memory list keeps the new entry.
    pub fn record(&self, doc: &mut ConfigDocument, entry: RecentEntry) -> Result<bool, RecentsError> {
        if !doc.push_recent(entry) {
            return Ok(false);
        }
        self.save(doc)?;
        Ok(true)
    }

    fn reset(&self) -> ConfigDocument {
        let doc = ConfigDocument::new();
        if let Err(e) = self.save(&doc) {
            log::warn!("Failed to write default config to {}: {}", self.path.display(), e);
        }
        doc
    }
}

enum Parsed {
    Clean(ConfigDocument),
    /// `recent` was not a list, or some of its entries were unusable.
    Repaired { doc: ConfigDocument, dropped: usize },
}

fn parse_document(text: &str) -> Result<Parsed, RecentsError> {
    let Value::Object(mut extra) = serde_json::from_str::<Value>(text)? else {
        return Err(RecentsError::NotAnObject);
    };

    let (recent, dropped) = match extra.remove("recent") {
        None => (Vec::new(), 0),
        Some(Value::Array(items)) => {
            let total = items.len();
            let recent: Vec<RecentEntry> = items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect();
            let dropped = total - recent.len();
            (recent, dropped)
        }
        Some(_) => (Vec::new(), 1),
    };

    let doc = ConfigDocument { recent, extra };
    if dropped == 0 {
        Ok(Parsed::Clean(doc))
    } else {
        Ok(Parsed::Repaired { doc, dropped })
    }
}
