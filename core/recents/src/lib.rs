//! FILENAME: core/recents/src/lib.rs
//! Recents store
//!
//! Keeps the short list of recently opened addresses in
//! `~/.tailscale_browser` as `{"recent": [{"name": ..., "url": ...}]}`.

mod document;
mod error;
mod store;

pub use document::{ConfigDocument, RecentEntry, MAX_RECENTS};
pub use error::RecentsError;
pub use store::{RecentsStore, CONFIG_FILE_NAME};
