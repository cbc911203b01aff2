//! FILENAME: core/tabs/src/lib.rs
//! PURPOSE: Tab lifecycle for the tailnet browser.
//! CONTEXT: Toolkit-independent. The desktop shell supplies the web views
//!          (`SurfaceFactory`) and the dialogs (`TabDialogs`).

pub mod address;
pub mod controller;
pub mod dialog;
pub mod error;
pub mod surface;
pub mod tab;

pub use address::{normalize_address, DEFAULT_SCHEME_PREFIX};
pub use controller::{AddTabOutcome, OpenRecentOutcome, TabController};
pub use dialog::{AddTabForm, NewTabRequest, TabDialogs};
pub use error::{SurfaceError, TabsError};
pub use surface::{Bounds, CertificatePolicy, ConsoleLogging, Surface, SurfaceConfig, SurfaceFactory};
pub use tab::{LoadEvent, Tab, TabId, TabInfo};
