//! FILENAME: core/tabs/src/surface.rs
//! PURPOSE: Seam between the tab controller and the host's web view.
//! CONTEXT: The desktop shell implements these traits with real webviews;
//!          tests implement them with recorders.

use serde::{Deserialize, Serialize};

use crate::error::SurfaceError;
use crate::tab::TabId;

/// Rectangle in logical pixels, relative to the window's client area.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
}

/// How a surface treats TLS certificate failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CertificatePolicy {
    /// Load the page anyway. Only sane on a trusted private network.
    AcceptInvalid,
    Verify,
}

/// Whether page `console.*` output reaches the process output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsoleLogging {
    Suppressed,
    Forwarded,
}

/// Settings handed to the factory for every new surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceConfig {
    pub certificates: CertificatePolicy,
    pub console: ConsoleLogging,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            certificates: CertificatePolicy::AcceptInvalid,
            console: ConsoleLogging::Suppressed,
        }
    }
}

/// One live web view owned by a tab.
pub trait Surface {
    fn show(&self) -> Result<(), SurfaceError>;

    fn hide(&self) -> Result<(), SurfaceError>;

    fn set_bounds(&self, bounds: Bounds) -> Result<(), SurfaceError>;

    /// Destroy the underlying view.
    fn release(self) -> Result<(), SurfaceError>
    where
        Self: Sized;
}

/// Creates surfaces pointed at a URL. A freshly created surface is visible.
pub trait SurfaceFactory {
    type Surface: Surface;

    fn create(
        &mut self,
        id: TabId,
        url: &str,
        config: &SurfaceConfig,
        bounds: Bounds,
    ) -> Result<Self::Surface, SurfaceError>;
}
