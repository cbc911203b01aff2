// PURPOSE: Exposes all command sub-modules to the rest of the app.

pub mod recent_commands;
pub mod tab_commands;
pub mod utils;

// Re-export commands so they are accessible via crate::commands::*
pub use recent_commands::*;
pub use tab_commands::*;
