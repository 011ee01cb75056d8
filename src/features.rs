//! Feature modules - non-UI logic
//!
//! Features should not depend on UI components beyond shared constants.

pub mod settings;

pub use settings::{ButtonSettings, DisplaySettings, Settings, SettingsError};
