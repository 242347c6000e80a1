//! Settings loading, resolution and persistence.
//!
//! Values resolve in this order of precedence (highest wins):
//! 1. Command-line overrides
//! 2. The stored settings file: `--settings PATH`, else `<root>/theme.toml`
//!    (legacy `<root>/palette.toml` fallback)
//! 3. Built-in defaults
//!
//! A missing settings file is fatal; absent keys inside it are not.

mod defaults;
mod loader;
mod persist;
mod resolve;
mod sources;
mod types;

pub use loader::load_settings;
pub use persist::{persist_settings, render_settings_file};
pub use resolve::{parse_flag_token, resolve};
pub use types::{
    AccentSection, ColorSlot, FileConfig, IntValue, LoadedSettings, Overrides, Palette,
    ResolvedSettings, SettingsDefaults, SettingsDiagnostics, SettingsSource, UiSection,
    UiSettings,
};
