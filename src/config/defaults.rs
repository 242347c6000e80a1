//! Default settings constants.
//!
//! Keeping defaults in one module lets the resolver, the persisted settings
//! file and the tests share the same literals.

/// Canonical settings file name, looked up at the tree root.
pub(super) const SETTINGS_FILE_NAME: &str = "theme.toml";
/// Settings file name used by the earlier accent-only tooling.
pub(super) const LEGACY_SETTINGS_FILE_NAME: &str = "palette.toml";

pub(super) const DEFAULT_PRIMARY: &str = "#7dd6f6";
pub(super) const DEFAULT_ROUNDING: i64 = 10;
pub(super) const DEFAULT_WAYBAR_FLOATING: bool = true;
pub(super) const DEFAULT_WAYBAR_BORDER_RADIUS: i64 = 12;
pub(super) const DEFAULT_WAYBAR_PADDING: &str = "3px 4px";
pub(super) const DEFAULT_WAYBAR_MARGIN: &str = "4px 6px";
