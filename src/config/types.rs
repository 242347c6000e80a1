//! Settings data model.
//!
//! This module holds struct/enum definitions plus default values. Source
//! discovery, parsing and precedence live in sibling modules so the merge
//! behavior stays centralized in `config::resolve`.

use serde::Deserialize;
use std::path::PathBuf;

use crate::color::{HexColor, DEFAULT_LIGHTEN_FACTOR};

use super::defaults::{
    DEFAULT_PRIMARY, DEFAULT_ROUNDING, DEFAULT_WAYBAR_BORDER_RADIUS, DEFAULT_WAYBAR_FLOATING,
    DEFAULT_WAYBAR_MARGIN, DEFAULT_WAYBAR_PADDING,
};

// ---------------------------------------------------------------------------
// On-disk shape
// ---------------------------------------------------------------------------

/// Parsed `theme.toml`. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct FileConfig {
    pub accent: AccentSection,
    /// `None` when the file has no `[ui]` table at all.
    pub ui: Option<UiSection>,
}

/// `[accent]` table: colour name to hex string.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AccentSection {
    pub primary: Option<String>,
    pub primary_bright: Option<String>,
    pub secondary: Option<String>,
    pub secondary_bright: Option<String>,
}

/// `[ui]` table: layout scalars.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiSection {
    pub rounding: Option<IntValue>,
    pub waybar_floating: Option<bool>,
    pub waybar_border_radius: Option<IntValue>,
    pub waybar_padding: Option<String>,
    pub waybar_margin: Option<String>,
}

/// Integer scalar written either as a TOML integer or a numeric string.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum IntValue {
    Int(i64),
    Text(String),
}

// ---------------------------------------------------------------------------
// Resolution inputs
// ---------------------------------------------------------------------------

/// Command-line overrides; the highest precedence layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub primary: Option<String>,
    pub primary_bright: Option<String>,
    pub secondary: Option<String>,
    pub secondary_bright: Option<String>,
    pub rounding: Option<i64>,
    /// Raw flag token (`true`/`yes`/`1`, `false`/`no`/`0`).
    pub waybar_floating: Option<String>,
    pub waybar_border_radius: Option<i64>,
    pub waybar_padding: Option<String>,
    pub waybar_margin: Option<String>,
}

/// Built-in defaults; the lowest precedence layer.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsDefaults {
    pub primary: String,
    /// Fraction used to derive the bright slots from their base colour.
    pub lighten_factor: f64,
    pub rounding: i64,
    pub waybar_floating: bool,
    pub waybar_border_radius: i64,
    pub waybar_padding: String,
    pub waybar_margin: String,
}

impl Default for SettingsDefaults {
    fn default() -> Self {
        Self {
            primary: DEFAULT_PRIMARY.to_string(),
            lighten_factor: DEFAULT_LIGHTEN_FACTOR,
            rounding: DEFAULT_ROUNDING,
            waybar_floating: DEFAULT_WAYBAR_FLOATING,
            waybar_border_radius: DEFAULT_WAYBAR_BORDER_RADIUS,
            waybar_padding: DEFAULT_WAYBAR_PADDING.to_string(),
            waybar_margin: DEFAULT_WAYBAR_MARGIN.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Resolved output
// ---------------------------------------------------------------------------

/// Named colour slot of the accent palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSlot {
    Primary,
    PrimaryBright,
    Secondary,
    SecondaryBright,
}

impl ColorSlot {
    /// Slots in `[accent]` table order.
    pub const ALL: [Self; 4] = [
        Self::Primary,
        Self::PrimaryBright,
        Self::Secondary,
        Self::SecondaryBright,
    ];

    /// Key used for this slot in the `[accent]` table.
    pub fn key(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::PrimaryBright => "primary_bright",
            Self::Secondary => "secondary",
            Self::SecondaryBright => "secondary_bright",
        }
    }
}

/// Resolved accent colours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub primary: HexColor,
    pub primary_bright: HexColor,
    pub secondary: HexColor,
    pub secondary_bright: HexColor,
}

impl Palette {
    pub fn get(&self, slot: ColorSlot) -> &HexColor {
        match slot {
            ColorSlot::Primary => &self.primary,
            ColorSlot::PrimaryBright => &self.primary_bright,
            ColorSlot::Secondary => &self.secondary,
            ColorSlot::SecondaryBright => &self.secondary_bright,
        }
    }
}

/// Resolved layout scalars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiSettings {
    pub rounding: i64,
    pub waybar_floating: bool,
    pub waybar_border_radius: i64,
    pub waybar_padding: String,
    pub waybar_margin: String,
}

/// Final merged value set for one propagation run. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSettings {
    pub palette: Palette,
    pub ui: UiSettings,
}

// ---------------------------------------------------------------------------
// Loading results
// ---------------------------------------------------------------------------

/// Where the stored settings were read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsSource {
    /// Path given with `--settings`.
    Explicit(PathBuf),
    /// `<root>/theme.toml`.
    Theme(PathBuf),
    /// Legacy `<root>/palette.toml`.
    LegacyPalette(PathBuf),
}

impl SettingsSource {
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Explicit(path) | Self::Theme(path) | Self::LegacyPalette(path) => path,
        }
    }
}

/// Non-fatal compatibility warnings gathered while loading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsDiagnostics {
    pub deprecations: Vec<String>,
}

/// Stored settings plus where they came from.
#[derive(Debug, Clone)]
pub struct LoadedSettings {
    pub stored: FileConfig,
    pub source: SettingsSource,
    /// File the canonical rewriter targets.
    pub canonical_path: PathBuf,
    pub diagnostics: SettingsDiagnostics,
}
