//! CLI argument parsing via clap.

use std::path::PathBuf;

use clap::Parser;
use themesync::build_info;
use themesync::config::Overrides;

/// Propagate a single accent palette through a dotfiles tree.
#[derive(Debug, Parser)]
#[command(name = "themesync", version, long_version = build_info::LONG_VERSION)]
pub struct Args {
    /// Root of the managed tree.
    #[arg(long = "root", default_value = ".")]
    pub root: PathBuf,

    /// Settings file (default: <root>/theme.toml, then legacy <root>/palette.toml).
    #[arg(long = "settings", value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Primary accent colour (`#rrggbb`).
    #[arg(long = "accent", value_name = "HEX")]
    pub accent: Option<String>,

    /// Bright variant of the primary accent.
    #[arg(long = "accent-bright", value_name = "HEX")]
    pub accent_bright: Option<String>,

    /// Secondary accent colour.
    #[arg(long = "accent-secondary", value_name = "HEX")]
    pub accent_secondary: Option<String>,

    /// Bright variant of the secondary accent.
    #[arg(long = "accent-secondary-bright", value_name = "HEX")]
    pub accent_secondary_bright: Option<String>,

    /// Hyprland window rounding.
    #[arg(long = "rounding", value_name = "N")]
    pub rounding: Option<i64>,

    /// Floating Waybar style: true/yes/1 or false/no/0.
    #[arg(long = "waybar-floating", value_name = "TOKEN")]
    pub waybar_floating: Option<String>,

    /// Waybar border radius in pixels.
    #[arg(long = "waybar-border-radius", value_name = "N")]
    pub waybar_border_radius: Option<i64>,

    /// Waybar padding (CSS shorthand).
    #[arg(long = "waybar-padding", value_name = "CSS")]
    pub waybar_padding: Option<String>,

    /// Waybar margin (CSS shorthand).
    #[arg(long = "waybar-margin", value_name = "CSS")]
    pub waybar_margin: Option<String>,

    /// Leave the settings file untouched.
    #[arg(long = "skip-palette", alias = "skip-settings")]
    pub skip_palette: bool,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,
}

impl Args {
    /// Highest-precedence layer for settings resolution.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            primary: self.accent.clone(),
            primary_bright: self.accent_bright.clone(),
            secondary: self.accent_secondary.clone(),
            secondary_bright: self.accent_secondary_bright.clone(),
            rounding: self.rounding,
            waybar_floating: self.waybar_floating.clone(),
            waybar_border_radius: self.waybar_border_radius,
            waybar_padding: self.waybar_padding.clone(),
            waybar_margin: self.waybar_margin.clone(),
        }
    }
}
