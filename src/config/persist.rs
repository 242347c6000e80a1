//! Canonical settings rewriter.
//!
//! The `[accent]` section is regenerated in full from the resolved values.
//! The `[ui]` section is emitted only when the stored file already had one;
//! a file without it stays without it.

use std::path::Path;

use tracing::info;

use crate::error::ConfigError;

use super::{ColorSlot, ResolvedSettings};

const HEADER: &[&str] = &[
    "# Theme configuration (colors + UI)",
    "# Managed by themesync",
];

/// Write the canonical settings file at `path`.
pub fn persist_settings(
    path: &Path,
    settings: &ResolvedSettings,
    include_ui: bool,
) -> Result<(), ConfigError> {
    let text = render_settings_file(settings, include_ui);
    std::fs::write(path, text)?;
    info!(path = %path.display(), include_ui, "rewrote settings file");
    Ok(())
}

/// Render the canonical settings file text.
pub fn render_settings_file(settings: &ResolvedSettings, include_ui: bool) -> String {
    let palette = &settings.palette;
    let mut lines: Vec<String> = HEADER.iter().map(|line| line.to_string()).collect();
    lines.push(String::new());
    lines.push("[accent]".to_string());
    for slot in ColorSlot::ALL {
        lines.push(format!(
            "{} = {}",
            slot.key(),
            toml_string(palette.get(slot).as_str())
        ));
    }
    lines.push(String::new());

    if include_ui {
        let ui = &settings.ui;
        lines.push("[ui]".to_string());
        lines.push(format!("rounding = {}  # config:rounding", ui.rounding));
        lines.push(String::new());
        lines.push("# Waybar style".to_string());
        lines.push(format!(
            "waybar_floating = {}  # config:waybar_floating",
            ui.waybar_floating
        ));
        lines.push(format!(
            "waybar_border_radius = {}  # config:waybar_floating:border-radius",
            ui.waybar_border_radius
        ));
        lines.push(format!(
            "waybar_padding = {}  # config:waybar_floating:padding",
            toml_string(&ui.waybar_padding)
        ));
        lines.push(format!(
            "waybar_margin = {}  # config:waybar_floating:margin",
            toml_string(&ui.waybar_margin)
        ));
        lines.push(String::new());
    }

    lines.join("\n")
}

fn toml_string(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}
