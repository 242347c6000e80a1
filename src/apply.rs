//! One full propagation pass.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::{persist_settings, LoadedSettings, ResolvedSettings};
use crate::error::ApplyError;
use crate::markers::apply_markers;
use crate::patch::{ensure_layer_rules, sync_floating, sync_rounding};

/// Options that shape a pass beyond the resolved values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyOptions {
    /// Leave the settings file as it is.
    pub skip_settings_rewrite: bool,
}

/// Files touched by a pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Modified paths relative to the root, first-seen order, no duplicates.
    pub updated: Vec<PathBuf>,
    /// Settings file path when it was rewritten.
    pub settings_written: Option<PathBuf>,
}

impl ApplyReport {
    fn record(&mut self, path: PathBuf) {
        if !self.updated.contains(&path) {
            self.updated.push(path);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.updated.is_empty()
    }
}

/// Propagate `settings` through the tree at `root`.
///
/// Order: accent markers, hyprland rounding, hyprland layer rules, waybar
/// floating style, then the canonical settings file.
pub fn run(
    root: &Path,
    loaded: &LoadedSettings,
    settings: &ResolvedSettings,
    options: ApplyOptions,
) -> Result<ApplyReport, ApplyError> {
    let mut report = ApplyReport::default();

    for path in apply_markers(root, settings)? {
        report.record(path);
    }
    let patches = [
        sync_rounding(root, settings.ui.rounding)?,
        ensure_layer_rules(root)?,
        sync_floating(root, &settings.ui)?,
    ];
    for path in patches.into_iter().flatten() {
        report.record(path);
    }

    if !options.skip_settings_rewrite {
        let include_ui = loaded.stored.ui.is_some();
        persist_settings(&loaded.canonical_path, settings, include_ui)?;
        report.settings_written = Some(loaded.canonical_path.clone());
    }

    info!(updated = report.updated.len(), "propagation pass finished");
    Ok(report)
}
