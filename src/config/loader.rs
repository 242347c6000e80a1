//! Top-level settings loading pipeline.

use std::path::Path;

use tracing::debug;

use crate::error::ConfigError;

use super::sources::{
    canonical_path_for, collect_legacy_source_warnings, read_settings_text_with_sources,
};
use super::{FileConfig, LoadedSettings, SettingsDiagnostics};

/// Load the stored settings for the tree at `root`.
///
/// `path_override` is an explicit settings file path (from `--settings`).
pub fn load_settings(root: &Path, path_override: Option<&Path>) -> Result<LoadedSettings, ConfigError> {
    load_settings_from_sources(root, path_override, |path| std::fs::read_to_string(path))
}

pub(super) fn load_settings_from_sources<FRead>(
    root: &Path,
    path_override: Option<&Path>,
    read_file: FRead,
) -> Result<LoadedSettings, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
{
    let (text, source) = read_settings_text_with_sources(root, path_override, &read_file)?;
    debug!(path = %source.path().display(), "loaded settings file");
    let mut diagnostics = SettingsDiagnostics::default();
    collect_legacy_source_warnings(&source, &mut diagnostics);
    let stored: FileConfig = toml::from_str(&text)?;
    let canonical_path = canonical_path_for(root, &source);

    Ok(LoadedSettings {
        stored,
        source,
        canonical_path,
        diagnostics,
    })
}
