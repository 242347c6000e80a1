//! Settings-file source discovery and legacy-source diagnostics.
//!
//! Source order implements the precedence contract:
//! explicit path > `<root>/theme.toml` > legacy `<root>/palette.toml`.
//! No built-in fallback: a missing file is fatal before anything is touched.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::defaults::{LEGACY_SETTINGS_FILE_NAME, SETTINGS_FILE_NAME};
use super::{SettingsDiagnostics, SettingsSource};

/// Read settings text from the highest-precedence available source.
pub(super) fn read_settings_text_with_sources<FRead>(
    root: &Path,
    path_override: Option<&Path>,
    read_file: &FRead,
) -> Result<(String, SettingsSource), ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
{
    // 1) Explicit override path from CLI takes absolute precedence.
    if let Some(path) = path_override {
        let text = read_or_missing(path, read_file)?
            .ok_or_else(|| ConfigError::MissingSettingsFile(path.to_path_buf()))?;
        return Ok((text, SettingsSource::Explicit(path.to_path_buf())));
    }

    // 2) Canonical file at the tree root.
    let canonical = root.join(SETTINGS_FILE_NAME);
    if let Some(text) = read_or_missing(&canonical, read_file)? {
        return Ok((text, SettingsSource::Theme(canonical)));
    }

    // 3) Legacy palette file from the accent-only tooling.
    let legacy = root.join(LEGACY_SETTINGS_FILE_NAME);
    if let Some(text) = read_or_missing(&legacy, read_file)? {
        return Ok((text, SettingsSource::LegacyPalette(legacy)));
    }

    Err(ConfigError::MissingSettingsFile(canonical))
}

/// Path the canonical rewriter writes for `source`.
pub(super) fn canonical_path_for(root: &Path, source: &SettingsSource) -> PathBuf {
    match source {
        SettingsSource::Explicit(path) => path.clone(),
        SettingsSource::Theme(_) | SettingsSource::LegacyPalette(_) => {
            root.join(SETTINGS_FILE_NAME)
        }
    }
}

/// Record compatibility diagnostics when settings came from legacy sources.
pub(super) fn collect_legacy_source_warnings(
    source: &SettingsSource,
    diagnostics: &mut SettingsDiagnostics,
) {
    match source {
        SettingsSource::Explicit(path) => {
            if path
                .file_name()
                .is_some_and(|name| name == LEGACY_SETTINGS_FILE_NAME)
            {
                diagnostics.deprecations.push(format!(
                    "Settings file `{}` uses deprecated `{LEGACY_SETTINGS_FILE_NAME}` naming; rename to `{SETTINGS_FILE_NAME}`.",
                    path.display()
                ));
            }
        }
        SettingsSource::LegacyPalette(path) => diagnostics.deprecations.push(format!(
            "Using legacy `{}`; values will be written to `{SETTINGS_FILE_NAME}` unless --skip-palette is given.",
            path.display()
        )),
        SettingsSource::Theme(_) => {}
    }
}

fn read_or_missing<FRead>(path: &Path, read_file: &FRead) -> Result<Option<String>, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
{
    match read_file(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(ConfigError::Io(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn fake_fs(files: &[(&str, &str)]) -> impl Fn(&Path) -> Result<String, std::io::Error> {
        let files: BTreeMap<PathBuf, String> = files
            .iter()
            .map(|(path, text)| (PathBuf::from(path), text.to_string()))
            .collect();
        move |path: &Path| {
            files
                .get(path)
                .cloned()
                .ok_or_else(|| std::io::Error::new(ErrorKind::NotFound, "missing"))
        }
    }

    #[test]
    fn explicit_path_wins_over_root_files() {
        let read = fake_fs(&[("/t/theme.toml", "a"), ("/elsewhere.toml", "b")]);
        let (text, source) =
            read_settings_text_with_sources(Path::new("/t"), Some(Path::new("/elsewhere.toml")), &read)
                .unwrap();
        assert_eq!(text, "b");
        assert_eq!(source, SettingsSource::Explicit(PathBuf::from("/elsewhere.toml")));
    }

    #[test]
    fn missing_explicit_path_is_fatal() {
        let read = fake_fs(&[("/t/theme.toml", "a")]);
        let err = read_settings_text_with_sources(Path::new("/t"), Some(Path::new("/nope.toml")), &read)
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingSettingsFile(ref p) if p == Path::new("/nope.toml")));
    }

    #[test]
    fn theme_file_preferred_over_legacy_palette() {
        let read = fake_fs(&[("/t/theme.toml", "theme"), ("/t/palette.toml", "palette")]);
        let (text, source) = read_settings_text_with_sources(Path::new("/t"), None, &read).unwrap();
        assert_eq!(text, "theme");
        assert_eq!(source, SettingsSource::Theme(PathBuf::from("/t/theme.toml")));
    }

    #[test]
    fn legacy_palette_used_when_theme_missing() {
        let read = fake_fs(&[("/t/palette.toml", "palette")]);
        let (text, source) = read_settings_text_with_sources(Path::new("/t"), None, &read).unwrap();
        assert_eq!(text, "palette");
        assert_eq!(
            canonical_path_for(Path::new("/t"), &source),
            PathBuf::from("/t/theme.toml")
        );
        let mut diagnostics = SettingsDiagnostics::default();
        collect_legacy_source_warnings(&source, &mut diagnostics);
        assert_eq!(diagnostics.deprecations.len(), 1);
        assert!(diagnostics.deprecations[0].contains("palette.toml"));
    }

    #[test]
    fn no_settings_file_reports_canonical_path() {
        let read = fake_fs(&[]);
        let err = read_settings_text_with_sources(Path::new("/t"), None, &read).unwrap_err();
        assert!(matches!(err, ConfigError::MissingSettingsFile(ref p) if p == Path::new("/t/theme.toml")));
    }

    #[test]
    fn other_read_errors_propagate() {
        let read = |_: &Path| -> Result<String, std::io::Error> {
            Err(std::io::Error::new(ErrorKind::PermissionDenied, "denied"))
        };
        let err = read_settings_text_with_sources(Path::new("/t"), None, &read).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn explicit_theme_file_has_no_diagnostics() {
        let mut diagnostics = SettingsDiagnostics::default();
        collect_legacy_source_warnings(
            &SettingsSource::Explicit(PathBuf::from("/x/theme.toml")),
            &mut diagnostics,
        );
        assert!(diagnostics.deprecations.is_empty());
    }
}
