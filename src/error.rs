//! Unified error types for theme propagation.

use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// ColorError
// ---------------------------------------------------------------------------

/// Errors arising from colour validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The value is not exactly six hexadecimal digits (with optional `#`).
    InvalidFormat(String),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(value) => write!(f, "invalid hex colour: {value:?}"),
        }
    }
}

impl std::error::Error for ColorError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading, resolving or persisting the settings file.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
    /// No settings file exists at any searched location.
    MissingSettingsFile(PathBuf),
    Color(ColorError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid settings: {msg}"),
            Self::MissingSettingsFile(path) => write!(
                f,
                "{} is missing; create it before running themesync",
                path.display()
            ),
            Self::Color(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

impl From<ColorError> for ConfigError {
    fn from(e: ColorError) -> Self {
        Self::Color(e)
    }
}

// ---------------------------------------------------------------------------
// ApplyError: one propagation pass
// ---------------------------------------------------------------------------

/// Top-level error type for a propagation pass.
#[derive(Debug)]
pub enum ApplyError {
    Config(ConfigError),
    /// Reading or writing a managed file failed.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The file-tree walk failed.
    Walk(walkdir::Error),
}

impl ApplyError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for ApplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "settings: {e}"),
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Walk(e) => write!(f, "walk: {e}"),
        }
    }
}

impl std::error::Error for ApplyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Io { source, .. } => Some(source),
            Self::Walk(e) => Some(e),
        }
    }
}

impl From<ConfigError> for ApplyError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<walkdir::Error> for ApplyError {
    fn from(e: walkdir::Error) -> Self {
        Self::Walk(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_error_display() {
        assert_eq!(
            ColorError::InvalidFormat("#12".into()).to_string(),
            "invalid hex colour: \"#12\""
        );
    }

    #[test]
    fn config_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let e = ConfigError::from(io_err);
        let s = e.to_string();
        assert!(s.starts_with("io:"), "got: {s}");
        assert!(s.contains("file not found"));
    }

    #[test]
    fn config_error_from_toml() {
        let toml_err: toml::de::Error = toml::from_str::<toml::Value>("x = [unclosed").unwrap_err();
        let e = ConfigError::from(toml_err);
        assert!(e.to_string().starts_with("toml:"));
    }

    #[test]
    fn missing_settings_file_names_the_path() {
        let e = ConfigError::MissingSettingsFile(PathBuf::from("/tmp/theme.toml"));
        assert_eq!(
            e.to_string(),
            "/tmp/theme.toml is missing; create it before running themesync"
        );
    }

    #[test]
    fn apply_error_io_includes_path() {
        let e = ApplyError::io(
            "waybar.css",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(e.to_string(), "waybar.css: denied");
    }

    #[test]
    fn apply_error_from_config_error() {
        let ae = ApplyError::from(ConfigError::from(ColorError::InvalidFormat("zz".into())));
        assert!(ae.to_string().starts_with("settings:"), "got: {ae}");
        assert!(ae.to_string().contains("zz"));
    }
}
