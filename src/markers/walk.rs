//! Managed-file enumeration and in-place rewriting.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::config::ResolvedSettings;
use crate::error::ApplyError;

use super::rewrite_text;

/// Raster-image extensions that are never read.
pub const SKIPPED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif"];

/// What happened to one file during the marker pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Contents changed and were written back.
    Rewritten,
    /// Markers present but every bound literal already held its value.
    Unchanged,
    /// No marker sigil anywhere in the file.
    NoMarkers,
    /// Not valid UTF-8; skipped.
    NotText,
}

/// Rewrite marker-bound literals in every managed file under `root`.
///
/// Returns the paths (relative to `root`) that were rewritten, in walk order.
/// I/O failures abort the pass; files already rewritten stay rewritten.
pub fn apply_markers(root: &Path, settings: &ResolvedSettings) -> Result<Vec<PathBuf>, ApplyError> {
    let mut updated = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !is_managed_file(&entry) || has_skipped_extension(entry.path()) {
            continue;
        }
        if rewrite_file(entry.path(), settings)? == FileOutcome::Rewritten {
            updated.push(relative_to(root, entry.path()));
        }
    }
    Ok(updated)
}

/// Run the marker scan over one file, writing it back only when it changed.
pub fn rewrite_file(path: &Path, settings: &ResolvedSettings) -> Result<FileOutcome, ApplyError> {
    let bytes = std::fs::read(path).map_err(|e| ApplyError::io(path, e))?;
    let Ok(text) = String::from_utf8(bytes) else {
        debug!(path = %path.display(), "skipping non-UTF-8 file");
        return Ok(FileOutcome::NotText);
    };
    if !text.contains(super::MARKER_SIGIL) {
        return Ok(FileOutcome::NoMarkers);
    }
    let Some(updated) = rewrite_text(&text, &settings.palette) else {
        debug!(path = %path.display(), "markers already up to date");
        return Ok(FileOutcome::Unchanged);
    };
    std::fs::write(path, updated).map_err(|e| ApplyError::io(path, e))?;
    info!(path = %path.display(), "rewrote accent markers");
    Ok(FileOutcome::Rewritten)
}

/// Regular files, plus symlinks whose target is a file. Directory links are
/// not descended into.
fn is_managed_file(entry: &walkdir::DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

fn has_skipped_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SKIPPED_EXTENSIONS
                .iter()
                .any(|skipped| ext.eq_ignore_ascii_case(skipped))
        })
}

pub(crate) fn relative_to(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}

/// Read `path` as text, treating a missing file as `None`.
pub(crate) fn read_optional(path: &Path) -> Result<Option<String>, ApplyError> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(ApplyError::io(path, e)),
    }
}
