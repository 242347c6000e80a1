//! Hyprland config patches.
//!
//! Two narrow edits on `hyprland.conf`: the `rounding = N # config:rounding`
//! line is updated in place (never inserted), and the layer rules Waybar
//! needs are appended when absent.

use regex::{Captures, Regex};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tracing::{debug, info};

use crate::error::ApplyError;
use crate::markers::walk::{read_optional, relative_to};

/// Hyprland config file name at the tree root.
pub const HYPR_CONFIG: &str = "hyprland.conf";

/// Lines Waybar's blur needs; appended verbatim when missing.
pub const REQUIRED_LAYER_RULES: &[&str] = &[
    "layerrule = blur, waybar",
    "layerrule = ignorezero, waybar",
];

fn rounding_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(rounding[ \t]*=[ \t]*)-?\d+([ \t]*#[ \t]*config:rounding)")
            .unwrap_or_else(|err| panic!("rounding regex: {err}"))
    })
}

/// Set the value of every marker-tagged rounding line.
///
/// Returns `None` when no tagged line exists or the value already matches.
pub fn update_rounding(text: &str, rounding: i64) -> Option<String> {
    let pattern = rounding_pattern();
    if !pattern.is_match(text) {
        return None;
    }
    let updated = pattern.replace_all(text, |caps: &Captures<'_>| {
        format!("{}{rounding}{}", &caps[1], &caps[2])
    });
    (updated != text).then(|| updated.into_owned())
}

/// Append each of `required` that is not already present verbatim.
pub fn ensure_required_lines(text: &str, required: &[&str]) -> Option<String> {
    let mut updated = text.to_string();
    let mut changed = false;
    for line in required {
        if updated.contains(line) {
            continue;
        }
        if !updated.is_empty() && !updated.ends_with('\n') {
            updated.push('\n');
        }
        updated.push_str(line);
        updated.push('\n');
        changed = true;
    }
    changed.then_some(updated)
}

/// Sync the rounding line in `<root>/hyprland.conf`.
pub fn sync_rounding(root: &Path, rounding: i64) -> Result<Option<PathBuf>, ApplyError> {
    patch_file(root, |text| update_rounding(text, rounding))
}

/// Ensure Waybar's layer rules exist in `<root>/hyprland.conf`.
pub fn ensure_layer_rules(root: &Path) -> Result<Option<PathBuf>, ApplyError> {
    patch_file(root, |text| ensure_required_lines(text, REQUIRED_LAYER_RULES))
}

fn patch_file<F>(root: &Path, edit: F) -> Result<Option<PathBuf>, ApplyError>
where
    F: FnOnce(&str) -> Option<String>,
{
    let path = root.join(HYPR_CONFIG);
    let Some(text) = read_optional(&path)? else {
        debug!(path = %path.display(), "no hyprland config; skipping");
        return Ok(None);
    };
    let Some(updated) = edit(&text) else {
        return Ok(None);
    };
    std::fs::write(&path, updated).map_err(|e| ApplyError::io(&path, e))?;
    info!(path = %path.display(), "patched hyprland config");
    Ok(Some(relative_to(root, &path)))
}
