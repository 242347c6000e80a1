//! End-to-end propagation passes over throwaway trees.
//!
//! Library-level tests drive `load_settings -> resolve -> apply::run` the way
//! the binary does; the `binary_*` tests run the built executable.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use pretty_assertions::assert_eq;
use themesync::apply::{self, ApplyOptions, ApplyReport};
use themesync::config::{load_settings, resolve, Overrides, SettingsDefaults};
use themesync::error::{ApplyError, ConfigError};

fn tree() -> tempfile::TempDir {
    tempfile::Builder::new()
        .prefix("themesync-propagate-")
        .tempdir()
        .expect("temp tree")
}

fn write(root: &Path, relative: &str, text: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(path, text).expect("write fixture");
}

fn read(root: &Path, relative: &str) -> String {
    fs::read_to_string(root.join(relative)).expect("read fixture")
}

fn pass(root: &Path, overrides: &Overrides, options: ApplyOptions) -> Result<ApplyReport, ApplyError> {
    let loaded = load_settings(root, None)?;
    let settings = resolve(overrides, &loaded.stored, &SettingsDefaults::default())?;
    apply::run(root, &loaded, &settings, options)
}

#[test]
fn default_primary_lands_in_marked_css_and_second_pass_is_quiet() {
    let dir = tree();
    let root = dir.path();
    write(root, "theme.toml", "");
    write(root, "mako/style.css", "color: #000000; /* accent:primary */\n");

    let first = pass(root, &Overrides::default(), ApplyOptions::default()).unwrap();
    assert_eq!(first.updated, vec![PathBuf::from("mako/style.css")]);
    assert_eq!(
        read(root, "mako/style.css"),
        "color: #7dd6f6; /* accent:primary */\n"
    );

    let second = pass(root, &Overrides::default(), ApplyOptions::default()).unwrap();
    assert!(second.is_empty(), "unexpected updates: {:?}", second.updated);
}

#[test]
fn canonical_settings_file_carries_derived_brights() {
    let dir = tree();
    let root = dir.path();
    write(root, "theme.toml", "[accent]\nprimary = \"FF0000\"\n");

    let report = pass(root, &Overrides::default(), ApplyOptions::default()).unwrap();
    assert_eq!(report.settings_written, Some(root.join("theme.toml")));
    assert_eq!(
        read(root, "theme.toml"),
        "# Theme configuration (colors + UI)\n\
         # Managed by themesync\n\
         \n\
         [accent]\n\
         primary = \"#ff0000\"\n\
         primary_bright = \"#ff3333\"\n\
         secondary = \"#ff0000\"\n\
         secondary_bright = \"#ff3333\"\n"
    );
}

#[test]
fn missing_settings_file_fails_without_touching_the_tree() {
    let dir = tree();
    let root = dir.path();
    write(root, "a.css", "color: #000000; /* accent:primary */\n");

    let err = pass(root, &Overrides::default(), ApplyOptions::default()).unwrap_err();
    assert!(
        matches!(err, ApplyError::Config(ConfigError::MissingSettingsFile(_))),
        "unexpected error: {err}"
    );
    assert_eq!(read(root, "a.css"), "color: #000000; /* accent:primary */\n");
    assert!(!root.join("theme.toml").exists());
}

#[test]
fn invalid_override_fails_before_any_write() {
    let dir = tree();
    let root = dir.path();
    write(root, "theme.toml", "[accent]\nprimary = \"#123456\"\n");
    write(root, "a.css", "color: #000000; /* accent:primary */\n");

    let overrides = Overrides {
        secondary: Some("#12345".to_string()),
        ..Overrides::default()
    };
    let err = pass(root, &overrides, ApplyOptions::default()).unwrap_err();
    assert!(matches!(err, ApplyError::Config(ConfigError::Color(_))));
    assert_eq!(read(root, "a.css"), "color: #000000; /* accent:primary */\n");
    assert_eq!(read(root, "theme.toml"), "[accent]\nprimary = \"#123456\"\n");
}

#[test]
fn standalone_marker_binds_the_next_literal_line() {
    let dir = tree();
    let root = dir.path();
    write(root, "theme.toml", "");
    write(
        root,
        "kitty.conf",
        "# accent:secondary-rgba\n\n# still a comment\nactive_border rgba(00000000)\ninactive_border rgba(00000000)\n",
    );
    let overrides = Overrides {
        secondary: Some("#336699".to_string()),
        ..Overrides::default()
    };
    pass(root, &overrides, ApplyOptions::default()).unwrap();
    assert_eq!(
        read(root, "kitty.conf"),
        "# accent:secondary-rgba\n\n# still a comment\nactive_border rgba(336699ff)\ninactive_border rgba(00000000)\n"
    );
}

#[test]
fn skip_option_keeps_hand_written_settings() {
    let dir = tree();
    let root = dir.path();
    let settings = "# hand-tuned\n[accent]\nprimary = \"#abcdef\"\n";
    write(root, "theme.toml", settings);
    write(root, "a.conf", "fg=#000000 # accent:primary\n");

    let report = pass(
        root,
        &Overrides::default(),
        ApplyOptions {
            skip_settings_rewrite: true,
        },
    )
    .unwrap();
    assert_eq!(report.updated, vec![PathBuf::from("a.conf")]);
    assert_eq!(report.settings_written, None);
    assert_eq!(read(root, "theme.toml"), settings);
    assert_eq!(read(root, "a.conf"), "fg=#abcdef # accent:primary\n");
}

#[test]
fn floating_disabled_from_settings_strips_waybar_lines() {
    let dir = tree();
    let root = dir.path();
    write(root, "theme.toml", "[ui]\nwaybar_floating = false\n");
    write(
        root,
        "waybar.css",
        "window#waybar > box {\n    background-color: @bg;\n    \
         border-radius: 12px; /* config:waybar_floating:border-radius */\n    \
         padding: 3px 4px; /* config:waybar_floating:padding */\n    \
         margin: 4px 6px; /* config:waybar_floating:margin */\n}\n",
    );

    let report = pass(root, &Overrides::default(), ApplyOptions::default()).unwrap();
    assert_eq!(report.updated, vec![PathBuf::from("waybar.css")]);
    assert_eq!(
        read(root, "waybar.css"),
        "window#waybar > box {\n    background-color: @bg;\n}\n"
    );
    assert!(read(root, "theme.toml").contains("waybar_floating = false  # config:waybar_floating"));
}

#[test]
fn legacy_palette_file_migrates_to_theme_toml() {
    let dir = tree();
    let root = dir.path();
    write(root, "palette.toml", "[accent]\nprimary = \"#010203\"\n");

    let loaded = load_settings(root, None).unwrap();
    assert_eq!(loaded.diagnostics.deprecations.len(), 1);
    let settings = resolve(&Overrides::default(), &loaded.stored, &SettingsDefaults::default()).unwrap();
    apply::run(root, &loaded, &settings, ApplyOptions::default()).unwrap();

    assert!(read(root, "theme.toml").contains("primary = \"#010203\""));
    assert_eq!(read(root, "palette.toml"), "[accent]\nprimary = \"#010203\"\n");
}

#[test]
fn binary_reports_updates_then_nothing() {
    let dir = tree();
    let root = dir.path();
    write(root, "theme.toml", "");
    write(root, "a.css", "color: #000000; /* accent:primary */\n");

    let run = || {
        Command::new(env!("CARGO_BIN_EXE_themesync"))
            .arg("--root")
            .arg(root)
            .arg("--no-color")
            .output()
            .expect("run themesync")
    };

    let first = run();
    assert!(first.status.success());
    let stdout = String::from_utf8_lossy(&first.stdout);
    assert!(stdout.starts_with("Applied theme updates in:\n - a.css\n"), "{stdout}");
    assert!(stdout.contains("hyprctl reload"));

    let second = run();
    assert!(second.status.success());
    assert_eq!(
        String::from_utf8_lossy(&second.stdout),
        "No files required updates.\n"
    );
}

#[test]
fn binary_exits_nonzero_on_bad_colour() {
    let dir = tree();
    let root = dir.path();
    write(root, "theme.toml", "");

    let output = Command::new(env!("CARGO_BIN_EXE_themesync"))
        .arg("--root")
        .arg(root)
        .args(["--no-color", "--accent", "not-a-colour"])
        .output()
        .expect("run themesync");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"), "{stderr}");
    assert!(stderr.contains("not-a-colour"), "{stderr}");
    assert_eq!(read(root, "theme.toml"), "");
}
