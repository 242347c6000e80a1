//! Themesync: propagate one accent palette through a dotfiles tree.
//!
//! A single settings file (`theme.toml`) holds the accent colours and a few
//! UI scalars. Every text file under the tree may carry `accent:<token>`
//! markers next to colour literals; a pass rewrites those literals, patches
//! the Hyprland and Waybar configs at the root, and rewrites the settings
//! file in canonical form.
//!
//! # Quick start
//!
//! ```no_run
//! use std::path::Path;
//! use themesync::apply::{run, ApplyOptions};
//! use themesync::config::{load_settings, resolve, Overrides, SettingsDefaults};
//!
//! let root = Path::new(".");
//! let loaded = load_settings(root, None).unwrap();
//! let settings = resolve(&Overrides::default(), &loaded.stored, &SettingsDefaults::default()).unwrap();
//! let report = run(root, &loaded, &settings, ApplyOptions::default()).unwrap();
//! for path in &report.updated {
//!     println!("{}", path.display());
//! }
//! ```

pub mod apply;
pub mod build_info;
pub mod color;
pub mod config;
pub mod error;
pub mod markers;
pub mod patch;
pub mod render;
#[cfg(test)]
pub mod testsupport;
