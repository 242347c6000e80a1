//! Format-specific structural patches.
//!
//! Unlike the marker pass these target known files at the tree root. A
//! missing file or a missing anchor inside it turns the patch into a no-op.

pub mod hypr;
pub mod waybar;

pub use hypr::{ensure_layer_rules, sync_rounding, HYPR_CONFIG, REQUIRED_LAYER_RULES};
pub use waybar::{apply_floating, sync_floating, FloatingProperty, WAYBAR_STYLESHEET};
