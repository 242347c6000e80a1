//! Accent marker table and token matching.
//!
//! A marker is a sigil comment such as `/* accent:primary */` that names the
//! palette slot whose value replaces the nearest colour literal. The table is
//! ordered so qualified tokens (`-bright-rgba`) are tried before the shorter
//! tokens they contain.

use regex::Regex;
use std::sync::OnceLock;

use crate::config::{ColorSlot, Palette};

pub mod scan;
pub mod walk;

pub use scan::{rewrite_text, step, ScanState};
pub use walk::{apply_markers, rewrite_file, FileOutcome, SKIPPED_EXTENSIONS};

/// Prefix shared by every marker token; files without it are never parsed.
pub const MARKER_SIGIL: &str = "accent:";

/// Which literal shape a marker rewrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    /// `#rrggbb`
    Hex,
    /// `rgba(rrggbbaa)`
    Rgba,
}

impl LiteralKind {
    /// Regex matching one literal of this kind.
    pub fn pattern(self) -> &'static Regex {
        static HEX: OnceLock<Regex> = OnceLock::new();
        static RGBA: OnceLock<Regex> = OnceLock::new();
        match self {
            Self::Hex => HEX.get_or_init(|| {
                Regex::new(r"#[0-9a-fA-F]{6}").unwrap_or_else(|err| panic!("hex regex: {err}"))
            }),
            Self::Rgba => RGBA.get_or_init(|| {
                Regex::new(r"rgba\([0-9a-fA-F]{8}\)")
                    .unwrap_or_else(|err| panic!("rgba regex: {err}"))
            }),
        }
    }
}

/// One `(token, slot)` pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub token: &'static str,
    pub slot: ColorSlot,
    pub kind: LiteralKind,
}

impl Marker {
    const fn new(token: &'static str, slot: ColorSlot, kind: LiteralKind) -> Self {
        Self { token, slot, kind }
    }

    /// Replacement text for this marker under `palette`.
    pub fn value(&self, palette: &Palette) -> String {
        let color = palette.get(self.slot);
        match self.kind {
            LiteralKind::Hex => color.as_str().to_string(),
            LiteralKind::Rgba => color.rgba(),
        }
    }

    /// True when `line` contains this token at a token boundary.
    pub fn matches(&self, line: &str) -> bool {
        line.match_indices(self.token).any(|(start, token)| {
            line[start + token.len()..]
                .chars()
                .next()
                .map_or(true, |next| !is_token_char(next))
        })
    }
}

/// Markers in match precedence order.
pub const MARKERS: &[Marker] = &[
    Marker::new("accent:primary-bright-rgba", ColorSlot::PrimaryBright, LiteralKind::Rgba),
    Marker::new("accent:primary-bright", ColorSlot::PrimaryBright, LiteralKind::Hex),
    Marker::new("accent:primary-rgba", ColorSlot::Primary, LiteralKind::Rgba),
    Marker::new("accent:primary", ColorSlot::Primary, LiteralKind::Hex),
    Marker::new("accent:secondary-bright-rgba", ColorSlot::SecondaryBright, LiteralKind::Rgba),
    Marker::new("accent:secondary-bright", ColorSlot::SecondaryBright, LiteralKind::Hex),
    Marker::new("accent:secondary-rgba", ColorSlot::Secondary, LiteralKind::Rgba),
    Marker::new("accent:secondary", ColorSlot::Secondary, LiteralKind::Hex),
];

/// First marker (in precedence order) present on `line`.
pub fn find_marker(line: &str) -> Option<&'static Marker> {
    if !line.contains(MARKER_SIGIL) {
        return None;
    }
    MARKERS.iter().find(|marker| marker.matches(line))
}

fn is_token_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'
}
