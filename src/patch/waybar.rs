//! Waybar floating-style block editor.
//!
//! The floating look is three declarations inside `window#waybar > box`,
//! each tagged with a `/* config:waybar_floating:<prop> */` comment. Enabling
//! inserts any missing tagged declaration and then sets every tagged value;
//! disabling drops every tagged declaration whatever its value. Declarations
//! are found at a line start or after `{`, `;` or `*/`, so single-line
//! blocks work too.

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tracing::{debug, info};

use crate::config::UiSettings;
use crate::error::ApplyError;
use crate::markers::walk::{read_optional, relative_to};

/// Waybar stylesheet file name at the tree root.
pub const WAYBAR_STYLESHEET: &str = "waybar.css";

/// Tagged declarations that make up the floating style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatingProperty {
    BorderRadius,
    Padding,
    Margin,
}

impl FloatingProperty {
    pub const ALL: [Self; 3] = [Self::BorderRadius, Self::Padding, Self::Margin];

    /// CSS property name.
    pub fn property(self) -> &'static str {
        match self {
            Self::BorderRadius => "border-radius",
            Self::Padding => "padding",
            Self::Margin => "margin",
        }
    }

    /// Marker text inside the trailing comment.
    pub fn marker(self) -> &'static str {
        match self {
            Self::BorderRadius => "config:waybar_floating:border-radius",
            Self::Padding => "config:waybar_floating:padding",
            Self::Margin => "config:waybar_floating:margin",
        }
    }

    /// Declaration value under `ui`.
    pub fn value(self, ui: &UiSettings) -> String {
        match self {
            Self::BorderRadius => format!("{}px", ui.waybar_border_radius),
            Self::Padding => ui.waybar_padding.clone(),
            Self::Margin => ui.waybar_margin.clone(),
        }
    }

    fn declaration(self, ui: &UiSettings) -> String {
        format!("{}: {}; /* {} */", self.property(), self.value(ui), self.marker())
    }

    /// The tagged declaration wherever it starts: at a line start, or after
    /// `{`, `;` or a closing comment on a single-line block. Groups are the
    /// prefix, indentation, property and marker comment.
    fn declaration_pattern(self) -> &'static Regex {
        static PATTERNS: OnceLock<[Regex; 3]> = OnceLock::new();
        let patterns = PATTERNS.get_or_init(|| {
            Self::ALL.map(|prop| {
                Regex::new(&format!(
                    r"(?m)(^|[{{;]|\*/)([ \t]*)([a-z-]+):[ \t]*[^;\n{{}}]+;[ \t]*(/\*[ \t]*{}[ \t]*\*/)",
                    regex::escape(prop.marker())
                ))
                .unwrap_or_else(|err| panic!("floating declaration regex: {err}"))
            })
        });
        &patterns[self as usize]
    }

    /// A line holding nothing but the tagged declaration, with the newline
    /// before it.
    fn own_line_pattern(self) -> &'static Regex {
        static PATTERNS: OnceLock<[Regex; 3]> = OnceLock::new();
        let patterns = PATTERNS.get_or_init(|| {
            Self::ALL.map(|prop| {
                Regex::new(&format!(
                    r"(?m)\n?^[ \t]*[a-z-]+:[ \t]*[^;\n{{}}]+;[ \t]*/\*[ \t]*{}[ \t]*\*/[ \t]*\r?$",
                    regex::escape(prop.marker())
                ))
                .unwrap_or_else(|err| panic!("floating line regex: {err}"))
            })
        });
        &patterns[self as usize]
    }

    /// Drop every occurrence of this tagged declaration from `text`.
    fn remove_from(self, text: &str) -> String {
        let mut updated = self.own_line_pattern().replace_all(text, "").into_owned();
        // Each in-line removal consumes the prefix of the next occurrence,
        // so repeat until nothing matches.
        loop {
            let next = match self
                .declaration_pattern()
                .replace_all(&updated, |caps: &Captures<'_>| caps[1].to_string())
            {
                Cow::Borrowed(_) => None,
                Cow::Owned(next) => Some(next),
            };
            match next {
                Some(next) => updated = next,
                None => return updated,
            }
        }
    }
}

fn block_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"window#waybar\s*>\s*box\s*\{([^}]*)\}")
            .unwrap_or_else(|err| panic!("waybar block regex: {err}"))
    })
}

fn anchor_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"background-color:\s*[^;]+;[ \t]*\n")
            .unwrap_or_else(|err| panic!("anchor regex: {err}"))
    })
}

/// Apply the floating toggle to stylesheet `text`.
pub fn apply_floating(text: &str, ui: &UiSettings) -> String {
    if !ui.waybar_floating {
        return FloatingProperty::ALL
            .into_iter()
            .fold(text.to_string(), |updated, prop| prop.remove_from(&updated));
    }

    let mut updated = text.to_string();
    for prop in FloatingProperty::ALL {
        if !updated.contains(prop.marker()) {
            updated = insert_declaration(&updated, &prop.declaration(ui));
        }
    }
    for prop in FloatingProperty::ALL {
        let value = prop.value(ui);
        updated = prop
            .declaration_pattern()
            .replace_all(&updated, |caps: &Captures<'_>| {
                format!("{}{}{}: {value}; {}", &caps[1], &caps[2], &caps[3], &caps[4])
            })
            .into_owned();
    }
    updated
}

/// Insert `declaration` into the `window#waybar > box` block.
///
/// Lands right after the `background-color` declaration when there is one,
/// else at the end of the block body. Without the block, `text` is returned
/// unchanged.
fn insert_declaration(text: &str, declaration: &str) -> String {
    let Some(body) = block_pattern().captures(text).and_then(|caps| caps.get(1)) else {
        debug!(declaration, "no `window#waybar > box` block; skipping insertion");
        return text.to_string();
    };
    let insert_at = anchor_pattern()
        .find(body.as_str())
        .map(|anchor| body.start() + anchor.end())
        .unwrap_or(body.end());

    let mut updated = String::with_capacity(text.len() + declaration.len() + 5);
    updated.push_str(&text[..insert_at]);
    updated.push_str("    ");
    updated.push_str(declaration);
    updated.push('\n');
    updated.push_str(&text[insert_at..]);
    updated
}

/// Toggle the floating style in `<root>/waybar.css`.
pub fn sync_floating(root: &Path, ui: &UiSettings) -> Result<Option<PathBuf>, ApplyError> {
    let path = root.join(WAYBAR_STYLESHEET);
    let Some(text) = read_optional(&path)? else {
        debug!(path = %path.display(), "no waybar stylesheet; skipping");
        return Ok(None);
    };
    let updated = apply_floating(&text, ui);
    if updated == text {
        return Ok(None);
    }
    std::fs::write(&path, updated).map_err(|e| ApplyError::io(&path, e))?;
    info!(path = %path.display(), floating = ui.waybar_floating, "patched waybar stylesheet");
    Ok(Some(relative_to(root, &path)))
}
