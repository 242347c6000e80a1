//! Per-text marker rewriting.
//!
//! The scan is a pure function of the input text and palette. Standalone
//! markers are carried between lines as an explicit [`ScanState`] value:
//!
//! * a line holding a marker and a literal of its kind is rewritten in place
//!   and leaves the state `Idle`;
//! * a comment-only marker line sets `Pending(marker)` and is left alone;
//! * while pending, the next line with any colour literal is rewritten for
//!   the pending marker and the state returns to `Idle`.

use regex::Regex;

use crate::config::Palette;

use super::{find_marker, LiteralKind, Marker, MARKER_SIGIL};

/// Characters that may surround a standalone marker token (comment syntax).
const COMMENT_CHARS: &[char] = &['#', '/', '*', ';', '!', '<', '>', '-', '"', '%'];

/// Scanner state threaded through the line loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    #[default]
    Idle,
    /// A standalone marker is waiting for the next literal-bearing line.
    Pending(&'static Marker),
}

/// Outcome of replacing the first literal on a line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Replace {
    NoLiteral,
    /// A literal was found and already holds the replacement text.
    Unchanged,
    Changed(String),
}

/// Advance the scanner over one line.
///
/// Returns the next state and, when the line text changed, its new content.
pub fn step(state: ScanState, line: &str, palette: &Palette) -> (ScanState, Option<String>) {
    if let Some(marker) = find_marker(line) {
        return match replace_first(marker.kind.pattern(), line, &marker.value(palette)) {
            Replace::Changed(updated) => (ScanState::Idle, Some(updated)),
            Replace::Unchanged => (ScanState::Idle, None),
            Replace::NoLiteral if is_standalone(line, marker) => (ScanState::Pending(marker), None),
            // A marker line that is neither inline nor standalone still ends
            // any earlier pending binding.
            Replace::NoLiteral => (ScanState::Idle, None),
        };
    }

    let ScanState::Pending(marker) = state else {
        return (state, None);
    };
    if !has_any_literal(line) {
        return (state, None);
    }
    match replace_first(marker.kind.pattern(), line, &marker.value(palette)) {
        Replace::Changed(updated) => (ScanState::Idle, Some(updated)),
        Replace::Unchanged | Replace::NoLiteral => (ScanState::Idle, None),
    }
}

/// Rewrite every marker-bound literal in `text`.
///
/// Returns `None` when nothing changed, so callers can skip the write.
/// Each line keeps its own terminator (`\n`, `\r\n` or none at EOF).
pub fn rewrite_text(text: &str, palette: &Palette) -> Option<String> {
    if !text.contains(MARKER_SIGIL) {
        return None;
    }

    let mut state = ScanState::Idle;
    let mut changed = false;
    let mut out = String::with_capacity(text.len());
    for raw in text.split_inclusive('\n') {
        let (line, eol) = split_terminator(raw);
        let (next, updated) = step(state, line, palette);
        state = next;
        match updated {
            Some(updated) => {
                changed = true;
                out.push_str(&updated);
            }
            None => out.push_str(line),
        }
        out.push_str(eol);
    }
    changed.then_some(out)
}

fn split_terminator(raw: &str) -> (&str, &str) {
    if let Some(line) = raw.strip_suffix("\r\n") {
        (line, "\r\n")
    } else if let Some(line) = raw.strip_suffix('\n') {
        (line, "\n")
    } else {
        (raw, "")
    }
}

fn replace_first(pattern: &Regex, line: &str, replacement: &str) -> Replace {
    let Some(found) = pattern.find(line) else {
        return Replace::NoLiteral;
    };
    if found.as_str() == replacement {
        return Replace::Unchanged;
    }
    let mut updated = String::with_capacity(line.len() + replacement.len());
    updated.push_str(&line[..found.start()]);
    updated.push_str(replacement);
    updated.push_str(&line[found.end()..]);
    Replace::Changed(updated)
}

fn has_any_literal(line: &str) -> bool {
    LiteralKind::Hex.pattern().is_match(line) || LiteralKind::Rgba.pattern().is_match(line)
}

/// True when `line` is only a comment wrapping `marker`'s token.
fn is_standalone(line: &str, marker: &Marker) -> bool {
    line.replacen(marker.token, "", 1)
        .chars()
        .all(|c| c.is_whitespace() || COMMENT_CHARS.contains(&c))
}
