//! Hex colour validation and derivation.
//!
//! Every colour that flows into a managed file passes through [`normalize`],
//! so downstream code can rely on the `#rrggbb` lower-case shape of
//! [`HexColor`] without re-validating.

use std::fmt;

use crate::error::ColorError;

/// Lightening factor used to derive "bright" slots from their base colour.
pub const DEFAULT_LIGHTEN_FACTOR: f64 = 0.2;

/// Alpha suffix appended by [`to_opaque_rgba`].
const OPAQUE_ALPHA: &str = "ff";

/// A validated, lower-case `#rrggbb` colour.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor(String);

impl HexColor {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The six hex digits without the leading `#`.
    pub fn digits(&self) -> &str {
        &self.0[1..]
    }

    /// Opaque `rgba(rrggbbff)` rendering of this colour.
    pub fn rgba(&self) -> String {
        to_opaque_rgba(self)
    }

    fn channels(&self) -> [u8; 3] {
        let digits = self.digits();
        // Validated on construction, so every pair parses.
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).unwrap_or(0);
        [channel(0), channel(2), channel(4)]
    }

    fn from_channels(channels: [u8; 3]) -> Self {
        Self(format!(
            "#{:02x}{:02x}{:02x}",
            channels[0], channels[1], channels[2]
        ))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lower-case `value`, ensure a leading `#`, and require exactly six hex digits.
pub fn normalize(value: &str) -> Result<HexColor, ColorError> {
    let lowered = value.trim().to_ascii_lowercase();
    let candidate = if lowered.starts_with('#') {
        lowered
    } else {
        format!("#{lowered}")
    };
    let digits = &candidate[1..];
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidFormat(value.to_string()));
    }
    Ok(HexColor(candidate))
}

/// Render `color` as `rgba(rrggbbff)`.
pub fn to_opaque_rgba(color: &HexColor) -> String {
    format!("rgba({}{OPAQUE_ALPHA})", color.digits())
}

/// Move each channel toward 255 by `factor` of the remaining distance.
///
/// Rounds half to even and clamps into the byte range, so the result is
/// deterministic for any input.
pub fn lighten(color: &HexColor, factor: f64) -> HexColor {
    let adjusted = color.channels().map(|channel| {
        let base = f64::from(channel);
        let lifted = (base + (255.0 - base) * factor).round_ties_even();
        lifted.clamp(0.0, 255.0) as u8
    });
    HexColor::from_channels(adjusted)
}
