//! Three-tier settings resolution.
//!
//! Every field resolves independently: explicit override, then stored value,
//! then built-in default. Colour fields are validated on the way through, so
//! an invalid value anywhere fails the whole resolution.

use tracing::warn;

use crate::color::{lighten, normalize, HexColor};
use crate::error::ConfigError;

use super::{
    FileConfig, IntValue, Overrides, Palette, ResolvedSettings, SettingsDefaults, UiSection,
    UiSettings,
};

const TRUTHY_TOKENS: &[&str] = &["true", "1", "yes"];
const FALSY_TOKENS: &[&str] = &["false", "0", "no"];

/// Merge `overrides` over `stored` over `defaults` into one settings record.
pub fn resolve(
    overrides: &Overrides,
    stored: &FileConfig,
    defaults: &SettingsDefaults,
) -> Result<ResolvedSettings, ConfigError> {
    let accent = &stored.accent;
    let factor = defaults.lighten_factor;

    let primary = resolve_color(&overrides.primary, &accent.primary, || {
        normalize(&defaults.primary)
    })?;
    let primary_bright = resolve_color(&overrides.primary_bright, &accent.primary_bright, || {
        Ok(lighten(&primary, factor))
    })?;
    let secondary = resolve_color(&overrides.secondary, &accent.secondary, || {
        Ok(primary.clone())
    })?;
    let secondary_bright =
        resolve_color(&overrides.secondary_bright, &accent.secondary_bright, || {
            Ok(lighten(&secondary, factor))
        })?;

    let empty_ui = UiSection::default();
    let ui = stored.ui.as_ref().unwrap_or(&empty_ui);

    let rounding = match overrides.rounding {
        Some(value) => value,
        None => resolve_int(&ui.rounding, "ui.rounding")?.unwrap_or(defaults.rounding),
    };
    let rounding = non_negative(rounding, "ui.rounding")?;
    let waybar_floating = overrides
        .waybar_floating
        .as_deref()
        .and_then(parse_flag_token)
        .or(ui.waybar_floating)
        .unwrap_or(defaults.waybar_floating);
    let waybar_border_radius = match overrides.waybar_border_radius {
        Some(value) => value,
        None => resolve_int(&ui.waybar_border_radius, "ui.waybar_border_radius")?
            .unwrap_or(defaults.waybar_border_radius),
    };
    let waybar_border_radius = non_negative(waybar_border_radius, "ui.waybar_border_radius")?;
    let waybar_padding = layered(&overrides.waybar_padding, &ui.waybar_padding)
        .unwrap_or(&defaults.waybar_padding)
        .to_string();
    let waybar_margin = layered(&overrides.waybar_margin, &ui.waybar_margin)
        .unwrap_or(&defaults.waybar_margin)
        .to_string();

    Ok(ResolvedSettings {
        palette: Palette {
            primary,
            primary_bright,
            secondary,
            secondary_bright,
        },
        ui: UiSettings {
            rounding,
            waybar_floating,
            waybar_border_radius,
            waybar_padding,
            waybar_margin,
        },
    })
}

/// Interpret a command-line flag token.
///
/// Unrecognised tokens yield `None`, i.e. "not overridden".
pub fn parse_flag_token(token: &str) -> Option<bool> {
    let lowered = token.trim().to_ascii_lowercase();
    if TRUTHY_TOKENS.contains(&lowered.as_str()) {
        return Some(true);
    }
    if FALSY_TOKENS.contains(&lowered.as_str()) {
        return Some(false);
    }
    warn!(token, "ignoring unrecognised flag value");
    None
}

/// First non-empty string of the override and stored layers.
fn layered<'a>(override_value: &'a Option<String>, stored: &'a Option<String>) -> Option<&'a str> {
    non_empty(override_value).or_else(|| non_empty(stored))
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

fn resolve_color<F>(
    override_value: &Option<String>,
    stored: &Option<String>,
    fallback: F,
) -> Result<HexColor, ConfigError>
where
    F: FnOnce() -> Result<HexColor, crate::error::ColorError>,
{
    let color = match layered(override_value, stored) {
        Some(value) => normalize(value)?,
        None => fallback()?,
    };
    Ok(color)
}

fn resolve_int(value: &Option<IntValue>, key: &str) -> Result<Option<i64>, ConfigError> {
    match value {
        None => Ok(None),
        Some(IntValue::Int(n)) => Ok(Some(*n)),
        Some(IntValue::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(IntValue::Text(text)) => text.trim().parse::<i64>().map(Some).map_err(|_| {
            ConfigError::Invalid(format!("{key} must be an integer (got `{text}`)"))
        }),
    }
}

fn non_negative(value: i64, key: &str) -> Result<i64, ConfigError> {
    if value < 0 {
        return Err(ConfigError::Invalid(format!(
            "{key} must not be negative (got {value})"
        )));
    }
    Ok(value)
}
