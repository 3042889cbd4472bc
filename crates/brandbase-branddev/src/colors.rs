//! Palette normalization: brightness, classification, sort, and the
//! post-sort extreme overrides.

use brandbase_core::{BrandColor, ColorClass};

use crate::types::RawColor;

/// Substituted when a palette entry carries no hex value at all.
const FALLBACK_HEX: &str = "#888888";

/// Perceptual brightness of a `#RRGGBB` color, in `[0, 255]`.
///
/// Standard luma weighting: `round((R·299 + G·587 + B·114) / 1000)`.
/// The leading `#` is optional. Returns `None` for anything that is not a
/// 6-digit hex triplet.
#[must_use]
pub fn brightness(hex: &str) -> Option<u8> {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }

    let r = u32::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u32::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u32::from_str_radix(&digits[4..6], 16).ok()?;

    // Integer round-half-up; the sum maxes out at 255_000 so this stays
    // within [0, 255].
    u8::try_from((r * 299 + g * 587 + b * 114 + 500) / 1000).ok()
}

/// Classify a color from its (unreliable) provider name and brightness.
///
/// Brightness extremes win outright; names are only consulted for the
/// mid-range. The palette-level overrides in [`normalize_colors`] may still
/// replace this afterwards.
fn classify(name: Option<&str>, brightness: u8) -> ColorClass {
    if brightness < 50 {
        return ColorClass::Dark;
    }
    if brightness > 200 {
        return ColorClass::Light;
    }

    let name = name.map(str::to_lowercase).unwrap_or_default();
    if name.contains("primary") || name.contains("brand") {
        return ColorClass::Brand;
    }
    if name.contains("accent") || name.contains("secondary") {
        return ColorClass::Accent;
    }

    if brightness < 128 {
        ColorClass::Dark
    } else {
        ColorClass::Accent
    }
}

/// Normalize raw provider colors into a brightness-sorted, classified
/// palette.
///
/// Entries without a hex value fall back to [`FALLBACK_HEX`]; entries whose
/// hex cannot be parsed are skipped with a warning. After sorting ascending
/// by brightness, the extremes are overridden so the UI always gets a
/// usable pair: index 0 is `dark`, the last index is `light` (when ≥2
/// entries), and index 1 is `accent` (when ≥3 entries).
#[must_use]
pub fn normalize_colors(raw: &[RawColor]) -> Vec<BrandColor> {
    let mut palette: Vec<BrandColor> = raw
        .iter()
        .filter_map(|color| {
            let hex = color.hex.as_deref().unwrap_or(FALLBACK_HEX);
            let Some(value) = brightness(hex) else {
                tracing::warn!(hex, "skipping color with unparseable hex value");
                return None;
            };
            Some(BrandColor {
                hex: hex.to_owned(),
                classification: classify(color.name.as_deref(), value),
                brightness: value,
            })
        })
        .collect();

    palette.sort_by_key(|c| c.brightness);

    let len = palette.len();
    if let Some(first) = palette.first_mut() {
        first.classification = ColorClass::Dark;
    }
    if len > 1 {
        palette[len - 1].classification = ColorClass::Light;
    }
    if len > 2 {
        palette[1].classification = ColorClass::Accent;
    }

    palette
}
