//! The canonical brand record shape shared by the normalizer and the store.
//!
//! Every provider is mapped into this one schema so storage and rendering
//! stay provider-agnostic. One record per company domain.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Classification assigned to a palette color.
///
/// After normalization the darkest color is always `Dark` and the lightest
/// always `Light` regardless of what the name/brightness heuristics said;
/// the UI relies on that pair existing for any non-empty palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorClass {
    Dark,
    Light,
    Accent,
    Brand,
}

/// One entry of the normalized, brightness-sorted palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandColor {
    /// `#RRGGBB` as supplied by the provider.
    pub hex: String,
    pub classification: ColorClass,
    /// Perceptual brightness in `[0, 255]` (luma weighting).
    pub brightness: u8,
}

/// The canonical, persisted brand record for one company domain.
///
/// `logos` keys are always `"{type}_{mode}"` with type ∈ {logo, icon} and
/// mode ∈ {light, dark}. `banners` holds at most a `"banner"` entry.
/// `styleguide`, `fonts`, `links`, and `address` are provider passthrough.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandRecord {
    pub domain: String,
    pub company_name: String,
    pub colors: Vec<BrandColor>,
    pub font_title: Option<String>,
    pub font_body: Option<String>,
    pub logos: BTreeMap<String, String>,
    pub banners: BTreeMap<String, String>,
    pub description: Option<String>,
    /// Not offered by the Brand.dev API; kept for schema stability across
    /// providers that do supply it. Never fabricated.
    pub founded: Option<i32>,
    /// See `founded`.
    pub employees: Option<i32>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub industries: Vec<String>,
    /// Unweighted mean of 8 completeness indicators, in `[0, 1]`, two
    /// decimals. A presence proxy, not a correctness signal.
    pub quality_score: f64,
    pub socials: BTreeMap<String, String>,
    pub links: serde_json::Value,
    pub address: serde_json::Value,
    pub styleguide: Option<serde_json::Value>,
    pub fonts: serde_json::Value,
    pub slogan: Option<String>,
    pub phone: Option<String>,
    /// Which upstream source produced this record.
    pub provider: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_class_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ColorClass::Dark).unwrap(),
            "\"dark\""
        );
        assert_eq!(
            serde_json::to_string(&ColorClass::Brand).unwrap(),
            "\"brand\""
        );
    }

    #[test]
    fn brand_color_round_trips() {
        let color = BrandColor {
            hex: "#1A2B3C".to_string(),
            classification: ColorClass::Accent,
            brightness: 40,
        };
        let json = serde_json::to_string(&color).unwrap();
        let back: BrandColor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, color);
        assert!(json.contains("\"classification\":\"accent\""));
    }
}
