//! Brand.dev API response types.
//!
//! ## Observed shape from the live API
//!
//! ### Envelope nesting
//! `GET /brand/retrieve` wraps the brand object one level: `{"brand": {...}}`.
//! Some responses (and other providers mapped onto this client) return the
//! brand object bare. [`unwrap_brand`] handles both; an empty or non-object
//! body yields `None` and the domain is counted as skipped upstream.
//!
//! ### Colors
//! `colors` is an array of `{"name": ..., "hex": "#RRGGBB"}`. `name` is
//! frequently missing or generic ("primary", "accent dark") and is treated
//! as a hint only — brightness drives classification at the extremes.
//! Entries occasionally arrive without a `hex`; normalization substitutes a
//! mid-gray fallback.
//!
//! ### Logos
//! `logos` entries carry `type` ("logo" or "icon") and `mode` ("light",
//! "dark", or `"has_opaque_background"` for raster assets baked onto a
//! solid background). Either field may be absent.
//!
//! ### Industries
//! Industry classification is nested: `{"eic": [{"industry": ..., "subindustry": ...}]}`.
//! Only the `industry` value is consumed; empty strings are skipped.
//!
//! ### Styleguide and fonts
//! Served by separate endpoints. The styleguide body is `{"styleguide": {...}}`
//! and is stored opaque; the fonts body is `{"fonts": [{"font": ..., ...}]}`
//! where descriptors carry extra usage metadata we pass through unmodified.

use serde::{Deserialize, Serialize};

/// Everything one fetch pass gathered for a domain.
///
/// `brand` is `None` when the primary endpoint answered 200 but the body
/// held no usable brand object. `styleguide` and `fonts` are `None`
/// whenever their best-effort calls failed.
#[derive(Debug, Default)]
pub struct BrandPayload {
    pub brand: Option<RawBrand>,
    pub styleguide: Option<serde_json::Value>,
    pub fonts: Option<Vec<RawFont>>,
}

/// The primary brand object, after envelope unwrapping.
#[derive(Debug, Default, Deserialize)]
pub struct RawBrand {
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub slogan: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub colors: Vec<RawColor>,

    #[serde(default)]
    pub logos: Vec<RawLogo>,

    /// Large hero/backdrop images; only the first is kept as the banner.
    #[serde(default)]
    pub backdrops: Vec<RawBackdrop>,

    #[serde(default)]
    pub address: RawAddress,

    #[serde(default)]
    pub industries: RawIndustries,

    #[serde(default)]
    pub socials: Vec<RawSocial>,

    /// Page links (careers, privacy, ...) keyed by page kind. Passed through
    /// to storage unmodified.
    #[serde(default)]
    pub links: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawColor {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub hex: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawLogo {
    /// `"logo"` or `"icon"`; defaults to `"logo"` when absent.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// `"light"`, `"dark"`, or `"has_opaque_background"`; defaults to
    /// `"dark"` when absent.
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawBackdrop {
    #[serde(default)]
    pub url: Option<String>,
}

/// Structured company address. `city` and `country` are lifted into their
/// own record fields; everything else rides along in `extra` so the full
/// object can be stored verbatim.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct RawAddress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct RawIndustries {
    #[serde(default)]
    pub eic: Vec<RawIndustryEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawIndustryEntry {
    #[serde(default)]
    pub industry: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSocial {
    /// Platform name, e.g. `"LinkedIn"`; lower-cased during normalization.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// One raw font descriptor. Only `font` (the family name) is interpreted;
/// the rest of the descriptor is preserved for storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawFont {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Unwrap the primary response body into a [`RawBrand`].
///
/// The brand object may arrive bare or nested one level under a `"brand"`
/// key. Returns `Ok(None)` for non-object or empty bodies — the caller
/// treats that as "provider has nothing for this domain".
///
/// # Errors
///
/// Returns the underlying [`serde_json::Error`] if the body is an object
/// but does not match the expected brand shape.
pub fn unwrap_brand(body: serde_json::Value) -> Result<Option<RawBrand>, serde_json::Error> {
    let serde_json::Value::Object(outer) = body else {
        return Ok(None);
    };

    let nested = match outer.get("brand") {
        Some(serde_json::Value::Object(nested)) => Some(nested.clone()),
        _ => None,
    };
    let inner = nested.unwrap_or(outer);

    if inner.is_empty() {
        return Ok(None);
    }

    serde_json::from_value(serde_json::Value::Object(inner)).map(Some)
}
