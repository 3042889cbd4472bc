//! Record building: one fetched [`BrandPayload`] into the canonical
//! [`BrandRecord`], including the completeness quality score.

use std::collections::BTreeMap;

use brandbase_core::BrandRecord;

use crate::colors::normalize_colors;
use crate::logos::derive_logos;
use crate::types::BrandPayload;
use crate::PROVIDER;

/// Build the canonical record for a domain from a fetched payload.
///
/// Returns `None` when the payload carries no brand object — the caller
/// counts the domain as skipped. `founded` and `employees` are always
/// absent: Brand.dev does not offer them and values are never fabricated.
#[must_use]
pub fn build_record(domain: &str, company_name: &str, payload: BrandPayload) -> Option<BrandRecord> {
    let BrandPayload {
        brand,
        styleguide,
        fonts,
    } = payload;
    let brand = brand?;

    let colors = normalize_colors(&brand.colors);
    let logos = derive_logos(&brand.logos);

    let mut banners = BTreeMap::new();
    if let Some(url) = brand
        .backdrops
        .iter()
        .filter_map(|b| b.url.as_deref())
        .find(|u| !u.is_empty())
    {
        banners.insert("banner".to_owned(), url.to_owned());
    }

    let industries: Vec<String> = brand
        .industries
        .eic
        .iter()
        .filter_map(|entry| entry.industry.clone())
        .filter(|industry| !industry.is_empty())
        .collect();

    let socials: BTreeMap<String, String> = brand
        .socials
        .iter()
        .filter_map(|social| {
            let kind = social.kind.as_deref()?.to_lowercase();
            let url = social.url.as_deref()?;
            (!kind.is_empty() && !url.is_empty()).then(|| (kind, url.to_owned()))
        })
        .collect();

    let fonts = fonts.unwrap_or_default();
    let font_name = fonts.first().and_then(|f| f.font.clone());

    let city = brand.address.city.clone().filter(|c| !c.is_empty());
    let country = brand.address.country.clone().filter(|c| !c.is_empty());

    let description = brand.description.clone();

    // The 8 completeness indicators behind the quality score. Presence
    // only — a wrong-but-present value scores the same as a right one.
    let indicators = [
        !colors.is_empty(),
        !logos.is_empty(),
        !banners.is_empty(),
        description.as_deref().is_some_and(|d| !d.is_empty()),
        city.is_some(),
        !industries.is_empty(),
        !socials.is_empty(),
        styleguide
            .as_ref()
            .is_some_and(|s| s.as_object().is_none_or(|o| !o.is_empty())),
    ];
    let hits = indicators.iter().filter(|present| **present).count();
    #[allow(clippy::cast_precision_loss)] // hits ≤ 8
    let quality_score = round2(hits as f64 / indicators.len() as f64);

    let address = serde_json::to_value(&brand.address)
        .unwrap_or_else(|_| serde_json::Value::Object(serde_json::Map::new()));
    let fonts = serde_json::to_value(&fonts).unwrap_or_else(|_| serde_json::json!([]));

    Some(BrandRecord {
        domain: domain.to_owned(),
        company_name: company_name.to_owned(),
        colors,
        font_title: font_name.clone(),
        font_body: font_name,
        logos,
        banners,
        description,
        founded: None,
        employees: None,
        city,
        country,
        industries,
        quality_score,
        socials,
        links: serde_json::Value::Object(brand.links),
        address,
        styleguide,
        fonts,
        slogan: brand.slogan,
        phone: brand.phone,
        provider: PROVIDER.to_owned(),
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use brandbase_core::ColorClass;

    use super::*;
    use crate::types::{
        RawAddress, RawBackdrop, RawBrand, RawColor, RawFont, RawIndustries, RawIndustryEntry,
        RawLogo, RawSocial,
    };

    fn payload_with_brand(brand: RawBrand) -> BrandPayload {
        BrandPayload {
            brand: Some(brand),
            styleguide: None,
            fonts: None,
        }
    }

    fn full_brand() -> RawBrand {
        RawBrand {
            description: Some("Makes excellent widgets".to_owned()),
            slogan: Some("Widgets for all".to_owned()),
            phone: Some("+1-555-0100".to_owned()),
            colors: vec![
                RawColor {
                    name: None,
                    hex: Some("#000000".to_owned()),
                },
                RawColor {
                    name: None,
                    hex: Some("#FFFFFF".to_owned()),
                },
            ],
            logos: vec![RawLogo {
                kind: Some("logo".to_owned()),
                mode: Some("light".to_owned()),
                url: Some("https://cdn/logo.svg".to_owned()),
            }],
            backdrops: vec![RawBackdrop {
                url: Some("https://cdn/hero.jpg".to_owned()),
            }],
            address: RawAddress {
                city: Some("Austin".to_owned()),
                country: Some("US".to_owned()),
                extra: serde_json::Map::new(),
            },
            industries: RawIndustries {
                eic: vec![RawIndustryEntry {
                    industry: Some("Software".to_owned()),
                }],
            },
            socials: vec![RawSocial {
                kind: Some("LinkedIn".to_owned()),
                url: Some("https://linkedin.com/company/acme".to_owned()),
            }],
            links: serde_json::Map::new(),
        }
    }

    #[test]
    fn build_returns_none_without_brand_object() {
        let payload = BrandPayload::default();
        assert!(build_record("acme.com", "Acme", payload).is_none());
    }

    #[test]
    fn build_end_to_end_palette_and_logos() {
        let brand = RawBrand {
            colors: vec![
                RawColor {
                    name: None,
                    hex: Some("#000000".to_owned()),
                },
                RawColor {
                    name: None,
                    hex: Some("#888888".to_owned()),
                },
                RawColor {
                    name: None,
                    hex: Some("#FFFFFF".to_owned()),
                },
            ],
            logos: vec![
                RawLogo {
                    kind: Some("logo".to_owned()),
                    mode: Some("light".to_owned()),
                    url: Some("a".to_owned()),
                },
                RawLogo {
                    kind: Some("icon".to_owned()),
                    mode: Some("has_opaque_background".to_owned()),
                    url: Some("b".to_owned()),
                },
            ],
            ..RawBrand::default()
        };
        let record = build_record("acme.com", "Acme", payload_with_brand(brand)).unwrap();

        let classes: Vec<ColorClass> =
            record.colors.iter().map(|c| c.classification).collect();
        assert_eq!(
            classes,
            vec![ColorClass::Dark, ColorClass::Accent, ColorClass::Light]
        );
        assert_eq!(record.logos.get("logo_light").map(String::as_str), Some("a"));
        assert_eq!(record.logos.get("icon_dark").map(String::as_str), Some("b"));
    }

    #[test]
    fn build_takes_first_backdrop_as_banner() {
        let brand = RawBrand {
            backdrops: vec![
                RawBackdrop {
                    url: Some("https://cdn/first.jpg".to_owned()),
                },
                RawBackdrop {
                    url: Some("https://cdn/second.jpg".to_owned()),
                },
            ],
            ..RawBrand::default()
        };
        let record = build_record("acme.com", "Acme", payload_with_brand(brand)).unwrap();
        assert_eq!(
            record.banners.get("banner").map(String::as_str),
            Some("https://cdn/first.jpg")
        );
        assert_eq!(record.banners.len(), 1);
    }

    #[test]
    fn build_no_backdrops_means_no_banner() {
        let record =
            build_record("acme.com", "Acme", payload_with_brand(RawBrand::default())).unwrap();
        assert!(record.banners.is_empty());
    }

    #[test]
    fn build_flattens_industries_and_skips_empty() {
        let brand = RawBrand {
            industries: RawIndustries {
                eic: vec![
                    RawIndustryEntry {
                        industry: Some("Software".to_owned()),
                    },
                    RawIndustryEntry {
                        industry: Some(String::new()),
                    },
                    RawIndustryEntry { industry: None },
                    RawIndustryEntry {
                        industry: Some("Recruiting".to_owned()),
                    },
                ],
            },
            ..RawBrand::default()
        };
        let record = build_record("acme.com", "Acme", payload_with_brand(brand)).unwrap();
        assert_eq!(record.industries, vec!["Software", "Recruiting"]);
    }

    #[test]
    fn build_lowercases_social_platforms_and_requires_both_fields() {
        let brand = RawBrand {
            socials: vec![
                RawSocial {
                    kind: Some("LinkedIn".to_owned()),
                    url: Some("https://linkedin.com/company/acme".to_owned()),
                },
                RawSocial {
                    kind: Some("Twitter".to_owned()),
                    url: None,
                },
                RawSocial {
                    kind: None,
                    url: Some("https://nowhere.example".to_owned()),
                },
                RawSocial {
                    kind: Some(String::new()),
                    url: Some("https://nowhere.example".to_owned()),
                },
            ],
            ..RawBrand::default()
        };
        let record = build_record("acme.com", "Acme", payload_with_brand(brand)).unwrap();
        assert_eq!(record.socials.len(), 1);
        assert_eq!(
            record.socials.get("linkedin").map(String::as_str),
            Some("https://linkedin.com/company/acme")
        );
    }

    #[test]
    fn build_first_font_names_title_and_body() {
        let payload = BrandPayload {
            brand: Some(RawBrand::default()),
            styleguide: None,
            fonts: Some(vec![
                RawFont {
                    font: Some("Inter".to_owned()),
                    extra: serde_json::Map::new(),
                },
                RawFont {
                    font: Some("Georgia".to_owned()),
                    extra: serde_json::Map::new(),
                },
            ]),
        };
        let record = build_record("acme.com", "Acme", payload).unwrap();
        assert_eq!(record.font_title.as_deref(), Some("Inter"));
        assert_eq!(record.font_body.as_deref(), Some("Inter"));
    }

    #[test]
    fn build_no_fonts_means_no_font_fields() {
        let record =
            build_record("acme.com", "Acme", payload_with_brand(RawBrand::default())).unwrap();
        assert!(record.font_title.is_none());
        assert!(record.font_body.is_none());
        assert_eq!(record.fonts, serde_json::json!([]));
    }

    #[test]
    fn build_never_fabricates_founded_or_employees() {
        let record = build_record("acme.com", "Acme", payload_with_brand(full_brand())).unwrap();
        assert!(record.founded.is_none());
        assert!(record.employees.is_none());
    }

    #[test]
    fn quality_score_empty_payload_is_zero() {
        let record =
            build_record("acme.com", "Acme", payload_with_brand(RawBrand::default())).unwrap();
        assert!((record.quality_score - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn quality_score_all_indicators_is_one() {
        let payload = BrandPayload {
            brand: Some(full_brand()),
            styleguide: Some(serde_json::json!({ "spacing": "8px" })),
            fonts: None,
        };
        let record = build_record("acme.com", "Acme", payload).unwrap();
        assert!((record.quality_score - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn quality_score_partial_payload() {
        // colors + logos + banner + description + city + industries + socials
        // present, styleguide absent: 7/8 = 0.88 after rounding.
        let record = build_record("acme.com", "Acme", payload_with_brand(full_brand())).unwrap();
        assert!((record.quality_score - 0.88).abs() < f64::EPSILON);
    }

    #[test]
    fn quality_score_empty_styleguide_object_not_counted() {
        let payload = BrandPayload {
            brand: Some(full_brand()),
            styleguide: Some(serde_json::json!({})),
            fonts: None,
        };
        let record = build_record("acme.com", "Acme", payload).unwrap();
        assert!((record.quality_score - 0.88).abs() < f64::EPSILON);
    }

    #[test]
    fn build_sets_provider_and_identity() {
        let record = build_record("acme.com", "Acme Inc", payload_with_brand(full_brand())).unwrap();
        assert_eq!(record.provider, "branddev");
        assert_eq!(record.domain, "acme.com");
        assert_eq!(record.company_name, "Acme Inc");
        assert_eq!(record.city.as_deref(), Some("Austin"));
        assert_eq!(record.country.as_deref(), Some("US"));
    }
}
