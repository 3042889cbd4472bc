//! Offline unit tests for brandbase-db pool configuration and row types.
//! These tests do not require a live database connection.

use brandbase_core::{AppConfig, BrandColor, ColorClass, Environment};
use brandbase_db::{BrandCandidate, CompanyBrandRow, PoolConfig};
use sqlx::types::Json;

#[test]
fn pool_config_from_app_config_uses_core_values() {
    let app_config = AppConfig {
        database_url: "postgres://example".to_string(),
        env: Environment::Test,
        log_level: "info".to_string(),
        branddev_api_key: None,
        branddev_base_url: "https://api.brand.dev/v1".to_string(),
        db_max_connections: 42,
        db_min_connections: 7,
        db_acquire_timeout_secs: 9,
        request_timeout_secs: 30,
        max_concurrent_domains: 4,
    };

    let pool_config = PoolConfig::from_app_config(&app_config);
    assert_eq!(pool_config.max_connections, 42);
    assert_eq!(pool_config.min_connections, 7);
    assert_eq!(pool_config.acquire_timeout_secs, 9);
}

/// Compile-time smoke test: confirm that [`CompanyBrandRow`] has all expected
/// fields with the correct types. No database required.
#[test]
fn company_brand_row_has_expected_fields() {
    use chrono::Utc;
    use uuid::Uuid;

    let row = CompanyBrandRow {
        id: 1_i64,
        public_id: Uuid::new_v4(),
        domain: "acme.com".to_string(),
        company_name: "Acme".to_string(),
        colors: Json(vec![BrandColor {
            hex: "#000000".to_string(),
            classification: ColorClass::Dark,
            brightness: 0,
        }]),
        font_title: Some("Inter".to_string()),
        font_body: Some("Inter".to_string()),
        logos: serde_json::json!({ "logo_light": "https://cdn/logo.svg" }),
        banners: serde_json::json!({}),
        description: None,
        founded: None,
        employees: None,
        city: Some("Austin".to_string()),
        country: Some("US".to_string()),
        industries: vec!["Software".to_string()],
        quality_score: 0.62,
        socials: serde_json::json!({}),
        links: serde_json::json!({}),
        address: serde_json::json!({ "city": "Austin" }),
        styleguide: None,
        fonts: serde_json::json!([]),
        slogan: None,
        phone: None,
        provider: "branddev".to_string(),
        fetched_at: Utc::now(),
        created_at: Utc::now(),
    };

    assert_eq!(row.domain, "acme.com");
    assert_eq!(row.colors.0.len(), 1);
    assert_eq!(row.colors.0[0].classification, ColorClass::Dark);
    assert!(row.founded.is_none());
    assert!(row.styleguide.is_none());
    assert_eq!(row.provider, "branddev");
}

#[test]
fn brand_candidate_carries_domain_and_name() {
    let candidate = BrandCandidate {
        domain: "acme.com".to_string(),
        company_name: "Acme".to_string(),
    };
    assert_eq!(candidate.domain, "acme.com");
    assert_eq!(candidate.company_name, "Acme");
}
