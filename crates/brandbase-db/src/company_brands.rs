//! Database operations for the `company_brands` table.

use brandbase_core::{BrandColor, BrandRecord};
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::DbError;

// ---------------------------------------------------------------------------
// Row type
// ---------------------------------------------------------------------------

/// A row from the `company_brands` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CompanyBrandRow {
    pub id: i64,
    pub public_id: Uuid,
    pub domain: String,
    pub company_name: String,
    pub colors: Json<Vec<BrandColor>>,
    pub font_title: Option<String>,
    pub font_body: Option<String>,
    pub logos: serde_json::Value,
    pub banners: serde_json::Value,
    pub description: Option<String>,
    pub founded: Option<i32>,
    pub employees: Option<i32>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub industries: Vec<String>,
    pub quality_score: f64,
    pub socials: serde_json::Value,
    pub links: serde_json::Value,
    pub address: serde_json::Value,
    pub styleguide: Option<serde_json::Value>,
    pub fonts: serde_json::Value,
    pub slogan: Option<String>,
    pub phone: Option<String>,
    pub provider: String,
    pub fetched_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

const ALL_COLUMNS: &str = "id, public_id, domain, company_name, colors, font_title, font_body, \
     logos, banners, description, founded, employees, city, country, industries, \
     quality_score, socials, links, address, styleguide, fonts, slogan, phone, \
     provider, fetched_at, created_at";

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Insert or fully replace the brand record for a domain.
///
/// On domain conflict every non-key column is overwritten from the new
/// record and `fetched_at` is refreshed — deliberately no `COALESCE`, so a
/// sparse record from one provider blanks out fields a previous provider
/// had populated. Cross-provider field-level merge semantics were never
/// specified upstream; the full-replace keeps re-runs idempotent.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn upsert_company_brand(pool: &PgPool, record: &BrandRecord) -> Result<(), DbError> {
    sqlx::query(
        "INSERT INTO company_brands \
           (domain, company_name, colors, font_title, font_body, logos, banners, \
            description, founded, employees, city, country, industries, quality_score, \
            socials, links, address, styleguide, fonts, slogan, phone, provider, fetched_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, \
                 $17, $18, $19, $20, $21, $22, NOW()) \
         ON CONFLICT (domain) DO UPDATE SET \
           company_name  = EXCLUDED.company_name, \
           colors        = EXCLUDED.colors, \
           font_title    = EXCLUDED.font_title, \
           font_body     = EXCLUDED.font_body, \
           logos         = EXCLUDED.logos, \
           banners       = EXCLUDED.banners, \
           description   = EXCLUDED.description, \
           founded       = EXCLUDED.founded, \
           employees     = EXCLUDED.employees, \
           city          = EXCLUDED.city, \
           country       = EXCLUDED.country, \
           industries    = EXCLUDED.industries, \
           quality_score = EXCLUDED.quality_score, \
           socials       = EXCLUDED.socials, \
           links         = EXCLUDED.links, \
           address       = EXCLUDED.address, \
           styleguide    = EXCLUDED.styleguide, \
           fonts         = EXCLUDED.fonts, \
           slogan        = EXCLUDED.slogan, \
           phone         = EXCLUDED.phone, \
           provider      = EXCLUDED.provider, \
           fetched_at    = NOW()",
    )
    .bind(&record.domain)
    .bind(&record.company_name)
    .bind(Json(&record.colors))
    .bind(&record.font_title)
    .bind(&record.font_body)
    .bind(Json(&record.logos))
    .bind(Json(&record.banners))
    .bind(&record.description)
    .bind(record.founded)
    .bind(record.employees)
    .bind(&record.city)
    .bind(&record.country)
    .bind(&record.industries)
    .bind(record.quality_score)
    .bind(Json(&record.socials))
    .bind(&record.links)
    .bind(&record.address)
    .bind(&record.styleguide)
    .bind(&record.fonts)
    .bind(&record.slogan)
    .bind(&record.phone)
    .bind(&record.provider)
    .execute(pool)
    .await?;
    Ok(())
}

/// Returns the stored brand record for a domain, or `None` if not found.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn get_company_brand(
    pool: &PgPool,
    domain: &str,
) -> Result<Option<CompanyBrandRow>, DbError> {
    let row = sqlx::query_as::<_, CompanyBrandRow>(&format!(
        "SELECT {ALL_COLUMNS} FROM company_brands WHERE domain = $1"
    ))
    .bind(domain)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}
