//! Candidate discovery: which domains still need brand data from the
//! active provider.

use sqlx::PgPool;

use crate::DbError;

/// A company domain referenced by active job postings, paired with the
/// display name discovery found for it.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BrandCandidate {
    pub domain: String,
    pub company_name: String,
}

/// Returns distinct domains from active job postings that have no brand
/// record yet, or whose record came from a different provider, ordered by
/// company name and capped at `limit`.
///
/// A domain whose stored record already matches `provider` is never
/// returned, so re-runs do not redundantly re-fetch up-to-date data.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_brand_candidates(
    pool: &PgPool,
    provider: &str,
    limit: i64,
) -> Result<Vec<BrandCandidate>, DbError> {
    let rows = sqlx::query_as::<_, BrandCandidate>(
        "SELECT DISTINCT j.company_domain AS domain, j.company_name \
         FROM jobs j \
         LEFT JOIN company_brands cb ON cb.domain = j.company_domain \
         WHERE j.is_active = true \
           AND j.company_domain IS NOT NULL \
           AND j.company_domain <> '' \
           AND (cb.id IS NULL OR cb.provider IS DISTINCT FROM $1) \
         ORDER BY j.company_name \
         LIMIT $2",
    )
    .bind(provider)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
