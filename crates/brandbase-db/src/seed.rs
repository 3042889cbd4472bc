//! Development seed data: a handful of active job postings so candidate
//! discovery has something to chew on against a fresh database.

use sqlx::PgPool;

use crate::DbError;

/// `(company_domain, company_name, title)` triples inserted by [`seed_jobs`].
const SAMPLE_JOBS: &[(&str, &str, &str)] = &[
    ("stripe.com", "Stripe", "Fractional CFO"),
    ("notion.so", "Notion", "Fractional Head of Marketing"),
    ("linear.app", "Linear", "Fractional CTO"),
    ("posthog.com", "PostHog", "Fractional VP Engineering"),
    ("vercel.com", "Vercel", "Fractional Chief of Staff"),
];

/// Upsert the sample job postings.
///
/// Returns the number of rows processed. All inserts run inside a single
/// transaction; if any operation fails the entire batch is rolled back.
/// Re-running is a no-op thanks to the `(company_domain, title)` uniqueness.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if any database operation fails.
pub async fn seed_jobs(pool: &PgPool) -> Result<usize, DbError> {
    let mut tx = pool.begin().await?;
    let mut count = 0usize;

    for (domain, company_name, title) in SAMPLE_JOBS {
        sqlx::query(
            "INSERT INTO jobs (company_domain, company_name, title, is_active) \
             VALUES ($1, $2, $3, true) \
             ON CONFLICT (company_domain, title) DO UPDATE \
               SET company_name = EXCLUDED.company_name, is_active = true",
        )
        .bind(domain)
        .bind(company_name)
        .bind(title)
        .execute(&mut *tx)
        .await?;
        count += 1;
    }

    tx.commit().await?;
    Ok(count)
}
