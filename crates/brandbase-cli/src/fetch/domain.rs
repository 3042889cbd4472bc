//! Per-domain pipeline: fetch → build → persist, with the skip/error
//! taxonomy the run summary reports on.

use brandbase_branddev::{build_record, BrandDevClient, BranddevError};
use brandbase_db::BrandCandidate;

/// How one domain resolved. `Skipped` covers "the provider has nothing
/// usable" (404, non-200, transport error, empty brand object); `Errored`
/// covers unexpected persist failures.
#[derive(Debug, Clone, Copy)]
pub(super) enum DomainOutcome {
    Saved,
    Skipped,
    Errored,
}

/// Process a single candidate domain end to end.
///
/// Never returns an error: every failure mode is folded into an outcome so
/// the batch keeps going.
pub(super) async fn process_domain(
    pool: &sqlx::PgPool,
    client: &BrandDevClient,
    candidate: &BrandCandidate,
    dry_run: bool,
) -> DomainOutcome {
    let payload = match client.fetch_brand(&candidate.domain).await {
        Ok(payload) => payload,
        Err(BranddevError::NotFound { .. }) => {
            tracing::info!(domain = %candidate.domain, "provider has no brand data");
            return DomainOutcome::Skipped;
        }
        Err(e) => {
            tracing::warn!(
                domain = %candidate.domain,
                error = %truncate(&e.to_string(), 200),
                "brand fetch failed; skipping domain"
            );
            return DomainOutcome::Skipped;
        }
    };

    let Some(record) = build_record(&candidate.domain, &candidate.company_name, payload) else {
        tracing::info!(
            domain = %candidate.domain,
            "provider response held no brand object; skipping domain"
        );
        return DomainOutcome::Skipped;
    };

    tracing::info!(
        domain = %candidate.domain,
        colors = record.colors.len(),
        logos = record.logos.len(),
        banners = record.banners.len(),
        city = record.city.as_deref().unwrap_or("-"),
        quality = record.quality_score,
        "built brand record"
    );

    if dry_run {
        tracing::info!(
            domain = %candidate.domain,
            provider = %record.provider,
            quality = record.quality_score,
            "dry-run: would upsert brand record"
        );
        return DomainOutcome::Saved;
    }

    match brandbase_db::upsert_company_brand(pool, &record).await {
        Ok(()) => {
            tracing::info!(domain = %candidate.domain, provider = %record.provider, "brand record saved");
            DomainOutcome::Saved
        }
        Err(e) => {
            tracing::error!(
                domain = %candidate.domain,
                error = %truncate(&e.to_string(), 200),
                "failed to persist brand record"
            );
            DomainOutcome::Errored
        }
    }
}

/// Clamp error detail for log lines; respects char boundaries.
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        s.chars().take(max_chars).collect()
    }
}
