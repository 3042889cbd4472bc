//! The `fetch` command: discover candidate domains, fetch brand data for
//! each through a bounded worker pool, and persist the canonical records.
//!
//! Per-domain failures are logged and counted rather than propagated, so a
//! single bad domain does not abort the full run. The process exits 0
//! regardless of per-domain outcomes; only startup problems (missing
//! credential, unreachable database) are fatal.

mod domain;

use futures::stream::{self, StreamExt};

use domain::DomainOutcome;

/// Run one fetch pass.
///
/// When `domains` is non-empty, discovery is bypassed and the supplied
/// domains are processed directly (using the domain string as the company
/// name). Otherwise up to `limit` candidates come from the discovery query.
///
/// # Errors
///
/// Returns an error if the provider credential is missing, the database is
/// unreachable, or discovery itself fails. Per-domain fetch/build/persist
/// failures are tallied, not propagated.
pub(crate) async fn run_fetch(
    config: &brandbase_core::AppConfig,
    limit: i64,
    dry_run: bool,
    domains: &[String],
) -> anyhow::Result<()> {
    let Some(api_key) = config.branddev_api_key.as_deref() else {
        anyhow::bail!("BRANDDEV_API_KEY is not set; cannot fetch brand data");
    };

    let pool = super::connect(config).await?;
    let client =
        brandbase_branddev::BrandDevClient::with_base_url(
            api_key,
            config.request_timeout_secs,
            &config.branddev_base_url,
        )
        .map_err(|e| anyhow::anyhow!("failed to build Brand.dev client: {e}"))?;

    let candidates: Vec<brandbase_db::BrandCandidate> = if domains.is_empty() {
        brandbase_db::list_brand_candidates(&pool, brandbase_branddev::PROVIDER, limit).await?
    } else {
        domains
            .iter()
            .map(|d| brandbase_db::BrandCandidate {
                domain: d.clone(),
                company_name: d.clone(),
            })
            .collect()
    };

    if candidates.is_empty() {
        println!("no candidate domains need brand data from {}", brandbase_branddev::PROVIDER);
        return Ok(());
    }

    tracing::info!(
        candidates = candidates.len(),
        api_key = %mask_key(api_key),
        dry_run,
        "starting {} fetch run",
        brandbase_branddev::PROVIDER
    );

    let max_concurrent = config.max_concurrent_domains.max(1);
    let outcomes: Vec<DomainOutcome> = stream::iter(&candidates)
        .map(|candidate| domain::process_domain(&pool, &client, candidate, dry_run))
        .buffer_unordered(max_concurrent)
        .collect()
        .await;

    let tally = OutcomeTally::from_outcomes(&outcomes);
    println!(
        "complete: {} saved, {} skipped, {} errored",
        tally.saved, tally.skipped, tally.errored
    );
    Ok(())
}

/// Final per-run accounting over domain outcomes.
#[derive(Debug, Default, PartialEq, Eq)]
struct OutcomeTally {
    saved: usize,
    skipped: usize,
    errored: usize,
}

impl OutcomeTally {
    fn from_outcomes(outcomes: &[DomainOutcome]) -> Self {
        let mut tally = Self::default();
        for outcome in outcomes {
            match outcome {
                DomainOutcome::Saved => tally.saved += 1,
                DomainOutcome::Skipped => tally.skipped += 1,
                DomainOutcome::Errored => tally.errored += 1,
            }
        }
        tally
    }
}

/// Mask a credential for log output: first 8 and last 4 characters survive.
fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 12 {
        return "…".to_string();
    }
    let head: String = chars[..8].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}…{tail}")
}
