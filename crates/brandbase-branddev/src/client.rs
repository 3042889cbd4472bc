//! HTTP client for the Brand.dev REST API.
//!
//! Wraps `reqwest` with bearer-token auth, per-call timeouts, and typed
//! status handling. One [`BrandDevClient::fetch_brand`] call covers the
//! three per-domain endpoints: the primary brand retrieve (whose failure
//! fails the whole fetch) and the best-effort styleguide and fonts calls.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::BranddevError;
use crate::types::{unwrap_brand, BrandPayload, RawFont};

const DEFAULT_BASE_URL: &str = "https://api.brand.dev/v1";

/// Client for the Brand.dev REST API.
///
/// Manages the HTTP client, API key, and base URL. Use [`BrandDevClient::new`]
/// for production or [`BrandDevClient::with_base_url`] to point at a mock
/// server in tests.
pub struct BrandDevClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl BrandDevClient {
    /// Creates a new client pointed at the production Brand.dev API.
    ///
    /// # Errors
    ///
    /// Returns [`BranddevError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, BranddevError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`BranddevError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`BranddevError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, BranddevError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("brandbase/0.1 (brand-intake)")
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // Url::join appends endpoint paths rather than replacing the last
        // path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url =
            Url::parse(&normalised).map_err(|e| BranddevError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Fetches everything the provider has for a domain.
    ///
    /// The primary `brand/retrieve` call gates the fetch: a 404 surfaces as
    /// [`BranddevError::NotFound`], any other non-2xx as
    /// [`BranddevError::UnexpectedStatus`], and a transport error as
    /// [`BranddevError::Http`] — in all three cases the domain yields no
    /// payload. When the primary call succeeds with a usable brand object,
    /// the styleguide and fonts endpoints are queried concurrently; their
    /// failures merely leave the corresponding payload field `None`.
    ///
    /// No retries are performed; a failed call is final for this pass.
    ///
    /// # Errors
    ///
    /// See above — only primary-call failures are surfaced.
    pub async fn fetch_brand(&self, domain: &str) -> Result<BrandPayload, BranddevError> {
        let brand = self.fetch_primary(domain).await?;

        // No point chasing styleguide/fonts for a domain the driver is going
        // to skip anyway.
        if brand.is_none() {
            return Ok(BrandPayload::default());
        }

        let (styleguide, fonts) =
            tokio::join!(self.fetch_styleguide(domain), self.fetch_fonts(domain));

        Ok(BrandPayload {
            brand,
            styleguide,
            fonts,
        })
    }

    async fn fetch_primary(
        &self,
        domain: &str,
    ) -> Result<Option<crate::types::RawBrand>, BranddevError> {
        let url = self.endpoint_url("brand/retrieve", domain)?;
        let response = self
            .client
            .get(url.clone())
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(BranddevError::NotFound {
                domain: domain.to_owned(),
            });
        }
        if !status.is_success() {
            return Err(BranddevError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let value = serde_json::from_str::<serde_json::Value>(&body).map_err(|e| {
            BranddevError::Deserialize {
                context: format!("brand retrieve for {domain}"),
                source: e,
            }
        })?;

        unwrap_brand(value).map_err(|e| BranddevError::Deserialize {
            context: format!("brand object for {domain}"),
            source: e,
        })
    }

    /// Best-effort styleguide fetch; returns the `styleguide` sub-object.
    async fn fetch_styleguide(&self, domain: &str) -> Option<serde_json::Value> {
        let body = self.fetch_optional("brand/styleguide", domain).await?;
        match body.get("styleguide") {
            Some(styleguide) => Some(styleguide.clone()),
            None => {
                tracing::debug!(domain, "styleguide response had no styleguide object");
                None
            }
        }
    }

    /// Best-effort fonts fetch; returns the parsed `fonts` array.
    async fn fetch_fonts(&self, domain: &str) -> Option<Vec<RawFont>> {
        let body = self.fetch_optional("brand/fonts", domain).await?;
        let fonts = body.get("fonts")?.clone();
        match serde_json::from_value::<Vec<RawFont>>(fonts) {
            Ok(fonts) => Some(fonts),
            Err(e) => {
                tracing::debug!(domain, error = %e, "fonts response did not parse; skipping");
                None
            }
        }
    }

    /// Issue a GET whose failure is swallowed: any transport error, non-2xx
    /// status, or undecodable body logs at debug and returns `None`.
    async fn fetch_optional(&self, path: &str, domain: &str) -> Option<serde_json::Value> {
        let url = match self.endpoint_url(path, domain) {
            Ok(url) => url,
            Err(e) => {
                tracing::debug!(domain, path, error = %e, "optional endpoint URL invalid");
                return None;
            }
        };

        let response = match self
            .client
            .get(url)
            .bearer_auth(&self.api_key)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!(domain, path, error = %e, "optional fetch failed");
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::debug!(
                domain,
                path,
                status = response.status().as_u16(),
                "optional fetch returned non-success status"
            );
            return None;
        }

        match response.json::<serde_json::Value>().await {
            Ok(body) => Some(body),
            Err(e) => {
                tracing::debug!(domain, path, error = %e, "optional fetch body did not parse");
                None
            }
        }
    }

    fn endpoint_url(&self, path: &str, domain: &str) -> Result<Url, BranddevError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| BranddevError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        url.query_pairs_mut().append_pair("domain", domain);
        Ok(url)
    }
}
