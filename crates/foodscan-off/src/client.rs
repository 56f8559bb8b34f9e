//! HTTP client for the Open Food Facts regional product endpoints.
//!
//! [`OffClient::resolve`] walks the configured regions in priority order and
//! returns the first hit. Every per-endpoint failure (network, timeout,
//! non-200, bad JSON, status marker not found) is logged and treated as a
//! miss; only exhausting every region is reported to the caller. Endpoints
//! are tried one at a time and at most once each.

use std::time::Duration;

use foodscan_core::{AppConfig, Barcode, LookupError, Region};
use reqwest::{Client, StatusCode, Url};

use crate::error::SourceError;
use crate::types::{ProductEnvelope, RawProductRecord};

/// One regional mirror and the base URL its product API lives under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionEndpoint {
    pub region: Region,
    pub base_url: Url,
}

/// The raw record from the first region that had the product.
#[derive(Debug, Clone)]
pub struct ResolvedProduct {
    pub region: Region,
    pub record: RawProductRecord,
}

/// Client for the Open Food Facts product API across regional mirrors.
///
/// Use [`OffClient::new`] for the public mirrors or
/// [`OffClient::with_endpoints`] to point at mock servers in tests.
#[derive(Debug, Clone)]
pub struct OffClient {
    client: Client,
    endpoints: Vec<RegionEndpoint>,
}

impl OffClient {
    /// Creates a client for the four public mirrors in their default order.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, SourceError> {
        let endpoints: Vec<(Region, &str)> = Region::ALL
            .iter()
            .map(|&region| (region, region.default_base_url()))
            .collect();
        Self::with_endpoints(timeout_secs, user_agent, &endpoints)
    }

    /// Creates a client from the loaded application config.
    ///
    /// # Errors
    ///
    /// See [`OffClient::with_endpoints`].
    pub fn from_config(config: &AppConfig) -> Result<Self, SourceError> {
        let endpoints: Vec<(Region, &str)> = config
            .source_base_urls
            .iter()
            .map(|(region, url)| (*region, url.as_str()))
            .collect();
        Self::with_endpoints(
            config.source_timeout_secs,
            &config.source_user_agent,
            &endpoints,
        )
    }

    /// Creates a client with an explicit, ordered list of regional base URLs.
    ///
    /// Earlier entries take priority during [`OffClient::resolve`].
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SourceError::InvalidBaseUrl`] if any base
    /// URL does not parse.
    pub fn with_endpoints(
        timeout_secs: u64,
        user_agent: &str,
        endpoints: &[(Region, &str)],
    ) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()?;

        let endpoints = endpoints
            .iter()
            .map(|&(region, raw)| {
                let invalid = |reason: String| SourceError::InvalidBaseUrl {
                    base_url: raw.to_owned(),
                    reason,
                };
                let base_url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
                if base_url.cannot_be_a_base() {
                    return Err(invalid("URL cannot carry a path".to_string()));
                }
                Ok(RegionEndpoint { region, base_url })
            })
            .collect::<Result<Vec<_>, SourceError>>()?;

        Ok(Self { client, endpoints })
    }

    /// Regions this client will try, in order.
    #[must_use]
    pub fn endpoints(&self) -> &[RegionEndpoint] {
        &self.endpoints
    }

    /// Looks the barcode up in each region in turn and returns the first hit.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::ProductNotFound`] when every region missed.
    pub async fn resolve(&self, barcode: &Barcode) -> Result<ResolvedProduct, LookupError> {
        for endpoint in &self.endpoints {
            match self.fetch_record(endpoint, barcode).await {
                Ok(record) => {
                    tracing::debug!(
                        region = %endpoint.region,
                        barcode = %barcode,
                        "product source hit"
                    );
                    return Ok(ResolvedProduct {
                        region: endpoint.region,
                        record,
                    });
                }
                Err(SourceError::NotFound { .. }) => {
                    tracing::debug!(
                        region = %endpoint.region,
                        barcode = %barcode,
                        "product not in region; trying next"
                    );
                }
                Err(e) => {
                    tracing::warn!(
                        region = %endpoint.region,
                        barcode = %barcode,
                        error = %e,
                        "product source unavailable; trying next"
                    );
                }
            }
        }

        tracing::info!(
            barcode = %barcode,
            regions = self.endpoints.len(),
            "product not found in any region"
        );
        Err(LookupError::ProductNotFound {
            barcode: barcode.to_string(),
        })
    }

    /// Fetches one region's envelope and returns the product if it is a hit.
    ///
    /// # Errors
    ///
    /// - [`SourceError::Http`] on network failure or timeout.
    /// - [`SourceError::UnexpectedStatus`] for any status other than 200.
    /// - [`SourceError::Deserialize`] if the body is not an envelope object.
    /// - [`SourceError::NotFound`] if the status marker is not found or the
    ///   product object is missing or empty.
    async fn fetch_record(
        &self,
        endpoint: &RegionEndpoint,
        barcode: &Barcode,
    ) -> Result<RawProductRecord, SourceError> {
        let url = Self::product_url(endpoint, barcode);
        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(SourceError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let envelope = serde_json::from_str::<ProductEnvelope>(&body).map_err(|e| {
            SourceError::Deserialize {
                context: format!("{} product {barcode}", endpoint.region),
                source: e,
            }
        })?;

        envelope
            .into_found_product()
            .ok_or_else(|| SourceError::NotFound {
                url: url.to_string(),
            })
    }

    /// Builds `{base_url}/api/v0/product/{barcode}.json`, keeping any path
    /// prefix on the base URL.
    fn product_url(endpoint: &RegionEndpoint, barcode: &Barcode) -> Url {
        let file = format!("{barcode}.json");
        let mut url = endpoint.base_url.clone();
        // Base URLs are checked to be hierarchical at construction.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["api", "v0", "product", file.as_str()]);
        }
        url
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
