use crate::error::{Result, ScrapeError};
use crate::resource::ResourceType;
use crate::target::ScrapeTarget;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

pub const TENANT_HEADER: &str = "Tenant";

/// Authenticated GET client for the Cloudify REST API.
///
/// One client (and its connection pool) is shared by every resource type and
/// every collection pass.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    target: ScrapeTarget,
}

impl ApiClient {
    pub fn new(target: ScrapeTarget) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(concat!("cfy-exporter/", env!("CARGO_PKG_VERSION")))
            .pool_max_idle_per_host(4)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .redirect(reqwest::redirect::Policy::limited(5));

        if let Some(timeout) = target.timeout {
            builder = builder.timeout(timeout).connect_timeout(timeout / 2);
        }

        if !target.tls_verify {
            warn!(
                base_uri = %target.base_uri,
                "TLS certificate verification is disabled for scrape requests"
            );
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder.build().map_err(ScrapeError::Client)?;
        Ok(Self { client, target })
    }

    pub fn target(&self) -> &ScrapeTarget {
        &self.target
    }

    /// Fetch the first page of `resource`, asking only for item ids.
    ///
    /// Returns the raw body. The response (and its connection) is released
    /// before this returns, whether or not the body could be read.
    pub async fn fetch_collection(&self, resource: ResourceType) -> Result<Vec<u8>> {
        let url = self.target.resource_url(resource);
        let parsed =
            Url::parse(&url).map_err(|e| ScrapeError::InvalidUrl(format!("{}: {}", url, e)))?;

        debug!(resource = %resource, url = %parsed, "Requesting collection");

        let response = self
            .client
            .get(parsed)
            .header(TENANT_HEADER, &self.target.tenant)
            .basic_auth(&self.target.username, Some(&self.target.password))
            .query(&[("_include", "id")])
            .send()
            .await
            .map_err(|source| ScrapeError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ScrapeError::Status { url, status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| ScrapeError::Read {
                url: url.clone(),
                source,
            })?;

        debug!(resource = %resource, bytes = body.len(), "Received collection");
        Ok(body.to_vec())
    }
}
