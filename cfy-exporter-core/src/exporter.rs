//! The collection pass: scrape every resource type and publish the counts.

use crate::error::Result;
use crate::metrics::MetricSet;
use cfy_scraper::{ApiClient, CfyResponse, ResourceType, ScrapeResult, ScrapeTarget, decode};
use prometheus::Registry;
use prometheus::proto::MetricFamily;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;
use tokio::task::JoinError;
use tracing::{debug, info, warn};

/// Everything one collection pass did, in scrape order.
#[derive(Debug, Default)]
pub struct ScrapeReport {
    pub results: Vec<ScrapeResult>,
    pub emitted: Vec<MetricFamily>,
}

impl ScrapeReport {
    pub fn result(&self, resource: ResourceType) -> Option<&ScrapeResult> {
        self.results.iter().find(|r| r.resource == resource)
    }

    pub fn failures(&self) -> usize {
        self.results.iter().filter(|r| !r.is_success()).count()
    }
}

/// Drives the API client and decoder for each resource type and updates the
/// matching gauge.
///
/// A pass never fails as a whole. A resource type whose request or decode
/// fails keeps its last published value and the pass moves on.
pub struct Exporter {
    client: ApiClient,
    metrics: MetricSet,
    resources: Vec<ResourceType>,
    pass_lock: Mutex<()>,
}

impl Exporter {
    pub fn new(client: ApiClient, metrics: MetricSet) -> Self {
        Self {
            client,
            metrics,
            resources: ResourceType::ALL.to_vec(),
            pass_lock: Mutex::new(()),
        }
    }

    /// Build the client and register the metric set on `registry`.
    pub fn from_target(target: ScrapeTarget, registry: &Registry) -> Result<Self> {
        let client = ApiClient::new(target)?;
        let metrics = MetricSet::register(registry)?;
        Ok(Self::new(client, metrics))
    }

    /// Scrape only the given resource types. Order stays that of
    /// [`ResourceType::ALL`] and each type is scraped at most once per pass.
    pub fn with_only(mut self, resources: &[ResourceType]) -> Self {
        self.resources = ResourceType::ALL
            .iter()
            .copied()
            .filter(|resource| resources.contains(resource))
            .collect();
        self
    }

    pub fn resources(&self) -> &[ResourceType] {
        &self.resources
    }

    pub fn metrics(&self) -> &MetricSet {
        &self.metrics
    }

    /// Run one collection pass. Concurrent callers are serialized.
    pub async fn collect(&self) -> ScrapeReport {
        let _pass = self.pass_lock.lock().await;
        let start = Instant::now();

        info!(uri = %self.client.target().base_uri, "Starting to collect");

        let mut report = ScrapeReport::default();
        for &resource in &self.resources {
            let result = self.scrape_resource(resource, &mut report.emitted).await;
            report.results.push(result);
        }

        info!(
            resources = report.results.len(),
            failed = report.failures(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Collection pass complete"
        );
        report
    }

    /// Run one collection pass on its own task.
    ///
    /// The pass keeps going when the caller is dropped, e.g. a scraper that
    /// disconnects at its scrape timeout, so later resource types are still
    /// requested.
    pub async fn collect_detached(self: Arc<Self>) -> std::result::Result<ScrapeReport, JoinError> {
        tokio::spawn(async move { self.collect().await }).await
    }

    async fn scrape_resource(
        &self,
        resource: ResourceType,
        emitted: &mut Vec<MetricFamily>,
    ) -> ScrapeResult {
        let url = self.client.target().resource_url(resource);
        let start = Instant::now();

        let response = match self.fetch_and_decode(resource).await {
            Ok(response) => response,
            Err(e) => {
                warn!(
                    resource = %resource,
                    url = %url,
                    kind = %e.kind(),
                    error = %e,
                    "Scrape failed, keeping last known value"
                );
                let mut result = ScrapeResult::with_error(resource, url, e.to_string());
                result.response_time = start.elapsed();
                return result;
            }
        };

        let count = response.item_count();
        let truncated = response.is_truncated();
        if truncated {
            warn!(
                resource = %resource,
                items = count,
                total = ?response.metadata.pagination.total,
                "Response holds only the first page, published count is partial"
            );
        }

        self.metrics.set(resource, count as f64);
        emitted.extend(self.metrics.emit(resource));

        info!(resource = %resource, url = %url, items = count, "Number of items");

        let mut result = ScrapeResult::new(resource, url);
        result.item_count = Some(count);
        result.truncated = truncated;
        result.response_time = start.elapsed();
        result
    }

    async fn fetch_and_decode(&self, resource: ResourceType) -> cfy_scraper::error::Result<CfyResponse> {
        let body = self.client.fetch_collection(resource).await?;
        debug!(resource = %resource, bytes = body.len(), "Decoding response");
        decode(&body)
    }
}
