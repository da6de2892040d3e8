//! Gauges published for each tracked resource type.

use cfy_scraper::ResourceType;
use prometheus::core::{Collector, Desc};
use prometheus::proto::MetricFamily;
use prometheus::{Gauge, Opts, Registry};

pub const NAMESPACE: &str = "cfy";

/// One gauge per [`ResourceType`], created once and shared by clones.
///
/// Registered with a [`Registry`] as a single collector so every descriptor is
/// known before the first scrape.
#[derive(Clone)]
pub struct MetricSet {
    gauges: Vec<(ResourceType, Gauge)>,
}

impl MetricSet {
    pub fn new() -> prometheus::Result<Self> {
        let gauges = ResourceType::ALL
            .iter()
            .map(|&resource| {
                let opts = Opts::new(resource.metric_name(), resource.help()).namespace(NAMESPACE);
                Gauge::with_opts(opts).map(|gauge| (resource, gauge))
            })
            .collect::<prometheus::Result<Vec<_>>>()?;

        Ok(Self { gauges })
    }

    /// Create the set and register it on `registry`.
    pub fn register(registry: &Registry) -> prometheus::Result<Self> {
        let metrics = Self::new()?;
        registry.register(Box::new(metrics.clone()))?;
        Ok(metrics)
    }

    /// Fully qualified metric name, e.g. `cfy_total_uploaded_blueprints`.
    pub fn fq_name(resource: ResourceType) -> String {
        format!("{}_{}", NAMESPACE, resource.metric_name())
    }

    fn gauge(&self, resource: ResourceType) -> Option<&Gauge> {
        self.gauges
            .iter()
            .find(|(r, _)| *r == resource)
            .map(|(_, gauge)| gauge)
    }

    /// Overwrite the current value. Last write wins.
    pub fn set(&self, resource: ResourceType, value: f64) {
        if let Some(gauge) = self.gauge(resource) {
            gauge.set(value);
        }
    }

    pub fn get(&self, resource: ResourceType) -> Option<f64> {
        self.gauge(resource).map(|gauge| gauge.get())
    }

    /// Point-in-time sample of a single gauge.
    pub fn emit(&self, resource: ResourceType) -> Vec<MetricFamily> {
        self.gauge(resource)
            .map(|gauge| gauge.collect())
            .unwrap_or_default()
    }
}

impl Collector for MetricSet {
    fn desc(&self) -> Vec<&Desc> {
        self.gauges
            .iter()
            .flat_map(|(_, gauge)| gauge.desc())
            .collect()
    }

    fn collect(&self) -> Vec<MetricFamily> {
        self.gauges
            .iter()
            .flat_map(|(_, gauge)| gauge.collect())
            .collect()
    }
}
