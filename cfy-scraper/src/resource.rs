use std::fmt;

/// A remote Cloudify collection that gets counted on every scrape.
///
/// Adding a resource type means adding a variant here and an entry in
/// [`ResourceType::ALL`]; the gauge and request path follow from the table below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceType {
    Blueprints,
    Deployments,
}

impl ResourceType {
    /// Scrape order.
    pub const ALL: [ResourceType; 2] = [ResourceType::Blueprints, ResourceType::Deployments];

    /// Path segment appended to the configured base URI.
    pub fn path_segment(&self) -> &'static str {
        match self {
            ResourceType::Blueprints => "blueprints",
            ResourceType::Deployments => "deployments",
        }
    }

    /// Gauge name without the `cfy` namespace.
    pub fn metric_name(&self) -> &'static str {
        match self {
            ResourceType::Blueprints => "total_uploaded_blueprints",
            ResourceType::Deployments => "total_deployments_running",
        }
    }

    pub fn help(&self) -> &'static str {
        match self {
            ResourceType::Blueprints => "The total number of blueprints uploaded in the tenant",
            ResourceType::Deployments => "The total number of current deployments created",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}
