use crate::resource::ResourceType;
use std::time::Duration;

/// Outcome of scraping one resource type during a collection pass.
#[derive(Debug, Clone)]
pub struct ScrapeResult {
    pub resource: ResourceType,
    pub url: String,
    pub item_count: Option<usize>,
    pub truncated: bool,
    pub response_time: Duration,
    pub error: Option<String>,
}

impl ScrapeResult {
    pub fn new(resource: ResourceType, url: String) -> Self {
        Self {
            resource,
            url,
            item_count: None,
            truncated: false,
            response_time: Duration::from_secs(0),
            error: None,
        }
    }

    pub fn with_error(resource: ResourceType, url: String, error: String) -> Self {
        Self {
            resource,
            url,
            item_count: None,
            truncated: false,
            response_time: Duration::from_secs(0),
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none() && self.item_count.is_some()
    }
}
