use cfy_scraper::ScrapeError;
use thiserror::Error;

/// Startup failures. Anything that goes wrong during a collection pass is
/// absorbed per resource type and never ends up here.
#[derive(Error, Debug)]
pub enum ExporterError {
    #[error("Failed to set up API client: {0}")]
    Client(#[from] ScrapeError),

    #[error("Failed to register metrics: {0}")]
    Metrics(#[from] prometheus::Error),
}

pub type Result<T> = std::result::Result<T, ExporterError>;
