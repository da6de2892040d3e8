pub mod error;
pub mod exporter;
pub mod metrics;
pub mod server;

pub use error::ExporterError;
pub use exporter::{Exporter, ScrapeReport};
pub use metrics::MetricSet;
pub use server::{AppState, ServerOptions, router, serve};
