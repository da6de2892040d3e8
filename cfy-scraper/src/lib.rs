pub mod client;
pub mod error;
pub mod resource;
pub mod response;
pub mod result;
pub mod target;

pub use client::ApiClient;
pub use error::{ErrorKind, ScrapeError};
pub use resource::ResourceType;
pub use response::{CfyResponse, decode};
pub use result::ScrapeResult;
pub use target::ScrapeTarget;
