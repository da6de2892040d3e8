use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("HTTP request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unexpected status {status} from {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Failed to read response body from {url}: {source}")]
    Read {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Coarse failure class of a single resource scrape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Request,
    Read,
    Decode,
}

impl ScrapeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScrapeError::Request { .. }
            | ScrapeError::Status { .. }
            | ScrapeError::InvalidUrl(_)
            | ScrapeError::Client(_) => ErrorKind::Request,
            ScrapeError::Read { .. } => ErrorKind::Read,
            ScrapeError::Decode(_) => ErrorKind::Decode,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Request => "RequestError",
            ErrorKind::Read => "ReadError",
            ErrorKind::Decode => "DecodeError",
        };
        f.write_str(name)
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_is_request_error() {
        let err = ScrapeError::Status {
            url: "https://cfy.local/api/v3.1/blueprints".to_string(),
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert_eq!(err.kind(), ErrorKind::Request);
        assert!(err.to_string().contains("500"));
        assert!(err.to_string().contains("blueprints"));
    }

    #[test]
    fn test_decode_error_kind() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = ScrapeError::from(json_err);
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert_eq!(err.kind().to_string(), "DecodeError");
    }

    #[test]
    fn test_invalid_url_is_request_error() {
        let err = ScrapeError::InvalidUrl("nope".to_string());
        assert_eq!(err.kind(), ErrorKind::Request);
    }
}
