use crate::resource::ResourceType;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_TENANT: &str = "default_tenant";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where and how to scrape. Built once at startup and never mutated.
#[derive(Clone)]
pub struct ScrapeTarget {
    pub base_uri: String,
    pub tenant: String,
    pub username: String,
    pub password: String,
    pub tls_verify: bool,
    pub timeout: Option<Duration>,
}

impl ScrapeTarget {
    pub fn new(base_uri: impl Into<String>) -> Self {
        Self {
            base_uri: base_uri.into(),
            tenant: DEFAULT_TENANT.to_string(),
            username: "admin".to_string(),
            password: "admin".to_string(),
            tls_verify: true,
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        }
    }

    pub fn with_tenant(mut self, tenant: impl Into<String>) -> Self {
        self.tenant = tenant.into();
        self
    }

    pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    pub fn with_tls_verify(mut self, tls_verify: bool) -> Self {
        self.tls_verify = tls_verify;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Plain concatenation of base URI and path segment, e.g.
    /// `http://host/api/v3.1/` + `blueprints`.
    pub fn resource_url(&self, resource: ResourceType) -> String {
        format!("{}{}", self.base_uri, resource.path_segment())
    }
}

impl fmt::Debug for ScrapeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrapeTarget")
            .field("base_uri", &self.base_uri)
            .field("tenant", &self.tenant)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("tls_verify", &self.tls_verify)
            .field("timeout", &self.timeout)
            .finish()
    }
}
