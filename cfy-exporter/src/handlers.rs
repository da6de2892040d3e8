use anyhow::{Context, Result};
use cfy_exporter_core::{AppState, Exporter, ServerOptions, serve};
use cfy_scraper::ScrapeTarget;
use clap::ArgMatches;
use prometheus::Registry;
use std::net::{SocketAddr, ToSocketAddrs};
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use url::Url;

// Helper functions for the serve handler

/// Parse a listen address. A bare `:PORT` binds every interface.
pub fn parse_listen_address(value: &str) -> Result<SocketAddr, String> {
    let value = value.trim();
    let candidate = if value.starts_with(':') {
        format!("0.0.0.0{}", value)
    } else {
        value.to_string()
    };

    if let Ok(addr) = candidate.parse::<SocketAddr>() {
        return Ok(addr);
    }

    candidate
        .to_socket_addrs()
        .ok()
        .and_then(|mut addrs| addrs.next())
        .ok_or_else(|| format!("Invalid listen address '{}'", value))
}

/// Make sure the metrics path is routable.
pub fn normalize_metrics_path(value: &str) -> String {
    let value = value.trim();
    if value.starts_with('/') {
        value.to_string()
    } else {
        format!("/{}", value)
    }
}

/// Build the immutable scrape target from parsed arguments.
pub fn target_from_matches(args: &ArgMatches) -> Result<ScrapeTarget, String> {
    let scrape_uri = args
        .get_one::<Url>("scrape_uri")
        .ok_or_else(|| "--scrape_uri must be provided".to_string())?;
    let tenant = args
        .get_one::<String>("tenant")
        .map(String::as_str)
        .unwrap_or("default_tenant");
    let username = args
        .get_one::<String>("cfy_username")
        .map(String::as_str)
        .unwrap_or("admin");
    let password = args
        .get_one::<String>("cfy_password")
        .map(String::as_str)
        .unwrap_or("admin");
    let timeout = match *args.get_one::<u64>("timeout").unwrap_or(&10) {
        0 => None,
        secs => Some(Duration::from_secs(secs)),
    };

    Ok(ScrapeTarget::new(scrape_uri.as_str())
        .with_tenant(tenant)
        .with_credentials(username, password)
        .with_tls_verify(!args.get_flag("insecure"))
        .with_timeout(timeout))
}

pub fn server_options_from_matches(args: &ArgMatches) -> Result<ServerOptions, String> {
    let listen = args
        .get_one::<String>("listen-port")
        .map(String::as_str)
        .unwrap_or(":9117");
    let metrics_path = args
        .get_one::<String>("metrics-path")
        .map(String::as_str)
        .unwrap_or("/metrics");

    Ok(ServerOptions {
        listen_address: parse_listen_address(listen)?,
        metrics_path: normalize_metrics_path(metrics_path),
    })
}

/// Install the fmt subscriber. `RUST_LOG` wins over `level`.
pub fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

pub async fn handle_serve(args: &ArgMatches) -> Result<()> {
    let target = target_from_matches(args).map_err(anyhow::Error::msg)?;
    let options = server_options_from_matches(args).map_err(anyhow::Error::msg)?;

    if !target.base_uri.ends_with('/') {
        warn!(
            uri = %target.base_uri,
            "Scrape URI does not end with '/', resource paths are appended verbatim"
        );
    }

    info!(
        uri = %target.base_uri,
        tenant = %target.tenant,
        tls_verify = target.tls_verify,
        "Starting exporter"
    );

    let registry = Registry::new();
    let exporter = Exporter::from_target(target, &registry).context("Failed to start exporter")?;
    let state = AppState::new(exporter, registry, &options.metrics_path);

    serve(&options, state)
        .await
        .with_context(|| format!("Web server error on {}", options.listen_address))
}
