use cfy_exporter::commands::command_argument_builder;
use cfy_exporter::handlers::*;
use std::net::SocketAddr;
use std::time::Duration;

fn matches(args: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["cfy-exporter"];
    argv.extend_from_slice(args);
    command_argument_builder()
        .try_get_matches_from(argv)
        .unwrap()
}

#[test]
fn test_parse_listen_address_port_only() {
    let addr = parse_listen_address(":9117").unwrap();
    assert_eq!(addr, "0.0.0.0:9117".parse::<SocketAddr>().unwrap());
}

#[test]
fn test_parse_listen_address_full() {
    let addr = parse_listen_address("127.0.0.1:8080").unwrap();
    assert_eq!(addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
}

#[test]
fn test_parse_listen_address_invalid() {
    let result = parse_listen_address("not an address");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("Invalid listen address"));
}

#[test]
fn test_normalize_metrics_path() {
    assert_eq!(normalize_metrics_path("/metrics"), "/metrics");
    assert_eq!(normalize_metrics_path("metrics"), "/metrics");
    assert_eq!(normalize_metrics_path(" /scrape "), "/scrape");
}

#[test]
fn test_scrape_uri_is_required() {
    let result = command_argument_builder().try_get_matches_from(["cfy-exporter"]);
    assert!(result.is_err());
}

#[test]
fn test_invalid_scrape_uri_rejected() {
    let result = command_argument_builder()
        .try_get_matches_from(["cfy-exporter", "--scrape_uri", "not a url"]);
    assert!(result.is_err());
}

#[test]
fn test_target_defaults() {
    let args = matches(&["--scrape_uri", "http://10.0.0.5/api/v3.1/"]);
    let target = target_from_matches(&args).unwrap();

    assert_eq!(target.base_uri, "http://10.0.0.5/api/v3.1/");
    assert_eq!(target.tenant, "default_tenant");
    assert_eq!(target.username, "admin");
    assert_eq!(target.password, "admin");
    assert!(target.tls_verify);
    assert_eq!(target.timeout, Some(Duration::from_secs(10)));
}

#[test]
fn test_target_from_flags() {
    let args = matches(&[
        "--scrape-uri",
        "https://cfy.example.com/api/v3.1/",
        "--tenant",
        "ops",
        "--cfy_username",
        "monitor",
        "--cfy-password",
        "s3cret",
        "--insecure",
        "--timeout",
        "0",
    ]);
    let target = target_from_matches(&args).unwrap();

    assert_eq!(target.tenant, "ops");
    assert_eq!(target.username, "monitor");
    assert_eq!(target.password, "s3cret");
    assert!(!target.tls_verify);
    assert_eq!(target.timeout, None);
    assert!(!format!("{:?}", target).contains("s3cret"));
}

#[test]
fn test_server_options_defaults() {
    let args = matches(&["--scrape_uri", "http://10.0.0.5/api/v3.1/"]);
    let options = server_options_from_matches(&args).unwrap();

    assert_eq!(options.listen_address.port(), 9117);
    assert_eq!(options.metrics_path, "/metrics");
}

#[test]
fn test_server_options_from_flags() {
    let args = matches(&[
        "--scrape_uri",
        "http://10.0.0.5/api/v3.1/",
        "--listen-port",
        "127.0.0.1:9200",
        "--metrics-path",
        "cfy",
    ]);
    let options = server_options_from_matches(&args).unwrap();

    assert_eq!(
        options.listen_address,
        "127.0.0.1:9200".parse::<SocketAddr>().unwrap()
    );
    assert_eq!(options.metrics_path, "/cfy");
}

#[test]
fn test_server_options_bad_address() {
    let args = matches(&[
        "--scrape_uri",
        "http://10.0.0.5/api/v3.1/",
        "--listen-port",
        "nowhere",
    ]);
    assert!(server_options_from_matches(&args).is_err());
}
