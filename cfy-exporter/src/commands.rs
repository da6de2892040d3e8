use crate::CLAP_STYLING;
use clap::arg;
use url::Url;

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("cfy-exporter")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("cfy-exporter")
        .about("Exposes Cloudify blueprint and deployment counts as Prometheus metrics")
        .styles(CLAP_STYLING)
        .arg(
            arg!(--"listen-port" <ADDR>)
                .required(false)
                .help("Address on which to expose metrics, e.g. ':9117' or '127.0.0.1:9117'")
                .visible_alias("listen-address")
                .default_value(":9117"),
        )
        .arg(
            arg!(--"metrics-path" <PATH>)
                .required(false)
                .help("Path under which to expose metrics")
                .default_value("/metrics"),
        )
        .arg(
            arg!(--"scrape_uri" <URI>)
                .required(true)
                .help(
                    "Cloudify REST endpoint, suffixed with the API version, for example \
                http://<IP address>/api/v3.1/",
                )
                .visible_alias("scrape-uri")
                .value_parser(clap::value_parser!(Url)),
        )
        .arg(
            arg!(--"tenant" <NAME>)
                .required(false)
                .help("Tenant from which metrics are fetched")
                .default_value("default_tenant"),
        )
        .arg(
            arg!(--"cfy_username" <USER>)
                .required(false)
                .help("User name used to access the Cloudify manager")
                .visible_alias("cfy-username")
                .default_value("admin"),
        )
        .arg(
            arg!(--"cfy_password" <PASSWORD>)
                .required(false)
                .help("Password used to access the Cloudify manager")
                .visible_alias("cfy-password")
                .default_value("admin")
                .hide_default_value(true),
        )
        .arg(
            arg!(--"insecure")
                .required(false)
                .help("Skip TLS certificate verification when talking to the Cloudify manager")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            arg!(--"timeout" <SECONDS>)
                .required(false)
                .help("Per request timeout in seconds, 0 disables it")
                .value_parser(clap::value_parser!(u64))
                .default_value("10"),
        )
        .arg(
            arg!(--"log-level" <LEVEL>)
                .required(false)
                .help("Log level used when RUST_LOG is not set")
                .value_parser(["error", "warn", "info", "debug", "trace"])
                .default_value("info"),
        )
}
