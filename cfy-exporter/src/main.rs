use cfy_exporter::commands::command_argument_builder;
use cfy_exporter::{handle_serve, init_tracing};
use tracing::error;

#[tokio::main]
async fn main() {
    let matches = command_argument_builder().get_matches();

    let level = matches
        .get_one::<String>("log-level")
        .map(String::as_str)
        .unwrap_or("info");
    init_tracing(level);

    if let Err(e) = handle_serve(&matches).await {
        error!("Exporter terminated: {:#}", e);
        std::process::exit(1);
    }
}
