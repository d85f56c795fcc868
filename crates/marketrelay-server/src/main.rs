//! marketrelay — single-binary payload relay for the marketplace extensions.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use marketrelay_core::RelayConfig;
use marketrelay_server::cli::{self, Command};
use marketrelay_server::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let command = match Command::from_args(&args) {
        Ok(command) => command,
        Err(message) => {
            eprintln!("{}", message);
            std::process::exit(1);
        }
    };
    if command == Command::Help {
        cli::print_usage();
        return Ok(());
    }

    let config = command.apply(RelayConfig::from_env()?);
    let addr = config.bind_addr();
    let strict = config.strict;

    let state = Arc::new(AppState::new(config));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(
        "marketrelay listening on {} ({} payloads)",
        addr,
        if strict { "strict" } else { "lenient" }
    );

    axum::serve(listener, app).await?;

    Ok(())
}
