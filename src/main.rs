// Entrypoint for the CLI application.
// - Keeps `main` small: init logging, create an API client and hand it
//   to the interactive flow.
// - Returns `anyhow::Result` so construction failures surface cleanly.

use crud_cli::{api::ApiClient, ui};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Logging is opt-in via RUST_LOG; default to warn so the prompts
    // stay clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    // Base URL comes from `API_URL` or defaults to the local API.
    // See `api::ApiClient::from_env`.
    let api = ApiClient::from_env()?;

    // One prompt sequence per invocation; this blocks on user input
    // and on the network, then the process exits.
    ui::run(&api)?;
    Ok(())
}
