use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use roster_app::{render_route, AppError, Cli};
use roster_core::ReqwestTransport;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            tracing::error!(%err, "roster failed");
            ExitCode::from(2)
        }
    }
}

/// Render the requested page to stdout. `Ok(false)` means the page itself
/// shows an error.
async fn run(cli: &Cli) -> Result<bool, AppError> {
    let transport = ReqwestTransport::new();
    let page = render_route(cli, &transport).await?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(page.body.as_bytes())?;
    stdout.flush()?;
    Ok(!page.failed)
}
