use std::time::Duration;

use mock_server::Behavior;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let behavior = behavior_from_env();
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, ?behavior, "listening");
    mock_server::run(listener, behavior).await
}

/// `MOCK_STATUS` wins over `MOCK_DELAY_MS`; neither means serve the fixture.
fn behavior_from_env() -> Behavior {
    if let Some(code) = std::env::var("MOCK_STATUS").ok().and_then(|v| v.parse().ok()) {
        return Behavior::Status(code);
    }
    if let Some(ms) = std::env::var("MOCK_DELAY_MS").ok().and_then(|v| v.parse().ok()) {
        return Behavior::Delay(Duration::from_millis(ms));
    }
    Behavior::Serve
}
