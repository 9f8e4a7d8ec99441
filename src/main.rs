use crate::config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod shutdown;
mod webserver;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    info!("Starting hello-probe {}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;

    let app = webserver::create_app();
    let addr = config.socket_addr();
    let listener = webserver::bind(addr).await?;
    info!("Starting webserver on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::shutdown_signal())
        .await?;

    info!("Webserver stopped");
    Ok(())
}
