use anyhow::Context;
use tracing::info;

use quickkart_support::{config::Config, routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,quickkart_support=debug,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env().context("loading configuration")?;
    let bind_addr = config.bind_addr.clone();
    info!(
        service = %config.service_name,
        origins = config.cors_origins.len(),
        static_dir = %config.static_dir,
        "starting support backend"
    );

    let app = routes::build_app(config);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {bind_addr}"))?;

    info!(addr = %listener.local_addr()?, "support chat listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
