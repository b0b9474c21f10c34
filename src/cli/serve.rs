//! Serve command - runs the HTTP API until a shutdown signal arrives

use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

use super::Cli;
use crate::api::create_router;
use crate::config::AppConfig;
use crate::infrastructure::logging::init_logging;

/// Run the API server
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let mut config = AppConfig::load()?;
    cli.apply(&mut config);
    init_logging(&config.logging)?;

    let addr = config.server.socket_addr()?;
    let (state, database) = crate::create_app_state_with_config(&config).await?;
    let app = create_router(state, config.server.status_policy);

    info!(
        addr = %addr,
        status_policy = ?config.server.status_policy,
        "Starting API server"
    );
    let listener = TcpListener::bind(addr).await?;

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    if let Some(database) = database {
        database.close().await;
    }
    served?;

    info!("API server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
