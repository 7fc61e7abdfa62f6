pub mod error;
pub mod routes;
pub mod state;

use crate::domain::ports::ServiceSettings;
use crate::utils::error::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;

use routes::{activity_handler, log_last_handler, log_users_handler, submit_user_handler};
pub use state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/activity", get(activity_handler))
        .route("/user", post(submit_user_handler))
        .route("/logusers", get(log_users_handler))
        .route("/loglast", get(log_last_handler))
        .with_state(state)
}

/// Builds state from `config`, binds, and serves until Ctrl+C / SIGTERM.
pub async fn start_server<C: ServiceSettings>(config: &C) -> Result<()> {
    tracing::info!("Initializing state...");
    let state = AppState::from_settings(config)?;

    let address = format!("{}:{}", config.host(), config.port());
    tracing::info!("Binding to {}", address);
    let listener = TcpListener::bind(&address).await?;
    tracing::info!(
        "Server listening on {} (match timeout {}ms)",
        address,
        config.match_timeout().as_millis()
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => tracing::info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                tracing::error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use signal::unix::SignalKind;

        match signal::unix::signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
