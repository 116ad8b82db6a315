//! Ticketbot webhook server.
//!
//! Verifies signed platform interactions and serves the `/calc` ticket
//! projection command.

use anyhow::Context;
use ticketbot_core::{CommandRegistry, SignatureVerifier, commands::CalcCommand};
use ticketbot_web::{AppState, Config, build_router};
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Best-effort .env loading for local development.
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ticketbot=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ticketbot webhook server");

    // Load configuration; a missing or unusable public key is fatal before
    // the server binds.
    let config = Config::from_env().context("configuration is incomplete")?;
    let verifier = SignatureVerifier::from_hex(&config.public_key)
        .context("DISCORD_PUBLIC_KEY is not a usable Ed25519 public key")?;

    let mut registry = CommandRegistry::new();
    registry.register(Box::new(CalcCommand));

    let state = AppState::new(verifier, registry);
    let app = build_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(address = %addr, "Listening for interactions");

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Graceful shutdown signal handler.
///
/// Waits for Ctrl+C (SIGINT) or, on Unix, SIGTERM.
#[allow(clippy::expect_used)] // no serving can happen without signal handlers
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C signal, shutting down gracefully...");
        },
        () = terminate => {
            info!("Received SIGTERM signal, shutting down gracefully...");
        },
    }
}
