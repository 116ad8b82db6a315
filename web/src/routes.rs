//! Router configuration for the webhook server.

use crate::handlers::{interactions, liveness};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Build the complete Axum router.
///
/// # Routes
///
/// - `POST /interactions` — the signed interaction endpoint
/// - `GET /` — liveness, unsigned
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Liveness (no signature check)
        .route("/", get(liveness::liveness))
        // Signed interaction surface
        .route("/interactions", post(interactions::interactions))
        .with_state(state)
}
