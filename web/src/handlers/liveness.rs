//! Liveness endpoint.
//!
//! Used by the hosting platform to confirm the process is up. This route is
//! deliberately outside the signed surface: it never touches the signature
//! verifier.

use axum::{Json, http::StatusCode};
use serde::Serialize;

/// Static liveness message.
pub const LIVENESS_MESSAGE: &str = "Ticket bot webhook is running";

/// Liveness response body.
#[derive(Debug, Serialize)]
pub struct LivenessResponse {
    /// Service status message
    pub status: String,
}

/// Liveness endpoint.
///
/// ```bash
/// curl http://localhost:8080/
/// # {"status":"Ticket bot webhook is running"}
/// ```
#[allow(clippy::unused_async)]
pub async fn liveness() -> (StatusCode, Json<LivenessResponse>) {
    (
        StatusCode::OK,
        Json(LivenessResponse {
            status: LIVENESS_MESSAGE.to_string(),
        }),
    )
}
