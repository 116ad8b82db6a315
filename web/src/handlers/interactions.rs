//! The signed interactions endpoint.
//!
//! Per-request state machine, with early exits at each gate:
//!
//! ```text
//! BodyRead → SignatureChecked → Decoded → Dispatched → Responded
//!                │ 401             │ 400      │ 400
//! ```
//!
//! The body must be read as raw bytes before any JSON parsing: the signature
//! covers the exact bytes on the wire, so extracting a typed body first
//! would break verification.

use crate::error::AppError;
use crate::state::AppState;
use axum::{Json, body::Bytes, extract::State, http::HeaderMap};
use ticketbot_core::{Interaction, InteractionResponse};

/// Header carrying the hex-encoded Ed25519 signature.
pub const SIGNATURE_HEADER: &str = "X-Signature-Ed25519";

/// Header carrying the signature timestamp.
pub const TIMESTAMP_HEADER: &str = "X-Signature-Timestamp";

/// `POST /interactions` — verify, decode, dispatch.
///
/// # Errors
///
/// - 401 for any signature failure (missing headers, malformed hex,
///   cryptographic mismatch)
/// - 400 for undecodable envelopes, unknown commands, option validation
///   failures, and unsupported interaction kinds
pub async fn interactions(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<InteractionResponse>, AppError> {
    metrics::counter!("ticketbot_interactions_total").increment(1);

    let signature = header_str(&headers, SIGNATURE_HEADER);
    let timestamp = header_str(&headers, TIMESTAMP_HEADER);

    state
        .verifier()
        .verify(signature, timestamp, &body)
        .map_err(|err| {
            metrics::counter!("ticketbot_interactions_rejected_total", "reason" => "auth")
                .increment(1);
            tracing::warn!(error = %err, "Rejected unauthenticated interaction");
            AppError::from(err)
        })?;

    let interaction = Interaction::decode(&body).map_err(|err| {
        metrics::counter!("ticketbot_interactions_rejected_total", "reason" => "decode")
            .increment(1);
        tracing::warn!(error = %err, "Rejected undecodable interaction");
        AppError::from(err)
    })?;

    match interaction {
        Interaction::Ping => {
            tracing::debug!("Answering ping");
            Ok(Json(InteractionResponse::pong()))
        }
        Interaction::ApplicationCommand(invocation) => {
            let command = invocation.name.clone();
            let response = state.registry().dispatch(&invocation).map_err(|err| {
                metrics::counter!("ticketbot_interactions_rejected_total", "reason" => "dispatch")
                    .increment(1);
                tracing::warn!(command = %command, error = %err, "Command dispatch failed");
                AppError::from(err)
            })?;

            metrics::counter!("ticketbot_commands_total", "command" => command.clone()).increment(1);
            tracing::info!(command = %command, "Command handled");
            Ok(Json(response))
        }
        Interaction::Other { kind } => {
            metrics::counter!("ticketbot_interactions_rejected_total", "reason" => "unsupported")
                .increment(1);
            tracing::warn!(kind, "Unsupported interaction type");
            Err(AppError::bad_request("Invalid interaction type."))
        }
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}
