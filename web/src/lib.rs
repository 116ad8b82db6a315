//! Axum webhook endpoint for ticketbot.
//!
//! This crate is the imperative shell around `ticketbot-core`: it owns the
//! HTTP surface, configuration loading, and the mapping from the core's
//! typed errors onto protocol-correct HTTP responses.
//!
//! # Request Flow
//!
//! 1. **HTTP POST** arrives at `/interactions` with the raw body and the
//!    `X-Signature-Ed25519` / `X-Signature-Timestamp` headers
//! 2. **Verify** the signature over `timestamp ++ body` (fail-closed, 401)
//! 3. **Decode** the body into a typed interaction envelope (400 on garbage)
//! 4. **Answer** pings directly; **dispatch** commands through the registry
//! 5. **Serialize** the callback payload back as JSON
//!
//! A separate `GET /` liveness route returns a static status payload and
//! never touches the verifier.
//!
//! # State
//!
//! Each request is processed independently; the only shared state is the
//! immutable [`AppState`] holding the signature verifier and the command
//! registry, both built once at startup.

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export key types for convenience
pub use config::Config;
pub use error::AppError;
pub use routes::build_router;
pub use state::AppState;
