//! Protocol core for the ticketbot interactions webhook.
//!
//! This crate implements the platform-facing protocol logic as a functional
//! core: pure, synchronous functions over request-scoped inputs, with no I/O
//! and no HTTP types. The imperative shell (the `ticketbot-web` crate) feeds
//! it raw bytes and headers and maps its typed errors onto HTTP statuses.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │       Imperative Shell (ticketbot-web)  │  ← HTTP, headers, JSON bodies
//! ├─────────────────────────────────────────┤
//! │       Functional Core (this crate)      │
//! │  - Signature verification (Ed25519)     │  ← fail-closed, key injected
//! │  - Interaction decoding (sum type)      │  ← Ping / Command / Other
//! │  - Command registry + dispatch          │  ← name → handler lookup
//! │  - Ticket projection command            │  ← pure arithmetic + text
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Request Flow
//!
//! 1. **Verify** the raw body against the `X-Signature-Ed25519` /
//!    `X-Signature-Timestamp` headers ([`SignatureVerifier`])
//! 2. **Decode** the verified bytes into an [`Interaction`]
//! 3. **Dispatch** application commands through the [`CommandRegistry`]
//! 4. **Serialize** the resulting [`InteractionResponse`] back to the wire
//!
//! Every value constructed here lives for a single request; the only
//! process-wide state is the immutable verifying key inside
//! [`SignatureVerifier`].

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod commands;
pub mod dispatch;
pub mod interaction;
pub mod response;
pub mod verify;

// Re-export key types for convenience
pub use dispatch::{Command, CommandRegistry, DispatchError, ValidationError};
pub use interaction::{CommandInvocation, CommandOptions, DecodeError, Interaction, OptionValue};
pub use response::InteractionResponse;
pub use verify::{AuthError, KeyError, SignatureVerifier};
