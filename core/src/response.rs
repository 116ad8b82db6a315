//! Wire response payloads for interaction callbacks.
//!
//! Two callback shapes exist in this system: the pong answer to a liveness
//! ping, and an ephemeral channel message carrying a command result. Both
//! serialize to the platform's callback envelope:
//!
//! ```json
//! {"type":1}
//! {"type":4,"data":{"content":"...","flags":64}}
//! ```

use serde::Serialize;

/// Callback type code acknowledging a ping.
pub const CALLBACK_PONG: u8 = 1;

/// Callback type code for a channel message shown in response to a command.
pub const CALLBACK_CHANNEL_MESSAGE: u8 = 4;

/// Message flag marking the response as visible only to the invoking user.
pub const MESSAGE_FLAG_EPHEMERAL: u64 = 64;

/// Serialized body of an interaction callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InteractionResponse {
    #[serde(rename = "type")]
    kind: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<MessageData>,
}

/// Message payload of a channel-message callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct MessageData {
    content: String,
    flags: u64,
}

impl InteractionResponse {
    /// Pong answer to a liveness ping; serializes to exactly `{"type":1}`.
    #[must_use]
    pub const fn pong() -> Self {
        Self {
            kind: CALLBACK_PONG,
            data: None,
        }
    }

    /// Ephemeral channel message, visible only to the invoking user.
    #[must_use]
    pub fn ephemeral_message(content: impl Into<String>) -> Self {
        Self {
            kind: CALLBACK_CHANNEL_MESSAGE,
            data: Some(MessageData {
                content: content.into(),
                flags: MESSAGE_FLAG_EPHEMERAL,
            }),
        }
    }

    /// Message content, when this response carries one.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.data.as_ref().map(|data| data.content.as_str())
    }
}
