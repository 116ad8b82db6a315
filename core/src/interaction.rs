//! Typed interaction envelope decoding.
//!
//! The platform delivers every webhook call as a JSON envelope whose
//! top-level `type` field selects the payload shape. Decoding produces the
//! [`Interaction`] sum type so the endpoint can match exhaustively; new
//! envelope kinds land in [`Interaction::Other`] instead of silently falling
//! through.

use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Wire discriminant for a liveness ping.
pub const INTERACTION_PING: u8 = 1;

/// Wire discriminant for a slash-command invocation.
pub const INTERACTION_APPLICATION_COMMAND: u8 = 2;

/// Decoded interaction envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum Interaction {
    /// Liveness ping; answered directly with a pong, bypassing dispatch.
    Ping,
    /// Slash-command invocation carrying a command name and its options.
    ApplicationCommand(CommandInvocation),
    /// Any other envelope kind (components, autocomplete, modals, unknown).
    Other {
        /// Raw `type` discriminant from the wire.
        kind: u8,
    },
}

/// Options of a command invocation, keyed by option name.
///
/// The wire format is a list of `{name, value}` items; it is collapsed into a
/// map here. Duplicate names resolve last-write-wins in document order.
pub type CommandOptions = BTreeMap<String, OptionValue>;

/// A decoded slash-command invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandInvocation {
    /// Command name as registered with the platform.
    pub name: String,
    /// Collapsed name → value option map.
    pub options: CommandOptions,
}

/// Scalar option value as sent by the platform.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// Whole-number option.
    Integer(i64),
    /// Fractional number option.
    Number(f64),
    /// String option.
    String(String),
}

impl OptionValue {
    /// Borrow the value as a string, if it is one.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            Self::Integer(_) | Self::Number(_) => None,
        }
    }

    /// Read the value as an integer, if it is one.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            Self::Number(_) | Self::String(_) => None,
        }
    }
}

/// Failure to decode a raw body into an [`Interaction`].
///
/// Surfaced as HTTP 400 at the boundary.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Body is not parseable JSON, or required envelope fields are missing.
    #[error("malformed interaction payload: {reason}")]
    Malformed {
        /// What made the payload undecodable.
        reason: String,
    },
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed {
            reason: err.to_string(),
        }
    }
}

/// Raw envelope as it appears on the wire. `data` stays untyped until the
/// discriminant is known; only application commands require it.
#[derive(Deserialize)]
struct RawInteraction {
    #[serde(rename = "type")]
    kind: u8,
    #[serde(default)]
    data: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct RawCommandData {
    name: String,
    #[serde(default)]
    options: Vec<RawCommandOption>,
}

#[derive(Deserialize)]
struct RawCommandOption {
    name: String,
    value: OptionValue,
}

impl Interaction {
    /// Decode a verified raw body into a typed envelope.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Malformed`] when the body is not parseable
    /// JSON, lacks the `type` field, or declares an application command
    /// without usable command data.
    pub fn decode(raw: &[u8]) -> Result<Self, DecodeError> {
        let envelope: RawInteraction = serde_json::from_slice(raw)?;

        match envelope.kind {
            INTERACTION_PING => Ok(Self::Ping),
            INTERACTION_APPLICATION_COMMAND => {
                let data = envelope.data.ok_or_else(|| DecodeError::Malformed {
                    reason: "application command without data".to_string(),
                })?;
                let data: RawCommandData = serde_json::from_value(data)?;

                // Collapse the option list into a map; later occurrences of a
                // duplicated name overwrite earlier ones.
                let mut options = CommandOptions::new();
                for option in data.options {
                    options.insert(option.name, option.value);
                }

                Ok(Self::ApplicationCommand(CommandInvocation {
                    name: data.name,
                    options,
                }))
            }
            kind => Ok(Self::Other { kind }),
        }
    }
}
