//! Command registry and dispatch.
//!
//! Slash commands are routed through an explicit registry mapping command
//! names to handler capabilities, instead of a branch chain: registering a
//! new command is a closed, testable extension. Handlers are pure functions
//! over the collapsed option map and return a wire-ready
//! [`InteractionResponse`].

use crate::interaction::{CommandInvocation, CommandOptions};
use crate::response::InteractionResponse;
use std::collections::HashMap;
use thiserror::Error;

/// A slash-command handler.
pub trait Command: Send + Sync {
    /// Command name as registered with the platform.
    fn name(&self) -> &'static str;

    /// Run the command against the invocation's option map.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when required options are missing or
    /// carry unusable values.
    fn run(&self, options: &CommandOptions) -> Result<InteractionResponse, ValidationError>;
}

/// Rejection of a command invocation by its handler.
///
/// Surfaced as HTTP 400 at the boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required option was not supplied.
    #[error("missing required option `{0}`")]
    MissingOption(&'static str),

    /// An option was supplied but its value is unusable.
    #[error("invalid option `{name}`: {reason}")]
    InvalidOption {
        /// Name of the offending option.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Failure to dispatch a decoded command invocation.
///
/// Surfaced as HTTP 400 at the boundary.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// No handler is registered under the invoked name.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// The handler rejected the invocation's options.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Static mapping of command names to handlers.
#[derive(Default)]
pub struct CommandRegistry {
    handlers: HashMap<&'static str, Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under its own name, replacing any previous one.
    pub fn register(&mut self, command: Box<dyn Command>) {
        self.handlers.insert(command.name(), command);
    }

    /// Look up the invoked command and run it.
    ///
    /// # Errors
    ///
    /// - [`DispatchError::UnknownCommand`] when no handler matches the name
    /// - [`DispatchError::Invalid`] when the handler rejects the options
    pub fn dispatch(
        &self,
        invocation: &CommandInvocation,
    ) -> Result<InteractionResponse, DispatchError> {
        let handler = self
            .handlers
            .get(invocation.name.as_str())
            .ok_or_else(|| DispatchError::UnknownCommand(invocation.name.clone()))?;

        tracing::debug!(command = %invocation.name, "dispatching command");
        Ok(handler.run(&invocation.options)?)
    }
}
