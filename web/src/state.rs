//! Application state for Axum handlers.

use std::sync::Arc;
use ticketbot_core::{CommandRegistry, SignatureVerifier};

/// Application state shared across all HTTP handlers.
///
/// Both members are built once at startup and immutable afterwards; request
/// handling never mutates shared state.
#[derive(Clone)]
pub struct AppState {
    verifier: Arc<SignatureVerifier>,
    registry: Arc<CommandRegistry>,
}

impl AppState {
    /// Create the application state.
    #[must_use]
    pub fn new(verifier: SignatureVerifier, registry: CommandRegistry) -> Self {
        Self {
            verifier: Arc::new(verifier),
            registry: Arc::new(registry),
        }
    }

    /// The request signature verifier.
    #[must_use]
    pub fn verifier(&self) -> &SignatureVerifier {
        &self.verifier
    }

    /// The command registry.
    #[must_use]
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_is_clone() {
        // Axum requires Clone state; Arc members keep it cheap.
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
