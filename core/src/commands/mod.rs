//! Concrete slash-command handlers.
//!
//! One command exists in this system: `/calc`, the ticket projection.

pub mod calc;

pub use calc::{CalcCommand, TicketKind, TicketProjection};
