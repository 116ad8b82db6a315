//! The `/calc` ticket projection command.
//!
//! Projects how many gacha tickets a player will hold after each of the next
//! `months` months, assuming the fixed monthly income for the chosen ticket
//! kind. The projection always starts at the month *following* the current
//! one; there is no month 0. The result is rendered as a Vietnamese text
//! block and returned as an ephemeral channel message.

use crate::dispatch::{Command, ValidationError};
use crate::interaction::CommandOptions;
use crate::response::InteractionResponse;

/// Monthly ticket income for black tickets.
pub const BLACK_TICKETS_PER_MONTH: u64 = 81;

/// Monthly ticket income for relic tickets.
pub const RELIC_TICKETS_PER_MONTH: u64 = 18;

/// Option value selecting black tickets.
const BLACK_OPTION_VALUE: &str = "đen";

/// Ticket kind selected by the `type` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketKind {
    /// Black tickets, 81 per month.
    Black,
    /// Relic tickets, 18 per month. Any `type` value other than `"đen"`
    /// selects this kind.
    Relic,
}

impl TicketKind {
    /// Classify the raw `type` option value.
    #[must_use]
    pub fn from_option(value: &str) -> Self {
        if value == BLACK_OPTION_VALUE {
            Self::Black
        } else {
            Self::Relic
        }
    }

    /// Tickets earned per month for this kind.
    #[must_use]
    pub const fn per_month(self) -> u64 {
        match self {
            Self::Black => BLACK_TICKETS_PER_MONTH,
            Self::Relic => RELIC_TICKETS_PER_MONTH,
        }
    }
}

/// A validated projection request, ready to compute and render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketProjection {
    /// Raw `type` option value, echoed back in the rendered message.
    label: String,
    kind: TicketKind,
    current_tickets: u64,
    months: u32,
}

impl TicketProjection {
    /// Build a projection from a command's option map.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingOption`] for each absent required
    /// option, and [`ValidationError::InvalidOption`] for wrong-typed values,
    /// negative `current_tickets`, or `months < 1`.
    pub fn from_options(options: &CommandOptions) -> Result<Self, ValidationError> {
        let label = options
            .get("type")
            .ok_or(ValidationError::MissingOption("type"))?
            .as_str()
            .ok_or_else(|| invalid("type", "expected a string"))?
            .to_string();

        let current_tickets = require_integer(options, "current_tickets")?;
        let current_tickets = u64::try_from(current_tickets)
            .map_err(|_| invalid("current_tickets", "must not be negative"))?;

        let months = require_integer(options, "months")?;
        if months < 1 {
            return Err(invalid("months", "must be at least 1"));
        }
        let months =
            u32::try_from(months).map_err(|_| invalid("months", "is out of range"))?;

        let kind = TicketKind::from_option(&label);
        Ok(Self {
            label,
            kind,
            current_tickets,
            months,
        })
    }

    /// Projected totals, one per month from 1 through `months` inclusive.
    #[must_use]
    pub fn totals(&self) -> Vec<(u32, u64)> {
        (1..=self.months)
            .map(|month| {
                let total = self.current_tickets + self.kind.per_month() * u64::from(month);
                (month, total)
            })
            .collect()
    }

    /// Render the projection as the user-facing message body.
    #[must_use]
    pub fn render(&self) -> String {
        let lines: Vec<String> = self
            .totals()
            .into_iter()
            .map(|(month, total)| {
                format!(
                    "Tháng {month} (Sau {month} tháng): **{total} vé {label}**",
                    label = self.label
                )
            })
            .collect();

        format!(
            "📅 **Kết quả dự tính vé {label}**\nSố vé hiện tại: {current} | Tính trong {months} tháng.\n---\n{body}",
            label = self.label,
            current = self.current_tickets,
            months = self.months,
            body = lines.join("\n")
        )
    }
}

/// The `/calc` slash command.
#[derive(Debug, Default, Clone, Copy)]
pub struct CalcCommand;

impl Command for CalcCommand {
    fn name(&self) -> &'static str {
        "calc"
    }

    fn run(&self, options: &CommandOptions) -> Result<InteractionResponse, ValidationError> {
        let projection = TicketProjection::from_options(options)?;
        Ok(InteractionResponse::ephemeral_message(projection.render()))
    }
}

fn require_integer(options: &CommandOptions, name: &'static str) -> Result<i64, ValidationError> {
    options
        .get(name)
        .ok_or(ValidationError::MissingOption(name))?
        .as_integer()
        .ok_or_else(|| invalid(name, "expected an integer"))
}

fn invalid(name: &'static str, reason: &str) -> ValidationError {
    ValidationError::InvalidOption {
        name,
        reason: reason.to_string(),
    }
}
