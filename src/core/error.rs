use thiserror::Error;

/// Errors raised by the rule components
///
/// Everything except `InvalidStateTransition` is an input-validation failure
/// the caller can fix by supplying corrected input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("Unknown zodiac sign: {0}")]
    UnknownSign(String),

    #[error("Invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),

    #[error("Invalid day {day} for month {month}")]
    InvalidDay { month: u32, day: u32 },

    #[error("Reveal index {index} out of bounds for a reading of {total} cards")]
    IndexOutOfBounds { index: usize, total: usize },

    #[error("A reading needs at least one card")]
    EmptyReading,

    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(&'static str),
}

impl RuleError {
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, RuleError::InvalidStateTransition(_))
    }
}
