use thiserror::Error;

/// Validation outcomes of the resolution core.
///
/// These describe incomplete or malformed user input and are surfaced as
/// clarifying prompts; none of them terminates the skill.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReminderError {
    #[error("no reminder time was provided")]
    MissingTime,
    #[error("no reminder text was provided")]
    MissingText,
    #[error("unrecognized recurrence phrase {0:?}")]
    UnrecognizedRecurrence(String),
    #[error("malformed time of day {0:?}")]
    InvalidTimeFormat(String),
}
