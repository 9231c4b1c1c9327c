use thiserror::Error;

pub type Result<T> = std::result::Result<T, WkError>;

/// Everything that can stop a planner command.
///
/// Parsing variants echo the offending input so the CLI can print them verbatim.
#[derive(Debug, Error)]
pub enum WkError {
    #[error("invalid day: {0}")]
    InvalidDay(String),
    #[error("invalid date format: {0}")]
    InvalidDate(String),
    #[error("invalid time range: {0} (expected HH:MM-HH:MM)")]
    InvalidTimeRange(String),
    #[error("invalid time format: {0} (expected HH:MM-HH:MM)")]
    InvalidTimeFormat(String),
    #[error("invalid week: {0} (expected YYYY-W##)")]
    InvalidWeek(String),
    #[error("block not found: {0}")]
    NotFound(String),
    #[error("{0} required")]
    MissingArgument(&'static str),
    #[error("could not find an unused id after {0} attempts")]
    IdsExhausted(usize),
    #[error("stored entry {id} is malformed: {reason}")]
    CorruptEntry { id: String, reason: String },
    #[error(transparent)]
    Storage(#[from] rusqlite::Error),
}

impl WkError {
    pub(crate) fn corrupt(id: &str, reason: impl Into<String>) -> Self {
        Self::CorruptEntry {
            id: id.to_string(),
            reason: reason.into(),
        }
    }
}
