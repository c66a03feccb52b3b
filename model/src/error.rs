//! Error types for the todo/filter model.

use thiserror::Error;

/// Result type alias for model transitions.
pub type Result<T> = std::result::Result<T, InvalidInput>;

/// Input that the model rejects outright.
///
/// These are the only failure modes in the model. Everything else is total:
/// completing, uncompleting, or toggling an unknown identifier is a silent
/// no-op, not an error, since callers derive identifiers from rendered
/// state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    /// The task text was empty or whitespace-only.
    #[error("task cannot be empty")]
    EmptyTask,

    /// The filter value did not name a known filter.
    #[error("unknown filter value: {value}")]
    UnknownFilter {
        /// The rejected value
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(InvalidInput::EmptyTask.to_string(), "task cannot be empty");
        assert_eq!(
            InvalidInput::UnknownFilter {
                value: "BOGUS".to_string()
            }
            .to_string(),
            "unknown filter value: BOGUS"
        );
    }
}
