//! Unified error type for task submission and boundary validation.

use std::collections::TryReserveError;

use thiserror::Error;

/// Errors surfaced by the dispatcher and its input boundary.
///
/// None of these are fatal: the caller reports the error and the pending
/// containers stay exactly as they were.
#[derive(Debug, Error)]
pub enum TaskError {
    /// Description exceeds the accepted length bound.
    #[error("description is {len} characters, limit is {max}")]
    DescriptionTooLong { len: usize, max: usize },

    /// Description is empty or whitespace only.
    #[error("description must not be empty")]
    EmptyDescription,

    /// Priority level outside the closed {0, 1} set.
    #[error("invalid priority level {0}, expected 0 (normal) or 1 (high)")]
    InvalidPriority(u8),

    /// A container could not reserve room for one more task.
    #[error("out of memory while accepting task: {0}")]
    Exhausted(#[from] TryReserveError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_error_names_both_lengths() {
        let err = TaskError::DescriptionTooLong { len: 120, max: 99 };
        assert_eq!(err.to_string(), "description is 120 characters, limit is 99");
    }

    #[test]
    fn invalid_priority_lists_the_accepted_levels() {
        let err = TaskError::InvalidPriority(7);
        let message = err.to_string();
        assert!(message.contains("7"));
        assert!(message.contains("0 (normal)"));
        assert!(message.contains("1 (high)"));
    }
}
