//! Task model and the two-level priority shared across the system.

use crate::error::TaskError;

/// Longest accepted task description, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 99;

/// Urgency of a task. The set is closed; callers compare levels through the
/// derived ordering instead of assuming which lane wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    Normal,
    High,
}

impl Priority {
    /// Numeric level used on the console surface (0 = normal, 1 = high).
    pub fn level(self) -> u8 {
        match self {
            Priority::Normal => 0,
            Priority::High => 1,
        }
    }

    /// Parse a numeric level, rejecting anything outside {0, 1}.
    pub fn from_level(level: u8) -> Result<Self, TaskError> {
        match level {
            0 => Ok(Priority::Normal),
            1 => Ok(Priority::High),
            other => Err(TaskError::InvalidPriority(other)),
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Normal => f.write_str("normal"),
            Priority::High => f.write_str("high"),
        }
    }
}

/// Unit of work waiting to be dispatched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Task {
    /// Human-readable description, validated at construction.
    pub description: String,
    /// Urgency that routes the task to its lane.
    pub priority: Priority,
}

impl Task {
    /// Construct a task, enforcing the description bound up front.
    ///
    /// Over-long descriptions are refused rather than truncated so a task is
    /// either stored whole or not at all.
    pub fn new(description: impl Into<String>, priority: Priority) -> Result<Self, TaskError> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(TaskError::EmptyDescription);
        }
        let len = description.chars().count();
        if len > MAX_DESCRIPTION_LEN {
            return Err(TaskError::DescriptionTooLong {
                len,
                max: MAX_DESCRIPTION_LEN,
            });
        }
        Ok(Self {
            description,
            priority,
        })
    }
}
