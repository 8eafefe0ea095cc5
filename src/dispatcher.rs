//! Two-lane task dispatcher: a FIFO queue for normal work, a LIFO stack for
//! high-priority work, and the selection rule between their heads.

use std::collections::VecDeque;

use tracing::debug;

use crate::error::TaskError;
use crate::types::{Priority, Task};

/// Read-only, ordered copy of the pending containers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    /// Normal queue, front (next to dispatch) to back.
    pub queue: Vec<Task>,
    /// Priority stack, top (next to dispatch) to bottom.
    pub stack: Vec<Task>,
}

impl Snapshot {
    /// True when neither lane held a task at snapshot time.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty() && self.stack.is_empty()
    }
}

/// Owns both pending-task containers.
///
/// Single-threaded by design: the value lives with its caller and every
/// operation runs to completion before the next one starts.
#[derive(Debug, Default)]
pub struct Dispatcher {
    queue: VecDeque<Task>,
    stack: Vec<Task>,
}

impl Dispatcher {
    /// Create a dispatcher with both lanes empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and accept one task, routing it by priority.
    ///
    /// High tasks land on the stack top, normal tasks on the queue tail.
    /// On any error nothing is inserted.
    pub fn submit(
        &mut self,
        description: impl Into<String>,
        priority: Priority,
    ) -> Result<(), TaskError> {
        let task = Task::new(description, priority)?;
        match task.priority {
            Priority::High => {
                self.stack.try_reserve(1)?;
                self.stack.push(task);
            }
            Priority::Normal => {
                self.queue.try_reserve(1)?;
                self.queue.push_back(task);
            }
        }
        debug!(pending = self.pending(), "task accepted");
        Ok(())
    }

    /// Remove and return the next task to run, or `None` when idle.
    ///
    /// The stack head wins whenever it strictly outranks the queue head.
    /// With two levels that drains every high task (newest first) before any
    /// normal task, then serves the queue in submission order.
    pub fn dispatch_next(&mut self) -> Option<Task> {
        let stack_wins = match (self.stack.last(), self.queue.front()) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(top), Some(front)) => top.priority > front.priority,
        };
        let task = if stack_wins {
            self.stack.pop()
        } else {
            self.queue.pop_front()
        };
        if let Some(task) = &task {
            debug!(
                priority = %task.priority,
                pending = self.pending(),
                "task dispatched"
            );
        }
        task
    }

    /// Ordered copy of both lanes; never mutates.
    pub fn inspect(&self) -> Snapshot {
        Snapshot {
            queue: self.queue.iter().cloned().collect(),
            stack: self.stack.iter().rev().cloned().collect(),
        }
    }

    /// Total number of pending tasks across both lanes.
    pub fn pending(&self) -> usize {
        self.queue.len() + self.stack.len()
    }

    /// True when neither lane holds a task.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty() && self.stack.is_empty()
    }
}
