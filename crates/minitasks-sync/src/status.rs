/*
[INPUT]:  Outcomes of list/create/toggle/delete calls
[OUTPUT]: Tagged per-concern activity, operation failures, read-only snapshots
[POS]:    Sync layer - observable status exposed to the presentation layer
[UPDATE]: When adding a new tracked concern or snapshot field
*/

use minitasks_adapter::{Task, TasksError};
use std::fmt;
use thiserror::Error;

/// Progress of one concern (list refresh or create).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activity {
    /// Nothing outstanding
    #[default]
    Idle,
    /// Work is expected but no request has been issued yet
    Pending,
    /// `requests` calls of this concern are outstanding
    InFlight { requests: usize },
}

impl Activity {
    pub fn is_busy(&self) -> bool {
        !matches!(self, Activity::Idle)
    }

    /// Record a newly issued request
    pub fn begin(&mut self) {
        *self = match *self {
            Activity::Idle | Activity::Pending => Activity::InFlight { requests: 1 },
            Activity::InFlight { requests } => Activity::InFlight {
                requests: requests + 1,
            },
        };
    }

    /// Record a resolved request; stays busy while others are outstanding
    pub fn finish(&mut self) {
        *self = match *self {
            Activity::InFlight { requests } if requests > 1 => Activity::InFlight {
                requests: requests - 1,
            },
            Activity::InFlight { .. } => Activity::Idle,
            other => other,
        };
    }
}

/// Remote operation a failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Toggle,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Operation::List => "fetch tasks",
            Operation::Create => "create task",
            Operation::Toggle => "toggle task",
            Operation::Delete => "delete task",
        };
        f.write_str(text)
    }
}

/// The single failure kind surfaced to the presentation layer.
///
/// Transport failures and non-success statuses both collapse into this.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to {operation}: {message}")]
pub struct OperationFailed {
    pub operation: Operation,
    pub message: String,
}

impl OperationFailed {
    pub fn new(operation: Operation, source: &TasksError) -> Self {
        Self {
            operation,
            message: source.to_string(),
        }
    }
}

/// Counts shown under the task list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskStats {
    pub active: usize,
    pub completed: usize,
    pub total: usize,
}

impl TaskStats {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|task| task.done).count();
        Self {
            active: tasks.len() - completed,
            completed,
            total: tasks.len(),
        }
    }
}

/// Point-in-time copy of everything the presentation layer may read
#[derive(Debug, Clone, PartialEq)]
pub struct SyncSnapshot {
    pub tasks: Vec<Task>,
    pub list: Activity,
    pub create: Activity,
    pub error: Option<OperationFailed>,
    pub draft: String,
}

impl SyncSnapshot {
    /// A list fetch is outstanding (or the first one has not been issued yet)
    pub fn loading(&self) -> bool {
        self.list.is_busy()
    }

    /// A create request is outstanding
    pub fn creating(&self) -> bool {
        self.create.is_busy()
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    pub fn stats(&self) -> TaskStats {
        TaskStats::from_tasks(&self.tasks)
    }

    /// Whether the create control should be enabled
    pub fn can_submit(&self) -> bool {
        !self.creating() && !self.draft.trim().is_empty()
    }
}
