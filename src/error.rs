// File: ./src/error.rs
//! Recoverable command failures.
//!
//! Every variant is the user's fault and none of them is fatal: the session
//! turns them into a reply and the task list is left untouched.
use crate::model::TaskType;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("You do not have any ongoing task. Add one first?")]
    EmptyCollection,

    #[error("{}", missing_clause_message(.0))]
    MissingRequiredClause(TaskType),

    #[error("{}", malformed_clause_message(.0))]
    MalformedClauseCount(TaskType),

    #[error("The description of a {0} cannot be empty.")]
    EmptyDescription(TaskType),

    #[error("Please provide the index of the task that you wish to update.")]
    NotAnInteger,

    #[error("Task is not found. Please provide a valid index.")]
    IndexOutOfRange,

    #[error("There are no changes to be made!")]
    NoOpChange,

    #[error("Hmm, I don't understand what that means. Can you explain again?")]
    UnrecognizedCommand,
}

impl CommandError {
    /// Whether the reply should be followed by the current task list.
    pub fn shows_listing(&self) -> bool {
        matches!(self, CommandError::IndexOutOfRange | CommandError::NoOpChange)
    }
}

fn missing_clause_message(task_type: &TaskType) -> &'static str {
    match task_type {
        TaskType::Event => "Please include the event date",
        _ => "Please include the deadline for your task",
    }
}

fn malformed_clause_message(task_type: &TaskType) -> &'static str {
    match task_type {
        TaskType::Event => "Please include the description and time of your event",
        _ => "Please include the description and deadline for your task",
    }
}
