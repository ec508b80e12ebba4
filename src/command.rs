// File: src/command.rs
//! Turns one raw input line into a validated `Command`.
//!
//! Parsing is pure: nothing here touches the task list, so a line that fails
//! to parse can never leave a half-applied change behind.
use crate::error::CommandError;
use crate::model::{Task, TaskType};

/// Line that ends the session. Matched exactly, before any parsing.
pub const EXIT_KEYWORD: &str = "bye";

const LIST_KEYWORD: &str = "list";
const MARK_KEYWORD: &str = "mark";
const UNMARK_KEYWORD: &str = "unmark";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    /// The index text is kept raw: the list decides whether it is usable,
    /// and an empty list must reject the command before reading it.
    SetStatus {
        index: String,
        done: bool,
    },
    Add(Task),
}

impl Command {
    /// Matches the line against the known shapes in fixed priority order:
    /// `list`, `mark`/`unmark`, `todo `, `deadline `, `event `.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        if line == LIST_KEYWORD {
            return Ok(Command::List);
        }

        if let Some(rest) = line.strip_prefix(MARK_KEYWORD) {
            return Ok(Command::SetStatus {
                index: rest.trim().to_string(),
                done: true,
            });
        }
        if let Some(rest) = line.strip_prefix(UNMARK_KEYWORD) {
            return Ok(Command::SetStatus {
                index: rest.trim().to_string(),
                done: false,
            });
        }

        for task_type in [TaskType::ToDo, TaskType::Deadline, TaskType::Event] {
            if let Some(rest) = strip_keyword(line, task_type.keyword()) {
                return parse_add(task_type, rest).map(Command::Add);
            }
        }

        Err(CommandError::UnrecognizedCommand)
    }
}

/// `keyword` must be followed by a single space to count as a match.
fn strip_keyword<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    line.strip_prefix(keyword)?.strip_prefix(' ')
}

fn parse_add(task_type: TaskType, rest: &str) -> Result<Task, CommandError> {
    let Some(separator) = task_type.separator() else {
        let description = rest.trim();
        if description.is_empty() {
            return Err(CommandError::EmptyDescription(task_type));
        }
        return Ok(Task::todo(description));
    };

    if !rest.contains(separator) {
        return Err(CommandError::MissingRequiredClause(task_type));
    }

    let parts: Vec<&str> = rest.split(separator).map(str::trim).collect();
    let [description, date] = parts.as_slice() else {
        return Err(CommandError::MalformedClauseCount(task_type));
    };
    if description.is_empty() || date.is_empty() {
        return Err(CommandError::MalformedClauseCount(task_type));
    }

    Ok(match task_type {
        TaskType::Event => Task::event(description, date),
        _ => Task::deadline(description, date),
    })
}
