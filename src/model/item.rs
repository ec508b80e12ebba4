// File: ./src/model/item.rs
use crate::model::date::{DateStructure, ParsedDate, parse_date};
use std::fmt;

/// Literal text splitting a deadline's description from its due date.
pub const DEADLINE_SEPARATOR: &str = " /by ";
/// Literal text splitting an event's description from its time.
pub const EVENT_SEPARATOR: &str = " /at ";

/// The date text of a deadline or event.
///
/// `raw` is always what the user typed; `parsed` is filled in only when the
/// text matched a known format and is purely informational.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateClause {
    pub raw: String,
    pub parsed: Option<ParsedDate>,
}

impl DateClause {
    pub fn new(raw: &str) -> Self {
        let raw = raw.trim().to_string();
        let parsed = parse_date(&raw);
        Self { raw, parsed }
    }
}

/// Which of the three task shapes this is. Fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    ToDo,
    Deadline(DateClause),
    Event(DateClause),
}

/// Discriminant of a `TaskKind` without its payload. Used by the command
/// parser and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskType {
    ToDo,
    Deadline,
    Event,
}

impl TaskType {
    pub fn tag(&self) -> &'static str {
        match self {
            TaskType::ToDo => "T",
            TaskType::Deadline => "D",
            TaskType::Event => "E",
        }
    }

    /// Command keyword that creates this type.
    pub fn keyword(&self) -> &'static str {
        match self {
            TaskType::ToDo => "todo",
            TaskType::Deadline => "deadline",
            TaskType::Event => "event",
        }
    }

    /// Separator clause required by dated types.
    pub fn separator(&self) -> Option<&'static str> {
        match self {
            TaskType::ToDo => None,
            TaskType::Deadline => Some(DEADLINE_SEPARATOR),
            TaskType::Event => Some(EVENT_SEPARATOR),
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    done: bool,
    kind: TaskKind,
}

impl Task {
    pub fn todo(description: &str) -> Self {
        Self::with_status(false, description, TaskKind::ToDo)
    }

    pub fn deadline(description: &str, by: &str) -> Self {
        Self::with_status(false, description, TaskKind::Deadline(DateClause::new(by)))
    }

    pub fn event(description: &str, at: &str) -> Self {
        Self::with_status(false, description, TaskKind::Event(DateClause::new(at)))
    }

    /// Builds a task in an explicit done state. Callers are responsible for
    /// rejecting empty descriptions and empty date clauses.
    pub fn with_status(done: bool, description: &str, kind: TaskKind) -> Self {
        Self {
            description: description.trim().to_string(),
            done,
            kind,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn set_done(&mut self, done: bool) {
        self.done = done;
    }

    pub fn task_type(&self) -> TaskType {
        match self.kind {
            TaskKind::ToDo => TaskType::ToDo,
            TaskKind::Deadline(_) => TaskType::Deadline,
            TaskKind::Event(_) => TaskType::Event,
        }
    }

    pub fn type_tag(&self) -> &'static str {
        self.task_type().tag()
    }

    pub fn date_clause(&self) -> Option<&DateClause> {
        match &self.kind {
            TaskKind::ToDo => None,
            TaskKind::Deadline(clause) | TaskKind::Event(clause) => Some(clause),
        }
    }

    pub fn parsed_date(&self) -> Option<&ParsedDate> {
        self.date_clause().and_then(|c| c.parsed.as_ref())
    }

    /// `None` for todos and for date text that was not recognized.
    pub fn date_structure(&self) -> Option<DateStructure> {
        self.parsed_date().map(ParsedDate::structure)
    }

    /// Description with the date suffix, e.g. `return book (by: Sunday)`.
    /// The suffix always shows the raw text.
    pub fn full_description(&self) -> String {
        match &self.kind {
            TaskKind::ToDo => self.description.clone(),
            TaskKind::Deadline(clause) => format!("{} (by: {})", self.description, clause.raw),
            TaskKind::Event(clause) => format!("{} (at: {})", self.description, clause.raw),
        }
    }

    /// The input line that would recreate this task.
    pub fn to_command_string(&self) -> String {
        let task_type = self.task_type();
        match (self.date_clause(), task_type.separator()) {
            (Some(clause), Some(sep)) => {
                format!("{} {}{}{}", task_type, self.description, sep, clause.raw)
            }
            _ => format!("{} {}", task_type, self.description),
        }
    }
}
