// File: src/store.rs
use crate::error::CommandError;
use crate::model::{Task, TaskDisplay};

pub const EMPTY_LIST_REPLY: &str = "You have no pending task. Add one now?";
const LIST_HEADER: &str = "These are your current task:";

/// Insertion-ordered task collection with 1-based positional indices.
///
/// There is no removal, so an index keeps pointing at the same task for the
/// whole session.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// 1-based lookup.
    pub fn get(&self, index: usize) -> Option<&Task> {
        index.checked_sub(1).and_then(|i| self.tasks.get(i))
    }

    /// Appends and returns the confirmation reply.
    pub fn add(&mut self, task: Task) -> String {
        let line = task.display_line();
        log::debug!("Adding '{}'", task.to_command_string());
        if let Some(date) = task.parsed_date() {
            log::debug!("Recognized date: {}", date.format_pretty());
        }
        self.tasks.push(task);
        log::info!("Added task #{}: {}", self.tasks.len(), line);
        format!(
            "Roger. I will add this to your list:\n\t{}\nYou currently have {} task in your list.",
            line,
            self.tasks.len()
        )
    }

    pub fn list(&self) -> String {
        if self.tasks.is_empty() {
            return EMPTY_LIST_REPLY.to_string();
        }
        let mut reply = LIST_HEADER.to_string();
        for (i, task) in self.tasks.iter().enumerate() {
            reply.push_str(&format!("\n{}.{}", i + 1, task.display_line()));
        }
        reply
    }

    /// Marks or unmarks the task at the 1-based `raw_index`.
    ///
    /// Checks run in order: empty list, integer index, range, no-op. The list
    /// is only modified once all of them pass.
    pub fn update_status(&mut self, raw_index: &str, done: bool) -> Result<String, CommandError> {
        if self.tasks.is_empty() {
            return Err(CommandError::EmptyCollection);
        }

        let index: i64 = raw_index
            .trim()
            .parse()
            .map_err(|_| CommandError::NotAnInteger)?;

        let position = usize::try_from(index)
            .ok()
            .and_then(|i| i.checked_sub(1))
            .filter(|i| *i < self.tasks.len())
            .ok_or(CommandError::IndexOutOfRange)?;

        let task = &mut self.tasks[position];
        if task.is_done() == done {
            return Err(CommandError::NoOpChange);
        }
        task.set_done(done);
        log::info!("Task #{} marked done={}", index, done);

        let header = if done {
            "Nice! I've marked this task as done:"
        } else {
            "Ok, I've marked this task as not done yet:"
        };
        Ok(format!("{}\n\t{}", header, task.display_line()))
    }
}
