// File: src/controller.rs
//! Session controller: the single owner of the task list for one run.
//! The terminal layer hands every input line here and prints whatever comes
//! back; it never touches the list itself.
use crate::command::{Command, EXIT_KEYWORD};
use crate::error::CommandError;
use crate::store::TaskList;

/// Result of feeding one line to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Reply(String),
    Exit,
}

#[derive(Debug, Default)]
pub struct Session {
    tasks: TaskList,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// Processes one raw line (no trailing newline). `bye` ends the session
    /// and is never dispatched as a command.
    pub fn handle_line(&mut self, line: &str) -> Outcome {
        if line == EXIT_KEYWORD {
            log::debug!("Exit keyword received");
            return Outcome::Exit;
        }
        Outcome::Reply(self.execute(line))
    }

    /// Parses and runs one command, always producing a reply.
    pub fn execute(&mut self, line: &str) -> String {
        match Command::parse(line).and_then(|cmd| self.dispatch(cmd)) {
            Ok(reply) => reply,
            Err(e) => {
                log::debug!("Command '{}' rejected: {:?}", line, e);
                self.error_reply(&e)
            }
        }
    }

    fn dispatch(&mut self, command: Command) -> Result<String, CommandError> {
        log::debug!("Dispatching {:?}", command);
        match command {
            Command::List => Ok(self.tasks.list()),
            Command::SetStatus { index, done } => self.tasks.update_status(&index, done),
            Command::Add(task) => Ok(self.tasks.add(task)),
        }
    }

    fn error_reply(&self, error: &CommandError) -> String {
        let mut reply = error.to_string();
        if error.shows_listing() {
            reply.push('\n');
            reply.push_str(&self.tasks.list());
        }
        reply
    }
}
