// Tests for turning raw lines into commands.
use duke::command::Command;
use duke::error::CommandError;
use duke::model::{TaskDisplay, TaskType};

fn added(line: &str) -> duke::model::Task {
    match Command::parse(line) {
        Ok(Command::Add(task)) => task,
        other => panic!("Expected an add command for '{}', got {:?}", line, other),
    }
}

#[test]
fn test_list_is_exact_match() {
    assert_eq!(Command::parse("list"), Ok(Command::List));
    assert_eq!(
        Command::parse("list all"),
        Err(CommandError::UnrecognizedCommand)
    );
    assert_eq!(Command::parse("LIST"), Err(CommandError::UnrecognizedCommand));
}

#[test]
fn test_mark_and_unmark_keep_raw_index() {
    assert_eq!(
        Command::parse("mark 2"),
        Ok(Command::SetStatus {
            index: "2".to_string(),
            done: true
        })
    );
    assert_eq!(
        Command::parse("unmark   3  "),
        Ok(Command::SetStatus {
            index: "3".to_string(),
            done: false
        })
    );
    // Validation of the index happens against the list, not here.
    assert_eq!(
        Command::parse("mark abc"),
        Ok(Command::SetStatus {
            index: "abc".to_string(),
            done: true
        })
    );
}

#[test]
fn test_todo_takes_remainder_as_description() {
    let t = added("todo read book");
    assert_eq!(t.task_type(), TaskType::ToDo);
    assert_eq!(t.description(), "read book");
}

#[test]
fn test_empty_todo_is_rejected() {
    assert_eq!(
        Command::parse("todo    "),
        Err(CommandError::EmptyDescription(TaskType::ToDo))
    );
}

#[test]
fn test_deadline_splits_on_by() {
    let t = added("deadline return book /by 2019-12-02");
    assert_eq!(t.task_type(), TaskType::Deadline);
    assert_eq!(t.description(), "return book");
    assert_eq!(t.display_line(), "[D][ ] return book (by: 2019-12-02)");
}

#[test]
fn test_deadline_without_separator() {
    assert_eq!(
        Command::parse("deadline oops"),
        Err(CommandError::MissingRequiredClause(TaskType::Deadline))
    );
    // `/at` is not the deadline separator.
    assert_eq!(
        Command::parse("deadline oops /at monday"),
        Err(CommandError::MissingRequiredClause(TaskType::Deadline))
    );
}

#[test]
fn test_deadline_with_wrong_part_count() {
    assert_eq!(
        Command::parse("deadline a /by b /by c"),
        Err(CommandError::MalformedClauseCount(TaskType::Deadline))
    );
    assert_eq!(
        Command::parse("deadline  /by monday"),
        Err(CommandError::MalformedClauseCount(TaskType::Deadline))
    );
    assert_eq!(
        Command::parse("deadline report /by   "),
        Err(CommandError::MalformedClauseCount(TaskType::Deadline))
    );
}

#[test]
fn test_event_splits_on_at() {
    let t = added("event project meeting /at Mon 2-4pm");
    assert_eq!(t.task_type(), TaskType::Event);
    assert_eq!(t.display_line(), "[E][ ] project meeting (at: Mon 2-4pm)");

    assert_eq!(
        Command::parse("event party /by friday"),
        Err(CommandError::MissingRequiredClause(TaskType::Event))
    );
}

#[test]
fn test_event_with_wrong_part_count() {
    for line in ["event a /at b /at c", "event  /at x", "event x /at  "] {
        assert_eq!(
            Command::parse(line),
            Err(CommandError::MalformedClauseCount(TaskType::Event)),
            "'{}' should be rejected",
            line
        );
    }
}

#[test]
fn test_unknown_lines() {
    for line in ["", "hello", "delete 1", "todo", "deadline", " list"] {
        assert_eq!(
            Command::parse(line),
            Err(CommandError::UnrecognizedCommand),
            "'{}' should be unrecognized",
            line
        );
    }
}
