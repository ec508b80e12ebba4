// Tests for task construction and display lines.
use duke::model::{DateStructure, Task, TaskDisplay, TaskKind, TaskType};

#[test]
fn test_todo_display_line() {
    let mut t = Task::todo("read book");
    assert_eq!(t.type_tag(), "T");
    assert!(!t.is_done());
    assert_eq!(t.display_line(), "[T][ ] read book");

    t.set_done(true);
    assert_eq!(t.display_line(), "[T][X] read book");
}

#[test]
fn test_deadline_shows_raw_text_even_when_parsed() {
    let t = Task::deadline("return book", "2019-12-02");
    assert_eq!(t.type_tag(), "D");
    assert_eq!(t.display_line(), "[D][ ] return book (by: 2019-12-02)");
    assert_eq!(t.date_structure(), Some(DateStructure::DateOnly));
}

#[test]
fn test_deadline_with_free_text_date() {
    let t = Task::deadline("return book", "Sunday night");
    assert_eq!(t.display_line(), "[D][ ] return book (by: Sunday night)");
    assert!(t.parsed_date().is_none());
    assert!(t.date_structure().is_none());
}

#[test]
fn test_event_uses_at_phrasing() {
    let t = Task::event("project meeting", "2/12/2019 1400");
    assert_eq!(t.type_tag(), "E");
    assert_eq!(t.display_line(), "[E][ ] project meeting (at: 2/12/2019 1400)");
    assert_eq!(t.date_structure(), Some(DateStructure::DateTime));
}

#[test]
fn test_with_status_builds_done_task() {
    let t = Task::with_status(true, "old chore", TaskKind::ToDo);
    assert!(t.is_done());
    assert_eq!(t.task_type(), TaskType::ToDo);
    assert_eq!(t.status_symbol(), "X");
    assert!(t.date_structure().is_none());
}

#[test]
fn test_to_command_string() {
    assert_eq!(Task::todo("read book").to_command_string(), "todo read book");
    assert_eq!(
        Task::deadline("return book", "Sunday").to_command_string(),
        "deadline return book /by Sunday"
    );
    assert_eq!(
        Task::event("party", "Dec 2 2019").to_command_string(),
        "event party /at Dec 2 2019"
    );
}
