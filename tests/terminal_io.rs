// Drives the terminal loop with in-memory input and output.
use duke::config::Config;
use duke::controller::Session;
use duke::terminal::{self, GOODBYE_REPLY};
use std::io::Cursor;

fn run_lines(input: &str, config: &Config) -> (String, Session) {
    let mut session = Session::new();
    let mut out = Vec::new();
    terminal::run(Cursor::new(input.to_string()), &mut out, &mut session, config)
        .expect("run should succeed");
    (String::from_utf8(out).expect("utf8 output"), session)
}

#[test]
fn test_replies_are_framed_and_prefixed() {
    let config = Config {
        show_logo: false,
        ..Config::default()
    };
    let (out, session) = run_lines("todo read book\nbye\n", &config);

    assert_eq!(session.tasks().len(), 1);
    assert!(out.contains("~\tHello! I'm Duke\n~\tWhat can I do for you?\n"));
    assert!(out.contains("~\t\t[T][ ] read book\n"), "Got: {}", out);
    assert!(out.contains(&"_".repeat(60)));
    assert!(out.contains(&"-".repeat(60)));
    assert!(out.trim_end().ends_with(&"-".repeat(60)));
    assert!(out.contains(&format!("~\t{}", GOODBYE_REPLY)));
}

#[test]
fn test_lines_after_bye_are_ignored() {
    let config = Config::default();
    let (_, session) = run_lines("todo a\nbye\ntodo b\n", &config);
    assert_eq!(session.tasks().len(), 1);
}

#[test]
fn test_end_of_input_says_goodbye() {
    let config = Config::default();
    let (out, session) = run_lines("todo a\r\ntodo b", &config);
    assert_eq!(session.tasks().len(), 2);
    assert_eq!(session.tasks().get(1).unwrap().description(), "a");
    assert!(out.contains(GOODBYE_REPLY));
}

#[test]
fn test_custom_prefix_and_width() {
    let config = Config {
        reply_prefix: "> ".to_string(),
        divider_width: 10,
        show_logo: false,
        ..Config::default()
    };
    let (out, _) = run_lines("list\n", &config);
    assert!(out.contains("> You have no pending task. Add one now?\n"));
    assert!(out.contains("__________\n"));
    assert!(!out.contains(&"_".repeat(11)));
}
