// File: ./src/cli.rs
//! Command-line flag handling and help text.
use crate::model::DateFormat;
use anyhow::Result;
use std::path::PathBuf;
use strum::IntoEnumIterator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    Run { root: Option<PathBuf> },
    Help,
    Version,
}

/// Parses the arguments after the binary name.
pub fn parse_args<I>(args: I) -> Result<CliAction>
where
    I: IntoIterator<Item = String>,
{
    let mut root = None;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" | "help" => return Ok(CliAction::Help),
            "-V" | "--version" => return Ok(CliAction::Version),
            "-r" | "--root" => {
                let path = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("'{}' requires a path", arg))?;
                root = Some(PathBuf::from(path));
            }
            other => {
                return Err(anyhow::anyhow!(
                    "Unknown argument '{}'. See 'duke --help'.",
                    other
                ));
            }
        }
    }

    Ok(CliAction::Run { root })
}

pub fn print_version() {
    println!("duke v{}", env!("CARGO_PKG_VERSION"));
}

pub fn print_help(binary_name: &str) {
    println!(
        "Duke v{} - A small, chatty task tracker for the terminal",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {} [--root <path>]", binary_name);
    println!("    {} --help", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    -r, --root <path>     Use a different directory for config and logs.");
    println!("    -V, --version         Print the version.");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("COMMANDS:");
    println!("    list                          Show every task");
    println!("    todo <description>            Add a todo");
    println!("    deadline <description> /by <date>");
    println!("                                  Add a deadline");
    println!("    event <description> /at <date>");
    println!("                                  Add an event");
    println!("    mark <index>                  Mark a task as done");
    println!("    unmark <index>                Mark a task as not done");
    println!("    bye                           Quit");
    println!();
    println!("RECOGNIZED DATES (anything else is kept as written):");
    for format in DateFormat::iter() {
        println!("    {}", format.example());
    }
    println!();
    println!("EXAMPLES:");
    println!("    todo read book");
    println!("    deadline return book /by 2019-12-02");
    println!("    event project meeting /at 2/12/2019 1400");
    println!("    mark 1");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_args_runs_with_default_root() {
        assert_eq!(
            parse_args(args(&[])).unwrap(),
            CliAction::Run { root: None }
        );
    }

    #[test]
    fn test_root_override() {
        assert_eq!(
            parse_args(args(&["--root", "/tmp/duke"])).unwrap(),
            CliAction::Run {
                root: Some(PathBuf::from("/tmp/duke"))
            }
        );
        assert!(parse_args(args(&["-r"])).is_err());
    }

    #[test]
    fn test_help_and_unknown() {
        assert_eq!(parse_args(args(&["-h"])).unwrap(), CliAction::Help);
        assert_eq!(parse_args(args(&["--version"])).unwrap(), CliAction::Version);
        assert!(parse_args(args(&["--frobnicate"])).is_err());
    }
}
