// File: ./src/terminal.rs
// Line-oriented front end: banners, dividers and the read/reply loop.
use crate::config::Config;
use crate::controller::{Outcome, Session};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

const LOGO: &str = concat!(
    "\t\t\t ____        _        \n",
    "\t\t\t|  _ \\ _   _| | _____ \n",
    "\t\t\t| | | | | | | |/ / _ \\\n",
    "\t\t\t| |_| | |_| |   <  __/\n",
    "\t\t\t|____/ \\__,_|_|\\_\\___|",
);

pub const WELCOME_REPLY: &str = "Hello! I'm Duke\nWhat can I do for you?";
pub const GOODBYE_REPLY: &str = "Bye. Hope to see you again soon!";

/// Frames replies for display. Holds no task state.
pub struct Presenter<'a, W: Write> {
    out: W,
    config: &'a Config,
}

impl<'a, W: Write> Presenter<'a, W> {
    pub fn new(out: W, config: &'a Config) -> Self {
        Self { out, config }
    }

    fn divider(&mut self, ch: char) -> Result<()> {
        let line: String = std::iter::repeat_n(ch, self.config.divider_width).collect();
        writeln!(self.out, "{}", line)?;
        Ok(())
    }

    pub fn welcome(&mut self) -> Result<()> {
        if self.config.show_logo {
            self.divider('_')?;
            writeln!(self.out, "{}", LOGO)?;
            self.divider('.')?;
        }
        self.reply(WELCOME_REPLY)
    }

    /// Underscore divider, prefixed reply lines, dash divider.
    pub fn reply(&mut self, message: &str) -> Result<()> {
        self.divider('_')?;
        for line in message.lines() {
            writeln!(self.out, "{}{}", self.config.reply_prefix, line)?;
        }
        self.divider('-')?;
        self.out.flush()?;
        Ok(())
    }
}

/// Runs the session until `bye` or end of input.
pub fn run<R, W>(input: R, output: W, session: &mut Session, config: &Config) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut presenter = Presenter::new(output, config);
    presenter.welcome()?;

    for line in input.lines() {
        let line = line.context("Failed to read input line")?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        match session.handle_line(line) {
            Outcome::Reply(reply) => presenter.reply(&reply)?,
            Outcome::Exit => break,
        }
    }

    log::info!("Session ended with {} task(s)", session.tasks().len());
    presenter.reply(GOODBYE_REPLY)
}
