// File: src/bin/duke.rs
use anyhow::Result;
use duke::cli::{self, CliAction};
use duke::config::Config;
use duke::context::StandardContext;
use duke::controller::Session;
use duke::{logging, terminal};
use std::env;
use std::io;

fn main() -> Result<()> {
    let root = match cli::parse_args(env::args().skip(1))? {
        CliAction::Help => {
            cli::print_help("duke");
            return Ok(());
        }
        CliAction::Version => {
            cli::print_version();
            return Ok(());
        }
        CliAction::Run { root } => root,
    };

    let ctx = StandardContext::resolve(root)?;
    let config = Config::load(&ctx)?;

    // A broken logger should not stop the user from working.
    if let Err(e) = logging::init(&ctx, &config.log_level) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    let mut session = Session::new();
    let stdin = io::stdin();
    terminal::run(stdin.lock(), io::stdout().lock(), &mut session, &config)
}
