//! Headless terminal player for Qi Path dialogue scripts.
//!
//! Each input line is one click: `1`, `2`, or `3` picks a choice, `q` quits,
//! and anything else clicks past the current page.

mod terminal;

use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::Parser;
use miette::{IntoDiagnostic, Result};
use story_core::{
    DialogueScript, DialogueSession, InputEvent, InputLatch, OptionSlot, SessionConfig, StoryError,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::terminal::TerminalHost;

#[derive(Parser)]
#[command(name = "story", about = "Play a Qi Path dialogue script in the terminal", version)]
struct Cli {
    /// Script file (.toml or .json)
    script: PathBuf,

    /// Session config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let script = DialogueScript::load(&cli.script).into_diagnostic()?;
    let config = match &cli.config {
        Some(path) => SessionConfig::load(path).into_diagnostic()?,
        None => SessionConfig::default(),
    };

    let mut session = DialogueSession::new(script, config);
    let mut host = TerminalHost::new(io::stdout());
    let mut latch = InputLatch::new();

    session.start(&mut host);
    host.print_stats().into_diagnostic()?;

    for line in io::stdin().lock().lines() {
        let line = line.into_diagnostic()?;
        match parse_click(line.trim()) {
            Some(event) => latch.record(event),
            None => break,
        }

        match session.update(&mut latch, &mut host) {
            Ok(_) => host.print_stats().into_diagnostic()?,
            Err(StoryError::SequenceExhausted { .. }) if session.is_finished() => {
                host.print("The End.").into_diagnostic()?;
                break;
            }
            Err(err @ StoryError::SequenceExhausted { .. }) => {
                warn!(%err, "last page still has choices");
            }
            Err(err @ StoryError::MissingOption { .. }) => {
                warn!(%err, "ignoring click");
            }
            Err(err) => return Err(err).into_diagnostic(),
        }
    }

    info!(session = %session.id(), page = session.current_index() + 1, "session ended");
    Ok(())
}

/// `None` means quit.
fn parse_click(input: &str) -> Option<InputEvent> {
    if input.eq_ignore_ascii_case("q") {
        return None;
    }
    let event = input
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(OptionSlot::from_index)
        .map(InputEvent::Option)
        .unwrap_or(InputEvent::Other);
    Some(event)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}
