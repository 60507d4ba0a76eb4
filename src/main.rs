//! Terminal driver and entry point.
//!
//! Reads one command per line from stdin, feeds the resulting events to the
//! library's handler, executes the returned actions, and re-renders the page
//! after every command that changed the view.
//!
//! # Lifecycle
//!
//! 1. **Load**: Parse arguments, read config, initialize tracing
//! 2. **Initialize**: Build the session (theme, catalog, store)
//! 3. **Loop**: Parse line → handle events → apply actions → render
//! 4. **Exit**: On `quit` or end of input
//!
//! See [`marquee::app::command`] for the command list.

#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use marquee::app::command::{parse_command, Command};
use marquee::{handle_event, Action, Config, Session};

#[derive(Parser)]
#[command(name = "marquee", about = "Browse a streaming catalog from the terminal")]
struct Args {
    /// Config file (TOML). Defaults to ~/.config/marquee/config.toml if present
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Built-in theme name, overriding the config
    #[arg(short, long)]
    theme: Option<String>,

    /// Terminal width in columns, overriding the config
    #[arg(short, long)]
    width: Option<usize>,

    /// Catalog file (TOML), overriding the config
    #[arg(long)]
    catalog: Option<String>,

    /// Skip the initial render
    #[arg(long)]
    quiet: bool,
}

fn main() -> marquee::Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;
    marquee::observability::init_tracing(&config);

    let span = tracing::debug_span!("driver_load");
    let guard = span.entered();
    let mut session = marquee::initialize(&config)?;
    drop(guard);

    if !args.quiet {
        marquee::ui::render(&session)?;
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };

        match command {
            Command::PrintState => {
                let mut stdout = io::stdout().lock();
                writeln!(stdout, "{}", session.state_json()?)?;
                stdout.flush()?;
            }
            Command::Events(events) => {
                let (needs_render, quit) = run_events(&mut session, &events)?;
                if quit {
                    tracing::debug!("quit requested");
                    break;
                }
                if needs_render {
                    marquee::ui::render(&session)?;
                }
            }
        }
    }

    Ok(())
}

/// Config file (explicit or discovered) with command-line overrides applied.
fn load_config(args: &Args) -> marquee::Result<Config> {
    let path = args
        .config
        .clone()
        .or_else(marquee::infrastructure::default_config_file);

    let mut config = match path {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    if let Some(theme) = &args.theme {
        config.theme_name = Some(theme.clone());
        config.theme_file = None;
    }
    if let Some(width) = args.width.filter(|w| *w > 0) {
        config.width = width;
    }
    if let Some(catalog) = &args.catalog {
        config.catalog_file = Some(catalog.clone());
    }
    Ok(config)
}

/// Handles events in order and executes their actions.
///
/// Returns whether the view changed and whether the session should end.
fn run_events(session: &mut Session, events: &[marquee::Event]) -> marquee::Result<(bool, bool)> {
    let mut changed = false;

    for event in events {
        let (needs_render, actions) = handle_event(session, event)?;
        changed |= needs_render;

        for action in actions {
            match action {
                Action::Navigate(route) => {
                    session.navigate(route);
                    changed = true;
                }
                Action::Quit => return Ok((changed, true)),
            }
        }
    }

    Ok((changed, false))
}
