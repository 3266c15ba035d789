//! Action handlers.
//!
//! Each session loads the source image, performs the initial draw and then
//! feeds actions to the engine one at a time. An action always finishes its
//! acquire, transform and write cycle before the next one is read.

use crate::{
    cli::{Command, SessionArgs},
    config::Config,
};
use anyhow::{Context, Result};
use log::{info, warn};
use pixel_filter::{Action, Canvas, FilterEngine, SourceImage};
use std::{
    io::{self, BufRead, Write},
    path::Path,
};

pub fn run(command: &Command, config: &Config) -> Result<()> {
    match command {
        Command::Run { session, actions } => {
            let mut engine = open_session(session, config)?;
            run_actions(&mut engine, actions)?;
            save(&engine, &session.output)
        }
        Command::Interactive { session } => {
            let mut engine = open_session(session, config)?;
            interactive(&mut engine, io::stdin().lock(), &session.output)
        }
        Command::Actions => list_actions(io::stdout().lock()),
    }
}

/// Load the source, size the canvas and draw the source once.
///
/// Canvas size comes from the command line, then the config file, then the
/// source's natural size.
pub fn open_session(session: &SessionArgs, config: &Config) -> Result<FilterEngine<Canvas>> {
    let source = SourceImage::open(&session.input)
        .with_context(|| format!("load source image {} failed", session.input.display()))?;

    let width = session
        .width
        .or(config.canvas.width)
        .unwrap_or(source.width());
    let height = session
        .height
        .or(config.canvas.height)
        .unwrap_or(source.height());

    let mut engine = FilterEngine::new(
        Canvas::new(width, height),
        source,
        config.filter.clone(),
    );
    engine.on_load();

    Ok(engine)
}

pub fn run_actions(engine: &mut FilterEngine<Canvas>, actions: &[Action]) -> Result<()> {
    for action in actions {
        engine
            .trigger(*action)
            .with_context(|| format!("{action} failed"))?;
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line {
    Action(Action),
    Save,
    Quit,
    Blank,
}

fn parse_line(line: &str) -> Option<Line> {
    match line.trim().to_ascii_lowercase().as_str() {
        "" => Some(Line::Blank),
        "save" => Some(Line::Save),
        "quit" | "exit" => Some(Line::Quit),
        other => other.parse::<Action>().ok().map(Line::Action),
    }
}

/// Handle one command per input line until `quit` or end of input.
///
/// The canvas is saved to `output` on `save`, on `quit` and at end of input.
pub fn interactive(
    engine: &mut FilterEngine<Canvas>,
    input: impl BufRead,
    output: &Path,
) -> Result<()> {
    info!(
        "ready, actions: {}, save, quit",
        Action::all()
            .iter()
            .map(|a| a.name())
            .collect::<Vec<_>>()
            .join(", ")
    );

    for line in input.lines() {
        let line = line.context("read command failed")?;

        match parse_line(&line) {
            Some(Line::Action(action)) => engine.trigger(action)?,
            Some(Line::Save) => save(engine, output)?,
            Some(Line::Quit) => break,
            Some(Line::Blank) => (),
            None => warn!("unknown command `{}`", line.trim()),
        }
    }

    save(engine, output)
}

pub fn list_actions(mut out: impl Write) -> Result<()> {
    for action in Action::all() {
        writeln!(out, "{action}")?;
    }

    Ok(())
}

fn save(engine: &FilterEngine<Canvas>, output: &Path) -> Result<()> {
    engine
        .surface()
        .save(output)
        .with_context(|| format!("save canvas to {} failed", output.display()))
}
