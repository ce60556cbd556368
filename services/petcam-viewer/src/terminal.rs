//! Interactive line-driven browser
//!
//! Reads one command per line and runs it to completion before reading the
//! next. Rendering happens in a separate task that redraws whenever the
//! viewer publishes a new state.

use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::watch;

use crate::render::render;
use crate::viewer::Viewer;

pub const HELP: &str = "\
Commands:
  n, next          next hour
  p, prev          previous hour
  s N, select N    show capture N of the current hour
  b, back          back to the grid
  c, capture       take a picture now
  r, refresh       reload from the backend
  h, help          this help
  q, quit          exit";

/// A parsed input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Prev,
    /// 1-based position within the current bucket
    Select(usize),
    Back,
    Capture,
    Refresh,
    Help,
    Quit,
}

/// What the input loop should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Message(String),
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(word) = parts.next() else {
        return Err("empty command".to_string());
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "n" | "next" => Command::Next,
        "p" | "prev" => Command::Prev,
        "b" | "back" => Command::Back,
        "c" | "capture" => Command::Capture,
        "r" | "refresh" => Command::Refresh,
        "h" | "help" | "?" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        "s" | "select" => {
            let position = parts
                .next()
                .ok_or_else(|| "select needs a number, e.g. `s 2`".to_string())?;
            match position.parse::<usize>() {
                Ok(n) if n >= 1 => Command::Select(n),
                _ => return Err(format!("not a capture number: {}", position)),
            }
        }
        other => return Err(format!("unknown command `{}`, type `h` for help", other)),
    };

    if parts.next().is_some() {
        return Err(format!("unexpected arguments after `{}`", word));
    }
    Ok(command)
}

/// Run a single command against the viewer
pub async fn execute(viewer: &Viewer, command: Command) -> Outcome {
    match command {
        Command::Next => viewer.go_next_hour(),
        Command::Prev => viewer.go_prev_hour(),
        Command::Back => viewer.back(),
        Command::Refresh => viewer.load().await,
        Command::Capture => {
            if !viewer.trigger_capture().await {
                return Outcome::Message("A capture is already running.".to_string());
            }
        }
        Command::Select(position) => {
            let state = viewer.state();
            let image = state
                .current_bucket()
                .zip(position.checked_sub(1))
                .and_then(|(bucket, index)| bucket.items.get(index))
                .cloned();
            match image {
                Some(image) => viewer.select(image),
                None => return Outcome::Message(format!("No capture #{} in this hour.", position)),
            }
        }
        Command::Help => return Outcome::Message(HELP.to_string()),
        Command::Quit => return Outcome::Quit,
    }
    Outcome::Continue
}

/// Load, then process commands from `input` until EOF or `quit`
pub async fn run_interactive<R>(viewer: Arc<Viewer>, input: R) -> crate::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut updates = viewer.subscribe();
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let api_base = viewer.api().base_url().to_string();
    let renderer = tokio::spawn(async move {
        loop {
            tokio::select! {
                changed = updates.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let state = updates.borrow_and_update().clone();
                    println!("\n{}", render(&state, &api_base));
                }
                _ = shutdown_rx.changed() => {
                    // Flush a transition that arrived together with the shutdown
                    if updates.has_changed().unwrap_or(false) {
                        let state = updates.borrow_and_update().clone();
                        println!("\n{}", render(&state, &api_base));
                    }
                    tracing::debug!("Renderer stopped: input closed");
                    break;
                }
            }
        }
    });

    viewer.load().await;
    println!("Type `h` for help.");

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{}", message);
                continue;
            }
        };
        tracing::debug!("Command {:?}", command);

        match execute(&viewer, command).await {
            Outcome::Continue => {}
            Outcome::Message(message) => println!("{}", message),
            Outcome::Quit => break,
        }
    }

    let _ = shutdown_tx.send(true);
    if let Err(e) = renderer.await {
        tracing::warn!("Renderer task failed: {}", e);
    }
    Ok(())
}
