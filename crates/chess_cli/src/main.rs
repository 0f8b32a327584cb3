//! Headless driver for the rules engine.
//!
//! Reads one command per line from stdin and answers on stdout with one JSON
//! object per line: every engine event as it happens, plus replies to queries.
//! Logs go to stderr; set `RUST_LOG=debug` to see rejected moves.
//!
//! ```text
//! chess_cli [--config rules.toml]
//! ```

mod command;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use chess_rules::{EventSink, GameController, GameEvent, RulesConfig};
use serde_json::json;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use command::{Command, parse_command};

/// Writes each event to stdout as a JSON line.
struct JsonLineSink<W: Write> {
    out: W,
}

impl<W: Write> EventSink for JsonLineSink<W> {
    fn emit(&mut self, event: GameEvent) {
        match serde_json::to_string(&event) {
            Ok(line) => {
                if let Err(e) = writeln!(self.out, "{line}") {
                    warn!("failed to write event: {e}");
                }
            }
            Err(e) => warn!("failed to serialize event: {e}"),
        }
    }
}

fn load_config(args: &[String]) -> Result<RulesConfig> {
    let mut i = 0;
    while i < args.len() {
        if args[i] == "--config" || args[i] == "-c" {
            let path = args
                .get(i + 1)
                .context("--config needs a path argument")?;
            return RulesConfig::load(path)
                .with_context(|| format!("loading rules config from {path}"));
        }
        i += 1;
    }
    Ok(RulesConfig::default())
}

fn reply<W: Write>(out: &mut W, value: serde_json::Value) -> Result<()> {
    writeln!(out, "{value}")?;
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = load_config(&args)?;
    tracing::info!(castling = ?config.castling, "rules loaded");

    let mut game = GameController::with_config(JsonLineSink { out: io::stdout() }, config);
    let stdin = io::stdin();

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let cmd = match parse_command(&line) {
            Ok(cmd) => cmd,
            Err(e) => {
                reply(&mut game.sink_mut().out, json!({ "error": format!("{e:#}") }))?;
                continue;
            }
        };

        match cmd {
            Command::Move { from, to } => {
                if let Err(e) = game.try_move(from, to) {
                    reply(
                        &mut game.sink_mut().out,
                        json!({ "error": e.to_string(), "from": from, "to": to }),
                    )?;
                }
            }
            Command::Moves(at) => {
                let targets = game.legal_moves(at);
                reply(
                    &mut game.sink_mut().out,
                    json!({ "from": at, "moves": targets }),
                )?;
            }
            Command::Board => {
                let snapshot = serde_json::to_value(game.snapshot())?;
                reply(&mut game.sink_mut().out, snapshot)?;
            }
            Command::Reset => game.reset(),
            Command::Quit => break,
        }
        game.sink_mut().out.flush()?;
    }
    Ok(())
}
