use anyhow::{Context, Result, bail};
use chess_rules::Square;

/// One line of driver input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move { from: Square, to: Square },
    Moves(Square),
    Board,
    Reset,
    Quit,
}

fn square(txt: &str) -> Result<Square> {
    txt.parse::<Square>()
        .with_context(|| format!("expected a square like e2, got {txt:?}"))
}

/// Accepts `e2e4`, `move e2 e4`, `moves e2`, `board`, `reset` and `quit`.
pub fn parse_command(line: &str) -> Result<Command> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some(&head) = parts.first() else {
        bail!("empty command");
    };

    match (head, &parts[1..]) {
        ("move", [from, to]) => Ok(Command::Move {
            from: square(from)?,
            to: square(to)?,
        }),
        ("moves", [at]) => Ok(Command::Moves(square(at)?)),
        ("board", []) => Ok(Command::Board),
        ("reset" | "new", []) => Ok(Command::Reset),
        ("quit" | "exit", []) => Ok(Command::Quit),
        (txt, []) if txt.len() == 4 && txt.is_char_boundary(2) => Ok(Command::Move {
            from: square(&txt[0..2])?,
            to: square(&txt[2..4])?,
        }),
        _ => bail!("unrecognised command: {line:?}"),
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod command_tests;
