use thiserror::Error;

use crate::types::{Square, Team};

/// Why a move request was refused. The game state is untouched in every case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("no piece on {0}")]
    EmptySquare(Square),
    #[error("piece on {square} belongs to {team}, who is not on move")]
    NotYourTurn { square: Square, team: Team },
    /// Also covers destinations dropped because they would expose the king.
    #[error("{from} -> {to} is not a legal move")]
    IllegalDestination { from: Square, to: Square },
    #[error("game is over, {winner} won by checkmate")]
    GameOver { winner: Team },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read rules config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid rules config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid square name: {0:?}")]
pub struct ParseSquareError(pub String);
