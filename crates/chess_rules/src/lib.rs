//! Deterministic chess rules engine.
//!
//! Owns the board, generates legal moves per piece, resolves castling,
//! en passant and promotion, refuses moves that leave the mover in check and
//! detects checkmate. Presentation layers talk to it through
//! [`GameController`]: move requests in, [`GameEvent`]s and [`Snapshot`]s out.

pub mod board;
pub mod check;
pub mod checkmate;
pub mod config;
pub mod error;
pub mod events;
pub mod game;
pub mod movegen;
pub mod special;
pub mod square_set;
pub mod types;

pub use board::*;
pub use check::{LegalMoves, filter_self_check, is_in_check, legal_moves_for};
pub use checkmate::is_checkmate;
pub use config::*;
pub use error::*;
pub use events::*;
pub use game::*;
pub use movegen::*;
pub use square_set::SquareSet;
pub use types::*;
