//! Turn orchestration.
//!
//! `GameController` is the only writer of `GameState`. One call to
//! `try_move` runs a whole turn: validate, apply, special-move side effects,
//! flip the active team, then look for checkmate.

use serde::Serialize;
use tracing::{debug, info};

use crate::{
    board::{Board, MoveLog},
    check::legal_moves_for,
    checkmate::is_checkmate,
    config::RulesConfig,
    error::MoveError,
    events::{EventSink, GameEvent},
    special::{castling_rook_move, classify},
    square_set::SquareSet,
    types::*,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Checkmate { winner: Team },
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. })
    }
}

/// Pieces taken so far, keyed by the team that took them, in capture order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CapturedSet {
    white: Vec<Piece>,
    black: Vec<Piece>,
}

impl CapturedSet {
    pub fn record(&mut self, by: Team, piece: Piece) {
        match by {
            Team::White => self.white.push(piece),
            Team::Black => self.black.push(piece),
        }
    }

    pub fn taken_by(&self, team: Team) -> &[Piece] {
        match team {
            Team::White => &self.white,
            Team::Black => &self.black,
        }
    }

    pub fn clear(&mut self) {
        self.white.clear();
        self.black.clear();
    }
}

#[derive(Clone, Debug)]
pub struct GameState {
    pub board: Board,
    pub log: MoveLog,
    pub active_team: Team,
    pub status: GameStatus,
    pub captured: CapturedSet,
}

impl GameState {
    pub fn new() -> Self {
        Self::from_board(Board::standard(), Team::White)
    }

    /// Start from an arbitrary arrangement with an empty history.
    pub fn from_board(board: Board, active_team: Team) -> Self {
        GameState {
            board,
            log: MoveLog::new(),
            active_team,
            status: GameStatus::InProgress,
            captured: CapturedSet::default(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything a renderer needs to redraw the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub pieces: Vec<Piece>,
    pub active_team: Team,
    pub status: GameStatus,
    pub captured: CapturedSet,
    pub moves_played: usize,
}

/// What an accepted move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub mv: Move,
    pub captured: Option<Piece>,
    pub special: SpecialMove,
    pub status: GameStatus,
}

pub struct GameController<S: EventSink> {
    state: GameState,
    config: RulesConfig,
    sink: S,
}

impl<S: EventSink> GameController<S> {
    pub fn new(sink: S) -> Self {
        Self::with_config(sink, RulesConfig::default())
    }

    pub fn with_config(sink: S, config: RulesConfig) -> Self {
        Self::from_state(GameState::new(), sink, config)
    }

    pub fn from_state(state: GameState, sink: S, config: RulesConfig) -> Self {
        GameController {
            state,
            config,
            sink,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }
    pub fn board(&self) -> &Board {
        &self.state.board
    }
    pub fn log(&self) -> &MoveLog {
        &self.state.log
    }
    pub fn active_team(&self) -> Team {
        self.state.active_team
    }
    pub fn status(&self) -> GameStatus {
        self.state.status
    }
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }
    pub fn sink(&self) -> &S {
        &self.sink
    }
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Legal destinations for the piece on `from`; empty when it may not move.
    pub fn legal_moves(&self, from: Square) -> SquareSet {
        match self.movable_piece(from) {
            Ok(piece) => {
                legal_moves_for(&piece, &self.state.board, &self.state.log, &self.config).targets
            }
            Err(_) => SquareSet::EMPTY,
        }
    }

    /// Number of legal moves available to the active team.
    pub fn legal_move_count(&self) -> u32 {
        if self.state.status.is_over() {
            return 0;
        }
        let st = &self.state;
        st.board
            .pieces_of(st.active_team)
            .map(|pc| legal_moves_for(&pc, &st.board, &st.log, &self.config).targets.len())
            .sum()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            pieces: self.state.board.pieces().collect(),
            active_team: self.state.active_team,
            status: self.state.status,
            captured: self.state.captured.clone(),
            moves_played: self.state.log.len(),
        }
    }

    /// Run one full turn. On error nothing changes and no events are sent.
    pub fn try_move(&mut self, from: Square, to: Square) -> Result<MoveOutcome, MoveError> {
        let piece = self.movable_piece(from).inspect_err(|err| {
            debug!(%from, %to, %err, "move rejected");
        })?;

        let legal = legal_moves_for(&piece, &self.state.board, &self.state.log, &self.config);
        if !legal.targets.contains(to) {
            let err = MoveError::IllegalDestination { from, to };
            debug!(%from, %to, %err, "move rejected");
            return Err(err);
        }
        let special = classify(&piece, to, legal.special, &self.state.board);
        let mover = piece.team;
        let mv = Move::new(from, to);

        // Relocate and log
        let mut captured = self.state.board.relocate(from, to);
        let mut king_taken = false;
        if let Some(victim) = captured {
            king_taken = victim.kind == PieceKind::King;
            self.record_capture(mover, victim);
        }
        self.state.log.push(mv);
        self.sink.emit(GameEvent::PieceMoved {
            piece: Piece {
                position: to,
                ..piece
            },
            from,
            to,
        });

        self.apply_special(special, &piece, to, &mut captured);

        // Advance the turn
        let next = mover.other();
        self.state.active_team = next;
        debug!(%mv, ?special, next = %next, "move applied");
        self.sink.emit(GameEvent::TurnCompleted { next });

        if king_taken || is_checkmate(next, &self.state.board, &self.state.log, &self.config) {
            self.state.status = GameStatus::Checkmate { winner: mover };
            info!(winner = %mover, moves = self.state.log.len(), "checkmate");
            self.sink.emit(GameEvent::CheckmateDeclared { winner: mover });
        }

        Ok(MoveOutcome {
            mv,
            captured,
            special,
            status: self.state.status,
        })
    }

    /// Back to the standard opening position with empty history.
    pub fn reset(&mut self) {
        let st = &mut self.state;
        st.board = Board::standard();
        st.log.clear();
        st.captured.clear();
        st.active_team = Team::White;
        st.status = GameStatus::InProgress;
        info!("game reset");
        self.sink.emit(GameEvent::GameReset);
    }

    fn movable_piece(&self, from: Square) -> Result<Piece, MoveError> {
        if let GameStatus::Checkmate { winner } = self.state.status {
            return Err(MoveError::GameOver { winner });
        }
        let piece = self
            .state
            .board
            .piece_at(from)
            .ok_or(MoveError::EmptySquare(from))?;
        if piece.team != self.state.active_team {
            return Err(MoveError::NotYourTurn {
                square: from,
                team: piece.team,
            });
        }
        Ok(piece)
    }

    fn record_capture(&mut self, by: Team, victim: Piece) {
        self.state.captured.record(by, victim);
        self.sink.emit(GameEvent::PieceCaptured { piece: victim, by });
    }

    fn apply_special(
        &mut self,
        special: SpecialMove,
        piece: &Piece,
        to: Square,
        captured: &mut Option<Piece>,
    ) {
        let squares = match special {
            SpecialMove::None => return,
            SpecialMove::EnPassant => {
                let passed = Square::new(to.file(), piece.position.rank());
                let Some(victim) = self.state.board.remove(passed) else {
                    return;
                };
                *captured = Some(victim);
                self.record_capture(piece.team, victim);
                vec![passed]
            }
            SpecialMove::Promotion => {
                self.state.board.remove(to);
                self.state.board.place(PieceKind::Queen, piece.team, to);
                vec![to]
            }
            SpecialMove::Castling => {
                let Some((rook_from, rook_to)) = castling_rook_move(piece.team, to) else {
                    return;
                };
                self.state.board.relocate(rook_from, rook_to);
                vec![rook_from, rook_to]
            }
        };
        self.sink.emit(GameEvent::SpecialMoveApplied {
            kind: special,
            squares,
        });
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
