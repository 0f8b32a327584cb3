//! Outbound notifications for whatever is presenting the game.

use serde::Serialize;

use crate::types::{Piece, SpecialMove, Square, Team};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    PieceMoved {
        piece: Piece,
        from: Square,
        to: Square,
    },
    /// `by` is the capturing team.
    PieceCaptured { piece: Piece, by: Team },
    /// Squares touched by the side effect: the emptied en-passant square,
    /// the promotion square, or the rook's origin and destination.
    SpecialMoveApplied {
        kind: SpecialMove,
        squares: Vec<Square>,
    },
    CheckmateDeclared { winner: Team },
    TurnCompleted { next: Team },
    GameReset,
}

/// Receiver for game events, handed to the controller at construction.
pub trait EventSink {
    fn emit(&mut self, event: GameEvent);
}

/// Sink that keeps every event in order.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    pub events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the collected events, leaving the log empty.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}

/// Sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: GameEvent) {}
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: GameEvent) {
        (**self).emit(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for Box<S> {
    fn emit(&mut self, event: GameEvent) {
        (**self).emit(event);
    }
}
