use serde::Serialize;

use crate::square_set::SquareSet;
use crate::types::*;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The 8x8 grid. Each occupied cell holds a piece whose `position` is that cell.
///
/// Cloning yields a fully independent copy; simulation code relies on that.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; 64],
    next_id: u32,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            cells: [None; 64],
            next_id: 0,
        }
    }

    /// Standard initial position, White on ranks 1-2.
    pub fn standard() -> Self {
        let mut b = Board::empty();
        for team in [Team::White, Team::Black] {
            for (f, &kind) in BACK_RANK.iter().enumerate() {
                b.place(kind, team, Square::new(f as u8, team.home_rank()));
            }
            for f in 0..8 {
                b.place(PieceKind::Pawn, team, Square::new(f, team.pawn_rank()));
            }
        }
        b
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index() as usize]
    }

    /// Put a fresh piece on an empty square. Panics if the square is taken.
    pub fn place(&mut self, kind: PieceKind, team: Team, sq: Square) -> Piece {
        assert!(
            self.piece_at(sq).is_none(),
            "cannot place {team} {kind:?} on occupied square {sq}"
        );
        let piece = Piece {
            id: PieceId(self.next_id),
            kind,
            team,
            position: sq,
        };
        self.next_id += 1;
        self.cells[sq.index() as usize] = Some(piece);
        piece
    }

    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.index() as usize].take()
    }

    /// Move the piece on `from` to `to`, returning whatever stood on `to`.
    ///
    /// Panics if `from` is empty.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let mut piece = self
            .remove(from)
            .unwrap_or_else(|| panic!("no piece to relocate on {from}"));
        let captured = self.remove(to);
        piece.position = to;
        self.cells[to.index() as usize] = Some(piece);
        captured
    }

    pub fn king_square(&self, team: Team) -> Option<Square> {
        self.pieces_of(team)
            .find(|pc| pc.kind == PieceKind::King)
            .map(|pc| pc.position)
    }

    /// All pieces in ascending square order.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.cells.iter().flatten().copied()
    }

    pub fn pieces_of(&self, team: Team) -> impl Iterator<Item = Piece> + '_ {
        self.pieces().filter(move |pc| pc.team == team)
    }

    pub fn occupied(&self) -> SquareSet {
        self.pieces().map(|pc| pc.position).collect()
    }
}

/// Append-only record of every accepted move, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MoveLog {
    moves: Vec<Move>,
}

impl MoveLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    pub fn last(&self) -> Option<Move> {
        self.moves.last().copied()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }

    /// True if any logged move started on `sq`.
    pub fn has_departed_from(&self, sq: Square) -> bool {
        self.moves.iter().any(|mv| mv.from == sq)
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
