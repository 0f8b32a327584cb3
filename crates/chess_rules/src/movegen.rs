//! Pseudo-legal move generation: piece geometry and occupancy only.
//!
//! Nothing here knows about check; see `check` for that.

use crate::{board::Board, square_set::SquareSet, types::*};

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Destination squares for `piece` by its movement rules alone.
pub fn pseudo_legal_moves(piece: &Piece, board: &Board) -> SquareSet {
    let mut out = SquareSet::EMPTY;
    match piece.kind {
        PieceKind::Pawn => gen_pawn(board, piece, &mut out),
        PieceKind::Knight => gen_steps(board, piece, &KNIGHT_DELTAS, &mut out),
        PieceKind::Bishop => gen_slider(board, piece, &DIAGONALS, &mut out),
        PieceKind::Rook => gen_slider(board, piece, &ORTHOGONALS, &mut out),
        PieceKind::Queen => {
            gen_slider(board, piece, &DIAGONALS, &mut out);
            gen_slider(board, piece, &ORTHOGONALS, &mut out);
        }
        PieceKind::King => gen_steps(board, piece, &KING_DELTAS, &mut out),
    }
    out
}

/// Union of pseudo-legal destinations over every piece of `team`.
pub fn attacked_squares(team: Team, board: &Board) -> SquareSet {
    let mut out = SquareSet::EMPTY;
    for pc in board.pieces_of(team) {
        out |= pseudo_legal_moves(&pc, board);
    }
    out
}

fn gen_pawn(board: &Board, pawn: &Piece, out: &mut SquareSet) {
    let from = pawn.position;
    let dir = pawn.team.forward();

    // forward 1, then forward 2 from the start rank
    if let Some(one) = from.offset(0, dir)
        && board.piece_at(one).is_none()
    {
        out.insert(one);
        if from.rank() == pawn.team.pawn_rank()
            && let Some(two) = from.offset(0, 2 * dir)
            && board.piece_at(two).is_none()
        {
            out.insert(two);
        }
    }

    // diagonal captures
    for df in [-1, 1] {
        if let Some(to) = from.offset(df, dir)
            && let Some(target) = board.piece_at(to)
            && target.team != pawn.team
        {
            out.insert(to);
        }
    }
}

fn gen_steps(board: &Board, piece: &Piece, deltas: &[(i8, i8)], out: &mut SquareSet) {
    for &(df, dr) in deltas {
        if let Some(to) = piece.position.offset(df, dr) {
            match board.piece_at(to) {
                Some(pc) if pc.team == piece.team => {}
                _ => out.insert(to),
            }
        }
    }
}

fn gen_slider(board: &Board, piece: &Piece, dirs: &[(i8, i8)], out: &mut SquareSet) {
    for &(df, dr) in dirs {
        let mut cur = piece.position;
        while let Some(to) = cur.offset(df, dr) {
            match board.piece_at(to) {
                None => out.insert(to),
                Some(pc) if pc.team != piece.team => {
                    out.insert(to);
                    break;
                }
                _ => break,
            }
            cur = to;
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
