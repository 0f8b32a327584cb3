//! Self-check filtering by simulation.
//!
//! Each candidate is played on a scratch clone of the board and kept only if
//! no opposing piece can then reach the mover's king. At 32 pieces at most this
//! brute force is cheap enough.

use tracing::trace;

use crate::{
    board::{Board, MoveLog},
    config::RulesConfig,
    movegen::{attacked_squares, pseudo_legal_moves},
    special::{self, castling_rook_move},
    square_set::SquareSet,
    types::*,
};

/// Legal destinations for one piece plus the special category found for it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LegalMoves {
    pub targets: SquareSet,
    pub special: SpecialMove,
}

/// True if `team`'s king stands on a square some opposing piece can move to.
///
/// A team without a king is never in check.
pub fn is_in_check(team: Team, board: &Board) -> bool {
    match board.king_square(team) {
        Some(ksq) => attacked_squares(team.other(), board).contains(ksq),
        None => false,
    }
}

/// Drop every candidate that would leave `piece`'s own king attacked.
pub fn filter_self_check(piece: &Piece, candidates: SquareSet, board: &Board) -> SquareSet {
    let own_king = board.king_square(piece.team);
    let mut kept = candidates;
    kept.retain(|to| {
        let king_sq = if piece.kind == PieceKind::King {
            Some(to)
        } else {
            own_king
        };
        let Some(king_sq) = king_sq else {
            return true;
        };
        let sim = simulate(board, piece, to);
        let exposed = attacked_squares(piece.team.other(), &sim).contains(king_sq);
        if exposed {
            trace!(from = %piece.position, %to, "dropping move that exposes the king");
        }
        !exposed
    });
    kept
}

/// Full legal move set for `piece`: geometry, special moves, then self-check filter.
pub fn legal_moves_for(
    piece: &Piece,
    board: &Board,
    log: &MoveLog,
    config: &RulesConfig,
) -> LegalMoves {
    let mut candidates = pseudo_legal_moves(piece, board);
    let special = special::resolve(piece, board, log, &mut candidates, config);
    LegalMoves {
        targets: filter_self_check(piece, candidates, board),
        special,
    }
}

/// Scratch copy of `board` with `piece` moved to `to`.
///
/// Removes an en-passant victim and drags the rook along on castling so the
/// resulting position matches what the real move produces.
fn simulate(board: &Board, piece: &Piece, to: Square) -> Board {
    let mut sim = board.clone();
    let from = piece.position;
    match piece.kind {
        PieceKind::Pawn if to.file() != from.file() && sim.piece_at(to).is_none() => {
            sim.remove(Square::new(to.file(), from.rank()));
        }
        PieceKind::King if to.file().abs_diff(from.file()) == 2 => {
            if let Some((rook_from, rook_to)) = castling_rook_move(piece.team, to)
                && sim.piece_at(rook_from).is_some()
            {
                sim.relocate(rook_from, rook_to);
            }
        }
        _ => {}
    }
    sim.relocate(from, to);
    sim
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod check_tests;
