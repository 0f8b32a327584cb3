//! Castling, en passant and promotion.
//!
//! `resolve` runs after pseudo-legal generation for one piece: it may add
//! destinations the geometric rules cannot see and returns the special
//! category of that piece's move set. `classify` then decides whether a
//! chosen destination actually triggers the side effect.

use crate::{
    board::{Board, MoveLog},
    check::is_in_check,
    config::{CastlingPolicy, RulesConfig},
    square_set::SquareSet,
    types::*,
};

const KING_HOME_FILE: u8 = 4;

/// One castling side: rook corner file, squares that must be empty,
/// the square the king crosses, and where king and rook land.
struct CastleSide {
    rook_file: u8,
    between: &'static [u8],
    king_pass: u8,
    king_to: u8,
    rook_to: u8,
}

const QUEENSIDE: CastleSide = CastleSide {
    rook_file: 0,
    between: &[1, 2, 3],
    king_pass: 3,
    king_to: 2,
    rook_to: 3,
};

const KINGSIDE: CastleSide = CastleSide {
    rook_file: 7,
    between: &[5, 6],
    king_pass: 5,
    king_to: 6,
    rook_to: 5,
};

/// Augment `candidates` with special destinations and report the category.
pub fn resolve(
    piece: &Piece,
    board: &Board,
    log: &MoveLog,
    candidates: &mut SquareSet,
    config: &RulesConfig,
) -> SpecialMove {
    match piece.kind {
        PieceKind::Pawn => resolve_pawn(piece, board, log, candidates),
        PieceKind::King => resolve_castling(piece, board, log, candidates, config),
        _ => SpecialMove::None,
    }
}

fn resolve_pawn(
    pawn: &Piece,
    board: &Board,
    log: &MoveLog,
    candidates: &mut SquareSet,
) -> SpecialMove {
    // Promotion takes precedence; a pawn one step from the edge never has en passant.
    if pawn.position.rank() == pawn.team.pre_promotion_rank() {
        return SpecialMove::Promotion;
    }

    if let Some(target) = en_passant_target(pawn, board, log) {
        candidates.insert(target);
        return SpecialMove::EnPassant;
    }
    SpecialMove::None
}

/// The square a pawn lands on when taking en passant, if the last move allows it.
pub fn en_passant_target(pawn: &Piece, board: &Board, log: &MoveLog) -> Option<Square> {
    let last = log.last()?;
    let passed = board.piece_at(last.to)?;
    if passed.kind != PieceKind::Pawn || passed.team == pawn.team {
        return None;
    }
    if last.from.rank().abs_diff(last.to.rank()) != 2 {
        return None;
    }
    if last.to.rank() != pawn.position.rank() || last.to.file().abs_diff(pawn.position.file()) != 1
    {
        return None;
    }
    Square::try_new(
        last.to.file() as i8,
        pawn.position.rank() as i8 + pawn.team.forward(),
    )
}

fn resolve_castling(
    king: &Piece,
    board: &Board,
    log: &MoveLog,
    candidates: &mut SquareSet,
    config: &RulesConfig,
) -> SpecialMove {
    let rank = king.team.home_rank();
    let home = Square::new(KING_HOME_FILE, rank);
    if king.position != home || log.has_departed_from(home) {
        return SpecialMove::None;
    }

    let mut kind = SpecialMove::None;
    for side in [&QUEENSIDE, &KINGSIDE] {
        let corner = Square::new(side.rook_file, rank);
        let rook_ready = matches!(
            board.piece_at(corner),
            Some(pc) if pc.kind == PieceKind::Rook && pc.team == king.team
        );
        if !rook_ready || log.has_departed_from(corner) {
            continue;
        }
        if side
            .between
            .iter()
            .any(|&f| board.piece_at(Square::new(f, rank)).is_some())
        {
            continue;
        }
        if config.castling == CastlingPolicy::Strict && !path_is_safe(king, side, board) {
            continue;
        }
        candidates.insert(Square::new(side.king_to, rank));
        kind = SpecialMove::Castling;
    }
    kind
}

/// The king must not stand on, cross, or land on a checked square.
fn path_is_safe(king: &Piece, side: &CastleSide, board: &Board) -> bool {
    let rank = king.team.home_rank();
    if is_in_check(king.team, board) {
        return false;
    }
    [side.king_pass, side.king_to].iter().all(|&f| {
        let mut sim = board.clone();
        sim.relocate(king.position, Square::new(f, rank));
        !is_in_check(king.team, &sim)
    })
}

/// Rook relocation `(from, to)` for a castling king landing on `king_to`.
pub fn castling_rook_move(team: Team, king_to: Square) -> Option<(Square, Square)> {
    let rank = team.home_rank();
    if king_to.rank() != rank {
        return None;
    }
    [&QUEENSIDE, &KINGSIDE]
        .into_iter()
        .find(|side| side.king_to == king_to.file())
        .map(|side| {
            (
                Square::new(side.rook_file, rank),
                Square::new(side.rook_to, rank),
            )
        })
}

/// Whether moving `piece` to `to` carries out `category`'s side effect.
///
/// A pawn tagged en passant that simply pushes, or a king tagged castling
/// that takes a single step, is an ordinary move.
pub fn classify(piece: &Piece, to: Square, category: SpecialMove, board: &Board) -> SpecialMove {
    let from = piece.position;
    let applies = match category {
        SpecialMove::None => false,
        SpecialMove::Promotion => piece.kind == PieceKind::Pawn,
        SpecialMove::EnPassant => {
            piece.kind == PieceKind::Pawn && to.file() != from.file() && board.piece_at(to).is_none()
        }
        SpecialMove::Castling => {
            piece.kind == PieceKind::King && to.file().abs_diff(from.file()) == 2
        }
    };
    if applies { category } else { SpecialMove::None }
}

#[cfg(test)]
#[path = "special_tests.rs"]
mod special_tests;
