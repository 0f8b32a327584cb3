use crate::{
    board::{Board, MoveLog},
    check::{is_in_check, legal_moves_for},
    config::RulesConfig,
    types::Team,
};

/// True if `defender` is in check and no piece of theirs has a legal move.
///
/// A defender that is not in check is never mated here, even with no moves.
pub fn is_checkmate(defender: Team, board: &Board, log: &MoveLog, config: &RulesConfig) -> bool {
    if !is_in_check(defender, board) {
        return false;
    }
    board
        .pieces_of(defender)
        .all(|pc| legal_moves_for(&pc, board, log, config).targets.is_empty())
}

#[cfg(test)]
#[path = "checkmate_tests.rs"]
mod checkmate_tests;
