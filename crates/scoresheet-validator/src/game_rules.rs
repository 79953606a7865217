//! Cross-move checks run after replay.

use crate::model::{ChessMoveValidationResult, MoveStatus, ValidatedMove};

pub const CONSECUTIVE_CHECKS_MESSAGE: &str =
    "Consecutive checks detected. Please verify these moves.";

/// Flag adjacent moves of one side that both give check. Only valid moves
/// are downgraded; warnings and errors just get the note appended.
/// Returns how many moves were touched.
pub fn flag_consecutive_checks(moves: &mut [ValidatedMove]) -> usize {
    let mut flagged = vec![false; moves.len()];
    for i in 1..moves.len() {
        if moves[i - 1].gives_check() && moves[i].gives_check() {
            flagged[i - 1] = true;
            flagged[i] = true;
        }
    }

    for (mv, _) in moves.iter_mut().zip(&flagged).filter(|(_, f)| **f) {
        mv.append_message(CONSECUTIVE_CHECKS_MESSAGE);
        if mv.is_valid() {
            mv.set_status(MoveStatus::Warning);
        }
    }

    flagged.iter().filter(|f| **f).count()
}

/// Run every game-level rule over both columns.
pub fn check_game_rules(
    white: ChessMoveValidationResult,
    black: ChessMoveValidationResult,
) -> (ChessMoveValidationResult, ChessMoveValidationResult) {
    let mut white = white.into_moves();
    let mut black = black.into_moves();
    flag_consecutive_checks(&mut white);
    flag_consecutive_checks(&mut black);
    (white.into(), black.into())
}
