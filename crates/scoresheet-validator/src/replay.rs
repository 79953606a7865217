//! Sequential game replay.
//!
//! Walks the two columns in play order (white 1, black 1, white 2, ...)
//! against a single position. A move that fails to apply is checked for a
//! terminal position first; only moves that already failed syntax validation
//! are offered a replacement. The position advances on every successful
//! application and stays put on every rejection, including after a terminal
//! position has been reached, so later moves keep reporting it.
//!
//! A fault in the rules engine itself never escapes: every move still marked
//! valid is downgraded to a warning and the results are returned as they are.

use chess_core::{RulesEngine, RulesError};
use tracing::{debug, info, warn};

use crate::error::MoveIssue;
use crate::model::{ChessMoveValidationResult, MoveStatus, Side, ValidatedMove};
use crate::ranker::CandidateRanker;
use crate::terminal::{detect_terminal, TerminalState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HalfMoveOutcome {
    Played,
    Corrected { replacement: String },
    Rejected,
    Terminal(TerminalState),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplayStats {
    pub played: usize,
    pub corrected: usize,
    pub rejected: usize,
    pub terminal: usize,
}

impl ReplayStats {
    fn record(&mut self, outcome: &HalfMoveOutcome) {
        match outcome {
            HalfMoveOutcome::Played => self.played += 1,
            HalfMoveOutcome::Corrected { .. } => self.corrected += 1,
            HalfMoveOutcome::Rejected => self.rejected += 1,
            HalfMoveOutcome::Terminal(_) => self.terminal += 1,
        }
    }
}

pub struct GameReplayer<'a, E: RulesEngine> {
    engine: &'a E,
    ranker: CandidateRanker,
    autocorrect: bool,
}

impl<'a, E: RulesEngine> GameReplayer<'a, E> {
    pub fn new(engine: &'a E, ranker: CandidateRanker, autocorrect: bool) -> Self {
        Self {
            engine,
            ranker,
            autocorrect,
        }
    }

    /// Replay both columns from the engine's starting position and return
    /// the revised columns.
    pub fn replay(
        &self,
        white: ChessMoveValidationResult,
        black: ChessMoveValidationResult,
    ) -> (ChessMoveValidationResult, ChessMoveValidationResult) {
        let mut white = white.into_moves();
        let mut black = black.into_moves();

        match self.replay_moves(&mut white, &mut black) {
            Ok(stats) => info!(
                played = stats.played,
                corrected = stats.corrected,
                rejected = stats.rejected,
                terminal = stats.terminal,
                "Game context replay finished"
            ),
            Err(e) => {
                warn!(error = %e, "Rules engine failed during replay; downgrading unchecked moves");
                downgrade_valid_moves(&mut white, &e);
                downgrade_valid_moves(&mut black, &e);
            }
        }

        (white.into(), black.into())
    }

    fn replay_moves(
        &self,
        white: &mut [ValidatedMove],
        black: &mut [ValidatedMove],
    ) -> Result<ReplayStats, RulesError> {
        let mut position = self.engine.starting_position();
        let mut stats = ReplayStats::default();
        let plies = white.len().max(black.len());

        for idx in 0..plies {
            for (side, moves) in [(Side::White, &mut *white), (Side::Black, &mut *black)] {
                let Some(mv) = moves.get_mut(idx) else {
                    continue;
                };
                let outcome = self.replay_half_move(&mut position, mv)?;
                debug!(
                    side = %side,
                    move_number = mv.move_number,
                    notation = %mv.normalized_notation,
                    outcome = ?outcome,
                    "Half-move replayed"
                );
                stats.record(&outcome);
            }
        }

        Ok(stats)
    }

    /// Replay one half-move. `Err` only for engine faults.
    pub fn replay_half_move(
        &self,
        position: &mut E::Position,
        mv: &mut ValidatedMove,
    ) -> Result<HalfMoveOutcome, RulesError> {
        let notation = mv.playable_notation().to_string();

        let reason = match self.engine.apply_move(position, &notation) {
            Ok(next) => {
                *position = next;
                return Ok(HalfMoveOutcome::Played);
            }
            Err(RulesError::IllegalMove { reason, .. }) => reason,
            Err(e) => return Err(e),
        };

        if let Some(state) = detect_terminal(self.engine, position)? {
            warn!(
                move_number = mv.move_number,
                notation = %notation,
                state = %state,
                "Move attempted in a terminal position"
            );
            mv.mark(
                MoveStatus::Error,
                MoveIssue::IllegalInContext {
                    notation: notation.clone(),
                    reason,
                },
            );
            mv.mark(
                MoveStatus::Error,
                MoveIssue::TerminalPosition {
                    state: state.to_string(),
                },
            );
            return Ok(HalfMoveOutcome::Terminal(state));
        }

        let was_syntax_error = mv.is_error();
        let correctable = mv.issue.as_ref().is_some_and(MoveIssue::is_correctable);

        if was_syntax_error {
            if correctable && self.autocorrect {
                return self.correct(position, mv, &notation, reason);
            }
            // Empty and wrong-piece tokens keep the reason they already carry
            return Ok(HalfMoveOutcome::Rejected);
        }

        // Well-formed moves that are illegal here are reported as read
        mv.mark(
            MoveStatus::Error,
            MoveIssue::IllegalInContext { notation, reason },
        );
        Ok(HalfMoveOutcome::Rejected)
    }

    fn correct(
        &self,
        position: &mut E::Position,
        mv: &mut ValidatedMove,
        notation: &str,
        reason: String,
    ) -> Result<HalfMoveOutcome, RulesError> {
        let Some(candidate) = self.ranker.best(self.engine, position, notation)? else {
            mv.mark(
                MoveStatus::Error,
                MoveIssue::IllegalInContext {
                    notation: notation.to_string(),
                    reason,
                },
            );
            mv.mark(
                MoveStatus::Error,
                MoveIssue::CorrectionFailed {
                    notation: notation.to_string(),
                    reason: "no legal moves available".to_string(),
                },
            );
            return Ok(HalfMoveOutcome::Rejected);
        };

        match self.engine.apply_move(position, &candidate.notation) {
            Ok(next) => {
                *position = next;
                info!(
                    move_number = mv.move_number,
                    original = %notation,
                    replacement = %candidate.notation,
                    distance = candidate.distance,
                    "Corrected misread move"
                );
                mv.apply_correction(&candidate.notation);
                Ok(HalfMoveOutcome::Corrected {
                    replacement: candidate.notation,
                })
            }
            Err(RulesError::IllegalMove {
                reason: apply_reason,
                ..
            }) => {
                mv.mark(
                    MoveStatus::Error,
                    MoveIssue::IllegalInContext {
                        notation: notation.to_string(),
                        reason,
                    },
                );
                mv.mark(
                    MoveStatus::Error,
                    MoveIssue::CorrectionFailed {
                        notation: notation.to_string(),
                        reason: format!(
                            "replacement '{}' could not be applied: {apply_reason}",
                            candidate.notation
                        ),
                    },
                );
                Ok(HalfMoveOutcome::Rejected)
            }
            Err(e) => Err(e),
        }
    }
}

fn downgrade_valid_moves(moves: &mut [ValidatedMove], error: &RulesError) {
    for mv in moves.iter_mut().filter(|m| m.is_valid()) {
        mv.mark(
            MoveStatus::Warning,
            MoveIssue::EngineFailure {
                reason: error.to_string(),
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::validate_moves;
    use chess_core::StandardRules;

    fn replay_with(
        rules: &StandardRules,
        white: &[&str],
        black: &[&str],
    ) -> (ChessMoveValidationResult, ChessMoveValidationResult) {
        GameReplayer::new(rules, CandidateRanker::default(), true)
            .replay(validate_moves(white), validate_moves(black))
    }

    #[test]
    fn test_legal_opening_stays_valid() {
        let rules = StandardRules::new();
        let (white, black) = replay_with(&rules, &["e4", "Nf3", "Bb5"], &["e5", "Nc6", "a6"]);
        assert!(white.is_valid());
        assert!(black.is_valid());
        assert!(white.moves().iter().chain(black.moves()).all(|m| m.is_valid()));
        assert!(white.moves().iter().all(|m| m.corrected_from.is_none()));
    }

    #[test]
    fn test_check_suffix_is_not_required_by_engine() {
        let rules = StandardRules::new();
        let (white, black) = replay_with(&rules, &["e4", "Bc4", "Qh5", "Qxf7#"], &["e5", "Nc6", "Nf6"]);
        assert!(white.is_valid(), "{:?}", white);
        assert!(black.is_valid());
    }

    #[test]
    fn test_syntax_error_is_corrected() {
        let rules = StandardRules::new();
        let (white, black) = replay_with(&rules, &["e4", "Nf9"], &["e5", "Nc6"]);
        let corrected = &white.moves()[1];
        assert_eq!(corrected.status, MoveStatus::Warning);
        assert_eq!(corrected.normalized_notation, "Nf3");
        assert_eq!(corrected.notation, "Nf9");
        assert!(corrected.message.contains("Invalid move syntax 'Nf9'"));
        assert!(corrected.message.contains("Corrected 'Nf9' to 'Nf3'"));
        assert!(white.is_valid());
        // the replacement was played: black's Nc6 follows normally
        assert!(black.moves()[1].is_valid());
    }

    #[test]
    fn test_valid_syntax_illegal_move_is_not_corrected() {
        let rules = StandardRules::new();
        let (white, black) = replay_with(&rules, &["e4", "Ke3"], &["e5"]);
        let illegal = &white.moves()[1];
        assert_eq!(illegal.status, MoveStatus::Error);
        assert_eq!(illegal.normalized_notation, "Ke3");
        assert!(illegal.corrected_from.is_none());
        assert!(matches!(illegal.issue, Some(MoveIssue::IllegalInContext { .. })));
        assert!(!white.is_valid());
        assert!(black.is_valid());
    }

    #[test]
    fn test_rejected_move_does_not_advance_position() {
        let rules = StandardRules::new();
        let (white, black) = replay_with(&rules, &["e4", "Ke3", "d4"], &["e5", "d6"]);
        assert!(white.moves()[0].is_valid());
        assert!(white.moves()[1].is_error());
        // still white to move, so black's d6 cannot be applied
        assert!(black.moves()[1].is_error());
        // white's d4 is played in that same position
        assert!(white.moves()[2].is_valid());
    }

    #[test]
    fn test_warning_is_never_turned_into_error() {
        let rules = StandardRules::new();
        let mut white = validate_moves(&["e4", "Ke3"]).into_moves();
        white[1].set_status(MoveStatus::Warning);
        let (white, _) = GameReplayer::new(&rules, CandidateRanker::default(), true)
            .replay(white.into(), validate_moves(&["e5"]));

        let mv = &white.moves()[1];
        assert_eq!(mv.status, MoveStatus::Warning);
        // the illegality is still explained
        assert!(matches!(mv.issue, Some(MoveIssue::IllegalInContext { .. })));
        assert!(mv.message.contains("Illegal move 'Ke3'"));
    }

    #[test]
    fn test_empty_and_wrong_piece_are_never_corrected() {
        let rules = StandardRules::new();
        let (white, _) = replay_with(&rules, &["  ", "Te4"], &["e5", "e6"]);
        assert_eq!(white.moves()[0].issue, Some(MoveIssue::EmptyMove));
        assert_eq!(white.moves()[0].message, "Empty or whitespace move");
        assert_eq!(white.moves()[1].issue, Some(MoveIssue::InvalidPiece { letter: 'T' }));
        assert!(white.moves().iter().all(|m| m.is_error()));
    }

    #[test]
    fn test_autocorrect_disabled() {
        let rules = StandardRules::new();
        let (white, _) = GameReplayer::new(&rules, CandidateRanker::default(), false)
            .replay(validate_moves(&["e4", "Nf9"]), validate_moves(&["e5"]));
        assert!(white.moves()[1].is_error());
        assert_eq!(white.moves()[1].normalized_notation, "Nf9");
    }

    #[test]
    fn test_terminal_position_is_reported_without_correction() {
        let rules = StandardRules::new();
        // Fool's mate, then white keeps writing moves
        let (white, black) = replay_with(&rules, &["f3", "g4", "Nc9", "a3"], &["e5", "Qh4#"]);
        assert!(black.is_valid());

        for mv in &white.moves()[2..] {
            assert_eq!(mv.status, MoveStatus::Error);
            assert!(mv.message.contains("checkmate"), "{}", mv.message);
            assert!(mv.corrected_from.is_none());
            assert!(matches!(mv.issue, Some(MoveIssue::TerminalPosition { .. })));
        }
    }
}
