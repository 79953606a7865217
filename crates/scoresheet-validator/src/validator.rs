//! Entry points tying the stages together.

use chess_core::{RulesEngine, ScoresheetGame, StandardRules};
use serde::Serialize;

use crate::config::ValidatorConfig;
use crate::game_rules;
use crate::model::{ChessMoveValidationResult, MoveStatus, Side};
use crate::ranker::CandidateRanker;
use crate::replay::GameReplayer;
use crate::syntax;

/// A substitution made during replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Correction {
    pub side: Side,
    pub move_number: usize,
    pub original: String,
    pub replacement: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ValidationSummary {
    pub valid: usize,
    pub warnings: usize,
    pub errors: usize,
    pub corrections: usize,
}

/// Both columns of a validated scoresheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameValidation {
    pub white: ChessMoveValidationResult,
    pub black: ChessMoveValidationResult,
}

impl GameValidation {
    pub fn is_valid(&self) -> bool {
        self.white.is_valid() && self.black.is_valid()
    }

    pub fn corrections(&self) -> Vec<Correction> {
        let mut corrections: Vec<Correction> = [(Side::White, &self.white), (Side::Black, &self.black)]
            .into_iter()
            .flat_map(|(side, result)| {
                result.moves().iter().filter_map(move |mv| {
                    mv.corrected_from.as_ref().map(|original| Correction {
                        side,
                        move_number: mv.move_number,
                        original: original.clone(),
                        replacement: mv.normalized_notation.clone(),
                    })
                })
            })
            .collect();
        // play order: white 1, black 1, white 2, ...
        corrections.sort_by_key(|c| (c.move_number, c.side == Side::Black));
        corrections
    }

    pub fn summary(&self) -> ValidationSummary {
        let count = |status| self.white.count(status) + self.black.count(status);
        ValidationSummary {
            valid: count(MoveStatus::Valid),
            warnings: count(MoveStatus::Warning),
            errors: count(MoveStatus::Error),
            corrections: self.corrections().len(),
        }
    }
}

pub struct Validator<E: RulesEngine = StandardRules> {
    engine: E,
    config: ValidatorConfig,
}

impl Validator<StandardRules> {
    /// Standard chess from the initial position with default settings.
    pub fn standard() -> Self {
        Self::new(StandardRules::default(), ValidatorConfig::default())
    }

    /// Standard chess with settings from `SCORESHEET_*` variables.
    pub fn from_env() -> Self {
        Self::new(StandardRules::default(), ValidatorConfig::from_env())
    }
}

impl<E: RulesEngine> Validator<E> {
    pub fn new(engine: E, config: ValidatorConfig) -> Self {
        Self { engine, config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Per-token syntax validation of one column.
    pub fn validate_moves<S: AsRef<str>>(&self, tokens: &[S]) -> ChessMoveValidationResult {
        syntax::validate_moves(tokens)
    }

    /// Replay both syntax-validated columns against the starting position.
    pub fn validate_moves_in_game_context(
        &self,
        white: ChessMoveValidationResult,
        black: ChessMoveValidationResult,
    ) -> (ChessMoveValidationResult, ChessMoveValidationResult) {
        let ranker = CandidateRanker::new(self.config.destination_bonus);
        GameReplayer::new(&self.engine, ranker, self.config.autocorrect).replay(white, black)
    }

    pub fn check_game_rules(
        &self,
        white: ChessMoveValidationResult,
        black: ChessMoveValidationResult,
    ) -> (ChessMoveValidationResult, ChessMoveValidationResult) {
        if self.config.consecutive_checks {
            game_rules::check_game_rules(white, black)
        } else {
            (white, black)
        }
    }

    /// Syntax validation, context replay and game-level rules in one pass.
    pub fn validate_game(&self, game: &ScoresheetGame) -> GameValidation {
        let white = self.validate_moves(&game.white);
        let black = self.validate_moves(&game.black);
        let (white, black) = self.validate_moves_in_game_context(white, black);
        let (white, black) = self.check_game_rules(white, black);
        GameValidation { white, black }
    }
}
