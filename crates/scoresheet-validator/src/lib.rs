//! Notation validation and legal-move correction for digitized scoresheets.
//!
//! OCR yields one column of raw move tokens per side. Each token is
//! normalized and checked for syntax, the two columns are replayed together
//! against a rules engine, and moves that failed syntax validation are
//! replaced by the closest legal move where one can be found. A final pass
//! applies game-level plausibility rules.

pub mod config;
pub mod error;
pub mod game_rules;
pub mod model;
pub mod normalizer;
pub mod ranker;
pub mod replay;
pub mod syntax;
pub mod terminal;
pub mod validator;

pub use config::ValidatorConfig;
pub use error::MoveIssue;
pub use model::{ChessMoveValidationResult, MoveStatus, Side, ValidatedMove};
pub use validator::{Correction, GameValidation, ValidationSummary, Validator};

use chess_core::StandardRules;

/// Syntax-only validation of one side's tokens.
pub fn validate_moves<S: AsRef<str>>(tokens: &[S]) -> ChessMoveValidationResult {
    syntax::validate_moves(tokens)
}

/// Replay both columns from the standard starting position with default
/// settings. Both inputs must come from [`validate_moves`].
pub fn validate_moves_in_game_context(
    white: ChessMoveValidationResult,
    black: ChessMoveValidationResult,
) -> (ChessMoveValidationResult, ChessMoveValidationResult) {
    Validator::new(StandardRules::default(), ValidatorConfig::default())
        .validate_moves_in_game_context(white, black)
}
