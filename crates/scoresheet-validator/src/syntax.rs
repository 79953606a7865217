//! Position-independent token validation.
//!
//! Rejects only tokens that could never be a legal move in any position.
//! Whether a well-formed move is playable is decided later, during replay.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::MoveIssue;
use crate::model::{ChessMoveValidationResult, ValidatedMove};
use crate::normalizer::{self, is_castling};

// Any uppercase piece letter is accepted here so that a wrong letter is
// reported as a piece problem rather than a generic syntax error.
static MOVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[A-Z]?[a-h]?[1-8]?x?[a-h][1-8](?:=[QRBN])?|O-O(?:-O)?)[+#]?$")
        .expect("move pattern is valid")
});

const PIECE_LETTERS: [char; 5] = ['K', 'Q', 'R', 'B', 'N'];

/// Check one already-normalized token.
pub fn check_syntax(token: &str) -> Result<(), MoveIssue> {
    if token.trim().is_empty() {
        return Err(MoveIssue::EmptyMove);
    }

    if !MOVE_RE.is_match(token) {
        return Err(MoveIssue::SyntaxError {
            token: token.to_string(),
            promotion_hint: token.contains('='),
        });
    }

    if !is_castling(token) {
        if let Some(letter) = token.chars().next().filter(char::is_ascii_uppercase) {
            if !PIECE_LETTERS.contains(&letter) {
                return Err(MoveIssue::InvalidPiece { letter });
            }
        }
    }

    Ok(())
}

/// Normalize and validate a single raw token.
pub fn validate_token(token: &str, move_number: usize) -> ValidatedMove {
    let normalized = normalizer::normalize(token);
    match check_syntax(&normalized) {
        Ok(()) => ValidatedMove::valid(move_number, token, &normalized),
        Err(issue) => ValidatedMove::invalid(move_number, token, &normalized, issue),
    }
}

/// Syntax-only validation of one side's tokens; no game replay.
pub fn validate_moves<S: AsRef<str>>(tokens: &[S]) -> ChessMoveValidationResult {
    tokens
        .iter()
        .enumerate()
        .map(|(idx, token)| validate_token(token.as_ref(), idx + 1))
        .collect::<Vec<_>>()
        .into()
}
