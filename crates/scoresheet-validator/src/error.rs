//! Move-level issue taxonomy.

use serde::Serialize;
use thiserror::Error;

pub const VALID_PROMOTIONS: &str = "=Q, =R, =B, =N";

/// Why a move is not plainly valid. Only `SyntaxError` is ever auto-corrected.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MoveIssue {
    #[error("Empty or whitespace move")]
    EmptyMove,

    #[error("Invalid move syntax '{token}'{}", promotion_suffix(.promotion_hint))]
    SyntaxError { token: String, promotion_hint: bool },

    #[error("Invalid piece notation '{letter}'")]
    InvalidPiece { letter: char },

    #[error("Illegal move '{notation}' in this position: {reason}")]
    IllegalInContext { notation: String, reason: String },

    #[error("No legal moves remain ({state})")]
    TerminalPosition { state: String },

    #[error("Move '{notation}' could not be corrected: {reason}")]
    CorrectionFailed { notation: String, reason: String },

    #[error("Context validation could not be completed: {reason}")]
    EngineFailure { reason: String },
}

fn promotion_suffix(hint: &bool) -> String {
    if *hint {
        format!("; valid promotions are {VALID_PROMOTIONS}")
    } else {
        String::new()
    }
}

impl MoveIssue {
    /// Whether the replayer may search for a replacement move.
    pub fn is_correctable(&self) -> bool {
        matches!(self, MoveIssue::SyntaxError { .. })
    }
}
