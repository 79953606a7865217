//! Checkmate / stalemate detection.

use std::fmt;

use chess_core::{RulesEngine, RulesError};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TerminalState {
    Checkmate,
    Stalemate,
}

impl fmt::Display for TerminalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminalState::Checkmate => write!(f, "checkmate — no legal moves available"),
            TerminalState::Stalemate => write!(f, "stalemate — no legal moves available"),
        }
    }
}

/// `None` while the side to move still has a legal move.
pub fn detect_terminal<E: RulesEngine>(
    engine: &E,
    position: &E::Position,
) -> Result<Option<TerminalState>, RulesError> {
    if !engine.legal_moves(position)?.is_empty() {
        return Ok(None);
    }

    if engine.is_in_check(position)? {
        Ok(Some(TerminalState::Checkmate))
    } else {
        Ok(Some(TerminalState::Stalemate))
    }
}
