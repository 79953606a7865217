//! Validation result types.

use serde::Serialize;

use crate::error::MoveIssue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MoveStatus {
    Valid,
    Warning,
    Error,
}

impl MoveStatus {
    /// Allowed status revisions: a valid move may go anywhere, an error may
    /// only be lifted to a warning (by a correction), a warning is final.
    pub fn can_become(self, next: MoveStatus) -> bool {
        match self {
            MoveStatus::Valid => true,
            MoveStatus::Error => matches!(next, MoveStatus::Error | MoveStatus::Warning),
            MoveStatus::Warning => matches!(next, MoveStatus::Warning),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    White,
    Black,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::White => write!(f, "white"),
            Side::Black => write!(f, "black"),
        }
    }
}

/// One half-move as read from the sheet, with its validation verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedMove {
    pub move_number: usize, // 1-indexed, per side
    pub notation: String,   // as first observed
    pub normalized_notation: String,
    pub status: MoveStatus,
    pub message: String,
    pub issue: Option<MoveIssue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corrected_from: Option<String>, // normalized notation before a correction
}

impl ValidatedMove {
    pub fn valid(move_number: usize, notation: &str, normalized: &str) -> Self {
        Self {
            move_number,
            notation: notation.to_string(),
            normalized_notation: normalized.to_string(),
            status: MoveStatus::Valid,
            message: String::new(),
            issue: None,
            corrected_from: None,
        }
    }

    pub fn invalid(move_number: usize, notation: &str, normalized: &str, issue: MoveIssue) -> Self {
        let mut mv = Self::valid(move_number, notation, normalized);
        mv.mark(MoveStatus::Error, issue);
        mv
    }

    pub fn is_valid(&self) -> bool {
        self.status == MoveStatus::Valid
    }

    pub fn is_error(&self) -> bool {
        self.status == MoveStatus::Error
    }

    /// Append explanatory text; earlier text is never dropped.
    pub fn append_message(&mut self, text: &str) {
        if text.is_empty() || self.message.split("; ").any(|part| part == text) {
            return;
        }
        if !self.message.is_empty() {
            self.message.push_str("; ");
        }
        self.message.push_str(text);
    }

    /// Record an issue: append its description and move to `status` when
    /// the transition is allowed. Returns whether the status changed.
    pub fn mark(&mut self, status: MoveStatus, issue: MoveIssue) -> bool {
        self.append_message(&issue.to_string());
        self.issue = Some(issue);
        self.set_status(status)
    }

    pub fn set_status(&mut self, status: MoveStatus) -> bool {
        if self.status == status || !self.status.can_become(status) {
            return false;
        }
        self.status = status;
        true
    }

    /// Replace the notation with a legal substitute and downgrade to a warning.
    /// A `+`/`#` recorded on the sheet is kept on the replacement.
    pub fn apply_correction(&mut self, replacement: &str) {
        let mut replacement = replacement.to_string();
        if !replacement.ends_with(['+', '#']) {
            if let Some(suffix) = self.normalized_notation.chars().last() {
                if suffix == '+' || suffix == '#' {
                    replacement.push(suffix);
                }
            }
        }
        let original = std::mem::replace(&mut self.normalized_notation, replacement.clone());
        self.append_message(&format!("Corrected '{original}' to '{replacement}'"));
        self.corrected_from = Some(original);
        self.set_status(MoveStatus::Warning);
    }

    /// Notation with check/mate annotations removed.
    pub fn playable_notation(&self) -> &str {
        self.normalized_notation.trim_end_matches(['+', '#'])
    }

    pub fn gives_check(&self) -> bool {
        self.normalized_notation.ends_with('+')
    }
}

/// Validation outcome for one side's column of moves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChessMoveValidationResult {
    is_valid: bool,
    moves: Vec<ValidatedMove>,
}

impl ChessMoveValidationResult {
    pub fn new(moves: Vec<ValidatedMove>) -> Self {
        let is_valid = !moves.iter().any(ValidatedMove::is_error);
        Self { is_valid, moves }
    }

    /// False iff at least one move is an error.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn moves(&self) -> &[ValidatedMove] {
        &self.moves
    }

    pub fn into_moves(self) -> Vec<ValidatedMove> {
        self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn count(&self, status: MoveStatus) -> usize {
        self.moves.iter().filter(|m| m.status == status).count()
    }
}

impl From<Vec<ValidatedMove>> for ChessMoveValidationResult {
    fn from(moves: Vec<ValidatedMove>) -> Self {
        Self::new(moves)
    }
}
