//! Rules engine seam: move application, legal-move enumeration and check
//! detection behind a trait, with a shakmaty-backed implementation.

use shakmaty::fen::Fen;
use shakmaty::san::{San, SanPlus};
use shakmaty::{CastlingMode, Chess, EnPassantMode, Position};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// The notation does not describe a legal move in the position.
    #[error("Illegal move '{notation}': {reason}")]
    IllegalMove { notation: String, reason: String },

    /// The engine itself failed; not a statement about the move.
    #[error("Rules engine failure: {0}")]
    Engine(String),
}

impl RulesError {
    pub fn illegal(notation: &str, reason: impl Into<String>) -> Self {
        RulesError::IllegalMove {
            notation: notation.to_string(),
            reason: reason.into(),
        }
    }

    pub fn is_engine_failure(&self) -> bool {
        matches!(self, RulesError::Engine(_))
    }
}

/// Capabilities the validator needs from a chess rules implementation.
///
/// Positions are treated as values: `apply_move` returns the successor and
/// leaves its input untouched. `snapshot`/`restore` give an opaque handle for
/// trying candidate moves without touching the authoritative position.
pub trait RulesEngine {
    type Position: Clone;
    type Snapshot: Clone;

    /// Position every game starts from.
    fn starting_position(&self) -> Self::Position;

    /// Apply a SAN-like move. Trailing `+`/`#` are tolerated.
    fn apply_move(
        &self,
        position: &Self::Position,
        notation: &str,
    ) -> Result<Self::Position, RulesError>;

    /// Every legal move for the side to move, in SAN.
    fn legal_moves(&self, position: &Self::Position) -> Result<Vec<String>, RulesError>;

    /// Whether the side to move is in check.
    fn is_in_check(&self, position: &Self::Position) -> Result<bool, RulesError>;

    fn snapshot(&self, position: &Self::Position) -> Self::Snapshot;

    fn restore(&self, snapshot: &Self::Snapshot) -> Result<Self::Position, RulesError>;
}

/// Standard chess rules via shakmaty.
#[derive(Debug, Clone)]
pub struct StandardRules {
    start: Chess,
}

impl Default for StandardRules {
    fn default() -> Self {
        Self {
            start: Chess::default(),
        }
    }
}

impl StandardRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rules engine whose games start from the given FEN.
    pub fn from_fen(fen: &str) -> Result<Self, RulesError> {
        let fen: Fen = fen
            .parse()
            .map_err(|e| RulesError::Engine(format!("Invalid FEN '{fen}': {e}")))?;
        let start = fen
            .into_position::<Chess>(CastlingMode::Standard)
            .map_err(|e| RulesError::Engine(format!("Unplayable position: {e}")))?;
        Ok(Self { start })
    }
}

impl RulesEngine for StandardRules {
    type Position = Chess;
    type Snapshot = Fen;

    fn starting_position(&self) -> Chess {
        self.start.clone()
    }

    fn apply_move(&self, position: &Chess, notation: &str) -> Result<Chess, RulesError> {
        let san_plus: SanPlus = notation
            .trim()
            .parse()
            .map_err(|e| RulesError::illegal(notation, format!("unparseable notation ({e})")))?;

        let mv = san_plus
            .san
            .to_move(position)
            .map_err(|e| RulesError::illegal(notation, e.to_string()))?;

        position
            .clone()
            .play(mv)
            .map_err(|e| RulesError::illegal(notation, e.to_string()))
    }

    fn legal_moves(&self, position: &Chess) -> Result<Vec<String>, RulesError> {
        Ok(position
            .legal_moves()
            .iter()
            .map(|mv| San::from_move(position, mv.clone()).to_string())
            .collect())
    }

    fn is_in_check(&self, position: &Chess) -> Result<bool, RulesError> {
        Ok(position.is_check())
    }

    fn snapshot(&self, position: &Chess) -> Fen {
        Fen::from_position(position, EnPassantMode::Legal)
    }

    fn restore(&self, snapshot: &Fen) -> Result<Chess, RulesError> {
        snapshot
            .clone()
            .into_position::<Chess>(CastlingMode::Standard)
            .map_err(|e| RulesError::Engine(format!("Snapshot could not be restored: {e}")))
    }
}
