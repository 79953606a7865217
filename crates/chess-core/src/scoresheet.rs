use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tokens;

#[derive(Error, Debug)]
pub enum ScoresheetError {
    #[error("Scoresheet JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Scoresheet has no moves")]
    NoMoves,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoresheetMetadata {
    pub white: Option<String>,
    pub black: Option<String>,
    pub event: Option<String>,
    pub date: Option<String>,
    pub result: Option<String>, // "1-0", "0-1", "1/2-1/2" as written on the sheet
}

/// One digitized scoresheet: the raw move tokens of each column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoresheetGame {
    #[serde(default)]
    pub metadata: Option<ScoresheetMetadata>,
    pub white: Vec<String>, // raw OCR tokens, one per white half-move
    pub black: Vec<String>,
}

impl ScoresheetGame {
    pub fn new(white: Vec<String>, black: Vec<String>) -> Self {
        Self {
            metadata: None,
            white,
            black,
        }
    }

    /// Build a game from one interleaved half-move list (white first).
    pub fn from_half_moves(tokens: &[String]) -> Self {
        let (white, black) = split_alternating(tokens);
        Self::new(white, black)
    }

    /// Build a game from raw movetext such as `"1. e4 e5 2. Nf3 Nc6"`.
    pub fn from_movetext(text: &str) -> Result<Self, ScoresheetError> {
        let tokens = tokens::tokenize_movetext(text);
        if tokens.is_empty() {
            return Err(ScoresheetError::NoMoves);
        }
        let mut game = Self::from_half_moves(&tokens);
        if let Some(result) = tokens::find_result(text) {
            game.metadata = Some(ScoresheetMetadata {
                result: Some(result.to_string()),
                ..Default::default()
            });
        }
        Ok(game)
    }

    pub fn from_json(json: &str) -> Result<Self, ScoresheetError> {
        let game: Self = serde_json::from_str(json)?;
        if game.white.is_empty() && game.black.is_empty() {
            return Err(ScoresheetError::NoMoves);
        }
        Ok(game)
    }

    pub fn half_move_count(&self) -> usize {
        self.white.len() + self.black.len()
    }
}

/// Split an interleaved half-move list into white and black columns.
pub fn split_alternating(tokens: &[String]) -> (Vec<String>, Vec<String>) {
    let mut white = Vec::with_capacity(tokens.len() / 2 + 1);
    let mut black = Vec::with_capacity(tokens.len() / 2);
    for (ply, token) in tokens.iter().enumerate() {
        if ply % 2 == 0 {
            white.push(token.clone());
        } else {
            black.push(token.clone());
        }
    }
    (white, black)
}
