#![allow(dead_code)]

use std::cell::Cell;

use chess_core::{RulesEngine, RulesError, ScoresheetGame, StandardRules};
use scoresheet_validator::{ChessMoveValidationResult, MoveStatus};

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn game(white: &[&str], black: &[&str]) -> ScoresheetGame {
    ScoresheetGame::new(strings(white), strings(black))
}

pub fn statuses(result: &ChessMoveValidationResult) -> Vec<MoveStatus> {
    result.moves().iter().map(|m| m.status).collect()
}

/// Standard rules that fault on demand: after `apply_budget` move
/// applications, or on every legal-move enumeration.
pub struct FlakyRules {
    inner: StandardRules,
    apply_budget: Cell<usize>,
    fail_legal_moves: bool,
}

impl FlakyRules {
    pub fn failing_after(applications: usize) -> Self {
        Self {
            inner: StandardRules::default(),
            apply_budget: Cell::new(applications),
            fail_legal_moves: false,
        }
    }

    pub fn failing_enumeration() -> Self {
        Self {
            inner: StandardRules::default(),
            apply_budget: Cell::new(usize::MAX),
            fail_legal_moves: true,
        }
    }
}

impl RulesEngine for FlakyRules {
    type Position = shakmaty::Chess;
    type Snapshot = <StandardRules as RulesEngine>::Snapshot;

    fn starting_position(&self) -> Self::Position {
        self.inner.starting_position()
    }

    fn apply_move(
        &self,
        position: &Self::Position,
        notation: &str,
    ) -> Result<Self::Position, RulesError> {
        let left = self.apply_budget.get();
        if left == 0 {
            return Err(RulesError::Engine("simulated engine fault".into()));
        }
        self.apply_budget.set(left - 1);
        self.inner.apply_move(position, notation)
    }

    fn legal_moves(&self, position: &Self::Position) -> Result<Vec<String>, RulesError> {
        if self.fail_legal_moves {
            return Err(RulesError::Engine("move generator unavailable".into()));
        }
        self.inner.legal_moves(position)
    }

    fn is_in_check(&self, position: &Self::Position) -> Result<bool, RulesError> {
        self.inner.is_in_check(position)
    }

    fn snapshot(&self, position: &Self::Position) -> Self::Snapshot {
        self.inner.snapshot(position)
    }

    fn restore(&self, snapshot: &Self::Snapshot) -> Result<Self::Position, RulesError> {
        self.inner.restore(snapshot)
    }
}
