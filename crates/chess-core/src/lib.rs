//! Shared chess plumbing for scoresheet validation.
//!
//! Holds the rules-engine seam the validator replays games against, the
//! string-distance utilities used to rank replacement moves, and the input
//! model for digitized scoresheets.

pub mod distance;
pub mod rules;
pub mod scoresheet;
pub mod tokens;

pub use rules::{RulesEngine, RulesError, StandardRules};
pub use scoresheet::{ScoresheetGame, ScoresheetMetadata};
