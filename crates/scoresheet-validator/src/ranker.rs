//! Ranks legal moves as replacements for a misread one.
//!
//! Candidates are ordered by edit distance between comparison keys, with a
//! bonus for keeping the attempted destination square (OCR tends to misread
//! the piece letter but get the square right). Ties go to the candidate with
//! the higher heuristic score, then to enumeration order.

use chess_core::distance::{comparison_key, destination_square, last_two, levenshtein};
use chess_core::{RulesEngine, RulesError};
use serde::Serialize;
use tracing::debug;

use crate::config::DEFAULT_DESTINATION_BONUS;
use crate::normalizer::is_castling;

const CAPTURE_SCORE: i32 = 100;
const CHECK_SCORE: i32 = 50;
const CASTLING_SCORE: i32 = 15;
const CENTER_SCORE: i32 = 10;
const MINOR_PIECE_SCORE: i32 = 5;

const CENTER_SQUARES: [&str; 4] = ["e4", "e5", "d4", "d5"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub notation: String,
    pub distance: usize, // after the destination bonus
    pub score: i32,
}

#[derive(Debug, Clone)]
pub struct CandidateRanker {
    destination_bonus: usize,
}

impl Default for CandidateRanker {
    fn default() -> Self {
        Self::new(DEFAULT_DESTINATION_BONUS)
    }
}

impl CandidateRanker {
    pub fn new(destination_bonus: usize) -> Self {
        Self { destination_bonus }
    }

    /// Adjusted distance between an attempted move and a legal one.
    pub fn adjusted_distance(&self, attempted: &str, candidate: &str) -> usize {
        let attempted_key = comparison_key(attempted);
        let candidate_key = comparison_key(candidate);
        let distance = levenshtein(&attempted_key, &candidate_key);

        match (last_two(&attempted_key), last_two(&candidate_key)) {
            (Some(a), Some(c)) if a == c => distance.saturating_sub(self.destination_bonus),
            _ => distance,
        }
    }

    /// Every legal move scored against `attempted`, in enumeration order.
    pub fn rank<E: RulesEngine>(
        &self,
        engine: &E,
        position: &E::Position,
        attempted: &str,
    ) -> Result<Vec<Candidate>, RulesError> {
        let legal = engine.legal_moves(position)?;
        let snapshot = engine.snapshot(position);

        let mut candidates = Vec::with_capacity(legal.len());
        for notation in legal {
            let distance = self.adjusted_distance(attempted, &notation);
            let score = heuristic_score(engine, &snapshot, &notation)?;
            candidates.push(Candidate {
                notation,
                distance,
                score,
            });
        }
        Ok(candidates)
    }

    /// Closest legal move to `attempted`, or `None` when no legal move exists.
    pub fn best<E: RulesEngine>(
        &self,
        engine: &E,
        position: &E::Position,
        attempted: &str,
    ) -> Result<Option<Candidate>, RulesError> {
        let mut best: Option<Candidate> = None;
        for candidate in self.rank(engine, position, attempted)? {
            let better = match &best {
                None => true,
                Some(current) => {
                    candidate.distance < current.distance
                        || (candidate.distance == current.distance
                            && candidate.score > current.score)
                }
            };
            if better {
                best = Some(candidate);
            }
        }

        if let Some(ref c) = best {
            debug!(
                attempted,
                candidate = %c.notation,
                distance = c.distance,
                score = c.score,
                "Best replacement candidate"
            );
        }
        Ok(best)
    }
}

/// Tie-break score for a legal move, simulated on a restored copy of the
/// position. The check term is dropped when the move cannot be replayed.
fn heuristic_score<E: RulesEngine>(
    engine: &E,
    snapshot: &E::Snapshot,
    notation: &str,
) -> Result<i32, RulesError> {
    let mut score = 0;

    if notation.contains('x') {
        score += CAPTURE_SCORE;
    }
    if destination_square(notation).is_some_and(|sq| CENTER_SQUARES.contains(&sq)) {
        score += CENTER_SCORE;
    }
    if notation.starts_with('N') || notation.starts_with('B') {
        score += MINOR_PIECE_SCORE;
    }
    if is_castling(notation) {
        score += CASTLING_SCORE;
    }

    let scratch = engine.restore(snapshot)?;
    match engine.apply_move(&scratch, notation) {
        Ok(after) => {
            if engine.is_in_check(&after)? {
                score += CHECK_SCORE;
            }
        }
        Err(RulesError::Engine(e)) => return Err(RulesError::Engine(e)),
        Err(RulesError::IllegalMove { .. }) => {}
    }

    Ok(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::StandardRules;

    fn best_for(fen: &str, attempted: &str) -> Option<Candidate> {
        let rules = StandardRules::from_fen(fen).unwrap();
        CandidateRanker::default()
            .best(&rules, &rules.starting_position(), attempted)
            .unwrap()
    }

    #[test]
    fn test_adjusted_distance_applies_destination_bonus() {
        let ranker = CandidateRanker::default();
        // raw distance 1, same destination
        assert_eq!(ranker.adjusted_distance("Bc3", "Nc3"), 0);
        // raw distance 1, different destination
        assert_eq!(ranker.adjusted_distance("Bc3", "Bc4"), 1);
        assert_eq!(ranker.adjusted_distance("Nf3", "Nxf3+"), 0);
    }

    #[test]
    fn test_exact_match_wins() {
        let c = best_for("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", "Nf3").unwrap();
        assert_eq!(c.notation, "Nf3");
        assert_eq!(c.distance, 0);
    }

    #[test]
    fn test_garbled_square_is_recovered() {
        let c = best_for("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", "Nf9").unwrap();
        assert_eq!(c.notation, "Nf3");
        assert_eq!(c.distance, 1);
    }

    #[test]
    fn test_destination_square_preferred_over_raw_distance() {
        // White: Nb1, Bd1, Kh1. The bishop cannot reach c3.
        let fen = "7k/8/8/8/8/8/8/1N1B3K w - - 0 1";
        let rules = StandardRules::from_fen(fen).unwrap();
        let legal = rules.legal_moves(&rules.starting_position()).unwrap();
        assert!(legal.contains(&"Nc3".to_string()));
        assert!(!legal.contains(&"Bc3".to_string()));
        assert!(legal.contains(&"Bc2".to_string()));

        let ranker = CandidateRanker::default();
        assert_eq!(levenshtein("BC3", "BC2"), levenshtein("BC3", "NC3"));
        assert!(ranker.adjusted_distance("Bc3", "Nc3") < ranker.adjusted_distance("Bc3", "Bc2"));

        let c = best_for(fen, "Bc3").unwrap();
        assert_eq!(c.notation, "Nc3");
    }

    #[test]
    fn test_destination_square_beats_smaller_raw_distance() {
        // White: Nb1, Qd1, Kh1. The queen cannot reach c3
        let fen = "7k/8/8/8/8/8/8/1N1Q3K w - - 0 1";
        assert_eq!(levenshtein("QDC3", "NC3"), 2);
        assert_eq!(levenshtein("QDC3", "QD3"), 1);

        let ranker = CandidateRanker::default();
        assert_eq!(ranker.adjusted_distance("Qdc3", "Nc3"), 0);
        assert_eq!(ranker.adjusted_distance("Qdc3", "Qd3"), 1);

        let c = best_for(fen, "Qdc3").unwrap();
        assert_eq!(c.notation, "Nc3");
    }

    #[test]
    fn test_heuristic_breaks_distance_ties() {
        // Knight on f3, black pawn on e5: Nxe5 and Ng5 are both one edit from "N5"
        let fen = "7k/8/8/4p3/8/5N2/8/7K w - - 0 1";
        let rules = StandardRules::from_fen(fen).unwrap();
        let ranked = CandidateRanker::default()
            .rank(&rules, &rules.starting_position(), "N5")
            .unwrap();

        let capture = ranked.iter().find(|c| c.notation == "Nxe5").unwrap();
        let quiet = ranked.iter().find(|c| c.notation == "Ng5").unwrap();
        assert_eq!(capture.distance, 1);
        assert_eq!(quiet.distance, 1);
        assert_eq!(capture.score, CAPTURE_SCORE + CENTER_SCORE + MINOR_PIECE_SCORE);
        assert_eq!(quiet.score, MINOR_PIECE_SCORE);
        assert!(ranked.iter().all(|c| c.distance >= 1));

        let c = best_for(fen, "N5").unwrap();
        assert_eq!(c.notation, "Nxe5");
    }

    #[test]
    fn test_check_scores_when_replayable() {
        let fen = "4k3/8/8/8/8/8/8/4K2R w K - 0 1";
        let rules = StandardRules::from_fen(fen).unwrap();
        let ranked = CandidateRanker::default()
            .rank(&rules, &rules.starting_position(), "Rh8")
            .unwrap();
        let rh8 = ranked.iter().find(|c| c.notation == "Rh8").unwrap();
        assert_eq!(rh8.score, CHECK_SCORE);
        let castle = ranked.iter().find(|c| c.notation == "O-O").unwrap();
        assert_eq!(castle.score, CASTLING_SCORE);
    }

    #[test]
    fn test_no_candidate_in_terminal_position() {
        assert_eq!(best_for("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1", "Kg8"), None);
    }
}
