//! Answer verification for extended-match questions.

use super::pairing::Pairing;
use crate::types::CorrectMatch;
use serde::{Deserialize, Serialize};

/// Outcome of comparing drawn pairings to the answer key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub is_correct: bool,
    /// Complete pairings drawn by the user.
    pub completed: usize,
    /// Answer-key entries found among the drawn pairings.
    pub matched: usize,
    /// Size of the answer key.
    pub required: usize,
}

/// Whether `pairings` answers the question exactly.
///
/// Incomplete pairings are ignored. Every key entry must be drawn and the
/// number of complete pairings must equal the size of the key, so extra
/// lines fail the answer even when all required ones are present.
pub fn check_answer(pairings: &[Pairing], correct_matches: &[CorrectMatch]) -> bool {
    verdict(pairings, correct_matches).is_correct
}

/// Like [`check_answer`] but with the counts behind the result.
pub fn verdict(pairings: &[Pairing], correct_matches: &[CorrectMatch]) -> Verdict {
    let complete: Vec<&Pairing> = pairings.iter().filter(|p| p.is_complete()).collect();

    let matched = correct_matches
        .iter()
        .filter(|m| complete.iter().any(|p| p.connects(&m.left, &m.right)))
        .count();

    Verdict {
        is_correct: matched == correct_matches.len() && complete.len() == correct_matches.len(),
        completed: complete.len(),
        matched,
        required: correct_matches.len(),
    }
}
