//! Combination check command
//!
//! Scores one user-chosen set of words against a target.

use crate::core::{Coverage, Target, Word};
use crate::search::COMBINATION_SIZE;

/// Score of a user-chosen combination
#[derive(Debug)]
pub struct CheckResult {
    pub target: Target,
    pub words: Vec<Word>,
    /// Usable letters of each word against the target
    pub usable: Vec<usize>,
    /// Usable-letter count a candidate needs
    pub word_length: usize,
    pub coverage: Coverage,
}

impl CheckResult {
    /// Whether every word would pass the candidate filter
    #[must_use]
    pub fn all_candidates(&self) -> bool {
        self.usable.iter().all(|&usable| usable == self.word_length)
    }
}

/// Score `words` against `target`
///
/// # Errors
///
/// Returns an error if:
/// - The target contains no letters
/// - The number of words is not three
/// - Any word is not purely alphabetic
pub fn check_combination(
    target: &str,
    words: &[String],
    word_length: usize,
) -> Result<CheckResult, String> {
    let target = Target::parse(target).map_err(|e| e.to_string())?;

    if words.len() != COMBINATION_SIZE {
        return Err(format!(
            "Expected {COMBINATION_SIZE} words, got {}",
            words.len()
        ));
    }

    let words = words
        .iter()
        .map(|w| Word::new(w).map_err(|e| format!("Invalid word '{w}': {e}")))
        .collect::<Result<Vec<_>, _>>()?;

    let usable = words
        .iter()
        .map(|w| w.usable_letters(target.letters()))
        .collect();
    let coverage = target.coverage(&words);

    Ok(CheckResult {
        target,
        words,
        usable,
        word_length,
        coverage,
    })
}
