//! Candidate listing command
//!
//! Shows which dictionary words could take part in a combination for a target.

use crate::core::{SearchError, Target, Word};
use crate::search::{SearchConfig, combination_count, filter_candidates};

/// Candidate words for a target
pub struct CandidateReport<'a> {
    pub target: Target,
    pub word_length: usize,
    pub candidates: Vec<&'a Word>,
    /// Combinations a search over these candidates would score
    pub combinations: u64,
}

/// Filter `dictionary` down to the candidates for `target`
///
/// # Errors
///
/// Returns `SearchError::InvalidInput` if the target contains no letters.
pub fn list_candidates<'a>(
    target: &str,
    dictionary: &'a [Word],
    config: &SearchConfig,
) -> Result<CandidateReport<'a>, SearchError> {
    let target = Target::parse(target)?;
    let candidates = filter_candidates(&target, dictionary, config);
    let combinations = combination_count(candidates.len());

    Ok(CandidateReport {
        target,
        word_length: config.word_length,
        candidates,
        combinations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::words_from_slice;

    #[test]
    fn lists_candidates_in_dictionary_order() {
        let dictionary = words_from_slice(&["tater", "helix", "cheat", "llama", "lathe"]);
        let report =
            list_candidates("chill eat theatre", &dictionary, &SearchConfig::default()).unwrap();

        let texts: Vec<&str> = report.candidates.iter().map(|w| w.text()).collect();
        assert_eq!(texts, vec!["TATER", "CHEAT", "LATHE"]);
        assert_eq!(report.combinations, 1);
        assert_eq!(report.word_length, 5);
    }

    #[test]
    fn no_candidates_means_no_combinations() {
        let dictionary = words_from_slice(&["zesty", "quirk"]);
        let report =
            list_candidates("chill eat theatre", &dictionary, &SearchConfig::default()).unwrap();

        assert!(report.candidates.is_empty());
        assert_eq!(report.combinations, 0);
    }

    #[test]
    fn blank_target_is_rejected() {
        let dictionary = words_from_slice(&["cheat"]);
        assert!(list_candidates("", &dictionary, &SearchConfig::default()).is_err());
    }
}
