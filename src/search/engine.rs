//! Exhaustive three-word combination search
//!
//! Phases run strictly in order: normalize the target, filter the dictionary down to
//! candidates, enumerate every candidate triple, score each one, then rank.

use super::combinations::{Triples, combination_count, triples_from};
use super::config::{COMBINATION_SIZE, SearchConfig};
use super::observer::{NoopObserver, SearchObserver};
use super::ranking::{count_perfect, rank, rank_parallel};
use crate::core::{Coverage, LetterMultiset, SearchError, Target, Word};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

/// Three distinct candidate words, in dictionary order
pub type Combination<'a> = [&'a Word; COMBINATION_SIZE];

/// A scored combination
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageResult<'a> {
    /// The words, in the order they appear in the dictionary
    pub words: Combination<'a>,
    /// Positions of the words in the candidate list (`i < j < k`)
    pub indices: [usize; COMBINATION_SIZE],
    pub coverage: Coverage,
}

impl CoverageResult<'_> {
    #[inline]
    #[must_use]
    pub const fn percentage(&self) -> f64 {
        self.coverage.percentage
    }

    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> &LetterMultiset {
        &self.coverage.remaining
    }

    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.coverage.is_perfect()
    }

    /// The words as plain strings
    #[must_use]
    pub fn texts(&self) -> [&str; COMBINATION_SIZE] {
        self.words.map(Word::text)
    }
}

/// How a search ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// Every combination was scored
    Complete,
    /// Fewer than three candidates survived filtering (includes an empty dictionary)
    InsufficientCandidates { found: usize },
    /// An observer stopped the search; results are partial
    Cancelled { evaluated: u64 },
}

/// Everything a search produced
#[derive(Debug, Clone)]
pub struct SearchOutcome<'a> {
    pub target: Target,
    pub status: SearchStatus,
    /// Words fed into the search
    pub dictionary_size: usize,
    /// Words that passed the usable-letter filter, in dictionary order
    pub candidates: Vec<&'a Word>,
    /// Scored combinations, best first; ties keep enumeration order
    pub results: Vec<CoverageResult<'a>>,
    perfect: usize,
}

impl<'a> SearchOutcome<'a> {
    /// Results with 100% coverage, in enumeration order
    #[must_use]
    pub fn perfect_matches(&self) -> &[CoverageResult<'a>] {
        &self.results[..self.perfect]
    }

    /// The highest-ranked result, if any combination was scored
    #[must_use]
    pub fn best(&self) -> Option<&CoverageResult<'a>> {
        self.results.first()
    }

    #[must_use]
    pub fn total_candidates(&self) -> usize {
        self.candidates.len()
    }

    /// Number of combinations actually scored
    #[must_use]
    pub fn combinations_evaluated(&self) -> u64 {
        self.results.len() as u64
    }

    /// Number of combinations the candidate set allows
    #[must_use]
    pub fn combinations_possible(&self) -> u64 {
        combination_count(self.candidates.len())
    }

    /// Whether the search scored every combination
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self.status, SearchStatus::Complete)
    }
}

/// Keep the dictionary words with exactly `word_length` usable letters
///
/// Dictionary order is preserved. Repeated words stay as separate candidates unless
/// `config.dedup` is set, in which case only the first occurrence is kept.
///
/// # Examples
/// ```
/// use word_triples::core::{Target, Word};
/// use word_triples::search::{SearchConfig, filter_candidates};
///
/// let target = Target::parse("CHILL EAT THEATRE").unwrap();
/// let dictionary: Vec<Word> = ["cheat", "llama", "lathe"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let candidates = filter_candidates(&target, &dictionary, &SearchConfig::default());
/// let texts: Vec<&str> = candidates.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, vec!["CHEAT", "LATHE"]);
/// ```
#[must_use]
pub fn filter_candidates<'a>(
    target: &Target,
    dictionary: &'a [Word],
    config: &SearchConfig,
) -> Vec<&'a Word> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();

    dictionary
        .iter()
        .filter(|word| word.usable_letters(target.letters()) == config.word_length)
        .filter(|&word| !config.dedup || seen.insert(word.text()))
        .collect()
}

fn score<'a>(
    target: &Target,
    candidates: &[&'a Word],
    indices: [usize; COMBINATION_SIZE],
) -> CoverageResult<'a> {
    let words = indices.map(|index| candidates[index]);
    let coverage = target.coverage(words);
    CoverageResult {
        words,
        indices,
        coverage,
    }
}

/// Lazily score every candidate triple in enumeration order
///
/// Nothing is materialized up front, so callers can stop early or stream results
/// without holding all C(n, 3) combinations in memory. The sequence is finite and
/// is consumed once.
pub fn scored_combinations<'a>(
    target: &Target,
    candidates: &[&'a Word],
) -> impl ExactSizeIterator<Item = CoverageResult<'a>> {
    Triples::new(candidates.len()).map(move |indices| score(target, candidates, indices))
}

/// Search `dictionary` for the three-word combinations that best cover `target`
///
/// Runs sequentially with the default configuration and no progress reporting.
///
/// # Errors
/// Returns `SearchError::InvalidInput` if the target contains no letters.
///
/// # Examples
/// ```
/// use word_triples::core::Word;
/// use word_triples::search::search;
///
/// let dictionary: Vec<Word> = ["ABCDE", "FGHIJ", "KLMNO", "ABCDZ"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let outcome = search("ABCDE FGHIJ KLMNO", &dictionary).unwrap();
/// let best = outcome.best().unwrap();
/// assert_eq!(best.texts(), ["ABCDE", "FGHIJ", "KLMNO"]);
/// assert!(best.is_perfect());
/// assert_eq!(outcome.perfect_matches().len(), 1);
/// ```
pub fn search<'a>(target: &str, dictionary: &'a [Word]) -> Result<SearchOutcome<'a>, SearchError> {
    search_with(target, dictionary, &SearchConfig::default(), &NoopObserver)
}

/// Search with explicit configuration and an observer
///
/// # Errors
/// Returns `SearchError::InvalidInput` if the target contains no letters. A search
/// that finds too few candidates is not an error; it returns an empty outcome with
/// `SearchStatus::InsufficientCandidates`.
pub fn search_with<'a, O: SearchObserver + ?Sized>(
    target: &str,
    dictionary: &'a [Word],
    config: &SearchConfig,
    observer: &O,
) -> Result<SearchOutcome<'a>, SearchError> {
    let target = Target::parse(target)?;
    Ok(search_target(target, dictionary, config, observer))
}

/// Search for an already parsed target
///
/// Cannot fail: a `Target` always has at least one letter.
#[must_use]
pub fn search_target<'a, O: SearchObserver + ?Sized>(
    target: Target,
    dictionary: &'a [Word],
    config: &SearchConfig,
    observer: &O,
) -> SearchOutcome<'a> {
    let candidates = filter_candidates(&target, dictionary, config);

    let total = combination_count(candidates.len());
    observer.candidates_found(&candidates, total);

    if candidates.len() < COMBINATION_SIZE {
        observer.finished(0);
        return SearchOutcome {
            target,
            status: SearchStatus::InsufficientCandidates {
                found: candidates.len(),
            },
            dictionary_size: dictionary.len(),
            candidates,
            results: Vec::new(),
            perfect: 0,
        };
    }

    let (mut results, cancelled) = if config.parallel {
        score_parallel(&target, &candidates, config.progress_interval, observer)
    } else {
        score_sequential(&target, &candidates, config.progress_interval, observer)
    };

    let evaluated = results.len() as u64;
    observer.finished(evaluated);

    if config.parallel {
        rank_parallel(&mut results);
    } else {
        rank(&mut results);
    }
    let perfect = count_perfect(&results);

    let status = if cancelled {
        SearchStatus::Cancelled { evaluated }
    } else {
        SearchStatus::Complete
    };

    SearchOutcome {
        target,
        status,
        dictionary_size: dictionary.len(),
        candidates,
        results,
        perfect,
    }
}

fn score_sequential<'a, O: SearchObserver + ?Sized>(
    target: &Target,
    candidates: &[&'a Word],
    interval: u64,
    observer: &O,
) -> (Vec<CoverageResult<'a>>, bool) {
    let total = combination_count(candidates.len());
    // Grows as results arrive; C(n, 3) is far too large to reserve up front
    let mut results = Vec::new();

    for result in scored_combinations(target, candidates) {
        results.push(result);

        let evaluated = results.len() as u64;
        if interval > 0
            && evaluated % interval == 0
            && observer.progress(evaluated, total).is_break()
        {
            return (results, true);
        }
    }

    (results, false)
}

/// Score the index space in parallel, one `(i, j)` pair of leading indices per unit
///
/// Units are collected back in index order, so the result sequence matches the
/// sequential enumeration exactly. Cancellation is checked before each unit, and
/// progress positions never move backwards.
fn score_parallel<'a, O: SearchObserver + ?Sized>(
    target: &Target,
    candidates: &[&'a Word],
    interval: u64,
    observer: &O,
) -> (Vec<CoverageResult<'a>>, bool) {
    let n = candidates.len();
    let total = combination_count(n);
    let evaluated = AtomicU64::new(0);
    let reported = Mutex::new(0);
    let cancelled = AtomicBool::new(false);

    let score_pair = |i: usize, j: usize| -> Vec<CoverageResult<'a>> {
        if cancelled.load(Ordering::Relaxed) {
            return Vec::new();
        }

        let unit: Vec<_> = triples_from(n, i, j)
            .map(|indices| score(target, candidates, indices))
            .collect();

        let done = unit.len() as u64;
        let before = evaluated.fetch_add(done, Ordering::Relaxed);
        let after = before + done;
        if interval > 0 && after / interval > before / interval {
            // Held across the callback so positions reach the observer in order
            let mut last = reported.lock().unwrap_or_else(PoisonError::into_inner);
            if after > *last {
                *last = after;
                if observer.progress(after, total).is_break() {
                    cancelled.store(true, Ordering::Relaxed);
                }
            }
        }

        unit
    };
    let score_pair = &score_pair;

    let results: Vec<CoverageResult<'a>> = (0..n)
        .into_par_iter()
        .flat_map(|i| {
            (i + 1..n)
                .into_par_iter()
                .flat_map_iter(move |j| score_pair(i, j))
        })
        .collect();

    (results, cancelled.into_inner())
}
