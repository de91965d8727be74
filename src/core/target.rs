//! Target phrase normalization and coverage scoring
//!
//! A `Target` is the canonical form of the phrase the user wants to spell: uppercase
//! letters only, with its letter multiset built once. Because a `Target` can never be
//! empty, scoring against it cannot divide by zero.

use super::{LetterMultiset, Word};
use std::fmt;

/// Error type for search input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The target has no letters to cover (blank, or no alphabetic characters)
    InvalidInput { input: String },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { input } => {
                write!(f, "Invalid target {input:?}: it contains no letters")
            }
        }
    }
}

impl std::error::Error for SearchError {}

/// A normalized, non-empty target phrase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    text: String,
    letters: LetterMultiset,
    total: u32,
}

/// How well a set of words covers a target
#[derive(Debug, Clone, PartialEq)]
pub struct Coverage {
    /// Share of the target's letters accounted for, in `[0, 100]`
    pub percentage: f64,
    /// Target letters no word supplied; never holds zero counts
    pub remaining: LetterMultiset,
}

impl Coverage {
    /// Whether every target letter is covered
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.remaining.is_empty()
    }
}

impl Target {
    /// Normalize a raw phrase into a target
    ///
    /// Uppercases the phrase and keeps only its ASCII letters, so spaces and
    /// punctuation between words disappear.
    ///
    /// # Errors
    /// Returns `SearchError::InvalidInput` if nothing is left after normalization.
    ///
    /// # Examples
    /// ```
    /// use word_triples::core::Target;
    ///
    /// let target = Target::parse("Chill eat theatre").unwrap();
    /// assert_eq!(target.text(), "CHILLEATTHEATRE");
    /// assert_eq!(target.total(), 15);
    ///
    /// assert!(Target::parse("   ").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, SearchError> {
        let text: String = raw
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_uppercase())
            .collect();

        Self::from_letters(text, raw)
    }

    fn from_letters(text: String, raw: &str) -> Result<Self, SearchError> {
        let letters = LetterMultiset::from_text(&text);
        let total = letters.total();
        if total == 0 {
            return Err(SearchError::InvalidInput {
                input: raw.to_string(),
            });
        }

        Ok(Self {
            text,
            letters,
            total,
        })
    }

    /// The normalized phrase
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Letter multiset of the phrase
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &LetterMultiset {
        &self.letters
    }

    /// Total number of letters to cover (always at least one)
    #[inline]
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.total
    }

    /// Score how much of the target a set of words covers
    ///
    /// The words' letters are pooled (every occurrence counts), then subtracted from the
    /// target with each letter floored at zero. Surplus letters are not penalized.
    ///
    /// # Examples
    /// ```
    /// use word_triples::core::{Target, Word};
    ///
    /// let target = Target::parse("ABCDE FGHIJ").unwrap();
    /// let word = Word::new("ABCDE").unwrap();
    ///
    /// let result = target.coverage([&word]);
    /// assert!((result.percentage - 50.0).abs() < f64::EPSILON);
    /// assert_eq!(result.remaining.total(), 5);
    /// ```
    #[must_use]
    pub fn coverage<'w>(&self, words: impl IntoIterator<Item = &'w Word>) -> Coverage {
        let used: LetterMultiset = words.into_iter().map(Word::letters).sum();
        let remaining = self.letters.saturating_sub(&used);
        let covered = self.total - remaining.total();

        Coverage {
            percentage: 100.0 * f64::from(covered) / f64::from(self.total),
            remaining,
        }
    }
}

impl TryFrom<LetterMultiset> for Target {
    type Error = SearchError;

    fn try_from(letters: LetterMultiset) -> Result<Self, Self::Error> {
        let text: String = letters
            .letters()
            .flat_map(|(letter, count)| std::iter::repeat_n(letter, count as usize))
            .collect();
        let raw = text.clone();
        Self::from_letters(text, &raw)
    }
}

/// Score how much of `target` the pooled letters of `words` cover
///
/// Free-standing form of [`Target::coverage`] for callers that only hold a multiset.
///
/// # Errors
/// Returns `SearchError::InvalidInput` if `target` holds no letters, since coverage of
/// nothing is undefined.
pub fn coverage<'w>(
    words: impl IntoIterator<Item = &'w Word>,
    target: &LetterMultiset,
) -> Result<Coverage, SearchError> {
    Target::try_from(*target).map(|target| target.coverage(words))
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    #[test]
    fn parse_strips_spaces_and_uppercases() {
        let target = Target::parse("ab cd\tE").unwrap();
        assert_eq!(target.text(), "ABCDE");
        assert_eq!(target.total(), 5);
    }

    #[test]
    fn parse_drops_punctuation() {
        let target = Target::parse("it's-a me!").unwrap();
        assert_eq!(target.text(), "ITSAME");
    }

    #[test]
    fn parse_all_spaces_is_invalid() {
        assert_eq!(
            Target::parse("     "),
            Err(SearchError::InvalidInput {
                input: "     ".to_string()
            })
        );
    }

    #[test]
    fn parse_non_alphabetic_is_invalid() {
        assert!(Target::parse("123 !?").is_err());
        assert!(Target::parse("").is_err());
    }

    #[test]
    fn coverage_perfect_triple() {
        let target = Target::parse("ABCDE FGHIJ KLMNO").unwrap();
        let combo = words(&["ABCDE", "FGHIJ", "KLMNO"]);

        let result = target.coverage(&combo);
        assert!((result.percentage - 100.0).abs() < f64::EPSILON);
        assert!(result.is_perfect());
        assert!(result.remaining.is_empty());
    }

    #[test]
    fn coverage_partial_reports_missing() {
        let target = Target::parse("AAB").unwrap();
        let combo = words(&["AXXXX"]);

        let result = target.coverage(&combo);
        let expected = 100.0 / 3.0;
        assert!((result.percentage - expected).abs() < 1e-9);
        assert_eq!(result.remaining, LetterMultiset::from_text("AB"));
        assert!(!result.is_perfect());
    }

    #[test]
    fn coverage_duplicates_are_not_over_reported() {
        // Three A's supplied, only one needed
        let target = Target::parse("AB").unwrap();
        let combo = words(&["AAAAA", "AZZZZ", "AYYYY"]);

        let result = target.coverage(&combo);
        assert!((result.percentage - 50.0).abs() < f64::EPSILON);
        assert_eq!(result.remaining, LetterMultiset::from_text("B"));
    }

    #[test]
    fn coverage_no_overlap_is_zero() {
        let target = Target::parse("ABC").unwrap();
        let combo = words(&["XXXXX", "YYYYY", "ZZZZZ"]);

        let result = target.coverage(&combo);
        assert!(result.percentage.abs() < f64::EPSILON);
        assert_eq!(result.remaining, *target.letters());
    }

    #[test]
    fn coverage_is_bounded_and_perfect_iff_empty() {
        let target = Target::parse("CHILL EAT THEATRE").unwrap();
        let pool = words(&["CHEAT", "LITHE", "TATER", "LLAMA", "ZESTY", "HALLE"]);

        for a in &pool {
            for b in &pool {
                for c in &pool {
                    let result = target.coverage([a, b, c]);
                    assert!((0.0..=100.0).contains(&result.percentage));
                    assert_eq!(
                        result.is_perfect(),
                        (result.percentage - 100.0).abs() < f64::EPSILON
                    );
                    assert!(result.remaining.letters().all(|(_, count)| count > 0));
                }
            }
        }
    }

    #[test]
    fn coverage_is_repeatable() {
        let target = Target::parse("CHILL EAT THEATRE").unwrap();
        let combo = words(&["CHEAT", "LITHE", "TATER"]);

        assert_eq!(target.coverage(&combo), target.coverage(&combo));
    }

    #[test]
    fn free_coverage_rejects_empty_target() {
        let combo = words(&["ABCDE"]);
        let result = coverage(&combo, &LetterMultiset::EMPTY);
        assert!(matches!(result, Err(SearchError::InvalidInput { .. })));
    }

    #[test]
    fn free_coverage_matches_target_coverage() {
        let target = Target::parse("ABCDE FGHIJ").unwrap();
        let combo = words(&["ABCDE", "FGHXX"]);

        let result = coverage(&combo, target.letters()).unwrap();
        assert_eq!(result, target.coverage(&combo));
    }

    #[test]
    fn search_error_display() {
        let err = SearchError::InvalidInput {
            input: "  ".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid target \"  \": it contains no letters");
    }
}
