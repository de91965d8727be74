//! Letter multiset arithmetic
//!
//! A `LetterMultiset` counts how many times each letter A-Z occurs in a piece of text.
//! It is built once and never edited in place: every operation that "changes" a
//! multiset (summing the letters of several words, subtracting used letters from a
//! target) returns a fresh value.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

const ALPHABET: usize = 26;

/// Occurrence counts for the letters A-Z
///
/// Absent letters have a count of zero; iteration only ever yields letters with a
/// positive count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterMultiset {
    counts: [u32; ALPHABET],
}

#[inline]
const fn slot(letter: u8) -> Option<usize> {
    match letter {
        b'A'..=b'Z' => Some((letter - b'A') as usize),
        b'a'..=b'z' => Some((letter - b'a') as usize),
        _ => None,
    }
}

impl LetterMultiset {
    /// The empty multiset
    pub const EMPTY: Self = Self {
        counts: [0; ALPHABET],
    };

    /// Count the letters of `text`
    ///
    /// Callers are expected to have normalized the text already (see
    /// [`Target::parse`](super::Target::parse)); characters outside
    /// the A-Z alphabet carry no letter and are not counted.
    ///
    /// # Examples
    /// ```
    /// use word_triples::core::LetterMultiset;
    ///
    /// let letters = LetterMultiset::from_text("THEATRE");
    /// assert_eq!(letters.count(b'T'), 2);
    /// assert_eq!(letters.count(b'E'), 2);
    /// assert_eq!(letters.count(b'Z'), 0);
    /// assert_eq!(letters.total(), 7);
    /// ```
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut counts = [0; ALPHABET];
        for index in text.bytes().filter_map(slot) {
            counts[index] += 1;
        }
        Self { counts }
    }

    /// Number of occurrences of `letter` (case-insensitive)
    #[inline]
    #[must_use]
    pub fn count(&self, letter: u8) -> u32 {
        slot(letter).map_or(0, |index| self.counts[index])
    }

    /// Total number of letters, counting repeats
    #[inline]
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Number of distinct letters present
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&count| count > 0).count()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&count| count == 0)
    }

    /// Iterate over `(letter, count)` pairs in alphabetical order, skipping absent letters
    pub fn letters(&self) -> impl Iterator<Item = (char, u32)> + '_ {
        self.counts
            .iter()
            .zip('A'..='Z')
            .filter(|&(&count, _)| count > 0)
            .map(|(&count, letter)| (letter, count))
    }

    /// How many letters of `self` can be spent against `supply`
    ///
    /// Sums `min(self[letter], supply[letter])` over all letters, so a letter that
    /// appears three times here but once in `supply` contributes one.
    ///
    /// # Examples
    /// ```
    /// use word_triples::core::LetterMultiset;
    ///
    /// let target = LetterMultiset::from_text("CHILLEATTHEATRE");
    /// assert_eq!(LetterMultiset::from_text("CHEAT").usable_against(&target), 5);
    /// assert_eq!(LetterMultiset::from_text("LLAMA").usable_against(&target), 4);
    /// ```
    #[must_use]
    pub fn usable_against(&self, supply: &Self) -> u32 {
        self.counts
            .iter()
            .zip(&supply.counts)
            .map(|(&mine, &available)| mine.min(available))
            .sum()
    }

    /// Letters of `self` left over once `used` has been taken away, floored at zero
    #[must_use]
    pub fn saturating_sub(&self, used: &Self) -> Self {
        let mut counts = self.counts;
        for (count, &taken) in counts.iter_mut().zip(&used.counts) {
            *count = count.saturating_sub(taken);
        }
        Self { counts }
    }
}

impl Add for LetterMultiset {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        for (count, &extra) in self.counts.iter_mut().zip(&other.counts) {
            *count += extra;
        }
        self
    }
}

impl<'a> Sum<&'a LetterMultiset> for LetterMultiset {
    fn sum<I: Iterator<Item = &'a LetterMultiset>>(iter: I) -> Self {
        iter.fold(Self::EMPTY, |acc, letters| acc + *letters)
    }
}

impl fmt::Display for LetterMultiset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (letter, count)) in self.letters().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{letter}: {count}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_text_counts_repeats() {
        let letters = LetterMultiset::from_text("AAAAABBBBBCCCCC");
        assert_eq!(letters.count(b'A'), 5);
        assert_eq!(letters.count(b'B'), 5);
        assert_eq!(letters.count(b'C'), 5);
        assert_eq!(letters.total(), 15);
        assert_eq!(letters.distinct(), 3);
    }

    #[test]
    fn from_text_empty() {
        let letters = LetterMultiset::from_text("");
        assert!(letters.is_empty());
        assert_eq!(letters.total(), 0);
        assert_eq!(letters, LetterMultiset::EMPTY);
    }

    #[test]
    fn non_letters_are_not_counted() {
        let letters = LetterMultiset::from_text("A-1 B!");
        assert_eq!(letters.total(), 2);
    }

    #[test]
    fn letters_skips_absent() {
        let letters = LetterMultiset::from_text("BAB");
        let pairs: Vec<_> = letters.letters().collect();
        assert_eq!(pairs, vec![('A', 1), ('B', 2)]);
    }

    #[test]
    fn usable_is_capped_by_supply() {
        let target = LetterMultiset::from_text("AB");
        let word = LetterMultiset::from_text("AAABB");
        assert_eq!(word.usable_against(&target), 2);
    }

    #[test]
    fn usable_never_exceeds_either_side() {
        let target = LetterMultiset::from_text("CHILLEATTHEATRE");
        for word in ["CHEAT", "LLAMA", "EERIE", "ZZZZZ", "TATER", "HELLO"] {
            let letters = LetterMultiset::from_text(word);
            let usable = letters.usable_against(&target);
            assert!(usable <= letters.total(), "{word}");
            assert!(usable <= target.total(), "{word}");
        }
    }

    #[test]
    fn saturating_sub_floors_at_zero() {
        let target = LetterMultiset::from_text("AAB");
        let used = LetterMultiset::from_text("AAAAC");
        let remaining = target.saturating_sub(&used);
        assert_eq!(remaining, LetterMultiset::from_text("B"));
    }

    #[test]
    fn saturating_sub_leaves_target_untouched() {
        let target = LetterMultiset::from_text("ABC");
        let _ = target.saturating_sub(&LetterMultiset::from_text("ABC"));
        assert_eq!(target.total(), 3);
    }

    #[test]
    fn sum_adds_every_occurrence() {
        let parts = [
            LetterMultiset::from_text("AAB"),
            LetterMultiset::from_text("ABC"),
        ];
        let total: LetterMultiset = parts.iter().sum();
        assert_eq!(total.count(b'A'), 3);
        assert_eq!(total.count(b'B'), 2);
        assert_eq!(total.count(b'C'), 1);
    }

    #[test]
    fn display_lists_letters_alphabetically() {
        let letters = LetterMultiset::from_text("TEAT");
        assert_eq!(letters.to_string(), "{A: 1, E: 1, T: 2}");
        assert_eq!(LetterMultiset::EMPTY.to_string(), "{}");
    }
}
