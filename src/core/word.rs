//! Dictionary word representation
//!
//! A Word stores an uppercase dictionary entry along with its letter multiset, which is
//! computed once so that filtering and scoring never recount letters.

use super::LetterMultiset;
use std::fmt;

/// An uppercase alphabetic dictionary word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: LetterMultiset,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and the word is uppercased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The trimmed text is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use word_triples::core::Word;
    ///
    /// let word = Word::new("cheat").unwrap();
    /// assert_eq!(word.text(), "CHEAT");
    ///
    /// assert!(Word::new("two words").is_err());
    /// assert!(Word::new("ch3at").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        // Checked before case mapping: Unicode uppercasing can turn 'ß' into "SS"
        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let text = text.to_ascii_uppercase();

        if !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let letters = LetterMultiset::from_text(&text);
        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letter multiset of the word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &LetterMultiset {
        &self.letters
    }

    /// Count how many of this word's letters can be spent against `target`
    ///
    /// Each letter contributes at most as many times as it occurs in the target.
    ///
    /// # Examples
    /// ```
    /// use word_triples::core::{LetterMultiset, Word};
    ///
    /// let target = LetterMultiset::from_text("ABCDE");
    /// assert_eq!(Word::new("ABBEY").unwrap().usable_letters(&target), 3);
    /// ```
    #[inline]
    #[must_use]
    pub fn usable_letters(&self, target: &LetterMultiset) -> usize {
        self.letters.usable_against(target) as usize
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
