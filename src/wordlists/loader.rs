//! Word list loading utilities
//!
//! Provides functions to load word lists from files or build them from string slices.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Words read from a list, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    pub words: Vec<Word>,
    /// Non-blank lines that were not valid words
    pub skipped: usize,
}

/// Parse word list text, one word per line
///
/// Blank lines are ignored; lines that are not purely alphabetic are skipped and
/// counted. Words are uppercased and duplicates are kept.
///
/// # Examples
/// ```
/// use word_triples::wordlists::parse_word_list;
///
/// let list = parse_word_list("cheat\n\nlathe\nno way\n");
/// assert_eq!(list.words.len(), 2);
/// assert_eq!(list.words[0].text(), "CHEAT");
/// assert_eq!(list.skipped, 1);
/// ```
#[must_use]
pub fn parse_word_list(content: &str) -> WordList {
    let mut list = WordList::default();

    for line in content.lines().map(str::trim).filter(|line| !line.is_empty()) {
        match Word::new(line) {
            Ok(word) => list.words.push(word),
            Err(_) => list.skipped += 1,
        }
    }

    list
}

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_triples::wordlists::loader::load_from_file;
///
/// let list = load_from_file("valid-wordle-answers.txt").unwrap();
/// println!("Loaded {} words", list.words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<WordList> {
    let content = fs::read_to_string(path)?;
    Ok(parse_word_list(&content))
}

/// Convert a string slice to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use word_triples::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["cheat", "lathe", "x-ray"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["cheat", "lathe", "theta"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "CHEAT");
        assert_eq!(words[1].text(), "LATHE");
        assert_eq!(words[2].text(), "THETA");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["cheat", "tw0", "", "lathe"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "CHEAT");
        assert_eq!(words[1].text(), "LATHE");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        let words = words_from_slice(input);
        assert_eq!(words.len(), 0);
    }

    #[test]
    fn parse_keeps_order_and_duplicates() {
        let list = parse_word_list("theta\r\ncheat\nTHETA\n");
        let texts: Vec<&str> = list.words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["THETA", "CHEAT", "THETA"]);
        assert_eq!(list.skipped, 0);
    }

    #[test]
    fn parse_counts_skipped_lines() {
        let list = parse_word_list("cheat\n12345\nhi there\n   \nlathe");
        assert_eq!(list.words.len(), 2);
        assert_eq!(list.skipped, 2);
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = std::env::temp_dir().join(format!(
            "word_triples_loader_{}.txt",
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "cheat\nlathe\n\ntheta").unwrap();
        drop(file);

        let list = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(list.words.len(), 3);
        assert_eq!(list.skipped, 0);
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(load_from_file("/nonexistent/word_triples/words.txt").is_err());
    }
}
