//! Word lists
//!
//! The dictionary is read from a plain text file with one word per line.

pub mod loader;

pub use loader::{WordList, load_from_file, parse_word_list, words_from_slice};

/// Word list read when no `--wordlist` is given
pub const DEFAULT_WORDLIST: &str = "valid-wordle-answers.txt";
