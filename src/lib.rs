//! Word Triples
//!
//! Finds every combination of three dictionary words whose letters best cover the
//! letters of a target phrase.
//!
//! # Quick Start
//!
//! ```rust
//! use word_triples::search::search;
//! use word_triples::wordlists::words_from_slice;
//!
//! let dictionary = words_from_slice(&["abcde", "fghij", "klmno", "abcdz"]);
//!
//! let outcome = search("ABCDE FGHIJ KLMNO", &dictionary).unwrap();
//! for result in outcome.perfect_matches() {
//!     println!("{:?} {:.1}%", result.texts(), result.percentage());
//! }
//! ```

// Core domain types
pub mod core;

// Combination search
pub mod search;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
