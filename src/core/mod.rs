//! Core domain types for letter coverage
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and never mutated after construction.

mod multiset;
mod target;
mod word;

pub use multiset::LetterMultiset;
pub use target::{Coverage, SearchError, Target, coverage};
pub use word::{Word, WordError};
