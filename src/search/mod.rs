//! Three-word combination search
//!
//! Filters a dictionary down to candidates, scores every candidate triple against a
//! target, and ranks the results.

mod combinations;
mod config;
mod engine;
mod observer;
mod ranking;

pub use combinations::{Triples, combination_count, triples_from};
pub use config::{COMBINATION_SIZE, DEFAULT_PROGRESS_INTERVAL, DEFAULT_WORD_LENGTH, SearchConfig};
pub use engine::{
    Combination, CoverageResult, SearchOutcome, SearchStatus, filter_candidates,
    scored_combinations, search, search_target, search_with,
};
pub use observer::{CancelFlag, NoopObserver, SearchObserver};
pub use ranking::{count_perfect, rank, rank_parallel};
