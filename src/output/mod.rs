//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;
mod progress;

pub use display::{print_best, print_candidate_report, print_check_result, print_search_outcome};
pub use progress::ProgressObserver;
