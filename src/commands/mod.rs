//! Command implementations

pub mod candidates;
pub mod check;
pub mod find;

pub use candidates::{CandidateReport, list_candidates};
pub use check::{CheckResult, check_combination};
pub use find::{DEFAULT_TARGET, FindConfig, run_find};
