//! Combination search command
//!
//! Runs the full search for a target phrase with terminal progress reporting.

use crate::core::{SearchError, Target, Word};
use crate::output::ProgressObserver;
use crate::output::display::print_target_summary;
use crate::search::{SearchConfig, SearchOutcome, search_target};

/// Phrase searched for when the user enters nothing
pub const DEFAULT_TARGET: &str = "CHILL EAT THEATRE";

/// Configuration for a search run
pub struct FindConfig {
    pub target: String,
    pub search: SearchConfig,
    /// Results shown when there is no perfect match
    pub top: usize,
    pub quiet: bool,
}

impl FindConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            search: SearchConfig::new(),
            top: 10,
            quiet: false,
        }
    }
}

/// Search `dictionary` for the combinations covering the configured target
///
/// Prints the target summary and candidate preview, and shows a progress bar while
/// combinations are scored.
///
/// # Errors
///
/// Returns `SearchError::InvalidInput` if the target contains no letters.
pub fn run_find<'a>(
    config: &FindConfig,
    dictionary: &'a [Word],
) -> Result<SearchOutcome<'a>, SearchError> {
    let target = Target::parse(&config.target)?;
    print_target_summary(&target);

    let observer = ProgressObserver::new(config.search.word_length, config.quiet);
    Ok(search_target(target, dictionary, &config.search, &observer))
}
