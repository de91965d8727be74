//! Search configuration

/// Number of words in every combination
pub const COMBINATION_SIZE: usize = 3;

/// Usable-letter count a word needs to become a candidate
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Combinations scored between progress reports
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 10_000;

/// Tunables for a combination search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// A word is a candidate when exactly this many of its letters are usable
    pub word_length: usize,
    /// Score combinations on the rayon thread pool
    pub parallel: bool,
    /// Keep only the first occurrence of a repeated dictionary word
    pub dedup: bool,
    /// Report progress every this many combinations (0 disables reports)
    pub progress_interval: u64,
}

impl SearchConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            parallel: false,
            dedup: false,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }

    #[must_use]
    pub const fn with_word_length(mut self, word_length: usize) -> Self {
        self.word_length = word_length;
        self
    }

    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    #[must_use]
    pub const fn with_dedup(mut self, dedup: bool) -> Self {
        self.dedup = dedup;
        self
    }

    #[must_use]
    pub const fn with_progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = interval;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.word_length, 5);
        assert!(!config.parallel);
        assert!(!config.dedup);
        assert_eq!(config.progress_interval, 10_000);
    }

    #[test]
    fn builder_overrides() {
        let config = SearchConfig::new()
            .with_word_length(4)
            .with_parallel(true)
            .with_dedup(true)
            .with_progress_interval(0);

        assert_eq!(config.word_length, 4);
        assert!(config.parallel);
        assert!(config.dedup);
        assert_eq!(config.progress_interval, 0);
    }
}
