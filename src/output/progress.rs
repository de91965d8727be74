//! Terminal progress reporting for long searches

use super::display::print_candidates;
use crate::core::Word;
use crate::search::SearchObserver;
use indicatif::{HumanCount, ProgressBar, ProgressStyle};
use std::ops::ControlFlow;

/// Search observer that lists the candidates and drives a progress bar
pub struct ProgressObserver {
    bar: ProgressBar,
    word_length: usize,
}

impl ProgressObserver {
    /// Create an observer; a `quiet` observer still lists candidates but draws no bar
    ///
    /// # Panics
    ///
    /// Panics if the progress bar template fails to parse (it is a fixed string).
    #[must_use]
    pub fn new(word_length: usize, quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::new(0);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template(
                        "{spinner:.green} [{bar:40.cyan/blue}] {human_pos}/{human_len} ({percent}%) | {eta}",
                    )
                    .unwrap()
                    .progress_chars("█▓▒░"),
            );
            bar
        };

        Self { bar, word_length }
    }
}

impl SearchObserver for ProgressObserver {
    fn candidates_found(&self, candidates: &[&Word], combinations: u64) {
        print_candidates(candidates, self.word_length);

        if combinations > 0 {
            println!(
                "Searching through {} choose 3 = {} combinations...",
                HumanCount(candidates.len() as u64),
                HumanCount(combinations)
            );
            println!();
            self.bar.set_length(combinations);
            self.bar.reset();
        }
    }

    fn progress(&self, evaluated: u64, _total: u64) -> ControlFlow<()> {
        self.bar.set_position(evaluated);
        ControlFlow::Continue(())
    }

    fn finished(&self, evaluated: u64) {
        self.bar.set_position(evaluated);
        self.bar.finish_and_clear();
    }
}
