//! Formatting utilities for terminal output

use crate::core::Word;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a coverage percentage as a bar
#[must_use]
pub fn coverage_bar(percentage: f64, width: usize) -> String {
    create_progress_bar(percentage, 100.0, width)
}

/// Format words as a bracketed, comma-separated list
#[must_use]
pub fn format_words<'w>(words: impl IntoIterator<Item = &'w Word>) -> String {
    let texts: Vec<&str> = words.into_iter().map(Word::text).collect();
    format!("[{}]", texts.join(", "))
}

/// Format the first `limit` words, with a trailing ellipsis when some are left out
#[must_use]
pub fn preview_words(words: &[&Word], limit: usize) -> String {
    let shown = format_words(words.iter().copied().take(limit));
    if words.len() > limit {
        format!("{shown} ...")
    } else {
        shown
    }
}
