//! Display functions for command results

use super::formatters::{coverage_bar, format_words, preview_words};
use crate::commands::{CandidateReport, CheckResult};
use crate::core::{Coverage, Target, Word};
use crate::search::{SearchOutcome, SearchStatus};
use colored::Colorize;
use indicatif::HumanCount;

const CANDIDATE_PREVIEW: usize = 20;

/// Print the normalized target and its letter tally
pub fn print_target_summary(target: &Target) {
    println!("Target string: {}", target.text().bright_yellow().bold());
    println!("Target letters: {}", target.letters());
    println!("Total letters needed: {}", target.total());
    println!();
}

/// Print how many candidates were found and a preview of them
pub fn print_candidates(candidates: &[&Word], word_length: usize) {
    println!(
        "Found {} words with exactly {word_length} matching letters:",
        HumanCount(candidates.len() as u64)
    );
    println!("{}", preview_words(candidates, CANDIDATE_PREVIEW));
    println!();
}

/// Print a full search report
///
/// Lists every perfect match if there is one, otherwise the `top` best results with
/// the letters they leave uncovered.
pub fn print_search_outcome(outcome: &SearchOutcome<'_>, top: usize, word_length: usize) {
    if let SearchStatus::InsufficientCandidates { .. } = outcome.status {
        println!(
            "{}",
            format!(
                "Not enough words with {word_length} matching letters to form a combination!"
            )
            .red()
        );
        return;
    }

    println!("{}", "=".repeat(50));
    println!("{}", "SEARCH RESULTS:".bright_cyan().bold());
    println!(
        "Total combinations searched: {}",
        HumanCount(outcome.combinations_evaluated())
    );
    if let SearchStatus::Cancelled { evaluated } = outcome.status {
        println!(
            "{}",
            format!(
                "Search cancelled after {} of {} combinations; results are incomplete",
                HumanCount(evaluated),
                HumanCount(outcome.combinations_possible())
            )
            .yellow()
        );
    }
    println!(
        "Perfect matches (100% coverage): {}",
        outcome.perfect_matches().len()
    );
    println!();

    let perfect = outcome.perfect_matches();
    if perfect.is_empty() {
        println!("No perfect matches found. Top {top} results:");
        for (i, result) in outcome.results.iter().take(top).enumerate() {
            println!(
                "{:2}. {} - {:.1}% coverage",
                i + 1,
                format_words(result.words),
                result.percentage()
            );
            if !result.remaining().is_empty() {
                println!("    Missing: {}", result.remaining());
            }
        }
    } else {
        println!("{}", "All perfect matches (100% coverage):".green().bold());
        for (i, result) in perfect.iter().enumerate() {
            println!("{:3}. {}", i + 1, format_words(result.words).green());
        }
    }
}

/// Print the highest-ranked combination
pub fn print_best(outcome: &SearchOutcome<'_>, raw_target: &str) {
    let Some(best) = outcome.best() else {
        return;
    };

    println!("\n{}", "=".repeat(50));
    println!(
        "BEST combination for '{}':",
        raw_target.bright_yellow().bold()
    );
    for (i, word) in best.words.iter().enumerate() {
        println!("{}. {}", i + 1, word);
    }
    print_coverage(&best.coverage);
}

fn print_coverage(coverage: &Coverage) {
    let line = format!("{:.1}%", coverage.percentage);
    let colored_line = if coverage.is_perfect() {
        line.green().bold()
    } else {
        line.yellow()
    };
    println!(
        "Coverage: [{}] {colored_line}",
        coverage_bar(coverage.percentage, 30)
    );
    if !coverage.remaining.is_empty() {
        println!("Missing letters: {}", coverage.remaining);
    }
}

/// Print every candidate word for a target
pub fn print_candidate_report(report: &CandidateReport<'_>) {
    print_target_summary(&report.target);
    println!(
        "Found {} words with exactly {} matching letters ({} combinations):",
        HumanCount(report.candidates.len() as u64),
        report.word_length,
        HumanCount(report.combinations)
    );
    for chunk in report.candidates.chunks(10) {
        let line: Vec<&str> = chunk.iter().map(|w| w.text()).collect();
        println!("  {}", line.join(" "));
    }
}

/// Print the score of one user-chosen combination
pub fn print_check_result(result: &CheckResult) {
    print_target_summary(&result.target);

    for (word, usable) in result.words.iter().zip(&result.usable) {
        let marker = if *usable == result.word_length {
            "✓".green()
        } else {
            "✗".red()
        };
        println!(
            "  {marker} {word}: {usable}/{} usable letters",
            result.word_length
        );
    }
    println!();

    print_coverage(&result.coverage);
}
