//! Word Triples - CLI
//!
//! Finds combinations of exactly three words whose letters spell out a target phrase,
//! searching exhaustively over the words that match it best.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io::{self, Write};
use word_triples::{
    commands::{DEFAULT_TARGET, FindConfig, check_combination, list_candidates, run_find},
    core::Word,
    output::{print_best, print_candidate_report, print_check_result, print_search_outcome},
    search::{DEFAULT_WORD_LENGTH, SearchConfig},
    wordlists::{DEFAULT_WORDLIST, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "word_triples",
    about = "Find three-word combinations that spell out a target phrase",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line
    #[arg(short = 'w', long, global = true, default_value = DEFAULT_WORDLIST)]
    wordlist: String,

    /// Usable letters a word needs to become a candidate
    #[arg(short = 'l', long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    word_length: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for the best combinations (default; prompts for a target if none given)
    Find {
        /// The phrase to spell out
        target: Vec<String>,

        /// Number of results shown when there is no perfect match
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,

        /// Score combinations on all cores
        #[arg(short, long)]
        parallel: bool,

        /// Treat repeated dictionary words as one candidate
        #[arg(long)]
        dedup: bool,

        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,
    },

    /// List the candidate words for a target
    Candidates {
        /// The phrase to spell out
        #[arg(required = true)]
        target: Vec<String>,

        /// Treat repeated dictionary words as one candidate
        #[arg(long)]
        dedup: bool,
    },

    /// Score three specific words against a target
    Check {
        /// The phrase to spell out (quote it if it has spaces)
        target: String,

        /// The three words to score
        #[arg(required = true)]
        words: Vec<String>,
    },
}

/// Load the dictionary named by the -w flag
fn load_dictionary(path: &str) -> Result<Vec<Word>> {
    let list = load_from_file(path).with_context(|| format!("Could not read word list {path}"))?;

    println!("Loaded {} words from word list", list.words.len());
    if list.skipped > 0 {
        println!(
            "{}",
            format!("Skipped {} invalid entries", list.skipped).yellow()
        );
    }
    println!();

    Ok(list.words)
}

/// Join target words from the command line, or prompt for a target
fn read_target(args: &[String]) -> Result<String> {
    if !args.is_empty() {
        return Ok(args.join(" "));
    }

    print!("Enter the string to spell out (or press Enter for '{DEFAULT_TARGET}'): ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let line = line.trim();

    Ok(if line.is_empty() {
        DEFAULT_TARGET.to_string()
    } else {
        line.to_string()
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Find mode (with a prompt) if no command given
    let command = cli.command.unwrap_or(Commands::Find {
        target: Vec::new(),
        top: 10,
        parallel: false,
        dedup: false,
        quiet: false,
    });

    match command {
        Commands::Find {
            target,
            top,
            parallel,
            dedup,
            quiet,
        } => {
            let config = SearchConfig::new()
                .with_word_length(cli.word_length)
                .with_parallel(parallel)
                .with_dedup(dedup);
            run_find_command(&cli.wordlist, &target, config, top, quiet)
        }
        Commands::Candidates { target, dedup } => {
            let config = SearchConfig::new()
                .with_word_length(cli.word_length)
                .with_dedup(dedup);
            run_candidates_command(&cli.wordlist, &target, &config)
        }
        Commands::Check { target, words } => run_check_command(&target, &words, cli.word_length),
    }
}

fn run_find_command(
    wordlist: &str,
    target_args: &[String],
    search: SearchConfig,
    top: usize,
    quiet: bool,
) -> Result<()> {
    let dictionary = load_dictionary(wordlist)?;
    let target = read_target(target_args)?;

    let mut config = FindConfig::new(target);
    config.search = search;
    config.top = top;
    config.quiet = quiet;

    let outcome = run_find(&config, &dictionary)?;
    print_search_outcome(&outcome, config.top, search.word_length);
    print_best(&outcome, &config.target);
    Ok(())
}

fn run_candidates_command(
    wordlist: &str,
    target_args: &[String],
    config: &SearchConfig,
) -> Result<()> {
    let dictionary = load_dictionary(wordlist)?;
    let report = list_candidates(&target_args.join(" "), &dictionary, config)?;
    print_candidate_report(&report);
    Ok(())
}

fn run_check_command(target: &str, words: &[String], word_length: usize) -> Result<()> {
    let result = check_combination(target, words, word_length).map_err(|e| anyhow::anyhow!(e))?;
    print_check_result(&result);
    Ok(())
}
