//! Command implementations for the Orthus CLI.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{OrthusError, Result};
use crate::spelling::dictionary::SpellingDictionary;
use crate::spelling::suggest::Suggester;

/// Words longer than this skip suggestion generation entirely. Distance-2
/// expansion grows quadratically with word length, so this is a cost
/// control, not a correctness rule.
const MAX_QUERY_LEN: usize = 20;

/// Execute a CLI command.
pub fn execute_command(args: OrthusArgs) -> Result<()> {
    match &args.command {
        Command::Check(check_args) => check_word(check_args.clone(), &args),
        Command::Repl(repl_args) => run_repl(repl_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
    }
}

/// Check a single word against the dictionary and print suggestions.
fn check_word(args: CheckArgs, cli_args: &OrthusArgs) -> Result<()> {
    if !is_valid_query(&args.word) {
        return Err(OrthusError::invalid_argument(
            "the word must contain only letters",
        ));
    }

    let dictionary = SpellingDictionary::load_from_file(&args.dictionary)?;
    let result = evaluate_word(&dictionary, &args.word);
    output_result(&result, cli_args)
}

/// Interactive spell-checking session over stdin.
fn run_repl(args: ReplArgs, cli_args: &OrthusArgs) -> Result<()> {
    let dictionary = SpellingDictionary::load_from_file(&args.dictionary)?;

    println!(
        "Number of words in the dictionary: {}",
        dictionary.word_count()
    );
    println!(
        "Number of collisions that occurred during dictionary loading: {}",
        dictionary.collision_count()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        println!("======================================================");
        print!("Enter a word (or type 'EXIT' to quit): ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let input = line.trim();

        if input == "EXIT" {
            break;
        }

        if !is_valid_query(input) {
            println!("The input you enter must contain only letters. Try again.");
            continue;
        }

        let result = evaluate_word(&dictionary, input);
        result.print_human();

        if cli_args.verbosity() > 1 {
            println!(
                "Cumulative dictionary collisions: {}",
                dictionary.collision_count()
            );
        }
    }

    Ok(())
}

/// Show statistics about a loaded dictionary.
fn show_stats(args: StatsArgs, cli_args: &OrthusArgs) -> Result<()> {
    let dictionary = SpellingDictionary::load_from_file(&args.dictionary)?;

    let stats = DictionaryStats {
        word_count: dictionary.word_count(),
        table_capacity: dictionary.capacity(),
        load_factor: dictionary.word_count() as f64 / dictionary.capacity() as f64,
        load_collisions: dictionary.collision_count(),
    };

    output_result(&stats, cli_args)
}

/// Look a word up in the dictionary and, if absent, generate suggestions.
///
/// Words longer than [`MAX_QUERY_LEN`] short-circuit to an empty
/// suggestion list without invoking the generator.
fn evaluate_word(dictionary: &SpellingDictionary, word: &str) -> CheckResult {
    let start = Instant::now();

    if word.chars().count() > MAX_QUERY_LEN {
        return CheckResult {
            word: word.to_string(),
            correct: false,
            suggestions: Vec::new(),
            collisions: 0,
            duration_ms: start.elapsed().as_secs_f64() * 1000.0,
        };
    }

    if dictionary.contains(word) {
        return CheckResult {
            word: word.to_string(),
            correct: true,
            suggestions: Vec::new(),
            collisions: 0,
            duration_ms: start.elapsed().as_secs_f64() * 1000.0,
        };
    }

    let suggester = Suggester::new(dictionary);
    let suggestion_set = suggester.suggest(word);
    let collisions = suggestion_set.collision_count();

    let mut suggestions: Vec<String> = suggestion_set.iter().cloned().collect();
    suggestions.sort();

    CheckResult {
        word: word.to_string(),
        correct: false,
        suggestions,
        collisions,
        duration_ms: start.elapsed().as_secs_f64() * 1000.0,
    }
}

/// A query is valid when it is non-empty and contains only letters.
fn is_valid_query(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_alphabetic())
}
