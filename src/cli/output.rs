//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OrthusArgs, OutputFormat};
use crate::error::Result;

/// Result structure for a single-word check.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckResult {
    pub word: String,
    pub correct: bool,
    pub suggestions: Vec<String>,
    pub collisions: u64,
    pub duration_ms: f64,
}

/// Dictionary statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct DictionaryStats {
    pub word_count: usize,
    pub table_capacity: usize,
    pub load_factor: f64,
    pub load_collisions: u64,
}

/// Human-readable rendering for a command result.
pub trait HumanDisplay {
    fn print_human(&self);
}

impl HumanDisplay for CheckResult {
    fn print_human(&self) {
        if self.correct {
            println!("Correct spelling.");
        } else {
            println!("Incorrect spelling.");
            if self.suggestions.is_empty() {
                println!("No suggestions found.");
            } else {
                println!("Suggestions: [{}]", self.suggestions.join(", "));
            }
            println!("Number of collisions : {}", self.collisions);
        }
        println!("Lookup and suggestion took {:.2} ms.", self.duration_ms);
    }
}

impl HumanDisplay for DictionaryStats {
    fn print_human(&self) {
        println!("Number of words in the dictionary: {}", self.word_count);
        println!("Table capacity: {}", self.table_capacity);
        println!("Load factor: {:.3}", self.load_factor);
        println!(
            "Number of collisions that occurred during dictionary loading: {}",
            self.load_collisions
        );
    }
}

/// Output a result in the format requested on the command line.
pub fn output_result<T: Serialize + HumanDisplay>(result: &T, args: &OrthusArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            result.print_human();
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &OrthusArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_result_serializes() {
        let result = CheckResult {
            word: "helo".to_string(),
            correct: false,
            suggestions: vec!["hello".to_string()],
            collisions: 12,
            duration_ms: 0.5,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["word"], "helo");
        assert_eq!(json["correct"], false);
        assert_eq!(json["suggestions"][0], "hello");
    }

    #[test]
    fn test_dictionary_stats_serializes() {
        let stats = DictionaryStats {
            word_count: 100,
            table_capacity: 197,
            load_factor: 100.0 / 197.0,
            load_collisions: 40,
        };

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["word_count"], 100);
        assert_eq!(json["table_capacity"], 197);
    }
}
