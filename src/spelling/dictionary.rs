//! Dictionary management for spelling suggestion.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;

use crate::collections::open_map::Keys;
use crate::collections::open_set::OpenHashSet;
use crate::error::Result;

/// A dictionary of known words backed by an [`OpenHashSet`].
///
/// Built once at startup and read-only afterwards from the suggestion
/// engine's perspective.
#[derive(Debug, Clone)]
pub struct SpellingDictionary {
    words: OpenHashSet<String>,
}

impl SpellingDictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        SpellingDictionary {
            words: OpenHashSet::new(),
        }
    }

    /// Add a word to the dictionary.
    pub fn add_word<S: Into<String>>(&mut self, word: S) {
        self.words.insert(word.into());
    }

    /// Check if a word exists in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Get the total number of words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// True if the dictionary holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Table capacity of the backing set.
    pub fn capacity(&self) -> usize {
        self.words.capacity()
    }

    /// Probe collisions incurred while the dictionary was populated.
    pub fn collision_count(&self) -> u64 {
        self.words.collision_count()
    }

    /// Iterate over the dictionary words in table-slot order.
    pub fn words(&self) -> Keys<'_, String, ()> {
        self.words.iter()
    }

    /// Load a dictionary from a text file with one word per line.
    ///
    /// Lines are trimmed of surrounding whitespace; empty lines are
    /// skipped. No further validation is applied, words pass through
    /// as written.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut dictionary = SpellingDictionary::new();
        let file = File::open(&path)?;
        let reader = BufReader::new(file);

        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                dictionary.add_word(word);
            }
        }

        info!(
            "loaded {} dictionary words from {} ({} load collisions)",
            dictionary.word_count(),
            path.as_ref().display(),
            dictionary.collision_count()
        );

        Ok(dictionary)
    }

    /// Build a dictionary from an iterator of words, for tests and
    /// embedded word lists.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut dictionary = SpellingDictionary::new();
        for word in words {
            dictionary.add_word(word);
        }
        dictionary
    }
}

impl Default for SpellingDictionary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_dictionary_basic_operations() {
        let mut dict = SpellingDictionary::new();
        assert!(!dict.contains("hello"));
        assert_eq!(dict.word_count(), 0);
        assert!(dict.is_empty());

        dict.add_word("hello");
        assert!(dict.contains("hello"));
        assert_eq!(dict.word_count(), 1);

        dict.add_word("hello");
        assert_eq!(dict.word_count(), 1);

        dict.add_word("world");
        assert_eq!(dict.word_count(), 2);
    }

    #[test]
    fn test_from_words() {
        let dict = SpellingDictionary::from_words(["cat", "cot", "at"]);
        assert_eq!(dict.word_count(), 3);
        assert!(dict.contains("cat"));
        assert!(dict.contains("cot"));
        assert!(dict.contains("at"));
        assert!(!dict.contains("ct"));
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "hello").unwrap();
        writeln!(temp_file, "  world  ").unwrap();
        writeln!(temp_file).unwrap();
        writeln!(temp_file, "hello").unwrap();
        temp_file.flush().unwrap();

        let dict = SpellingDictionary::load_from_file(temp_file.path()).unwrap();
        assert_eq!(dict.word_count(), 2);
        assert!(dict.contains("hello"));
        assert!(dict.contains("world"));
        assert!(!dict.contains(""));
    }

    #[test]
    fn test_load_from_missing_file() {
        let result = SpellingDictionary::load_from_file("/nonexistent/dictionary.txt");
        assert!(result.is_err());
    }

    #[test]
    fn test_words_iteration() {
        let dict = SpellingDictionary::from_words(["cat", "dog"]);
        let mut words: Vec<&String> = dict.words().collect();
        words.sort();
        assert_eq!(words, ["cat", "dog"]);
    }
}
