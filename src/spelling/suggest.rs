//! Edit-distance based suggestion generation.
//!
//! Candidates are enumerated by single-edit expansion (deletion,
//! substitution, insertion, adjacent transposition) over the lowercase
//! ASCII alphabet. Distance-2 suggestions compose two expansion passes,
//! with the second pass filtered through the dictionary so the candidate
//! space stays bounded by real words.

use crate::collections::open_set::OpenHashSet;
use crate::spelling::dictionary::SpellingDictionary;

/// Generates edit-distance-bounded suggestion candidates for a word,
/// filtered through a borrowed read-only dictionary.
///
/// # Examples
///
/// ```
/// use orthus::spelling::{SpellingDictionary, Suggester};
///
/// let dict = SpellingDictionary::from_words(["cat", "cot", "at"]);
/// let suggester = Suggester::new(&dict);
/// let suggestions = suggester.suggest("ct");
/// assert!(suggestions.contains("cat"));
/// ```
pub struct Suggester<'a> {
    dictionary: &'a SpellingDictionary,
}

impl<'a> Suggester<'a> {
    /// Create a suggester over the given dictionary.
    pub fn new(dictionary: &'a SpellingDictionary) -> Self {
        Suggester { dictionary }
    }

    /// Every string reachable from `word` by exactly one edit operation,
    /// unfiltered.
    pub fn edit_distance1(&self, word: &str) -> OpenHashSet<String> {
        let mut variants = OpenHashSet::new();
        self.expand(word, &mut variants, false);
        variants
    }

    /// Dictionary words within edit distance 2 of `word`.
    ///
    /// The first expansion pass is unfiltered; each first-level candidate
    /// is then checked against the dictionary and expanded once more with
    /// the dictionary filter enabled. A word reachable through multiple
    /// edit paths appears once.
    pub fn suggest(&self, word: &str) -> OpenHashSet<String> {
        let mut first_level = OpenHashSet::new();
        self.expand(word, &mut first_level, false);

        let mut suggestions = OpenHashSet::new();
        for candidate in &first_level {
            if self.dictionary.contains(candidate) {
                suggestions.insert(candidate.clone());
            }
            self.expand(candidate, &mut suggestions, true);
        }

        suggestions
    }

    /// Generate all single-edit variants of `word` into `out`.
    ///
    /// With `dictionary_only` set, a variant is admitted only when the
    /// dictionary contains it.
    fn expand(&self, word: &str, out: &mut OpenHashSet<String>, dictionary_only: bool) {
        let chars: Vec<char> = word.chars().collect();
        let len = chars.len();

        // Deletions: remove the character at each position.
        for i in 0..len {
            let candidate: String = chars[..i].iter().chain(&chars[i + 1..]).collect();
            self.admit(candidate, out, dictionary_only);
        }

        // Substitutions: replace each character with every other letter.
        for i in 0..len {
            for letter in 'a'..='z' {
                if letter != chars[i] {
                    let mut variant = chars.clone();
                    variant[i] = letter;
                    self.admit(variant.into_iter().collect(), out, dictionary_only);
                }
            }
        }

        // Insertions: insert every letter at every position including the ends.
        for i in 0..=len {
            for letter in 'a'..='z' {
                let mut variant = Vec::with_capacity(len + 1);
                variant.extend_from_slice(&chars[..i]);
                variant.push(letter);
                variant.extend_from_slice(&chars[i..]);
                self.admit(variant.into_iter().collect(), out, dictionary_only);
            }
        }

        // Transpositions: swap each pair of adjacent distinct characters.
        for i in 0..len.saturating_sub(1) {
            if chars[i] != chars[i + 1] {
                let mut variant = chars.clone();
                variant.swap(i, i + 1);
                self.admit(variant.into_iter().collect(), out, dictionary_only);
            }
        }
    }

    fn admit(&self, candidate: String, out: &mut OpenHashSet<String>, dictionary_only: bool) {
        if !dictionary_only || self.dictionary.contains(&candidate) {
            out.insert(candidate);
        }
    }
}
