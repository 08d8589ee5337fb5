//! Keyword extraction over a single-document corpus.
//!
//! With only one document the inverse-document-frequency factor is the
//! constant 1, so a term's weight reduces to its raw frequency. Short
//! tokens (<= 2 chars) are filtered out.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::similarity::tokenize;

/// A keyword with its frequency-based score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordScore {
    /// The lowercased term
    pub word: String,
    /// Term weight; raw frequency for the single-document corpus
    pub score: f64,
}

/// Default number of keywords returned.
pub const DEFAULT_TOP_KEYWORDS: usize = 5;

/// Keyword extractor for titles, bodies, and whole discussions.
pub struct KeywordExtractor;

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordExtractor {
    /// Create a new keyword extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract the top `top_n` keywords from text.
    ///
    /// Sorted by descending score; equal scores keep first-occurrence
    /// order in the text, the documented tie-break. Empty text yields
    /// nothing.
    pub fn extract(&self, text: &str, top_n: usize) -> Vec<KeywordScore> {
        let tokens = tokenize(text);

        let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
        for (position, token) in tokens.iter().enumerate() {
            if token.len() <= 2 {
                continue;
            }
            let entry = counts.entry(token.as_str()).or_insert((0, position));
            entry.0 += 1;
        }

        let mut keywords: Vec<(usize, KeywordScore)> = counts
            .into_iter()
            .map(|(word, (count, first_seen))| {
                (
                    first_seen,
                    KeywordScore {
                        word: word.to_string(),
                        score: count as f64,
                    },
                )
            })
            .collect();

        keywords.sort_by(|(pos_a, a), (pos_b, b)| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(pos_a.cmp(pos_b))
        });

        keywords
            .into_iter()
            .take(top_n)
            .map(|(_, keyword)| keyword)
            .collect()
    }

    /// Extract keywords and return just the words.
    pub fn extract_words(&self, text: &str, top_n: usize) -> Vec<String> {
        self.extract(text, top_n)
            .into_iter()
            .map(|k| k.word)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_ordering() {
        let extractor = KeywordExtractor::new();

        let keywords =
            extractor.extract("react react react hooks hooks state", DEFAULT_TOP_KEYWORDS);
        assert_eq!(keywords[0].word, "react");
        assert_eq!(keywords[0].score, 3.0);
        assert_eq!(keywords[1].word, "hooks");
        assert_eq!(keywords[2].word, "state");
    }

    #[test]
    fn test_short_tokens_filtered() {
        let extractor = KeywordExtractor::new();

        let keywords = extractor.extract("a an to the cat", DEFAULT_TOP_KEYWORDS);
        let words: Vec<&str> = keywords.iter().map(|k| k.word.as_str()).collect();
        assert_eq!(words, vec!["the", "cat"]);
    }

    #[test]
    fn test_tie_break_is_first_occurrence() {
        let extractor = KeywordExtractor::new();

        let keywords = extractor.extract("zebra apple mango", DEFAULT_TOP_KEYWORDS);
        let words: Vec<&str> = keywords.iter().map(|k| k.word.as_str()).collect();
        assert_eq!(words, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_top_n_truncation() {
        let extractor = KeywordExtractor::new();

        let keywords = extractor.extract("one two three four five six seven", 3);
        assert_eq!(keywords.len(), 3);
    }

    #[test]
    fn test_empty_text() {
        let extractor = KeywordExtractor::new();

        assert!(extractor.extract("", DEFAULT_TOP_KEYWORDS).is_empty());
        assert!(extractor.extract("!!! ...", DEFAULT_TOP_KEYWORDS).is_empty());
    }
}
