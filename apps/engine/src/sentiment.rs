//! Lexicon-based sentiment scoring.
//!
//! An AFINN-style valence list averaged over the token count. Not a
//! model; good enough to tell a thank-you thread from a flame war.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::similarity::tokenize;

/// Word valences in the AFINN -5..=5 range.
const LEXICON: &[(&str, i8)] = &[
    // Positive
    ("amazing", 4),
    ("awesome", 4),
    ("beautiful", 3),
    ("best", 3),
    ("better", 2),
    ("brilliant", 4),
    ("clean", 2),
    ("clear", 1),
    ("correct", 3),
    ("easy", 1),
    ("excellent", 3),
    ("fantastic", 4),
    ("fixed", 1),
    ("glad", 3),
    ("good", 3),
    ("great", 3),
    ("happy", 3),
    ("helped", 2),
    ("helpful", 2),
    ("impressive", 3),
    ("interesting", 2),
    ("like", 2),
    ("liked", 2),
    ("love", 3),
    ("loved", 3),
    ("nice", 3),
    ("perfect", 3),
    ("pleased", 3),
    ("recommend", 2),
    ("resolved", 2),
    ("simple", 1),
    ("solved", 2),
    ("solid", 2),
    ("thank", 2),
    ("thanks", 2),
    ("useful", 2),
    ("welcome", 2),
    ("wonderful", 4),
    ("works", 2),
    ("worked", 2),
    ("wow", 4),
    // Negative
    ("angry", -3),
    ("annoying", -2),
    ("awful", -3),
    ("bad", -3),
    ("breaks", -2),
    ("broke", -2),
    ("broken", -2),
    ("bug", -2),
    ("buggy", -3),
    ("confused", -2),
    ("confusing", -2),
    ("crash", -2),
    ("crashes", -2),
    ("disappointed", -2),
    ("dislike", -2),
    ("dumb", -3),
    ("fail", -2),
    ("failed", -2),
    ("fails", -2),
    ("frustrated", -2),
    ("frustrating", -2),
    ("garbage", -3),
    ("hate", -3),
    ("hated", -3),
    ("horrible", -3),
    ("idiot", -3),
    ("impossible", -2),
    ("messy", -2),
    ("miss", -2),
    ("painful", -2),
    ("poor", -2),
    ("problem", -2),
    ("problems", -2),
    ("sad", -2),
    ("slow", -2),
    ("stuck", -2),
    ("stupid", -2),
    ("terrible", -3),
    ("trash", -3),
    ("ugly", -3),
    ("unhappy", -2),
    ("useless", -2),
    ("waste", -1),
    ("worse", -3),
    ("worst", -3),
    ("wrong", -2),
];

/// Classified polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

/// Result of sentiment analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// Mean valence per token, rounded to 2 decimals
    pub score: f64,
    /// Classification at the +/-0.1 thresholds
    pub sentiment: Polarity,
}

impl SentimentResult {
    /// Neutral zero result for empty input.
    fn neutral() -> Self {
        Self {
            score: 0.0,
            sentiment: Polarity::Neutral,
        }
    }
}

/// Sentiment analyzer backed by the valence lexicon.
pub struct SentimentAnalyzer {
    lexicon: HashMap<&'static str, f64>,
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentAnalyzer {
    /// Create a new sentiment analyzer.
    pub fn new() -> Self {
        let lexicon = LEXICON
            .iter()
            .map(|&(word, valence)| (word, f64::from(valence)))
            .collect();
        Self { lexicon }
    }

    /// Analyze the sentiment of text.
    ///
    /// Score is the sum of matched valences divided by the total token
    /// count. Above 0.1 is positive, below -0.1 negative, else neutral.
    /// Empty text is neutral with score 0.
    pub fn analyze(&self, text: &str) -> SentimentResult {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return SentimentResult::neutral();
        }

        let total: f64 = tokens
            .iter()
            .filter_map(|token| self.lexicon.get(token.as_str()))
            .sum();
        let score = total / tokens.len() as f64;
        let score = (score * 100.0).round() / 100.0;

        let sentiment = if score > 0.1 {
            Polarity::Positive
        } else if score < -0.1 {
            Polarity::Negative
        } else {
            Polarity::Neutral
        };

        SentimentResult { score, sentiment }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_text() {
        let analyzer = SentimentAnalyzer::new();

        let result = analyzer.analyze("Thanks, this was a great and helpful answer!");
        assert_eq!(result.sentiment, Polarity::Positive);
        assert!(result.score > 0.1);
    }

    #[test]
    fn test_negative_text() {
        let analyzer = SentimentAnalyzer::new();

        let result = analyzer.analyze("This is terrible, the build is broken and I hate it");
        assert_eq!(result.sentiment, Polarity::Negative);
        assert!(result.score < -0.1);
    }

    #[test]
    fn test_neutral_text() {
        let analyzer = SentimentAnalyzer::new();

        let result = analyzer.analyze("The function returns an integer value");
        assert_eq!(result.sentiment, Polarity::Neutral);
    }

    #[test]
    fn test_empty_text() {
        let analyzer = SentimentAnalyzer::new();

        let result = analyzer.analyze("");
        assert_eq!(result.score, 0.0);
        assert_eq!(result.sentiment, Polarity::Neutral);
    }

    #[test]
    fn test_dilution_by_length() {
        let analyzer = SentimentAnalyzer::new();

        // One positive word in a long neutral sentence averages out
        let short = analyzer.analyze("great");
        let long = analyzer
            .analyze("the great wall of china is a very long structure in the north of the country");
        assert!(short.score > long.score);
    }

    #[test]
    fn test_serialized_polarity_is_lowercase() {
        let json = serde_json::to_string(&Polarity::Positive).expect("serializable");
        assert_eq!(json, "\"positive\"");
    }
}
