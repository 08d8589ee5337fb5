//! Content moderation heuristics.
//!
//! Toxicity detection over a fixed keyword list, plus the moderation
//! sweep that flags duplicates, toxic posts, and stale low-quality posts
//! for the admin review queue.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::discovery::find_similar_posts;
use crate::models::PostRecord;

/// Substrings that count as toxicity signals.
const TOXIC_WORDS: &[&str] = &[
    "spam",
    "scam",
    "hate",
    "abuse",
    "offensive",
    "stupid",
    "idiot",
    "dumb",
    "trash",
    "garbage",
];

/// Matches needed before confidence saturates at 100.
const SATURATION_COUNT: f64 = 3.0;

/// Similarity threshold used by the moderation sweep.
const REVIEW_DUPLICATE_THRESHOLD: f64 = 0.8;

/// Posts shorter than this with no engagement are low-quality candidates.
const LOW_QUALITY_MAX_CHARS: usize = 50;

/// Days without engagement before a short post is flagged.
const LOW_QUALITY_AGE_DAYS: i64 = 7;

/// Result of toxicity detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToxicityResult {
    pub is_toxic: bool,
    /// Confidence as a 0-100 integer
    pub confidence: u8,
    pub toxic_word_count: usize,
}

/// Why a post was flagged by the moderation sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum FlagReason {
    Duplicate {
        similar_to: PostRecord,
        similarity: u32,
    },
    Toxic {
        confidence: u8,
        toxic_word_count: usize,
    },
    LowQuality {
        reason: String,
    },
}

/// A post flagged for moderator attention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentFlag {
    pub post: PostRecord,
    #[serde(flatten)]
    pub reason: FlagReason,
}

/// Detect toxic language in text.
///
/// Counts case-insensitive substring hits from the fixed word list;
/// confidence is min(count / 3, 1) reported as 0-100. A single match
/// already crosses the 0.3 toxicity bar — observed behavior of the
/// original thresholds, kept as is.
pub fn detect_toxicity(text: &str) -> ToxicityResult {
    let lower = text.to_lowercase();
    let toxic_word_count = TOXIC_WORDS
        .iter()
        .filter(|word| lower.contains(*word))
        .count();

    let confidence = (toxic_word_count as f64 / SATURATION_COUNT).min(1.0);

    ToxicityResult {
        is_toxic: confidence > 0.3,
        confidence: (confidence * 100.0).round() as u8,
        toxic_word_count,
    }
}

/// Sweep a post collection and flag everything worth a moderator's look.
///
/// For each post: the best near-duplicate among the posts that follow it,
/// toxic language in title plus content, and short stale posts with no
/// votes or replies. `now` is passed in so the sweep stays deterministic
/// for a given input.
pub fn review_posts(posts: &[PostRecord], now: DateTime<Utc>) -> Vec<ContentFlag> {
    let mut flags = Vec::new();
    let stale_cutoff = Duration::days(LOW_QUALITY_AGE_DAYS);

    for (index, post) in posts.iter().enumerate() {
        let similar = find_similar_posts(
            &post.title,
            &post.content,
            &posts[index + 1..],
            REVIEW_DUPLICATE_THRESHOLD,
        );
        if let Some(best) = similar.into_iter().next() {
            flags.push(ContentFlag {
                post: post.clone(),
                reason: FlagReason::Duplicate {
                    similar_to: best.post,
                    similarity: best.similarity,
                },
            });
        }

        let toxicity = detect_toxicity(&post.full_text());
        if toxicity.is_toxic {
            flags.push(ContentFlag {
                post: post.clone(),
                reason: FlagReason::Toxic {
                    confidence: toxicity.confidence,
                    toxic_word_count: toxicity.toxic_word_count,
                },
            });
        }

        if post.content.len() < LOW_QUALITY_MAX_CHARS
            && post.votes == 0
            && post.replies.is_empty()
            && now - post.created_at > stale_cutoff
        {
            flags.push(ContentFlag {
                post: post.clone(),
                reason: FlagReason::LowQuality {
                    reason: "Short content with no engagement after 7 days".to_string(),
                },
            });
        }
    }

    debug!(posts = posts.len(), flags = flags.len(), "moderation sweep complete");
    flags
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn post(id: &str, title: &str, content: &str) -> PostRecord {
        PostRecord {
            id: id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            tags: vec![],
            votes: 1,
            replies: vec![],
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_clean_text_is_not_toxic() {
        let result = detect_toxicity("A perfectly reasonable question about Rust traits");
        assert!(!result.is_toxic);
        assert_eq!(result.confidence, 0);
        assert_eq!(result.toxic_word_count, 0);
    }

    #[test]
    fn test_single_match_flags() {
        // One hit gives confidence 33, already past the 0.3 bar
        let result = detect_toxicity("this answer is garbage");
        assert!(result.is_toxic);
        assert_eq!(result.confidence, 33);
        assert_eq!(result.toxic_word_count, 1);
    }

    #[test]
    fn test_confidence_saturates() {
        let result = detect_toxicity("spam scam hate abuse stupid");
        assert!(result.is_toxic);
        assert_eq!(result.confidence, 100);
        assert_eq!(result.toxic_word_count, 5);
    }

    #[test]
    fn test_empty_text() {
        let result = detect_toxicity("");
        assert!(!result.is_toxic);
        assert_eq!(result.confidence, 0);
    }

    #[test]
    fn test_case_insensitive_matching() {
        let result = detect_toxicity("STOP POSTING SPAM");
        assert!(result.is_toxic);
    }

    #[test]
    fn test_review_flags_duplicates_forward_only() {
        let a = post("p1", "How to parse JSON in Rust", "serde json example needed please");
        let b = post("p2", "How to parse JSON in Rust", "serde json example needed please");

        let flags = review_posts(&[a, b], Utc::now());

        let duplicates: Vec<&ContentFlag> = flags
            .iter()
            .filter(|f| matches!(f.reason, FlagReason::Duplicate { .. }))
            .collect();
        // Only the earlier post points at the later one, never both ways
        assert_eq!(duplicates.len(), 1);
        assert_eq!(duplicates[0].post.id, "p1");
    }

    #[test]
    fn test_review_flags_toxic_posts() {
        let toxic = post("p1", "You are all idiots", "what a trash forum");

        let flags = review_posts(&[toxic], Utc::now());
        assert!(flags
            .iter()
            .any(|f| matches!(f.reason, FlagReason::Toxic { .. })));
    }

    #[test]
    fn test_review_flags_stale_short_posts() {
        let mut stale = post("p1", "help", "short");
        stale.votes = 0;
        stale.created_at = Utc::now() - Duration::days(10);

        let flags = review_posts(&[stale], Utc::now());
        assert!(flags
            .iter()
            .any(|f| matches!(f.reason, FlagReason::LowQuality { .. })));
    }

    #[test]
    fn test_review_ignores_fresh_short_posts() {
        let mut fresh = post("p1", "help", "short");
        fresh.votes = 0;

        let flags = review_posts(&[fresh], Utc::now());
        assert!(flags.is_empty());
    }
}
