//! Duplicate and related-post discovery.
//!
//! Both run the same similarity primitive against a candidate set; they
//! differ only in threshold policy. Duplicate detection is strict because
//! a false positive blocks a legitimate post; relatedness is loose because
//! a false positive is just one extra suggestion link.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::PostRecord;
use crate::similarity::{calculate_similarity, to_percent};

/// A candidate post with its similarity to the reference text, as an
/// integer percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarPost {
    pub post: PostRecord,
    pub similarity: u32,
}

/// Default threshold for duplicate detection.
pub const DEFAULT_DUPLICATE_THRESHOLD: f64 = 0.7;

/// Fixed lower bound for relatedness, strict comparison.
pub const RELATED_MIN_SIMILARITY: f64 = 0.3;

/// Default number of related questions returned.
pub const DEFAULT_RELATED_LIMIT: usize = 5;

/// Find posts similar to a draft post.
///
/// Candidates scoring at or above `threshold` are kept, sorted by
/// descending similarity. The sort is stable: ties keep the original
/// candidate order.
pub fn find_similar_posts(
    title: &str,
    content: &str,
    candidates: &[PostRecord],
    threshold: f64,
) -> Vec<SimilarPost> {
    let draft_text = format!("{title} {content}");

    let mut matches: Vec<SimilarPost> = candidates
        .iter()
        .filter_map(|candidate| {
            let similarity = calculate_similarity(&draft_text, &candidate.full_text());
            (similarity >= threshold).then(|| SimilarPost {
                post: candidate.clone(),
                similarity: to_percent(similarity),
            })
        })
        .collect();

    matches.sort_by(|a, b| b.similarity.cmp(&a.similarity));

    debug!(
        candidates = candidates.len(),
        matches = matches.len(),
        threshold,
        "duplicate scan complete"
    );

    matches
}

/// Find questions related to an existing post.
///
/// The post itself is excluded by identifier. Anything strictly above the
/// fixed 0.3 floor qualifies; results are sorted descending and truncated
/// to `limit`.
pub fn related_questions(
    post: &PostRecord,
    candidates: &[PostRecord],
    limit: usize,
) -> Vec<SimilarPost> {
    let current_text = post.full_text();

    let mut related: Vec<SimilarPost> = candidates
        .iter()
        .filter(|candidate| candidate.id != post.id)
        .filter_map(|candidate| {
            let similarity = calculate_similarity(&current_text, &candidate.full_text());
            (similarity > RELATED_MIN_SIMILARITY).then(|| SimilarPost {
                post: candidate.clone(),
                similarity: to_percent(similarity),
            })
        })
        .collect();

    related.sort_by(|a, b| b.similarity.cmp(&a.similarity));
    related.truncate(limit);
    related
}
