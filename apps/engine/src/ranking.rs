//! Search-result ranking.
//!
//! Relevance comes from query similarity, then a popularity boost from
//! votes and reply count promotes established answers. The boost is
//! deliberately unbounded so a heavily-voted post can outrank a slightly
//! better textual match.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::PostRecord;
use crate::similarity::calculate_similarity;

/// Score contribution per vote.
const VOTE_BOOST: f64 = 0.1;

/// Score contribution per reply.
const REPLY_BOOST: f64 = 0.05;

/// A post with its combined search score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedPost {
    pub post: PostRecord,
    /// round((similarity + popularity boost) * 100)
    pub search_score: u32,
}

/// Rank posts against a search query.
///
/// An empty query or empty post set short-circuits: the input comes back
/// in its original order with a zero score, the typed analogue of
/// returning it unchanged. Otherwise posts are sorted by descending
/// score; the sort is stable, so ties keep input order.
pub fn rank_search_results(query: &str, posts: &[PostRecord]) -> Vec<RankedPost> {
    if query.trim().is_empty() || posts.is_empty() {
        return posts
            .iter()
            .map(|post| RankedPost {
                post: post.clone(),
                search_score: 0,
            })
            .collect();
    }

    let mut ranked: Vec<RankedPost> = posts
        .iter()
        .map(|post| {
            let similarity = calculate_similarity(query, &post.full_text());
            let popularity_boost =
                f64::from(post.votes) * VOTE_BOOST + post.reply_count() as f64 * REPLY_BOOST;
            let final_score = similarity + popularity_boost;

            RankedPost {
                post: post.clone(),
                search_score: (final_score * 100.0).round() as u32,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.search_score.cmp(&a.search_score));

    debug!(query, results = ranked.len(), "search ranking complete");
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crate::models::ReplyRecord;

    fn post(id: &str, title: &str, content: &str, votes: u32, replies: usize) -> PostRecord {
        PostRecord {
            id: id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            tags: vec![],
            votes,
            replies: (0..replies)
                .map(|_| ReplyRecord {
                    content: "a reply".to_string(),
                    author: "Anonymous".to_string(),
                    created_at: Utc::now(),
                })
                .collect(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_popular_exact_match_ranks_first() {
        let obscure = post("p1", "Gardening tips", "How to grow tomatoes", 0, 0);
        let popular = post("p2", "React hooks guide", "useState and useEffect explained", 50, 4);

        let ranked = rank_search_results("react hooks", &[obscure, popular]);
        assert_eq!(ranked[0].post.id, "p2");
        assert!(ranked[0].search_score > ranked[1].search_score);
    }

    #[test]
    fn test_popularity_can_dominate_similarity() {
        let relevant = post("p1", "react hooks", "react hooks", 0, 0);
        let popular = post("p2", "completely unrelated topic", "nothing in common", 100, 0);

        let ranked = rank_search_results("react hooks", &[relevant, popular]);
        // 100 votes contribute 10.0 against a maximum similarity of 1.0
        assert_eq!(ranked[0].post.id, "p2");
    }

    #[test]
    fn test_empty_query_preserves_input_order() {
        let a = post("p1", "first", "first post", 0, 0);
        let b = post("p2", "second", "second post", 10, 0);

        let ranked = rank_search_results("", &[a, b]);
        assert_eq!(ranked[0].post.id, "p1");
        assert_eq!(ranked[1].post.id, "p2");
        assert!(ranked.iter().all(|r| r.search_score == 0));
    }

    #[test]
    fn test_empty_posts() {
        assert!(rank_search_results("anything", &[]).is_empty());
    }

    #[test]
    fn test_ties_keep_input_order() {
        let a = post("p1", "rust traits", "rust traits", 0, 0);
        let b = post("p2", "rust traits", "rust traits", 0, 0);

        let ranked = rank_search_results("rust traits", &[a, b]);
        assert_eq!(ranked[0].post.id, "p1");
        assert_eq!(ranked[1].post.id, "p2");
    }
}
