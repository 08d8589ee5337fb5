//! Discussion summarization.
//!
//! Builds one text blob from the post and its replies, then derives an
//! extractive summary (top keyword-bearing sentences), a sentiment
//! breakdown over the replies, and a contributor leaderboard.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::keywords::KeywordExtractor;
use crate::models::PostRecord;
use crate::sentiment::{Polarity, SentimentAnalyzer};
use crate::similarity::tokenize;

/// Keywords extracted from the whole discussion.
const SUMMARY_KEYWORDS: usize = 8;

/// Sentences kept in the extractive summary.
const SUMMARY_SENTENCES: usize = 3;

/// Contributors shown on the leaderboard.
const TOP_CONTRIBUTORS: usize = 5;

/// Reply counts per author.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributorStat {
    pub author: String,
    pub reply_count: usize,
}

/// Reply sentiment tallies and the overall call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentBreakdown {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    /// Strict majority of the three tallies; ties fall back to neutral
    pub overall: Polarity,
}

/// Summary of a whole discussion thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscussionSummary {
    /// Top keyword-bearing sentences joined with spaces
    pub summary: String,
    pub keywords: Vec<String>,
    pub sentiment: SentimentBreakdown,
    pub top_contributors: Vec<ContributorStat>,
    pub total_replies: usize,
    pub total_words: usize,
    /// Average reply length in characters; 0 when there are no replies
    pub avg_reply_length: usize,
}

/// Placeholder returned when there is nothing to summarize yet.
fn empty_summary() -> DiscussionSummary {
    DiscussionSummary {
        summary: "There are no replies to summarize yet.".to_string(),
        keywords: vec![],
        sentiment: SentimentBreakdown {
            positive: 0,
            negative: 0,
            neutral: 0,
            overall: Polarity::Neutral,
        },
        top_contributors: vec![],
        total_replies: 0,
        total_words: 0,
        avg_reply_length: 0,
    }
}

/// Pick the sentences that carry the most keywords.
fn extract_summary(blob: &str, keywords: &[String]) -> String {
    let keyword_set: HashSet<&str> = keywords.iter().map(String::as_str).collect();

    let mut scored: Vec<(usize, &str)> = blob
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .map(|sentence| {
            let hits = tokenize(sentence)
                .iter()
                .filter(|token| keyword_set.contains(token.as_str()))
                .count();
            (hits, sentence)
        })
        .filter(|(hits, _)| *hits > 0)
        .collect();

    // Stable sort: equally-scored sentences keep document order
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    scored
        .into_iter()
        .take(SUMMARY_SENTENCES)
        .map(|(_, sentence)| sentence)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Summarize a discussion thread.
///
/// A post with no replies returns the fixed placeholder with zeroed
/// counters; nothing here divides by the reply count without that guard.
pub fn summarize_discussion(post: &PostRecord) -> DiscussionSummary {
    if post.replies.is_empty() {
        return empty_summary();
    }

    let mut blob = post.content.clone();
    for reply in &post.replies {
        blob.push(' ');
        blob.push_str(&reply.content);
    }

    let keywords = KeywordExtractor::new().extract_words(&blob, SUMMARY_KEYWORDS);

    let analyzer = SentimentAnalyzer::new();
    let mut positive = 0;
    let mut negative = 0;
    let mut neutral = 0;
    for reply in &post.replies {
        match analyzer.analyze(&reply.content).sentiment {
            Polarity::Positive => positive += 1,
            Polarity::Negative => negative += 1,
            Polarity::Neutral => neutral += 1,
        }
    }
    let overall = if positive > negative && positive > neutral {
        Polarity::Positive
    } else if negative > positive && negative > neutral {
        Polarity::Negative
    } else {
        Polarity::Neutral
    };

    let mut reply_counts: HashMap<&str, usize> = HashMap::new();
    for reply in &post.replies {
        let author = if reply.author.is_empty() {
            "Anonymous"
        } else {
            reply.author.as_str()
        };
        *reply_counts.entry(author).or_insert(0) += 1;
    }
    let mut top_contributors: Vec<ContributorStat> = reply_counts
        .into_iter()
        .map(|(author, reply_count)| ContributorStat {
            author: author.to_string(),
            reply_count,
        })
        .collect();
    // Name breaks count ties so the leaderboard is deterministic
    top_contributors.sort_by(|a, b| {
        b.reply_count
            .cmp(&a.reply_count)
            .then_with(|| a.author.cmp(&b.author))
    });
    top_contributors.truncate(TOP_CONTRIBUTORS);

    let total_chars: usize = post.replies.iter().map(|r| r.content.chars().count()).sum();

    DiscussionSummary {
        summary: extract_summary(&blob, &keywords),
        keywords,
        sentiment: SentimentBreakdown {
            positive,
            negative,
            neutral,
            overall,
        },
        top_contributors,
        total_replies: post.replies.len(),
        total_words: blob.split_whitespace().count(),
        avg_reply_length: total_chars / post.replies.len(),
    }
}
