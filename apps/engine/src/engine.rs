//! Analysis engine facade.
//!
//! Owns the individual analyzers and exposes the whole API surface
//! through one handle, so a request handler constructs a single value
//! and calls into it. Every method is a pure function of its inputs;
//! the engine holds no mutable state and can be shared freely across
//! threads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::info;

use crate::assistant::{AssistantContext, AssistantResponse, ForumAssistant};
use crate::discovery::{self, SimilarPost};
use crate::keywords::{KeywordExtractor, KeywordScore, DEFAULT_TOP_KEYWORDS};
use crate::models::PostRecord;
use crate::moderation::{self, ContentFlag, ToxicityResult};
use crate::ranking::{self, RankedPost};
use crate::sentiment::{SentimentAnalyzer, SentimentResult};
use crate::similarity;
use crate::summary::{self, DiscussionSummary};
use crate::tags::{TagExtractor, DEFAULT_MAX_TAGS};

/// Everything the engine can say about a draft post in one pass:
/// suggested tags, keywords, sentiment, and a toxicity verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostAnalysis {
    pub suggested_tags: Vec<String>,
    pub keywords: Vec<KeywordScore>,
    pub sentiment: SentimentResult,
    pub toxicity: ToxicityResult,
    /// Wall-clock analysis time; informational only
    pub processing_time_ms: u64,
}

/// Stateless text-analysis engine for the forum backend.
pub struct AnalysisEngine {
    tag_extractor: TagExtractor,
    keyword_extractor: KeywordExtractor,
    sentiment_analyzer: SentimentAnalyzer,
    assistant: ForumAssistant,
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisEngine {
    /// Create a new engine with all analyzers ready.
    pub fn new() -> Self {
        Self {
            tag_extractor: TagExtractor::new(),
            keyword_extractor: KeywordExtractor::new(),
            sentiment_analyzer: SentimentAnalyzer::new(),
            assistant: ForumAssistant::new(),
        }
    }

    /// Run the full analysis pass over a draft post.
    pub fn analyze_post(&self, title: &str, content: &str) -> PostAnalysis {
        let start = Instant::now();
        let text = format!("{title} {content}");

        let analysis = PostAnalysis {
            suggested_tags: self.tag_extractor.extract(&text, DEFAULT_MAX_TAGS),
            keywords: self.keyword_extractor.extract(&text, DEFAULT_TOP_KEYWORDS),
            sentiment: self.sentiment_analyzer.analyze(&text),
            toxicity: moderation::detect_toxicity(&text),
            processing_time_ms: start.elapsed().as_millis() as u64,
        };

        info!(
            tags = analysis.suggested_tags.len(),
            keywords = analysis.keywords.len(),
            toxic = analysis.toxicity.is_toxic,
            "post analysis complete"
        );
        analysis
    }

    /// TF-IDF cosine similarity between two texts, in [0,1].
    pub fn calculate_similarity(&self, text_a: &str, text_b: &str) -> f64 {
        similarity::calculate_similarity(text_a, text_b)
    }

    /// Suggest up to `max_tags` tags for a text.
    pub fn extract_tags(&self, text: &str, max_tags: usize) -> Vec<String> {
        self.tag_extractor.extract(text, max_tags)
    }

    /// Extract the top `top_n` keywords from a text.
    pub fn extract_keywords(&self, text: &str, top_n: usize) -> Vec<KeywordScore> {
        self.keyword_extractor.extract(text, top_n)
    }

    /// Classify the sentiment of a text.
    pub fn analyze_sentiment(&self, text: &str) -> SentimentResult {
        self.sentiment_analyzer.analyze(text)
    }

    /// Detect toxic language in a text.
    pub fn detect_toxicity(&self, text: &str) -> ToxicityResult {
        moderation::detect_toxicity(text)
    }

    /// Find likely duplicates of a draft post among existing candidates.
    pub fn find_similar_posts(
        &self,
        title: &str,
        content: &str,
        candidates: &[PostRecord],
        threshold: f64,
    ) -> Vec<SimilarPost> {
        discovery::find_similar_posts(title, content, candidates, threshold)
    }

    /// Find questions related to an existing post.
    pub fn related_questions(
        &self,
        post: &PostRecord,
        candidates: &[PostRecord],
        limit: usize,
    ) -> Vec<SimilarPost> {
        discovery::related_questions(post, candidates, limit)
    }

    /// Rank posts against a search query.
    pub fn rank_search_results(&self, query: &str, posts: &[PostRecord]) -> Vec<RankedPost> {
        ranking::rank_search_results(query, posts)
    }

    /// Summarize a discussion thread.
    pub fn summarize_discussion(&self, post: &PostRecord) -> DiscussionSummary {
        summary::summarize_discussion(post)
    }

    /// Sweep posts for the admin moderation queue.
    pub fn review_posts(&self, posts: &[PostRecord], now: DateTime<Utc>) -> Vec<ContentFlag> {
        moderation::review_posts(posts, now)
    }

    /// Answer an assistant question from the supplied context.
    pub fn assistant_response(
        &self,
        question: &str,
        context: &AssistantContext,
    ) -> AssistantResponse {
        self.assistant.respond(question, context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_post_bundles_everything() {
        let engine = AnalysisEngine::new();

        let analysis = engine.analyze_post(
            "Python Django deployment help",
            "My Django app crashes on deploy, great framework otherwise",
        );

        assert!(analysis.suggested_tags.contains(&"python".to_string()));
        assert!(!analysis.keywords.is_empty());
        assert!(!analysis.toxicity.is_toxic);
    }

    #[test]
    fn test_engine_is_deterministic() {
        let engine = AnalysisEngine::new();
        let text = "React hooks question about state";

        let first = engine.extract_keywords(text, 5);
        let second = engine.extract_keywords(text, 5);
        assert_eq!(first, second);

        assert_eq!(
            engine.calculate_similarity(text, "React state"),
            engine.calculate_similarity(text, "React state"),
        );
    }

    #[test]
    fn test_delegation_matches_free_functions() {
        let engine = AnalysisEngine::new();

        assert_eq!(
            engine.calculate_similarity("a b c", "a b c"),
            similarity::calculate_similarity("a b c", "a b c")
        );
        assert_eq!(
            engine.detect_toxicity("no bad words"),
            moderation::detect_toxicity("no bad words")
        );
    }
}
