//! # ThreadWise Analysis Engine
//!
//! Fast, non-LLM text analysis for the ThreadWise forum backend.
//! Stateless pure functions over in-memory post snapshots; results are
//! plain serializable structures meant to go straight into a JSON API
//! response. The engine owns no persistence and performs no I/O.
//!
//! ## Components
//! - `similarity`: TF-IDF weighted cosine similarity between two texts
//! - `tags`: category keyword and entity based tag suggestion
//! - `keywords`: frequency-based keyword extraction
//! - `sentiment`: lexicon-based sentiment scoring
//! - `moderation`: toxicity detection and the admin review sweep
//! - `discovery`: duplicate and related-post detection
//! - `ranking`: similarity-plus-popularity search ranking
//! - `summary`: extractive discussion summarization
//! - `assistant`: rule-based forum assistant
//! - `engine`: facade bundling it all behind one handle

pub mod assistant;
pub mod discovery;
pub mod engine;
pub mod keywords;
pub mod models;
pub mod moderation;
pub mod ranking;
pub mod sentiment;
mod similarity;
pub mod summary;
pub mod tags;

// Re-export main types for convenience
pub use assistant::{AssistantContext, AssistantIntent, AssistantResponse, ForumAssistant};
pub use discovery::{find_similar_posts, related_questions, SimilarPost};
pub use engine::{AnalysisEngine, PostAnalysis};
pub use keywords::{KeywordExtractor, KeywordScore};
pub use models::{PostRecord, ReplyRecord, StatsSnapshot};
pub use moderation::{detect_toxicity, review_posts, ContentFlag, FlagReason, ToxicityResult};
pub use ranking::{rank_search_results, RankedPost};
pub use sentiment::{Polarity, SentimentAnalyzer, SentimentResult};
pub use similarity::calculate_similarity;
pub use summary::{summarize_discussion, DiscussionSummary};
pub use tags::TagExtractor;

#[cfg(test)]
mod tests;
