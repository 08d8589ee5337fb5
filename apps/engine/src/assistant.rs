//! Rule-based forum assistant.
//!
//! Not a model: a cascade of keyword checks against the lowercased
//! question, evaluated in fixed priority order. The first matching intent
//! wins and renders a canned or templated answer from whatever slice of
//! context the caller supplied.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::debug;

use crate::models::{PostRecord, StatsSnapshot};

/// Technology terms the topic-search branch recognizes, the tag table
/// minus the generic forum words that would hijack help questions.
const TOPIC_TERMS: &[&str] = &[
    "javascript",
    "typescript",
    "node",
    "nodejs",
    "react",
    "vue",
    "angular",
    "python",
    "django",
    "flask",
    "pandas",
    "numpy",
    "tensorflow",
    "java",
    "spring",
    "hibernate",
    "maven",
    "gradle",
    "html",
    "css",
    "frontend",
    "backend",
    "fullstack",
    "api",
    "rest",
    "graphql",
    "sql",
    "mysql",
    "postgresql",
    "mongodb",
    "database",
    "nosql",
    "android",
    "ios",
    "flutter",
    "docker",
    "kubernetes",
    "aws",
    "azure",
    "cloud",
    "machine learning",
    "rust",
];

/// Follow-up chips offered alongside the default menu.
const DEFAULT_SUGGESTIONS: &[&str] = &[
    "What are the trending topics?",
    "Show me popular posts",
    "Find posts about React",
    "What's new today?",
];

/// Word following "about <term>" in a topic question.
static TOPIC_AFTER_ABOUT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\babout\s+([a-z0-9+#.-]+)").expect("valid about regex"));

/// Word following "find <term>"; checked after the "about" form so that
/// "find me something about x" extracts x, not "me".
static TOPIC_AFTER_FIND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bfind\s+([a-z0-9+#.-]+)").expect("valid find regex"));

/// Posts returned by the list-shaped branches.
const MAX_LISTED_POSTS: usize = 5;

/// Detected assistant intent, in cascade priority order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssistantIntent {
    Trending,
    TopicSearch { term: String },
    Recent,
    Help,
    Stats,
    Tags,
    General,
}

/// Caller-assembled context for the assistant. Every field is optional;
/// each branch tolerates the absence of the one it reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssistantContext {
    pub posts: Option<Vec<PostRecord>>,
    pub stats: Option<StatsSnapshot>,
    pub tags: Option<Vec<String>>,
}

/// The assistant's reply: templated text plus optional post list and
/// follow-up suggestion chips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantResponse {
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posts: Option<Vec<PostRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

impl AssistantResponse {
    fn text(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            posts: None,
            suggestions: None,
        }
    }
}

/// Rule-based assistant over the forum's posts, stats, and tags.
pub struct ForumAssistant;

impl Default for ForumAssistant {
    fn default() -> Self {
        Self::new()
    }
}

impl ForumAssistant {
    /// Create a new assistant.
    pub fn new() -> Self {
        Self
    }

    /// Detect the intent of a question. First match in priority order wins.
    pub fn detect_intent(&self, question: &str) -> AssistantIntent {
        let q = question.to_lowercase();

        if q.contains("trending") || q.contains("popular") || q.contains("top post") {
            return AssistantIntent::Trending;
        }
        if let Some(term) = self.extract_topic(&q) {
            return AssistantIntent::TopicSearch { term };
        }
        if q.contains("new") || q.contains("recent") || q.contains("latest") || q.contains("today")
        {
            return AssistantIntent::Recent;
        }
        if q.contains("help") || q.contains("how do i") || q.contains("how to") {
            return AssistantIntent::Help;
        }
        if q.contains("stats") || q.contains("statistics") || q.contains("how many") {
            return AssistantIntent::Stats;
        }
        if q.contains("tag") {
            return AssistantIntent::Tags;
        }
        AssistantIntent::General
    }

    /// Pull a topic term out of a lowercased question: a known technology
    /// name, or whatever follows "about"/"find".
    fn extract_topic(&self, q: &str) -> Option<String> {
        if let Some(term) = TOPIC_TERMS.iter().find(|term| q.contains(*term)) {
            return Some((*term).to_string());
        }
        TOPIC_AFTER_ABOUT
            .captures(q)
            .or_else(|| TOPIC_AFTER_FIND.captures(q))
            .map(|caps| caps[1].to_string())
    }

    /// Answer a question using whatever context the caller supplied.
    pub fn respond(&self, question: &str, context: &AssistantContext) -> AssistantResponse {
        let intent = self.detect_intent(question);
        debug!(?intent, "assistant intent detected");

        match intent {
            AssistantIntent::Trending => self.trending(context),
            AssistantIntent::TopicSearch { term } => self.topic_search(&term, context),
            AssistantIntent::Recent => self.recent(context),
            AssistantIntent::Help => self.help(),
            AssistantIntent::Stats => self.stats(context),
            AssistantIntent::Tags => self.tags(context),
            AssistantIntent::General => self.menu(),
        }
    }

    fn trending(&self, context: &AssistantContext) -> AssistantResponse {
        let Some(posts) = context.posts.as_deref().filter(|p| !p.is_empty()) else {
            return AssistantResponse::text(
                "I couldn't find any posts right now. Check back soon!",
            );
        };

        let mut by_votes: Vec<PostRecord> = posts.to_vec();
        by_votes.sort_by(|a, b| b.votes.cmp(&a.votes));
        by_votes.truncate(MAX_LISTED_POSTS);

        AssistantResponse {
            answer: "Here are the most popular discussions right now:".to_string(),
            posts: Some(by_votes),
            suggestions: Some(vec![
                "What's new today?".to_string(),
                "Show me forum stats".to_string(),
            ]),
        }
    }

    fn topic_search(&self, term: &str, context: &AssistantContext) -> AssistantResponse {
        let posts = context.posts.as_deref().unwrap_or(&[]);

        let matching: Vec<PostRecord> = posts
            .iter()
            .filter(|post| {
                post.title.to_lowercase().contains(term)
                    || post.content.to_lowercase().contains(term)
                    || post.tags.iter().any(|tag| tag.to_lowercase().contains(term))
            })
            .take(MAX_LISTED_POSTS)
            .cloned()
            .collect();

        if matching.is_empty() {
            return AssistantResponse {
                answer: format!(
                    "Sorry, I couldn't find any posts about \"{term}\". \
                     Maybe you could be the first to ask!"
                ),
                posts: None,
                suggestions: Some(vec!["What are the trending topics?".to_string()]),
            };
        }

        AssistantResponse {
            answer: format!("Here's what I found about \"{term}\":"),
            posts: Some(matching),
            suggestions: Some(vec![format!("Show me more about {term}")]),
        }
    }

    fn recent(&self, context: &AssistantContext) -> AssistantResponse {
        let Some(posts) = context.posts.as_deref().filter(|p| !p.is_empty()) else {
            return AssistantResponse::text("Nothing has been posted yet. Why not start a discussion?");
        };

        let mut by_date: Vec<PostRecord> = posts.to_vec();
        by_date.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        by_date.truncate(MAX_LISTED_POSTS);

        AssistantResponse {
            answer: "Here are the latest discussions:".to_string(),
            posts: Some(by_date),
            suggestions: Some(vec!["What are the trending topics?".to_string()]),
        }
    }

    fn help(&self) -> AssistantResponse {
        AssistantResponse {
            answer: "Here's how the forum works: post a question with a clear title, \
                     add tags so others can find it, reply to threads you can answer, \
                     and upvote the answers that helped you. Mark your question as \
                     answered once it's resolved."
                .to_string(),
            posts: None,
            suggestions: Some(vec![
                "What are the trending topics?".to_string(),
                "Show me forum stats".to_string(),
            ]),
        }
    }

    fn stats(&self, context: &AssistantContext) -> AssistantResponse {
        let Some(stats) = context.stats.as_ref() else {
            return AssistantResponse::text("Sorry, forum statistics aren't available right now.");
        };

        AssistantResponse {
            answer: format!(
                "The forum has {} posts with {} replies from {} members. \
                 {} questions are resolved ({}% resolution rate).",
                stats.total_posts,
                stats.total_replies,
                stats.total_users,
                stats.resolved_posts,
                stats.resolution_rate
            ),
            posts: None,
            suggestions: Some(vec!["Show me popular posts".to_string()]),
        }
    }

    fn tags(&self, context: &AssistantContext) -> AssistantResponse {
        let Some(tags) = context.tags.as_deref().filter(|t| !t.is_empty()) else {
            return AssistantResponse::text("No trending tags yet. Tags appear as posts get labeled.");
        };

        let first = &tags[0];
        let matching = context.posts.as_deref().map(|posts| {
            posts
                .iter()
                .filter(|post| post.tags.iter().any(|tag| tag.eq_ignore_ascii_case(first)))
                .take(MAX_LISTED_POSTS)
                .cloned()
                .collect::<Vec<_>>()
        });

        AssistantResponse {
            answer: format!("Trending tags right now: {}.", tags.join(", ")),
            posts: matching.filter(|m| !m.is_empty()),
            suggestions: Some(vec![format!("Find posts about {first}")]),
        }
    }

    fn menu(&self) -> AssistantResponse {
        AssistantResponse {
            answer: "I can help you explore the forum! Ask me about trending topics, \
                     popular or recent posts, forum statistics, tags, or how to use \
                     the forum."
                .to_string(),
            posts: None,
            suggestions: Some(
                DEFAULT_SUGGESTIONS
                    .iter()
                    .map(|s| (*s).to_string())
                    .collect(),
            ),
        }
    }
}
