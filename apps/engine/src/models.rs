//! Shared data models consumed and produced by the analysis engine.
//!
//! Posts and replies arrive as plain snapshots from the persistence layer;
//! the engine never mutates them and never hands back a storage handle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A reply inside a discussion thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyRecord {
    /// Reply body text
    pub content: String,
    /// Display name of the author ("Anonymous" for guests)
    pub author: String,
    /// When the reply was posted
    pub created_at: DateTime<Utc>,
}

/// An immutable snapshot of a forum post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    /// Opaque stable identifier assigned by the persistence layer
    pub id: String,
    /// Post title
    pub title: String,
    /// Post body text
    pub content: String,
    /// Tags attached to the post
    pub tags: Vec<String>,
    /// Upvote count
    pub votes: u32,
    /// Replies in chronological order
    pub replies: Vec<ReplyRecord>,
    /// When the post was created
    pub created_at: DateTime<Utc>,
}

impl PostRecord {
    /// Number of replies on the post.
    pub fn reply_count(&self) -> usize {
        self.replies.len()
    }

    /// Title and content concatenated, the text every similarity
    /// comparison runs against.
    pub fn full_text(&self) -> String {
        format!("{} {}", self.title, self.content)
    }
}

/// Aggregate forum counters assembled by the caller for the assistant's
/// statistics branch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    pub total_users: usize,
    pub total_posts: usize,
    pub total_replies: usize,
    pub resolved_posts: usize,
    /// Percentage of posts marked resolved, 0-100
    pub resolution_rate: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_text_concatenation() {
        let post = PostRecord {
            id: "p1".to_string(),
            title: "React hooks".to_string(),
            content: "How do they work?".to_string(),
            tags: vec![],
            votes: 0,
            replies: vec![],
            created_at: Utc::now(),
        };

        assert_eq!(post.full_text(), "React hooks How do they work?");
        assert_eq!(post.reply_count(), 0);
    }

    #[test]
    fn test_camel_case_serialization() {
        let post = PostRecord {
            id: "p1".to_string(),
            title: "t".to_string(),
            content: "c".to_string(),
            tags: vec![],
            votes: 3,
            replies: vec![],
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&post).expect("serializable");
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"votes\":3"));
    }
}
