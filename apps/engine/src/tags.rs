//! Tag suggestion from post text.
//!
//! Two-phase matching: a fixed category/keyword table for the technologies
//! the forum cares about, then light entity extraction (capitalized topic
//! phrases and acronyms) for anything the table misses.

use regex::Regex;
use std::sync::LazyLock;

/// Category name to the substring keywords that imply it.
const TECH_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "javascript",
        &[
            "javascript",
            "js",
            "node",
            "nodejs",
            "react",
            "vue",
            "angular",
            "typescript",
        ],
    ),
    (
        "python",
        &["python", "django", "flask", "pandas", "numpy", "tensorflow"],
    ),
    ("java", &["java", "spring", "hibernate", "maven", "gradle"]),
    (
        "web",
        &[
            "html", "css", "frontend", "backend", "fullstack", "api", "rest", "graphql",
        ],
    ),
    (
        "database",
        &[
            "sql",
            "mysql",
            "postgresql",
            "mongodb",
            "database",
            "query",
            "nosql",
        ],
    ),
    (
        "mobile",
        &["android", "ios", "react native", "flutter", "mobile", "app"],
    ),
    (
        "devops",
        &[
            "docker",
            "kubernetes",
            "ci/cd",
            "aws",
            "azure",
            "cloud",
            "deployment",
        ],
    ),
    (
        "ai",
        &[
            "machine learning",
            "ai",
            "artificial intelligence",
            "neural network",
            "deep learning",
        ],
    ),
    (
        "general",
        &["bug", "error", "help", "question", "tutorial", "guide", "how to"],
    ),
];

/// Capitalized multi-word phrases, e.g. "React Native" or "Visual Studio Code"
static TOPIC_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Z][a-z]+(?: [A-Z][a-z]+)+\b").expect("valid topic phrase regex")
});

/// Acronym-like tokens: 2+ consecutive uppercase letters
static ACRONYM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]{2,}\b").expect("valid acronym regex"));

/// How many topic phrases entity extraction may contribute
const MAX_TOPIC_PHRASES: usize = 3;

/// Tag extractor backed by the fixed keyword table plus entity extraction.
pub struct TagExtractor;

/// Default cap on suggested tags.
pub const DEFAULT_MAX_TAGS: usize = 5;

impl Default for TagExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TagExtractor {
    /// Create a new tag extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract up to `max_tags` suggested tags from text.
    ///
    /// Results are de-duplicated; insertion order (categories first, then
    /// topic phrases, then acronyms) decides what truncation keeps. Empty
    /// text yields no tags.
    pub fn extract(&self, text: &str, max_tags: usize) -> Vec<String> {
        if text.trim().is_empty() {
            return vec![];
        }

        let lower = text.to_lowercase();
        let mut tags: Vec<String> = Vec::new();

        let push_unique = |tags: &mut Vec<String>, tag: String| {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        };

        // Phase one: category keywords by substring containment.
        for (category, keywords) in TECH_KEYWORDS {
            if keywords.iter().any(|keyword| lower.contains(keyword)) {
                push_unique(&mut tags, (*category).to_string());
            }
        }

        // Phase two: entity extraction on the original-case text. Topic
        // phrases shorter than 3 characters are noise; acronyms pass as is.
        for phrase in TOPIC_PHRASE.find_iter(text).take(MAX_TOPIC_PHRASES) {
            if phrase.as_str().len() > 2 {
                push_unique(&mut tags, phrase.as_str().to_lowercase());
            }
        }
        for acronym in ACRONYM.find_iter(text) {
            push_unique(&mut tags, acronym.as_str().to_lowercase());
        }

        tags.truncate(max_tags);
        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_matching() {
        let extractor = TagExtractor::new();

        let tags = extractor.extract("I need help with my Python Django app", DEFAULT_MAX_TAGS);
        assert!(tags.contains(&"python".to_string()), "got {tags:?}");
        assert!(tags.contains(&"general".to_string()), "got {tags:?}");
    }

    #[test]
    fn test_acronym_extraction() {
        let extractor = TagExtractor::new();

        let tags = extractor.extract("Our CORS policy breaks the SPA build", DEFAULT_MAX_TAGS);
        assert!(tags.contains(&"cors".to_string()), "got {tags:?}");
        assert!(tags.contains(&"spa".to_string()), "got {tags:?}");
    }

    #[test]
    fn test_topic_phrase_extraction() {
        let extractor = TagExtractor::new();

        let tags = extractor.extract(
            "Styling issues in Visual Studio after the update",
            DEFAULT_MAX_TAGS,
        );
        assert!(tags.contains(&"visual studio".to_string()), "got {tags:?}");
    }

    #[test]
    fn test_max_tags_truncation() {
        let extractor = TagExtractor::new();

        let text = "javascript python java html sql android docker machine learning bug";
        let tags = extractor.extract(text, 3);
        assert_eq!(tags.len(), 3);
        // Category table order decides what survives truncation
        assert_eq!(tags, vec!["javascript", "python", "java"]);
    }

    #[test]
    fn test_empty_text() {
        let extractor = TagExtractor::new();

        assert!(extractor.extract("", DEFAULT_MAX_TAGS).is_empty());
        assert!(extractor.extract("   ", DEFAULT_MAX_TAGS).is_empty());
    }

    #[test]
    fn test_deduplication() {
        let extractor = TagExtractor::new();

        // "react" and "js" both map to javascript; the category appears once
        let tags = extractor.extract("react js node javascript", DEFAULT_MAX_TAGS);
        assert_eq!(
            tags.iter().filter(|t| t.as_str() == "javascript").count(),
            1
        );
    }
}
