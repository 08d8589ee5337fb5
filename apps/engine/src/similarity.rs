//! Text similarity using TF-IDF weighted cosine distance.
//!
//! Each call builds an ad hoc two-document corpus from exactly the two
//! inputs, weighs terms with tf * (ln(n/df) + 1) so a term unique to one
//! document is amplified over a term both share, and compares the sparse
//! vectors with cosine similarity.

use std::collections::{BTreeMap, HashMap, HashSet};

/// Split text into lowercase alphanumeric terms.
///
/// Shared tokenizer for every component that scores words: whitespace and
/// punctuation are boundaries, nothing is stemmed.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Round a [0,1] score to an integer percentage.
pub(crate) fn to_percent(score: f64) -> u32 {
    (score * 100.0).round() as u32
}

/// Build the TF-IDF vector for one document of the two-document corpus.
///
/// Ordered by term so downstream accumulation always sums in the same
/// order, keeping scores bit-for-bit reproducible.
fn term_vector(tokens: &[String], doc_freq: &HashMap<&str, usize>) -> BTreeMap<String, f64> {
    let mut tf: HashMap<&str, usize> = HashMap::new();
    for token in tokens {
        *tf.entry(token.as_str()).or_insert(0) += 1;
    }

    tf.into_iter()
        .map(|(term, count)| {
            let df = doc_freq.get(term).copied().unwrap_or(1) as f64;
            let idf = (2.0 / df).ln() + 1.0;
            (term.to_string(), count as f64 * idf)
        })
        .collect()
}

/// Cosine similarity over the union of the two term spaces.
///
/// Returns 0.0 when either vector has zero norm, the documented convention
/// for the undefined zero-vector case.
fn cosine(a: &BTreeMap<String, f64>, b: &BTreeMap<String, f64>) -> f64 {
    let mut dot = 0.0;
    let mut norm_a = 0.0;
    for (term, weight_a) in a {
        norm_a += weight_a * weight_a;
        if let Some(weight_b) = b.get(term) {
            dot += weight_a * weight_b;
        }
    }
    let norm_b: f64 = b.values().map(|w| w * w).sum();

    let magnitude = norm_a.sqrt() * norm_b.sqrt();
    if magnitude == 0.0 {
        return 0.0;
    }

    // Weights are non-negative, so the true range is [0,1]; the clamp only
    // absorbs floating-point overshoot.
    (dot / magnitude).clamp(0.0, 1.0)
}

/// Calculate the similarity between two texts.
///
/// Symmetric, deterministic, and bounded to [0,1]. Empty input on either
/// side yields 0.0.
pub fn calculate_similarity(text_a: &str, text_b: &str) -> f64 {
    let tokens_a = tokenize(text_a);
    let tokens_b = tokenize(text_b);

    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    // Document frequency across the two-document corpus.
    let unique_a: HashSet<&str> = tokens_a.iter().map(String::as_str).collect();
    let unique_b: HashSet<&str> = tokens_b.iter().map(String::as_str).collect();
    let mut doc_freq: HashMap<&str, usize> = HashMap::new();
    for &term in unique_a.union(&unique_b) {
        let df = unique_a.contains(term) as usize + unique_b.contains(term) as usize;
        doc_freq.insert(term, df);
    }

    let vector_a = term_vector(&tokens_a, &doc_freq);
    let vector_b = term_vector(&tokens_b, &doc_freq);

    cosine(&vector_a, &vector_b)
}
