//! Process-wide immutable word tables
//!
//! Loaded once and shared by every request; no other state outlives a single
//! computation.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Common English function words excluded from general keyword extraction.
pub static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
        "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers",
        "herself", "it", "its", "itself", "they", "them", "their", "theirs", "themselves",
        "what", "which", "who", "whom", "this", "that", "these", "those", "am", "is", "are",
        "was", "were", "be", "been", "being", "have", "has", "had", "having", "do", "does",
        "did", "doing", "a", "an", "the", "and", "but", "if", "or", "because", "as", "until",
        "while", "of", "at", "by", "for", "with", "about", "against", "between", "into",
        "through", "during", "before", "after", "above", "below", "to", "from", "up", "down",
        "in", "out", "on", "off", "over", "under", "again", "further", "then", "once", "here",
        "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
        "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so",
        "than", "too", "very", "s", "t", "can", "will", "just", "don", "should", "now",
    ]
    .into_iter()
    .collect()
});

/// Smaller table used by the proper-noun filter; less aggressive than
/// [`STOP_WORDS`] so capitalized product names and acronyms survive.
pub static COMMON_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "an", "the", "and", "or", "but", "of", "at", "by", "for",
        "in", "on", "to", "with", "we", "she", "he", "it", "they", "them",
        "his", "her", "their", "our", "your", "my", "this", "that", "these",
        "those", "is", "are", "was", "were", "be", "being", "been", "have",
        "has", "had", "do", "does", "did", "will", "would", "should", "could",
        "can", "may", "might", "must", "shall",
    ]
    .into_iter()
    .collect()
});
