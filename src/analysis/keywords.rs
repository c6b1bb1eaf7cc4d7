//! Frequency-ranked keyword extraction

use crate::analysis::stopwords::{COMMON_WORDS, STOP_WORDS};
use std::collections::{HashMap, HashSet};
use unicode_segmentation::UnicodeSegmentation;

pub const DEFAULT_MAX_KEYWORDS: usize = 20;

/// Extract the top keywords of a text, ranked by descending frequency.
///
/// Tokens are lowercased word runs; purely numeric tokens, tokens of three or
/// fewer characters, and stop words are dropped. Ties rank by first
/// occurrence in the text.
pub fn extract_keywords(text: &str, max_keywords: usize) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for word in lowered.unicode_words() {
        if word.chars().count() <= 3 {
            continue;
        }
        if word.chars().all(|c| c.is_numeric()) {
            continue;
        }
        if STOP_WORDS.contains(word) {
            continue;
        }
        let count = counts.entry(word).or_insert(0);
        if *count == 0 {
            order.push(word);
        }
        *count += 1;
    }

    // stable sort keeps first-occurrence order between equal counts
    let mut ranked = order;
    ranked.sort_by_key(|w| std::cmp::Reverse(counts[w]));

    ranked
        .into_iter()
        .take(max_keywords)
        .map(str::to_string)
        .collect()
}

/// Keep only "proper-noun-like" tokens: longer than two characters, at least
/// one letter, not a common function word, and capitalized or all-uppercase
/// in their original form. Used to isolate job-specific terms such as
/// acronyms and product names. Duplicates are dropped, discovery order
/// preserved.
pub fn filter_proper_noun_keywords(keywords: &[String]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut filtered = Vec::new();

    for word in keywords {
        if word.chars().count() <= 2 {
            continue;
        }
        // the casing tests below are vacuous for letterless tokens ("2024")
        if !word.chars().any(|c| c.is_alphabetic()) {
            continue;
        }
        if COMMON_WORDS.contains(word.to_lowercase().as_str()) {
            continue;
        }
        let capitalized = word.chars().next().is_some_and(|c| c.is_uppercase());
        let all_upper = word.chars().all(|c| !c.is_alphabetic() || c.is_uppercase());
        if !capitalized && !all_upper {
            continue;
        }
        if !seen.insert(word.as_str()) {
            continue;
        }
        filtered.push(word.clone());
    }

    filtered
}

/// Tokenize a text with original casing intact and run the proper-noun
/// filter over it. The capitalization test needs pre-lowercased tokens, so
/// this does not compose with [`extract_keywords`].
pub fn extract_job_terms(text: &str) -> Vec<String> {
    let tokens: Vec<String> = text.unicode_words().map(str::to_string).collect();
    filter_proper_noun_keywords(&tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_are_lowercase_and_filtered() {
        let text = "Python Python developer with strong Python and database skills, 2023 releases";
        let keywords = extract_keywords(text, DEFAULT_MAX_KEYWORDS);

        assert!(keywords.len() <= DEFAULT_MAX_KEYWORDS);
        for kw in &keywords {
            assert_eq!(kw, &kw.to_lowercase());
            assert!(kw.chars().count() > 3);
            assert!(!crate::analysis::stopwords::STOP_WORDS.contains(kw.as_str()));
        }
        assert_eq!(keywords[0], "python");
        assert!(!keywords.contains(&"2023".to_string()));
        assert!(!keywords.contains(&"with".to_string()));
    }

    #[test]
    fn test_frequency_ranking_with_stable_ties() {
        let text = "zebra apple zebra banana apple cherry";
        let keywords = extract_keywords(text, 10);

        // zebra and apple both occur twice; zebra appeared first
        assert_eq!(keywords[0], "zebra");
        assert_eq!(keywords[1], "apple");
        assert_eq!(keywords[2], "banana");
        assert_eq!(keywords[3], "cherry");
    }

    #[test]
    fn test_max_keywords_bound() {
        let text = "alpha bravo charlie delta echoes foxtrot golfing hotels";
        let keywords = extract_keywords(text, 3);
        assert_eq!(keywords.len(), 3);
    }

    #[test]
    fn test_empty_text_yields_no_keywords() {
        assert!(extract_keywords("", DEFAULT_MAX_KEYWORDS).is_empty());
    }

    #[test]
    fn test_proper_noun_filter() {
        let tokens: Vec<String> = ["AWS", "python", "Docker", "The", "ML", "Kubernetes"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let filtered = filter_proper_noun_keywords(&tokens);

        assert_eq!(filtered, vec!["AWS", "Docker", "Kubernetes"]);
    }

    #[test]
    fn test_proper_noun_filter_deduplicates() {
        let tokens: Vec<String> = ["AWS", "AWS", "Docker"].iter().map(|s| s.to_string()).collect();
        assert_eq!(filter_proper_noun_keywords(&tokens), vec!["AWS", "Docker"]);
    }

    #[test]
    fn test_proper_noun_filter_drops_numeric_tokens() {
        let terms = extract_job_terms("Hiring in 2024 for AWS and Terraform");
        assert!(!terms.contains(&"2024".to_string()));
        assert!(terms.contains(&"AWS".to_string()));
        assert!(terms.contains(&"Terraform".to_string()));
    }

    #[test]
    fn test_job_terms_from_text() {
        let terms = extract_job_terms("Senior engineer needed for AWS and Terraform work in the cloud");
        assert!(terms.contains(&"AWS".to_string()));
        assert!(terms.contains(&"Terraform".to_string()));
        assert!(terms.contains(&"Senior".to_string()));
        assert!(!terms.contains(&"cloud".to_string()));
    }
}
