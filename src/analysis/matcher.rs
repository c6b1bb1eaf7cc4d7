//! Resume vs. job keyword matching
//!
//! Two distinct modes. [`match_by_keywords`] compares keyword collections as
//! produced by the keyword engine. [`LemmaMatcher`] works from raw texts and
//! normalizes words to their stems first, so inflected forms ("databases" vs
//! "database") still match; it is the stricter mode and the two are not
//! interchangeable.

use rust_stemmers::{Algorithm, Stemmer};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// Share of job keywords found in the resume, 0-100, two decimals.
    pub match_percent: f64,
    pub matching_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
}

/// Set-intersect resume keywords against job keywords.
///
/// The denominator is the count of distinct job keywords; an empty job set
/// yields 0.0 rather than an error. Matching and missing lists preserve the
/// job collection's first-occurrence order.
pub fn match_by_keywords(resume_keywords: &[String], job_keywords: &[String]) -> MatchOutcome {
    let resume_set: HashSet<&str> = resume_keywords.iter().map(String::as_str).collect();

    let mut seen: HashSet<&str> = HashSet::new();
    let mut matching = Vec::new();
    let mut missing = Vec::new();

    for keyword in job_keywords {
        if !seen.insert(keyword.as_str()) {
            continue;
        }
        if resume_set.contains(keyword.as_str()) {
            matching.push(keyword.clone());
        } else {
            missing.push(keyword.clone());
        }
    }

    let job_total = matching.len() + missing.len();
    let match_percent = if job_total == 0 {
        0.0
    } else {
        round2(matching.len() as f64 / job_total as f64 * 100.0)
    };

    MatchOutcome {
        match_percent,
        matching_keywords: matching,
        missing_keywords: missing,
    }
}

/// Lemma-mode matcher holding the shared stemming model.
///
/// Construct once at startup and inject where needed; the stemmer itself is
/// immutable.
pub struct LemmaMatcher {
    stemmer: Stemmer,
}

impl LemmaMatcher {
    pub fn new() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    /// Match two raw texts on stemmed alphabetic tokens.
    ///
    /// Comparison happens on stems, but the reported keyword lists carry the
    /// job text's surface forms (first occurrence per stem), so callers never
    /// see truncated stems like "databas".
    pub fn match_texts(&self, resume_text: &str, job_text: &str) -> MatchOutcome {
        let resume_stems: HashSet<String> = self.stems(resume_text).into_iter().collect();

        let lowered_job = job_text.to_lowercase();
        let mut seen: HashSet<String> = HashSet::new();
        let mut matching = Vec::new();
        let mut missing = Vec::new();

        for word in lowered_job.unicode_words() {
            if !word.chars().all(|c| c.is_alphabetic()) {
                continue;
            }
            let stem = self.stemmer.stem(word).to_string();
            if !seen.insert(stem.clone()) {
                continue;
            }
            if resume_stems.contains(&stem) {
                matching.push(word.to_string());
            } else {
                missing.push(word.to_string());
            }
        }

        let job_total = matching.len() + missing.len();
        let match_percent = if job_total == 0 {
            0.0
        } else {
            round2(matching.len() as f64 / job_total as f64 * 100.0)
        };

        MatchOutcome {
            match_percent,
            matching_keywords: matching,
            missing_keywords: missing,
        }
    }

    /// Lowercased, stemmed alphabetic tokens in first-occurrence order.
    fn stems(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let mut seen = HashSet::new();
        let mut stems = Vec::new();

        for word in lowered.unicode_words() {
            if !word.chars().all(|c| c.is_alphabetic()) {
                continue;
            }
            let stem = self.stemmer.stem(word).to_string();
            if seen.insert(stem.clone()) {
                stems.push(stem);
            }
        }

        stems
    }
}

impl Default for LemmaMatcher {
    fn default() -> Self {
        Self::new()
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kws(words: &[&str]) -> Vec<String> {
        words.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_identity_match_is_full() {
        let keywords = kws(&["python", "docker", "postgresql"]);
        let outcome = match_by_keywords(&keywords, &keywords);

        assert_eq!(outcome.match_percent, 100.0);
        assert!(outcome.missing_keywords.is_empty());
        assert_eq!(outcome.matching_keywords.len(), 3);
    }

    #[test]
    fn test_empty_job_set_yields_zero_not_error() {
        let outcome = match_by_keywords(&kws(&["python"]), &[]);
        assert_eq!(outcome.match_percent, 0.0);
        assert!(outcome.matching_keywords.is_empty());
        assert!(outcome.missing_keywords.is_empty());
    }

    #[test]
    fn test_missing_preserves_job_order() {
        let resume = kws(&["python"]);
        let job = kws(&["kubernetes", "python", "terraform", "ansible"]);
        let outcome = match_by_keywords(&resume, &job);

        assert_eq!(outcome.missing_keywords, kws(&["kubernetes", "terraform", "ansible"]));
        assert_eq!(outcome.matching_keywords, kws(&["python"]));
    }

    #[test]
    fn test_percent_rounds_to_two_decimals() {
        let resume = kws(&["python"]);
        let job = kws(&["python", "go", "rust"]);
        let outcome = match_by_keywords(&resume, &job);

        assert_eq!(outcome.match_percent, 33.33);
    }

    #[test]
    fn test_duplicate_job_keywords_counted_once() {
        let resume = kws(&["python"]);
        let job = kws(&["python", "python", "rust", "rust"]);
        let outcome = match_by_keywords(&resume, &job);

        assert_eq!(outcome.match_percent, 50.0);
        assert_eq!(outcome.missing_keywords, kws(&["rust"]));
    }

    #[test]
    fn test_lemma_mode_matches_inflected_forms() {
        let matcher = LemmaMatcher::new();
        let outcome = matcher.match_texts(
            "Managed relational databases and deployments",
            "database deployment management",
        );

        assert_eq!(outcome.match_percent, 100.0);
        // reported forms come from the job text, not the stemmer
        assert_eq!(
            outcome.matching_keywords,
            kws(&["database", "deployment", "management"])
        );
    }

    #[test]
    fn test_lemma_mode_skips_non_alphabetic_tokens() {
        let matcher = LemmaMatcher::new();
        let outcome = matcher.match_texts("python3 expert", "expert required");

        // "python3" is not alphabetic and never enters either set
        assert!(!outcome
            .matching_keywords
            .iter()
            .any(|k| k.contains("python")));
    }

    #[test]
    fn test_lemma_mode_empty_job_text() {
        let matcher = LemmaMatcher::new();
        let outcome = matcher.match_texts("some resume text", "");
        assert_eq!(outcome.match_percent, 0.0);
    }
}
