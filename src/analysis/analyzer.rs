//! Analysis pipeline
//!
//! Sequences the pure analysis functions for a single request: lemma-mode
//! matching, skill suggestions, experience fit, ATS compatibility, and
//! improvement suggestions. Holds the shared stemming model so it is built
//! once per process, not per request.

use crate::analysis::ats::{score_ats, AtsReport};
use crate::analysis::experience::{estimate_experience_years, estimate_required_years};
use crate::analysis::keywords::{extract_job_terms, extract_keywords};
use crate::analysis::matcher::LemmaMatcher;
use crate::analysis::skills::suggest_related_skills;
use crate::config::Config;
use crate::error::{Result, ResumeMatcherError};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const MAX_IMPROVEMENT_SUGGESTIONS: usize = 5;

/// A job listing as provided by the caller; consumed read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListing {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub description: String,
}

/// Full result of matching one resume against one job description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchAnalysis {
    pub match_percent: f64,
    pub matching_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub suggested_skills: Vec<String>,
    pub resume_years: u32,
    pub required_years: u32,
    pub ats: AtsReport,
    pub improvement_suggestions: Vec<String>,
}

static ACHIEVEMENTS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bachievements?\b|\baccomplishments?\b").expect("Invalid regex")
});

static QUANTIFYING_VERB_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bincreased\b|\bimproved\b|\breduced\b|\bsaved\b").expect("Invalid regex")
});

pub struct AnalysisEngine {
    lemma_matcher: LemmaMatcher,
    max_keywords: usize,
}

impl AnalysisEngine {
    pub fn new(config: &Config) -> Self {
        Self {
            lemma_matcher: LemmaMatcher::new(),
            max_keywords: config.processing.max_keywords,
        }
    }

    /// Match a resume against a job description.
    ///
    /// Matching uses lemma mode (stemmed alphabetic tokens), not the regex
    /// keyword mode of [`resume_keywords`](Self::resume_keywords); the two
    /// are deliberately distinct.
    pub fn analyze_match(&self, resume_text: &str, job_description: &str) -> Result<MatchAnalysis> {
        if resume_text.trim().is_empty() {
            return Err(ResumeMatcherError::MalformedInput(
                "Resume text is empty".to_string(),
            ));
        }
        if job_description.trim().is_empty() {
            return Err(ResumeMatcherError::MalformedInput(
                "Job description is required".to_string(),
            ));
        }

        let outcome = self.lemma_matcher.match_texts(resume_text, job_description);
        debug!(
            "lemma match: {}% ({} matching, {} missing)",
            outcome.match_percent,
            outcome.matching_keywords.len(),
            outcome.missing_keywords.len()
        );

        let suggested_skills = suggest_related_skills(&outcome.missing_keywords);
        let resume_years = estimate_experience_years(resume_text);
        let required_years = estimate_required_years(job_description);
        let ats = score_ats(resume_text);
        let improvement_suggestions = generate_suggestions(
            &outcome.missing_keywords,
            resume_years,
            required_years,
            resume_text,
        );

        Ok(MatchAnalysis {
            match_percent: outcome.match_percent,
            matching_keywords: outcome.matching_keywords,
            missing_keywords: outcome.missing_keywords,
            suggested_skills,
            resume_years,
            required_years,
            ats,
            improvement_suggestions,
        })
    }

    /// Match against a stored job listing's description.
    pub fn analyze_against_listing(
        &self,
        resume_text: &str,
        listing: &JobListing,
    ) -> Result<MatchAnalysis> {
        self.analyze_match(resume_text, &listing.description)
    }

    /// General vocabulary keywords of a resume (regex keyword mode).
    pub fn resume_keywords(&self, resume_text: &str) -> Vec<String> {
        extract_keywords(resume_text, self.max_keywords)
    }

    /// Job-specific terms: capitalized names and acronyms.
    pub fn job_terms(&self, text: &str) -> Vec<String> {
        extract_job_terms(text)
    }
}

/// Turn analysis results into at most five concrete improvement suggestions.
pub fn generate_suggestions(
    missing_keywords: &[String],
    exp_years: u32,
    req_years: u32,
    resume_text: &str,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    if !missing_keywords.is_empty() {
        let preview: Vec<&str> = missing_keywords
            .iter()
            .take(5)
            .map(String::as_str)
            .collect();
        suggestions.push(format!(
            "Add these keywords to your resume: {}",
            preview.join(", ")
        ));
    }

    if exp_years < req_years {
        suggestions.push(format!(
            "Highlight transferable skills to compensate for experience gap ({} vs {} years)",
            exp_years, req_years
        ));
    }

    if !ACHIEVEMENTS_REGEX.is_match(resume_text) {
        suggestions.push("Add an 'Achievements' section with quantifiable results".to_string());
    }

    if QUANTIFYING_VERB_REGEX.find_iter(resume_text).count() < 3 {
        suggestions
            .push("Include more measurable achievements (e.g., 'Increased sales by 30%')".to_string());
    }

    suggestions.truncate(MAX_IMPROVEMENT_SUGGESTIONS);
    suggestions
}
