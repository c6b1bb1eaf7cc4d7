//! ATS compatibility scoring
//!
//! Estimates how well automated resume screeners can parse a resume: five
//! independent boolean checks averaged into a 0-100 score, plus a list of
//! concrete parseability issues.

use crate::analysis::formatting::{EMAIL_REGEX, PHONE_REGEX};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

const ATS_WORD_LIMIT: usize = 800;
const MIN_PROPER_HEADINGS: usize = 3;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsReport {
    /// 0-100, always a multiple of 20.
    pub score: u32,
    pub issues: Vec<String>,
}

static WORK_HISTORY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(experience|work history|employment)").expect("Invalid regex")
});

static EDUCATION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(education|academic background|qualifications)").expect("Invalid regex")
});

static SKILLS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(skills|technical skills|competencies)").expect("Invalid regex")
});

/// A heading is a line of its own, capitalized, ending with a colon.
static PROPER_HEADING_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*[A-Z][A-Za-z ]+:\s*$").expect("Invalid heading regex"));

static LAYOUT_HAZARD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)columns?|tables?|graphics?|images?").expect("Invalid regex"));

/// Score ATS compatibility and collect parseability issues.
pub fn score_ats(resume_text: &str) -> AtsReport {
    let checks = [
        EMAIL_REGEX.is_match(resume_text) || PHONE_REGEX.is_match(resume_text),
        WORK_HISTORY_REGEX.is_match(resume_text),
        EDUCATION_REGEX.is_match(resume_text),
        SKILLS_REGEX.is_match(resume_text),
        PROPER_HEADING_REGEX.find_iter(resume_text).count() >= MIN_PROPER_HEADINGS,
    ];
    let passed = checks.iter().filter(|&&c| c).count();
    let score = (passed as f64 / checks.len() as f64 * 100.0).round() as u32;

    let mut issues = Vec::new();
    if !PROPER_HEADING_REGEX.is_match(resume_text) {
        issues.push(
            "Consider using standard section headings (e.g., 'Experience:', 'Education:')"
                .to_string(),
        );
    }
    if resume_text.split_whitespace().count() > ATS_WORD_LIMIT {
        issues.push("Resume might be too long (consider keeping under 2 pages)".to_string());
    }
    if LAYOUT_HAZARD_REGEX.is_match(resume_text) {
        issues.push("Avoid using columns/tables/graphics as they may confuse ATS".to_string());
    }

    AtsReport { score, issues }
}
