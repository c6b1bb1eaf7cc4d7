//! Experience-year mining from free text

use chrono::{Datelike, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

/// Domain cap on estimated experience.
pub const MAX_EXPERIENCE_YEARS: i64 = 15;

/// Fallback when a job description states no requirement.
pub const DEFAULT_REQUIRED_YEARS: u32 = 3;

static YEAR_MENTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*(?:years?|yrs?)").expect("Invalid year mention regex"));

static DATE_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(20\d{2})\s*[-–]\s*(20\d{2}|present|now)").expect("Invalid date range regex")
});

/// Required-years patterns, tried in order; first match wins. The last one
/// captures an "N-M" range and takes the upper bound.
static REQUIRED_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(\d+)\+?\s*years?\s*experience",
        r"experience\s*of\s*(\d+)\+?\s*years?",
        r"(\d+)\s*-\s*(\d+)\s*years?\s*experience",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("Invalid required-years regex"))
    .collect()
});

/// Estimate years of experience from resume text.
///
/// Sums explicit "N years" mentions and "YYYY-YYYY|present" range durations.
/// When any ranges were found the combined total is integer-divided by the
/// range count alone; explicit mentions fold into that average. Result is
/// clamped to [0, 15].
pub fn estimate_experience_years(text: &str) -> u32 {
    estimate_with_current_year(text, Utc::now().year())
}

fn estimate_with_current_year(text: &str, current_year: i32) -> u32 {
    let lowered = text.to_lowercase();
    let mut total: i64 = 0;

    for cap in YEAR_MENTION.captures_iter(&lowered) {
        total += cap[1].parse::<i64>().unwrap_or(0);
    }

    let mut range_count: i64 = 0;
    for cap in DATE_RANGE.captures_iter(&lowered) {
        let start: i64 = cap[1].parse().unwrap_or(0);
        let end: i64 = match &cap[2] {
            "present" | "now" => current_year as i64,
            year => year.parse().unwrap_or(start),
        };
        total += end - start;
        range_count += 1;
    }

    let estimate = if range_count > 0 {
        total.div_euclid(range_count)
    } else {
        total
    };

    estimate.clamp(0, MAX_EXPERIENCE_YEARS) as u32
}

/// Estimate the years of experience a job description requires.
pub fn estimate_required_years(job_description: &str) -> u32 {
    let lowered = job_description.to_lowercase();

    for pattern in REQUIRED_PATTERNS.iter() {
        if let Some(cap) = pattern.captures(&lowered) {
            // range pattern: second group is the upper bound
            let group = cap.get(2).or_else(|| cap.get(1));
            if let Some(m) = group {
                if let Ok(years) = m.as_str().parse() {
                    return years;
                }
            }
        }
    }

    DEFAULT_REQUIRED_YEARS
}
