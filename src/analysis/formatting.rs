//! Formatting checks over raw resume text
//!
//! Each check is independent and deterministic: it either records a
//! suggestion (with a priority) or a strength. The final score starts at 100
//! and loses 10 points per high-priority suggestion and 5 per medium.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const MIN_WORD_COUNT: usize = 300;
pub const MIN_BULLET_POINTS: usize = 10;
pub const MIN_LISTED_SKILLS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Length,
    Section,
    Bullets,
    Contact,
    Skills,
    Structure,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub message: String,
    pub priority: Priority,
}

/// Named booleans and counts gathered while checking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormatMetrics {
    pub word_count: usize,
    pub has_contact: bool,
    pub has_summary: bool,
    pub has_education: bool,
    pub has_experience: bool,
    pub has_skills: bool,
    pub bullet_points: usize,
    pub listed_skills: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatReport {
    pub metrics: FormatMetrics,
    pub suggestions: Vec<Suggestion>,
    pub strengths: Vec<String>,
    /// 0-100, clamped.
    pub score: u32,
}

pub(crate) static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[\w.\-]+@[\w.\-]+\.\w{2,4}\b").expect("Invalid email regex"));

pub(crate) static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{3}[-.]?\d{3}[-.]?\d{4}\b").expect("Invalid phone regex"));

static SUMMARY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(summary|objective|profile|about)\b").expect("Invalid regex"));

static EDUCATION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(education|academic|qualifications|degree)\b").expect("Invalid regex")
});

static EXPERIENCE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(experience|work history|employment)\b").expect("Invalid regex")
});

static SKILLS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(skills|competencies|technologies)\b").expect("Invalid regex")
});

static CONTACT_HEADING_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(contact|email|phone)\b").expect("Invalid regex"));

static SKILLS_BLOCK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^.*\bskills?\b[^:\n]*:[ \t]*(.+)$").expect("Invalid skills block regex")
});

/// Run every formatting check against raw resume text.
pub fn score_formatting(resume_text: &str) -> FormatReport {
    let mut metrics = FormatMetrics::default();
    let mut suggestions: Vec<Suggestion> = Vec::new();
    let mut strengths: Vec<String> = Vec::new();

    // length
    metrics.word_count = resume_text.split_whitespace().count();
    if metrics.word_count < MIN_WORD_COUNT {
        let priority = if metrics.word_count < 200 {
            Priority::High
        } else {
            Priority::Medium
        };
        suggestions.push(Suggestion {
            kind: SuggestionKind::Length,
            message: format!(
                "Resume has only {} words; aim for at least {}",
                metrics.word_count, MIN_WORD_COUNT
            ),
            priority,
        });
    } else {
        strengths.push("Substantial content length".to_string());
    }

    // section presence
    let has_contact = CONTACT_HEADING_REGEX.is_match(resume_text)
        || EMAIL_REGEX.is_match(resume_text)
        || PHONE_REGEX.is_match(resume_text);
    let sections: [(&str, bool, Priority); 5] = [
        ("contact", has_contact, Priority::High),
        ("summary", SUMMARY_REGEX.is_match(resume_text), Priority::Medium),
        ("education", EDUCATION_REGEX.is_match(resume_text), Priority::Medium),
        ("experience", EXPERIENCE_REGEX.is_match(resume_text), Priority::High),
        ("skills", SKILLS_REGEX.is_match(resume_text), Priority::Medium),
    ];
    for (name, present, priority) in sections {
        if present {
            strengths.push(format!("Includes a {} section", name));
        } else {
            suggestions.push(Suggestion {
                kind: SuggestionKind::Section,
                message: format!("Add a {} section", name),
                priority,
            });
        }
    }
    metrics.has_contact = sections[0].1;
    metrics.has_summary = sections[1].1;
    metrics.has_education = sections[2].1;
    metrics.has_experience = sections[3].1;
    metrics.has_skills = sections[4].1;
    let section_count = sections.iter().filter(|(_, present, _)| *present).count();

    // bullet density
    metrics.bullet_points = resume_text
        .lines()
        .filter(|line| {
            let trimmed = line.trim_start();
            trimmed.starts_with('•') || trimmed.starts_with('-')
        })
        .count();
    if metrics.bullet_points < MIN_BULLET_POINTS {
        suggestions.push(Suggestion {
            kind: SuggestionKind::Bullets,
            message: format!(
                "Use at least {} bullet points to describe accomplishments",
                MIN_BULLET_POINTS
            ),
            priority: Priority::Medium,
        });
    } else {
        strengths.push("Good use of bullet points".to_string());
    }

    // reachable contact details
    if EMAIL_REGEX.is_match(resume_text) && PHONE_REGEX.is_match(resume_text) {
        strengths.push("Contact details are present".to_string());
    } else {
        suggestions.push(Suggestion {
            kind: SuggestionKind::Contact,
            message: "Missing email or phone number".to_string(),
            priority: Priority::High,
        });
    }

    // skills block item count
    metrics.listed_skills = SKILLS_BLOCK_REGEX
        .captures(resume_text)
        .and_then(|cap| cap.get(1))
        .map(|m| {
            m.as_str()
                .split(',')
                .filter(|item| !item.trim().is_empty())
                .count()
        })
        .unwrap_or(0);
    if metrics.listed_skills < MIN_LISTED_SKILLS {
        suggestions.push(Suggestion {
            kind: SuggestionKind::Skills,
            message: format!(
                "List at least {} skills in the skills section",
                MIN_LISTED_SKILLS
            ),
            priority: Priority::Medium,
        });
    } else {
        strengths.push(format!("Lists {} skills", metrics.listed_skills));
    }

    // overall structure
    if section_count >= 4 {
        strengths.push("Well-structured resume with clear sections".to_string());
    } else {
        suggestions.push(Suggestion {
            kind: SuggestionKind::Structure,
            message: "Use standard sections: contact, summary, experience, education, skills"
                .to_string(),
            priority: Priority::Medium,
        });
    }

    // safety filter; every produced priority is already high or medium
    suggestions.retain(|s| matches!(s.priority, Priority::High | Priority::Medium));

    let score = calculate_score(&suggestions);

    FormatReport {
        metrics,
        suggestions,
        strengths,
        score,
    }
}

/// Score a suggestion list: 100 minus 10 per high and 5 per medium, clamped.
pub fn calculate_score(suggestions: &[Suggestion]) -> u32 {
    let high = suggestions
        .iter()
        .filter(|s| s.priority == Priority::High)
        .count() as i64;
    let medium = suggestions
        .iter()
        .filter(|s| s.priority == Priority::Medium)
        .count() as i64;

    (100 - 10 * high - 5 * medium).clamp(0, 100) as u32
}
