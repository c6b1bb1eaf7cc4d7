//! Text analytics core: keyword extraction, matching, skill suggestion,
//! experience estimation, and formatting/ATS scoring.
//!
//! Every function here is a pure, synchronous computation over its inputs.
//! The only shared state is the immutable word and skill tables, loaded once
//! per process.

pub mod analyzer;
pub mod ats;
pub mod experience;
pub mod formatting;
pub mod keywords;
pub mod matcher;
pub mod skills;
pub mod stopwords;

pub use analyzer::{generate_suggestions, AnalysisEngine, JobListing, MatchAnalysis};
pub use ats::{score_ats, AtsReport};
pub use experience::{estimate_experience_years, estimate_required_years};
pub use formatting::{score_formatting, FormatMetrics, FormatReport, Priority, Suggestion};
pub use keywords::{extract_job_terms, extract_keywords, filter_proper_noun_keywords};
pub use matcher::{match_by_keywords, LemmaMatcher, MatchOutcome};
pub use skills::{extract_strengths, suggest_related_skills};
