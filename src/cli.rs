//! CLI interface for the resume matcher

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-matcher")]
#[command(about = "Match resumes against job descriptions")]
#[command(
    long_about = "Extract text from resume documents and score their relevance against a job description: keyword matching, skill suggestions, experience fit, and formatting/ATS feedback"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Match a resume against a job description
    Match {
        /// Path to resume file (PDF, TXT)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (PDF, TXT)
        #[arg(short, long)]
        job: PathBuf,

        /// Output format: console, json (defaults to the configured format)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Extract ranked keywords from a resume
    Keywords {
        /// Path to resume file (PDF, TXT)
        #[arg(short, long)]
        resume: PathBuf,

        /// Keep only job-specific terms (capitalized names, acronyms)
        #[arg(long)]
        job_terms: bool,
    },

    /// Check resume formatting
    FormatCheck {
        /// Path to resume file (PDF, TXT)
        #[arg(short, long)]
        resume: PathBuf,

        /// Output format: console, json (defaults to the configured format)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Score ATS compatibility
    Ats {
        /// Path to resume file (PDF, TXT)
        #[arg(short, long)]
        resume: PathBuf,
    },
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json",
            format
        )),
    }
}

/// Resolve the output format from an optional CLI flag, falling back to the
/// configured default when the flag is absent.
pub fn resolve_output_format(
    flag: Option<&str>,
    configured: &crate::config::OutputFormat,
) -> Result<crate::config::OutputFormat, String> {
    match flag {
        Some(format) => parse_output_format(format),
        None => Ok(configured.clone()),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parsing() {
        assert!(parse_output_format("json").is_ok());
        assert!(parse_output_format("Console").is_ok());
        assert!(parse_output_format("yaml").is_err());
    }

    #[test]
    fn test_output_format_falls_back_to_configured_default() {
        use crate::config::OutputFormat;

        assert_eq!(
            resolve_output_format(None, &OutputFormat::Json).unwrap(),
            OutputFormat::Json
        );
        assert_eq!(
            resolve_output_format(Some("console"), &OutputFormat::Json).unwrap(),
            OutputFormat::Console
        );
        assert!(resolve_output_format(Some("yaml"), &OutputFormat::Console).is_err());
    }

    #[test]
    fn test_file_extension_validation() {
        assert!(validate_file_extension(&PathBuf::from("cv.pdf"), &["pdf", "txt"]).is_ok());
        assert!(validate_file_extension(&PathBuf::from("cv.docx"), &["pdf", "txt"]).is_err());
        assert!(validate_file_extension(&PathBuf::from("cv"), &["pdf", "txt"]).is_err());
    }
}
