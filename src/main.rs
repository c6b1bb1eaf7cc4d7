//! Resume matcher: score resumes against job descriptions

mod analysis;
mod cli;
mod config;
mod error;
mod input;

use analysis::analyzer::AnalysisEngine;
use analysis::ats::score_ats;
use analysis::formatting::{score_formatting, Priority};
use analysis::skills::extract_strengths;
use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use config::{Config, OutputFormat};
use error::{Result, ResumeMatcherError};
use input::manager::InputManager;
use log::{error, info};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    let input_manager = InputManager::new();

    match command {
        Commands::Match {
            resume,
            job,
            output,
        } => {
            cli::validate_file_extension(&resume, &["pdf", "txt"])
                .map_err(|e| ResumeMatcherError::InvalidInput(format!("Resume file: {}", e)))?;
            cli::validate_file_extension(&job, &["pdf", "txt"])
                .map_err(|e| ResumeMatcherError::InvalidInput(format!("Job file: {}", e)))?;
            let output_format =
                cli::resolve_output_format(output.as_deref(), &config.output.format)
                    .map_err(ResumeMatcherError::InvalidInput)?;

            info!("Matching {} against {}", resume.display(), job.display());
            let resume_text = input_manager.extract_text(&resume).await?;
            let job_text = input_manager.extract_text(&job).await?;

            let engine = AnalysisEngine::new(&config);
            let analysis = engine.analyze_match(&resume_text, &job_text)?;

            if output_format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
                return Ok(());
            }

            println!(
                "\nMatch score: {}",
                format_percent(analysis.match_percent, config.output.color_output)
            );
            println!(
                "Experience: {} years on resume, {} required",
                analysis.resume_years, analysis.required_years
            );
            println!("ATS compatibility: {}/100", analysis.ats.score);

            if !analysis.matching_keywords.is_empty() {
                println!(
                    "\nMatching keywords ({}): {}",
                    analysis.matching_keywords.len(),
                    preview(&analysis.matching_keywords, 15)
                );
            }
            if !analysis.missing_keywords.is_empty() {
                println!(
                    "Missing keywords ({}): {}",
                    analysis.missing_keywords.len(),
                    preview(&analysis.missing_keywords, 15)
                );
            }
            if !analysis.suggested_skills.is_empty() {
                println!("Suggested skills: {}", analysis.suggested_skills.join(", "));
            }
            if !analysis.improvement_suggestions.is_empty() {
                println!("\nSuggestions:");
                for (i, suggestion) in analysis.improvement_suggestions.iter().enumerate() {
                    println!("  {}. {}", i + 1, suggestion);
                }
            }
        }

        Commands::Keywords { resume, job_terms } => {
            cli::validate_file_extension(&resume, &["pdf", "txt"])
                .map_err(|e| ResumeMatcherError::InvalidInput(format!("Resume file: {}", e)))?;

            let text = input_manager.extract_text(&resume).await?;
            let engine = AnalysisEngine::new(&config);

            let keywords = if job_terms {
                engine.job_terms(&text)
            } else {
                engine.resume_keywords(&text)
            };

            for (i, keyword) in keywords.iter().enumerate() {
                println!("{:2}. {}", i + 1, keyword);
            }
        }

        Commands::FormatCheck { resume, output } => {
            cli::validate_file_extension(&resume, &["pdf", "txt"])
                .map_err(|e| ResumeMatcherError::InvalidInput(format!("Resume file: {}", e)))?;
            let output_format =
                cli::resolve_output_format(output.as_deref(), &config.output.format)
                    .map_err(ResumeMatcherError::InvalidInput)?;

            let text = input_manager.extract_text(&resume).await?;
            let report = score_formatting(&text);

            if output_format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&report)?);
                return Ok(());
            }

            println!(
                "\nFormatting score: {}",
                format_score(report.score, config.output.color_output)
            );
            println!(
                "Words: {}, bullets: {}, listed skills: {}",
                report.metrics.word_count, report.metrics.bullet_points, report.metrics.listed_skills
            );

            if !report.strengths.is_empty() {
                println!("\nStrengths:");
                for strength in &report.strengths {
                    println!("  + {}", strength);
                }
            }
            if !report.suggestions.is_empty() {
                println!("\nSuggestions:");
                for suggestion in &report.suggestions {
                    let tag = match suggestion.priority {
                        Priority::High => "high",
                        Priority::Medium => "medium",
                    };
                    println!("  - [{}] {}", tag, suggestion.message);
                }
            }

            let strengths = extract_strengths(&text);
            if !strengths.is_empty() {
                println!("\nStrength phrases found: {}", strengths.join(", "));
            }
        }

        Commands::Ats { resume } => {
            cli::validate_file_extension(&resume, &["pdf", "txt"])
                .map_err(|e| ResumeMatcherError::InvalidInput(format!("Resume file: {}", e)))?;

            let text = input_manager.extract_text(&resume).await?;
            let report = score_ats(&text);

            println!(
                "\nATS compatibility: {}",
                format_score(report.score, config.output.color_output)
            );
            for issue in &report.issues {
                println!("  - {}", issue);
            }
        }
    }

    Ok(())
}

fn preview(keywords: &[String], limit: usize) -> String {
    let shown: Vec<&str> = keywords.iter().take(limit).map(String::as_str).collect();
    if keywords.len() > limit {
        format!("{}, ...", shown.join(", "))
    } else {
        shown.join(", ")
    }
}

fn format_percent(percent: f64, color: bool) -> String {
    let text = format!("{:.2}%", percent);
    if !color {
        return text;
    }
    if percent >= 70.0 {
        text.green().to_string()
    } else if percent >= 40.0 {
        text.yellow().to_string()
    } else {
        text.red().to_string()
    }
}

fn format_score(score: u32, color: bool) -> String {
    let text = format!("{}/100", score);
    if !color {
        return text;
    }
    if score >= 80 {
        text.green().to_string()
    } else if score >= 50 {
        text.yellow().to_string()
    } else {
        text.red().to_string()
    }
}
