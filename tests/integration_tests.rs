//! Integration tests for the resume matcher

use resume_matcher::analysis::analyzer::AnalysisEngine;
use resume_matcher::analysis::ats::score_ats;
use resume_matcher::analysis::formatting::score_formatting;
use resume_matcher::analysis::keywords::extract_keywords;
use resume_matcher::config::Config;
use resume_matcher::input::manager::InputManager;
use resume_matcher::ResumeMatcherError;
use std::io::Write;
use std::path::Path;

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Python"));
    assert!(text.contains("Acme Corp"));
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resume.docx");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "not a supported format").unwrap();

    let manager = InputManager::new();
    let result = manager.extract_text(&path).await;
    assert!(matches!(
        result,
        Err(ResumeMatcherError::UnsupportedFormat(_))
    ));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let manager = InputManager::new();
    let result = manager
        .extract_text(Path::new("tests/fixtures/nonexistent.txt"))
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_unreadable_pdf() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.pdf");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "this is not a pdf").unwrap();

    let manager = InputManager::new();
    let result = manager.extract_text(&path).await;
    assert!(matches!(
        result,
        Err(ResumeMatcherError::DocumentUnreadable(_))
    ));
}

#[tokio::test]
async fn test_match_pipeline_end_to_end() {
    let manager = InputManager::new();
    let resume_text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let job_text = manager
        .extract_text(Path::new("tests/fixtures/sample_job.txt"))
        .await
        .unwrap();

    let engine = AnalysisEngine::new(&Config::default());
    let analysis = engine.analyze_match(&resume_text, &job_text).unwrap();

    assert!(analysis.match_percent > 0.0 && analysis.match_percent <= 100.0);
    assert!(analysis.matching_keywords.contains(&"python".to_string()));
    assert!(analysis.matching_keywords.contains(&"aws".to_string()));
    // the job asks for Terraform, the resume never mentions it
    assert!(analysis.missing_keywords.contains(&"terraform".to_string()));
    assert_eq!(analysis.required_years, 5);
    assert!(analysis.resume_years <= 15);
    assert!(analysis.ats.score <= 100);
}

#[tokio::test]
async fn test_keyword_extraction_from_fixture() {
    let manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();

    let keywords = extract_keywords(&text, 20);
    assert!(keywords.len() <= 20);
    assert!(keywords.contains(&"python".to_string()));
    for keyword in &keywords {
        assert_eq!(keyword, &keyword.to_lowercase());
        assert!(keyword.chars().count() > 3);
    }
}

#[tokio::test]
async fn test_formatting_report_on_fixture() {
    let manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();

    let report = score_formatting(&text);
    assert!(report.score <= 100);
    assert!(report.metrics.has_contact);
    assert!(report.metrics.has_experience);
    assert!(report.metrics.has_education);
    assert!(report.metrics.has_skills);
    assert!(report.metrics.bullet_points >= 10);
    assert!(report.metrics.listed_skills >= 5);
}

#[tokio::test]
async fn test_ats_report_on_fixture() {
    let manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();

    let report = score_ats(&text);
    assert_eq!(report.score, 100);
    assert!(report.issues.is_empty());
}
