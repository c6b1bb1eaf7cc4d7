//! Text extraction from resume documents

use crate::error::{Result, ResumeMatcherError};
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Extracts the concatenation of each page's text, in page order. Pages that
/// yield no text contribute nothing; a document that cannot be opened or
/// parsed fails the whole extraction.
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(|e| {
            ResumeMatcherError::DocumentUnreadable(format!("{}: {}", path.display(), e))
        })?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            ResumeMatcherError::DocumentUnreadable(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(text)
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await.map_err(ResumeMatcherError::Io)?;
        Ok(content)
    }
}
