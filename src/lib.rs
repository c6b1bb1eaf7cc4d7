//! Resume matcher library
//!
//! Extracts text from resume documents and scores their relevance against a
//! job description: keyword matching, related-skill suggestions, experience
//! estimation, and formatting/ATS feedback.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;

pub use config::Config;
pub use error::{Result, ResumeMatcherError};
