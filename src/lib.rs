//! candor - Screen interview transcripts for AI-generated or AI-assisted answers
//!
//! Normalizes a transcript (uploaded file or pasted text), embeds it in a fixed
//! analysis prompt, and asks a Gemini model for its judgment.

pub mod cli;
pub mod config;
pub mod llm;
pub mod transcript;

use thiserror::Error;

/// Main error type for candor
#[derive(Error, Debug)]
pub enum CandorError {
    #[error("No transcript provided. Supply a file or pasted text.")]
    NoInput,

    #[error("Malformed JSON transcript: {0}")]
    MalformedJson(String),

    #[error("Transcript file is not valid UTF-8: {0}")]
    Decode(String),

    #[error("Analysis service error: {0}")]
    Service(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CandorError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "candor";
