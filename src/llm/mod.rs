//! LLM module for candor
//!
//! Prompt construction and the Gemini-backed analysis call.

mod client;
mod gemini;
mod prompts;

pub use client::{build_provider, AnalysisProvider};
pub use gemini::GeminiClient;
pub use prompts::{build_analysis_prompt, PromptTemplate};
