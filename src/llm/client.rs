use anyhow::Result;
use async_trait::async_trait;

use crate::config::Settings;
use crate::llm::gemini::GeminiClient;

#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    /// Send one composed prompt to the model and return its text verdict.
    async fn analyze(&self, prompt: &str) -> Result<String>;
}

/// Build an analysis provider from runtime settings.
pub fn build_provider(settings: &Settings) -> Result<Box<dyn AnalysisProvider>> {
    match settings.llm.provider.to_lowercase().as_str() {
        "gemini" => Ok(Box::new(GeminiClient::from_settings(settings)?)),
        other => anyhow::bail!(
            "Unsupported llm.provider '{}'. Supported providers: gemini",
            other
        ),
    }
}
