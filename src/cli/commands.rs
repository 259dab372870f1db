//! CLI command implementations

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::cli::args::ConfigCommand;
use crate::config::Settings;
use crate::llm::{build_analysis_prompt, build_provider, PromptTemplate};
use crate::transcript::{normalize, FileInput};
use crate::CandorError;

/// Run one analysis: normalize input, build the prompt, call the model.
///
/// Terminal outcomes are exclusive: a no-input warning (exit 2), the analysis
/// text on stdout, or an error. A file always takes precedence over `--text`.
pub async fn analyze_transcript(
    settings: &Settings,
    file: Option<PathBuf>,
    text: Option<String>,
    template: Option<String>,
    show_prompt: bool,
) -> Result<()> {
    let file_input = match file {
        Some(path) => {
            let bytes = std::fs::read(&path)
                .with_context(|| format!("Failed to read transcript file: {}", path.display()))?;
            Some(FileInput::new(path.to_string_lossy().into_owned(), bytes))
        }
        None => None,
    };

    let transcript = match normalize(file_input.as_ref(), text.as_deref()) {
        Ok(transcript) => transcript,
        Err(CandorError::NoInput) => {
            eprintln!("Warning: no transcript provided. Pass a file or --text, then retry.");
            std::process::exit(2);
        }
        Err(e) => return Err(e.into()),
    };

    let template_name = template.as_deref().unwrap_or(&settings.analysis.template);
    let template = PromptTemplate::from_name(template_name).with_context(|| {
        format!(
            "Unknown template '{}'. Supported templates: general, proctor",
            template_name
        )
    })?;

    let prompt = build_analysis_prompt(template, transcript.as_str());

    if show_prompt {
        println!("{}", prompt);
        return Ok(());
    }

    let provider = build_provider(settings)?;

    tracing::info!(
        "Analyzing transcript ({} chars) with template '{}'",
        transcript.as_str().len(),
        template.name()
    );

    let analysis = provider
        .analyze(&prompt)
        .await
        .map_err(|e| CandorError::Service(e.to_string()))?;

    println!("{}", analysis);

    Ok(())
}

/// List the available prompt templates.
pub fn list_templates() {
    for template in [PromptTemplate::General, PromptTemplate::Proctor] {
        println!("{:<10} {}", template.name(), template.describe());
    }
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(settings)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}
