//! candor - Interview transcript AI-assistance screening
//!
//! Entry point for the candor CLI application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use candor::cli::{Cli, Commands};
use candor::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Completions { shell } => {
            candor::cli::completions::print(shell);
        }
        Commands::Templates => {
            candor::cli::commands::list_templates();
        }
        command => {
            // Load configuration only for runtime commands.
            let settings = Settings::load()?;

            match command {
                Commands::Analyze {
                    file,
                    text,
                    template,
                    show_prompt,
                } => {
                    candor::cli::commands::analyze_transcript(
                        &settings,
                        file,
                        text,
                        template,
                        show_prompt,
                    )
                    .await?;
                }
                Commands::Config(config_cmd) => {
                    candor::cli::commands::config_command(&settings, config_cmd)?;
                }
                Commands::Completions { .. } | Commands::Templates => unreachable!(),
            }
        }
    }

    Ok(())
}
