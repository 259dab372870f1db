//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// candor - Screen interview transcripts for AI-generated or AI-assisted answers
#[derive(Parser, Debug)]
#[command(name = "candor")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze an interview transcript
    Analyze {
        /// Transcript file (.json is pretty-printed, anything else is read as UTF-8 text)
        file: Option<PathBuf>,

        /// Pasted transcript text (ignored when a file is given)
        #[arg(short, long)]
        text: Option<String>,

        /// Prompt template to use (general, proctor)
        #[arg(long)]
        template: Option<String>,

        /// Print the composed prompt instead of calling the model
        #[arg(long)]
        show_prompt: bool,
    },

    /// List available prompt templates
    Templates,

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
