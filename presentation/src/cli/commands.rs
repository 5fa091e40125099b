//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for successful responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Elapsed-time line followed by pretty-printed JSON
    Pretty,
    /// Pretty-printed JSON only
    Json,
}

impl From<OutputFormat> for hackrx_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Pretty => hackrx_domain::OutputFormat::Pretty,
            OutputFormat::Json => hackrx_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for hackrx-client
#[derive(Parser, Debug)]
#[command(name = "hackrx-client")]
#[command(author, version, about = "Ask questions about a document through a HackRx backend")]
#[command(long_about = r#"
hackrx-client sends a document URL and a list of questions to a HackRx
backend and prints the JSON answers.

Questions are comma-separated; blank entries are ignored.

Configuration is loaded from (in priority order):
1. HACKRX_* environment variables   e.g. HACKRX_BACKEND__API_TOKEN
2. --config <path>                  Explicit config file
3. ./hackrx.toml                    Project-level config
4. ~/.config/hackrx-client/config.toml   Global config

Example:
  hackrx-client run -d https://example.com/policy.pdf --questions "What is the grace period?, Is maternity covered?"
  hackrx-client summarize --clauses "Surgery must be pre-approved, Cosmetic procedures are not covered"
  hackrx-client upload ./policy.pdf
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress the spinner; print plain status lines instead
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Backend base URL (overrides configuration)
    #[arg(long, value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// Bearer token for the backend (overrides configuration)
    #[arg(long, value_name = "TOKEN", global = true)]
    pub token: Option<String>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Ask questions about a document (POST /hackrx/run)
    Run {
        /// URL of the document to query
        #[arg(short, long, value_name = "URL", default_value = "")]
        document: String,

        /// Comma-separated questions
        #[arg(long, value_name = "TEXT", default_value = "")]
        questions: String,
    },

    /// Summarize policy clauses (POST /hackrx/summarize)
    Summarize {
        /// Comma-separated clauses
        #[arg(short, long, value_name = "TEXT", default_value = "")]
        clauses: String,
    },

    /// Upload a local document for indexing (POST /hackrx/upload)
    Upload {
        /// Path to a PDF, DOCX or text file
        path: PathBuf,
    },
}
