//! CLI entrypoint for hackrx-client
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use hackrx_application::{
    QaBackend, SubmissionOutcome, SubmissionView, SubmitQuestionsInput, SubmitQuestionsUseCase,
    SummarizeClausesUseCase, UploadDocumentUseCase,
};
use hackrx_domain::OutputFormat;
use hackrx_infrastructure::{ConfigLoader, FileConfig, HttpQaBackend};
use hackrx_presentation::{Cli, Command, PlainView, TerminalView};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command.clone() else {
        bail!("No command given. Run `hackrx-client --help` for usage.");
    };

    let config = load_config(&cli)?;
    config.validate()?;
    debug!("Using backend {}", config.backend.base_url);

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    // === Dependency Injection ===
    let view: Arc<dyn SubmissionView> = if cli.quiet {
        Arc::new(PlainView::new(format))
    } else {
        Arc::new(TerminalView::new(format))
    };
    let backend: Arc<dyn QaBackend> = Arc::new(HttpQaBackend::new(
        config.backend.base_url.clone(),
        config.backend.token().unwrap_or_default(),
    )?);
    let feedback = config.feedback.to_settings();

    info!("Starting hackrx-client");

    let outcome = match command {
        Command::Run {
            document,
            questions,
        } => {
            SubmitQuestionsUseCase::new(backend, view)
                .with_feedback(feedback)
                .execute(SubmitQuestionsInput::new(document, questions))
                .await
        }
        Command::Summarize { clauses } => {
            SummarizeClausesUseCase::new(backend, view)
                .with_feedback(feedback)
                .execute(&clauses)
                .await
        }
        Command::Upload { path } => {
            UploadDocumentUseCase::new(backend, view)
                .with_feedback(feedback)
                .execute(&path)
                .await
        }
    };

    Ok(exit_code(&outcome))
}

/// Merge configuration sources, then apply command-line overrides.
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
    }
    .context("Failed to load configuration")?;

    if let Some(base_url) = &cli.base_url {
        config.backend.base_url = base_url.clone();
    }
    if let Some(token) = &cli.token {
        config.backend.api_token = Some(token.clone());
    }

    Ok(config)
}

fn exit_code(outcome: &SubmissionOutcome) -> ExitCode {
    match outcome {
        SubmissionOutcome::Completed { .. } => ExitCode::SUCCESS,
        SubmissionOutcome::Failed { .. } => ExitCode::from(1),
        SubmissionOutcome::Rejected(_) => ExitCode::from(2),
    }
}
