//! Console output formatter for backend responses

use colored::Colorize;
use hackrx_domain::{LoadingPhase, OutputFormat};
use serde_json::Value;

/// Formats submission output for console display
pub struct ResponseFormatter;

impl ResponseFormatter {
    /// Spinner / status line for a loading phase
    pub fn format_status(phase: LoadingPhase, elapsed_secs: u64) -> String {
        format!("{} {}", phase.message(), format!("{}s", elapsed_secs).dimmed())
    }

    /// Format a successful response
    pub fn format_result(response: &Value, elapsed_secs: u64, format: OutputFormat) -> String {
        let json = Self::format_json(response);
        match format {
            OutputFormat::Pretty => format!(
                "{}\n{}",
                format!("Completed in {}s", elapsed_secs).green().bold(),
                json
            ),
            OutputFormat::Json => json,
        }
    }

    /// Format as pretty-printed JSON
    pub fn format_json(response: &Value) -> String {
        serde_json::to_string_pretty(response).unwrap_or_else(|_| response.to_string())
    }

    /// Format a failure message
    pub fn format_error(message: &str) -> String {
        format!("{} {}", "Error:".red().bold(), message.red())
    }

    /// Format a validation alert
    pub fn format_alert(message: &str) -> String {
        format!("{} {}", "!".yellow().bold(), message)
    }
}
