//! Presentation layer for hackrx-client
//!
//! This crate contains CLI definitions, output formatters and the
//! terminal views submissions render into.

pub mod cli;
pub mod output;
pub mod view;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use output::console::ResponseFormatter;
pub use view::{plain::PlainView, terminal::TerminalView};
