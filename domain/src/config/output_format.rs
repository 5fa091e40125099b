//! Output format value object

use serde::{Deserialize, Serialize};

/// How a successful backend response is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Elapsed-time line followed by pretty-printed JSON (default)
    #[default]
    Pretty,
    /// Pretty-printed JSON only, suitable for piping
    Json,
}
