//! Rendering of the reconciliation status record

mod formatters;

pub use formatters::{SpacedFormatter, to_spaced_string};

use account_alias_core::ReconciliationResult;
use anyhow::Result;

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One line, `{"changed": true, ...}`
    Line,
    /// Indented JSON
    Pretty,
}

impl OutputFormat {
    pub fn from_pretty(pretty: bool) -> Self {
        if pretty { Self::Pretty } else { Self::Line }
    }

    /// Render a status record in this format
    pub fn render(&self, result: &ReconciliationResult) -> Result<String> {
        match self {
            Self::Line => to_spaced_string(result),
            Self::Pretty => Ok(serde_json::to_string_pretty(result)?),
        }
    }
}
