//! CLI theme and styling.

use bulwark_boundaries::{Diagnostic, ProjectKind};
use colored::Colorize;

/// CLI theme configuration.
pub(crate) struct Theme;

impl Theme {
    /// Format a header.
    pub(crate) fn header(text: &str) -> String {
        format!("{}", text.bold().cyan())
    }

    /// Format a success message.
    pub(crate) fn success(text: &str) -> String {
        format!("{} {}", "✓".green(), text)
    }

    /// Format an error message.
    pub(crate) fn error(text: &str) -> String {
        format!("{} {}", "✗".red(), text.red())
    }

    /// Format a dimmed message.
    pub(crate) fn dimmed(text: &str) -> String {
        format!("{}", text.dimmed())
    }

    /// Format a key-value pair.
    pub(crate) fn kv(key: &str, value: &str) -> String {
        format!("{}: {}", key.bold(), value)
    }

    /// Format a project kind.
    pub(crate) fn kind(kind: ProjectKind) -> String {
        match kind {
            ProjectKind::Library => "library".green().to_string(),
            ProjectKind::Application => "application".yellow().to_string(),
        }
    }

    /// Format a diagnostic as `file:offset: message (kind)`.
    pub(crate) fn diagnostic(d: &Diagnostic) -> String {
        format!(
            "{}:{}: {} {}",
            d.file_path.display().to_string().bold(),
            d.range_start,
            d.message.red(),
            format!("({})", d.kind).dimmed()
        )
    }
}
