//! Import statements and positioned diagnostics.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::rules::{Verdict, ViolationKind};

/// Offset and length of an import specifier in its source file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceRange {
    /// Offset of the first character.
    pub start: usize,
    /// Length in characters.
    pub length: usize,
}

impl SourceRange {
    /// Create a range.
    #[must_use]
    pub fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }
}

/// One import declaration, as extracted by a parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportStatement {
    /// Path of the importing file.
    pub source_file: PathBuf,
    /// Module specifier, without quotes.
    pub specifier: String,
    /// Position of the import in the file.
    #[serde(default)]
    pub range: SourceRange,
}

impl ImportStatement {
    /// Create an import statement.
    #[must_use]
    pub fn new(
        source_file: impl Into<PathBuf>,
        specifier: impl Into<String>,
        range: SourceRange,
    ) -> Self {
        Self {
            source_file: source_file.into(),
            specifier: specifier.into(),
            range,
        }
    }

    /// Create an import statement from a string literal as written in
    /// source, stripping one pair of matching quotes.
    #[must_use]
    pub fn from_literal(source_file: impl Into<PathBuf>, literal: &str, range: SourceRange) -> Self {
        Self::new(source_file, unquote(literal), range)
    }
}

fn unquote(literal: &str) -> &str {
    let trimmed = literal.trim();
    for quote in ['\'', '"', '`'] {
        if let Some(inner) = trimmed
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    trimmed
}

/// A boundary violation bound to its position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Path of the importing file.
    pub file_path: PathBuf,
    /// Offset of the import.
    pub range_start: usize,
    /// Length of the import.
    pub range_length: usize,
    /// Violation category.
    pub kind: ViolationKind,
    /// Fixed diagnostic message.
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {} ({})",
            self.file_path.display(),
            self.range_start,
            self.message,
            self.kind
        )
    }
}

/// Turn a verdict into a diagnostic positioned at the statement.
///
/// Accepted imports produce nothing.
#[must_use]
pub fn report(statement: &ImportStatement, verdict: Verdict) -> Option<Diagnostic> {
    match verdict {
        Verdict::Accept => None,
        Verdict::Reject { kind, message } => Some(Diagnostic {
            file_path: statement.source_file.clone(),
            range_start: statement.range.start,
            range_length: statement.range.length,
            kind,
            message,
        }),
    }
}
