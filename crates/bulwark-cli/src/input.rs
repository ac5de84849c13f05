//! Reading import statements fed to `bulwark check`.
//!
//! The input is either a JSON array or JSON Lines of records:
//!
//! ```json
//! {"file": "apps/web/src/main.ts", "specifier": "@acme/ui", "start": 120, "length": 10}
//! ```
//!
//! `specifier` may keep the quotes it has in source. `start` defaults to 0
//! and `length` to the length of the specifier as written. Relative `file`
//! paths are taken relative to the workspace root.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bulwark_boundaries::{ImportStatement, SourceRange};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ImportRecord {
    file: PathBuf,
    specifier: String,
    #[serde(default)]
    start: usize,
    #[serde(default)]
    length: Option<usize>,
}

impl ImportRecord {
    fn into_statement(self, workspace_root: &Path) -> ImportStatement {
        let length = self
            .length
            .unwrap_or_else(|| self.specifier.chars().count());
        let file = if self.file.is_absolute() {
            self.file
        } else {
            workspace_root.join(self.file)
        };
        ImportStatement::from_literal(
            file,
            &self.specifier,
            SourceRange::new(self.start, length),
        )
    }
}

/// Read import statements from a file, or stdin when `source` is `-`.
pub(crate) fn read_imports(source: &str, workspace_root: &Path) -> Result<Vec<ImportStatement>> {
    let text = if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read imports from stdin")?;
        buf
    } else {
        std::fs::read_to_string(source).with_context(|| format!("failed to read {source}"))?
    };
    let statements =
        parse_imports(&text, workspace_root).with_context(|| format!("invalid imports in {source}"))?;
    debug!(source, count = statements.len(), "Read import statements");
    Ok(statements)
}

/// Parse a JSON array or JSON Lines document of import records, anchoring
/// relative `file` paths at `workspace_root`.
pub(crate) fn parse_imports(text: &str, workspace_root: &Path) -> Result<Vec<ImportStatement>> {
    if text.trim_start().starts_with('[') {
        let records: Vec<ImportRecord> = serde_json::from_str(text)?;
        return Ok(records
            .into_iter()
            .map(|record| record.into_statement(workspace_root))
            .collect());
    }

    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            serde_json::from_str::<ImportRecord>(line)
                .map(|record| record.into_statement(workspace_root))
                .with_context(|| format!("line {}", idx.saturating_add(1)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOT: &str = "/work/acme";

    fn parse(text: &str) -> Result<Vec<ImportStatement>> {
        parse_imports(text, Path::new(ROOT))
    }

    #[test]
    fn test_json_array() {
        let statements = parse(
            r#"[{"file": "apps/a/main.ts", "specifier": "'@acme/ui'", "start": 7}]"#,
        )
        .unwrap();
        assert_eq!(statements.len(), 1);
        assert_eq!(
            statements[0].source_file,
            Path::new("/work/acme/apps/a/main.ts")
        );
        assert_eq!(statements[0].specifier, "@acme/ui");
        assert_eq!(statements[0].range, SourceRange::new(7, 10));
    }

    #[test]
    fn test_json_lines_skip_blank() {
        let text = "{\"file\": \"a.ts\", \"specifier\": \"x\"}\n\n{\"file\": \"b.ts\", \"specifier\": \"y\", \"length\": 3}\n";
        let statements = parse(text).unwrap();
        assert_eq!(statements.len(), 2);
        assert_eq!(statements[1].range, SourceRange::new(0, 3));
    }

    #[test]
    fn test_json_lines_error_names_line() {
        let text = "{\"file\": \"a.ts\", \"specifier\": \"x\"}\n{\"file\": \"b.ts\"}\n";
        let err = parse(text).unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn test_absolute_file_kept() {
        let statements =
            parse("{\"file\": \"/elsewhere/apps/a/main.ts\", \"specifier\": \"x\"}\n").unwrap();
        assert_eq!(
            statements[0].source_file,
            Path::new("/elsewhere/apps/a/main.ts")
        );
    }
}
