//! `bulwark check`: run the rule over a batch of import statements.

use std::process::ExitCode;

use anyhow::Result;
use bulwark_boundaries::{Diagnostic, ModuleBoundaryRule};
use serde::Serialize;
use tracing::info;

use crate::config_bridge::{load_workspace, rule_options};
use crate::formatter::{OutputFormat, print_json};
use crate::input::read_imports;
use crate::theme::Theme;
use crate::{RuleArgs, WorkspaceArgs};

#[derive(Serialize)]
struct CheckReport<'a> {
    rule: &'static str,
    checked: usize,
    diagnostics: &'a [Diagnostic],
}

/// Check imports and print diagnostics; exit 1 if any were reported.
pub(crate) fn run_check(
    workspace: &WorkspaceArgs,
    rules: &RuleArgs,
    imports: &str,
    format: OutputFormat,
) -> Result<ExitCode> {
    let loaded = load_workspace(workspace)?;
    let options = rule_options(&loaded.rules, rules)?;
    let statements = read_imports(imports, &loaded.workspace_root)?;

    let rule = ModuleBoundaryRule::new(&loaded.topology, options);
    let diagnostics = rule.check_all(&statements);
    info!(
        checked = statements.len(),
        violations = diagnostics.len(),
        "Boundary check finished"
    );

    match format {
        OutputFormat::Json => print_json(&CheckReport {
            rule: ModuleBoundaryRule::NAME,
            checked: statements.len(),
            diagnostics: &diagnostics,
        })?,
        OutputFormat::Pretty => {
            for diagnostic in &diagnostics {
                println!("{}", Theme::diagnostic(diagnostic));
            }
            if diagnostics.is_empty() {
                println!(
                    "{}",
                    Theme::success(&format!(
                        "No boundary violations in {} imports",
                        statements.len()
                    ))
                );
            } else {
                println!(
                    "{}",
                    Theme::error(&format!(
                        "{} boundary violations in {} imports",
                        diagnostics.len(),
                        statements.len()
                    ))
                );
            }
        },
    }

    Ok(if diagnostics.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}
