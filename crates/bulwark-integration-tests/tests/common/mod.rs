//! Shared helpers for integration tests.

use bulwark_boundaries::{Diagnostic, ImportStatement, ModuleBoundaryRule, RuleOptions, WorkspaceTopology};
use bulwark_test::{import_from, setup_test_logging};

/// Run the rule over `specifiers`, all imported from `source_file`.
#[allow(dead_code)]
pub fn run_rule(
    topology: &WorkspaceTopology,
    options: RuleOptions,
    source_file: &str,
    specifiers: &[&str],
) -> Vec<Diagnostic> {
    setup_test_logging("bulwark_boundaries=debug");
    let statements: Vec<ImportStatement> = specifiers
        .iter()
        .map(|specifier| import_from(source_file, specifier))
        .collect();
    ModuleBoundaryRule::new(topology, options).check_all(&statements)
}

/// Build options from string slices.
#[allow(dead_code)]
pub fn options(allow: &[&str], lazy_load: &[&str]) -> RuleOptions {
    RuleOptions::new(allow.iter().copied(), lazy_load.iter().copied()).unwrap()
}

/// Messages of a list of diagnostics.
#[allow(dead_code)]
pub fn messages(diagnostics: &[Diagnostic]) -> Vec<&str> {
    diagnostics.iter().map(|d| d.message.as_str()).collect()
}
