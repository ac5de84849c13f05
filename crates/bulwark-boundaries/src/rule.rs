//! Rule activation: the single entry point for checking imports.

use std::path::Path;

use tracing::{debug, warn};

use crate::classify::classify;
use crate::options::RuleOptions;
use crate::report::{Diagnostic, ImportStatement, SourceRange, report};
use crate::rules::{Verdict, evaluate};
use crate::topology::WorkspaceTopology;

/// The module boundary rule, bound to a topology and its options.
///
/// Holds no mutable state; a single instance can check any number of
/// statements, from any number of threads.
#[derive(Debug, Clone)]
pub struct ModuleBoundaryRule<'t> {
    topology: &'t WorkspaceTopology,
    options: RuleOptions,
}

impl<'t> ModuleBoundaryRule<'t> {
    /// Rule name used in diagnostics output.
    pub const NAME: &'static str = "enforce-module-boundaries";

    /// Activate the rule for a topology.
    #[must_use]
    pub fn new(topology: &'t WorkspaceTopology, options: RuleOptions) -> Self {
        for name in options.lazy_load() {
            if !topology.is_library_name(name) {
                warn!(name, "Lazy-loaded name does not match any known library");
            }
        }
        Self { topology, options }
    }

    /// The topology this rule checks against.
    #[must_use]
    pub fn topology(&self) -> &'t WorkspaceTopology {
        self.topology
    }

    /// The active options.
    #[must_use]
    pub fn options(&self) -> &RuleOptions {
        &self.options
    }

    /// Classify and evaluate one import without positioning it.
    #[must_use]
    pub fn verdict(&self, source_file: &Path, specifier: &str) -> Verdict {
        let classification = classify(self.topology, source_file, specifier);
        evaluate(self.topology, &classification, specifier, &self.options)
    }

    /// Check one statement.
    #[must_use]
    pub fn check(&self, statement: &ImportStatement) -> Option<Diagnostic> {
        let verdict = self.verdict(&statement.source_file, &statement.specifier);
        report(statement, verdict)
    }

    /// Check a sequence of statements, returning diagnostics in input order.
    pub fn check_all<'s, I>(&self, statements: I) -> Vec<Diagnostic>
    where
        I: IntoIterator<Item = &'s ImportStatement>,
    {
        let mut checked = 0usize;
        let diagnostics: Vec<Diagnostic> = statements
            .into_iter()
            .inspect(|_| checked = checked.saturating_add(1))
            .filter_map(|statement| self.check(statement))
            .collect();

        debug!(
            checked,
            violations = diagnostics.len(),
            "Checked import statements"
        );
        diagnostics
    }

    /// Check the imports of one file, given as `(specifier, range)` pairs.
    pub fn check_file<'a, I>(&self, source_file: &Path, imports: I) -> Vec<Diagnostic>
    where
        I: IntoIterator<Item = (&'a str, SourceRange)>,
    {
        imports
            .into_iter()
            .filter_map(|(specifier, range)| {
                self.check(&ImportStatement::new(source_file, specifier, range))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::ViolationKind;

    fn topology() -> WorkspaceTopology {
        WorkspaceTopology::builder("mycompany")
            .workspace_root("/proj/mycompany")
            .project("libgroup/mylib", "libs/libgroup/mylib")
            .project("myapp", "apps/myapp")
            .build()
            .unwrap()
    }

    #[test]
    fn test_check_all_keeps_input_order() {
        let topology = topology();
        let rule = ModuleBoundaryRule::new(&topology, RuleOptions::default());
        let file = "/proj/mycompany/apps/myapp/src/main.ts";
        let statements = [
            ImportStatement::new(file, "@mycompany/libgroup/mylib/b", SourceRange::new(40, 10)),
            ImportStatement::new(file, "@mycompany/libgroup/mylib", SourceRange::new(20, 10)),
            ImportStatement::new(file, "libs/libgroup/mylib", SourceRange::new(0, 10)),
        ];

        let diagnostics = rule.check_all(&statements);
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].range_start, 40);
        assert_eq!(diagnostics[0].kind, ViolationKind::DeepImport);
        assert_eq!(diagnostics[1].range_start, 0);
        assert_eq!(diagnostics[1].kind, ViolationKind::MissingScopePrefix);
    }

    #[test]
    fn test_check_file() {
        let topology = topology();
        let rule = ModuleBoundaryRule::new(&topology, RuleOptions::default());
        let diagnostics = rule.check_file(
            Path::new("/proj/mycompany/libs/libgroup/mylib/src/index.ts"),
            [
                ("./internal", SourceRange::new(0, 12)),
                ("@mycompany/myapp", SourceRange::new(30, 18)),
            ],
        );
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "imports of apps are forbidden");
    }

    #[test]
    fn test_rule_shared_across_threads() {
        let topology = topology();
        let rule = ModuleBoundaryRule::new(&topology, RuleOptions::default());
        let file = Path::new("/proj/mycompany/apps/myapp/src/main.ts");

        let rejected = std::thread::scope(|s| {
            let handles: Vec<_> = ["@mycompany/libgroup/mylib", "@mycompany/libgroup/mylib/x"]
                .into_iter()
                .map(|specifier| {
                    let rule = &rule;
                    s.spawn(move || rule.verdict(file, specifier).is_rejected())
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap())
                .collect::<Vec<_>>()
        });
        assert_eq!(rejected, [false, true]);
    }
}
