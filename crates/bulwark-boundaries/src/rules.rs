//! The ordered boundary rule chain.
//!
//! Rules are tried in a fixed order and the first one that applies decides
//! the verdict:
//!
//! 1. allow-listed specifiers are accepted
//! 2. relative imports written under the scope (`@ns/./x`) are rejected
//! 3. imports with an ungoverned end, and relative imports within one root, are accepted
//! 4. workspace-relative imports within one root are accepted
//! 5. imports into another application are rejected
//! 6. imports of lazy-loaded libraries are rejected
//! 7. deep imports into a library are rejected
//! 8. anything that is not exactly `@ns/<library>` is rejected
//!
//! Everything else is accepted.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classify::{Classification, SpecifierShape};
use crate::options::RuleOptions;
use crate::topology::{Root, WorkspaceTopology};

/// Category of a boundary violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// `@ns/./x` style import.
    NamespaceRelativeImport,
    /// Import of an application.
    AppImport,
    /// Import of a lazy-loaded library.
    LazyLoadedImport,
    /// Import of a library sub-path.
    DeepImport,
    /// Library import not written as `@ns/<library>`.
    MissingScopePrefix,
}

impl ViolationKind {
    /// Stable machine-readable code.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::NamespaceRelativeImport => "namespace_relative_import",
            Self::AppImport => "app_import",
            Self::LazyLoadedImport => "lazy_loaded_import",
            Self::DeepImport => "deep_import",
            Self::MissingScopePrefix => "missing_scope_prefix",
        }
    }

    /// Human-readable message for a workspace namespace (without `@`).
    #[must_use]
    pub fn message(self, namespace: &str) -> String {
        match self {
            Self::NamespaceRelativeImport => {
                format!("relative imports using @{namespace}/ are forbidden")
            },
            Self::AppImport => "imports of apps are forbidden".to_owned(),
            Self::LazyLoadedImport => "imports of lazy-loaded libraries are forbidden".to_owned(),
            Self::DeepImport => "deep imports into libraries are forbidden".to_owned(),
            Self::MissingScopePrefix => format!("library imports must start with @{namespace}/"),
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Outcome of evaluating one import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    /// The import is permitted.
    Accept,
    /// The import crosses a forbidden boundary.
    Reject {
        /// Violation category.
        kind: ViolationKind,
        /// Fixed diagnostic message.
        message: String,
    },
}

impl Verdict {
    /// Build a rejection with the message for `namespace`.
    #[must_use]
    pub fn reject(kind: ViolationKind, namespace: &str) -> Self {
        Self::Reject {
            kind,
            message: kind.message(namespace),
        }
    }

    /// Check if the import was accepted.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accept)
    }

    /// Check if the import was rejected.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Reject { .. })
    }

    /// Violation category, if rejected.
    #[must_use]
    pub fn kind(&self) -> Option<ViolationKind> {
        match self {
            Self::Accept => None,
            Self::Reject { kind, .. } => Some(*kind),
        }
    }

    /// Diagnostic message, if rejected.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Accept => None,
            Self::Reject { message, .. } => Some(message),
        }
    }
}

/// Evaluate the rule chain for one classified import.
#[must_use]
pub fn evaluate(
    topology: &WorkspaceTopology,
    classification: &Classification<'_>,
    specifier: &str,
    options: &RuleOptions,
) -> Verdict {
    let verdict = match violation(topology, classification, specifier, options) {
        Some(kind) => Verdict::reject(kind, topology.namespace()),
        None => Verdict::Accept,
    };

    debug!(
        specifier,
        source = classification.source.map(Root::as_str),
        target = classification.target.map(Root::as_str),
        violation = verdict.kind().map(ViolationKind::code),
        "Evaluated import"
    );

    verdict
}

fn violation(
    topology: &WorkspaceTopology,
    classification: &Classification<'_>,
    specifier: &str,
    options: &RuleOptions,
) -> Option<ViolationKind> {
    if options.is_allowed(specifier) {
        return None;
    }

    let scope = topology.scope();
    let scoped = specifier
        .strip_prefix(scope)
        .and_then(|rest| rest.strip_prefix('/'));

    if scoped.is_some_and(|rest| rest.starts_with('.')) {
        return Some(ViolationKind::NamespaceRelativeImport);
    }

    let (Some(source), Some(target)) = (classification.source, classification.target) else {
        return None;
    };
    let same_root = source == target;

    if same_root
        && matches!(
            classification.shape,
            SpecifierShape::Relative | SpecifierShape::WorkspaceRelative
        )
    {
        return None;
    }

    if !same_root && topology.is_application_root(target) {
        return Some(ViolationKind::AppImport);
    }

    let Some(name_path) = scoped else {
        return Some(ViolationKind::MissingScopePrefix);
    };

    if options
        .lazy_load()
        .any(|lib| names_or_enters(name_path, lib))
    {
        return Some(ViolationKind::LazyLoadedImport);
    }

    if topology
        .library_names()
        .any(|lib| enters(name_path, lib))
    {
        return Some(ViolationKind::DeepImport);
    }

    if topology.is_library_name(name_path) {
        None
    } else if topology.is_application_name(name_path) {
        Some(ViolationKind::AppImport)
    } else {
        Some(ViolationKind::MissingScopePrefix)
    }
}

/// `path` is `name` or a sub-path of it.
fn names_or_enters(path: &str, name: &str) -> bool {
    path == name || enters(path, name)
}

/// `path` is a strict sub-path of `name` (`name/...`).
fn enters(path: &str, name: &str) -> bool {
    path.strip_prefix(name)
        .is_some_and(|rest| rest.starts_with('/'))
}
