//! Path classification: which roots an import connects.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::path;
use crate::topology::{Root, WorkspaceTopology};

/// Syntactic shape of an import specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecifierShape {
    /// Starts with `.` (`./x`, `../x`).
    Relative,
    /// Starts with `@{namespace}/`.
    Namespaced,
    /// Starts with the libraries or applications base directory.
    WorkspaceRelative,
    /// Anything else, typically a third-party package.
    External,
}

impl SpecifierShape {
    /// Determine the shape of a specifier within a topology.
    #[must_use]
    pub fn of(specifier: &str, topology: &WorkspaceTopology) -> Self {
        if specifier.starts_with('.') {
            Self::Relative
        } else if scoped_remainder(specifier, topology).is_some() {
            Self::Namespaced
        } else if under_dir(specifier, topology.libs_dir())
            || under_dir(specifier, topology.apps_dir())
        {
            Self::WorkspaceRelative
        } else {
            Self::External
        }
    }

    /// Stable lowercase name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Relative => "relative",
            Self::Namespaced => "namespaced",
            Self::WorkspaceRelative => "workspace_relative",
            Self::External => "external",
        }
    }
}

impl std::fmt::Display for SpecifierShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source and target roots of one import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification<'t> {
    /// Root containing the importing file.
    pub source: Option<&'t Root>,
    /// Root the specifier resolves into.
    pub target: Option<&'t Root>,
    /// Shape of the specifier.
    pub shape: SpecifierShape,
}

impl Classification<'_> {
    /// Both ends are governed roots.
    #[must_use]
    pub fn is_classified(&self) -> bool {
        self.source.is_some() && self.target.is_some()
    }

    /// Both ends are the same governed root.
    #[must_use]
    pub fn is_same_root(&self) -> bool {
        matches!((self.source, self.target), (Some(s), Some(t)) if s == t)
    }
}

/// Classify an import by the roots of its importing file and its target.
///
/// `source_file` may be absolute (it is then made relative to the topology's
/// workspace root) or already workspace-relative. Paths outside every
/// governed root classify as `None`.
#[must_use]
pub fn classify<'t>(
    topology: &'t WorkspaceTopology,
    source_file: &Path,
    specifier: &str,
) -> Classification<'t> {
    let source_path = path::collapse(&path::to_slashes(source_file));
    let source = path::relative_to(&source_path, topology.workspace_root())
        .and_then(|relative| topology.root_for(&relative));

    let shape = SpecifierShape::of(specifier, topology);
    let target = match shape {
        SpecifierShape::Relative => {
            let resolved = path::resolve(path::parent(&source_path), specifier);
            path::relative_to(&resolved, topology.workspace_root())
                .and_then(|relative| topology.root_for(&relative))
        },
        SpecifierShape::Namespaced => scoped_remainder(specifier, topology).and_then(|rest| {
            topology
                .root_for(&format!("{}/{rest}", topology.libs_dir()))
                .or_else(|| topology.root_for(&format!("{}/{rest}", topology.apps_dir())))
        }),
        SpecifierShape::WorkspaceRelative => topology.root_for(specifier),
        SpecifierShape::External => None,
    };

    trace!(
        file = %source_path,
        specifier,
        ?shape,
        source = source.map(Root::as_str),
        target = target.map(Root::as_str),
        "Classified import"
    );

    Classification {
        source,
        target,
        shape,
    }
}

/// The part of a specifier after `@{namespace}/`.
fn scoped_remainder<'s>(specifier: &'s str, topology: &WorkspaceTopology) -> Option<&'s str> {
    specifier
        .strip_prefix(topology.scope())
        .and_then(|rest| rest.strip_prefix('/'))
}

fn under_dir(specifier: &str, dir: &str) -> bool {
    specifier
        .strip_prefix(dir)
        .is_some_and(|rest| rest.starts_with('/'))
}
