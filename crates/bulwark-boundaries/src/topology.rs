//! Workspace topology: the set of application and library roots.

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BoundaryError, BoundaryResult};
use crate::path;

/// Default base directory for libraries.
pub const DEFAULT_LIBS_DIR: &str = "libs";
/// Default base directory for applications.
pub const DEFAULT_APPS_DIR: &str = "apps";

/// Normalized path prefix of one application or library, relative to the
/// workspace root (e.g. `libs/group/mylib`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Root(String);

impl Root {
    /// Create a root from a raw path, normalizing separators and stripping
    /// leading `./`, leading `/` and trailing `/`.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(path::normalize_prefix(raw))
    }

    /// The root as a `/`-separated string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether a workspace-relative path is this root or lies below it.
    ///
    /// Matching is by whole path segment: `libs/a` claims `libs/a/x` but
    /// not `libs/ab`.
    #[must_use]
    pub fn claims(&self, relative_path: &str) -> bool {
        relative_path
            .strip_prefix(self.0.as_str())
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Root {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Whether a project is a library or an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectKind {
    /// Importable through the namespace prefix.
    Library,
    /// Never importable from another project.
    Application,
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Library => write!(f, "library"),
            Self::Application => write!(f, "application"),
        }
    }
}

/// One application or library in the workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Name as written after the namespace prefix (e.g. `group/mylib`).
    pub name: String,
    /// Root path prefix.
    pub root: Root,
    /// Library or application.
    pub kind: ProjectKind,
}

/// Read-only description of every governed project in a workspace.
///
/// Built once per run with [`WorkspaceTopology::builder`] and shared by
/// reference afterwards.
#[derive(Debug, Clone)]
pub struct WorkspaceTopology {
    namespace: String,
    scope: String,
    workspace_root: String,
    libs_dir: String,
    apps_dir: String,
    /// Sorted longest root first.
    projects: Vec<Project>,
    lib_names: BTreeSet<String>,
    app_names: BTreeSet<String>,
}

impl WorkspaceTopology {
    /// Start building a topology for the given namespace prefix (without `@`).
    #[must_use]
    pub fn builder(namespace: impl Into<String>) -> TopologyBuilder {
        TopologyBuilder::new(namespace)
    }

    /// Namespace prefix without the leading `@` (e.g. `mycompany`).
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Package scope with the leading `@` (e.g. `@mycompany`).
    #[must_use]
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Absolute workspace root as a `/`-separated string, or empty when
    /// source paths are already workspace-relative.
    #[must_use]
    pub fn workspace_root(&self) -> &str {
        &self.workspace_root
    }

    /// Base directory holding libraries.
    #[must_use]
    pub fn libs_dir(&self) -> &str {
        &self.libs_dir
    }

    /// Base directory holding applications.
    #[must_use]
    pub fn apps_dir(&self) -> &str {
        &self.apps_dir
    }

    /// All projects, longest root first.
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// All roots, longest first.
    pub fn roots(&self) -> impl Iterator<Item = &Root> {
        self.projects.iter().map(|p| &p.root)
    }

    /// Library names, as written after the scope.
    pub fn library_names(&self) -> impl Iterator<Item = &str> {
        self.lib_names.iter().map(String::as_str)
    }

    /// Application names, as written after the scope.
    pub fn application_names(&self) -> impl Iterator<Item = &str> {
        self.app_names.iter().map(String::as_str)
    }

    /// Whether `name` is a known library name.
    #[must_use]
    pub fn is_library_name(&self, name: &str) -> bool {
        self.lib_names.contains(name)
    }

    /// Whether `name` is a known application name.
    #[must_use]
    pub fn is_application_name(&self, name: &str) -> bool {
        self.app_names.contains(name)
    }

    /// The longest root claiming a workspace-relative path.
    #[must_use]
    pub fn root_for(&self, relative_path: &str) -> Option<&Root> {
        self.project_for(relative_path).map(|p| &p.root)
    }

    /// The project whose root is the longest one claiming a workspace-relative path.
    #[must_use]
    pub fn project_for(&self, relative_path: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.root.claims(relative_path))
    }

    /// Look up the project owning a root.
    #[must_use]
    pub fn project(&self, root: &Root) -> Option<&Project> {
        self.projects.iter().find(|p| &p.root == root)
    }

    /// Whether a root belongs to an application.
    #[must_use]
    pub fn is_application_root(&self, root: &Root) -> bool {
        self.project(root)
            .is_some_and(|p| p.kind == ProjectKind::Application)
    }

    /// Whether a root belongs to a library.
    #[must_use]
    pub fn is_library_root(&self, root: &Root) -> bool {
        self.project(root)
            .is_some_and(|p| p.kind == ProjectKind::Library)
    }
}

/// Builder for [`WorkspaceTopology`].
#[derive(Debug, Clone)]
pub struct TopologyBuilder {
    namespace: String,
    workspace_root: String,
    libs_dir: String,
    apps_dir: String,
    projects: Vec<(String, String)>,
}

impl TopologyBuilder {
    /// Create a builder with the default `libs` / `apps` base directories.
    #[must_use]
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            workspace_root: String::new(),
            libs_dir: DEFAULT_LIBS_DIR.to_owned(),
            apps_dir: DEFAULT_APPS_DIR.to_owned(),
            projects: Vec::new(),
        }
    }

    /// Set the absolute workspace root that source file paths are relative to.
    #[must_use]
    pub fn workspace_root(mut self, root: impl AsRef<Path>) -> Self {
        let collapsed = path::collapse(&path::to_slashes(root.as_ref()));
        self.workspace_root = if collapsed.len() > 1 {
            collapsed.trim_end_matches('/').to_owned()
        } else {
            collapsed
        };
        self
    }

    /// Set the libraries base directory.
    #[must_use]
    pub fn libs_dir(mut self, dir: impl Into<String>) -> Self {
        self.libs_dir = dir.into();
        self
    }

    /// Set the applications base directory.
    #[must_use]
    pub fn apps_dir(mut self, dir: impl Into<String>) -> Self {
        self.apps_dir = dir.into();
        self
    }

    /// Add a project. Its kind is derived from the base directory its root
    /// starts with.
    #[must_use]
    pub fn project(mut self, name: impl Into<String>, root: impl Into<String>) -> Self {
        self.projects.push((name.into(), root.into()));
        self
    }

    /// Validate and build the topology.
    ///
    /// # Errors
    ///
    /// Returns a [`BoundaryError`] if the namespace or a base directory is
    /// invalid, a project root is outside both base directories, or a
    /// root or name is repeated.
    pub fn build(self) -> BoundaryResult<WorkspaceTopology> {
        let namespace = self.namespace.trim().to_owned();
        validate_namespace(&namespace)?;

        let libs_dir = path::normalize_prefix(&self.libs_dir);
        if libs_dir.is_empty() {
            return Err(BoundaryError::InvalidBaseDir {
                which: "libs",
                dir: self.libs_dir,
            });
        }
        let apps_dir = path::normalize_prefix(&self.apps_dir);
        if apps_dir.is_empty() || apps_dir == libs_dir {
            return Err(BoundaryError::InvalidBaseDir {
                which: "apps",
                dir: self.apps_dir,
            });
        }

        let libs_prefix = format!("{libs_dir}/");
        let apps_prefix = format!("{apps_dir}/");

        let mut projects = Vec::with_capacity(self.projects.len());
        let mut seen_roots = HashSet::new();
        let mut lib_names = BTreeSet::new();
        let mut app_names = BTreeSet::new();

        for (raw_name, raw_root) in self.projects {
            let root = Root::new(&raw_root);
            let name = raw_name.trim().to_owned();
            if name.is_empty() {
                return Err(BoundaryError::EmptyProjectName {
                    root: root.to_string(),
                });
            }

            let kind = if root.as_str().starts_with(&libs_prefix) {
                ProjectKind::Library
            } else if root.as_str().starts_with(&apps_prefix) {
                ProjectKind::Application
            } else {
                return Err(BoundaryError::UnknownProjectKind {
                    name,
                    root: root.to_string(),
                    libs_dir,
                    apps_dir,
                });
            };

            if !seen_roots.insert(root.clone()) {
                return Err(BoundaryError::DuplicateRoot {
                    root: root.to_string(),
                });
            }
            if lib_names.contains(&name) || app_names.contains(&name) {
                return Err(BoundaryError::DuplicateName { name });
            }
            match kind {
                ProjectKind::Library => lib_names.insert(name.clone()),
                ProjectKind::Application => app_names.insert(name.clone()),
            };

            projects.push(Project { name, root, kind });
        }

        // Longest first so that `libs/reporting-ui` wins over `libs/reporting`.
        projects.sort_by(|a, b| {
            b.root
                .as_str()
                .len()
                .cmp(&a.root.as_str().len())
                .then_with(|| a.root.cmp(&b.root))
        });

        debug!(
            namespace = %namespace,
            libraries = lib_names.len(),
            applications = app_names.len(),
            "Built workspace topology"
        );

        Ok(WorkspaceTopology {
            scope: format!("@{namespace}"),
            namespace,
            workspace_root: self.workspace_root,
            libs_dir,
            apps_dir,
            projects,
            lib_names,
            app_names,
        })
    }
}

fn validate_namespace(namespace: &str) -> BoundaryResult<()> {
    let reason = if namespace.is_empty() {
        "namespace must not be empty"
    } else if namespace.contains('@') {
        "namespace must be given without '@'"
    } else if namespace.contains('/') || namespace.contains('\\') {
        "namespace must not contain path separators"
    } else if namespace.chars().any(char::is_whitespace) {
        "namespace must not contain whitespace"
    } else {
        return Ok(());
    };
    Err(BoundaryError::InvalidNamespace {
        namespace: namespace.to_owned(),
        reason: reason.to_owned(),
    })
}
