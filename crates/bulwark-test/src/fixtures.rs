//! Fixtures for the reference workspace.
//!
//! The reference workspace lives at `/proj/mycompany` under the
//! `@mycompany` namespace with three libraries in a `libgroup` folder and
//! two applications.

use std::path::PathBuf;

use bulwark_boundaries::{ImportStatement, SourceRange, WorkspaceTopology};

/// Namespace of the reference workspace.
pub const NAMESPACE: &str = "mycompany";

/// Absolute root of the reference workspace.
pub const WORKSPACE_ROOT: &str = "/proj/mycompany";

/// A source file inside the `myapp` application.
pub const APP_SOURCE_FILE: &str = "/proj/mycompany/apps/myapp/src/main.ts";

/// A source file inside the `libgroup/mylib` library.
pub const LIB_SOURCE_FILE: &str = "/proj/mycompany/libs/libgroup/mylib/src/module.ts";

/// Projects of the reference workspace as `(name, root)` pairs.
pub const MYCOMPANY_PROJECTS: [(&str, &str); 5] = [
    ("libgroup/mylib", "libs/libgroup/mylib"),
    ("libgroup/mylib2", "libs/libgroup/mylib2"),
    ("libgroup/myliblazy", "libs/libgroup/myliblazy"),
    ("myapp", "apps/myapp"),
    ("myapp2", "apps/myapp2"),
];

/// Create the reference topology.
///
/// # Panics
///
/// Never for the built-in project list.
#[must_use]
pub fn mycompany_topology() -> WorkspaceTopology {
    topology_with(&MYCOMPANY_PROJECTS)
}

/// Create a topology at [`WORKSPACE_ROOT`] with custom projects.
///
/// # Panics
///
/// Panics if the projects do not form a valid topology.
#[must_use]
pub fn topology_with(projects: &[(&str, &str)]) -> WorkspaceTopology {
    projects
        .iter()
        .fold(
            WorkspaceTopology::builder(NAMESPACE).workspace_root(WORKSPACE_ROOT),
            |builder, (name, root)| builder.project(*name, *root),
        )
        .build()
        .expect("fixture topology is valid")
}

/// An import made from [`APP_SOURCE_FILE`].
#[must_use]
pub fn app_import(specifier: &str) -> ImportStatement {
    import_from(APP_SOURCE_FILE, specifier)
}

/// An import made from [`LIB_SOURCE_FILE`].
#[must_use]
pub fn lib_import(specifier: &str) -> ImportStatement {
    import_from(LIB_SOURCE_FILE, specifier)
}

/// An import made from any file, positioned at offset 0 with the length of
/// the quoted specifier.
#[must_use]
pub fn import_from(source_file: impl Into<PathBuf>, specifier: &str) -> ImportStatement {
    let length = specifier.chars().count().saturating_add(2);
    ImportStatement::new(source_file, specifier, SourceRange::new(0, length))
}
