//! Reading the legacy `.angular-cli.json` workspace file.
//!
//! Only the fields that describe the workspace shape are read:
//!
//! ```json
//! {
//!   "project": { "npmScope": "mycompany" },
//!   "apps": [
//!     { "name": "mylib", "root": "libs/mylib/src" },
//!     { "name": "myapp", "root": "apps/myapp/src" }
//!   ]
//! }
//! ```
//!
//! Each `root` points at a project's source folder, so the project root is
//! its parent directory. Entries outside `libs/` and `apps/` are skipped.

use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::error::{ConfigError, ConfigResult};
use crate::types::{DEFAULT_APPS_DIR, DEFAULT_LIBS_DIR, ProjectEntry, RuleConfig, WorkspaceManifest};

/// File name of the legacy workspace file.
pub const LEGACY_FILE_NAME: &str = ".angular-cli.json";

#[derive(Debug, Deserialize)]
struct AngularCliFile {
    project: AngularProject,
    #[serde(default)]
    apps: Vec<AngularApp>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AngularProject {
    npm_scope: String,
}

#[derive(Debug, Deserialize)]
struct AngularApp {
    name: Option<String>,
    root: String,
}

/// Convert the contents of a legacy workspace file into a manifest.
///
/// Unknown fields are ignored; the legacy file carries many settings that
/// have no meaning here. `origin` is only used in error messages.
///
/// # Errors
///
/// Returns [`ConfigError::JsonError`] if the text is not JSON or lacks
/// `project.npmScope`.
pub fn from_str(content: &str, origin: &Path) -> ConfigResult<WorkspaceManifest> {
    let file: AngularCliFile = serde_json::from_str(content).map_err(|e| ConfigError::JsonError {
        path: origin.display().to_string(),
        source: e,
    })?;

    let projects = file
        .apps
        .into_iter()
        .filter_map(|app| {
            let root = parent_dir(&app.root.replace('\\', "/")).to_owned();
            let under_base = [DEFAULT_LIBS_DIR, DEFAULT_APPS_DIR]
                .iter()
                .any(|base| root.starts_with(&format!("{base}/")));
            let Some(name) = app.name.filter(|n| !n.is_empty()) else {
                warn!(root = %root, "skipping legacy project entry without a name");
                return None;
            };
            if !under_base {
                warn!(name = %name, root = %root, "skipping legacy project outside libs/ and apps/");
                return None;
            }
            Some(ProjectEntry { name, root })
        })
        .collect();

    Ok(WorkspaceManifest {
        namespace: file.project.npm_scope,
        libs_dir: DEFAULT_LIBS_DIR.to_owned(),
        apps_dir: DEFAULT_APPS_DIR.to_owned(),
        projects,
        rules: RuleConfig::default(),
    })
}

fn parent_dir(root: &str) -> &str {
    let trimmed = root.trim_end_matches('/');
    trimmed.rfind('/').map_or(trimmed, |idx| &trimmed[..idx])
}
