//! Conversion from loaded configuration into boundary types.

use std::path::Path;

use bulwark_config::{RuleConfig, WorkspaceManifest};

use crate::error::BoundaryResult;
use crate::options::RuleOptions;
use crate::topology::WorkspaceTopology;

impl WorkspaceTopology {
    /// Build a topology from a workspace manifest.
    ///
    /// # Errors
    ///
    /// Returns a [`BoundaryError`](crate::BoundaryError) if the manifest
    /// describes an invalid topology.
    pub fn from_manifest(manifest: &WorkspaceManifest, workspace_root: &Path) -> BoundaryResult<Self> {
        manifest
            .projects
            .iter()
            .fold(
                Self::builder(manifest.namespace.as_str())
                    .workspace_root(workspace_root)
                    .libs_dir(manifest.libs_dir.as_str())
                    .apps_dir(manifest.apps_dir.as_str()),
                |builder, project| builder.project(project.name.as_str(), project.root.as_str()),
            )
            .build()
    }
}

impl RuleOptions {
    /// Compile rule options from the `[rules]` configuration table.
    ///
    /// # Errors
    ///
    /// Returns a [`BoundaryError`](crate::BoundaryError) if a pattern or
    /// lazy-load name is invalid.
    pub fn from_config(config: &RuleConfig) -> BoundaryResult<Self> {
        Self::new(config.allow.iter().cloned(), config.lazy_load.iter().cloned())
    }
}
