//! Manifest validation.
//!
//! Checks that a deserialized [`WorkspaceManifest`](crate::WorkspaceManifest)
//! describes a usable workspace and that cross-field invariants hold.

use std::collections::HashSet;

use crate::error::{ConfigError, ConfigResult};
use crate::types::WorkspaceManifest;

/// Validate a deserialized manifest.
///
/// # Errors
///
/// Returns the first validation error found.
pub fn validate(manifest: &WorkspaceManifest) -> ConfigResult<()> {
    validate_namespace(manifest)?;
    validate_base_dirs(manifest)?;
    validate_projects(manifest)?;
    validate_rules(manifest)?;
    Ok(())
}

fn validate_namespace(manifest: &WorkspaceManifest) -> ConfigResult<()> {
    let ns = manifest.namespace.as_str();
    if ns.is_empty() {
        return Err(invalid("namespace", "must not be empty".to_owned()));
    }
    if ns.contains(['@', '/', '\\']) || ns.chars().any(char::is_whitespace) {
        return Err(invalid(
            "namespace",
            format!("'{ns}' must be a bare scope name without '@', '/' or whitespace"),
        ));
    }
    Ok(())
}

fn validate_base_dirs(manifest: &WorkspaceManifest) -> ConfigResult<()> {
    for (field, dir) in [("libs_dir", &manifest.libs_dir), ("apps_dir", &manifest.apps_dir)] {
        if normalize_prefix(dir).is_empty() {
            return Err(invalid(field, "must not be empty".to_owned()));
        }
    }
    if normalize_prefix(&manifest.libs_dir) == normalize_prefix(&manifest.apps_dir) {
        return Err(invalid(
            "apps_dir",
            format!("must differ from libs_dir ('{}')", manifest.libs_dir),
        ));
    }
    Ok(())
}

fn validate_projects(manifest: &WorkspaceManifest) -> ConfigResult<()> {
    let libs = format!("{}/", normalize_prefix(&manifest.libs_dir));
    let apps = format!("{}/", normalize_prefix(&manifest.apps_dir));
    let mut names = HashSet::new();
    let mut roots = HashSet::new();

    for (idx, project) in manifest.projects.iter().enumerate() {
        let field = format!("projects[{idx}]");
        if project.name.trim().is_empty() {
            return Err(invalid(&format!("{field}.name"), "must not be empty".to_owned()));
        }
        if !names.insert(project.name.as_str()) {
            return Err(invalid(
                &format!("{field}.name"),
                format!("duplicate project name '{}'", project.name),
            ));
        }

        let root = normalize_prefix(&project.root);
        let in_libs = root.starts_with(&libs);
        let in_apps = root.starts_with(&apps);
        if in_libs == in_apps {
            return Err(invalid(
                &format!("{field}.root"),
                format!(
                    "'{}' must be under exactly one of '{}' or '{}'",
                    project.root, manifest.libs_dir, manifest.apps_dir
                ),
            ));
        }
        if !roots.insert(root) {
            return Err(invalid(
                &format!("{field}.root"),
                format!("duplicate project root '{}'", project.root),
            ));
        }
    }
    Ok(())
}

fn validate_rules(manifest: &WorkspaceManifest) -> ConfigResult<()> {
    for (idx, pattern) in manifest.rules.allow.iter().enumerate() {
        if pattern.trim().is_empty() {
            return Err(invalid(&format!("rules.allow[{idx}]"), "must not be empty".to_owned()));
        }
    }
    for (idx, name) in manifest.rules.lazy_load.iter().enumerate() {
        if name.trim_matches('/').trim().is_empty() {
            return Err(invalid(
                &format!("rules.lazy_load[{idx}]"),
                "must not be empty".to_owned(),
            ));
        }
    }
    Ok(())
}

/// `/` separators, no leading `./` or `/`, no trailing `/`. Matches how the
/// topology normalizes roots and base directories.
fn normalize_prefix(raw: &str) -> String {
    let slashed = raw.trim().replace('\\', "/");
    let mut rest = slashed.as_str();
    loop {
        if let Some(stripped) = rest.strip_prefix("./") {
            rest = stripped;
        } else if let Some(stripped) = rest.strip_prefix('/') {
            rest = stripped;
        } else {
            break;
        }
    }
    rest.trim_end_matches('/').to_owned()
}

fn invalid(field: &str, message: String) -> ConfigError {
    ConfigError::ValidationError {
        field: field.to_owned(),
        message,
    }
}
