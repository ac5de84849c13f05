//! Bridge from command-line arguments and `bulwark_config` to core types.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bulwark_boundaries::{RuleOptions, WorkspaceTopology};
use bulwark_config::{RuleConfig, WorkspaceManifest};
use bulwark_telemetry::{LogConfig, LogFormat};
use tracing::debug;

use crate::{RuleArgs, WorkspaceArgs};

/// A loaded manifest with its topology built.
#[derive(Debug)]
pub(crate) struct LoadedWorkspace {
    /// File the manifest was read from.
    pub(crate) manifest_path: PathBuf,
    /// Absolute workspace root.
    pub(crate) workspace_root: PathBuf,
    /// Built topology.
    pub(crate) topology: WorkspaceTopology,
    /// Rule options from the manifest, before command-line additions.
    pub(crate) rules: RuleConfig,
}

/// Logging configuration for the CLI: warnings only unless `--verbose`.
pub(crate) fn to_log_config(verbose: bool, format: LogFormat) -> LogConfig {
    let level = if verbose { "debug" } else { "warn" };
    let config = LogConfig::new(level).with_format(format);
    if std::io::stderr().is_terminal() {
        config
    } else {
        config.without_ansi()
    }
}

/// Find and load the manifest, then build the topology.
///
/// Without `--config` the manifest is discovered in `--workspace-root`, or
/// in the current directory. Without `--workspace-root` the workspace root
/// is the manifest's directory.
pub(crate) fn load_workspace(args: &WorkspaceArgs) -> Result<LoadedWorkspace> {
    let (manifest_path, manifest) = if let Some(path) = &args.config {
        let manifest = WorkspaceManifest::load_file(path)
            .with_context(|| format!("failed to load {}", path.display()))?;
        (path.clone(), manifest)
    } else {
        let dir = match &args.workspace_root {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().context("failed to read current directory")?,
        };
        WorkspaceManifest::discover(&dir).context("failed to load workspace manifest")?
    };

    let root = args
        .workspace_root
        .clone()
        .or_else(|| manifest_path.parent().map(Path::to_path_buf))
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from("."));
    let workspace_root = std::path::absolute(&root)
        .with_context(|| format!("invalid workspace root {}", root.display()))?;

    let topology = WorkspaceTopology::from_manifest(&manifest, &workspace_root)
        .with_context(|| format!("invalid workspace in {}", manifest_path.display()))?;

    debug!(
        manifest = %manifest_path.display(),
        workspace_root = %workspace_root.display(),
        projects = topology.projects().len(),
        "Loaded workspace"
    );

    Ok(LoadedWorkspace {
        manifest_path,
        workspace_root,
        topology,
        rules: manifest.rules,
    })
}

/// Merge command-line rule flags into the manifest's rules and compile them.
pub(crate) fn rule_options(rules: &RuleConfig, extra: &RuleArgs) -> Result<RuleOptions> {
    let mut merged = rules.clone();
    merged.extend(extra.allow.iter().cloned(), extra.lazy_load.iter().cloned());
    RuleOptions::from_config(&merged).context("invalid rule options")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_config_levels() {
        assert_eq!(to_log_config(false, LogFormat::Json).level, "warn");
        let verbose = to_log_config(true, LogFormat::Pretty);
        assert_eq!(verbose.level, "debug");
        assert_eq!(verbose.format, LogFormat::Pretty);
    }

    #[test]
    fn test_rule_options_merge_flags() {
        let rules = RuleConfig {
            allow: vec!["@acme/a/testing".to_owned()],
            lazy_load: Vec::new(),
        };
        let extra = RuleArgs {
            allow: vec!["@acme/b/*".to_owned()],
            lazy_load: vec!["admin".to_owned()],
        };
        let options = rule_options(&rules, &extra).unwrap();
        assert!(options.is_allowed("@acme/a/testing"));
        assert!(options.is_allowed("@acme/b/x"));
        assert!(options.is_lazy_loaded("admin"));
    }

    #[test]
    fn test_rule_options_reject_bad_glob() {
        let extra = RuleArgs {
            allow: vec!["@acme/[".to_owned()],
            lazy_load: Vec::new(),
        };
        assert!(rule_options(&RuleConfig::default(), &extra).is_err());
    }
}
