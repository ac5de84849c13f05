//! `bulwark topology`: print the resolved workspace.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use bulwark_boundaries::Project;
use serde::Serialize;

use crate::WorkspaceArgs;
use crate::config_bridge::load_workspace;
use crate::formatter::{OutputFormat, print_json};
use crate::theme::Theme;

#[derive(Serialize)]
struct TopologyView<'a> {
    manifest: &'a PathBuf,
    workspace_root: &'a PathBuf,
    namespace: &'a str,
    libs_dir: &'a str,
    apps_dir: &'a str,
    projects: &'a [Project],
    libraries: Vec<&'a str>,
    applications: Vec<&'a str>,
}

/// Print every project root, longest first, with its kind and import name.
pub(crate) fn run_topology(workspace: &WorkspaceArgs, format: OutputFormat) -> Result<ExitCode> {
    let loaded = load_workspace(workspace)?;
    let topology = &loaded.topology;

    match format {
        OutputFormat::Json => print_json(&TopologyView {
            manifest: &loaded.manifest_path,
            workspace_root: &loaded.workspace_root,
            namespace: topology.namespace(),
            libs_dir: topology.libs_dir(),
            apps_dir: topology.apps_dir(),
            projects: topology.projects(),
            libraries: topology.library_names().collect(),
            applications: topology.application_names().collect(),
        })?,
        OutputFormat::Pretty => {
            println!(
                "{}",
                Theme::header(&format!(
                    "Workspace {} ({})",
                    topology.scope(),
                    loaded.workspace_root.display()
                ))
            );
            println!("{}", Theme::dimmed(&loaded.manifest_path.display().to_string()));
            println!();

            let width = topology
                .projects()
                .iter()
                .map(|p| p.root.as_str().len())
                .max()
                .unwrap_or(0);
            for project in topology.projects() {
                println!(
                    "  {:<width$}  {:<11}  {}/{}",
                    project.root.as_str(),
                    Theme::kind(project.kind),
                    topology.scope(),
                    project.name
                );
            }
            if topology.projects().is_empty() {
                println!("  {}", Theme::dimmed("(no projects)"));
            }
            println!();
            println!(
                "{}",
                Theme::dimmed(&format!(
                    "{} libraries, {} applications",
                    topology.library_names().count(),
                    topology.application_names().count()
                ))
            );
        },
    }

    Ok(ExitCode::SUCCESS)
}
