//! `bulwark explain`: show how one import is classified and judged.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use bulwark_boundaries::{ModuleBoundaryRule, Root, SpecifierShape, Verdict, classify};
use serde::Serialize;

use crate::config_bridge::{load_workspace, rule_options};
use crate::formatter::{OutputFormat, print_json};
use crate::theme::Theme;
use crate::{RuleArgs, WorkspaceArgs};

#[derive(Serialize)]
struct Explanation<'a> {
    file: &'a Path,
    specifier: &'a str,
    shape: SpecifierShape,
    source_root: Option<&'a Root>,
    target_root: Option<&'a Root>,
    allow: &'a [String],
    #[serde(flatten)]
    verdict: &'a Verdict,
}

/// Classify and evaluate a single import; exit 1 if it is rejected.
///
/// `file` is resolved against the current directory.
pub(crate) fn run_explain(
    file: &Path,
    specifier: &str,
    workspace: &WorkspaceArgs,
    rules: &RuleArgs,
    format: OutputFormat,
) -> Result<ExitCode> {
    let loaded = load_workspace(workspace)?;
    let options = rule_options(&loaded.rules, rules)?;
    let file: PathBuf =
        std::path::absolute(file).with_context(|| format!("invalid file {}", file.display()))?;

    let rule = ModuleBoundaryRule::new(&loaded.topology, options);
    let classification = classify(rule.topology(), &file, specifier);
    let verdict = rule.verdict(&file, specifier);
    let allow = rule.options().allow_patterns();

    match format {
        OutputFormat::Json => print_json(&Explanation {
            file: &file,
            specifier,
            shape: classification.shape,
            source_root: classification.source,
            target_root: classification.target,
            allow,
            verdict: &verdict,
        })?,
        OutputFormat::Pretty => {
            let ungoverned = Theme::dimmed("(ungoverned)");
            let root_text =
                |root: Option<&Root>| root.map_or_else(|| ungoverned.clone(), ToString::to_string);
            println!("{}", Theme::kv("file", &file.display().to_string()));
            println!("{}", Theme::kv("specifier", specifier));
            println!("{}", Theme::kv("shape", classification.shape.as_str()));
            println!("{}", Theme::kv("source root", &root_text(classification.source)));
            println!("{}", Theme::kv("target root", &root_text(classification.target)));
            if !allow.is_empty() {
                println!("{}", Theme::kv("allow", &allow.join(", ")));
            }
            match &verdict {
                Verdict::Accept => println!("{}", Theme::success("accepted")),
                Verdict::Reject { kind, message } => {
                    println!("{}", Theme::error(&format!("{message} ({kind})")));
                },
            }
        },
    }

    Ok(if verdict.is_accepted() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}
