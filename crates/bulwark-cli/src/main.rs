//! Bulwark CLI - Module boundary checks for namespaced workspaces.
//!
//! Loads a workspace manifest, builds the topology, and checks import
//! statements fed to it as JSON. Diagnostics go to stdout; logs go to
//! stderr.
//!
//! Exit status: 0 when every import is accepted, 1 when at least one
//! violation was reported, 2 on usage or configuration errors.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::path::PathBuf;
use std::process::ExitCode;

use bulwark_telemetry::LogFormat;
use clap::{Args, Parser, Subcommand};

mod commands;
mod config_bridge;
mod formatter;
mod input;
mod theme;

use commands::{check, explain, topology};
use formatter::OutputFormat;
use theme::Theme;

/// Bulwark - enforce module boundaries between libraries and applications
#[derive(Parser)]
#[command(name = "bulwark")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format: pretty, compact or json
    #[arg(long, global = true, env = "BULWARK_LOG_FORMAT", default_value = "compact")]
    log_format: LogFormat,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Pretty)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check import statements against the workspace boundaries
    Check {
        #[command(flatten)]
        workspace: WorkspaceArgs,

        #[command(flatten)]
        rules: RuleArgs,

        /// JSON array or JSON Lines file of imports (`-` for stdin)
        #[arg(short, long, default_value = "-")]
        imports: String,
    },

    /// Print the resolved workspace topology
    Topology {
        #[command(flatten)]
        workspace: WorkspaceArgs,
    },

    /// Explain how one import is classified and judged
    Explain {
        /// Importing file
        file: PathBuf,

        /// Module specifier as written in the import
        specifier: String,

        #[command(flatten)]
        workspace: WorkspaceArgs,

        #[command(flatten)]
        rules: RuleArgs,
    },
}

/// Where to find the workspace.
#[derive(Args, Debug, Clone, Default)]
struct WorkspaceArgs {
    /// Workspace manifest (bulwark.toml, bulwark.json or .angular-cli.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Workspace root (defaults to the manifest's directory)
    #[arg(short = 'w', long)]
    workspace_root: Option<PathBuf>,
}

/// Rule options added on top of the manifest's `[rules]` table.
#[derive(Args, Debug, Clone, Default)]
struct RuleArgs {
    /// Extra allow-list glob (repeatable)
    #[arg(long = "allow", value_name = "GLOB")]
    allow: Vec<String>,

    /// Extra lazy-loaded library name (repeatable)
    #[arg(long = "lazy-load", value_name = "NAME")]
    lazy_load: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_config = config_bridge::to_log_config(cli.verbose, cli.log_format);
    if let Err(e) = bulwark_telemetry::setup_logging(&log_config) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let result = match cli.command {
        Commands::Check {
            workspace,
            rules,
            imports,
        } => check::run_check(&workspace, &rules, &imports, cli.format),
        Commands::Topology { workspace } => topology::run_topology(&workspace, cli.format),
        Commands::Explain {
            file,
            specifier,
            workspace,
            rules,
        } => explain::run_explain(&file, &specifier, &workspace, &rules, cli.format),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", Theme::error(&format!("{e:#}")));
            ExitCode::from(2)
        },
    }
}
