#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Workspace and rule configuration for Bulwark.
//!
//! This crate provides a single [`WorkspaceManifest`] type describing the
//! namespace prefix, the libraries and applications of a workspace, and
//! the options of the module boundary rule.
//!
//! # Usage
//!
//! ```rust,no_run
//! use bulwark_config::WorkspaceManifest;
//!
//! let (path, manifest) = WorkspaceManifest::discover(std::path::Path::new(".")).unwrap();
//! println!("{}: @{} with {} projects", path.display(), manifest.namespace, manifest.projects.len());
//! ```
//!
//! # File Formats
//!
//! Discovery looks in a directory for, in order:
//!
//! 1. `bulwark.toml`
//! 2. `bulwark.json`
//! 3. `.angular-cli.json` (legacy; `project.npmScope` and `apps[].root`)
//!
//! # Design
//!
//! This crate has **no dependencies on other internal bulwark crates**.
//! Conversion into topology and rule types happens in `bulwark-boundaries`
//! behind its `config` feature.

/// Configuration error types.
pub mod error;
/// Legacy `.angular-cli.json` support.
pub mod legacy;
/// Configuration file discovery and loading.
pub mod loader;
/// Configuration struct definitions.
pub mod types;
/// Configuration validation rules.
pub mod validate;

// Re-export primary types at the crate root.
pub use error::{ConfigError, ConfigResult};
pub use loader::ManifestFormat;
pub use types::*;

impl WorkspaceManifest {
    /// Find and load the manifest in `dir`.
    ///
    /// See [`loader::discover`] for the search order.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if no manifest exists, or if the one found
    /// is malformed or fails validation.
    pub fn discover(dir: &std::path::Path) -> ConfigResult<(std::path::PathBuf, Self)> {
        let path = loader::discover(dir)?;
        let manifest = loader::load_file(&path)?;
        Ok((path, manifest))
    }

    /// Load a manifest from a single file, choosing the format by name.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read, parsed, or fails
    /// validation.
    pub fn load_file(path: &std::path::Path) -> ConfigResult<Self> {
        loader::load_file(path)
    }
}
