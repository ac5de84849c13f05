//! Manifest discovery and loading.
//!
//! A manifest is chosen by file name:
//! 1. `*.toml` is parsed as TOML
//! 2. `.angular-cli.json` is converted through [`crate::legacy`]
//! 3. any other `*.json` is parsed as JSON
//!
//! Every loaded manifest is validated before it is returned.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{ConfigError, ConfigResult};
use crate::legacy;
use crate::types::WorkspaceManifest;
use crate::validate;

/// Maximum manifest file size (1 MiB).
pub const MAX_CONFIG_FILE_SIZE: u64 = 1_048_576;

/// File names tried by [`discover`], in order.
pub const CANDIDATES: [&str; 3] = ["bulwark.toml", "bulwark.json", legacy::LEGACY_FILE_NAME];

/// Format of a manifest file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    /// `bulwark.toml`
    Toml,
    /// `bulwark.json`
    Json,
    /// `.angular-cli.json`
    AngularCli,
}

impl ManifestFormat {
    /// Pick the format for `path` from its file name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] for an unrecognized extension.
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
        if file_name == legacy::LEGACY_FILE_NAME {
            return Ok(Self::AngularCli);
        }
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            _ => Err(ConfigError::ValidationError {
                field: path.display().to_string(),
                message: "unsupported manifest format; expected a .toml or .json file".to_owned(),
            }),
        }
    }
}

/// Return the first manifest candidate that exists in `dir`.
///
/// # Errors
///
/// Returns [`ConfigError::NotFound`] if none of [`CANDIDATES`] exist.
pub fn discover(dir: &Path) -> ConfigResult<PathBuf> {
    for name in CANDIDATES {
        let candidate = dir.join(name);
        if candidate.is_file() {
            debug!(path = %candidate.display(), "found workspace manifest");
            return Ok(candidate);
        }
        debug!(path = %candidate.display(), "manifest candidate not found, skipping");
    }
    Err(ConfigError::NotFound {
        dir: dir.display().to_string(),
        candidates: CANDIDATES.join(", "),
    })
}

/// Load, parse, and validate a manifest file.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the file cannot be read, exceeds
/// [`MAX_CONFIG_FILE_SIZE`], fails to parse, or fails validation.
pub fn load_file(path: &Path) -> ConfigResult<WorkspaceManifest> {
    let format = ManifestFormat::from_path(path)?;
    let content = read_limited(path)?;
    let manifest = parse_str(&content, format, path)?;
    validate::validate(&manifest)?;

    info!(
        path = %path.display(),
        namespace = %manifest.namespace,
        projects = manifest.projects.len(),
        "loaded workspace manifest"
    );
    Ok(manifest)
}

/// Parse manifest text in the given format without validating it.
///
/// `origin` is only used in error messages.
///
/// # Errors
///
/// Returns [`ConfigError::ParseError`] or [`ConfigError::JsonError`] on
/// malformed input.
pub fn parse_str(content: &str, format: ManifestFormat, origin: &Path) -> ConfigResult<WorkspaceManifest> {
    match format {
        ManifestFormat::Toml => toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: origin.display().to_string(),
            source: e,
        }),
        ManifestFormat::Json => serde_json::from_str(content).map_err(|e| ConfigError::JsonError {
            path: origin.display().to_string(),
            source: e,
        }),
        ManifestFormat::AngularCli => legacy::from_str(content, origin),
    }
}

fn read_limited(path: &Path) -> ConfigResult<String> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    // Check size after reading to avoid TOCTOU between stat and read.
    if content.len() as u64 > MAX_CONFIG_FILE_SIZE {
        return Err(ConfigError::ValidationError {
            field: path.display().to_string(),
            message: format!(
                "manifest is {} bytes, exceeding the {} byte limit",
                content.len(),
                MAX_CONFIG_FILE_SIZE
            ),
        });
    }
    Ok(content)
}
