//! Boundary configuration error types.

use thiserror::Error;

/// Errors raised while building a topology or rule options.
///
/// Evaluation itself never fails; these only surface before any import is
/// checked.
#[derive(Debug, Error)]
pub enum BoundaryError {
    /// The namespace prefix is empty or contains a scope marker or separator.
    #[error("invalid namespace '{namespace}': {reason}")]
    InvalidNamespace {
        /// The rejected namespace
        namespace: String,
        /// Why it was rejected
        reason: String,
    },

    /// A base directory (libraries or applications) is empty.
    #[error("invalid {which} directory '{dir}'")]
    InvalidBaseDir {
        /// Which base directory (`libs` or `apps`)
        which: &'static str,
        /// The rejected directory
        dir: String,
    },

    /// A project has an empty name.
    #[error("project with root '{root}' has an empty name")]
    EmptyProjectName {
        /// Root of the unnamed project
        root: String,
    },

    /// A project root lies in neither the libraries nor the applications directory.
    #[error("project '{name}' has root '{root}' outside '{libs_dir}/' and '{apps_dir}/'")]
    UnknownProjectKind {
        /// Project name
        name: String,
        /// Offending root
        root: String,
        /// Libraries base directory
        libs_dir: String,
        /// Applications base directory
        apps_dir: String,
    },

    /// Two projects share a root.
    #[error("duplicate project root: {root}")]
    DuplicateRoot {
        /// The repeated root
        root: String,
    },

    /// Two projects share a name.
    #[error("duplicate project name: {name}")]
    DuplicateName {
        /// The repeated name
        name: String,
    },

    /// An allow-list glob failed to compile.
    #[error("invalid allow pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The rejected pattern
        pattern: String,
        /// Underlying glob error
        #[source]
        source: globset::Error,
    },

    /// A lazy-load entry is not a bare library name.
    #[error("invalid lazy-load name '{name}': {reason}")]
    InvalidLazyLoadName {
        /// The rejected name
        name: String,
        /// Why it was rejected
        reason: String,
    },
}

/// Result type for boundary configuration.
pub type BoundaryResult<T> = Result<T, BoundaryError>;
