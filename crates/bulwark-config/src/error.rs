use thiserror::Error;

/// Errors raised while loading workspace configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No manifest was found in the searched directory.
    #[error("no workspace manifest found in {dir} (looked for {candidates})")]
    NotFound {
        /// Directory that was searched
        dir: String,
        /// File names that were tried
        candidates: String,
    },

    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    ReadError {
        /// Path of the file
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for the manifest schema.
    #[error("failed to parse {path}: {source}")]
    ParseError {
        /// Path of the file
        path: String,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// The file is not valid JSON for the manifest schema.
    #[error("failed to parse {path}: {source}")]
    JsonError {
        /// Path of the file
        path: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// A field holds an invalid value.
    #[error("invalid {field}: {message}")]
    ValidationError {
        /// Dotted path of the field
        field: String,
        /// What is wrong with it
        message: String,
    },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
