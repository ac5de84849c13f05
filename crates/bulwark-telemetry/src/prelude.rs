//! Prelude module - commonly used types for convenient import.
//!
//! Use `use bulwark_telemetry::prelude::*;` to import all essential types.
//!
//! # Example
//!
//! ```rust,no_run
//! use bulwark_telemetry::prelude::*;
//!
//! # fn main() -> TelemetryResult<()> {
//! let config = LogConfig::new("debug")
//!     .with_format(LogFormat::Compact)
//!     .with_directive("bulwark_config=trace");
//!
//! setup_logging(&config)?;
//! tracing::info!("checking imports");
//! # Ok(())
//! # }
//! ```

// Errors
pub use crate::{TelemetryError, TelemetryResult};

// Logging configuration
pub use crate::{LogConfig, LogFormat};

// Setup functions
pub use crate::{setup_default_logging, setup_logging};
