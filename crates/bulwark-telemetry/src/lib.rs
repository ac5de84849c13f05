//! Bulwark Telemetry - Logging setup for the Bulwark boundary checker.
//!
//! Logs are always written to stderr so that diagnostics printed on stdout
//! stay machine-readable.
//!
//! # Example
//!
//! ```rust,no_run
//! use bulwark_telemetry::{LogConfig, LogFormat, setup_logging};
//!
//! # fn main() -> Result<(), bulwark_telemetry::TelemetryError> {
//! let config = LogConfig::new("warn")
//!     .with_format(LogFormat::Json)
//!     .with_directive("bulwark_boundaries=debug");
//!
//! setup_logging(&config)?;
//! tracing::debug!(target: "bulwark_boundaries", "visible");
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

mod error;
mod logging;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::{LogConfig, LogFormat, setup_default_logging, setup_logging};
