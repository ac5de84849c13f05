//! Bulwark Test - Shared test utilities for Bulwark.
//!
//! This crate provides the reference workspace used throughout the test
//! suites, plus helpers for building statements and on-disk workspaces.
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! bulwark-test.workspace = true
//! ```
//!
//! Then use in your tests:
//!
//! ```rust,ignore
//! use bulwark_test::{mycompany_topology, app_import};
//! use bulwark_boundaries::{ModuleBoundaryRule, RuleOptions};
//!
//! #[test]
//! fn test_deep_import() {
//!     let topology = mycompany_topology();
//!     let rule = ModuleBoundaryRule::new(&topology, RuleOptions::default());
//!     assert!(rule.check(&app_import("@mycompany/libgroup/mylib/blah")).is_some());
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]

pub mod prelude;

pub mod fixtures;
pub mod harness;

pub use fixtures::*;
pub use harness::*;
