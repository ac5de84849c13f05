//! Bulwark Boundaries - Module boundary enforcement for multi-project workspaces.
//!
//! This crate decides, for a single import statement, whether it crosses a
//! forbidden boundary between the applications and libraries of a
//! workspace. It never reads files: the workspace topology and the rule
//! options are built once and passed in, and import statements arrive
//! already extracted by an external parser.
//!
//! # Key Concepts
//!
//! - **Topology**: the namespace prefix plus the root path of every
//!   application and library
//! - **Classification**: which root the importing file and the imported
//!   specifier belong to (longest root prefix wins)
//! - **Verdict**: the outcome of the ordered rule chain, either accept or a
//!   rejection with a fixed message
//!
//! # Example
//!
//! ```rust
//! use std::path::Path;
//! use bulwark_boundaries::{ModuleBoundaryRule, RuleOptions, WorkspaceTopology};
//!
//! let topology = WorkspaceTopology::builder("mycompany")
//!     .workspace_root("/proj/mycompany")
//!     .project("libgroup/mylib", "libs/libgroup/mylib")
//!     .project("myapp", "apps/myapp")
//!     .build()
//!     .unwrap();
//!
//! let rule = ModuleBoundaryRule::new(&topology, RuleOptions::default());
//! let file = Path::new("/proj/mycompany/apps/myapp/src/main.ts");
//!
//! assert!(rule.verdict(file, "@mycompany/libgroup/mylib").is_accepted());
//! assert_eq!(
//!     rule.verdict(file, "@mycompany/libgroup/mylib/deep").message(),
//!     Some("deep imports into libraries are forbidden"),
//! );
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

pub mod classify;
pub mod error;
#[cfg(feature = "config")]
mod from_config;
pub mod options;
mod path;
pub mod report;
pub mod rule;
pub mod rules;
pub mod topology;

pub use classify::{Classification, SpecifierShape, classify};
pub use error::{BoundaryError, BoundaryResult};
pub use options::RuleOptions;
pub use report::{Diagnostic, ImportStatement, SourceRange, report};
pub use rule::ModuleBoundaryRule;
pub use rules::{Verdict, ViolationKind, evaluate};
pub use topology::{Project, ProjectKind, Root, TopologyBuilder, WorkspaceTopology};
