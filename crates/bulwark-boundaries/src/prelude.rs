//! Prelude module - commonly used types for convenient import.
//!
//! Use `use bulwark_boundaries::prelude::*;` to import all essential types.
//!
//! # Example
//!
//! ```rust
//! use bulwark_boundaries::prelude::*;
//!
//! # fn main() -> BoundaryResult<()> {
//! let topology = WorkspaceTopology::builder("mycompany")
//!     .project("libgroup/mylib", "libs/libgroup/mylib")
//!     .project("myapp", "apps/myapp")
//!     .build()?;
//!
//! let options = RuleOptions::new(["@mycompany/libgroup/mylib/testing"], ["libgroup/mylib"])?;
//! let rule = ModuleBoundaryRule::new(&topology, options);
//!
//! let statement = ImportStatement::new(
//!     "apps/myapp/src/main.ts",
//!     "@mycompany/libgroup/mylib",
//!     SourceRange::new(7, 27),
//! );
//! let diagnostic = rule.check(&statement).expect("lazy-loaded import is rejected");
//! assert_eq!(diagnostic.kind, ViolationKind::LazyLoadedImport);
//! # Ok(())
//! # }
//! ```

// Errors
pub use crate::{BoundaryError, BoundaryResult};

// Topology
pub use crate::{Project, ProjectKind, Root, TopologyBuilder, WorkspaceTopology};

// Classification and evaluation
pub use crate::{Classification, SpecifierShape, Verdict, ViolationKind, classify, evaluate};

// Configuration
pub use crate::RuleOptions;

// Reporting
pub use crate::{Diagnostic, ImportStatement, ModuleBoundaryRule, SourceRange, report};
