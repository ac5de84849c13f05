//! Prelude module - commonly used fixtures for convenient import.
//!
//! Use `use bulwark_test::prelude::*;` in test modules.

pub use crate::fixtures::{
    APP_SOURCE_FILE, LIB_SOURCE_FILE, MYCOMPANY_PROJECTS, NAMESPACE, WORKSPACE_ROOT, app_import,
    import_from, lib_import, mycompany_topology, topology_with,
};
pub use crate::harness::{TempWorkspace, setup_test_logging, setup_test_logging_default};
