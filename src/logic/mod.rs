//! Pure transformations from Homebrew command output into typed shapes.
//!
//! Nothing in this module runs a command: callers supply the captured
//! stdout of `brew list --versions` and `brew services info --all --json`
//! and get back the shapes from [`crate::state`].

pub mod list;
pub mod services;
pub mod sort;

// Re-export public APIs to keep call sites on crate::logic::*
pub use list::{apply_service_status, parse_list_versions, snapshot};
pub use services::{parse_services_info, status_by_name};
pub use sort::sort_by_service_status;
