//! Authored build rule sets for the Drift plugin modules
//!
//! One source file per module, mirroring the plugin's module layout, plus a
//! registry the orchestrator uses to look rule sets up by name. The rule
//! sets are static data; all conditional behavior lives in the predicates
//! they declare against `driftbuild-core`.

pub mod drift;
pub mod drift_editor;
pub mod drift_http;
pub mod error_reporter;
pub mod json_archive;
pub mod rapid_json;
pub mod registry;

#[cfg(test)]
mod resolution_tests;

pub use registry::ModuleRegistry;
